use dealbase::{choose, rank_combination, unrank_combination};
use itertools::Itertools;

#[test]
fn six_choose_three_covers_every_index_once() {
    let mut ranks: Vec<u128> = (0..6)
        .combinations(3)
        .map(|combo| rank_combination(&combo, 6).unwrap())
        .collect();
    ranks.sort_unstable();
    assert_eq!(ranks, (0..20).collect::<Vec<u128>>());
}

#[test]
fn ranks_grow_with_the_squashed_order() {
    // Compare by the largest element first, then the next largest.
    let mut combos: Vec<Vec<usize>> = (0..8).combinations(4).collect();
    combos.sort_by(|a, b| a.iter().rev().cmp(b.iter().rev()));
    let ranks: Vec<u128> = combos
        .iter()
        .map(|combo| rank_combination(combo, 8).unwrap())
        .collect();
    assert_eq!(ranks, (0..choose(8, 4)).collect::<Vec<u128>>());
}

#[test]
fn deal_sized_boundaries() {
    for n in [26, 39, 52] {
        let total = choose(n as i64, 13);
        let top: Vec<usize> = (n - 13..n).collect();
        assert_eq!(rank_combination(&top, n).unwrap(), total - 1);
        assert_eq!(unrank_combination(total - 1, n, 13).unwrap(), top);
        assert_eq!(unrank_combination(0, n, 13).unwrap(), (0..13).collect::<Vec<_>>());
    }
}
