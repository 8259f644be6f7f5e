use crate::error::{CodecError, Result};
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::ops::Index;

/// Number of elements being partitioned.
pub const UNIVERSE: usize = 52;
/// Number of elements in every group.
pub const GROUP_SIZE: usize = 13;
/// Number of groups in a partition.
pub const GROUPS: usize = 4;

pub type Group = [usize; GROUP_SIZE];

/// An ordered split of `[0, 52)` into four disjoint groups of 13.
///
/// Each group is kept in ascending order. Group order matters: swapping two
/// groups yields a different partition with a different index.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Partition {
    groups: [Group; GROUPS],
}

impl Partition {
    /// Build a partition from four groups, given in any element order.
    ///
    /// # Errors
    /// [`CodecError::InvalidCombinationSize`] if a group does not hold exactly
    /// 13 elements, [`CodecError::ValueOutOfDomain`] for elements outside the
    /// universe and [`CodecError::InvalidPartition`] if the groups overlap.
    pub fn new<G: AsRef<[usize]>>(groups: [G; GROUPS]) -> Result<Self> {
        let mut owners = owners(&groups)?;
        for &element in groups[GROUPS - 1].as_ref() {
            if owners[element].is_some() {
                return Err(CodecError::InvalidPartition {
                    element,
                    reason: "element appears more than once",
                });
            }
            owners[element] = Some(GROUPS - 1);
        }
        Self::from_owners(&owners)
    }

    /// Build a partition from its first three groups; the fourth group is
    /// whatever is left over.
    pub fn from_leading_groups<G: AsRef<[usize]>>(groups: [G; GROUPS - 1]) -> Result<Self> {
        let owners = owners(&groups)?;
        Self::from_owners(&owners)
    }

    /// A uniformly random partition.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut elements: Vec<usize> = (0..UNIVERSE).collect();
        elements.shuffle(rng);
        let mut groups = [[0; GROUP_SIZE]; GROUPS];
        for (group, chunk) in groups.iter_mut().zip(elements.chunks_exact(GROUP_SIZE)) {
            group.copy_from_slice(chunk);
            group.sort_unstable();
        }
        Self { groups }
    }

    /// Assemble a partition whose groups are already known to be ascending
    /// and to cover the universe.
    pub(crate) fn from_sorted_groups(groups: [Group; GROUPS]) -> Self {
        debug_assert!(groups.iter().flatten().count() == UNIVERSE);
        debug_assert!(groups.iter().all(|g| g.windows(2).all(|w| w[0] < w[1])));
        Self { groups }
    }

    fn from_owners(owners: &[Option<usize>; UNIVERSE]) -> Result<Self> {
        let mut groups = [[0; GROUP_SIZE]; GROUPS];
        let mut lens = [0usize; GROUPS];
        for (element, owner) in owners.iter().enumerate() {
            let owner = owner.unwrap_or(GROUPS - 1);
            if lens[owner] == GROUP_SIZE {
                return Err(CodecError::InvalidPartition {
                    element,
                    reason: "group holds more than 13 elements",
                });
            }
            groups[owner][lens[owner]] = element;
            lens[owner] += 1;
        }
        Ok(Self { groups })
    }

    pub fn groups(&self) -> &[Group; GROUPS] {
        &self.groups
    }

    pub fn group(&self, index: usize) -> &Group {
        &self.groups[index]
    }

    /// Which group holds `element`, or `None` for elements outside the universe.
    pub fn owner_of(&self, element: usize) -> Option<usize> {
        self.groups
            .iter()
            .position(|group| group.binary_search(&element).is_ok())
    }
}

impl Index<usize> for Partition {
    type Output = Group;

    fn index(&self, index: usize) -> &Self::Output {
        &self.groups[index]
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, element) in group.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{element}")?;
            }
        }
        Ok(())
    }
}

/// Check sizes and values of every group and record, per element, which group
/// claims it. The first three groups must be pairwise disjoint; a fourth
/// group is only checked for size and range since it is fully determined by
/// the others.
pub(crate) fn owners<G: AsRef<[usize]>>(groups: &[G]) -> Result<[Option<usize>; UNIVERSE]> {
    for group in groups {
        let group = group.as_ref();
        if group.len() != GROUP_SIZE {
            return Err(CodecError::InvalidCombinationSize {
                expected: GROUP_SIZE,
                actual: group.len(),
            });
        }
        if let Some(&value) = group.iter().find(|&&value| value >= UNIVERSE) {
            return Err(CodecError::ValueOutOfDomain {
                value,
                domain: UNIVERSE,
            });
        }
    }

    let mut owners = [None; UNIVERSE];
    for (index, group) in groups.iter().take(GROUPS - 1).enumerate() {
        for &element in group.as_ref() {
            if owners[element].is_some() {
                return Err(CodecError::InvalidPartition {
                    element,
                    reason: "element appears more than once",
                });
            }
            owners[element] = Some(index);
        }
    }
    Ok(owners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use rand::{SeedableRng, rngs::StdRng};

    fn run(start: usize) -> Vec<usize> {
        (start..start + GROUP_SIZE).collect()
    }

    #[test]
    fn new_sorts_groups() {
        let mut first = run(0);
        first.reverse();
        let partition = Partition::new([first, run(13), run(26), run(39)]).unwrap();
        assert_eq!(partition[0].to_vec(), run(0));
    }

    #[test]
    fn leading_groups_leave_the_complement() {
        let partition = Partition::from_leading_groups([run(39), run(26), run(13)]).unwrap();
        assert_eq!(partition[3].to_vec(), run(0));
    }

    #[test]
    fn rejects_short_group() {
        assert_eq!(
            Partition::new([run(0), run(13), run(26), (39..51).collect()]),
            Err(CodecError::InvalidCombinationSize {
                expected: 13,
                actual: 12
            })
        );
    }

    #[test]
    fn rejects_element_outside_universe() {
        assert_eq!(
            Partition::new([run(0), run(13), run(26), run(40)]),
            Err(CodecError::ValueOutOfDomain {
                value: 52,
                domain: 52
            })
        );
    }

    #[test]
    fn rejects_overlapping_groups() {
        assert!(matches!(
            Partition::from_leading_groups([run(0), run(12), run(26)]),
            Err(CodecError::InvalidPartition { element: 12, .. })
        ));
    }

    #[test]
    fn rejects_duplicate_within_group() {
        let mut group = run(0);
        group[12] = 0;
        assert!(matches!(
            Partition::from_leading_groups([group, run(13), run(26)]),
            Err(CodecError::InvalidPartition { element: 0, .. })
        ));
    }

    #[test]
    fn rejects_fourth_group_that_is_not_the_complement() {
        assert!(matches!(
            Partition::new([run(0), run(13), run(26), run(26)]),
            Err(CodecError::InvalidPartition { .. })
        ));
    }

    #[test]
    fn random_partitions_cover_the_universe() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let partition = Partition::random(&mut rng);
            let mut elements: Vec<usize> = partition.groups().iter().flatten().copied().collect();
            elements.sort_unstable();
            assert_eq!(elements, (0..UNIVERSE).collect::<Vec<_>>());
            for group in partition.groups() {
                assert!(group.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn owner_of_finds_group() {
        let partition = Partition::new([run(13), run(0), run(39), run(26)]).unwrap();
        assert_eq!(partition.owner_of(0), Some(1));
        assert_eq!(partition.owner_of(25), Some(0));
        assert_eq!(partition.owner_of(51), Some(2));
        assert_eq!(partition.owner_of(30), Some(3));
        assert_eq!(partition.owner_of(52), None);
    }

    #[test]
    fn display_lists_groups() {
        let partition = Partition::new([run(0), run(13), run(26), run(39)]).unwrap();
        assert_snapshot!(partition.to_string(), @r"
        0 1 2 3 4 5 6 7 8 9 10 11 12
        13 14 15 16 17 18 19 20 21 22 23 24 25
        26 27 28 29 30 31 32 33 34 35 36 37 38
        39 40 41 42 43 44 45 46 47 48 49 50 51
        ");
    }
}
