use crate::combinatorics::{choose, rank_combination, unrank_combination};
use crate::error::{CodecError, Result};
use crate::partition::{GROUP_SIZE, GROUPS, Group, Partition, UNIVERSE, owners};
use log::{debug, trace};

/// Each group is ranked among the elements the earlier groups left over.
const DOMAINS: [usize; 3] = [UNIVERSE, UNIVERSE - GROUP_SIZE, UNIVERSE - 2 * GROUP_SIZE];

pub static DEAL_CODEC: PartitionCodec = PartitionCodec::new();

/// Bijection between [`Partition`]s and the integers `[0, total_deals())`.
/// The first group is the most significant digit; the fourth is never ranked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartitionCodec {
    radices: [u128; 3],
    total: u128,
}

impl PartitionCodec {
    pub const fn new() -> Self {
        let radices = [
            choose(DOMAINS[0] as i64, GROUP_SIZE as i64),
            choose(DOMAINS[1] as i64, GROUP_SIZE as i64),
            choose(DOMAINS[2] as i64, GROUP_SIZE as i64),
        ];
        Self {
            radices,
            total: radices[0] * radices[1] * radices[2],
        }
    }

    /// `C(52,13)`, `C(39,13)` and `C(26,13)`.
    pub fn radices(&self) -> [u128; 3] {
        self.radices
    }

    pub fn total_deals(&self) -> u128 {
        self.total
    }

    /// Index of a deal given as three or four groups. A fourth group is only
    /// checked for size and range.
    pub fn encode<G: AsRef<[usize]>>(&self, groups: &[G]) -> Result<u128> {
        if !(GROUPS - 1..=GROUPS).contains(&groups.len()) {
            debug!("rejecting deal with {} groups", groups.len());
            return Err(CodecError::InvalidGroupCount {
                actual: groups.len(),
            });
        }
        let owners = owners(groups)?;
        self.encode_owners(&owners)
    }

    pub fn encode_partition(&self, partition: &Partition) -> Result<u128> {
        self.encode(&partition.groups()[..GROUPS - 1])
    }

    fn encode_owners(&self, owners: &[Option<usize>; UNIVERSE]) -> Result<u128> {
        let mut reduced: [Vec<usize>; 3] = Default::default();
        let mut claimed = 0;
        let mut counts = [0usize; 3];
        for (element, owner) in owners.iter().enumerate() {
            let Some(owner) = *owner else {
                continue;
            };
            let earlier: usize = counts[..owner].iter().sum();
            reduced[owner].push(element - earlier);
            counts[owner] += 1;
            claimed += 1;
        }
        debug_assert_eq!(claimed, 3 * GROUP_SIZE);

        let mut index = 0u128;
        for ((group, domain), radix) in reduced.iter().zip(DOMAINS).zip(self.radices) {
            let rank = rank_combination(group, domain)?;
            trace!("group in domain {domain} has rank {rank}");
            index = index * radix + rank;
        }
        Ok(index)
    }

    pub fn decode(&self, index: u128) -> Result<Partition> {
        if index >= self.total {
            debug!("rejecting deal index {index}");
            return Err(CodecError::IndexOutOfRange {
                index,
                bound: self.total,
            });
        }

        let mut ranks = [0u128; 3];
        let mut rest = index;
        for (rank, radix) in ranks.iter_mut().zip(self.radices).rev() {
            *rank = rest % radix;
            rest /= radix;
        }
        debug_assert_eq!(rest, 0);
        trace!("deal {index} has group ranks {ranks:?}");

        let first = unrank_combination(ranks[0], DOMAINS[0], GROUP_SIZE)?;
        let second = unrank_combination(ranks[1], DOMAINS[1], GROUP_SIZE)?;
        let third = unrank_combination(ranks[2], DOMAINS[2], GROUP_SIZE)?;

        let mut groups: [Group; GROUPS] = [[0; GROUP_SIZE]; GROUPS];
        let mut lens = [0usize; GROUPS];
        for element in 0..UNIVERSE {
            let [a, b, c, _] = lens;
            let owner = if a < GROUP_SIZE && first[a] == element {
                0
            } else if b < GROUP_SIZE && second[b] == element - a {
                1
            } else if c < GROUP_SIZE && third[c] == element - a - b {
                2
            } else {
                3
            };
            if lens[owner] == GROUP_SIZE {
                return Err(CodecError::InvalidPartition {
                    element,
                    reason: "group holds more than 13 elements",
                });
            }
            groups[owner][lens[owner]] = element;
            lens[owner] += 1;
        }
        if let Some(short) = lens.iter().position(|&len| len != GROUP_SIZE) {
            return Err(CodecError::InvalidCombinationSize {
                expected: GROUP_SIZE,
                actual: lens[short],
            });
        }

        Ok(Partition::from_sorted_groups(groups))
    }

    /// Parse a decimal deal index, rejecting negative and out-of-range values.
    pub fn parse_index(&self, text: &str) -> Result<u128> {
        let input = text.trim();
        let malformed = || CodecError::MalformedIndex {
            input: input.to_string(),
        };
        if let Some(digits) = input.strip_prefix('-') {
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            if digits.bytes().all(|b| b == b'0') {
                return Ok(0);
            }
            return Err(CodecError::NegativeIndex {
                index: input.to_string(),
            });
        }
        let index: u128 = input.parse().map_err(|_| malformed())?;
        if index >= self.total {
            return Err(CodecError::IndexOutOfRange {
                index,
                bound: self.total,
            });
        }
        Ok(index)
    }
}

impl Default for PartitionCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// Index of a deal given as three or four groups, using [`DEAL_CODEC`].
pub fn encode_deal<G: AsRef<[usize]>>(groups: &[G]) -> Result<u128> {
    DEAL_CODEC.encode(groups)
}

/// The deal with the given index, using [`DEAL_CODEC`].
pub fn decode_deal(index: u128) -> Result<Partition> {
    DEAL_CODEC.decode(index)
}

pub fn parse_index(text: &str) -> Result<u128> {
    DEAL_CODEC.parse_index(text)
}
