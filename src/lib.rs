//! Exact, reversible numbering of deals: ordered splits of 52 elements into
//! four groups of 13.
//!
//! The codec knows nothing about cards. Callers map their own card vocabulary
//! onto the element ids `0..52` and store or transmit the resulting index.

pub mod combinatorics;
pub mod error;
pub mod partition;
pub mod partition_codec;

pub use combinatorics::{checked_choose, choose, rank_combination, unrank_combination};
pub use error::{CodecError, Result};
pub use partition::{GROUP_SIZE, GROUPS, Partition, UNIVERSE};
pub use partition_codec::{DEAL_CODEC, PartitionCodec, decode_deal, encode_deal, parse_index};
