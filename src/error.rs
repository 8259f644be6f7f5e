use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodecError>;

/// Every way a combination, partition or index can be rejected.
///
/// None of these are transient: the codec is a pure function of its input, so
/// an error always means the caller handed over bad data.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A combination or group has the wrong number of elements.
    #[error("expected {expected} elements, got {actual}")]
    InvalidCombinationSize { expected: usize, actual: usize },
    /// An element lies outside `[0, domain)`.
    #[error("element {value} is outside the domain [0, {domain})")]
    ValueOutOfDomain { value: usize, domain: usize },
    /// The element at `position` is not greater than its predecessor.
    #[error("sequence is not strictly ascending at position {position}")]
    NotStrictlyAscending { position: usize },
    /// The domain is too large for exact `u128` arithmetic.
    #[error("domain size {domain} exceeds the supported maximum")]
    DomainTooLarge { domain: usize },
    /// A deal was given with something other than 3 or 4 groups.
    #[error("expected 3 or 4 groups, got {actual}")]
    InvalidGroupCount { actual: usize },
    /// Groups overlap, or do not cover the universe.
    #[error("invalid partition at element {element}: {reason}")]
    InvalidPartition { element: usize, reason: &'static str },
    #[error("index {index} is out of range [0, {bound})")]
    IndexOutOfRange { index: u128, bound: u128 },
    #[error("index {index} is negative")]
    NegativeIndex { index: String },
    #[error("malformed index {input:?}")]
    MalformedIndex { input: String },
}
