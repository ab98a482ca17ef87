use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    #[error("failed to allocate a test array of {len} elements")]
    Alloc { len: usize },

    #[error("sort failed: {sort} left index {index} greater than its successor")]
    Unsorted { sort: String, index: usize },

    #[error("invalid element count {len}, must be at most {max}")]
    InvalidLength { len: usize, max: usize },
}

impl BenchError {
    /// Verification failures point at a broken sort rather than a bad environment.
    pub fn is_verification_failure(&self) -> bool {
        matches!(self, BenchError::Unsorted { .. })
    }
}
