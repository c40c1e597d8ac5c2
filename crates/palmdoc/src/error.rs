use std::collections::TryReserveError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The compressed stream cannot be decoded. `offset` is the position of
    /// the first byte of the offending token.
    #[error("corrupt stream at offset {offset}: {kind}")]
    CorruptStream { offset: usize, kind: Corruption },

    #[error("out of memory while growing output buffer")]
    OutOfMemory(#[from] TryReserveError),

    #[error("unsupported record compression type {0:#06x}")]
    UnsupportedCompression(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Corruption {
    #[error("literal run of {needed} bytes but only {remaining} remain")]
    TruncatedRun { needed: usize, remaining: usize },

    #[error("back-reference is missing its second byte")]
    TruncatedBackReference,

    #[error("back-reference with zero distance")]
    ZeroDistance,

    #[error("back-reference distance {distance} exceeds {available} decoded bytes")]
    DistanceOutOfRange { distance: usize, available: usize },
}

impl Error {
    pub(crate) fn corrupt(offset: usize, kind: Corruption) -> Self {
        Error::CorruptStream { offset, kind }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, Error::CorruptStream { .. })
    }
}
