use thiserror::Error;

/// Error taxonomy for the object-store core.
///
/// Each variant corresponds to one of the error kinds named in the core's
/// contract: a chunk refusing mutation, an index miss, a hash-tree index out
/// of bounds, or a streaming read failure. There is no library-level recovery;
/// [`crate::index::Index::discard`] is the only operation that swallows
/// `KeyError`/`ValueError` on purpose.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not supported: {0}")]
    NotSupported(String),

    #[error("key not found: {0}")]
    KeyError(String),

    #[error("value not found: {0}")]
    ValueError(String),

    #[error("index out of range: {0}")]
    OutOfRange(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
