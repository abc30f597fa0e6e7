use thiserror::Error;

pub type Result<T> = std::result::Result<T, BitArrayError>;

#[derive(Error, Debug)]
pub enum BitArrayError {
    /// Bit index past the last addressable bit.
    #[error("index {index} out of bounds (max {max})")]
    OutOfBounds { index: usize, max: usize },

    /// Blob is not a valid archive, or the strict policy rejected its field.
    #[error("decode error: {0}")]
    Decode(String),

    /// Encoder failure while producing an archive.
    #[error("encode error: {0}")]
    Encode(String),

    /// A bit array needs at least one word of storage.
    #[error("bit array storage must hold at least one word")]
    EmptyStorage,

    /// Unknown decode policy or archive format name.
    #[error("config error: {0}")]
    Config(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
