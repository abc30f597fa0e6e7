//! Word-packed bit storage for Bloom filters.
//!
//! [`BitArray`] holds a fixed number of bits packed most-significant-first
//! into `u64` words and persists itself as a keyed `internalBitArray`
//! archive. Hashing and membership logic belong to the filter built on top.

pub mod archive;
pub mod bit_array;
pub mod config;
pub mod error;
pub mod io_utils;

pub use archive::FIELD_NAME;
pub use bit_array::{BitArray, WORD_BITS};
pub use config::{ArchiveFormat, Config, DecodePolicy};
pub use error::{BitArrayError, Result};
