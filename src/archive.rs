//! Archive encoding for [`BitArray`].
//!
//! The archive is a keyed container with a single field, `internalBitArray`,
//! holding the words in storage order. [`ArchiveFormat::Keyed`] writes it as a
//! JSON object so the field name travels with the data;
//! [`ArchiveFormat::Compact`] writes the same envelope with bincode.
//!
//! Decoding distinguishes two failures. A blob that is not an archive at all
//! is always a [`BitArrayError::Decode`]. An archive whose field is missing,
//! mistyped or empty is handled by [`DecodePolicy`]: `Lenient` substitutes a
//! single zero word (the legacy reader's behaviour), `Strict` reports it.

use std::fs;
use std::path::Path;

use bincode::Options;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::bit_array::BitArray;
use crate::config::{ArchiveFormat, Config, DecodePolicy};
use crate::error::{BitArrayError, Result};
use crate::io_utils::io_error;

/// Field name carried by every archive.
pub const FIELD_NAME: &str = "internalBitArray";

#[derive(Serialize)]
struct ArchiveRef<'a> {
    #[serde(rename = "internalBitArray")]
    internal_bit_array: &'a [u64],
}

#[derive(Deserialize)]
struct Archive {
    #[serde(rename = "internalBitArray")]
    internal_bit_array: Vec<u64>,
}

impl BitArray {
    /// Encode with the default (keyed) format.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        self.to_bytes(ArchiveFormat::default())
    }

    /// Decode with the default configuration (keyed, lenient).
    pub fn deserialize(bytes: &[u8]) -> Result<BitArray> {
        BitArray::from_bytes(bytes, &Config::default())
    }

    pub fn to_bytes(&self, format: ArchiveFormat) -> Result<Vec<u8>> {
        let archive = ArchiveRef {
            internal_bit_array: self.words(),
        };
        match format {
            ArchiveFormat::Keyed => {
                serde_json::to_vec(&archive).map_err(|e| BitArrayError::Encode(e.to_string()))
            }
            ArchiveFormat::Compact => {
                bincode::serialize(&archive).map_err(|e| BitArrayError::Encode(e.to_string()))
            }
        }
    }

    pub fn from_bytes(bytes: &[u8], config: &Config) -> Result<BitArray> {
        let field = match config.format {
            ArchiveFormat::Keyed => decode_keyed(bytes)?,
            ArchiveFormat::Compact => decode_compact(bytes)?,
        };
        let words = match field {
            Ok(words) => words,
            Err(reason) => return fallback(reason, config.decode_policy),
        };
        debug!("decoded {} words from {} byte archive", words.len(), bytes.len());
        BitArray::from_words(words)
    }

    /// Write the archive to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P, format: ArchiveFormat) -> Result<()> {
        let path = path.as_ref();
        let data = self.to_bytes(format)?;
        fs::write(path, &data).map_err(|e| io_error("writing", path, e))?;
        debug!("saved {} words to {}", self.word_count(), path.display());
        Ok(())
    }

    /// Read an archive from `path`.
    pub fn load<P: AsRef<Path>>(path: P, config: &Config) -> Result<BitArray> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| io_error("reading", path, e))?;
        debug!("loading {} bytes from {}", data.len(), path.display());
        BitArray::from_bytes(&data, config)
    }
}

/// Outer `Err` is a broken container; inner `Err` is a field problem.
type FieldResult = std::result::Result<Vec<u64>, String>;

fn decode_keyed(bytes: &[u8]) -> Result<FieldResult> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| BitArrayError::Decode(e.to_string()))?;
    let object = value
        .as_object()
        .ok_or_else(|| BitArrayError::Decode("archive is not a keyed container".into()))?;
    let field = match object.get(FIELD_NAME) {
        Some(field) => field,
        None => return Ok(Err(format!("field '{FIELD_NAME}' missing"))),
    };
    Ok(match Vec::<u64>::deserialize(field) {
        Ok(words) => non_empty(words),
        Err(e) => Err(format!("field '{FIELD_NAME}' is not a word sequence: {e}")),
    })
}

fn decode_compact(bytes: &[u8]) -> Result<FieldResult> {
    // Same wire layout as `bincode::serialize`, minus its tolerance for trailing input.
    let archive: Archive = bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
        .deserialize(bytes)
        .map_err(|e| BitArrayError::Decode(e.to_string()))?;
    Ok(non_empty(archive.internal_bit_array))
}

fn non_empty(words: Vec<u64>) -> FieldResult {
    if words.is_empty() {
        return Err(format!("field '{FIELD_NAME}' holds no words"));
    }
    Ok(words)
}

fn fallback(reason: String, policy: DecodePolicy) -> Result<BitArray> {
    match policy {
        DecodePolicy::Strict => Err(BitArrayError::Decode(reason)),
        DecodePolicy::Lenient => {
            warn!("{reason}; substituting an empty bit array");
            Ok(BitArray::new(0))
        }
    }
}
