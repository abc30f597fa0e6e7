use std::fmt;
use std::str::FromStr;

use crate::error::BitArrayError;

/// What to do when an archive decodes but its word field is missing,
/// mistyped or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Fall back to a single zero word. Matches the legacy archive reader.
    #[default]
    Lenient,
    /// Surface the problem as [`BitArrayError::Decode`].
    Strict,
}

/// Wire format used for persisted bit arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArchiveFormat {
    /// JSON object keyed by `internalBitArray`.
    #[default]
    Keyed,
    /// bincode encoding of the same envelope, without field names.
    Compact,
}

/// Runtime configuration for archive encoding and decoding.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Handling of archives whose word field is missing, mistyped or empty.
    pub decode_policy: DecodePolicy,
    /// Wire format read by `from_bytes`/`load` and written by the CLI.
    pub format: ArchiveFormat,
}

impl Config {
    /// Strict decoding in the given format.
    pub fn strict(format: ArchiveFormat) -> Self {
        Self {
            decode_policy: DecodePolicy::Strict,
            format,
        }
    }
}

impl FromStr for DecodePolicy {
    type Err = BitArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lenient" => Ok(DecodePolicy::Lenient),
            "strict" => Ok(DecodePolicy::Strict),
            other => Err(BitArrayError::Config(format!(
                "unknown decode policy '{other}'"
            ))),
        }
    }
}

impl fmt::Display for DecodePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodePolicy::Lenient => f.write_str("lenient"),
            DecodePolicy::Strict => f.write_str("strict"),
        }
    }
}

impl FromStr for ArchiveFormat {
    type Err = BitArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "keyed" | "json" => Ok(ArchiveFormat::Keyed),
            "compact" | "bincode" => Ok(ArchiveFormat::Compact),
            other => Err(BitArrayError::Config(format!(
                "unknown archive format '{other}'"
            ))),
        }
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveFormat::Keyed => f.write_str("keyed"),
            ArchiveFormat::Compact => f.write_str("compact"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_legacy_compatible() {
        let cfg = Config::default();
        assert_eq!(cfg.decode_policy, DecodePolicy::Lenient);
        assert_eq!(cfg.format, ArchiveFormat::Keyed);
    }

    #[test]
    fn parse_names() {
        assert_eq!("Strict".parse::<DecodePolicy>().unwrap(), DecodePolicy::Strict);
        assert_eq!("bincode".parse::<ArchiveFormat>().unwrap(), ArchiveFormat::Compact);
        assert_eq!(ArchiveFormat::Keyed.to_string().parse::<ArchiveFormat>().unwrap(), ArchiveFormat::Keyed);
        assert!(matches!(
            "loose".parse::<DecodePolicy>(),
            Err(BitArrayError::Config(_))
        ));
    }
}
