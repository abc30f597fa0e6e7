use std::io;
use std::path::Path;

use thiserror::Error;

use crate::error::BitArrayError;

/// Library error wrapped with the failing step and a hint for tool users.
#[derive(Debug, Error)]
#[error("{context}: {hint}")]
pub struct CliError {
    pub context: String,
    pub hint: String,
    #[source]
    pub source: BitArrayError,
}

/// Attach the archive path and a suggestion to an I/O error, keeping its kind.
pub fn io_error(operation: &str, path: &Path, err: io::Error) -> io::Error {
    let suggestion = match err.kind() {
        io::ErrorKind::NotFound => "Check the archive path.",
        io::ErrorKind::PermissionDenied => "Check permissions on the archive file.",
        _ => "The archive file could not be accessed.",
    };
    io::Error::new(
        err.kind(),
        format!("{operation} archive '{}': {err}. {suggestion}", path.display()),
    )
}

/// Convert a library error into a CLI error with a hint.
pub fn bits_cli_error(context: &str, err: BitArrayError) -> CliError {
    CliError {
        context: context.to_string(),
        hint: cli_hint(&err),
        source: err,
    }
}

/// Return an actionable hint for an error variant.
pub fn cli_hint(err: &BitArrayError) -> String {
    use BitArrayError::*;
    match err {
        OutOfBounds { index, max } => {
            format!("bit {index} is past the last bit {max}. Use a larger --count.")
        }
        Decode(msg) => format!("{msg}. Verify the file is intact and the --format matches."),
        Encode(msg) => format!("{msg}. This is a bug."),
        EmptyStorage => "no words to store. This is a bug.".to_string(),
        Config(msg) => format!("{msg}. Invalid configuration."),
        Io(io) => format!("{io}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_keeps_kind_and_path() {
        let err = io_error(
            "reading",
            Path::new("missing.bits"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        let msg = err.to_string();
        assert!(msg.starts_with("reading archive 'missing.bits'"));
        assert!(msg.ends_with("Check the archive path."));
    }

    #[test]
    fn hint_for_bounds() {
        let err = bits_cli_error("set", BitArrayError::OutOfBounds { index: 200, max: 191 });
        assert!(err.to_string().starts_with("set: bit 200 is past the last bit 191"));
        assert!(matches!(
            std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BitArrayError>()),
            Some(BitArrayError::OutOfBounds { index: 200, .. })
        ));
    }
}
