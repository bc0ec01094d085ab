// ---------------------------------------------------------------------------
// FactorsError: errors raised while installing a conversion-factor table
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur when loading or validating a factor table.
#[derive(Debug)]
pub enum FactorsError {
    /// I/O error reading the table file.
    Io(std::io::Error),
    /// The file is not valid JSON or does not match the table shape.
    Parse(String),
    /// A factor is NaN or infinite.
    NonFiniteFactor { key: String },
    /// The table has an empty `version` string.
    MissingVersion,
}

impl fmt::Display for FactorsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactorsError::Io(e) => write!(f, "I/O error: {e}"),
            FactorsError::Parse(msg) => write!(f, "Invalid factor table: {msg}"),
            FactorsError::NonFiniteFactor { key } => {
                write!(f, "Factor '{key}' is not a finite number")
            }
            FactorsError::MissingVersion => write!(f, "Factor table has no version"),
        }
    }
}

impl std::error::Error for FactorsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FactorsError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FactorsError {
    fn from(e: std::io::Error) -> Self {
        FactorsError::Io(e)
    }
}

impl From<serde_json::Error> for FactorsError {
    fn from(e: serde_json::Error) -> Self {
        FactorsError::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_io() {
        let err = FactorsError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        let msg = format!("{err}");
        assert!(msg.contains("I/O error"), "got: {msg}");
        assert!(msg.contains("no such file"), "got: {msg}");
    }

    #[test]
    fn test_display_non_finite() {
        let err = FactorsError::NonFiniteFactor {
            key: "waste.landfill".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("waste.landfill"), "got: {msg}");
    }

    #[test]
    fn test_display_missing_version() {
        let msg = format!("{}", FactorsError::MissingVersion);
        assert!(msg.contains("no version"), "got: {msg}");
    }

    #[test]
    fn test_from_serde_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: FactorsError = json_err.into();
        assert!(matches!(err, FactorsError::Parse(_)));
    }

    #[test]
    fn test_source_only_for_io() {
        let io = FactorsError::Io(std::io::Error::new(std::io::ErrorKind::Other, "x"));
        assert!(std::error::Error::source(&io).is_some());
        assert!(std::error::Error::source(&FactorsError::MissingVersion).is_none());
    }
}
