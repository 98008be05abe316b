use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("invalid ARN: {0}")]
    InvalidArn(String),

    #[error("failed to decode policy document: {0}")]
    PolicyDecode(String),

    #[error("failed to parse policy document: {0}")]
    PolicyParse(String),

    #[error("no matching request for destination service '{0}'")]
    UnsupportedDestination(String),

    #[error("invalid extractor pattern: {0}")]
    InvalidPattern(String),
}

impl From<serde_json::Error> for LinkError {
    fn from(err: serde_json::Error) -> Self {
        LinkError::PolicyParse(err.to_string())
    }
}

impl From<std::str::Utf8Error> for LinkError {
    fn from(err: std::str::Utf8Error) -> Self {
        LinkError::PolicyDecode(err.to_string())
    }
}

impl From<regex::Error> for LinkError {
    fn from(err: regex::Error) -> Self {
        LinkError::InvalidPattern(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_maps_to_parse_error() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: LinkError = err.into();
        assert!(matches!(err, LinkError::PolicyParse(_)));
    }

    #[test]
    fn test_regex_error_maps_to_invalid_pattern() {
        let err = regex::Regex::new("(unclosed").unwrap_err();
        let err: LinkError = err.into();
        assert!(matches!(err, LinkError::InvalidPattern(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LinkError::UnsupportedDestination("kinesis".to_string());
        assert_eq!(
            err.to_string(),
            "no matching request for destination service 'kinesis'"
        );
    }

    #[test]
    fn test_error_serialization() {
        let err = LinkError::InvalidArn("not-an-arn".to_string());
        let serialized = serde_json::to_value(&err).unwrap();
        let deserialized: LinkError = serde_json::from_value(serialized).unwrap();
        assert_eq!(err, deserialized);
    }
}
