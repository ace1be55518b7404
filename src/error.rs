use thiserror::Error;

/// Prediction service errors
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error! status: {status}")]
    RequestFailed { status: u16 },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Non-2xx status or a transport-level failure
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            ClientError::RequestFailed { .. } | ClientError::Transport(_)
        )
    }
}

/// Client-side form validation errors, raised before any network call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please select a valid driver")]
    NoDriverSelected,

    #[error("Please select a season")]
    MissingSeason,

    #[error("Please select a race")]
    MissingRace,

    #[error("Unknown driver: {0}")]
    UnknownDriver(String),

    #[error("Unknown race: {0}")]
    UnknownRace(String),

    #[error("Unsupported season: {0}")]
    UnknownSeason(u16),
}

/// Parse raw experience input; only positive integers count as an override
pub fn parse_experience(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|&years| years > 0)
}

pub fn validate_confidence(confidence: f64) -> bool {
    (0.0..=1.0).contains(&confidence)
}

pub fn validate_position(position: u8) -> bool {
    (1..=20).contains(&position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_experience_valid() {
        assert_eq!(parse_experience("5"), Some(5));
        assert_eq!(parse_experience(" 12 "), Some(12));
    }

    #[test]
    fn test_parse_experience_invalid() {
        assert_eq!(parse_experience(""), None);
        assert_eq!(parse_experience("0"), None);
        assert_eq!(parse_experience("-3"), None);
        assert_eq!(parse_experience("2.5"), None);
        assert_eq!(parse_experience("ten"), None);
    }

    #[test]
    fn test_validate_confidence() {
        assert!(validate_confidence(0.0));
        assert!(validate_confidence(0.82));
        assert!(validate_confidence(1.0));
        assert!(!validate_confidence(-0.1));
        assert!(!validate_confidence(1.1));
    }

    #[test]
    fn test_validate_position() {
        assert!(validate_position(1));
        assert!(validate_position(20));
        assert!(!validate_position(0));
        assert!(!validate_position(21));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            FormError::NoDriverSelected.to_string(),
            "Please select a valid driver"
        );
        assert_eq!(
            ClientError::RequestFailed { status: 500 }.to_string(),
            "HTTP error! status: 500"
        );
    }
}
