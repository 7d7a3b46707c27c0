//! Error taxonomy for the scoring engine.
//!
//! Only two failure kinds exist. A profile missing its identity is a request
//! error the caller surfaces to the user; a broken scoring policy is a
//! deployment error caught before any request runs. Everything else - empty
//! repository lists, zero counts, missing timestamps - is absorbed as floor
//! scores with insufficient-data evidence and never becomes an error.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitworthError>;

#[derive(Debug, Error)]
pub enum GitworthError {
    /// Required identity fields are absent from the input record. The
    /// 4xx-equivalent outcome: the profile cannot be analyzed.
    #[error("malformed profile: {reason}")]
    MalformedProfile { reason: String },

    /// The scoring policy is invalid (weight table off, overlapping
    /// thresholds). Fatal at startup, never raised mid-request for the
    /// built-in policy.
    #[error("invalid scoring configuration: {reason}")]
    Configuration { reason: String },
}

impl GitworthError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedProfile {
            reason: reason.into(),
        }
    }

    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    /// True for errors the end user can act on, as opposed to deployment
    /// mistakes.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::MalformedProfile { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_reason() {
        let err = GitworthError::malformed("username is empty");
        assert_eq!(err.to_string(), "malformed profile: username is empty");
    }

    #[test]
    fn only_malformed_profiles_are_user_facing() {
        assert!(GitworthError::malformed("x").is_user_facing());
        assert!(!GitworthError::configuration("x").is_user_facing());
    }
}
