use std::fmt::Display;

use thiserror::Error;

/// Domain errors raised by the generators and the batch orchestrator.
#[derive(Debug, Error)]
pub enum GenError {
    /// A vertex count, model parameter or replica count is out of its domain.
    #[error("invalid argument `{name}` = {value}: expected {expected}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// The rejected value, rendered for the message.
        value: String,
        /// Human-readable description of the accepted domain.
        expected: String,
    },
    /// The model tag is not one of `ER`, `RGG`, `HGG` or `BA`.
    #[error("unsupported graph model `{provided}`: use 'ER', 'RGG', 'HGG', or 'BA'")]
    UnsupportedModel {
        /// Raw tag supplied by the caller.
        provided: String,
    },
}

impl GenError {
    pub fn invalid(name: &'static str, value: impl Display, expected: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            value: value.to_string(),
            expected: expected.into(),
        }
    }
}
