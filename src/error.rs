//! Errors raised at the boundary where text turns into colors.

/// Everything that can go wrong in this crate. Numeric inputs are never
/// rejected; only text that fails to parse is.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// The input was not a `#RRGGBB` or `#RGB` hex color.
    #[error("invalid hex color {input:?}: expected #RRGGBB or #RGB")]
    InvalidFormat {
        /// The text that failed to parse.
        input: String,
    },
    /// The name does not match any [`crate::MixMode`].
    #[error("unknown mix mode {0:?}")]
    UnknownMixMode(String),
    /// A settings document could not be read.
    #[error("invalid settings: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn invalid_format(input: &str) -> Self {
        Self::InvalidFormat {
            input: input.to_owned(),
        }
    }
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
