//! Error types for password generation.

use std::fmt;

/// Errors produced while resolving set codes or validating inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The set-code specification resolved to zero non-empty groups.
    EmptyResolution {
        set_codes: String,
        custom_set_len: usize,
    },
    /// A length was negative or not a number.
    InvalidLength(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyResolution {
                set_codes,
                custom_set_len,
            } => write!(
                f,
                "Set codes {:?} (custom set of {} chars) produce no characters",
                set_codes, custom_set_len
            ),
            Error::InvalidLength(s) => write!(f, "Invalid password length: {}", s),
        }
    }
}

impl std::error::Error for Error {}
