use thiserror::Error;

/// Everything that can go wrong before any number is computed.
///
/// The `Display` output is the exact line written to stderr.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Usage: {program} <number>")]
    Usage { program: String },
    #[error("Error: '{raw}' is not a valid integer")]
    InvalidInteger { raw: String },
    #[error("Error: Input must be a non-negative integer")]
    Negative,
}

impl InputError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
