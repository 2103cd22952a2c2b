use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The host part failed the charset, length, or presence rules.
    ///
    /// Covers addresses with no colon at all, an empty host before the
    /// colon, an illegal character, or a host longer than
    /// [`MAX_HOST_LEN`](crate::constants::MAX_HOST_LEN) characters.
    #[error("invalid host in address {0:?}")]
    InvalidHost(String),

    /// The port part failed the digit, length, or presence rules.
    ///
    /// Covers a trailing colon with nothing after it, a non-digit
    /// character (including a second colon), or more than
    /// [`MAX_PORT_DIGITS`](crate::constants::MAX_PORT_DIGITS) digits.
    #[error("invalid port in address {0:?}")]
    InvalidPort(String),
}

pub type Result<T> = std::result::Result<T, Error>;
