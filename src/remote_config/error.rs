use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoteConfigErrorCode {
    /// The input handed over by the host is not a usable key/value object.
    MalformedInput,
    /// A numeric byte array contains an element that is not an integer.
    ByteRange,
    /// Failure surfaced by the underlying Remote Config SDK.
    Sdk,
}

impl RemoteConfigErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RemoteConfigErrorCode::MalformedInput => "remote-config/malformed-input",
            RemoteConfigErrorCode::ByteRange => "remote-config/byte-range",
            RemoteConfigErrorCode::Sdk => "remote-config/sdk",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteConfigError {
    pub code: RemoteConfigErrorCode,
    message: String,
}

impl RemoteConfigError {
    pub fn new(code: RemoteConfigErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    /// Human readable message forwarded to the host as the single failure payload.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for RemoteConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code_str())
    }
}

impl std::error::Error for RemoteConfigError {}

pub type RemoteConfigResult<T> = Result<T, RemoteConfigError>;

pub fn malformed_input(message: impl Into<String>) -> RemoteConfigError {
    RemoteConfigError::new(RemoteConfigErrorCode::MalformedInput, message)
}

pub fn byte_range(message: impl Into<String>) -> RemoteConfigError {
    RemoteConfigError::new(RemoteConfigErrorCode::ByteRange, message)
}

pub fn sdk_error(message: impl Into<String>) -> RemoteConfigError {
    RemoteConfigError::new(RemoteConfigErrorCode::Sdk, message)
}
