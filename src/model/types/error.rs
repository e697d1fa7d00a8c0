#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("Error reaching the users endpoint: {0}")]
    Network(String),
    #[error("Error from serde decode: {0}")]
    Decode(String),
    #[error("The users endpoint answered with status {0}")]
    Status(u16),
    #[error("User {id} has no email to show")]
    MissingEmail { id: u64 },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("A env was not found: {0}")]
    EnvNotFound(String),
    #[error("Io error: {0}")]
    Io(String),
}

impl Error {
    pub fn to_status_code(&self) -> u16 {
        match *self {
            Error::Network(_) => 502,
            Error::Decode(_) => 502,
            Error::Status(_) => 502,
            Error::MissingEmail { .. } => 500,
            Error::InvalidConfig(_) => 500,
            Error::EnvNotFound(_) => 500,
            Error::Io(_) => 500,
        }
    }
}

impl From<Error> for String {
    fn from(val: Error) -> Self {
        match val {
            Error::Network(s) => s,
            Error::Decode(s) => s,
            Error::Status(code) => format!("status {}", code),
            Error::MissingEmail { id } => format!("user {} has no email", id),
            Error::InvalidConfig(s) => s,
            Error::EnvNotFound(s) => s,
            Error::Io(s) => s,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

/// Flattens an error and its `source()` chain into one line, reqwest keeps the
/// interesting part (connection refused, dns failure, ...) in the sources.
#[cfg(feature = "ssr")]
fn chain_to_string(e: &dyn std::error::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Error::Decode(chain_to_string(&e))
        } else {
            Error::Network(chain_to_string(&e))
        }
    }
}

#[cfg(feature = "ssr")]
impl From<std::env::VarError> for Error {
    fn from(value: std::env::VarError) -> Self {
        Error::EnvNotFound(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_errors_come_from_serde() {
        let err: Error = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Decode(_)));
        assert_eq!(err.to_status_code(), 502);
    }

    #[test]
    fn io_errors_keep_their_message() {
        let err: Error =
            std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use").into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "Io error: address in use");
        assert_eq!(err.to_status_code(), 500);
    }

    #[test]
    fn missing_email_message_names_the_user() {
        let err = Error::MissingEmail { id: 42 };
        assert_eq!(err.to_string(), "User 42 has no email to show");
        assert_eq!(err.to_status_code(), 500);
        let message: String = err.into();
        assert_eq!(message, "user 42 has no email");
    }
}
