use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// Message safe to show the user. HTTP failures carry the server-provided
    /// text; everything else falls back to the variant's own description so a
    /// raw transport error never reaches the screen.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn user_message_prefers_server_text_for_http_errors() {
        let error = AppError::Http {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(error.user_message(), "Invalid credentials");
    }

    #[test]
    fn user_message_falls_back_to_display() {
        let error = AppError::Timeout("Request timed out. Please try again.".to_string());
        assert_eq!(
            error.user_message(),
            "Timeout: Request timed out. Please try again."
        );
    }
}
