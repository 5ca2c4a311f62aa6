/// booksum error types
#[derive(Debug, thiserror::Error)]
pub enum BookSumError {
    /// Request failed validation (missing or empty field)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Provider call failed (transport, non-2xx status, malformed body)
    #[error("LLM error: {0}")]
    Llm(String),

    /// Provider answered but returned no usable completion text
    #[error("LLM returned no completion text")]
    EmptyCompletion,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BookSumError {
    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create LLM error
    pub fn llm<S: Into<String>>(msg: S) -> Self {
        Self::Llm(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

// HTTP response conversion
impl BookSumError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::Llm(_) | Self::EmptyCompletion | Self::Config(_) | Self::Io(_) => 500,
        }
    }

    /// Message that is safe to hand back to an HTTP caller.
    ///
    /// Validation messages are passed through verbatim; everything else is
    /// collapsed to a short description so provider internals never leak.
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidInput(msg) => msg.clone(),
            Self::EmptyCompletion => "Failed to generate summary".to_string(),
            Self::Llm(_) => "Error generating summary".to_string(),
            Self::Config(_) | Self::Io(_) => "Unexpected error occurred".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(BookSumError::invalid_input("x").status_code(), 400);
        assert_eq!(BookSumError::llm("boom").status_code(), 500);
        assert_eq!(BookSumError::EmptyCompletion.status_code(), 500);
        assert_eq!(BookSumError::config("no key").status_code(), 500);

        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        assert_eq!(BookSumError::from(io).status_code(), 500);
    }

    #[test]
    fn test_client_message_hides_provider_details() {
        let err = BookSumError::llm("401 Unauthorized: invalid api key sk-abc");
        assert_eq!(err.client_message(), "Error generating summary");
        assert!(!err.client_message().contains("sk-abc"));
    }

    #[test]
    fn test_client_message_for_local_failures() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "0.0.0.0:8080 in use");
        assert_eq!(BookSumError::from(io).client_message(), "Unexpected error occurred");
        assert_eq!(
            BookSumError::config("OPENAI_API_KEY missing").client_message(),
            "Unexpected error occurred"
        );
    }

    #[test]
    fn test_client_message_keeps_validation_text() {
        let err = BookSumError::invalid_input("Book name and author are required");
        assert_eq!(err.client_message(), "Book name and author are required");
    }
}
