pub mod config;
pub mod error;
pub mod logger;
pub mod types;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::BookSumError;
pub use types::{ErrorResponse, SummaryRequest, SummaryResponse};
pub type Result<T> = std::result::Result<T, BookSumError>;
