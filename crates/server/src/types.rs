use booksum_common::{BookSumError, SummaryRequest};
use serde::{Deserialize, Serialize};

/// Summary request body as received, before validation
///
/// Both fields are optional here so a missing field turns into a 400 with a
/// field-specific message instead of a generic deserialization failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryPayload {
    /// Book title
    #[serde(default)]
    pub book_name: Option<String>,

    /// Book author
    #[serde(default)]
    pub author: Option<String>,
}

impl SummaryPayload {
    /// Check that both fields are present and non-empty.
    ///
    /// Values are passed on exactly as received, surrounding whitespace included.
    pub fn validate(self) -> Result<SummaryRequest, BookSumError> {
        let book_name = non_empty(self.book_name);
        let author = non_empty(self.author);

        match (book_name, author) {
            (Some(book_name), Some(author)) => Ok(SummaryRequest { book_name, author }),
            (None, None) => Err(BookSumError::invalid_input(
                "Book name and author are required",
            )),
            (None, Some(_)) => Err(BookSumError::invalid_input("Book name is required")),
            (Some(_), None) => Err(BookSumError::invalid_input("Author name is required")),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" while the process serves requests
    pub status: String,

    /// Model summaries are generated with
    pub model: String,
}
