//! Submission form state machine
//!
//! Holds the two input fields plus the `loading` / `error` / `summary` state
//! and enforces one in-flight request per form.

use booksum_common::SummaryRequest;
use tracing::{debug, warn};

use crate::api::{ClientError, SummaryApi};

/// Shown in the output area after a failed submission
pub const NO_SUMMARY_PLACEHOLDER: &str = "No summary generated.";

pub const BOOK_NAME_REQUIRED: &str = "Book name is required";
pub const AUTHOR_REQUIRED: &str = "Author name is required";

/// Inline validation messages, one slot per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub book_name: Option<&'static str>,
    pub author: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.book_name.is_none() && self.author.is_none()
    }
}

/// Why a submission was not sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// A request is already in flight
    Busy,
    /// At least one field is empty
    Invalid(FieldErrors),
}

/// What the output area currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormView<'a> {
    Idle,
    Loading,
    Summary(&'a str),
    Error(&'a str),
}

#[derive(Debug, Default)]
pub struct SummaryForm {
    book_name: String,
    author: String,
    field_errors: FieldErrors,
    loading: bool,
    summary: Option<String>,
    error: Option<String>,
}

impl SummaryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_book_name(&mut self, value: impl Into<String>) {
        self.book_name = value.into();
        self.field_errors.book_name = None;
    }

    pub fn set_author(&mut self, value: impl Into<String>) {
        self.author = value.into();
        self.field_errors.author = None;
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn view(&self) -> FormView<'_> {
        if self.loading {
            FormView::Loading
        } else if let Some(error) = &self.error {
            FormView::Error(error)
        } else if let Some(summary) = &self.summary {
            FormView::Summary(summary)
        } else {
            FormView::Idle
        }
    }

    /// Text for the output area: the summary, or the placeholder after a failure
    pub fn output_text(&self) -> &str {
        match (&self.summary, &self.error) {
            (Some(summary), None) => summary.as_str(),
            (_, Some(_)) => NO_SUMMARY_PLACEHOLDER,
            (None, None) => "",
        }
    }

    /// Check both fields without touching any state.
    ///
    /// A field needs at least one character; values are sent as typed.
    pub fn validate(&self) -> Result<SummaryRequest, FieldErrors> {
        let book_name = self.book_name.as_str();
        let author = self.author.as_str();

        let errors = FieldErrors {
            book_name: book_name.is_empty().then_some(BOOK_NAME_REQUIRED),
            author: author.is_empty().then_some(AUTHOR_REQUIRED),
        };

        if errors.is_empty() {
            Ok(SummaryRequest {
                book_name: book_name.to_string(),
                author: author.to_string(),
            })
        } else {
            Err(errors)
        }
    }

    /// Start a submission: validate, then enter the loading state.
    ///
    /// Nothing changes besides the inline field errors when validation fails.
    pub fn begin_submit(&mut self) -> Result<SummaryRequest, SubmitError> {
        if self.loading {
            return Err(SubmitError::Busy);
        }

        match self.validate() {
            Ok(request) => {
                self.field_errors = FieldErrors::default();
                self.loading = true;
                self.error = None;
                Ok(request)
            }
            Err(errors) => {
                debug!("Submission blocked by validation: {:?}", errors);
                self.field_errors = errors.clone();
                Err(SubmitError::Invalid(errors))
            }
        }
    }

    /// Apply the outcome of the in-flight request and leave the loading state.
    ///
    /// Failures reset the previous summary so the placeholder is shown.
    pub fn settle(&mut self, outcome: Result<String, ClientError>) {
        self.loading = false;

        match outcome {
            Ok(summary) if !summary.trim().is_empty() => {
                self.summary = Some(summary);
                self.error = None;
            }
            Ok(_) => self.fail(ClientError::EmptySummary),
            Err(err) => self.fail(err),
        }
    }

    fn fail(&mut self, err: ClientError) {
        warn!("Summary request failed: {}", err);
        self.summary = None;
        self.error = Some(err.to_string());
    }

    /// Validate, send exactly one request through `api`, and apply the result
    pub async fn submit<A>(&mut self, api: &A) -> Result<(), SubmitError>
    where
        A: SummaryApi + ?Sized,
    {
        let request = self.begin_submit()?;
        let outcome = api.request_summary(&request).await;
        self.settle(outcome);
        Ok(())
    }
}
