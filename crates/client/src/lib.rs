//! booksum client
//!
//! Submission form state and the HTTP transport to the summary endpoint

mod api;
mod form;

pub use api::{interpret_response, ClientError, HttpSummaryApi, SummaryApi};
pub use form::{FieldErrors, FormView, SubmitError, SummaryForm, NO_SUMMARY_PLACEHOLDER};
