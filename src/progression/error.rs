//! Rejected submissions.

use thiserror::Error;

/// Reasons a submission is ignored. None of them change any state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("No answer entered")]
    EmptyInput,

    #[error("Answer is not a whole number: {0:?}")]
    NotANumber(String),

    #[error("No problem is active")]
    NoActiveProblem,

    #[error("Feedback for the previous answer is still showing")]
    FeedbackPending,
}
