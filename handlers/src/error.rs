use dbot_core::DbotError;
use llm_client::CompletionError;
use storage::StorageError;
use thiserror::Error;

/// Failure of a flow; the webhook maps every variant to a generic 500.
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Store error: {0}")]
    Store(#[from] StorageError),

    #[error("Reply error: {0}")]
    Reply(#[from] DbotError),

    /// The completion API answered 2xx but the body held no usable reply.
    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),
}
