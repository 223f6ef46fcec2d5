use thiserror::Error;

// Failures only exist at the crate boundary: rendering a resolved context to
// text, and joining the deferred task. The demonstration steps themselves
// never fail; an unrecognized language tag takes the literal branch instead.
#[derive(Debug, Error)]
pub enum DemoError {
    // Variant for errors while serializing a resolved context for the console
    #[error("render error: {0}")]
    Render(#[from] serde_json::Error),

    // Variant for a deferred callback task that could not be joined
    #[error("deferred task error: {0}")]
    Deferred(#[from] tokio::task::JoinError),
}

// Type alias for results that use `DemoError` as the error type
pub type Result<T> = std::result::Result<T, DemoError>;
