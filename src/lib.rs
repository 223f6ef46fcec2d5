pub mod behavior;
pub mod console;
pub mod context;
pub mod errors;
pub mod person;
pub mod scheduler;
pub mod walkthrough;

pub use behavior::{Behavior, BoundBehavior, LogLine};
pub use console::{Capture, Console, Stdout};
pub use context::{Ambient, CallContext, Record, Strictness};
pub use errors::{DemoError, Result};
pub use person::Person;
pub use walkthrough::{Options, Walkthrough};

/// Convenience: run the walkthrough with default options on stdout.
pub async fn run() -> Result<()> {
    Walkthrough::new(std::sync::Arc::new(Stdout)).run().await
}
