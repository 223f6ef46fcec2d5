use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::behavior::{Behavior, BoundBehavior, LogLine};
use crate::console::Console;
use crate::context::{CallContext, Record};
use crate::errors::Result;
use crate::scheduler::defer;

/// Constructor-style invocation. The instance stores a name, embeds a
/// behavior pre-bound to itself, and schedules one deferred log whose
/// context snapshot is the instance.
pub struct Person {
    record: Record,
    talk: BoundBehavior,
}

impl Person {
    /// Builds the instance and schedules its deferred callback. A deferred
    /// invocation would otherwise resolve the ambient context; binding at
    /// scheduling time pins it to the instance. The handle lets callers wait
    /// for the callback, which fires after the synchronous script body.
    pub fn new(
        name: impl Into<String>,
        console: Arc<dyn Console>,
        delay: Duration,
    ) -> (Self, JoinHandle<Result<()>>) {
        let record = Record::new(name);
        let ctx = CallContext::Receiver(record.clone());
        let handle = defer(delay, LogLine::Context(ctx.clone()), console);
        let talk = Behavior::new(|ctx, _args| LogLine::Context(ctx.clone())).bind(ctx);
        (Self { record, talk }, handle)
    }

    /// The embedded behavior: reports the instance's own context.
    pub fn talk(&self) -> LogLine {
        self.talk.invoke(&[])
    }

    pub fn record(&self) -> &Record {
        &self.record
    }
}
