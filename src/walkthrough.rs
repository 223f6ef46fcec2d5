use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::behavior::{Behavior, LogLine};
use crate::console::Console;
use crate::context::{Ambient, CallContext, Record, Strictness};
use crate::errors::Result;
use crate::person::Person;

/// Knobs for one walkthrough run.
#[derive(Debug, Clone)]
pub struct Options {
    pub strictness: Strictness,
    /// Delay before the constructor's deferred callback fires.
    pub delay: Duration,
    /// Name stored in the demonstration records.
    pub name: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strictness: Strictness::default(),
            delay: Duration::from_millis(100),
            name: "Kyrylo".to_string(),
        }
    }
}

/// Runs the binding demonstrations in order against one console sink:
/// top-level context, through-record call, bare call, permanent bind, the
/// two explicit call forms, and a constructor with a deferred callback.
pub struct Walkthrough {
    console: Arc<dyn Console>,
    opts: Options,
}

impl Walkthrough {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self {
            console,
            opts: Options::default(),
        }
    }

    pub fn with_options(mut self, opts: Options) -> Self {
        self.opts = opts;
        self
    }

    /// Every synchronous step runs to completion in order; the deferred line
    /// is awaited last, so it always lands after the script body.
    pub async fn run(&self) -> Result<()> {
        let ambient = Ambient::global();
        let talk = Behavior::talk();
        let en = [Value::from("en")];

        // Evaluated outside any behavior, the context is the ambient handle.
        debug!("top-level context");
        self.console
            .log(&LogLine::Context(CallContext::Global(ambient.clone())))?;

        // Whoever is on the left of the invocation becomes the context.
        let me = Record::new(self.opts.name.clone());
        debug!("through-record invocation");
        self.console.log(&talk.call_through(&me, &en))?;

        // Same behavior, no receiver: the call form decides, not the
        // definition site.
        debug!(strictness = ?self.opts.strictness, "bare invocation");
        self.console
            .log(&talk.call_bare(&ambient, self.opts.strictness, &en))?;

        // Permanently bind to a second record, then invoke.
        let me2 = Record::new(format!("{} 2", self.opts.name));
        let me2_talk = talk.bind(CallContext::Receiver(me2.clone()));
        debug!("bound invocation");
        self.console.log(&me2_talk.invoke(&en))?;
        // Bind-then-invoke in one expression resolves the same context.
        self.console
            .log(&talk.bind(CallContext::Receiver(me2.clone())).invoke(&en))?;

        // Immediate invocation with an explicit context, both argument forms.
        let ctx2 = CallContext::Receiver(me2);
        debug!("explicit per-argument and ordered-sequence invocation");
        self.console.log(&talk.call_with(&ctx2, "en"))?;
        self.console.log(&talk.apply_with(&ctx2, &en))?;

        // Constructor invocation. Its callback fires after every line above.
        debug!("constructor with deferred callback");
        let (_you, deferred) = Person::new("U", Arc::clone(&self.console), self.opts.delay);
        deferred.await?
    }
}
