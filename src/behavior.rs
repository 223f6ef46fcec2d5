use std::sync::Arc;

use serde_json::Value;

use crate::context::{Ambient, CallContext, Record, Strictness};
use crate::errors::Result;

/// One line a call asks the console to print: the resolved execution context
/// or a literal string.
#[derive(Debug, Clone, PartialEq)]
pub enum LogLine {
    Context(CallContext),
    Literal(String),
}

impl LogLine {
    /// Text handed to the console sink. Contexts render as compact JSON;
    /// the no-context marker renders as `undefined`.
    pub fn render(&self) -> Result<String> {
        match self {
            LogLine::Context(CallContext::Undefined) => Ok("undefined".to_string()),
            LogLine::Context(ctx) => Ok(serde_json::to_string(ctx)?),
            LogLine::Literal(s) => Ok(s.clone()),
        }
    }
}

type BehaviorFn = dyn Fn(&CallContext, &[Value]) -> LogLine + Send + Sync;

/// A reusable callable value. The context it resolves is not baked into its
/// definition: every call-form helper below supplies one explicitly.
#[derive(Clone)]
pub struct Behavior {
    f: Arc<BehaviorFn>,
}

impl Behavior {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&CallContext, &[Value]) -> LogLine + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// The walkthrough's one conditional behavior: the tag `"en"` reports the
    /// resolved context, any other or missing tag falls through to a fixed
    /// literal. No error for unrecognized tags.
    pub fn talk() -> Self {
        Self::new(|ctx, args| match args.first().and_then(Value::as_str) {
            Some("en") => LogLine::Context(ctx.clone()),
            _ => LogLine::Literal("Tralala".to_string()),
        })
    }

    /// Method invocation: whoever is on the left of the call becomes the
    /// context.
    pub fn call_through(&self, receiver: &Record, args: &[Value]) -> LogLine {
        (self.f)(&CallContext::Receiver(receiver.clone()), args)
    }

    /// Bare invocation: no receiver, so the context is the ambient handle,
    /// or the no-context marker under strict evaluation. Definition site
    /// plays no part.
    pub fn call_bare(&self, ambient: &Ambient, strictness: Strictness, args: &[Value]) -> LogLine {
        (self.f)(&CallContext::bare(ambient, strictness), args)
    }

    /// Permanent bind: the returned behavior owns a snapshot of `ctx` and
    /// resolves it on every future invocation, whatever the call form.
    pub fn bind(&self, ctx: CallContext) -> BoundBehavior {
        BoundBehavior {
            f: Arc::clone(&self.f),
            ctx,
        }
    }

    /// Immediate invocation with an explicitly supplied context and an
    /// individually listed argument.
    pub fn call_with(&self, ctx: &CallContext, lang: &str) -> LogLine {
        (self.f)(ctx, &[Value::String(lang.to_string())])
    }

    /// Same as [`Behavior::call_with`], but the arguments arrive as one
    /// ordered sequence.
    pub fn apply_with(&self, ctx: &CallContext, args: &[Value]) -> LogLine {
        (self.f)(ctx, args)
    }
}

/// A behavior permanently fixed to one context by [`Behavior::bind`].
#[derive(Clone)]
pub struct BoundBehavior {
    f: Arc<BehaviorFn>,
    ctx: CallContext,
}

impl BoundBehavior {
    pub fn invoke(&self, args: &[Value]) -> LogLine {
        (self.f)(&self.ctx, args)
    }

    /// Supplying another context has no effect; the snapshot taken at bind
    /// time wins.
    pub fn invoke_with(&self, _ctx: &CallContext, args: &[Value]) -> LogLine {
        (self.f)(&self.ctx, args)
    }

    pub fn context(&self) -> &CallContext {
        &self.ctx
    }
}
