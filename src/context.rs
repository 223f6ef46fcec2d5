use serde::Serialize;

/// Explicit stand-in for the implicit global object: a process-wide
/// environment handle that is passed to calls instead of being ambient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ambient {
    pub scope: String,
}

impl Ambient {
    pub fn global() -> Self {
        Self {
            scope: "global".to_string(),
        }
    }
}

impl Default for Ambient {
    fn default() -> Self {
        Self::global()
    }
}

/// Person-like record. Fields are immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub name: String,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Evaluation mode for receiver-less calls. `Sloppy` resolves them to the
/// ambient handle; `Strict` resolves them to the no-context marker. Both are
/// valid renditions of the demonstrated language feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    #[default]
    Sloppy,
    Strict,
}

/// The execution context a behavior resolves at call time. Behaviors receive
/// it as an explicit first parameter; the call form picks the variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CallContext {
    /// Resolved by a bare call in sloppy mode, or evaluated at top level.
    Global(Ambient),
    /// Resolved by calling through a record, or fixed by an explicit bind.
    Receiver(Record),
    /// Resolved by a bare call in strict mode.
    Undefined,
}

impl CallContext {
    /// What a receiver-less call resolves under the given mode.
    pub fn bare(ambient: &Ambient, strictness: Strictness) -> Self {
        match strictness {
            Strictness::Sloppy => CallContext::Global(ambient.clone()),
            Strictness::Strict => CallContext::Undefined,
        }
    }
}
