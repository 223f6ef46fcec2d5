use std::sync::{Arc, Mutex};

use itertools::Itertools;
use tracing::debug;

use crate::behavior::LogLine;
use crate::errors::Result;

/// Console sink the demonstrations write to. How a context gets stringified
/// is up to the sink; the ones here delegate to [`LogLine::render`].
pub trait Console: Send + Sync {
    fn log(&self, line: &LogLine) -> Result<()>;
}

/// Production sink: one rendered line per call on stdout.
#[derive(Debug, Default)]
pub struct Stdout;

impl Console for Stdout {
    fn log(&self, line: &LogLine) -> Result<()> {
        println!("{}", line.render()?);
        Ok(())
    }
}

/// Buffering sink for tests.
#[derive(Debug, Default)]
pub struct Capture {
    lines: Mutex<Vec<String>>,
}

impl Capture {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("console buffer poisoned").clone()
    }

    /// All captured lines joined with newlines.
    pub fn dump(&self) -> String {
        self.lines().iter().join("\n")
    }
}

impl Console for Capture {
    fn log(&self, line: &LogLine) -> Result<()> {
        let rendered = line.render()?;
        debug!(%rendered, "captured console line");
        self.lines
            .lock()
            .expect("console buffer poisoned")
            .push(rendered);
        Ok(())
    }
}
