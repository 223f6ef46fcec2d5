use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::behavior::LogLine;
use crate::console::Console;
use crate::errors::Result;

/// Schedule `line` to be logged once after `delay`, cooperatively on the
/// current runtime. The line already owns its context snapshot, so nothing
/// implicit is resolved when the timer fires.
pub fn defer(delay: Duration, line: LogLine, console: Arc<dyn Console>) -> JoinHandle<Result<()>> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        debug!(?delay, "deferred callback firing");
        console.log(&line)
    })
}
