use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use receiver_binding::{Options, Stdout, Strictness, Walkthrough};

/// Walk through how a callable's execution context resolves under the five
/// call forms: through-receiver, bare, bound, explicit, and deferred.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Resolve bare invocations to the no-context marker instead of the
    /// ambient handle
    #[arg(long)]
    strict: bool,
    /// Delay before the constructor's deferred callback fires
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,
    /// Name stored in the demonstration records
    #[arg(long, default_value = "Kyrylo")]
    name: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Trace output goes to stderr so it never interleaves with the
    // demonstration lines on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments.
    let args = Args::parse();

    // Build options.
    let opts = Options {
        strictness: if args.strict {
            Strictness::Strict
        } else {
            Strictness::Sloppy
        },
        delay: Duration::from_millis(args.delay_ms),
        name: args.name,
    };

    // Run the walkthrough.
    let walkthrough = Walkthrough::new(Arc::new(Stdout)).with_options(opts);
    if let Err(e) = walkthrough.run().await {
        eprintln!("walkthrough failed: {e}");
        std::process::exit(1);
    }
}
