//! Basic logger usage example
//!
//! Demonstrates a single console logger, thresholds and header flags.
//!
//! Run with: cargo run --example basic_usage

use logx::prelude::*;
use logx::{debug, error, info, log_print, trace, warning};

fn main() -> Result<()> {
    println!("=== logx - Basic Usage Example ===\n");

    // Everything from TRACE upwards, standard date and time header
    let logger = Stream::console(Options::new().level(Level::Trace));

    println!("1. Logging at different levels:");
    trace!(logger, "This is a trace message");
    debug!(logger, "This is a debug message");
    info!(logger, "This is an info message");
    warning!(logger, "This is a warning message");
    error!(logger, "This is an error message");

    println!("\n2. Raising the threshold to WARN:");
    logger.set_level(Level::Warning);
    info!(logger, "This info message is filtered out");
    warning!(logger, "This warning message is shown");

    println!("\n3. Print level and prefix:");
    logger.set_print_level(Level::Error);
    logger.set_prefix("worker-1");
    log_print!(logger, "printed at the configured print level");

    println!("\n4. Microseconds and short file names:");
    let detailed = Stream::console([
        Opt::Flags(Flags::STANDARD | Flags::MICROSECONDS | Flags::SHORT_FILE),
        Opt::Level(Level::Info),
    ]);
    info!(detailed, "request {} took {}ms", 42, 7);

    println!("\n5. Explicit level through the writer contract:");
    detailed.log(Level::Error, 0, format_args!("emitted via log()"))?;

    println!("\n=== Example completed ===");
    Ok(())
}
