//! Multi-destination logging example
//!
//! Fans each call out to the console, a log file and an in-memory buffer,
//! each member keeping its own threshold.
//!
//! Run with: cargo run --example multi_logging

use logx::prelude::*;
use logx::{error, info, warning};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== logx - Multi Destination Example ===\n");

    let path = std::env::temp_dir().join("logx_multi_logging.log");

    let console = Arc::new(Stream::console(Options::new().level(Level::Info)));
    let file = Stream::file(
        &path,
        Options::new()
            .level(Level::Warning)
            .flags(Flags::STANDARD | Flags::SHORT_FILE),
    )?;
    let memory = SharedWriter::new(Vec::new());
    let audit = Stream::writer(
        memory.clone(),
        Options::new()
            .level(Level::Error)
            .flags(Flags::NONE)
            .prefix("audit"),
    );

    let multi = Composite::with_members([
        Member::from(Arc::clone(&console)),
        Member::from(file),
        Member::from(audit),
    ]);

    info!(multi, "service starting on port {}", 8080);
    warning!(multi, "cache is cold");
    error!(multi, "upstream {} unreachable", "db-1");

    // Settings fan out to every member
    multi.set_prefix("svc");
    error!(multi, "after prefix change");

    println!("\nFile contents ({}):", path.display());
    print!("{}", std::fs::read_to_string(&path)?);

    println!("\nIn-memory contents:");
    print!("{}", String::from_utf8_lossy(&memory.lock()));

    println!("\n=== Example completed ===");
    Ok(())
}
