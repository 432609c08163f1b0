//! Degree Stream Driver
//!
//! Reads normalized post lines from a source file and appends the rolling
//! average vertex degree of the hashtag co-occurrence graph to a target
//! file, one value per accepted post.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release -- /path/to/source/file /path/to/target/file
//! ```
//!
//! ## Environment Variables
//!
//! - WINDOW_SECS - Trailing window length in seconds (default: 60)
//! - RUST_LOG - Logging level (optional, default: info)

use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::process;

use tagflow::config::Config;
use tagflow::graph_core::{AverageDegreeWriter, DegreePipeline};

fn usage(program: &str) {
    println!("Usage:");
    println!("\t{} /path/to/source/file /path/to/target/file", program);
}

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    dotenv::dotenv().ok();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("tagflow");

    let (source, target) = match (args.get(1), args.get(2)) {
        (Some(source), Some(target)) => (source.clone(), target.clone()),
        _ => {
            println!("Need a source file and a target file to do my work");
            usage(program);
            process::exit(0);
        }
    };

    let source_file = match File::open(&source) {
        Ok(file) => file,
        Err(e) => {
            println!("Could not open source file {}: {}", source, e);
            usage(program);
            process::exit(0);
        }
    };

    let config = Config::from_env();

    log::info!("🚀 Starting degree stream");
    log::info!("   Source: {}", source);
    log::info!("   Target: {}", target);
    log::info!("   Window: {}s", config.window_secs);

    let mut pipeline = DegreePipeline::new(config.window_secs);
    let mut writer = AverageDegreeWriter::new(&target)?;

    let mut lines_read = 0usize;
    let mut emitted = 0usize;

    for line in BufReader::new(source_file).lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::warn!("Skipping unreadable line: {}", e);
                continue;
            }
        };

        lines_read += 1;

        if let Some(average) = pipeline.process_line(&line) {
            writer.write_average(average)?;
            emitted += 1;
        }
    }

    writer.flush()?;

    log::info!(
        "✅ Processed {} lines, emitted {} averages ({} vertices tracked, {} posts in window)",
        lines_read,
        emitted,
        pipeline.vertex_count(),
        pipeline.window_len()
    );

    Ok(())
}
