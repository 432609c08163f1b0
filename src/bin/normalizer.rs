//! Tweet Normalizer
//!
//! Cleans raw tweet JSON lines into the normalized post format consumed by
//! the degree stream driver, and reports how many tweets contained unicode.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --bin normalizer -- /path/to/source/file /path/to/target/file
//! ```

use std::env;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::process;

use tagflow::normalize::TweetNormalizer;

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
    let program = args.first().map(String::as_str).unwrap_or("normalizer");

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

    log::info!("🚀 Starting tweet normalizer");
    log::info!("   Source: {}", source);
    log::info!("   Target: {}", target);

    let target_file = OpenOptions::new().create(true).append(true).open(&target)?;
    let mut writer = BufWriter::new(target_file);

    let mut normalizer = TweetNormalizer::new();
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

        if let Some(normalized) = normalizer.normalize_line(&line) {
            writeln!(writer, "{}", normalized)?;
            emitted += 1;
        }
    }

    write!(writer, "{}", normalizer.summary())?;
    writer.flush()?;

    log::info!(
        "✅ Normalized {} of {} lines ({} tweet(s) contained unicode)",
        emitted,
        lines_read,
        normalizer.unicode_tweets()
    );

    Ok(())
}
