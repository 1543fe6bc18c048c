//! # chatplot CLI
//!
//! Command-line interface for the chatplot library.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use log::{LevelFilter, warn};

use chatplot::cli::Args;
use chatplot::config::parse_stop_words;
use chatplot::format::OutputFormat;
use chatplot::output::TableWriter;
use chatplot::render::{ChartRenderer, ChartTable, FrequencyCloud, Mask, render_charts};
use chatplot::{ChatLog, ChatplotError};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatplotError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    let config = args.analysis_config();
    let format: OutputFormat = args.format.into();

    // Print header
    println!("📊 chatplot v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input.display());
    println!("💾 Output:  {}", args.output.display());
    println!("📄 Format:  {}", format);
    println!(
        "🕒 Periods: {}",
        config
            .periods
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!();

    // Step 1: Parse
    println!("⏳ Parsing chat...");
    let parse_start = Instant::now();
    let text = fs::read_to_string(&args.input)?;
    let chat = ChatLog::parse_with(&text, config.prefix_width);
    let report = chat.report();
    println!(
        "   Found {} messages from {} senders ({:.2}s)",
        chat.len(),
        chat.users().senders().len(),
        parse_start.elapsed().as_secs_f64()
    );

    // Step 2: Charts
    println!("📈 Writing charts...");
    let chart_start = Instant::now();
    let mut writer = TableWriter::new(&args.output, format)?;
    let charts = render_charts(&chat, &config, &mut writer)?;
    println!(
        "   {} charts written ({:.2}s)",
        charts,
        chart_start.elapsed().as_secs_f64()
    );

    // Step 3: Word clouds
    let mut clouds = 0;
    if args.no_clouds {
        println!("⏭️  Skipping word clouds (--no-clouds)");
    } else {
        println!("☁️  Building word clouds...");
        let cloud_start = Instant::now();
        let stop_words = load_stop_words(&args)?;
        let cloud_config = args.word_cloud_config(stop_words);
        for (participant, words) in chat.word_clouds(&cloud_config, &load_mask, &FrequencyCloud)? {
            writer.render(&ChartTable::cloud(&participant, &words))?;
            clouds += 1;
        }
        println!(
            "   {} word clouds written ({:.2}s)",
            clouds,
            cloud_start.elapsed().as_secs_f64()
        );
    }

    let total_time = total_start.elapsed();

    println!();
    println!("✅ Done! Output saved to {}", writer.dir().display());

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Lines:     {}", report.lines);
    println!("   Skipped:   {} non-message lines", report.filtered_out());
    println!("   Invalid:   {} bad timestamps", report.invalid_timestamps);
    println!("   Messages:  {}", report.messages);
    println!("   Files:     {}", writer.written().len());

    // Performance stats
    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_time.as_secs_f64());
    let msgs_per_sec = report.messages as f64 / total_time.as_secs_f64();
    println!("   Throughput:  {:.0} messages/sec", msgs_per_sec);

    Ok(())
}

/// `RUST_LOG` wins; otherwise warnings, or debug with `-v`.
fn init_logging(verbose: bool) {
    let default = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default)
        .parse_default_env()
        .init();
}

/// Reads `--stop-words`, or the language list if it exists.
fn load_stop_words(args: &Args) -> Result<HashSet<String>, ChatplotError> {
    let path = args.stop_words_path();
    if args.stop_words.is_none() && !path.exists() {
        warn!(
            "no stop-word list for '{}' at {}, continuing without one",
            args.language,
            path.display()
        );
        return Ok(HashSet::new());
    }
    let words = parse_stop_words(&fs::read_to_string(&path)?);
    println!("   {} stop words from {}", words.len(), path.display());
    Ok(words)
}

/// Decodes a mask image to grayscale.
fn load_mask(path: &Path) -> Result<Mask, ChatplotError> {
    let image = image::open(path)
        .map_err(|e| ChatplotError::mask(Some(path.to_path_buf()), e.to_string()))?
        .to_luma8();
    let (width, height) = image.dimensions();
    Mask::new(width, height, image.into_raw())
        .map_err(|e| ChatplotError::mask(Some(path.to_path_buf()), e.to_string()))
}
