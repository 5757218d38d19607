//! # chatchunk CLI
//!
//! Command-line interface for the chatchunk library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatchunk::cli::Args;
use chatchunk::core::{Formatter, PartitionStats, Repository, partition};
use chatchunk::format::write_to_format;
use chatchunk::logging::init_tracing;
use chatchunk::parsing::read_topic_names;
use chatchunk::ChatchunkError;

fn main() {
    let args = <Args as ClapParser>::parse();

    if let Err(e) = init_tracing(args.verbose, args.log_level.as_deref(), args.log_json) {
        eprintln!("⚠️  Logging disabled: {}", e);
    }

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ChatchunkError> {
    let total_start = Instant::now();

    // Validate everything before touching the input
    let config = args.chunk_config()?;
    let options = args.format_options();
    let format = args.output_format()?;
    let output_path = args.output_path(format);

    println!("📦 chatchunk v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input.display());
    println!("💾 Output:  {}", output_path.display());
    println!("📄 Format:  {}", format);
    println!("✂️  Mode:    {}", config.mode);
    if !args.topics.is_empty() {
        let ids: Vec<String> = args.topics.iter().map(ToString::to_string).collect();
        println!("🧵 Topics:  {}", ids.join(", "));
    }
    println!();

    // Step 1: Load
    println!("⏳ Loading dump...");
    let load_start = Instant::now();
    let mut repo = Repository::from_path(&args.input)?;
    if let Some(ref names_path) = args.topic_names {
        repo = repo.with_topic_names(read_topic_names(names_path)?);
    }
    println!(
        "   Found {} messages in {} topics ({:.2}s)",
        repo.len(),
        repo.topic_count(),
        load_start.elapsed().as_secs_f64()
    );

    for id in &args.topics {
        if repo.topic(*id).is_none() {
            tracing::warn!(topic = id, "requested topic not in dump");
        }
    }

    // Step 2: Gather + partition
    println!("✂️  Partitioning...");
    let split_start = Instant::now();
    let messages = repo.gather(&args.topics);
    let chunks = partition(&messages, &config)?;
    println!(
        "   {} chunks from {} messages ({:.2}s)",
        chunks.len(),
        messages.len(),
        split_start.elapsed().as_secs_f64()
    );

    // Step 3: Write
    println!("💾 Writing {}...", format);
    let write_start = Instant::now();
    let formatter = Formatter::new(&repo);
    write_to_format(&chunks, &output_path, format, &formatter, &options)?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    let total_time = total_start.elapsed();
    let stats = PartitionStats::from_chunks(&chunks);

    println!();
    println!("✅ Done! Output saved to {}", output_path.display());

    println!();
    println!("📊 Summary:");
    println!("   Messages:  {}", stats.messages);
    println!("   Chunks:    {}", stats.chunks);
    if stats.chunks > 0 {
        println!(
            "   Sizes:     {}..{} (avg {:.1})",
            stats.smallest_chunk,
            stats.largest_chunk,
            stats.average_chunk_size()
        );
    }
    println!(
        "   Text:      {} words, {} punctuation",
        stats.text.words, stats.text.punctuation
    );

    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_time.as_secs_f64());

    Ok(())
}
