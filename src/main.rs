use anyhow::Result;
use clap::Parser;
use debate_scrape::DebateScraper;
use std::path::PathBuf;

/// Harvest CreateDebate threads into JSONL records.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory for threads.log / threads.json / threads2.json / debug.txt
    #[arg(long)]
    data_dir: PathBuf,

    /// Tag of the debates to browse
    #[arg(long)]
    tag: String,

    /// Number of listing pages (viewed in 96-offset mode)
    #[arg(long)]
    page_count: usize,

    /// Type of debates
    #[arg(long = "type", default_value = "alltypes")]
    debate_type: String,

    /// mostheated / mostrecent / mostarguments etc.
    #[arg(long, default_value = "mostheated")]
    sort_by: String,

    /// Period of the debate
    #[arg(long = "time", default_value = "alltime")]
    time_window: String,

    /// open / closed
    #[arg(long, default_value = "open")]
    state: String,

    /// Thread pages processed concurrently (1 = sequential, ordered output)
    #[arg(long, default_value_t = 1)]
    parallelism: usize,

    /// Disable progress bars
    #[arg(long)]
    no_progress: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let summary = DebateScraper::new()
        .data_dir(&args.data_dir)
        .tag(&args.tag)
        .page_count(args.page_count)
        .debate_type(args.debate_type)
        .sort_by(args.sort_by)
        .time_window(args.time_window)
        .state(args.state)
        .parallelism(args.parallelism)
        .progress(!args.no_progress)
        .run()?;

    println!(
        "Wrote {} threads across {} listing pages ({} failures logged)",
        summary.threads_written, summary.pages, summary.failures
    );
    Ok(())
}
