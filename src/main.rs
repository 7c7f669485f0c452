use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use jtl_analyzer::analysis::{
    build_recommendations, detect_bottlenecks, summarize, summarize_by_label, summarize_by_thread,
};
use jtl_analyzer::ingest::read_results;
use jtl_analyzer::logging::init_logging;
use jtl_analyzer::report::{print_summary, print_verdict, write_json, Report};

#[derive(Parser, Debug)]
#[command(author, version, about = "Analyze JMeter JTL results for performance bottlenecks", long_about = None)]
struct Cli {
    /// Path to the JTL results file
    jtl_file: PathBuf,

    /// Write the detailed JSON report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output (debug-level logging)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run_analysis(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            error!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

fn run_analysis(cli: &Cli) -> Result<i32, Box<dyn std::error::Error + Send + Sync>> {
    let ingested = read_results(&cli.jtl_file)?;

    let summary = summarize(&ingested.records);
    let endpoint_analysis = summarize_by_label(&ingested.records);
    let thread_analysis = summarize_by_thread(&ingested.records);
    let bottlenecks = detect_bottlenecks(&summary);
    let recommendations = build_recommendations(&bottlenecks);

    info!(
        "🔍 Analyzed {} requests across {} endpoints, {} findings",
        summary.total_requests,
        endpoint_analysis.len(),
        bottlenecks.len()
    );

    let report = Report::new(
        cli.jtl_file.display().to_string(),
        summary,
        endpoint_analysis,
        thread_analysis,
        bottlenecks,
        recommendations,
    );

    if let Some(output) = &cli.output {
        write_json(&report, output)?;
    }

    print_summary(&report);
    Ok(print_verdict(&report.summary))
}
