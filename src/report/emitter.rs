use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::analysis::bottleneck::{ERROR_RATE_THRESHOLD_PCT, P95_THRESHOLD_MS};
use crate::analysis::structs::MetricsSummary;

use super::errors::ReportError;
use super::structs::Report;

/// Write the full report as pretty-printed JSON.
pub fn write_json(report: &Report, path: &Path) -> Result<(), ReportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;
    info!("📊 Detailed report saved to: {}", path.display());
    Ok(())
}

// Endpoints by mean response time, slowest first. The sort is stable, so
// ties keep first-observed order.
fn slowest_endpoints(report: &Report, count: usize) -> Vec<(&String, &MetricsSummary)> {
    let mut endpoints: Vec<(&String, &MetricsSummary)> = report.endpoint_analysis.iter().collect();
    endpoints.sort_by(|a, b| {
        b.1.response_time
            .mean
            .partial_cmp(&a.1.response_time.mean)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    endpoints.truncate(count);
    endpoints
}

/// Print the sectioned console summary.
pub fn print_summary(report: &Report) {
    let summary = &report.summary;

    println!("\n{}", "=".repeat(60));
    println!("📊 PERFORMANCE ANALYSIS SUMMARY");
    println!("{}", "=".repeat(60));

    println!("\n📈 Overall Metrics:");
    println!("  Total Requests: {}", summary.total_requests);
    println!("  Successful: {}", summary.successful_requests);
    println!("  Failed: {}", summary.failed_requests);
    println!("  Error Rate: {:.2}%", summary.error_rate);

    println!("\n⏱️  Response Times (ms):");
    println!("  Mean: {:.0}", summary.response_time.mean);
    println!("  Median: {:.0}", summary.response_time.median);
    println!("  P90: {:.0}", summary.response_time.p90);
    println!("  P95: {:.0}", summary.response_time.p95);
    println!("  P99: {:.0}", summary.response_time.p99);

    println!("\n🚀 Throughput:");
    println!("  Requests/sec: {:.2}", summary.throughput.requests_per_second);
    println!("  Bytes/sec: {:.0}", summary.throughput.bytes_per_second);

    let slowest = slowest_endpoints(report, 5);
    if !slowest.is_empty() {
        println!("\n🐌 Top 5 Slowest Endpoints:");
        for (label, stats) in slowest {
            println!(
                "  {}: {:.0}ms avg, {:.1}% errors",
                label, stats.response_time.mean, stats.error_rate
            );
        }
    }

    if !report.bottlenecks.is_empty() {
        println!("\n🚨 Performance Bottlenecks:");
        for bottleneck in &report.bottlenecks {
            println!("  [{}] {}", bottleneck.severity, bottleneck.description);
        }
    }

    println!("\n{}", "=".repeat(60));
}

/// Pass/fail check for CI pipelines. Deliberately a separate evaluation from
/// the bottleneck rules; both sides read the same threshold constants.
pub fn print_verdict(summary: &MetricsSummary) -> i32 {
    let mut exit_code = 0;

    if summary.error_rate > ERROR_RATE_THRESHOLD_PCT {
        println!(
            "\n❌ FAIL: Error rate {:.2}% exceeds 5% threshold",
            summary.error_rate
        );
        exit_code = 1;
    }
    if summary.response_time.p95 > P95_THRESHOLD_MS {
        println!(
            "❌ FAIL: P95 response time {:.0}ms exceeds 1000ms threshold",
            summary.response_time.p95
        );
        exit_code = 1;
    }
    if exit_code == 0 {
        println!("\n✅ PASS: All performance thresholds met");
    }

    exit_code
}
