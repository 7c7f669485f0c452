use indexmap::IndexMap;

use crate::ingest::structs::RequestRecord;

use super::structs::{DataVolume, LatencyStats, MetricsSummary, ResponseTimeStats, Throughput};

const P90_CUTS: usize = 10;
const P95_CUTS: usize = 20;
const P99_CUTS: usize = 100;

/// Build a [`MetricsSummary`] over a set of records. The same fold serves
/// the whole run and every label/thread group, so per-group percentiles obey
/// the same sample-size floors as the global ones.
pub fn summarize(records: &[RequestRecord]) -> MetricsSummary {
    let refs: Vec<&RequestRecord> = records.iter().collect();
    summarize_refs(&refs)
}

/// Per-endpoint summaries, keyed by label in first-observed order.
pub fn summarize_by_label(records: &[RequestRecord]) -> IndexMap<String, MetricsSummary> {
    let mut groups: IndexMap<String, Vec<&RequestRecord>> = IndexMap::new();
    for record in records {
        groups.entry(record.label.clone()).or_default().push(record);
    }
    fold_groups(groups)
}

/// Per-thread summaries, keyed by thread name in first-observed order.
pub fn summarize_by_thread(records: &[RequestRecord]) -> IndexMap<String, MetricsSummary> {
    let mut groups: IndexMap<String, Vec<&RequestRecord>> = IndexMap::new();
    for record in records {
        groups
            .entry(record.thread_name.clone())
            .or_default()
            .push(record);
    }
    fold_groups(groups)
}

fn fold_groups(groups: IndexMap<String, Vec<&RequestRecord>>) -> IndexMap<String, MetricsSummary> {
    groups
        .into_iter()
        .map(|(key, group)| (key, summarize_refs(&group)))
        .collect()
}

fn summarize_refs(records: &[&RequestRecord]) -> MetricsSummary {
    let total = records.len() as u64;
    let successful = records.iter().filter(|r| r.success).count() as u64;
    let failed = total - successful;
    let error_rate = if total > 0 {
        failed as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    let mut elapsed: Vec<u64> = records.iter().map(|r| r.elapsed_ms).collect();
    elapsed.sort_unstable();
    let mut latency: Vec<u64> = records.iter().map(|r| r.latency_ms).collect();
    latency.sort_unstable();

    let total_bytes_sent: u64 = records.iter().map(|r| r.bytes_sent).sum();
    let total_bytes_received: u64 = records.iter().map(|r| r.bytes_received).sum();

    // The run duration proxy is the slowest single request, which overstates
    // throughput for concurrent runs. Established report contract.
    let max_elapsed = elapsed.last().copied().unwrap_or(0);
    let duration_s = max_elapsed as f64 / 1000.0;
    let (requests_per_second, bytes_per_second) = if duration_s > 0.0 {
        (total as f64 / duration_s, total_bytes_received as f64 / duration_s)
    } else {
        (0.0, 0.0)
    };

    MetricsSummary {
        total_requests: total,
        successful_requests: successful,
        failed_requests: failed,
        error_rate,
        response_time: ResponseTimeStats {
            min: elapsed.first().copied().unwrap_or(0),
            max: max_elapsed,
            mean: mean(&elapsed),
            median: median(&elapsed),
            p90: percentile(&elapsed, P90_CUTS, 9),
            p95: percentile(&elapsed, P95_CUTS, 19),
            p99: percentile(&elapsed, P99_CUTS, 99),
        },
        latency: LatencyStats {
            min: latency.first().copied().unwrap_or(0),
            max: latency.last().copied().unwrap_or(0),
            mean: mean(&latency),
            median: median(&latency),
        },
        throughput: Throughput {
            requests_per_second,
            bytes_per_second,
        },
        data_volume: DataVolume {
            total_bytes_sent,
            total_bytes_received,
        },
    }
}

fn mean(sorted: &[u64]) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    sorted.iter().sum::<u64>() as f64 / sorted.len() as f64
}

fn median(sorted: &[u64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if n % 2 == 1 {
        sorted[n / 2] as f64
    } else {
        (sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0
    }
}

// The i-th of n equal-probability cut-points over a sorted sample (the
// exclusive / type-6 estimator): positions run over m = len + 1, with the
// cut interpolated between the two neighbouring samples. Samples smaller
// than n report 0, a deliberate precision floor rather than an estimate
// from too little data.
fn percentile(sorted: &[u64], n: usize, i: usize) -> f64 {
    let len = sorted.len();
    if len < n {
        return 0.0;
    }
    let m = len + 1;
    let j = (i * m / n).clamp(1, len - 1);
    let delta = i * m - j * n;
    (sorted[j - 1] as f64 * (n - delta) as f64 + sorted[j] as f64 * delta as f64) / n as f64
}
