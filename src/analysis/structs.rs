use serde::{Deserialize, Serialize};

/// Response-time distribution in milliseconds. Percentiles are 0 when the
/// sample is too small for the estimator (see `aggregate`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseTimeStats {
    pub min: u64,
    pub max: u64,
    pub mean: f64,
    pub median: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatencyStats {
    pub min: u64,
    pub max: u64,
    pub mean: f64,
    pub median: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Throughput {
    pub requests_per_second: f64,
    pub bytes_per_second: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataVolume {
    pub total_bytes_sent: u64,
    pub total_bytes_received: u64,
}

/// Descriptive statistics for one set of records, either the whole run or a
/// single label/thread group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub error_rate: f64,
    pub response_time: ResponseTimeStats,
    pub latency: LatencyStats,
    pub throughput: Throughput,
    pub data_volume: DataVolume,
}
