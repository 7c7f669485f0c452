use serde::{Deserialize, Serialize};

pub type Milliseconds = u64;

/// One sampled request from a JTL results file, validated at parse time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestRecord {
    pub elapsed_ms: Milliseconds,
    pub latency_ms: Milliseconds,
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub success: bool,
    pub label: String,
    pub thread_name: String,
    pub response_message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct IngestSummary {
    pub records: Vec<RequestRecord>,
    pub dropped_rows: u64,
}
