use chrono::Utc;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::analysis::bottleneck::Bottleneck;
use crate::analysis::structs::MetricsSummary;

/// Everything one analysis run produces. Field order here is the key order
/// in the JSON file; the ordered maps keep first-observed group order, so
/// re-runs serialize identically apart from `generated_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: String,
    pub test_file: String,
    pub summary: MetricsSummary,
    pub endpoint_analysis: IndexMap<String, MetricsSummary>,
    pub thread_analysis: IndexMap<String, MetricsSummary>,
    pub bottlenecks: Vec<Bottleneck>,
    pub recommendations: IndexSet<String>,
}

impl Report {
    pub fn new(
        test_file: String,
        summary: MetricsSummary,
        endpoint_analysis: IndexMap<String, MetricsSummary>,
        thread_analysis: IndexMap<String, MetricsSummary>,
        bottlenecks: Vec<Bottleneck>,
        recommendations: IndexSet<String>,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            test_file,
            summary,
            endpoint_analysis,
            thread_analysis,
            bottlenecks,
            recommendations,
        }
    }
}
