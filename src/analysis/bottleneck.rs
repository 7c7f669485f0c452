use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::structs::MetricsSummary;

/// Fixed performance thresholds. The pass/fail verdict applies the same
/// numbers in its own check, so the report and the exit code cannot drift
/// apart.
pub const P95_THRESHOLD_MS: f64 = 1000.0;
pub const ERROR_RATE_THRESHOLD_PCT: f64 = 5.0;
pub const MIN_THROUGHPUT_RPS: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BottleneckKind {
    HighResponseTime,
    HighErrorRate,
    LowThroughput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    High,
    Medium,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::High => write!(f, "HIGH"),
            Severity::Medium => write!(f, "MEDIUM"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bottleneck {
    #[serde(rename = "type")]
    pub kind: BottleneckKind,
    pub severity: Severity,
    pub description: String,
    pub recommendation: String,
}

const HIGH_RESPONSE_TIME_ADVICE: [&str; 5] = [
    "Add database indexes for frequently queried columns",
    "Implement caching for frequently accessed data",
    "Optimize slow database queries",
    "Consider using connection pooling",
    "Implement asynchronous processing for long-running operations",
];

const HIGH_ERROR_RATE_ADVICE: [&str; 5] = [
    "Implement proper error handling and logging",
    "Add circuit breakers for external service calls",
    "Implement retry mechanisms for transient failures",
    "Add input validation to prevent invalid requests",
    "Monitor application logs for error patterns",
];

const LOW_THROUGHPUT_ADVICE: [&str; 5] = [
    "Scale up server resources (CPU, memory)",
    "Implement horizontal scaling with load balancer",
    "Optimize application code for better performance",
    "Use CDN for static content",
    "Implement database read replicas",
];

const GENERAL_ADVICE: [&str; 4] = [
    "Set up continuous performance monitoring",
    "Implement performance testing in CI/CD pipeline",
    "Establish performance budgets and SLAs",
    "Regular performance regression testing",
];

/// Apply every threshold rule to a summary. All rules are evaluated; one
/// degraded metric never masks another.
pub fn detect_bottlenecks(summary: &MetricsSummary) -> Vec<Bottleneck> {
    let mut bottlenecks = Vec::new();

    if summary.response_time.p95 > P95_THRESHOLD_MS {
        bottlenecks.push(Bottleneck {
            kind: BottleneckKind::HighResponseTime,
            severity: Severity::High,
            description: format!(
                "P95 response time is {:.0}ms (>1000ms threshold)",
                summary.response_time.p95
            ),
            recommendation: "Investigate slow endpoints, database queries, or external service calls"
                .to_string(),
        });
    }

    if summary.error_rate > ERROR_RATE_THRESHOLD_PCT {
        bottlenecks.push(Bottleneck {
            kind: BottleneckKind::HighErrorRate,
            severity: Severity::High,
            description: format!("Error rate is {:.2}% (>5% threshold)", summary.error_rate),
            recommendation: "Check application logs for errors, investigate failing endpoints"
                .to_string(),
        });
    }

    if summary.throughput.requests_per_second < MIN_THROUGHPUT_RPS {
        bottlenecks.push(Bottleneck {
            kind: BottleneckKind::LowThroughput,
            severity: Severity::Medium,
            description: format!(
                "Throughput is {:.2} req/s (<50 threshold)",
                summary.throughput.requests_per_second
            ),
            recommendation: "Consider scaling up resources or optimizing application performance"
                .to_string(),
        });
    }

    bottlenecks
}

/// Remediation advice for the findings, deduplicated in insertion order so
/// the report is stable across runs. Four general items are always included.
pub fn build_recommendations(bottlenecks: &[Bottleneck]) -> IndexSet<String> {
    let mut recommendations = IndexSet::new();
    for bottleneck in bottlenecks {
        let advice: &[&str] = match bottleneck.kind {
            BottleneckKind::HighResponseTime => &HIGH_RESPONSE_TIME_ADVICE,
            BottleneckKind::HighErrorRate => &HIGH_ERROR_RATE_ADVICE,
            BottleneckKind::LowThroughput => &LOW_THROUGHPUT_ADVICE,
        };
        recommendations.extend(advice.iter().map(|s| s.to_string()));
    }
    recommendations.extend(GENERAL_ADVICE.iter().map(|s| s.to_string()));
    recommendations
}
