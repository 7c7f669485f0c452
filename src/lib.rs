//! Load-test results analyzer: parses JMeter-style JTL files, computes
//! descriptive statistics globally and per endpoint/thread group, flags
//! bottlenecks against fixed thresholds, and emits a JSON report plus a
//! console summary with a CI pass/fail exit code.

pub mod analysis;
pub mod ingest;
pub mod logging;
pub mod report;
