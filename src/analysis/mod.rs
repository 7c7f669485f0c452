pub mod aggregate;
pub mod bottleneck;
pub mod structs;

pub use aggregate::{summarize, summarize_by_label, summarize_by_thread};
pub use bottleneck::{
    build_recommendations, detect_bottlenecks, Bottleneck, BottleneckKind, Severity,
};
pub use structs::MetricsSummary;
