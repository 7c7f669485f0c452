pub mod emitter;
pub mod errors;
pub mod structs;

pub use emitter::{print_summary, print_verdict, write_json};
pub use errors::ReportError;
pub use structs::Report;
