pub mod errors;
pub mod reader;
pub mod structs;

pub use errors::IngestError;
pub use reader::read_results;
pub use structs::{IngestSummary, RequestRecord};
