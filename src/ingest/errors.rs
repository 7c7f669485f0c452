use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("JTL file not found: {0}")]
    FileNotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
