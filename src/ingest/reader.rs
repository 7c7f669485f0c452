use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info, warn};

use super::errors::IngestError;
use super::structs::{IngestSummary, RequestRecord};

// Column positions resolved from the header row. JTL exports vary in column
// order and may omit columns entirely.
#[derive(Debug, Default)]
struct ColumnIndex {
    elapsed: Option<usize>,
    latency: Option<usize>,
    sent_bytes: Option<usize>,
    bytes: Option<usize>,
    success: Option<usize>,
    label: Option<usize>,
    thread_name: Option<usize>,
    response_message: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut index = Self::default();
        for (pos, name) in headers.iter().enumerate() {
            match name {
                "elapsed" => index.elapsed = Some(pos),
                "latency" => index.latency = Some(pos),
                "sentBytes" => index.sent_bytes = Some(pos),
                "bytes" => index.bytes = Some(pos),
                "success" => index.success = Some(pos),
                "label" => index.label = Some(pos),
                "threadName" => index.thread_name = Some(pos),
                "responseMessage" => index.response_message = Some(pos),
                _ => {} // Unrecognized columns are ignored
            }
        }
        index
    }
}

// A numeric cell must parse when its column exists; a wholly absent column
// counts as zero for every row.
fn numeric_field(row: &StringRecord, pos: Option<usize>) -> Option<u64> {
    match pos {
        Some(i) => row.get(i)?.parse::<u64>().ok(),
        None => Some(0),
    }
}

fn text_field<'a>(row: &'a StringRecord, pos: Option<usize>) -> Option<&'a str> {
    pos.and_then(|i| row.get(i))
}

fn parse_row(index: &ColumnIndex, row: &StringRecord) -> Option<RequestRecord> {
    let elapsed_ms = numeric_field(row, index.elapsed)?;
    let latency_ms = numeric_field(row, index.latency)?;
    let bytes_sent = numeric_field(row, index.sent_bytes)?;
    let bytes_received = numeric_field(row, index.bytes)?;

    let success = text_field(row, index.success)
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    let label = text_field(row, index.label).unwrap_or("Unknown").to_string();
    let thread_name = text_field(row, index.thread_name)
        .unwrap_or("Unknown")
        .to_string();
    let response_message = text_field(row, index.response_message)
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    Some(RequestRecord {
        elapsed_ms,
        latency_ms,
        bytes_sent,
        bytes_received,
        success,
        label,
        thread_name,
        response_message,
    })
}

/// Read a JTL results file into typed records, in source order. Rows that
/// fail numeric validation are dropped and counted, never fatal.
pub fn read_results<P: AsRef<Path>>(path: P) -> Result<IngestSummary, IngestError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IngestError::FileNotFound(path.display().to_string()));
    }

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_path(path)?;
    let headers = reader.headers()?.clone();
    let index = ColumnIndex::from_headers(&headers);

    let mut records = Vec::new();
    let mut dropped_rows = 0u64;
    for (line, row) in reader.records().enumerate() {
        let row = row?;
        match parse_row(&index, &row) {
            Some(record) => {
                if !record.success {
                    debug!(
                        "Failed request: label={} message={}",
                        record.label,
                        record.response_message.as_deref().unwrap_or("Unknown error")
                    );
                }
                records.push(record);
            }
            None => {
                dropped_rows += 1;
                debug!("🗑️ Dropped malformed row at line {}", line + 2);
            }
        }
    }

    info!("✅ Parsed {} results from {}", records.len(), path.display());
    if dropped_rows > 0 {
        warn!("⚠️ Skipped {} malformed rows", dropped_rows);
    }

    Ok(IngestSummary { records, dropped_rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_jtl(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_well_formed_rows() {
        let file = write_jtl(
            "timeStamp,elapsed,label,responseMessage,threadName,success,bytes,sentBytes,latency\n\
             1714000000000,120,/home,,tg1-1,true,512,128,60\n\
             1714000000100,340,/api/login,Internal Server Error,tg1-2,false,256,96,200\n",
        );

        let ingested = read_results(file.path()).unwrap();
        assert_eq!(ingested.records.len(), 2);
        assert_eq!(ingested.dropped_rows, 0);

        let first = &ingested.records[0];
        assert_eq!(first.elapsed_ms, 120);
        assert_eq!(first.latency_ms, 60);
        assert_eq!(first.bytes_sent, 128);
        assert_eq!(first.bytes_received, 512);
        assert!(first.success);
        assert_eq!(first.label, "/home");
        assert_eq!(first.thread_name, "tg1-1");
        assert_eq!(first.response_message, None);

        let second = &ingested.records[1];
        assert!(!second.success);
        assert_eq!(second.response_message.as_deref(), Some("Internal Server Error"));
    }

    #[test]
    fn test_malformed_numeric_rows_are_dropped() {
        let file = write_jtl(
            "elapsed,label,success\n\
             100,/home,true\n\
             abc,/home,true\n\
             ,/home,true\n\
             -5,/home,true\n\
             200,/home,true\n",
        );

        let ingested = read_results(file.path()).unwrap();
        assert_eq!(ingested.records.len(), 2);
        assert_eq!(ingested.dropped_rows, 3);
        assert_eq!(ingested.records[0].elapsed_ms, 100);
        assert_eq!(ingested.records[1].elapsed_ms, 200);
    }

    #[test]
    fn test_short_rows_are_dropped() {
        // Second data row is cut before the elapsed cell
        let file = write_jtl(
            "label,threadName,elapsed,success\n\
             /home,tg1-1,100,true\n\
             /home\n",
        );

        let ingested = read_results(file.path()).unwrap();
        assert_eq!(ingested.records.len(), 1);
        assert_eq!(ingested.dropped_rows, 1);
    }

    #[test]
    fn test_absent_columns_default() {
        let file = write_jtl("elapsed\n150\n");

        let ingested = read_results(file.path()).unwrap();
        assert_eq!(ingested.records.len(), 1);

        let record = &ingested.records[0];
        assert_eq!(record.elapsed_ms, 150);
        assert_eq!(record.latency_ms, 0);
        assert_eq!(record.bytes_sent, 0);
        assert_eq!(record.bytes_received, 0);
        assert!(!record.success);
        assert_eq!(record.label, "Unknown");
        assert_eq!(record.thread_name, "Unknown");
        assert_eq!(record.response_message, None);
    }

    #[test]
    fn test_success_flag_is_case_insensitive() {
        let file = write_jtl(
            "elapsed,success\n\
             100,true\n\
             100,TRUE\n\
             100,True\n\
             100,false\n\
             100,yes\n",
        );

        let ingested = read_results(file.path()).unwrap();
        let flags: Vec<bool> = ingested.records.iter().map(|r| r.success).collect();
        assert_eq!(flags, vec![true, true, true, false, false]);
    }

    #[test]
    fn test_unrecognized_columns_ignored() {
        let file = write_jtl(
            "timeStamp,elapsed,responseCode,grpThreads,allThreads,URL,success\n\
             1714000000000,250,200,10,10,http://localhost/home,true\n",
        );

        let ingested = read_results(file.path()).unwrap();
        assert_eq!(ingested.records.len(), 1);
        assert_eq!(ingested.records[0].elapsed_ms, 250);
        assert!(ingested.records[0].success);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let file = write_jtl(
            "elapsed,label,success\n\
             100 , /home ,  true\n",
        );

        let ingested = read_results(file.path()).unwrap();
        assert_eq!(ingested.records.len(), 1);
        assert_eq!(ingested.records[0].elapsed_ms, 100);
        assert_eq!(ingested.records[0].label, "/home");
        assert!(ingested.records[0].success);
    }

    #[test]
    fn test_empty_label_is_kept_as_empty_key() {
        let file = write_jtl(
            "elapsed,label,success\n\
             100,,true\n",
        );

        let ingested = read_results(file.path()).unwrap();
        assert_eq!(ingested.records[0].label, "");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = read_results("/nonexistent/results.jtl");
        assert!(matches!(result, Err(IngestError::FileNotFound(_))));
    }
}
