use std::fmt::Write as _;
use std::path::{Path, PathBuf};

pub const JTL_HEADER: &str =
    "timeStamp,elapsed,label,responseMessage,threadName,success,bytes,sentBytes,latency";

/// Build JTL file content from (elapsed, label, thread, success) rows.
/// Latency is half the elapsed time; byte counts are fixed per row.
pub fn create_sample_jtl(rows: &[(u64, &str, &str, bool)]) -> String {
    let mut content = String::from(JTL_HEADER);
    content.push('\n');
    for (i, (elapsed, label, thread, success)) in rows.iter().enumerate() {
        let message = if *success { "" } else { "Internal Server Error" };
        writeln!(
            content,
            "{},{},{},{},{},{},512,128,{}",
            1_714_000_000_000u64 + i as u64 * 100,
            elapsed,
            label,
            message,
            thread,
            success,
            elapsed / 2
        )
        .unwrap();
    }
    content
}

/// A healthy run: 100 fast successful requests over two endpoints. High
/// enough request count to clear every percentile floor, fast enough to
/// pass every threshold.
pub fn create_healthy_run() -> String {
    let labels = ["/home", "/api/products"];
    let rows: Vec<(u64, &str, &str, bool)> = (0..100)
        .map(|i| {
            let elapsed = 100 + (i as u64 * 7) % 700;
            (elapsed, labels[i % 2], if i % 2 == 0 { "tg1-1" } else { "tg1-2" }, true)
        })
        .collect();
    create_sample_jtl(&rows)
}

/// A degraded run: every tenth request fails and every tenth is a 5s
/// outlier, which breaches all three bottleneck rules at once.
pub fn create_degraded_run() -> String {
    let rows: Vec<(u64, &str, &str, bool)> = (0..100)
        .map(|i| {
            let slow = i % 10 == 0;
            let elapsed = if slow { 5000 } else { 200 + (i as u64 * 3) % 400 };
            let label = if slow { "/api/checkout" } else { "/home" };
            (elapsed, label, "tg1-1", i % 10 != 3)
        })
        .collect();
    create_sample_jtl(&rows)
}

/// Write JTL content into `dir` and return the file path.
pub fn write_jtl_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_sample_jtl_shape() {
        let content = create_sample_jtl(&[(120, "/home", "tg1-1", true), (300, "/cart", "tg1-2", false)]);
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some(JTL_HEADER));
        assert!(lines.next().unwrap().contains("/home"));
        assert!(lines.next().unwrap().contains("Internal Server Error"));
    }

    #[test]
    fn test_canned_runs_have_100_rows() {
        assert_eq!(create_healthy_run().lines().count(), 101);
        assert_eq!(create_degraded_run().lines().count(), 101);
    }
}
