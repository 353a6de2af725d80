//! Outcome of a sync run

use std::path::PathBuf;

use serde::Serialize;

/// What a sync run did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// Documents written during this run, in download order
    pub downloaded: Vec<PathBuf>,
    /// Documents left alone because the destination already existed
    pub skipped: Vec<PathBuf>,
    /// Bytes of document content transferred
    pub bytes: u64,
}

impl SyncReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed download
    pub fn record_download(&mut self, path: PathBuf, bytes: u64) {
        self.downloaded.push(path);
        self.bytes += bytes;
    }

    /// Record a skipped destination
    pub fn record_skip(&mut self, path: PathBuf) {
        self.skipped.push(path);
    }

    /// True when nothing was transferred.
    pub fn is_up_to_date(&self) -> bool {
        self.downloaded.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_accumulates_bytes() {
        let mut report = SyncReport::new();
        assert!(report.is_up_to_date());

        report.record_download(PathBuf::from("a.pdf"), 10);
        report.record_download(PathBuf::from("b.pdf"), 5);
        report.record_skip(PathBuf::from("c.pdf"));

        assert_eq!(report.bytes, 15);
        assert_eq!(report.downloaded.len(), 2);
        assert_eq!(report.skipped, vec![PathBuf::from("c.pdf")]);
        assert!(!report.is_up_to_date());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let mut report = SyncReport::new();
        report.record_download(PathBuf::from("x.pdf"), 3);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["bytes"], 3);
        assert_eq!(json["downloaded"][0], "x.pdf");
        assert!(json["skipped"].as_array().unwrap().is_empty());
    }
}
