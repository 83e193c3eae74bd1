use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::ExportDocument;
use crate::utils::fs::validate_file_size;

/// Read a previously exported document back from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, is larger than 10MB, or is not a
/// valid export document.
pub fn load_export_document(path: &Path) -> Result<ExportDocument> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open export file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse export file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_load_minimal_document() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"emails":[],"slack":{{"channels":[]}},"msteams":{{"channels":[]}}}}"#)
            .unwrap();
        file.flush().unwrap();

        let doc = load_export_document(file.path()).unwrap();
        assert_eq!(doc, ExportDocument::default());
    }

    #[test]
    fn test_load_with_messages() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r##"{{
  "emails": [{{"from": "Bob Smith <bob.smith@example.com>", "subject": "Hi", "timestamp": "2025-01-02T03:04:05.006Z", "body": "Hi"}}],
  "slack": {{"channels": [{{"name": "#tiktok", "messages": [{{"from": "Emma Davis", "timestamp": 1735787045006, "text": "Yo"}}]}}]}},
  "msteams": {{"channels": []}}
}}"##
        )
        .unwrap();
        file.flush().unwrap();

        let doc = load_export_document(file.path()).unwrap();
        assert_eq!(doc.emails.len(), 1);
        assert_eq!(doc.emails[0].timestamp.timestamp_millis(), 1735787045006);
        assert_eq!(doc.slack.channels[0].messages[0].timestamp, doc.emails[0].timestamp);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_export_document(Path::new("/nonexistent/export.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to open export file"));
    }

    #[test]
    fn test_load_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{\"emails\": [").unwrap();
        file.flush().unwrap();

        let err = load_export_document(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse export file"));
    }

    #[test]
    fn test_load_missing_section() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"emails":[],"slack":{{"channels":[]}}}}"#).unwrap();
        file.flush().unwrap();

        assert!(load_export_document(file.path()).is_err());
    }
}
