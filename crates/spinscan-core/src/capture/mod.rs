//! Capture files: HAR-style network logs exported from a debug session.
//!
//! A capture is an array of log entries; entries holding a nested `log`
//! object with `entries` contribute HTTP exchange records. Anything else in
//! the array (console events, DOM snapshots) is ignored.

mod error;
mod load;
mod parse;

pub use error::CaptureError;
pub use load::{load_capture, CaptureLog};
pub use parse::{HarContent, HarEntry, HarPostData, HarRequest, HarResponse, HarRoot, LogEntry};

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_capture(json: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(json.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn load_capture_array_of_logs() {
        let f = write_capture(
            r#"[
                { "type": "SESSION" },
                { "log": { "entries": [
                    { "request": { "url": "https://a/handler.ashx", "method": "POST" } },
                    { "request": { "url": "https://a/img.png", "method": "GET" } }
                ] } },
                { "log": { "version": "1.2" } }
            ]"#,
        );
        let capture = load_capture(f.path()).unwrap();
        assert_eq!(capture.logs.len(), 3);
        let http: Vec<_> = capture.http_logs().collect();
        assert_eq!(http.len(), 1);
        assert_eq!(http[0].0, 1);
        assert_eq!(http[0].1.len(), 2);
    }

    #[test]
    fn load_capture_single_har_object() {
        let f = write_capture(
            r#"{ "log": { "version": "1.2", "entries": [
                { "request": { "url": "https://a/handler.ashx", "method": "POST" } }
            ] } }"#,
        );
        let capture = load_capture(f.path()).unwrap();
        let http: Vec<_> = capture.http_logs().collect();
        assert_eq!(http.len(), 1);
        assert_eq!(http[0].0, 0);
    }

    #[test]
    fn load_capture_keeps_slot_for_non_object_element() {
        let f = write_capture(r#"[ "noise", 42, { "log": { "entries": [] } } ]"#);
        let capture = load_capture(f.path()).unwrap();
        assert_eq!(capture.logs.len(), 3);
        let http: Vec<_> = capture.http_logs().collect();
        assert_eq!(http.len(), 1);
        assert_eq!(http[0].0, 2);
        assert!(http[0].1.is_empty());
    }

    #[test]
    fn load_capture_missing_file_err() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_capture(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CaptureError::Read { .. }));
    }

    #[test]
    fn load_capture_invalid_json_err() {
        let f = write_capture("[ { \"log\": ");
        let err = load_capture(f.path()).unwrap_err();
        assert!(matches!(err, CaptureError::Parse { .. }));
    }

    #[test]
    fn load_capture_scalar_root_err() {
        let f = write_capture("\"just a string\"");
        let err = load_capture(f.path()).unwrap_err();
        match err {
            CaptureError::UnexpectedRoot { kind, .. } => assert_eq!(kind, "string"),
            other => panic!("expected UnexpectedRoot, got {other:?}"),
        }
    }
}
