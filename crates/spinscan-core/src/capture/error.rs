//! Error type for loading capture files.

use std::path::PathBuf;

/// Fatal failure while loading a capture file. Nothing is written when this occurs.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("read capture file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse capture JSON {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("capture {} has a {kind} at the top level; expected an array of logs or a HAR object", .path.display())]
    UnexpectedRoot { path: PathBuf, kind: &'static str },
}
