//! Capture fixtures shared by integration tests.

use std::path::{Path, PathBuf};

/// A debug-session capture: one console event, one log with three spins and
/// some unrelated traffic, and a second log with a single spin.
pub const SESSION_CAPTURE: &str = r#"[
    { "type": "CONSOLE", "data": { "message": "session started" } },
    { "log": { "version": "1.2", "entries": [
        {
            "request": {
                "url": "https://game.example.com/slots/handler.ashx",
                "method": "POST",
                "postData": { "mimeType": "application/json", "text": "{\"cmd\":\"spin\",\"id\":\"req-001\",\"bet\":1}" }
            },
            "response": {
                "status": 200,
                "content": { "size": 87, "mimeType": "application/json", "text": "{\"win\":0,\"reels\":[1,2,3]}" }
            }
        },
        {
            "request": { "url": "https://game.example.com/static/reels.png", "method": "GET" },
            "response": { "status": 200, "content": { "size": 4096, "mimeType": "image/png" } }
        },
        {
            "request": {
                "url": "https://game.example.com/slots/handler.ashx",
                "method": "POST",
                "postData": { "text": "not json at all" }
            },
            "response": { "status": 500, "content": { "size": 0, "mimeType": "text/plain" } }
        },
        {
            "request": { "url": "https://game.example.com/slots/handler.ashx", "method": "POST" },
            "response": { "status": 200, "content": { "size": 12, "mimeType": "application/json", "text": "{\"ok\":true}" } }
        }
    ] } },
    { "log": { "version": "1.2" } },
    { "log": { "entries": [
        {
            "request": {
                "url": "https://game.example.com/slots/handler.ashx?bonus=1",
                "method": "POST",
                "postData": { "text": "{\"cmd\":\"bonusSpin\",\"id\":99}" }
            },
            "response": { "status": 200, "content": { "size": 3, "mimeType": "application/json", "text": "{}" } }
        }
    ] } }
]"#;

pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
