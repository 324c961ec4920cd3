//! Shared helpers for storage-backed tests.

use tempfile::TempDir;

use super::connection::JsonConnection;

/// Create a connection rooted in a fresh temporary directory. The
/// directory is removed when the returned guard drops.
pub fn temp_connection() -> (JsonConnection, TempDir) {
    let dir = TempDir::new().expect("create temp dir");
    let connection = JsonConnection::new(dir.path()).expect("create connection");
    (connection, dir)
}
