//! Unit tests for the FileHandler.
//!
//! These tests run against a temporary directory and cover the read/write/
//! delete surface plus the missing-file failure mode.

use marcador::services::file_handler::FileHandler;
use marcador::types::errors::FileError;
use tempfile::tempdir;

/// Reading a path that does not exist fails with NotFound.
#[tokio::test]
async fn test_read_missing_file_fails() {
    let dir = tempdir().expect("Failed to create temp dir");
    let handler = FileHandler::new();

    let result = handler.read(dir.path().join("absent.html")).await;

    assert!(matches!(result, Err(FileError::NotFound(_))));
}

/// Written content reads back unchanged.
#[tokio::test]
async fn test_write_then_read_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("bookmarks.html");
    let handler = FileHandler::new();

    handler.write(&path, "<TITLE>Bookmarks</TITLE>\n").await.unwrap();
    let content = handler.read(&path).await.unwrap();

    assert_eq!(content, "<TITLE>Bookmarks</TITLE>\n");
}

/// Writing creates missing parent directories.
#[tokio::test]
async fn test_write_creates_parent_directories() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("data").join("output").join("export.html");
    let handler = FileHandler::new();

    handler.write(&path, "x").await.unwrap();

    assert_eq!(handler.read(&path).await.unwrap(), "x");
}

/// Deleting removes the file; a subsequent read fails.
#[tokio::test]
async fn test_delete_removes_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("bookmarks.html");
    let handler = FileHandler::new();

    handler.write(&path, "x").await.unwrap();
    handler.delete(&path).await.unwrap();

    assert!(matches!(
        handler.read(&path).await,
        Err(FileError::NotFound(_))
    ));
}
