use std::fmt;

// === FileError ===

/// Errors related to bookmark file access.
#[derive(Debug)]
pub enum FileError {
    /// The file does not exist.
    NotFound(String),
    /// Reading the file failed.
    ReadFailed(String),
    /// Writing the file failed.
    WriteFailed(String),
    /// Deleting the file failed.
    DeleteFailed(String),
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::NotFound(path) => write!(f, "File does not exist: {}", path),
            FileError::ReadFailed(msg) => write!(f, "Failed to read file: {}", msg),
            FileError::WriteFailed(msg) => write!(f, "Failed to write file: {}", msg),
            FileError::DeleteFailed(msg) => write!(f, "Failed to delete file: {}", msg),
        }
    }
}

impl std::error::Error for FileError {}

// === ManagerError ===

/// Errors related to bookmark manager orchestration.
#[derive(Debug)]
pub enum ManagerError {
    /// An operation that needs a populated store ran before `read_bookmarks`.
    NotLoaded,
    /// The underlying file operation failed.
    File(FileError),
}

impl fmt::Display for ManagerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManagerError::NotLoaded => {
                write!(f, "Bookmarks not loaded. Call read_bookmarks() first")
            }
            ManagerError::File(err) => write!(f, "Bookmark file error: {}", err),
        }
    }
}

impl std::error::Error for ManagerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ManagerError::File(err) => Some(err),
            ManagerError::NotLoaded => None,
        }
    }
}

impl From<FileError> for ManagerError {
    fn from(err: FileError) -> Self {
        ManagerError::File(err)
    }
}

// === OlympusError ===

/// Errors related to the Olympus chapter-resolution API.
#[derive(Debug)]
pub enum OlympusError {
    /// A network error occurred while contacting the API.
    NetworkError(String),
    /// The API returned a non-success status.
    ApiError(String),
    /// The API response could not be decoded.
    ParseError(String),
}

impl fmt::Display for OlympusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OlympusError::NetworkError(msg) => write!(f, "Olympus network error: {}", msg),
            OlympusError::ApiError(msg) => write!(f, "Olympus API error: {}", msg),
            OlympusError::ParseError(msg) => write!(f, "Olympus response parse error: {}", msg),
        }
    }
}

impl std::error::Error for OlympusError {}
