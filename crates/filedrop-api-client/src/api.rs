//! Domain methods for the Filedrop API client.
//!
//! The backend exposes a single upload endpoint; its response body is
//! returned to the caller as untyped JSON.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::error::ClientResult;
use crate::{ApiClient, API_PREFIX};

/// A file to send to the backend: the raw bytes plus the filename reported
/// in the multipart form. The content is forwarded as-is, never inspected.
#[derive(Clone, Debug)]
pub struct FileUpload {
    pub filename: String,
    pub content: Vec<u8>,
}

impl FileUpload {
    pub fn new(filename: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content,
        }
    }
}

/// Filename reported in the multipart form: the path's final component, or
/// `file.bin` when the path has none.
fn multipart_filename(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("file.bin")
}

impl ApiClient {
    /// Upload a file and return the backend's JSON response.
    ///
    /// The request body is a multipart form with a single part named `file`;
    /// the multipart boundary and Content-Type header are generated by the
    /// transport.
    pub async fn upload(&self, file: FileUpload) -> ClientResult<Value> {
        tracing::debug!(
            filename = %file.filename,
            size = file.content.len(),
            "Uploading file"
        );

        let form = reqwest::multipart::Form::new().part(
            "file",
            reqwest::multipart::Part::bytes(file.content).file_name(file.filename),
        );

        self.post_multipart(&format!("{}/upload", API_PREFIX), form)
            .await
    }

    /// Upload a file from a local path.
    pub async fn upload_path(&self, file_path: &str) -> Result<Value> {
        use std::io::Read;

        let path = Path::new(file_path);
        let mut file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open file: {}", file_path))?;

        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)
            .with_context(|| format!("Failed to read file: {}", file_path))?;

        let response = self
            .upload(FileUpload::new(multipart_filename(path), buffer))
            .await?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_upload_new() {
        let file = FileUpload::new("notes.txt", b"hello".to_vec());
        assert_eq!(file.filename, "notes.txt");
        assert_eq!(file.content, b"hello");
    }

    #[test]
    fn test_multipart_filename_uses_final_component() {
        let name = multipart_filename(Path::new("/tmp/reports/report.txt"));
        assert_eq!(name, "report.txt");
    }

    #[test]
    fn test_multipart_filename_falls_back_without_component() {
        assert_eq!(multipart_filename(Path::new("/tmp/reports/..")), "file.bin");
        assert_eq!(multipart_filename(Path::new("/")), "file.bin");
    }

    #[cfg(unix)]
    #[test]
    fn test_multipart_filename_non_utf8_falls_back() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"bad\xFFname");
        assert_eq!(multipart_filename(Path::new(name)), "file.bin");
    }
}
