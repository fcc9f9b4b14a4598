//! Local filesystem storage for uploaded images.
//!
//! Files are written below a root directory and served back under a public URL
//! prefix by the router's `ServeDir`. Stored names are generated server-side; the
//! client's file name contributes only a sanitized extension.

use std::{io::ErrorKind, path::PathBuf};

use chrono::Utc;
use rand::Rng;

use crate::server::{error::AppError, model::profile::UploadedImage};

/// Longest file extension kept from an uploaded file name.
const MAX_EXTENSION_LEN: usize = 8;

#[derive(Debug, Clone)]
pub struct ImageStorage {
    root: PathBuf,
    url_prefix: String,
}

impl ImageStorage {
    /// Creates a storage rooted at `root` whose files are reachable under `url_prefix`.
    pub fn new(root: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            url_prefix: url_prefix.into().trim_end_matches('/').to_string(),
        }
    }

    /// Directory files are written to.
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Public path prefix without a trailing slash.
    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    /// Writes an image into `dir` below the storage root.
    ///
    /// # Arguments
    /// - `dir` - Sub directory grouping the file, e.g. `profile`
    /// - `image` - Uploaded file contents and client metadata
    ///
    /// # Returns
    /// - `Ok(String)` - Public URL of the stored file
    /// - `Err(AppError::IoErr)` - Failed to create the directory or write the file
    pub async fn upload(&self, dir: &str, image: &UploadedImage) -> Result<String, AppError> {
        let target_dir = self.root.join(dir);
        tokio::fs::create_dir_all(&target_dir).await?;

        let file_name = generate_file_name(image);
        tokio::fs::write(target_dir.join(&file_name), &image.bytes).await?;

        tracing::debug!(
            "Stored {} byte image as {}/{}",
            image.bytes.len(),
            dir,
            file_name
        );

        Ok(format!("{}/{}/{}", self.url_prefix, dir, file_name))
    }

    /// Deletes the file behind a URL returned by `upload`.
    ///
    /// Runs after the row that referenced the file is committed, so failures are
    /// logged rather than returned. URLs outside the prefix are left alone.
    ///
    /// # Returns
    /// - `true` - A file was deleted
    /// - `false` - The URL is not ours, the file was already gone, or deletion failed
    pub async fn remove(&self, url: &str) -> bool {
        let Some(path) = self.path_for(url) else {
            tracing::debug!("Not removing {}: not a stored upload", url);
            return false;
        };

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!("Removed stored image {}", url);
                true
            }
            Err(err) if err.kind() == ErrorKind::NotFound => false,
            Err(err) => {
                tracing::warn!("Failed to remove stored image {}: {}", url, err);
                false
            }
        }
    }

    /// Maps an upload URL back to its file, accepting only `<prefix>/<dir>/<name>`
    /// with plain path segments.
    fn path_for(&self, url: &str) -> Option<PathBuf> {
        let rest = url.strip_prefix(&self.url_prefix)?.strip_prefix('/')?;
        let (dir, file_name) = rest.split_once('/')?;

        let plain = |segment: &str| {
            !segment.is_empty()
                && !segment.starts_with('.')
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        };
        if !plain(dir) || !plain(file_name) {
            return None;
        }

        Some(self.root.join(dir).join(file_name))
    }
}

/// Builds a unique stored file name from the current time and a random suffix.
///
/// The extension comes from the client's file name, or from an `image/*` content
/// type when the name has none.
fn generate_file_name(image: &UploadedImage) -> String {
    let suffix: u32 = rand::rng().random();
    let stem = format!("{}-{:08x}", Utc::now().timestamp_millis(), suffix);

    let extension = image
        .file_name
        .as_deref()
        .and_then(sanitized_extension)
        .or_else(|| {
            image
                .content_type
                .as_deref()
                .and_then(|ct| ct.strip_prefix("image/"))
                .and_then(|subtype| sanitized_extension(&format!(".{}", subtype)))
        });

    match extension {
        Some(ext) => format!("{}.{}", stem, ext),
        None => stem,
    }
}

/// Returns the lowercase extension of `file_name` if it is short and alphanumeric.
fn sanitized_extension(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;

    if ext.is_empty()
        || ext.len() > MAX_EXTENSION_LEN
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }

    Some(ext.to_ascii_lowercase())
}
