//! Discovery and reading of a Doxygen XML output directory.

use crate::error::{DoxygenError, Result};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// File name of the index document Doxygen writes next to the compound documents.
pub const INDEX_FILE: &str = "index.xml";

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &Path) -> Cow<'_, Path> {
    if let Ok(stripped) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.join(stripped));
    }
    Cow::Borrowed(path)
}

/// Lists the XML documents in `path`, sorted by file name.
pub async fn list(path: &Path) -> Result<Vec<PathBuf>> {
    ensure_directory(path).await?;

    let read_error = |source| DoxygenError::FileRead {
        path: path.to_path_buf(),
        source,
    };
    let mut entries = tokio::fs::read_dir(path).await.map_err(read_error)?;

    let mut documents = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(read_error)? {
        let file_path = entry.path();
        let is_xml = file_path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"));
        if is_xml && entry.file_type().await.is_ok_and(|t| t.is_file()) {
            documents.push(file_path);
        }
    }

    documents.sort();
    tracing::debug!("Found {} XML documents in {}", documents.len(), path.display());
    Ok(documents)
}

/// Reads a document as UTF-8 text.
pub async fn read(file_path: &Path) -> Result<String> {
    tokio::fs::read_to_string(file_path)
        .await
        .map_err(|source| DoxygenError::FileRead {
            path: file_path.to_path_buf(),
            source,
        })
}

/// Confirms `path` is a directory holding an index document.
pub async fn validate(path: &Path) -> Result<()> {
    ensure_directory(path).await?;

    let index = path.join(INDEX_FILE);
    let has_index = tokio::fs::metadata(&index)
        .await
        .is_ok_and(|metadata| metadata.is_file());
    if !has_index {
        return Err(DoxygenError::InvalidStructure {
            path: path.to_path_buf(),
            reason: format!("missing {}", INDEX_FILE),
        });
    }
    Ok(())
}

async fn ensure_directory(path: &Path) -> Result<()> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        _ => Err(DoxygenError::DirectoryNotFound {
            path: path.to_path_buf(),
        }),
    }
}
