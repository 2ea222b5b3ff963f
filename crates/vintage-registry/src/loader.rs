//! Profile document parsing and directory loading.
//!
//! A document is TOML or JSON with a top-level `technologies` array of
//! [`TechnologyProfile`] records. This is the only module that touches disk.

use std::path::Path;

use serde::Deserialize;

use vintage_core::errors::RegistryLoadError;
use vintage_core::models::TechnologyProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Toml,
    Json,
}

impl SourceFormat {
    /// Format implied by a file extension, `None` for anything else.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProfileDocument {
    #[serde(default)]
    technologies: Vec<TechnologyProfile>,
}

/// Parse one document into profiles. No validation happens here.
pub fn parse_document(
    source_name: &str,
    content: &str,
    format: SourceFormat,
) -> Result<Vec<TechnologyProfile>, RegistryLoadError> {
    let parse_error = |message: String| RegistryLoadError::Parse {
        source_name: source_name.to_string(),
        message,
    };
    let document: ProfileDocument = match format {
        SourceFormat::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string()))?,
        SourceFormat::Json => {
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?
        }
    };
    Ok(document.technologies)
}

/// Load all `*.toml` and `*.json` files in `dir`, sorted by file name.
/// Other files and subdirectories are ignored.
pub fn load_dir(dir: &Path) -> Result<Vec<TechnologyProfile>, RegistryLoadError> {
    let io_error = |path: &Path, e: std::io::Error| RegistryLoadError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    let mut files: Vec<(std::path::PathBuf, SourceFormat)> = std::fs::read_dir(dir)
        .map_err(|e| io_error(dir, e))?
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if !path.is_file() {
                return None;
            }
            SourceFormat::from_path(&path).map(|format| (path, format))
        })
        .collect();
    files.sort_by(|a, b| a.0.file_name().cmp(&b.0.file_name()));

    let mut profiles = Vec::new();
    for (path, format) in files {
        let content = std::fs::read_to_string(&path).map_err(|e| io_error(&path, e))?;
        let parsed = parse_document(&path.display().to_string(), &content, format)?;
        tracing::debug!(path = %path.display(), technologies = parsed.len(), "parsed profile file");
        profiles.extend(parsed);
    }
    Ok(profiles)
}
