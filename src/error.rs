use std::path::PathBuf;
use thiserror::Error;

/// Common error type for palette loading and template processing
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Failed to read palette {path}: {source}")]
    PaletteRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse palette {path}: {source}")]
    PaletteParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Palette has no variant {mode}-{contrast}")]
    UnknownVariant { mode: String, contrast: String },

    #[error("Failed to read template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ThemeError {
    pub fn unknown_variant(mode: impl Into<String>, contrast: impl Into<String>) -> Self {
        Self::UnknownVariant {
            mode: mode.into(),
            contrast: contrast.into(),
        }
    }

    pub fn template_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::TemplateRead {
            path: path.into(),
            source,
        }
    }

    pub fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }
}
