//! Template inspection
//!
//! Ties the extractors to a template directory on disk: finds the
//! stylesheet, reads it once, and bundles the custom properties, color
//! scheme and proposed course file names into a [`TemplateReport`].
//! Nothing is written; the report is a starting point for a manual rewrite.

use crate::config::CoursifyConfig;
use crate::extractors::{extract_colors, extract_css_variables, ColorScheme};
use crate::fs::FileSystem;
use crate::structure::{create_template_structure, TemplateStructure};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

const FALLBACK_TEMPLATE_NAME: &str = "template";

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),
    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("No stylesheet found in {dir} (tried: {tried})")]
    StylesheetNotFound { dir: PathBuf, tried: String },
    #[error("Stylesheet {path} is {size} bytes, limit is {limit}")]
    StylesheetTooLarge { path: PathBuf, size: u64, limit: u64 },
    #[error("Failed to read file {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },
}

/// What to inspect
#[derive(Debug, Clone, Default)]
pub struct InspectRequest {
    pub template_dir: PathBuf,
    /// Overrides the name taken from the directory
    pub template_name: Option<String>,
    /// Overrides stylesheet discovery
    pub stylesheet: Option<PathBuf>,
}

impl InspectRequest {
    pub fn new(template_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: template_dir.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.template_name = Some(name.into());
        self
    }

    pub fn with_stylesheet(mut self, path: impl Into<PathBuf>) -> Self {
        self.stylesheet = Some(path.into());
        self
    }
}

/// Everything extracted from one template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateReport {
    pub template_name: String,
    pub template_dir: PathBuf,
    pub stylesheet: PathBuf,
    pub variables: BTreeMap<String, String>,
    pub colors: ColorScheme,
    pub structure: TemplateStructure,
}

pub struct TemplateInspector<F: FileSystem> {
    fs: F,
    config: CoursifyConfig,
}

impl<F: FileSystem> TemplateInspector<F> {
    pub fn new(fs: F, config: CoursifyConfig) -> Self {
        Self { fs, config }
    }

    pub fn inspect(&self, request: &InspectRequest) -> Result<TemplateReport, InspectError> {
        let dir = &request.template_dir;
        if !self.fs.exists(dir) {
            return Err(InspectError::PathNotFound(dir.clone()));
        }
        if !self.fs.is_dir(dir) {
            return Err(InspectError::NotADirectory(dir.clone()));
        }

        let template_name = match &request.template_name {
            Some(name) => name.clone(),
            None => self.template_name_from_dir(dir),
        };

        let stylesheet = match &request.stylesheet {
            Some(path) if self.fs.is_file(path) => path.clone(),
            Some(path) => {
                return Err(InspectError::StylesheetNotFound {
                    dir: dir.clone(),
                    tried: path.display().to_string(),
                })
            }
            None => self.find_stylesheet(dir)?,
        };
        info!(
            template = %template_name,
            stylesheet = %stylesheet.display(),
            "Inspecting template"
        );

        let css = self.read_stylesheet(&stylesheet)?;
        if css.trim().is_empty() {
            warn!(stylesheet = %stylesheet.display(), "Stylesheet is empty, defaults will be reported");
        }

        Ok(TemplateReport {
            variables: extract_css_variables(&css),
            colors: extract_colors(&css),
            structure: create_template_structure(&template_name, dir),
            template_name,
            template_dir: dir.clone(),
            stylesheet,
        })
    }

    fn template_name_from_dir(&self, dir: &Path) -> String {
        let name_of = |p: &Path| {
            p.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .filter(|n| !n.is_empty())
        };

        name_of(dir)
            .or_else(|| self.fs.canonicalize(dir).ok().and_then(|p| name_of(&p)))
            .unwrap_or_else(|| FALLBACK_TEMPLATE_NAME.to_string())
    }

    fn find_stylesheet(&self, dir: &Path) -> Result<PathBuf, InspectError> {
        for candidate in &self.config.stylesheet_candidates {
            let path = dir.join(candidate);
            debug!(candidate = %path.display(), "Probing stylesheet candidate");
            if self.fs.is_file(&path) {
                return Ok(path);
            }
        }

        Err(InspectError::StylesheetNotFound {
            dir: dir.to_path_buf(),
            tried: self.config.stylesheet_candidates.join(", "),
        })
    }

    fn read_stylesheet(&self, path: &Path) -> Result<String, InspectError> {
        let read_failed = |e: anyhow::Error| InspectError::ReadFailed {
            path: path.to_path_buf(),
            message: format!("{:#}", e),
        };

        let size = self.fs.file_size(path).map_err(read_failed)?;
        if size > self.config.max_stylesheet_size {
            return Err(InspectError::StylesheetTooLarge {
                path: path.to_path_buf(),
                size,
                limit: self.config.max_stylesheet_size,
            });
        }

        self.fs.read_to_string(path).map_err(read_failed)
    }
}
