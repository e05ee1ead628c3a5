//! Render job description

use crate::template::Delimiters;
use std::path::PathBuf;

/// Everything needed for one batch rendering run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderJob {
    /// Directory holding the template files
    pub template_folder: PathBuf,
    /// Destination directory, created if absent
    pub output_folder: PathBuf,
    /// Key/value definitions file; a missing file means no variables
    pub variable_file: PathBuf,
    /// Glob pattern on file names, e.g. `*.html`
    pub search_pattern: String,
    pub delimiters: Delimiters,
}

impl RenderJob {
    /// Create a job using the default delimiters
    pub fn new(
        template_folder: impl Into<PathBuf>,
        output_folder: impl Into<PathBuf>,
        variable_file: impl Into<PathBuf>,
        search_pattern: impl Into<String>,
    ) -> Self {
        Self {
            template_folder: template_folder.into(),
            output_folder: output_folder.into(),
            variable_file: variable_file.into(),
            search_pattern: search_pattern.into(),
            delimiters: Delimiters::default(),
        }
    }

    pub fn with_delimiters(mut self, delimiters: Delimiters) -> Self {
        self.delimiters = delimiters;
        self
    }
}
