//! Batch job runner - render every matching template, then verify the output

use crate::error::{Result, XdTemplatesError};
use crate::fs::{FileSystem, LocalFileSystem};
use crate::job::RenderJob;
use crate::template::{PlaceholderGrammar, RenderVerifier, TemplateRenderer};
use crate::variables::VariableStore;
use glob::Pattern;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Outcome of a completed job
///
/// Unresolved placeholders are warnings: a report is only produced when every
/// file was rendered and written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub files_processed: usize,
    /// Output base file name → distinct unresolved tokens (empty if clean)
    pub unresolved_by_file: BTreeMap<String, BTreeSet<String>>,
}

impl RunReport {
    pub fn has_unresolved(&self) -> bool {
        self.unresolved_by_file.values().any(|tokens| !tokens.is_empty())
    }

    /// Total unresolved tokens across all files
    pub fn unresolved_count(&self) -> usize {
        self.unresolved_by_file.values().map(BTreeSet::len).sum()
    }

    /// Files with at least one unresolved token, in file-name order
    pub fn files_with_unresolved(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.unresolved_by_file
            .iter()
            .filter(|(_, tokens)| !tokens.is_empty())
            .map(|(file, tokens)| (file.as_str(), tokens))
    }
}

/// Runs [`RenderJob`]s against a [`FileSystem`]
///
/// # Steps
/// 1. Load variables (parse errors abort the job)
/// 2. Enumerate templates matching the search pattern
/// 3. Create the output folder
/// 4. Render and write every template, in enumeration order
/// 5. Read every written file back and collect unresolved placeholders
///
/// Any read or write failure in step 4 aborts the job. Files written before
/// the failure stay on disk.
pub struct BatchJobRunner<'fs> {
    fs: &'fs dyn FileSystem,
}

impl<'fs> BatchJobRunner<'fs> {
    pub fn new(fs: &'fs dyn FileSystem) -> Self {
        Self { fs }
    }

    pub fn run(&self, job: &RenderJob) -> Result<RunReport> {
        let pattern =
            Pattern::new(&job.search_pattern).map_err(|e| XdTemplatesError::InvalidPattern {
                pattern: job.search_pattern.clone(),
                reason: e.to_string(),
            })?;
        let grammar = PlaceholderGrammar::new(&job.delimiters)?;

        log::info!("Data from {}", job.variable_file.display());
        let variables = VariableStore::load(self.fs, &job.variable_file)?;

        log::info!(
            "Processing {} from {}",
            job.search_pattern,
            job.template_folder.display()
        );
        let templates = self.enumerate_templates(job, &pattern)?;

        log::info!("Output to {}", job.output_folder.display());
        self.fs
            .create_dir_all(&job.output_folder)
            .map_err(|e| XdTemplatesError::io("create output folder", &job.output_folder, e))?;

        let renderer = TemplateRenderer::new(job.delimiters.clone());
        let mut written = Vec::with_capacity(templates.len());
        for template in &templates {
            let output = self.render_file(template, job, &renderer, &variables)?;
            written.push(output);
        }

        let verifier = RenderVerifier::new(grammar);
        let mut report = RunReport {
            files_processed: written.len(),
            ..RunReport::default()
        };
        for (file_name, path) in written {
            let unresolved = self.verify_file(&path, &verifier)?.unwrap_or_default();

            if !unresolved.is_empty() {
                log::info!(
                    "{}: {} unresolved placeholder(s)",
                    path.display(),
                    unresolved.len()
                );
            }
            report.unresolved_by_file.insert(file_name, unresolved);
        }

        log::info!(
            "Processed {} file(s), {} unresolved placeholder(s)",
            report.files_processed,
            report.unresolved_count()
        );
        Ok(report)
    }

    fn enumerate_templates(&self, job: &RenderJob, pattern: &Pattern) -> Result<Vec<PathBuf>> {
        if !self.fs.is_dir(&job.template_folder) {
            return Err(XdTemplatesError::SourceNotFound {
                path: job.template_folder.clone(),
            });
        }

        self.fs
            .list_files(&job.template_folder, pattern)
            .map_err(|e| XdTemplatesError::io("list templates in", &job.template_folder, e))
    }

    /// Render one template into the output folder
    ///
    /// Returns the output base file name and path.
    fn render_file(
        &self,
        template: &Path,
        job: &RenderJob,
        renderer: &TemplateRenderer,
        variables: &VariableStore,
    ) -> Result<(String, PathBuf)> {
        let file_name = template.file_name().ok_or_else(|| {
            XdTemplatesError::io(
                "determine file name of",
                template,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
            )
        })?;
        let output = job.output_folder.join(file_name);

        let text = self.fs.read_text(template).map_err(|e| {
            log::error!("Failed to read template {}: {}", template.display(), e);
            XdTemplatesError::io("read template", template, e)
        })?;

        let rendered = renderer.render(&text, variables);

        self.fs.write_text(&output, &rendered).map_err(|e| {
            log::error!("Failed to write {}: {}", output.display(), e);
            XdTemplatesError::io("write output", &output, e)
        })?;

        log::debug!("Rendered {} -> {}", template.display(), output.display());
        Ok((file_name.to_string_lossy().into_owned(), output))
    }

    /// Re-read a written file and collect unresolved tokens
    ///
    /// Returns `None` if the file vanished after being written; the report
    /// then records an empty set for it.
    fn verify_file(
        &self,
        path: &Path,
        verifier: &RenderVerifier,
    ) -> Result<Option<BTreeSet<String>>> {
        if !self.fs.exists(path) {
            log::warn!("Output {} missing at verification, skipped", path.display());
            return Ok(None);
        }

        let text = self
            .fs
            .read_text(path)
            .map_err(|e| XdTemplatesError::io("read output for verification", path, e))?;

        Ok(Some(verifier.find_unresolved(&text)))
    }
}

/// Run a job against the local disk
pub fn run_job(job: &RenderJob) -> Result<RunReport> {
    BatchJobRunner::new(&LocalFileSystem).run(job)
}
