//! Test utilities for xdtemplates
//!
//! This crate provides shared testing utilities used across the xdtemplates workspace.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the crate root
///
/// This keeps test output in a single gitignored location that is easy to
/// clean up manually if needed.
///
/// # Panics
///
/// Panics if:
/// - Unable to determine current directory
/// - Unable to create `.tmp/` directory
/// - Unable to create temporary subdirectory
///
/// # Examples
///
/// ```rust
/// use xdtemplates_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("test.txt");
/// std::fs::write(&file_path, "test data").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    let workspace_root = std::env::current_dir().expect("Failed to get current directory");

    let tmp_base = workspace_root.join(".tmp");

    // Ensure .tmp/ exists
    std::fs::create_dir_all(&tmp_base).expect("Failed to create .tmp directory");

    // Create unique subdirectory within .tmp/
    TempDir::new_in(&tmp_base).expect("Failed to create temporary directory in .tmp/")
}

/// A template job laid out on disk: `templates/`, `out/` and `vars.txt`
pub struct JobFixture {
    pub root: PathBuf,
}

impl JobFixture {
    /// Create `templates/` under `root`; `out/` is left for the runner to create
    pub fn new(root: &Path) -> Self {
        fs::create_dir_all(root.join("templates")).expect("Failed to create templates dir");
        Self {
            root: root.to_path_buf(),
        }
    }

    pub fn template_folder(&self) -> PathBuf {
        self.root.join("templates")
    }

    pub fn output_folder(&self) -> PathBuf {
        self.root.join("out")
    }

    pub fn variable_file(&self) -> PathBuf {
        self.root.join("vars.txt")
    }

    /// Write a template file
    pub fn template(&self, name: &str, content: &str) -> &Self {
        fs::write(self.template_folder().join(name), content).expect("Failed to write template");
        self
    }

    /// Write the variable file
    pub fn variables(&self, content: &str) -> &Self {
        fs::write(self.variable_file(), content).expect("Failed to write variable file");
        self
    }

    /// Read a rendered output file
    pub fn output(&self, name: &str) -> String {
        fs::read_to_string(self.output_folder().join(name)).expect("Failed to read output file")
    }

    /// Names of the files in the output folder, sorted
    pub fn output_files(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.output_folder()) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Write an options catalog pointing at the fixture, returning its path
///
/// `options` is a list of `(id, name, search_pattern)`; every option shares
/// the fixture's folders. Paths are written relative to the catalog.
pub fn write_catalog(fixture: &JobFixture, options: &[(&str, &str, &str)]) -> PathBuf {
    let mut xml = String::from("<Settings>\n  <Options>\n");
    for (id, name, pattern) in options {
        xml.push_str(&format!(
            "    <Option Id=\"{id}\" Name=\"{name}\" TemplateFolder=\"templates\" OutputFolder=\"out\" VariableFile=\"vars.txt\" SearchPattern=\"{pattern}\" />\n"
        ));
    }
    xml.push_str("  </Options>\n</Settings>\n");

    let path = fixture.root.join("Options.xml");
    fs::write(&path, xml).expect("Failed to write catalog");
    path
}
