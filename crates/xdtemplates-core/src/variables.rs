//! Variable file loading
//!
//! Format, one definition per line:
//!
//! ```text
//! # comment line, ignored
//! KEY=value text possibly with spaces
//! ANOTHER_KEY=123
//! ```
//!
//! Each line is trimmed; blank lines and lines starting with `#` are skipped.
//! The first `=` splits key from value. Key and value are not trimmed again.
//! A leading byte-order mark is ignored.

use crate::error::{Result, XdTemplatesError};
use crate::fs::{FileSystem, BOM};
use crate::template::grammar::is_valid_name;
use std::path::Path;

/// Ordered key/value definitions, read-only once loaded
///
/// Duplicate keys are last-write-wins: the later value replaces the earlier
/// one, keeping the position of the first definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableStore {
    entries: Vec<(String, String)>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a variable file through `fs`
    ///
    /// A missing file yields an empty store.
    ///
    /// # Errors
    ///
    /// - `Parse` for the first malformed line
    /// - `Io` if the file exists but cannot be read
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self> {
        if !fs.exists(path) {
            log::info!(
                "Variable file {} not found, rendering without variables",
                path.display()
            );
            return Ok(Self::new());
        }

        let content = fs
            .read_text(path)
            .map_err(|e| XdTemplatesError::io("read variable file", path, e))?;

        let store = Self::parse(&content, path)?;
        log::debug!("Loaded {} variable(s) from {}", store.len(), path.display());
        Ok(store)
    }

    /// Parse variable definitions; `path` is used for error reporting only
    ///
    /// # Errors
    ///
    /// Returns `Parse` identifying the first malformed line (1-based).
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let mut store = Self::new();
        let content = content.strip_prefix(BOM).unwrap_or(content);

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = split_definition(line).map_err(|reason| XdTemplatesError::Parse {
                path: path.to_path_buf(),
                line: index + 1,
                content: line.to_string(),
                reason: reason.to_string(),
            })?;

            if !is_valid_name(key) {
                log::warn!(
                    "{}:{}: key '{}' can never match a placeholder name",
                    path.display(),
                    index + 1,
                    key
                );
            }

            store.insert(key, value);
        }

        Ok(store)
    }

    /// Insert or overwrite a definition
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => {
                log::debug!("Variable '{}' redefined, later definition wins", key);
                entry.1 = value;
            }
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for VariableStore {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (key, value) in iter {
            store.insert(key, value);
        }
        store
    }
}

/// Split `KEY=value` on the first `=`
fn split_definition(line: &str) -> std::result::Result<(&str, &str), &'static str> {
    let (key, value) = line.split_once('=').ok_or("missing '=' between key and value")?;

    if key.is_empty() {
        return Err("empty key before '='");
    }
    if value.is_empty() {
        return Err("empty value after '='");
    }

    Ok((key, value))
}
