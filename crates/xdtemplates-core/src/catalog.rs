//! Options catalog - named render jobs read from `Options.xml`
//!
//! ```xml
//! <Settings>
//!   <Prefixes>
//!     <Prefix Id="NORMAL" Prefix="{{" Postfix="}}" />
//!     <Prefix Id="HTMLENC" Prefix="{{||" Postfix="||}}" />
//!   </Prefixes>
//!   <Options>
//!     <Option Id="1" Name="Website" TemplateFolder="templates"
//!             OutputFolder="out" VariableFile="vars.txt" SearchPattern="*.html" />
//!   </Options>
//! </Settings>
//! ```
//!
//! `Prefixes` is optional; a missing entry keeps the default pair for that
//! variant. Relative paths are resolved against the catalog's directory.

use crate::error::{Result, XdTemplatesError};
use crate::fs::FileSystem;
use crate::job::RenderJob;
use crate::template::{DelimiterPair, Delimiters};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Prefix id for plain placeholders
pub const PLAIN_PREFIX_ID: &str = "NORMAL";
/// Prefix id for HTML-encoded placeholders
pub const ENCODED_PREFIX_ID: &str = "HTMLENC";
/// Menu input reserved for cancelling
pub const CANCEL_ID: &str = "C";

#[derive(Debug, Deserialize)]
struct SettingsXml {
    #[serde(rename = "Prefixes", default)]
    prefixes: Option<PrefixesXml>,
    #[serde(rename = "Options", default)]
    options: Option<OptionsXml>,
}

#[derive(Debug, Deserialize)]
struct PrefixesXml {
    #[serde(rename = "Prefix", default)]
    entries: Vec<PrefixXml>,
}

#[derive(Debug, Deserialize)]
struct PrefixXml {
    #[serde(rename = "@Id")]
    id: String,
    #[serde(rename = "@Prefix")]
    prefix: String,
    #[serde(rename = "@Postfix")]
    postfix: String,
}

#[derive(Debug, Deserialize)]
struct OptionsXml {
    #[serde(rename = "Option", default)]
    entries: Vec<OptionXml>,
}

#[derive(Debug, Deserialize)]
struct OptionXml {
    #[serde(rename = "@Id")]
    id: String,
    #[serde(rename = "@Name")]
    name: String,
    #[serde(rename = "@TemplateFolder")]
    template_folder: String,
    #[serde(rename = "@OutputFolder")]
    output_folder: String,
    #[serde(rename = "@VariableFile")]
    variable_file: String,
    #[serde(rename = "@SearchPattern")]
    search_pattern: String,
}

/// One named job in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOption {
    pub id: String,
    pub name: String,
    pub template_folder: PathBuf,
    pub output_folder: PathBuf,
    pub variable_file: PathBuf,
    pub search_pattern: String,
}

impl CatalogOption {
    pub fn to_job(&self, delimiters: &Delimiters) -> RenderJob {
        RenderJob::new(
            &self.template_folder,
            &self.output_folder,
            &self.variable_file,
            &self.search_pattern,
        )
        .with_delimiters(delimiters.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsCatalog {
    delimiters: Delimiters,
    options: Vec<CatalogOption>,
}

impl OptionsCatalog {
    /// Load a catalog file, resolving relative paths against its directory
    ///
    /// # Errors
    ///
    /// - `Io` if the file cannot be read
    /// - `Catalog` if the XML is malformed or ids collide
    /// - `InvalidDelimiters` if the prefixes are unusable
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self> {
        let xml = fs
            .read_text(path)
            .map_err(|e| XdTemplatesError::io("read options catalog", path, e))?;

        let base_dir = path.parent().filter(|p| !p.as_os_str().is_empty());
        Self::from_xml_str(&xml, base_dir).map_err(|e| match e {
            XdTemplatesError::Catalog(msg) => {
                XdTemplatesError::Catalog(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Parse catalog XML; relative paths are joined onto `base_dir` if given
    pub fn from_xml_str(xml: &str, base_dir: Option<&Path>) -> Result<Self> {
        let settings: SettingsXml =
            quick_xml::de::from_str(xml).map_err(|e| XdTemplatesError::Catalog(e.to_string()))?;

        let delimiters = resolve_delimiters(settings.prefixes)?;

        let resolve = |value: &str| -> PathBuf {
            let path = PathBuf::from(value);
            match base_dir {
                Some(base) if path.is_relative() => base.join(path),
                _ => path,
            }
        };

        let mut seen = HashSet::new();
        let mut options = Vec::new();
        for entry in settings.options.map(|o| o.entries).unwrap_or_default() {
            // Menu input is trimmed before matching, so ids are too
            let id = entry.id.trim().to_string();
            if id.is_empty() {
                return Err(XdTemplatesError::Catalog(format!(
                    "option '{}' has an empty Id",
                    entry.name
                )));
            }
            if id.eq_ignore_ascii_case(CANCEL_ID) {
                return Err(XdTemplatesError::Catalog(format!(
                    "option id '{}' is reserved for Cancel",
                    id
                )));
            }
            if !seen.insert(id.clone()) {
                return Err(XdTemplatesError::Catalog(format!(
                    "duplicate option id '{}'",
                    id
                )));
            }

            options.push(CatalogOption {
                template_folder: resolve(&entry.template_folder),
                output_folder: resolve(&entry.output_folder),
                variable_file: resolve(&entry.variable_file),
                search_pattern: entry.search_pattern,
                id,
                name: entry.name,
            });
        }

        Ok(Self {
            delimiters,
            options,
        })
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    pub fn options(&self) -> &[CatalogOption] {
        &self.options
    }

    pub fn find(&self, id: &str) -> Option<&CatalogOption> {
        self.options.iter().find(|o| o.id == id)
    }

    /// Build the render job for option `id` with the catalog's delimiters
    pub fn job(&self, id: &str) -> Result<RenderJob> {
        self.find(id)
            .map(|option| option.to_job(&self.delimiters))
            .ok_or_else(|| XdTemplatesError::OptionNotFound(id.to_string()))
    }
}

fn resolve_delimiters(prefixes: Option<PrefixesXml>) -> Result<Delimiters> {
    let defaults = Delimiters::default();
    let mut plain = defaults.plain;
    let mut encoded = defaults.encoded;

    for entry in prefixes.map(|p| p.entries).unwrap_or_default() {
        let pair = DelimiterPair::new(entry.prefix, entry.postfix);
        match entry.id.as_str() {
            PLAIN_PREFIX_ID => plain = pair,
            ENCODED_PREFIX_ID => encoded = pair,
            other => log::debug!("Ignoring unknown prefix id '{}'", other),
        }
    }

    Delimiters::new(plain, encoded)
}
