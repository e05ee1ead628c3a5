//! CLI command implementations

pub mod generate;
pub mod list;

use crate::cli::CatalogArgs;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Catalog file looked up next to the executable when no path is given
pub const DEFAULT_OPTIONS_FILE: &str = "Options.xml";

/// How a command finished; mapped to the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// `--deny-unresolved` was set and placeholders were left in the output
    UnresolvedDenied,
    Cancelled,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Done | Outcome::Cancelled => 0,
            Outcome::UnresolvedDenied => 2,
        }
    }
}

/// `--options` / `XDTEMPLATES_OPTIONS`, else `Options.xml` beside the binary
pub fn resolve_options_path(args: &CatalogArgs) -> Result<PathBuf> {
    if let Some(path) = &args.options {
        return Ok(path.clone());
    }

    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let dir = exe
        .parent()
        .context("Executable path has no parent directory")?;
    Ok(dir.join(DEFAULT_OPTIONS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Outcome::Done.exit_code(), 0);
        assert_eq!(Outcome::Cancelled.exit_code(), 0);
        assert_eq!(Outcome::UnresolvedDenied.exit_code(), 2);
    }

    #[test]
    fn test_explicit_options_path_wins() {
        let args = CatalogArgs {
            options: Some(PathBuf::from("/etc/xd/Options.xml")),
        };
        assert_eq!(
            resolve_options_path(&args).unwrap(),
            PathBuf::from("/etc/xd/Options.xml")
        );
    }

    #[test]
    fn test_default_options_path_beside_exe() {
        let args = CatalogArgs { options: None };
        let path = resolve_options_path(&args).unwrap();
        assert_eq!(path.file_name().unwrap(), DEFAULT_OPTIONS_FILE);
        assert_eq!(
            path.parent(),
            std::env::current_exe().unwrap().parent()
        );
    }
}
