//! List command - show the jobs configured in the options catalog

use super::{Outcome, resolve_options_path};
use crate::cli::CatalogArgs;
use anyhow::{Context, Result};
use colored::Colorize;
use xdtemplates_core::catalog::OptionsCatalog;
use xdtemplates_core::fs::LocalFileSystem;

pub fn run(catalog_args: CatalogArgs) -> Result<Outcome> {
    let path = resolve_options_path(&catalog_args)?;
    let catalog = OptionsCatalog::load(&LocalFileSystem, &path)
        .with_context(|| format!("Failed to load options catalog {}", path.display()))?;

    if catalog.options().is_empty() {
        println!("{} No options configured in {}", "!".yellow(), path.display());
        return Ok(Outcome::Done);
    }

    let delimiters = catalog.delimiters();
    println!(
        "{} Placeholders: {}  {}",
        "→".cyan(),
        delimiters.plain.wrap("KEY"),
        delimiters.encoded.wrap("KEY")
    );

    for option in catalog.options() {
        println!(
            "[{}]. {}  {}",
            option.id.bold(),
            option.name,
            format!(
                "({} → {}, {})",
                option.template_folder.display(),
                option.output_folder.display(),
                option.search_pattern
            )
            .dimmed()
        );
    }
    Ok(Outcome::Done)
}
