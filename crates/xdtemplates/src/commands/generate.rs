//! Generate commands - run a job from flags or from the options catalog

use super::{Outcome, resolve_options_path};
use crate::cli::{CatalogArgs, DirectArgs, ReportArgs};
use crate::menu::{ChoiceSource, LineSource, Menu, Selection, TerminalSource};
use crate::output;
use anyhow::{Context, Result};
use std::io::{self, IsTerminal};
use xdtemplates_core::catalog::OptionsCatalog;
use xdtemplates_core::fs::LocalFileSystem;
use xdtemplates_core::template::{DelimiterPair, Delimiters};
use xdtemplates_core::{BatchJobRunner, RenderJob};

/// `gen direct`: build the job from command-line flags and run it
pub fn run_direct(args: DirectArgs) -> Result<Outcome> {
    let delimiters = Delimiters::new(
        DelimiterPair::new(args.prefix, args.postfix),
        DelimiterPair::new(args.html_prefix, args.html_postfix),
    )?;

    let job = RenderJob::new(
        args.template_folder,
        args.output_folder,
        args.vars,
        args.pattern,
    )
    .with_delimiters(delimiters);

    execute(&job, args.report)
}

/// `gen menu`: pick a catalog option interactively and run it
///
/// # Exit Code
///
/// Cancelling (or closing stdin) exits 0 without running anything.
pub fn run_menu(catalog_args: CatalogArgs, report: ReportArgs) -> Result<Outcome> {
    let path = resolve_options_path(&catalog_args)?;
    let catalog = OptionsCatalog::load(&LocalFileSystem, &path)
        .with_context(|| format!("Failed to load options catalog {}", path.display()))?;

    // Menu text goes to stderr so `--json` output stays parseable
    let mut stderr = io::stderr();
    let selection = if io::stdin().is_terminal() {
        choose(&catalog, &mut TerminalSource, &mut stderr)?
    } else {
        let mut source = LineSource::new(io::stdin().lock(), io::stderr());
        choose(&catalog, &mut source, &mut stderr)?
    };

    match selection {
        Selection::Option(id) => {
            log::info!("Selected option {} from {}", id, path.display());
            let job = catalog.job(&id)?;
            execute(&job, report)
        }
        Selection::Cancelled => {
            log::info!("Menu cancelled");
            Ok(Outcome::Cancelled)
        }
    }
}

fn choose(
    catalog: &OptionsCatalog,
    source: &mut dyn ChoiceSource,
    out: &mut dyn io::Write,
) -> Result<Selection> {
    Menu::new(catalog.options())
        .run(source, out)
        .context("Failed to read menu choice")
}

fn execute(job: &RenderJob, report_args: ReportArgs) -> Result<Outcome> {
    if !report_args.json {
        output::print_job_header(job);
    }

    let report = BatchJobRunner::new(&LocalFileSystem).run(job)?;

    if report_args.json {
        output::print_json(&report)?;
    } else {
        output::print_report(&report);
    }

    if report_args.deny_unresolved && report.has_unresolved() {
        return Ok(Outcome::UnresolvedDenied);
    }
    Ok(Outcome::Done)
}
