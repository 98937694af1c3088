use anyhow::Result;
use colored::Colorize;

use super::super::args::{WriteAllCommand, WriteCommand};
use super::super::exit_status::ExitStatus;
use super::super::report::{print_write_summary, print_written};
use super::context::CommandContext;
use crate::catalog::Catalog;
use crate::source::{load_bundle, load_catalog};

pub fn write(cmd: WriteCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let catalog = load_catalog(&cmd.source)?;
    warn_unlisted_namespaces(&ctx, &catalog);

    let writer = ctx.writer();
    let written = writer.write_catalog(&cmd.locale, &catalog, |file| {
        print_written(file, ctx.verbose)
    })?;

    print_write_summary(written.len(), 1, writer.root());
    Ok(ExitStatus::Success)
}

pub fn write_all(cmd: WriteAllCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let bundle = load_bundle(&cmd.source)?;
    for (_, catalog) in bundle.iter() {
        warn_unlisted_namespaces(&ctx, catalog);
    }

    let writer = ctx.writer();
    let results = writer.write_bundle(&bundle);
    let locales = results.len();

    // Report what landed for every locale before surfacing a failure.
    let mut files = 0;
    let mut first_error = None;
    for locale in results {
        for file in &locale.files {
            print_written(file, ctx.verbose);
        }
        files += locale.files.len();
        if let Some(err) = locale.error
            && first_error.is_none()
        {
            first_error = Some(err);
        }
    }
    if let Some(err) = first_error {
        return Err(err);
    }

    print_write_summary(files, locales, writer.root());
    Ok(ExitStatus::Success)
}

/// Namespaces outside the configured list are written, but the app will not
/// load them until they are registered.
fn warn_unlisted_namespaces(ctx: &CommandContext, catalog: &Catalog) {
    for (namespace, _) in catalog.iter() {
        if !ctx.namespaces.contains(namespace) {
            eprintln!(
                "{} namespace \"{}\" is not listed in 'namespaces'",
                "warning:".bold().yellow(),
                namespace
            );
        }
    }
}
