use anyhow::{Result, bail};

use super::super::args::ScaffoldCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::print_scaffold;
use super::context::CommandContext;
use crate::catalog::{Locale, SUPPORTED_LOCALES};
use crate::scaffold::scaffold as scaffold_locales;
use crate::source::read_locale_catalog;

pub fn scaffold(cmd: ScaffoldCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let writer = ctx.writer();

    let base = read_locale_catalog(writer.root(), &ctx.base_locale, &ctx.namespaces);
    if let Some(err) = base.errors.first() {
        bail!("{}", err.message);
    }
    if base.catalog.is_empty() {
        bail!(
            "No namespace files found for base locale {} in {}",
            ctx.base_locale,
            writer.locale_dir(&ctx.base_locale).display()
        );
    }
    if ctx.verbose {
        for namespace in &base.missing {
            eprintln!(
                "Note: {} has no {}, skipping it",
                ctx.base_locale,
                namespace.file_name()
            );
        }
    }

    let targets = if !cmd.locales.is_empty() {
        cmd.locales
    } else {
        let configured = ctx.config.locales()?;
        if configured.is_empty() {
            SUPPORTED_LOCALES
                .iter()
                .map(|info| Locale::new(info.code))
                .collect::<Result<Vec<_>>>()?
        } else {
            configured
        }
    };

    let summary = scaffold_locales(&writer, &ctx.base_locale, &base.catalog, &targets)?;
    print_scaffold(&summary, ctx.verbose);
    Ok(ExitStatus::Success)
}
