use anyhow::Result;

use super::super::args::CheckCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::print_check;
use super::context::CommandContext;
use crate::check::check_locales;
use crate::issues::Severity;
use crate::source::discover_locales;

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let writer = ctx.writer();

    let targets = if cmd.locales.is_empty() {
        discover_locales(writer.root())?
    } else {
        cmd.locales
    };
    if ctx.verbose {
        let codes: Vec<&str> = targets
            .iter()
            .filter(|l| **l != ctx.base_locale)
            .map(|l| l.as_str())
            .collect();
        eprintln!("Note: Checking {} against {}", codes.join(", "), ctx.base_locale);
    }

    let report = check_locales(&writer, &ctx.base_locale, &ctx.namespaces, &targets)?;
    print_check(&report);

    let has_errors = report
        .issues
        .iter()
        .any(|issue| issue.severity() == Severity::Error);
    Ok(if has_errors {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    })
}
