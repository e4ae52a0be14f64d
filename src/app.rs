use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    countdown, domain, infra, ui,
    usecases::{self, bootstrap},
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Run => {
            let bootstrap::Bootstrapped {
                context,
                log_guard: _log_guard,
            } = bootstrap::bootstrap(cli.config.as_deref())?;

            tracing::debug!(
                ui = ui::module_name(),
                domain = domain::module_name(),
                countdown = countdown::module_name(),
                usecases = usecases::module_name(),
                infra = infra::module_name(),
                "module boundaries loaded"
            );

            let runtime = countdown::build_runtime()?;
            let mut shell = bootstrap::compose_shell(&context, runtime.handle().clone());
            ui::shell::start(
                &context,
                shell.event_source.as_mut(),
                shell.orchestrator.as_mut(),
            )?;
        }
    }

    Ok(())
}
