use std::{path::Path, sync::mpsc};

use tokio::runtime::Handle;
use tracing_appender::non_blocking::WorkerGuard;

use crate::{
    countdown::{ticker::TokioTickScheduler, TICK_INTERVAL},
    domain::timer::TimerState,
    infra::{
        self, config::FileConfigAdapter, contracts::ConfigAdapter, error::AppError,
        storage_layout::StorageLayout,
    },
    ui::CrosstermEventSource,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
        shell::DefaultShellOrchestrator,
    },
};

pub struct Bootstrapped {
    pub context: AppContext,
    pub log_guard: WorkerGuard,
}

pub struct ShellComposition {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn ShellOrchestrator>,
}

pub fn bootstrap(config_path: Option<&Path>) -> Result<Bootstrapped, AppError> {
    let context = build_context(config_path)?;
    context.layout.ensure_dirs()?;
    let log_guard = infra::logging::init(&context.config.logging, &context.layout)?;

    Ok(Bootstrapped { context, log_guard })
}

pub fn compose_shell(context: &AppContext, runtime: Handle) -> ShellComposition {
    let (signal_tx, signal_rx) = mpsc::channel();
    let scheduler = TokioTickScheduler::new(runtime, TICK_INTERVAL, signal_tx);
    let timer = TimerState::with_session_minutes(context.config.timer.session_minutes);

    ShellComposition {
        event_source: Box::new(CrosstermEventSource::new(signal_rx)),
        orchestrator: Box::new(DefaultShellOrchestrator::new(scheduler, timer)),
    }
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config_adapter = FileConfigAdapter::new(config_path);
    let config = config_adapter.load().map_err(AppError::Other)?;
    let layout = StorageLayout::resolve()?;

    Ok(AppContext::new(config, layout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{countdown::build_runtime, test_support::env_lock};

    #[test]
    fn builds_context_with_default_config_when_file_is_missing() {
        let _guard = env_lock();
        let context = build_context(Some(Path::new("./missing-config.toml")))
            .expect("context should build from defaults");

        assert_eq!(context.config, crate::infra::config::AppConfig::default());
    }

    #[test]
    fn composed_shell_uses_configured_session_length() {
        let _guard = env_lock();
        let mut context = build_context(Some(Path::new("./missing-config.toml")))
            .expect("context should build from defaults");
        context.config.timer.session_minutes = 10;

        let runtime = build_runtime().expect("runtime should build");
        let shell = compose_shell(&context, runtime.handle().clone());

        let timer = shell.orchestrator.state().timer();
        assert_eq!(timer.time_label(), "10:00");
        assert!(!timer.is_running());
    }
}
