use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{bail, Context, Result};
use reqpane::cmd_args::CommandLineArgs;
use reqpane::config::LOG_LEVEL_ENV_VAR;
use reqpane::repl::io::terminal::restore_terminal;
use reqpane::AppController;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cmd_args = CommandLineArgs::parse();

    match run(cmd_args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cmd_args: CommandLineArgs) -> Result<()> {
    init_tracing_subscriber(cmd_args.log_file())?;

    if !atty::is(atty::Stream::Stdout) {
        bail!("stdout is not a terminal");
    }

    install_panic_hook();

    let mut app = AppController::new(cmd_args)?;
    app.run().await
}

fn build_env_filter() -> Result<EnvFilter> {
    let mut filter = EnvFilter::from_env(LOG_LEVEL_ENV_VAR);
    for directive in [
        "reqwest=warn",
        "hyper=warn",
        "hyper_util=warn",
        "rustls=warn",
        "tokio=warn",
    ] {
        filter = filter.add_directive(
            directive
                .parse()
                .with_context(|| format!("invalid log directive {directive}"))?,
        );
    }
    Ok(filter)
}

fn init_tracing_subscriber(log_file: Option<&Path>) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter()?)
        .with_target(true)
        .with_thread_ids(true)
        .with_timer(ChronoLocal::rfc_3339());

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(io::stderr).try_init(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}

/// Leave raw mode and the alternate screen before the default hook prints,
/// otherwise the panic message is lost.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        previous(info);
    }));
}
