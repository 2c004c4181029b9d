use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;

use product_form::cli::{Cli, Command, SubmitArgs};
use product_form::config::Config;
use product_form::form::ProductForm;
use product_form::logging::{init_tracing, LogTarget};
use product_form::oneshot::{submit_once, summary_lines};
use product_form::service::{HttpSubmissionService, SubmissionService};
use product_form::ui;
use product_form::ui::app::App;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = cli.load_config()?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    let target = match (&config.logging.file, &cli.command) {
        (Some(path), _) => LogTarget::File(path.as_path()),
        (None, Some(_)) => LogTarget::Stderr,
        (None, None) => LogTarget::Discard,
    };
    init_tracing(&config.logging.level, target).context("Failed to open log file")?;

    let service: Arc<dyn SubmissionService> =
        Arc::new(HttpSubmissionService::new(&config.service)?);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    match cli.command {
        Some(Command::Submit(args)) => Ok(runtime.block_on(submit(service, args))),
        None => {
            interactive(service, &config, runtime.handle())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn submit(service: Arc<dyn SubmissionService>, args: SubmitArgs) -> ExitCode {
    let state = submit_once(service, args.fields()).await;
    for line in summary_lines(&state) {
        println!("{line}");
    }
    if state.is_saved() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn interactive(
    service: Arc<dyn SubmissionService>,
    config: &Config,
    runtime: &tokio::runtime::Handle,
) -> Result<()> {
    let app = App::new(ProductForm::new(service), config.service.endpoint());
    ui::run(app, runtime).context("Terminal UI failed")
}
