//! local-notify CLI entry point

use std::process::ExitCode;
use std::time::{Duration as StdDuration, UNIX_EPOCH};

use clap::Parser;

use local_notify::cli::{
    app::{load_merged_config, run_badge, run_cancel, run_schedule, run_show, EXIT_ERROR,
        EXIT_USAGE_ERROR},
    args::{Cli, Commands, ScheduleOptions, ShowOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use local_notify::domain::config::AppConfig;
use local_notify::domain::notification::{Delay, DeliveryTime};
use local_notify::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Build CLI config overlay from global args
    let cli_config = AppConfig {
        app_name: cli.app_name.clone(),
        backend: cli.backend.clone(),
        windows: None,
    };

    match cli.command {
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::Show {
            title,
            body,
            id,
            launch,
        } => {
            let config = load_merged_config(cli_config).await;
            run_show(
                ShowOptions {
                    title,
                    body,
                    id,
                    launch,
                },
                &config,
            )
            .await
        }
        Commands::Schedule {
            title,
            body,
            id,
            delay,
            at,
            launch,
        } => {
            let config = load_merged_config(cli_config).await;

            // Resolve the delivery time from --in or --at
            let delivery = match (delay.as_deref(), at) {
                (Some(s), None) => match s.parse::<Delay>() {
                    Ok(d) => d.delivery_time(),
                    Err(e) => {
                        presenter.error(&e.to_string());
                        return ExitCode::from(EXIT_USAGE_ERROR);
                    }
                },
                (None, Some(secs)) => {
                    DeliveryTime::at(UNIX_EPOCH + StdDuration::from_secs(secs))
                }
                _ => {
                    // Clap enforces exactly one of --in / --at
                    presenter.error("Provide exactly one of --in or --at");
                    return ExitCode::from(EXIT_USAGE_ERROR);
                }
            };

            run_schedule(
                ScheduleOptions {
                    title,
                    body,
                    id,
                    delivery,
                    launch,
                },
                &config,
            )
            .await
        }
        Commands::Badge { count } => {
            let config = load_merged_config(cli_config).await;
            run_badge(count, &config).await
        }
        Commands::Cancel { id } => {
            let config = load_merged_config(cli_config).await;
            run_cancel(id, &config).await
        }
    }
}
