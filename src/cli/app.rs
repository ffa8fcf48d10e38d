//! Command runners

use std::process::ExitCode;

use crate::application::ports::{ConfigStore, Notifier};
use crate::application::NotificationService;
use crate::domain::config::AppConfig;
use crate::domain::notification::{NotificationId, NotificationRequest};
use crate::infrastructure::{create_notifier, BackendPreference, NotifierBackend, XdgConfigStore};

use super::args::{ScheduleOptions, ShowOptions};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Load file config and overlay CLI-provided values
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());
    file_config.merge(cli_config)
}

/// Build the notification service from the merged config
fn build_service(
    config: &AppConfig,
    presenter: &Presenter,
) -> Result<NotificationService<Box<dyn Notifier>>, ExitCode> {
    let preference = match config.backend_or_default().parse::<BackendPreference>() {
        Ok(p) => p,
        Err(e) => {
            presenter.error(&e.to_string());
            return Err(ExitCode::from(EXIT_USAGE_ERROR));
        }
    };

    let (notifier, backend) = create_notifier(preference, config);
    if backend == NotifierBackend::None {
        presenter.info("Backend 'none' selected; notifications are discarded");
    }
    Ok(NotificationService::new(notifier))
}

fn build_request(title: String, body: String, id: i32, launch: Option<String>) -> NotificationRequest {
    let mut request = NotificationRequest::new(title, body).with_id(id);
    if let Some(launch) = launch {
        request = request.with_launch_args(launch);
    }
    request
}

/// Show a notification immediately
pub async fn run_show(options: ShowOptions, config: &AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let service = match build_service(config, &presenter) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let request = build_request(options.title, options.body, options.id, options.launch);
    match service.show(&request).await {
        Ok(()) => {
            presenter.success("Notification submitted");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Schedule a notification for later delivery
pub async fn run_schedule(options: ScheduleOptions, config: &AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let service = match build_service(config, &presenter) {
        Ok(s) => s,
        Err(code) => return code,
    };

    if options.delivery.was_clamped() {
        presenter.warn("Requested time is not in the future; delivering immediately");
    }

    let request = build_request(options.title, options.body, options.id, options.launch);
    match service.show_scheduled(&request, options.delivery).await {
        Ok(()) => {
            presenter.success(&format!("Notification {} added to the schedule", options.id));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Set the application badge counter
pub async fn run_badge(count: i32, config: &AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let service = match build_service(config, &presenter) {
        Ok(s) => s,
        Err(code) => return code,
    };

    match service.set_badge(count).await {
        Ok(()) => {
            presenter.success(&format!("Badge set to {}", count));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Cancel a scheduled notification by id
pub async fn run_cancel(id: i32, config: &AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let service = match build_service(config, &presenter) {
        Ok(s) => s,
        Err(code) => return code,
    };

    match service.cancel(NotificationId::new(id)).await {
        Ok(()) => {
            presenter.success(&format!("Cancelled scheduled notification {} if present", id));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}
