use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use clap::ArgMatches;
use serde::Serialize;
use tokio::sync::watch;
use tracing::{error, info};

use chute_core::config::loading::with_base_url_override;
use chute_core::events::StopReason;
use chute_core::{
    ActiveView, ChuteConfig, PhotosState, ReqwestClient, Route, Router, Scheduler, SecurityState,
    StatusMessage, ViewContext, events,
};

pub(crate) fn handle_watch_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let view = matches
        .get_one::<String>("view")
        .ok_or("View argument is required")?;
    let json_output = matches.get_flag("json");
    let duration = matches
        .get_one::<u64>("duration")
        .map(|secs| Duration::from_secs(*secs));

    let config = match load_config(matches.get_one::<String>("base-url").cloned()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {}", e);
            error!(event = "cli.watch_failed", view = view.as_str(), error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    info!(
        event = "cli.watch_started",
        view = view.as_str(),
        base_url = config.device.base_url(),
        duration_secs = duration.map(|d| d.as_secs())
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let reason = runtime.block_on(watch_view(view, config, duration, json_output))?;

    events::log_app_shutdown(reason);
    info!(event = "cli.watch_completed", view = view.as_str());
    Ok(())
}

fn load_config(base_url: Option<String>) -> Result<ChuteConfig, chute_core::errors::ConfigError> {
    let config = with_base_url_override(ChuteConfig::load_hierarchy()?, base_url);
    config.validate()?;
    Ok(config)
}

async fn watch_view(
    view: &str,
    config: ChuteConfig,
    duration: Option<Duration>,
    json_output: bool,
) -> Result<StopReason, Box<dyn std::error::Error>> {
    let http = ReqwestClient::new(config.device.base_url())?;
    let ctx = ViewContext::new(Arc::new(http), Scheduler::new(), config);
    let mut router = Router::new(ctx);

    let route = Route::from_path(&format!("/{}", view));
    let result = match router.navigate(route.path())? {
        ActiveView::Security(view) => {
            let rx = view.subscribe();
            follow(
                route.view_name(),
                rx,
                duration,
                |state| state.status_message == StatusMessage::Failed,
                |state| print_security(state, json_output),
            )
            .await
        }
        ActiveView::Photos(view) => {
            let rx = view.subscribe();
            follow(
                route.view_name(),
                rx,
                duration,
                |_| false,
                |state| print_photos(state, json_output),
            )
            .await
        }
        _ => Err(format!("View '{}' has nothing to watch", view).into()),
    };

    router.shutdown();
    result
}

/// Print every state change until the deadline, Ctrl-C, or the view closing.
async fn follow<S, P, F>(
    view: &str,
    mut rx: watch::Receiver<S>,
    duration: Option<Duration>,
    is_failure: P,
    mut render: F,
) -> Result<StopReason, Box<dyn std::error::Error>>
where
    S: Clone,
    P: Fn(&S) -> bool,
    F: FnMut(&S) -> Result<(), Box<dyn std::error::Error>>,
{
    let started = Instant::now();
    let stop = async {
        match duration {
            Some(duration) => {
                tokio::time::sleep(duration).await;
                StopReason::DurationElapsed
            }
            None => {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    error!(event = "cli.watch_signal_failed", error = %e);
                }
                StopReason::Interrupted
            }
        }
    };
    tokio::pin!(stop);

    let initial = rx.borrow_and_update().clone();
    render(&initial)?;

    let mut updates = 0;
    let mut failures = 0;
    let reason = loop {
        tokio::select! {
            reason = &mut stop => break reason,
            changed = rx.changed() => {
                if changed.is_err() {
                    break StopReason::ViewClosed;
                }
                let state = rx.borrow_and_update().clone();
                updates += 1;
                if is_failure(&state) {
                    failures += 1;
                }
                render(&state)?;
            }
        }
    };

    events::log_watch_summary(view, updates, failures, started.elapsed());
    Ok(reason)
}

fn print_json<S: Serialize>(state: &S) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string(state)?);
    Ok(())
}

fn timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

fn print_security(state: &SecurityState, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json_output {
        return print_json(state);
    }

    let mut line = format!(
        "[{}] {:<14} {}",
        timestamp(),
        state.status_message.to_string(),
        state.image_source
    );

    if let Some(latest) = &state.latest {
        if let Some(captured) = latest.captured_at() {
            line.push_str(&format!("  captured {}", captured.format("%Y-%m-%d %H:%M:%S UTC")));
        }
        if !latest.detections.is_empty() {
            let names: Vec<String> = latest
                .detections
                .iter()
                .map(|d| format!("{} ({:.2})", d.name, d.score))
                .collect();
            line.push_str(&format!("  seen: {}", names.join(", ")));
        }
    }

    println!("{}", line);
    Ok(())
}

fn print_photos(state: &PhotosState, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json_output {
        return print_json(state);
    }

    let photos = &state.photos;
    match photos.iter().next() {
        Some(newest) => println!(
            "[{}] {} photos, newest {}",
            timestamp(),
            photos.len(),
            newest.path
        ),
        None => println!("[{}] no photos", timestamp()),
    }
    Ok(())
}
