use std::sync::Arc;

use anyhow::Context;
use headliner_core::{HeadlinesEffect, HeadlinesEvent, HeadlinesState, SplashEffect, SplashEvent};
use headliner_engine::{
    ApiSettings, GetHeadlines, HeadlinesViewModel, HttpImagePreloader, NewsHeadlineRepository,
    ReqwestNewsApi, SplashViewModel, UnsupportedBiometricGate,
};
use headliner_logging::LogDestination;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;

use crate::{config, render};

pub async fn run() -> anyhow::Result<()> {
    headliner_logging::initialize(LogDestination::Terminal);

    // Explicit wiring, once, at process start. Everything below is an owned,
    // long-lived value handed down by reference.
    let api_key = config::api_key()?;
    let api = Arc::new(
        ReqwestNewsApi::new(ApiSettings::default(), api_key)
            .context("building the news API client")?,
    );
    let repository = Arc::new(NewsHeadlineRepository::new(api, config::news_source()));
    let get_headlines = Arc::new(GetHeadlines::new(repository));
    let preloader = Arc::new(HttpImagePreloader::new());

    if !splash_gate().await {
        return Ok(());
    }

    headline_loop(get_headlines, preloader).await
}

/// Splash decision. The terminal frontend has no biometric hardware, so the
/// flow proceeds straight to the list after the fixed delay.
async fn splash_gate() -> bool {
    let (splash, mut effects) = SplashViewModel::new(Arc::new(UnsupportedBiometricGate));
    splash.handle(SplashEvent::Started);
    match effects.recv().await {
        Some(SplashEffect::NavigateTo(_)) => true,
        Some(SplashEffect::ShowBiometricPrompt) => {
            log::warn!("biometric prompt requested but not supported in the terminal frontend");
            splash.handle(SplashEvent::BiometricResult { success: false });
            false
        }
        None => false,
    }
}

async fn headline_loop(
    get_headlines: Arc<GetHeadlines>,
    preloader: Arc<HttpImagePreloader>,
) -> anyhow::Result<()> {
    let (view_model, mut effects) =
        HeadlinesViewModel::new(get_headlines, preloader, config::app_name());
    let mut state = view_model.state();

    render::help();
    view_model.handle(HeadlinesEvent::Started);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            changed = state.changed() => {
                if changed.is_err() {
                    break;
                }
                render::headlines(&state.borrow_and_update());
            }
            effect = effects.recv() => {
                match effect {
                    Some(HeadlinesEffect::NavigateTo(route)) => render::details(&route),
                    None => break,
                }
            }
            line = lines.next_line() => {
                match line.context("reading stdin")? {
                    Some(input) => {
                        if !dispatch_command(&view_model, &state, input.trim()) {
                            break;
                        }
                    }
                    None => break,
                }
            }
        }
    }

    Ok(())
}

/// Parses one input line; returns false when the user asked to quit.
fn dispatch_command(
    view_model: &HeadlinesViewModel,
    state: &watch::Receiver<HeadlinesState>,
    input: &str,
) -> bool {
    match input {
        ":quit" | ":q" => return false,
        ":retry" | ":r" => view_model.handle(HeadlinesEvent::Started),
        _ => {
            if let Some(index) = input.strip_prefix(":open ") {
                open_card(view_model, state, index);
            } else {
                view_model.handle(HeadlinesEvent::SearchQueryChanged(input.to_string()));
            }
        }
    }
    true
}

fn open_card(
    view_model: &HeadlinesViewModel,
    state: &watch::Receiver<HeadlinesState>,
    index: &str,
) {
    let Ok(number) = index.trim().parse::<usize>() else {
        println!("usage: :open <number>");
        return;
    };
    let article = state
        .borrow()
        .headlines
        .get(number.saturating_sub(1))
        .cloned();
    match article {
        Some(article) => view_model.handle(HeadlinesEvent::CardClicked(article)),
        None => println!("no headline at {number}"),
    }
}
