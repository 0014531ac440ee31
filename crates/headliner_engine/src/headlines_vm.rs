use std::sync::Arc;

use headliner_core::{
    filter_headlines, Headline, HeadlinesEffect, HeadlinesEvent, HeadlinesState, Route,
};
use tokio::sync::{mpsc, watch};
use tokio::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::preload::ImagePreloader;
use crate::usecase::GetHeadlines;

/// Quiet period before a search edit is applied to the displayed list.
const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Effects are drained promptly by the render loop; a small buffer absorbs
/// bursts without replaying anything to late subscribers.
const EFFECT_BUFFER: usize = 16;

/// Unidirectional view-model for the headline list screen.
///
/// State goes through a single-writer watch container, navigation effects
/// through a bounded channel consumed exactly once. Every spawned task is
/// tied to a scope that is cancelled when the view-model drops, so callers
/// never manage cancellation themselves.
///
/// Must be constructed inside a tokio runtime.
pub struct HeadlinesViewModel {
    state_tx: Arc<watch::Sender<HeadlinesState>>,
    effect_tx: mpsc::Sender<HeadlinesEffect>,
    query_tx: watch::Sender<String>,
    all_headlines_tx: Arc<watch::Sender<Vec<Headline>>>,
    get_headlines: Arc<GetHeadlines>,
    preloader: Arc<dyn ImagePreloader>,
    scope: CancellationToken,
}

impl HeadlinesViewModel {
    pub fn new(
        get_headlines: Arc<GetHeadlines>,
        preloader: Arc<dyn ImagePreloader>,
        title: impl Into<String>,
    ) -> (Self, mpsc::Receiver<HeadlinesEffect>) {
        let (state_tx, _) = watch::channel(HeadlinesState::new(title));
        let state_tx = Arc::new(state_tx);
        let (effect_tx, effect_rx) = mpsc::channel(EFFECT_BUFFER);
        let (query_tx, query_rx) = watch::channel(String::new());
        let (all_headlines_tx, all_headlines_rx) = watch::channel(Vec::new());
        let all_headlines_tx = Arc::new(all_headlines_tx);
        let scope = CancellationToken::new();

        tokio::spawn(run_filter_pipeline(
            query_rx,
            all_headlines_rx,
            state_tx.clone(),
            scope.clone(),
        ));

        (
            Self {
                state_tx,
                effect_tx,
                query_tx,
                all_headlines_tx,
                get_headlines,
                preloader,
                scope,
            },
            effect_rx,
        )
    }

    /// Subscribe to state snapshots.
    pub fn state(&self) -> watch::Receiver<HeadlinesState> {
        self.state_tx.subscribe()
    }

    pub fn handle(&self, event: HeadlinesEvent) {
        match event {
            HeadlinesEvent::Started => self.on_started(),
            HeadlinesEvent::SearchQueryChanged(query) => self.on_search_query_changed(query),
            HeadlinesEvent::CardClicked(article) => self.on_card_clicked(article),
        }
    }

    fn on_started(&self) {
        // A cached list, or a fetch already in flight, means nothing to do:
        // re-entry after navigating back must not refetch.
        if !self.all_headlines_tx.borrow().is_empty() || self.state_tx.borrow().is_loading {
            return;
        }

        self.state_tx.send_modify(|state| {
            state.is_loading = true;
            state.is_error = false;
        });

        let get_headlines = self.get_headlines.clone();
        let preloader = self.preloader.clone();
        let state_tx = self.state_tx.clone();
        let all_headlines_tx = self.all_headlines_tx.clone();
        let scope = self.scope.clone();

        tokio::spawn(async move {
            let fetch = async {
                match get_headlines.call().await {
                    Ok(headlines) => {
                        all_headlines_tx.send_replace(headlines);
                        for headline in all_headlines_tx.borrow().iter() {
                            preloader.enqueue(&headline.url_to_image);
                        }
                    }
                    Err(_) => {
                        // Structured message/code was already logged at the
                        // repository; the UI only sees the flag.
                        state_tx.send_modify(|state| state.is_error = true);
                    }
                }
                state_tx.send_modify(|state| state.is_loading = false);
            };
            tokio::select! {
                _ = scope.cancelled() => {}
                _ = fetch => {}
            }
        });
    }

    fn on_search_query_changed(&self, query: String) {
        // Immediate echo so the input field tracks keystrokes; filtering
        // happens downstream of the debounce.
        self.state_tx
            .send_modify(|state| state.search_query = query.clone());
        self.query_tx.send_replace(query);
    }

    fn on_card_clicked(&self, article: Headline) {
        let effect = HeadlinesEffect::NavigateTo(Route::details_for(&article));
        if self.effect_tx.try_send(effect).is_err() {
            log::warn!("navigation effect dropped: consumer is not draining");
        }
    }
}

impl Drop for HeadlinesViewModel {
    fn drop(&mut self) {
        self.scope.cancel();
    }
}

/// Debounced search/filter pipeline.
///
/// Recomputes the displayed list whenever the debounced query or the full
/// fetched set changes. Duplicate consecutive queries and duplicate output
/// lists are suppressed.
async fn run_filter_pipeline(
    mut query_rx: watch::Receiver<String>,
    mut all_headlines_rx: watch::Receiver<Vec<Headline>>,
    state_tx: Arc<watch::Sender<HeadlinesState>>,
    scope: CancellationToken,
) {
    let mut debounced_query = String::new();
    // Seed with an empty-query evaluation so the list renders before any
    // input arrives.
    let mut last_emitted =
        filter_headlines(&debounced_query, &all_headlines_rx.borrow_and_update());
    state_tx.send_modify(|state| state.headlines = last_emitted.clone());

    loop {
        tokio::select! {
            _ = scope.cancelled() => break,
            changed = query_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                // Restart the quiet period on every further edit.
                loop {
                    tokio::select! {
                        _ = scope.cancelled() => return,
                        _ = tokio::time::sleep(SEARCH_DEBOUNCE) => break,
                        changed = query_rx.changed() => {
                            if changed.is_err() {
                                return;
                            }
                        }
                    }
                }
                let query = query_rx.borrow_and_update().clone();
                if query == debounced_query {
                    continue;
                }
                debounced_query = query;
            }
            changed = all_headlines_rx.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }

        let filtered = filter_headlines(&debounced_query, &all_headlines_rx.borrow_and_update());
        if filtered == last_emitted {
            continue;
        }
        last_emitted = filtered.clone();
        state_tx.send_modify(|state| state.headlines = filtered);
    }
}
