use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use color_eyre::eyre::Result;
use tokio::sync::watch;
use tracing::debug;

use crate::debounce::{Clock, DebounceTimer, TokioClock};
use crate::types::address::{Address, Coordinates};
use crate::types::dadata::{CleanedAddress, GeolocateParams, SuggestParams};

/// Address backend the field controllers talk to. `Ok(None)` means the
/// provider rejected the call, `Ok(Some(vec![]))` that it matched nothing.
#[async_trait]
pub trait AddressSource: Send + Sync + 'static {
    async fn suggest(&self, query: &str, params: &SuggestParams) -> Result<Option<Vec<Address>>>;

    async fn geolocate(
        &self,
        coords: Coordinates,
        params: &GeolocateParams,
    ) -> Result<Option<Vec<Address>>>;

    async fn clean(&self, address: &str) -> Result<Option<CleanedAddress>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing scheduled.
    Idle,
    /// Input arrived, the debounce timer is running.
    Pending,
    /// Timer fired, a fetch is in flight.
    Loading,
    /// The latest issued fetch has completed.
    Settled,
}

/// Everything the presentation layer needs to render one address field.
/// Published through a watch channel, so a renderer only ever sees whole
/// consistent snapshots.
#[derive(Debug, Clone)]
pub struct FetchState {
    pub search_value: String,
    /// Provider order is preserved; the most relevant match comes first.
    pub suggestions: Vec<Address>,
    pub phase: Phase,
    /// The query the current suggestion set corresponds to.
    pub fetched_for: Option<String>,
    /// The field's resolved value; plain text until a suggestion is accepted.
    pub value: Option<Address>,
    pub error: Option<String>,
}

impl FetchState {
    fn new() -> Self {
        FetchState {
            search_value: String::new(),
            suggestions: Vec::new(),
            phase: Phase::Idle,
            fetched_for: None,
            value: None,
            error: None,
        }
    }

    pub fn loading(&self) -> bool {
        matches!(self.phase, Phase::Pending | Phase::Loading)
    }
}

#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Quiet window between the last keystroke and the fetch.
    pub delay: Duration,
    /// How many suggestions to ask the provider for.
    pub count: u32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            delay: Duration::from_millis(800),
            count: 4,
        }
    }
}

struct FieldShared {
    source: Arc<dyn AddressSource>,
    clock: Arc<dyn Clock>,
    config: FieldConfig,
    state: watch::Sender<FetchState>,
    /// Issue counter for in-flight fetches; completions that no longer hold
    /// the latest number are discarded.
    seq: AtomicU64,
}

/// Debounced suggestion controller for one address input. Owns the field's
/// [`FetchState`] and the single pending timer; drop the field and the
/// pending timer dies with it.
pub struct SuggestField {
    shared: Arc<FieldShared>,
    timer: DebounceTimer,
}

impl SuggestField {
    pub fn new(source: Arc<dyn AddressSource>, config: FieldConfig) -> Self {
        Self::with_clock(source, config, Arc::new(TokioClock))
    }

    pub fn with_clock(
        source: Arc<dyn AddressSource>,
        config: FieldConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let (state, _) = watch::channel(FetchState::new());
        SuggestField {
            shared: Arc::new(FieldShared {
                source,
                clock,
                config,
                state,
                seq: AtomicU64::new(0),
            }),
            timer: DebounceTimer::default(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.shared.state.subscribe()
    }

    pub fn state(&self) -> FetchState {
        self.shared.state.borrow().clone()
    }

    /// Records a keystroke. Empty text clears the dropdown synchronously with
    /// no network call; anything else (re)starts the trailing-edge debounce
    /// timer. Text that already matches `fetched_for` keeps the current
    /// suggestion set instead of refetching. Both shortcuts drop whatever was
    /// armed or in flight for older text.
    pub fn input(&mut self, text: &str) {
        if text.is_empty() {
            self.timer.cancel();
            // an in-flight completion must not repopulate the cleared dropdown
            self.shared.seq.fetch_add(1, Ordering::SeqCst);
            self.shared.state.send_modify(|state| {
                state.search_value.clear();
                state.value = Some(Address::plain(""));
                state.suggestions.clear();
                state.error = None;
                state.phase = Phase::Idle;
                state.fetched_for = None;
            });
            return;
        }

        let text = text.to_string();
        let already_fetched =
            self.shared.state.borrow().fetched_for.as_deref() == Some(text.as_str());
        if already_fetched {
            // the dropdown already matches this text; anything still armed or
            // in flight is for older text and must not land
            self.timer.cancel();
            self.shared.seq.fetch_add(1, Ordering::SeqCst);
        }
        self.shared.state.send_modify(|state| {
            state.search_value = text.clone();
            state.value = Some(Address::plain(&text));
            state.error = None;
            state.phase = if already_fetched {
                Phase::Settled
            } else {
                Phase::Pending
            };
        });
        if already_fetched {
            return;
        }

        let shared = self.shared.clone();
        self.timer
            .schedule(&self.shared.clock, self.shared.config.delay, async move {
                run_fetch(&shared, &text).await;
            });
    }

    /// Accepts suggestion `index` from the current dropdown as the field
    /// value. Returns the accepted record, or `None` for an index the
    /// dropdown does not have.
    pub fn select(&mut self, index: usize) -> Option<Address> {
        let selected = self.shared.state.borrow().suggestions.get(index).cloned()?;
        self.shared.state.send_modify(|state| {
            state.search_value = selected.value.clone();
            state.value = Some(selected.clone());
        });
        Some(selected)
    }

    /// Blur handler: eagerly resolves the field for users who type and tab
    /// away without waiting. If the current text was never fetched, one
    /// immediate fetch is issued (the pending timer, if any, is dropped);
    /// the first suggestion then becomes the field value. No retries beyond
    /// that one fetch.
    pub async fn resolve(&mut self) -> Option<Address> {
        let (search_value, fetched_for, already_resolved) = {
            let state = self.shared.state.borrow();
            let already_resolved = state
                .value
                .as_ref()
                .map(|value| value.unrestricted_value.is_some())
                .unwrap_or(false);
            (
                state.search_value.clone(),
                state.fetched_for.clone(),
                already_resolved,
            )
        };
        if already_resolved {
            return self.shared.state.borrow().value.clone();
        }
        if search_value.is_empty() {
            return None;
        }

        if fetched_for.as_deref() != Some(search_value.as_str()) {
            self.timer.cancel();
            run_fetch(&self.shared, &search_value).await;
        }

        let first = self.shared.state.borrow().suggestions.first().cloned()?;
        self.shared.state.send_modify(|state| {
            state.search_value = first.value.clone();
            state.value = Some(first.clone());
        });
        Some(first)
    }

    /// Focus handler: warms the dropdown immediately (no debounce) when the
    /// current text has no matching suggestion set yet.
    pub fn focus(&mut self) {
        let (search_value, fetched_for) = {
            let state = self.shared.state.borrow();
            (state.search_value.clone(), state.fetched_for.clone())
        };
        if search_value.is_empty() || fetched_for.as_deref() == Some(search_value.as_str()) {
            return;
        }
        self.timer.cancel();
        let shared = self.shared.clone();
        tokio::spawn(async move {
            run_fetch(&shared, &search_value).await;
        });
    }
}

impl Drop for SuggestField {
    fn drop(&mut self) {
        self.timer.cancel();
    }
}

async fn run_fetch(shared: &Arc<FieldShared>, query: &str) {
    let seq = shared.seq.fetch_add(1, Ordering::SeqCst) + 1;
    shared.state.send_modify(|state| state.phase = Phase::Loading);
    let params = SuggestParams {
        count: Some(shared.config.count),
        ..Default::default()
    };
    let outcome = shared.source.suggest(query, &params).await;

    if shared.seq.load(Ordering::SeqCst) != seq {
        // a newer fetch was issued while this one was in flight
        debug!(query, "discarding stale suggest response");
        return;
    }
    shared.state.send_modify(|state| {
        state.phase = Phase::Settled;
        state.fetched_for = Some(query.to_string());
        match outcome {
            Ok(Some(suggestions)) => {
                state.suggestions = suggestions;
                state.error = None;
            }
            Ok(None) => {
                state.suggestions.clear();
                state.error = Some("suggestion request was rejected by the provider".to_string());
            }
            Err(err) => {
                state.suggestions.clear();
                state.error = Some(err.to_string());
            }
        }
    });
}
