use crate::client::github::IProfile;
use crate::events::{EventPublisher, ProfileEvent};
use crate::render::{render, LoadView};

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

/// Username loaded by the quick-load affordance and the bare index page.
pub const DEFAULT_USERNAME: &str = "thejokers69";

/// Replace-only rendering surface. Content is swapped wholesale on every
/// render; overlapping loads share one container, so it carries its own
/// interior mutability.
///
/// The container also owns the state that is scoped to one surface: the
/// search-control busy flag and the load generation counter. Only loads
/// rendering to the same container supersede each other; loads on separate
/// containers are independent.
#[derive(Default)]
pub struct ProfileContainer {
    html: Mutex<String>,
    ui: UiState,
    generation: AtomicU64,
}

impl ProfileContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&self, html: String) {
        *self
            .html
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = html;
    }

    pub fn html(&self) -> String {
        self.html
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_latest(&self, seq: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == seq
    }
}

/// Search-button state: a busy flag plus the label derived from it. Injected
/// into the service; no ambient UI state is consulted.
#[derive(Default)]
pub struct UiState {
    busy: AtomicBool,
}

impl UiState {
    pub fn set_busy(&self, busy: bool) {
        self.busy.store(busy, Ordering::SeqCst);
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_busy() {
            "Loading..."
        } else {
            "Search Profile"
        }
    }
}

/// Orchestrates one profile load: events, busy state, loading render, fetch,
/// settlement render. The single await on the fetch is the only suspension
/// point.
pub struct ProfileService<A> {
    api: A,
    events: EventPublisher,
}

impl<A: IProfile> ProfileService<A> {
    pub fn new(api: A, events: EventPublisher) -> Self {
        ProfileService { api, events }
    }

    /// Drive the full pipeline for one search. Completion is observed via
    /// the published events and the container content, not a return value.
    ///
    /// Guarantees, regardless of the fetch outcome:
    /// - `LoadStart` precedes exactly one of `LoadSuccess`/`LoadError` for
    ///   the call that settles while still its container's latest;
    /// - a call superseded by a newer load on the same container applies
    ///   neither its settlement render nor its settlement event, so only
    ///   that container's most recent search is ever rendered. Loads on
    ///   other containers never interfere;
    /// - the container's busy flag is cleared exactly once per call, on
    ///   every path.
    pub async fn load_profile(&self, username: &str, container: &ProfileContainer) {
        let seq = container.next_generation();

        self.events.publish(&ProfileEvent::LoadStart {
            username: username.to_string(),
        });
        container.ui().set_busy(true);
        container.replace(render(LoadView::Loading));

        let result = self.api.get_user_profile(username).await;

        if container.is_latest(seq) {
            match result {
                Ok(profile) => {
                    container.replace(render(LoadView::Ready(&profile)));
                    self.events
                        .publish(&ProfileEvent::LoadSuccess { profile });
                }
                Err(error) => {
                    container.replace(render(LoadView::Failed(&error)));
                    self.events.publish(&ProfileEvent::LoadError {
                        message: error.to_string(),
                    });
                }
            }
        }

        container.ui().set_busy(false);
    }
}
