use crate::models::profile::Profile;

use std::collections::HashMap;
use std::sync::RwLock;

/// Lifecycle notifications broadcast by the profile service.
#[derive(Debug, Clone)]
pub enum ProfileEvent {
    LoadStart { username: String },
    LoadSuccess { profile: Profile },
    LoadError { message: String },
}

impl ProfileEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            ProfileEvent::LoadStart { .. } => EventKind::LoadStart,
            ProfileEvent::LoadSuccess { .. } => EventKind::LoadSuccess,
            ProfileEvent::LoadError { .. } => EventKind::LoadError,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    LoadStart,
    LoadSuccess,
    LoadError,
}

pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;
type Handler = Box<dyn Fn(&ProfileEvent) -> HandlerResult + Send + Sync>;

/// In-process publish/subscribe for profile-load lifecycle events.
///
/// Handlers run synchronously, in subscription order, on the publishing
/// task. A failing handler is logged and does not stop delivery to the
/// handlers after it.
#[derive(Default)]
pub struct EventPublisher {
    listeners: RwLock<HashMap<EventKind, Vec<Handler>>>,
}

impl EventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, kind: EventKind, handler: F)
    where
        F: Fn(&ProfileEvent) -> HandlerResult + Send + Sync + 'static,
    {
        let mut listeners = self
            .listeners
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        listeners.entry(kind).or_default().push(Box::new(handler));
    }

    pub fn publish(&self, event: &ProfileEvent) {
        let listeners = self
            .listeners
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(handlers) = listeners.get(&event.kind()) {
            for handler in handlers {
                if let Err(e) = handler(event) {
                    log::warn!("event handler failed for {:?}: {}", event.kind(), e);
                }
            }
        }
    }
}
