//! Modal event system
//!
//! Every view owns its own subscriber registry; notifications raised by a
//! view are delivered only to callbacks registered on that instance. There
//! is no shared channel between instances, so an overlay click on one modal
//! can never hide another.

use tracing::trace;

/// Notifications emitted by modal views
///
/// All emission is synchronous: a notification is delivered to every
/// matching subscriber before the operation that raised it returns.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalEvent {
    /// The view became visible
    Shown,
    /// The view was hidden
    Hidden,
    /// The header section was replaced; carries the new text
    HeaderChanged(String),
    /// The content section was replaced; carries the new text
    ContentChanged(String),
    /// The footer section was replaced; carries the new text
    FooterChanged(String),
    /// A footer button was pressed; carries the button label
    ButtonPressed(String),
    /// A prompt was resolved affirmatively
    Confirmed,
    /// A prompt was resolved negatively
    Canceled,
}

impl ModalEvent {
    /// Get the subscription key for this event
    pub fn kind(&self) -> EventKind {
        match self {
            ModalEvent::Shown => EventKind::Show,
            ModalEvent::Hidden => EventKind::Hide,
            ModalEvent::HeaderChanged(_) => EventKind::HeaderChanged,
            ModalEvent::ContentChanged(_) => EventKind::ContentChanged,
            ModalEvent::FooterChanged(_) => EventKind::FooterChanged,
            ModalEvent::ButtonPressed(_) => EventKind::ButtonPress,
            ModalEvent::Confirmed => EventKind::Confirmed,
            ModalEvent::Canceled => EventKind::Canceled,
        }
    }
}

/// Subscription keys for [`ModalEvent`] notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Show,
    Hide,
    HeaderChanged,
    ContentChanged,
    FooterChanged,
    ButtonPress,
    Confirmed,
    Canceled,
}

/// Callback invoked when a subscribed notification fires
pub type EventCallback = Box<dyn FnMut(&ModalEvent) + Send>;

/// Per-instance subscriber registry
///
/// Callbacks are invoked in registration order. A callback registered for
/// one kind never sees events of another kind.
#[derive(Default)]
pub struct EventRegistry {
    subscribers: Vec<(EventKind, EventCallback)>,
}

impl EventRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Register a callback for an event kind
    pub fn subscribe(&mut self, kind: EventKind, callback: EventCallback) {
        self.subscribers.push((kind, callback));
    }

    /// Deliver an event to every subscriber registered for its kind
    pub fn emit(&mut self, event: &ModalEvent) {
        trace!("emitting modal event: {:?}", event);
        let kind = event.kind();
        for (subscribed, callback) in self.subscribers.iter_mut() {
            if *subscribed == kind {
                callback(event);
            }
        }
    }

    /// Number of registered subscribers
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Whether the registry has no subscribers
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl std::fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRegistry")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
