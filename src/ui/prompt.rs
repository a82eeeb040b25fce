//! Prompt modal view
//!
//! A confirm view holding a pending callback. The first configured
//! button resolves the callback affirmatively, the second resolves it
//! as a cancellation; either way the modal hides and the callback is
//! consumed. Dismissing a pending prompt (Esc or overlay click) also
//! resolves it as a cancellation, so a stored callback can never
//! outlive the interaction that created it.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};
use thiserror::Error;
use tracing::debug;

use crate::{
    error::{ViewError, ViewResult},
    event::{EventCallback, EventKind, ModalEvent},
    ui::confirm::{ConfirmOptions, ConfirmView},
    ui::modal::{Modal, ModalResult, SectionSource},
    ui::theme::Theme,
};

/// Error value delivered to the prompt callback on cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("prompt was canceled")]
pub struct PromptCanceled;

/// Callback resolved when the prompt completes
pub type PromptCallback = Box<dyn FnOnce(Result<(), PromptCanceled>) + Send>;

/// Confirm view that resolves a stored callback
///
/// Owns a [`ConfirmView`] and delegates rendering and input to it,
/// interpreting button presses: the first label confirms, the second
/// cancels. At most one callback is pending at a time.
pub struct PromptView {
    confirm: ConfirmView,
    pending: Option<PromptCallback>,
}

impl PromptView {
    /// Create a new hidden prompt view from construction options
    ///
    /// Fails with a configuration error unless exactly two button
    /// labels are given; a prompt with any other count has no
    /// affirmative/negative pair to resolve against.
    pub fn new(options: ConfirmOptions) -> ViewResult<Self> {
        if options.buttons.len() != 2 {
            return Err(ViewError::config(format!(
                "prompt requires exactly two buttons, got {}",
                options.buttons.len()
            )));
        }

        Ok(Self {
            confirm: ConfirmView::new(options),
            pending: None,
        })
    }

    /// Show the prompt and store the callback to resolve
    ///
    /// Fails with [`ViewError::AlreadyVisible`] when the prompt is
    /// already showing; the callback is not stored in that case.
    pub fn prompt<F>(&mut self, callback: F) -> ViewResult<()>
    where
        F: FnOnce(Result<(), PromptCanceled>) + Send + 'static,
    {
        self.confirm.show()?;
        self.pending = Some(Box::new(callback));
        Ok(())
    }

    /// Whether a callback is waiting to be resolved
    pub fn has_pending_callback(&self) -> bool {
        self.pending.is_some()
    }

    /// Register a callback for an event kind
    pub fn on(&mut self, kind: EventKind, callback: EventCallback) {
        self.confirm.on(kind, callback);
    }

    /// Current button labels in footer order
    pub fn buttons(&self) -> &[String] {
        self.confirm.buttons()
    }

    /// Screen rectangle recorded for a button at the last render
    pub fn button_area(&self, label: &str) -> Option<Rect> {
        self.confirm.button_area(label)
    }

    /// Replace the button labels, keeping the two-button requirement
    pub fn set_buttons(&mut self, labels: Vec<String>) -> ViewResult<()> {
        if labels.len() != 2 {
            return Err(ViewError::config(format!(
                "prompt requires exactly two buttons, got {}",
                labels.len()
            )));
        }
        self.confirm.set_buttons(labels);
        Ok(())
    }

    /// Current header text
    pub fn header(&self) -> Option<String> {
        self.confirm.header()
    }

    /// Replace the header section
    pub fn set_header<S: Into<SectionSource>>(&mut self, source: S) {
        self.confirm.set_header(source);
    }

    /// Current content text
    pub fn content(&self) -> Option<String> {
        self.confirm.content()
    }

    /// Replace the content section
    pub fn set_content<S: Into<SectionSource>>(&mut self, source: S) {
        self.confirm.set_content(source);
    }

    /// Set the container size as percentages of the frame
    pub fn set_size_percent(&mut self, width_percent: u16, height_percent: u16) {
        self.confirm.set_size_percent(width_percent, height_percent);
    }

    /// Control whether a click on the overlay hides the prompt
    pub fn set_dismiss_on_overlay_click(&mut self, dismiss: bool) {
        self.confirm.set_dismiss_on_overlay_click(dismiss);
    }

    /// Emit the resolution notification and consume the callback
    fn finish(&mut self, confirmed: bool) {
        let event = if confirmed {
            ModalEvent::Confirmed
        } else {
            ModalEvent::Canceled
        };
        self.confirm.emit(&event);

        if let Some(callback) = self.pending.take() {
            debug!(confirmed, "resolving prompt callback");
            if confirmed {
                callback(Ok(()));
            } else {
                callback(Err(PromptCanceled));
            }
        }
    }

    /// Map a pressed button label to a resolution
    fn resolve_label(&mut self, label: &str) -> ModalResult {
        let affirmative = self.confirm.buttons().first().cloned();
        let negative = self.confirm.buttons().get(1).cloned();

        if affirmative.as_deref() == Some(label) {
            self.finish(true);
            self.confirm.hide();
            ModalResult::Confirmed
        } else if negative.as_deref() == Some(label) {
            self.finish(false);
            self.confirm.hide();
            ModalResult::Canceled
        } else {
            ModalResult::ButtonPressed(label.to_string())
        }
    }

    /// Convert a dismissal into a cancellation when a callback is pending
    fn dismissed(&mut self) -> ModalResult {
        if self.pending.is_some() {
            self.finish(false);
            ModalResult::Canceled
        } else {
            ModalResult::Hidden
        }
    }
}

impl Modal for PromptView {
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        self.confirm.render(frame, area, theme);
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> ViewResult<ModalResult> {
        match self.confirm.handle_key_event(key)? {
            ModalResult::ButtonPressed(label) => Ok(self.resolve_label(&label)),
            ModalResult::Hidden => Ok(self.dismissed()),
            other => Ok(other),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> ViewResult<ModalResult> {
        match self.confirm.handle_mouse_event(mouse)? {
            ModalResult::ButtonPressed(label) => Ok(self.resolve_label(&label)),
            ModalResult::Hidden => Ok(self.dismissed()),
            other => Ok(other),
        }
    }

    fn is_visible(&self) -> bool {
        self.confirm.is_visible()
    }

    fn hide(&mut self) {
        if self.pending.is_some() {
            self.finish(false);
        }
        self.confirm.hide();
    }
}
