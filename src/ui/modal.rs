//! Base modal view
//!
//! A modal is an overlay covering the whole frame with a centered
//! container split into header, content and footer regions. Section
//! values are producers: either fixed text or a closure re-evaluated
//! at every render.

use std::fmt;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tracing::debug;

use crate::{
    error::{ViewError, ViewResult},
    event::{EventCallback, EventKind, EventRegistry, ModalEvent},
    ui::layout::{centered_rect, hit, section_chunks},
    ui::theme::Theme,
};

/// Value of a header, content or footer section
///
/// Dynamic sources are resolved again on every render and on every
/// change comparison, so their output may vary over time.
#[derive(Clone)]
pub enum SectionSource {
    /// Fixed text
    Text(String),
    /// Closure producing the text on demand
    Dynamic(Arc<dyn Fn() -> String + Send + Sync>),
}

impl SectionSource {
    /// Create a fixed text source
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self::Text(text.into())
    }

    /// Create a dynamic source from a closure
    pub fn dynamic<F>(producer: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self::Dynamic(Arc::new(producer))
    }

    /// Produce the current text of this source
    pub fn resolve(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Dynamic(producer) => producer(),
        }
    }
}

impl fmt::Debug for SectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Dynamic(_) => f.debug_tuple("Dynamic").field(&"<closure>").finish(),
        }
    }
}

impl From<&str> for SectionSource {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for SectionSource {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// The three section producers of a modal
///
/// A missing section renders as an empty region.
#[derive(Debug, Clone, Default)]
pub struct Sections {
    pub header: Option<SectionSource>,
    pub content: Option<SectionSource>,
    pub footer: Option<SectionSource>,
}

/// Construction options for [`ModalView`]
///
/// Every recognized option is an explicit field; there is no dynamic
/// option map. Missing sections render nothing, missing callbacks
/// register nothing.
#[derive(Default)]
pub struct ModalOptions {
    /// Initial header section
    pub header: Option<SectionSource>,
    /// Initial content section
    pub content: Option<SectionSource>,
    /// Initial footer section
    pub footer: Option<SectionSource>,
    /// Callback registered for the show notification
    pub on_show: Option<EventCallback>,
    /// Callback registered for the hide notification
    pub on_hide: Option<EventCallback>,
}

/// Result from modal interaction
#[derive(Debug, Clone, PartialEq)]
pub enum ModalResult {
    /// No action taken
    None,
    /// The modal was hidden
    Hidden,
    /// A footer button was pressed
    ButtonPressed(String),
    /// A prompt was resolved affirmatively
    Confirmed,
    /// A prompt was resolved negatively
    Canceled,
}

/// Trait for modal views
pub trait Modal {
    /// Render the modal
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// Handle key events
    fn handle_key_event(&mut self, key: KeyEvent) -> ViewResult<ModalResult>;

    /// Handle mouse events
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> ViewResult<ModalResult>;

    /// Check if the modal is visible
    fn is_visible(&self) -> bool;

    /// Hide the modal
    fn hide(&mut self);
}

/// Base modal view
///
/// Owns the visibility flag, the section producers and the per-instance
/// event registry. An overlay click or Esc hides this instance and no
/// other.
pub struct ModalView {
    visible: bool,
    sections: Sections,
    events: EventRegistry,
    /// Container rectangle recorded at render time for hit-testing
    container: Option<Rect>,
    width_percent: u16,
    height_percent: u16,
    dismiss_on_overlay_click: bool,
}

impl ModalView {
    /// Create a new hidden modal from construction options
    pub fn new(options: ModalOptions) -> Self {
        let mut events = EventRegistry::new();
        if let Some(callback) = options.on_show {
            events.subscribe(EventKind::Show, callback);
        }
        if let Some(callback) = options.on_hide {
            events.subscribe(EventKind::Hide, callback);
        }

        Self {
            visible: false,
            sections: Sections {
                header: options.header,
                content: options.content,
                footer: options.footer,
            },
            events,
            container: None,
            width_percent: 60,
            height_percent: 40,
            dismiss_on_overlay_click: true,
        }
    }

    /// Make the modal visible
    ///
    /// Fails with [`ViewError::AlreadyVisible`] when called on a visible
    /// instance.
    pub fn show(&mut self) -> ViewResult<()> {
        if self.visible {
            return Err(ViewError::AlreadyVisible);
        }

        debug!("showing modal");
        self.visible = true;
        self.events.emit(&ModalEvent::Shown);
        Ok(())
    }

    /// Hide the modal
    ///
    /// Emits one hide notification per call, also when already hidden.
    pub fn hide(&mut self) {
        debug!("hiding modal");
        self.visible = false;
        self.container = None;
        self.events.emit(&ModalEvent::Hidden);
    }

    /// Check if the modal is visible
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Register a callback for an event kind
    pub fn on(&mut self, kind: EventKind, callback: EventCallback) {
        self.events.subscribe(kind, callback);
    }

    /// Deliver an event to this instance's subscribers
    pub(crate) fn emit(&mut self, event: &ModalEvent) {
        self.events.emit(event);
    }

    /// Current header text
    pub fn header(&self) -> Option<String> {
        self.sections.header.as_ref().map(SectionSource::resolve)
    }

    /// Replace the header section
    ///
    /// Emits a header-changed notification when the resolved text
    /// differs from the current one.
    pub fn set_header<S: Into<SectionSource>>(&mut self, source: S) {
        let source = source.into();
        let changed = self.replace_section(Section::Header, source);
        if let Some(text) = changed {
            self.events.emit(&ModalEvent::HeaderChanged(text));
        }
    }

    /// Current content text
    pub fn content(&self) -> Option<String> {
        self.sections.content.as_ref().map(SectionSource::resolve)
    }

    /// Replace the content section
    pub fn set_content<S: Into<SectionSource>>(&mut self, source: S) {
        let source = source.into();
        let changed = self.replace_section(Section::Content, source);
        if let Some(text) = changed {
            self.events.emit(&ModalEvent::ContentChanged(text));
        }
    }

    /// Current footer text
    pub fn footer(&self) -> Option<String> {
        self.sections.footer.as_ref().map(SectionSource::resolve)
    }

    /// Replace the footer section
    pub fn set_footer<S: Into<SectionSource>>(&mut self, source: S) {
        let source = source.into();
        let changed = self.replace_section(Section::Footer, source);
        if let Some(text) = changed {
            self.events.emit(&ModalEvent::FooterChanged(text));
        }
    }

    /// Set the container size as percentages of the frame
    pub fn set_size_percent(&mut self, width_percent: u16, height_percent: u16) {
        self.width_percent = width_percent.clamp(10, 100);
        self.height_percent = height_percent.clamp(10, 100);
    }

    /// Control whether a click on the overlay hides the modal
    pub fn set_dismiss_on_overlay_click(&mut self, dismiss: bool) {
        self.dismiss_on_overlay_click = dismiss;
    }

    /// Store the new source and report the new text when it differs
    fn replace_section(&mut self, section: Section, source: SectionSource) -> Option<String> {
        let new_text = source.resolve();
        let slot = match section {
            Section::Header => &mut self.sections.header,
            Section::Content => &mut self.sections.content,
            Section::Footer => &mut self.sections.footer,
        };
        let unchanged = slot
            .as_ref()
            .map(|current| current.resolve() == new_text)
            .unwrap_or(false);

        *slot = Some(source);
        if unchanged {
            None
        } else {
            Some(new_text)
        }
    }

    /// Render overlay, container, header and content; returns the
    /// footer region for the caller to fill
    pub(crate) fn render_shell(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
    ) -> Option<Rect> {
        if !self.visible {
            self.container = None;
            return None;
        }

        // Overlay covers the whole frame behind the container
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(theme.overlay_style()), area);

        let container = centered_rect(self.width_percent, self.height_percent, area);
        self.container = Some(container);
        frame.render_widget(Clear, container);

        let [header_area, content_area, footer_area] = section_chunks(container);

        // Header
        let header_text = self
            .sections
            .header
            .as_ref()
            .map(SectionSource::resolve)
            .unwrap_or_default();
        let title_block = Block::default()
            .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
            .title(Span::styled(header_text, theme.title_style()))
            .border_style(theme.container_border_style());
        frame.render_widget(title_block, header_area);

        // Content
        let content_text = self
            .sections
            .content
            .as_ref()
            .map(SectionSource::resolve)
            .unwrap_or_default();
        let content = Paragraph::new(content_text)
            .block(
                Block::default()
                    .borders(Borders::LEFT | Borders::RIGHT)
                    .border_style(theme.container_border_style()),
            )
            .style(theme.text_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(content, content_area);

        Some(footer_area)
    }
}

impl Modal for ModalView {
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if let Some(footer_area) = self.render_shell(frame, area, theme) {
            let footer_text = self
                .sections
                .footer
                .as_ref()
                .map(SectionSource::resolve)
                .unwrap_or_default();
            let footer = Paragraph::new(footer_text)
                .block(
                    Block::default()
                        .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
                        .border_style(theme.container_border_style()),
                )
                .style(theme.text_style())
                .alignment(Alignment::Center);
            frame.render_widget(footer, footer_area);
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> ViewResult<ModalResult> {
        if !self.visible {
            return Ok(ModalResult::None);
        }

        match key.code {
            KeyCode::Esc => {
                self.hide();
                Ok(ModalResult::Hidden)
            }
            _ => Ok(ModalResult::None),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> ViewResult<ModalResult> {
        if !self.visible {
            return Ok(ModalResult::None);
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(container) = self.container {
                    if hit(container, mouse.column, mouse.row) {
                        // Clicks inside the container never reach the overlay
                        return Ok(ModalResult::None);
                    }
                }
                if self.dismiss_on_overlay_click {
                    self.hide();
                    return Ok(ModalResult::Hidden);
                }
                Ok(ModalResult::None)
            }
            _ => Ok(ModalResult::None),
        }
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn hide(&mut self) {
        ModalView::hide(self);
    }
}

/// Section discriminant used by the setters
enum Section {
    Header,
    Content,
    Footer,
}
