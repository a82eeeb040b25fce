//! Confirm modal view
//!
//! A modal whose footer is a row of labelled buttons. Pressing a button
//! raises a button-press notification carrying the label; the confirm
//! view itself attaches no meaning to any label.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::{
    error::ViewResult,
    event::{EventCallback, EventKind, ModalEvent},
    ui::layout::{button_row, hit},
    ui::modal::{Modal, ModalOptions, ModalResult, ModalView, SectionSource},
    ui::theme::Theme,
};

/// Construction options for [`ConfirmView`]
pub struct ConfirmOptions {
    /// Options for the underlying modal; its footer is replaced by the
    /// button row
    pub modal: ModalOptions,
    /// Ordered button labels rendered into the footer
    pub buttons: Vec<String>,
    /// Callback registered for the button-press notification
    pub on_button_pressed: Option<EventCallback>,
}

impl Default for ConfirmOptions {
    fn default() -> Self {
        Self {
            modal: ModalOptions::default(),
            buttons: vec!["OK".to_string(), "Cancel".to_string()],
            on_button_pressed: None,
        }
    }
}

/// Modal with labelled footer buttons
///
/// Owns a [`ModalView`] and delegates the show/hide lifecycle and the
/// header/content sections to it.
pub struct ConfirmView {
    modal: ModalView,
    buttons: Vec<String>,
    selected: usize,
    /// Button rectangles recorded at render time, keyed by label
    button_areas: Vec<(String, Rect)>,
}

impl ConfirmView {
    /// Create a new hidden confirm view from construction options
    pub fn new(options: ConfirmOptions) -> Self {
        let ConfirmOptions {
            mut modal,
            buttons,
            on_button_pressed,
        } = options;

        // The button row owns the footer section
        modal.footer = Some(SectionSource::Text(footer_line(&buttons)));
        let mut modal = ModalView::new(modal);
        if let Some(callback) = on_button_pressed {
            modal.on(EventKind::ButtonPress, callback);
        }

        Self {
            modal,
            buttons,
            selected: 0,
            button_areas: Vec::new(),
        }
    }

    /// Make the view visible
    pub fn show(&mut self) -> ViewResult<()> {
        self.selected = 0;
        self.modal.show()
    }

    /// Register a callback for an event kind
    pub fn on(&mut self, kind: EventKind, callback: EventCallback) {
        self.modal.on(kind, callback);
    }

    /// Deliver an event to this instance's subscribers
    pub(crate) fn emit(&mut self, event: &ModalEvent) {
        self.modal.emit(event);
    }

    /// Current button labels in footer order
    pub fn buttons(&self) -> &[String] {
        &self.buttons
    }

    /// Replace the button labels
    ///
    /// Emits a footer-changed notification when the rendered footer
    /// line differs from the current one.
    pub fn set_buttons(&mut self, labels: Vec<String>) {
        let line = footer_line(&labels);
        self.buttons = labels;
        self.selected = 0;
        self.button_areas.clear();
        self.modal.set_footer(SectionSource::Text(line));
    }

    /// Currently selected button label, if any buttons exist
    pub fn selected_button(&self) -> Option<&str> {
        self.buttons.get(self.selected).map(String::as_str)
    }

    /// Screen rectangle recorded for a button at the last render
    pub fn button_area(&self, label: &str) -> Option<Rect> {
        self.button_areas
            .iter()
            .find(|(recorded, _)| recorded == label)
            .map(|(_, cell)| *cell)
    }

    /// Current header text
    pub fn header(&self) -> Option<String> {
        self.modal.header()
    }

    /// Replace the header section
    pub fn set_header<S: Into<SectionSource>>(&mut self, source: S) {
        self.modal.set_header(source);
    }

    /// Current content text
    pub fn content(&self) -> Option<String> {
        self.modal.content()
    }

    /// Replace the content section
    pub fn set_content<S: Into<SectionSource>>(&mut self, source: S) {
        self.modal.set_content(source);
    }

    /// Current footer text (the rendered button line)
    pub fn footer(&self) -> Option<String> {
        self.modal.footer()
    }

    /// Set the container size as percentages of the frame
    pub fn set_size_percent(&mut self, width_percent: u16, height_percent: u16) {
        self.modal.set_size_percent(width_percent, height_percent);
    }

    /// Control whether a click on the overlay hides the modal
    pub fn set_dismiss_on_overlay_click(&mut self, dismiss: bool) {
        self.modal.set_dismiss_on_overlay_click(dismiss);
    }

    /// Emit the button-press notification for a label
    fn press(&mut self, label: String) -> ModalResult {
        self.modal.emit(&ModalEvent::ButtonPressed(label.clone()));
        ModalResult::ButtonPressed(label)
    }
}

impl Modal for ConfirmView {
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        self.button_areas.clear();
        let footer_area = match self.modal.render_shell(frame, area, theme) {
            Some(footer_area) => footer_area,
            None => return,
        };

        if self.buttons.is_empty() {
            // Nothing to press; close the container frame
            let empty = Paragraph::new("").block(
                Block::default()
                    .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
                    .border_style(theme.container_border_style()),
            );
            frame.render_widget(empty, footer_area);
            return;
        }

        let cells = button_row(footer_area, self.buttons.len());
        for (index, (label, cell)) in self.buttons.iter().zip(cells).enumerate() {
            let style = if index == self.selected {
                theme.button_selected_style()
            } else {
                theme.button_style()
            };

            let button = Paragraph::new(Line::from(vec![Span::styled(label.as_str(), style)]))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(theme.border_style()),
                )
                .alignment(Alignment::Center);
            frame.render_widget(button, cell);
            self.button_areas.push((label.clone(), cell));
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> ViewResult<ModalResult> {
        if !self.modal.is_visible() {
            return Ok(ModalResult::None);
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected = self.selected.saturating_sub(1);
                Ok(ModalResult::None)
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.selected + 1 < self.buttons.len() {
                    self.selected += 1;
                }
                Ok(ModalResult::None)
            }
            KeyCode::Enter => match self.buttons.get(self.selected).cloned() {
                Some(label) => Ok(self.press(label)),
                None => Ok(ModalResult::None),
            },
            _ => self.modal.handle_key_event(key),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> ViewResult<ModalResult> {
        if !self.modal.is_visible() {
            return Ok(ModalResult::None);
        }

        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let pressed = self
                .button_areas
                .iter()
                .position(|(_, cell)| hit(*cell, mouse.column, mouse.row));
            if let Some(index) = pressed {
                self.selected = index;
                let label = self.button_areas[index].0.clone();
                return Ok(self.press(label));
            }
        }

        self.modal.handle_mouse_event(mouse)
    }

    fn is_visible(&self) -> bool {
        self.modal.is_visible()
    }

    fn hide(&mut self) {
        self.modal.hide();
    }
}

/// Footer text rendering of a button label list
fn footer_line(labels: &[String]) -> String {
    labels
        .iter()
        .map(|label| format!("[ {} ]", label))
        .collect::<Vec<_>>()
        .join("  ")
}
