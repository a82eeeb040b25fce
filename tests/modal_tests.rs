//! Tests for the base modal view lifecycle and sections

use std::sync::{Arc, Mutex};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};

use modalview::{
    EventKind, Modal, ModalEvent, ModalOptions, ModalResult, ModalView, SectionSource, Theme,
    ViewError,
};

fn new_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(80, 24);
    Terminal::new(backend).expect("failed to create test terminal")
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer.get(x, y).symbol());
        }
        text.push('\n');
    }
    text
}

fn draw(terminal: &mut Terminal<TestBackend>, view: &mut dyn Modal, theme: &Theme) {
    terminal
        .draw(|f| view.render(f, f.size(), theme))
        .expect("failed to draw");
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn collect_events(view: &mut ModalView, kind: EventKind) -> Arc<Mutex<Vec<ModalEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    view.on(
        kind,
        Box::new(move |event| sink.lock().unwrap().push(event.clone())),
    );
    events
}

#[test]
fn test_show_and_hide_lifecycle() {
    let mut modal = ModalView::new(ModalOptions::default());
    assert!(!modal.is_visible());

    modal.show().expect("first show must succeed");
    assert!(modal.is_visible());

    modal.hide();
    assert!(!modal.is_visible());
}

#[test]
fn test_show_when_visible_fails() {
    let mut modal = ModalView::new(ModalOptions::default());
    modal.show().expect("first show must succeed");

    let err = modal.show().expect_err("second show must fail");
    assert!(matches!(err, ViewError::AlreadyVisible));
    assert!(err.is_usage_error());
    // The modal stays visible after the failed call
    assert!(modal.is_visible());
}

#[test]
fn test_hide_emits_once_per_call() {
    let mut modal = ModalView::new(ModalOptions::default());
    let hides = collect_events(&mut modal, EventKind::Hide);

    modal.show().expect("show failed");
    modal.hide();
    assert_eq!(hides.lock().unwrap().len(), 1);

    // Hiding an already hidden modal still notifies
    modal.hide();
    assert_eq!(hides.lock().unwrap().len(), 2);
}

#[test]
fn test_construction_callbacks_fire() {
    let shown = Arc::new(Mutex::new(0u32));
    let hidden = Arc::new(Mutex::new(0u32));
    let shown_sink = Arc::clone(&shown);
    let hidden_sink = Arc::clone(&hidden);

    let mut modal = ModalView::new(ModalOptions {
        on_show: Some(Box::new(move |_| *shown_sink.lock().unwrap() += 1)),
        on_hide: Some(Box::new(move |_| *hidden_sink.lock().unwrap() += 1)),
        ..ModalOptions::default()
    });

    modal.show().expect("show failed");
    modal.hide();

    assert_eq!(*shown.lock().unwrap(), 1);
    assert_eq!(*hidden.lock().unwrap(), 1);
}

#[test]
fn test_sections_render_on_first_draw() {
    let mut modal = ModalView::new(ModalOptions {
        header: Some(SectionSource::text("Greeting")),
        content: Some(SectionSource::text("Hello there")),
        footer: Some(SectionSource::text("press Esc")),
        ..ModalOptions::default()
    });
    modal.show().expect("show failed");

    let theme = Theme::default_theme();
    let mut terminal = new_terminal();
    draw(&mut terminal, &mut modal, &theme);

    let text = buffer_text(&terminal);
    assert!(text.contains("Greeting"));
    assert!(text.contains("Hello there"));
    assert!(text.contains("press Esc"));
}

#[test]
fn test_hidden_modal_renders_nothing() {
    let mut modal = ModalView::new(ModalOptions {
        content: Some(SectionSource::text("invisible")),
        ..ModalOptions::default()
    });

    let theme = Theme::default_theme();
    let mut terminal = new_terminal();
    draw(&mut terminal, &mut modal, &theme);

    assert!(!buffer_text(&terminal).contains("invisible"));
}

#[test]
fn test_section_accessors() {
    let mut modal = ModalView::new(ModalOptions::default());
    assert_eq!(modal.header(), None);

    modal.set_header("Title");
    assert_eq!(modal.header(), Some("Title".to_string()));

    modal.set_content(SectionSource::dynamic(|| "generated".to_string()));
    assert_eq!(modal.content(), Some("generated".to_string()));

    modal.set_footer("hints");
    assert_eq!(modal.footer(), Some("hints".to_string()));
}

#[test]
fn test_setting_new_value_emits_exactly_one_change() {
    let mut modal = ModalView::new(ModalOptions {
        header: Some(SectionSource::text("old")),
        ..ModalOptions::default()
    });
    let changes = collect_events(&mut modal, EventKind::HeaderChanged);

    modal.set_header("new");

    let events = changes.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0], ModalEvent::HeaderChanged("new".to_string()));
}

#[test]
fn test_setting_same_value_emits_nothing() {
    let mut modal = ModalView::new(ModalOptions {
        content: Some(SectionSource::text("same")),
        ..ModalOptions::default()
    });
    let changes = collect_events(&mut modal, EventKind::ContentChanged);

    modal.set_content("same");
    assert!(changes.lock().unwrap().is_empty());
}

#[test]
fn test_change_events_are_per_section() {
    let mut modal = ModalView::new(ModalOptions::default());
    let header_changes = collect_events(&mut modal, EventKind::HeaderChanged);
    let footer_changes = collect_events(&mut modal, EventKind::FooterChanged);

    modal.set_footer("only footer");

    assert!(header_changes.lock().unwrap().is_empty());
    assert_eq!(footer_changes.lock().unwrap().len(), 1);
}

#[test]
fn test_esc_hides() {
    let mut modal = ModalView::new(ModalOptions::default());
    modal.show().expect("show failed");

    let result = modal
        .handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
        .expect("key handling failed");

    assert_eq!(result, ModalResult::Hidden);
    assert!(!modal.is_visible());
}

#[test]
fn test_overlay_click_hides() {
    let mut modal = ModalView::new(ModalOptions::default());
    modal.show().expect("show failed");

    let theme = Theme::default_theme();
    let mut terminal = new_terminal();
    draw(&mut terminal, &mut modal, &theme);

    // Top-left corner is outside the centered container
    let result = modal
        .handle_mouse_event(left_click(1, 1))
        .expect("mouse handling failed");

    assert_eq!(result, ModalResult::Hidden);
    assert!(!modal.is_visible());
}

#[test]
fn test_container_click_is_swallowed() {
    let mut modal = ModalView::new(ModalOptions::default());
    modal.show().expect("show failed");

    let theme = Theme::default_theme();
    let mut terminal = new_terminal();
    draw(&mut terminal, &mut modal, &theme);

    // Frame center is inside the centered container
    let result = modal
        .handle_mouse_event(left_click(40, 12))
        .expect("mouse handling failed");

    assert_eq!(result, ModalResult::None);
    assert!(modal.is_visible());
}

#[test]
fn test_overlay_click_dismiss_can_be_disabled() {
    let mut modal = ModalView::new(ModalOptions::default());
    modal.set_dismiss_on_overlay_click(false);
    modal.show().expect("show failed");

    let theme = Theme::default_theme();
    let mut terminal = new_terminal();
    draw(&mut terminal, &mut modal, &theme);

    let result = modal
        .handle_mouse_event(left_click(1, 1))
        .expect("mouse handling failed");

    assert_eq!(result, ModalResult::None);
    assert!(modal.is_visible());
}

#[test]
fn test_overlay_click_hides_only_the_clicked_instance() {
    let mut first = ModalView::new(ModalOptions::default());
    let mut second = ModalView::new(ModalOptions::default());
    first.show().expect("show failed");
    second.show().expect("show failed");

    let theme = Theme::default_theme();
    let mut terminal = new_terminal();
    draw(&mut terminal, &mut first, &theme);
    draw(&mut terminal, &mut second, &theme);

    first
        .handle_mouse_event(left_click(1, 1))
        .expect("mouse handling failed");

    assert!(!first.is_visible());
    // The second instance never sees the first instance's overlay click
    assert!(second.is_visible());
}

#[test]
fn test_hidden_modal_ignores_input() {
    let mut modal = ModalView::new(ModalOptions::default());

    let key = modal
        .handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
        .expect("key handling failed");
    let mouse = modal
        .handle_mouse_event(left_click(1, 1))
        .expect("mouse handling failed");

    assert_eq!(key, ModalResult::None);
    assert_eq!(mouse, ModalResult::None);
}
