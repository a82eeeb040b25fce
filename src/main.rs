use modalview::{
    initialize_logging, Config, ConfirmOptions, ConfirmView, EventCallback, EventKind, Modal,
    ModalOptions, ModalView, PromptView, SectionSource, Theme, ViewError, ViewResult,
};

use std::{
    env, io, process,
    sync::{Arc, Mutex},
    time::Duration,
};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, MouseEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tracing::{debug, info, warn};

/// Shared notification log shown at the bottom of the demo screen
type EventLog = Arc<Mutex<Vec<String>>>;

/// All notification kinds a view can raise
const ALL_KINDS: [EventKind; 8] = [
    EventKind::Show,
    EventKind::Hide,
    EventKind::HeaderChanged,
    EventKind::ContentChanged,
    EventKind::FooterChanged,
    EventKind::ButtonPress,
    EventKind::Confirmed,
    EventKind::Canceled,
];

fn main() -> ViewResult<()> {
    // Parse command line arguments first (before logging to avoid noise)
    let args: Vec<String> = env::args().collect();

    // Handle version flag
    if args.contains(&"--version".to_string()) || args.contains(&"-V".to_string()) {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        process::exit(0);
    }

    // Handle help flag
    if args.contains(&"--help".to_string()) || args.contains(&"-h".to_string()) {
        print_help();
        process::exit(0);
    }

    // Initialize logging
    initialize_logging().map_err(|e| ViewError::terminal(e.to_string()))?;

    // Check if we should run in demo mode or TUI mode
    let demo_mode = args.contains(&"--demo".to_string())
        || env::var("MODALVIEW_DEMO_MODE").is_ok()
        || env::var("TERM").unwrap_or_default().is_empty();

    if demo_mode {
        info!("modalview demo mode starting");
        run_demo_mode()
    } else {
        info!("modalview TUI starting");
        run_tui_mode()
    }
}

/// Non-interactive walkthrough of the three views for terminals that
/// cannot enter TUI mode
fn run_demo_mode() -> ViewResult<()> {
    let config = Config::load()?;
    info!("Configuration loaded: {}", config.app.name);

    let log: EventLog = Arc::new(Mutex::new(Vec::new()));

    let mut modal = ModalView::new(ModalOptions {
        header: Some(SectionSource::text("Demo")),
        content: Some(SectionSource::text("Hello from modalview")),
        ..ModalOptions::default()
    });
    observe(|kind, cb| modal.on(kind, cb), "modal", &log);

    modal.show()?;
    modal.set_content("Updated content");
    modal.hide();

    let mut prompt = PromptView::new(ConfirmOptions::default())?;
    observe(|kind, cb| prompt.on(kind, cb), "prompt", &log);

    let resolution = Arc::clone(&log);
    prompt.prompt(move |outcome| push_entry(&resolution, "prompt", &format!("resolved {:?}", outcome)))?;
    // No input arrives in demo mode; hiding resolves the prompt as canceled
    prompt.hide();

    info!("Notifications observed:");
    if let Ok(entries) = log.lock() {
        for entry in entries.iter() {
            info!("  {}", entry);
        }
    }

    info!("Key bindings in TUI mode:");
    info!("  1 - Open base modal");
    info!("  2 - Open confirm modal");
    info!("  3 - Open prompt modal");
    info!("  c - Update the content of the open modal");
    info!("  Left/Right + Enter - Navigate and press buttons");
    info!("  Esc - Close the open modal");
    info!("  q - Quit");

    info!("modalview demo finished");
    Ok(())
}

fn print_help() {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    println!("{}", env!("CARGO_PKG_DESCRIPTION"));
    println!();
    println!("USAGE:");
    println!("    modalview-demo [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Print this help message and exit");
    println!("    -V, --version    Print version information and exit");
    println!("        --demo       Run in demo mode (non-interactive)");
    println!();
    println!("ENVIRONMENT:");
    println!("    MODALVIEW_DEMO_MODE   Set to run in demo mode");
    println!("    RUST_LOG              Set logging level (debug, info, warn, error)");
}

fn run_tui_mode() -> ViewResult<()> {
    match DemoApp::new() {
        Ok(app) => app.run(),
        Err(e) => {
            warn!("Failed to initialize TUI: {}. Running in demo mode.", e);
            run_demo_mode()
        }
    }
}

/// Interactive demo application driving the three views
struct DemoApp {
    config: Config,
    theme: Theme,
    modal: ModalView,
    confirm: ConfirmView,
    prompt: PromptView,
    log: EventLog,
    content_updates: usize,
    should_quit: bool,
}

impl DemoApp {
    fn new() -> ViewResult<Self> {
        let config = Config::load()?;
        let theme = Theme::load(&config.ui.theme)?;
        let log: EventLog = Arc::new(Mutex::new(Vec::new()));

        let mut modal = ModalView::new(ModalOptions {
            header: Some(SectionSource::text("Modal")),
            content: Some(SectionSource::text(
                "A base modal. Click the overlay or press Esc to close.",
            )),
            footer: Some(SectionSource::text("modalview")),
            ..ModalOptions::default()
        });
        observe(|kind, cb| modal.on(kind, cb), "modal", &log);

        let mut confirm = ConfirmView::new(ConfirmOptions {
            modal: ModalOptions {
                header: Some(SectionSource::text("Confirm")),
                content: Some(SectionSource::text("Press a button; the label is reported.")),
                ..ModalOptions::default()
            },
            buttons: vec!["Yes".to_string(), "No".to_string()],
            on_button_pressed: None,
        });
        observe(|kind, cb| confirm.on(kind, cb), "confirm", &log);

        let mut prompt = PromptView::new(ConfirmOptions {
            modal: ModalOptions {
                header: Some(SectionSource::text("Prompt")),
                content: Some(SectionSource::text("OK confirms, Cancel cancels.")),
                ..ModalOptions::default()
            },
            buttons: vec!["OK".to_string(), "Cancel".to_string()],
            on_button_pressed: None,
        })?;
        observe(|kind, cb| prompt.on(kind, cb), "prompt", &log);

        modal.set_size_percent(config.ui.width_percent, config.ui.height_percent);
        modal.set_dismiss_on_overlay_click(config.ui.dismiss_on_overlay_click);
        confirm.set_size_percent(config.ui.width_percent, config.ui.height_percent);
        confirm.set_dismiss_on_overlay_click(config.ui.dismiss_on_overlay_click);
        prompt.set_size_percent(config.ui.width_percent, config.ui.height_percent);
        prompt.set_dismiss_on_overlay_click(config.ui.dismiss_on_overlay_click);

        Ok(Self {
            config,
            theme,
            modal,
            confirm,
            prompt,
            log,
            content_updates: 0,
            should_quit: false,
        })
    }

    fn run(mut self) -> ViewResult<()> {
        self.setup_terminal()?;

        let result = self.main_loop();

        self.cleanup_terminal()?;

        result
    }

    fn setup_terminal(&self) -> ViewResult<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if self.config.ui.enable_mouse {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        } else {
            execute!(stdout, EnterAlternateScreen)?;
        }
        Ok(())
    }

    fn cleanup_terminal(&self) -> ViewResult<()> {
        disable_raw_mode()?;
        let mut stdout = io::stdout();
        if self.config.ui.enable_mouse {
            execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;
        } else {
            execute!(stdout, LeaveAlternateScreen)?;
        }
        Ok(())
    }

    fn main_loop(&mut self) -> ViewResult<()> {
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        info!("Entering demo main loop");

        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key)?,
                    Event::Mouse(mouse) => self.handle_mouse(mouse)?,
                    Event::Resize(width, height) => {
                        debug!("Terminal resized to {}x{}", width, height);
                    }
                    _ => {}
                }
            }

            if self.should_quit {
                info!("Demo quit requested");
                break;
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(8)])
            .split(frame.size());

        // Background with key bindings
        let background = Paragraph::new(
            "1: modal   2: confirm   3: prompt   c: update content   q: quit",
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("modalview demo")
                .border_style(self.theme.border_style()),
        )
        .style(self.theme.text_style());
        frame.render_widget(background, chunks[0]);

        // Notification log
        let entries = match self.log.lock() {
            Ok(entries) => {
                let start = entries.len().saturating_sub(6);
                entries[start..].join("\n")
            }
            Err(_) => String::new(),
        };
        let log_panel = Paragraph::new(entries)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("notifications")
                    .border_style(self.theme.border_style()),
            )
            .style(self.theme.muted_style());
        frame.render_widget(log_panel, chunks[1]);

        // Views render over the background; hidden views are no-ops
        let area = frame.size();
        self.modal.render(frame, area, &self.theme);
        self.confirm.render(frame, area, &self.theme);
        self.prompt.render(frame, area, &self.theme);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ViewResult<()> {
        if self.modal.is_visible() {
            if let KeyCode::Char('c') = key.code {
                self.content_updates += 1;
                self.modal
                    .set_content(format!("Content updated {} time(s)", self.content_updates));
                return Ok(());
            }
            self.modal.handle_key_event(key)?;
            return Ok(());
        }
        if self.confirm.is_visible() {
            self.confirm.handle_key_event(key)?;
            return Ok(());
        }
        if self.prompt.is_visible() {
            self.prompt.handle_key_event(key)?;
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('1') => self.modal.show()?,
            KeyCode::Char('2') => self.confirm.show()?,
            KeyCode::Char('3') => {
                let log = Arc::clone(&self.log);
                self.prompt.prompt(move |outcome| {
                    push_entry(&log, "prompt", &format!("resolved {:?}", outcome));
                })?;
            }
            _ => {}
        }

        Ok(())
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> ViewResult<()> {
        if self.modal.is_visible() {
            self.modal.handle_mouse_event(mouse)?;
        } else if self.confirm.is_visible() {
            self.confirm.handle_mouse_event(mouse)?;
        } else if self.prompt.is_visible() {
            self.prompt.handle_mouse_event(mouse)?;
        }
        Ok(())
    }
}

/// Subscribe a log entry for every notification kind of one view
fn observe<F>(mut subscribe: F, name: &'static str, log: &EventLog)
where
    F: FnMut(EventKind, EventCallback),
{
    for kind in ALL_KINDS {
        let log = Arc::clone(log);
        subscribe(
            kind,
            Box::new(move |event| push_entry(&log, name, &format!("{:?}", event))),
        );
    }
}

fn push_entry(log: &EventLog, name: &str, message: &str) {
    if let Ok(mut entries) = log.lock() {
        entries.push(format!("{}: {}", name, message));
    }
}
