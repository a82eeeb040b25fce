//! modalview - Modal, confirm and prompt dialog views for ratatui
//!
//! This library provides a small family of modal dialog widgets for
//! terminal applications built with ratatui and crossterm:
//!
//! - [`ModalView`]: show/hide lifecycle, header/content/footer sections
//!   with change notification, per-instance event callbacks
//! - [`ConfirmView`]: labelled footer buttons with a button-press
//!   notification
//! - [`PromptView`]: resolves a stored callback with confirmation or
//!   cancellation depending on the pressed button
//!
//! Each view owns its event subscriptions; overlay clicks and Esc hide
//! only the instance that received them.

pub mod config;
pub mod error;
pub mod event;
pub mod ui;

pub use config::Config;
pub use error::{ViewError, ViewResult};
pub use event::{EventCallback, EventKind, ModalEvent};
pub use ui::{
    ConfirmOptions, ConfirmView, Modal, ModalOptions, ModalResult, ModalView, PromptCanceled,
    PromptView, SectionSource, Theme,
};

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system with structured logging
///
/// Log levels are configurable via the RUST_LOG environment variable.
pub fn initialize_logging() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "modalview=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    Ok(())
}
