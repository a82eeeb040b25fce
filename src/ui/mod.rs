//! UI components for modal dialogs
//!
//! Provides the three modal variants together with layout helpers and
//! the theme system.

pub mod confirm;
pub mod layout;
pub mod modal;
pub mod prompt;
pub mod theme;

pub use confirm::{ConfirmOptions, ConfirmView};
pub use modal::{Modal, ModalOptions, ModalResult, ModalView, SectionSource, Sections};
pub use prompt::{PromptCallback, PromptCanceled, PromptView};
pub use theme::Theme;
