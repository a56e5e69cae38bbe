//! Core state controller for a small desktop notepad.
//!
//! This crate owns everything behind the editor window that has real
//! invariants: the authoritative [`Document`] (text content, storage path,
//! dirty flag), the persistence gateway that moves documents to and from
//! disk, the process-internal [`Clipboard`], the dark/light
//! [`ThemeManager`], and the [`Application`] controller that ties them
//! together and notifies the presentation surface of state transitions.
//!
//! The presentation surface itself (window construction, menus, dialogs) is
//! a collaborator, not part of this crate: it reports user intents to the
//! [`Application`] and refreshes its view from the callbacks the controller
//! raises.

pub mod app;

pub use app::{
    AppError, AppSettings, Application, ApplicationCallbacks, Clipboard, Document, FileOpError,
    Result, Subscription, ThemeColors, ThemeManager, ThemePreference, ThemeStyle, ThemeVariant,
};
