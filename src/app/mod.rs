//! Application layer - the state controller behind the editor window.
//!
//! # Structure
//!
//! - `document` - the editable text unit (content, path, dirty flag)
//! - `file_ops` - persistence gateway between documents and the file system
//! - `theme` - the dark/light variant set and the change-notifying manager
//! - `clipboard` - process-internal last-copied-text buffer
//! - `state` - the `Application` controller coordinating all of the above
//! - `observer` - single-slot callback registration with scoped handles
//! - `settings`, `error`, `text_ops` - configuration, error types, path helpers

pub mod clipboard;
pub mod document;
pub mod error;
pub mod file_ops;
pub mod observer;
pub mod settings;
pub mod state;
pub mod text_ops;
pub mod theme;

// Re-exports for convenient external access
pub use clipboard::Clipboard;
pub use document::Document;
pub use error::{AppError, Result};
pub use file_ops::FileOpError;
pub use observer::Subscription;
pub use settings::{AppSettings, ThemePreference};
pub use state::{Application, ApplicationCallbacks};
pub use theme::{ThemeColors, ThemeManager, ThemeStyle, ThemeVariant};
