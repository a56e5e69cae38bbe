//! The application controller: owns the live document, theme manager and
//! clipboard, mediates persistence, and fans state transitions out to the
//! presentation surface.

use tracing::warn;

use super::clipboard::Clipboard;
use super::document::Document;
use super::file_ops;
use super::observer::{CallbackSlot, Subscription};
use super::settings::AppSettings;
use super::theme::{ThemeManager, ThemeVariant};

/// The five hooks the presentation surface registers on the controller.
///
/// Each hook carries only "something changed" (the error hook adds the
/// message text); the surface re-queries the controller for current state.
/// Unset hooks are simply skipped.
#[derive(Default)]
pub struct ApplicationCallbacks {
    pub on_document_modified: Option<Box<dyn FnMut()>>,
    pub on_document_saved: Option<Box<dyn FnMut()>>,
    pub on_new_document: Option<Box<dyn FnMut()>>,
    pub on_document_loaded: Option<Box<dyn FnMut()>>,
    pub on_error: Option<Box<dyn FnMut(&str)>>,
}

/// Orchestrates the document lifecycle (new/open/save/save-as), clipboard
/// recording and theming for one editor session.
///
/// All operations run synchronously on the calling thread. Every I/O
/// failure is recoverable: it is reported through the `on_error` hook and
/// leaves the controller in its prior state; nothing here terminates the
/// process.
pub struct Application {
    document: Document,
    theme: ThemeManager,
    clipboard: Clipboard,
    callbacks: CallbackSlot<ApplicationCallbacks>,
}

impl Application {
    pub fn new() -> Self {
        Self::with_theme(ThemeVariant::Dark)
    }

    pub fn with_theme(default_theme: ThemeVariant) -> Self {
        Self {
            document: Document::new(),
            theme: ThemeManager::new(default_theme),
            clipboard: Clipboard::new(),
            callbacks: CallbackSlot::new(),
        }
    }

    /// Build a controller configured from persisted settings.
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::with_theme(settings.theme.variant())
    }

    /// Register the presentation surface's hooks. At most one registrant is
    /// supported: registering again replaces the previous set, and dropping
    /// the returned subscription deregisters it.
    pub fn register_callbacks(&mut self, callbacks: ApplicationCallbacks) -> Subscription {
        self.callbacks.register(callbacks)
    }

    /// Replace the current document with an empty untitled one.
    ///
    /// Does not consult the persistence gateway and does not check for
    /// unsaved changes; confirming with the user first is the presentation
    /// surface's policy.
    pub fn new_document(&mut self) {
        self.document = Document::new();
        self.callbacks.with(|cbs| {
            if let Some(cb) = cbs.on_new_document.as_mut() {
                cb();
            }
        });
    }

    /// Load the file at `path` into the current document.
    ///
    /// On failure the previous document is left byte-for-byte unchanged and
    /// the mapped message goes out through `on_error`.
    pub fn open_document(&mut self, path: &str) {
        match file_ops::read(path, &mut self.document) {
            Ok(()) => {
                self.callbacks.with(|cbs| {
                    if let Some(cb) = cbs.on_document_loaded.as_mut() {
                        cb();
                    }
                });
            }
            Err(error) => {
                warn!("Failed to open {}: {}", path, error);
                self.notify_error(&error.to_string());
            }
        }
    }

    /// Save the document to its associated path.
    ///
    /// Returns `false` immediately when the document has no path yet: no
    /// write is attempted and no file is created, and the caller should
    /// prompt for a location and use
    /// [`save_document_as`](Self::save_document_as).
    /// A failed write reports through `on_error` and leaves the modified
    /// flag untouched.
    pub fn save_document(&mut self) -> bool {
        let path = match self.document.file_path() {
            Some(path) => path.to_owned(),
            None => return false,
        };

        match file_ops::write(&path, &self.document) {
            Ok(()) => {
                self.document.mark_saved();
                self.callbacks.with(|cbs| {
                    if let Some(cb) = cbs.on_document_saved.as_mut() {
                        cb();
                    }
                });
            }
            Err(error) => {
                warn!("Failed to save {}: {}", path, error);
                self.notify_error(&error.to_string());
            }
        }
        true
    }

    /// Save the document to `path`, regardless of any previous association.
    ///
    /// On success the document's path is updated and the modified flag
    /// cleared; on failure the previous path and flag are preserved.
    pub fn save_document_as(&mut self, path: &str) -> bool {
        match file_ops::write(path, &self.document) {
            Ok(()) => {
                self.document.set_file_path(path);
                self.document.mark_saved();
                self.callbacks.with(|cbs| {
                    if let Some(cb) = cbs.on_document_saved.as_mut() {
                        cb();
                    }
                });
                true
            }
            Err(error) => {
                warn!("Failed to save {}: {}", path, error);
                self.notify_error(&error.to_string());
                false
            }
        }
    }

    /// Record a live edit reported by the presentation surface: marks the
    /// document dirty and raises `on_document_modified`.
    pub fn document_edited(&mut self) {
        self.document.mark_modified();
        self.callbacks.with(|cbs| {
            if let Some(cb) = cbs.on_document_modified.as_mut() {
                cb();
            }
        });
    }

    /// Record cut text. Removing the selection from the visible buffer is
    /// the presentation surface's job, done after this call returns.
    pub fn cut(&mut self, text: impl Into<String>) {
        self.clipboard.copy(text);
    }

    /// Record copied text. Does not touch the document.
    pub fn copy(&mut self, text: impl Into<String>) {
        self.clipboard.copy(text);
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.document.is_modified()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn file_path(&self) -> Option<&str> {
        self.document.file_path()
    }

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme
    }

    pub fn theme_manager_mut(&mut self) -> &mut ThemeManager {
        &mut self.theme
    }

    /// Switch to the other theme variant.
    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn clipboard_mut(&mut self) -> &mut Clipboard {
        &mut self.clipboard
    }

    fn notify_error(&self, message: &str) {
        self.callbacks.with(|cbs| {
            if let Some(cb) = cbs.on_error.as_mut() {
                cb(message);
            }
        });
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::settings::ThemePreference;
    use std::cell::RefCell;
    use std::fs;
    use std::rc::Rc;
    use tempfile::tempdir;

    type EventLog = Rc<RefCell<Vec<String>>>;

    /// Hooks that append every notification to a shared log.
    fn recording_callbacks(log: &EventLog) -> ApplicationCallbacks {
        fn push(log: &EventLog, name: &'static str) -> Option<Box<dyn FnMut()>> {
            let log = log.clone();
            Some(Box::new(move || log.borrow_mut().push(name.to_string())))
        }

        let errors = log.clone();
        ApplicationCallbacks {
            on_document_modified: push(log, "modified"),
            on_document_saved: push(log, "saved"),
            on_new_document: push(log, "new"),
            on_document_loaded: push(log, "loaded"),
            on_error: Some(Box::new(move |message| {
                errors.borrow_mut().push(format!("error: {}", message));
            })),
        }
    }

    #[test]
    fn test_new_document_resets_state_and_notifies() {
        let mut app = Application::new();
        let log: EventLog = Rc::new(RefCell::new(Vec::new()));
        let _sub = app.register_callbacks(recording_callbacks(&log));

        app.document_mut().set_content("unsaved work");
        app.document_mut().set_file_path("/tmp/old.txt");
        app.new_document();

        assert_eq!(app.document().content(), "");
        assert_eq!(app.file_path(), None);
        assert!(!app.has_unsaved_changes());
        assert_eq!(*log.borrow(), vec!["new"]);
    }

    #[test]
    fn test_open_document_loads_and_notifies() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("note.txt").to_string_lossy().to_string();
        fs::write(&path, "from disk").unwrap();

        let mut app = Application::new();
        let log: EventLog = Rc::new(RefCell::new(Vec::new()));
        let _sub = app.register_callbacks(recording_callbacks(&log));

        app.open_document(&path);

        assert_eq!(app.document().content(), "from disk");
        assert_eq!(app.file_path(), Some(path.as_str()));
        assert!(!app.has_unsaved_changes());
        assert_eq!(*log.borrow(), vec!["loaded"]);
    }

    #[test]
    fn test_open_missing_file_reports_error_and_preserves_document() {
        let mut app = Application::new();
        let log: EventLog = Rc::new(RefCell::new(Vec::new()));
        let _sub = app.register_callbacks(recording_callbacks(&log));

        app.document_mut().set_content("hello");
        assert!(app.has_unsaved_changes());

        app.open_document("missing.txt");

        assert_eq!(app.document().content(), "hello");
        assert!(app.has_unsaved_changes());
        assert_eq!(*log.borrow(), vec!["error: Failed to open file"]);
    }

    #[test]
    fn test_save_without_path_returns_false_without_side_effects() {
        let mut app = Application::new();
        let log: EventLog = Rc::new(RefCell::new(Vec::new()));
        let _sub = app.register_callbacks(recording_callbacks(&log));

        app.document_mut().set_content("needs a home");
        assert!(!app.save_document());

        // No gateway call happened: nothing saved, nothing reported.
        assert!(app.has_unsaved_changes());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_save_document_as_sets_path_and_clears_modified() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("x.txt").to_string_lossy().to_string();

        let mut app = Application::new();
        let log: EventLog = Rc::new(RefCell::new(Vec::new()));
        let _sub = app.register_callbacks(recording_callbacks(&log));

        app.document_mut().set_content("contents");
        assert!(app.save_document_as(&path));

        assert_eq!(app.file_path(), Some(path.as_str()));
        assert!(!app.has_unsaved_changes());
        assert_eq!(*log.borrow(), vec!["saved"]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "contents");
    }

    #[test]
    fn test_save_document_reuses_existing_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("note.txt").to_string_lossy().to_string();

        let mut app = Application::new();
        let log: EventLog = Rc::new(RefCell::new(Vec::new()));
        let _sub = app.register_callbacks(recording_callbacks(&log));

        app.document_mut().set_content("v1");
        assert!(app.save_document_as(&path));

        app.document_mut().set_content("v2");
        assert!(app.save_document());

        assert!(!app.has_unsaved_changes());
        assert_eq!(fs::read_to_string(&path).unwrap(), "v2");
        assert_eq!(*log.borrow(), vec!["saved", "saved"]);
    }

    #[test]
    fn test_failed_save_keeps_modified_and_reports_error() {
        let dir = tempdir().unwrap();
        // A directory is never a writable file target.
        let bad_path = dir.path().to_string_lossy().to_string();

        let mut app = Application::new();
        let log: EventLog = Rc::new(RefCell::new(Vec::new()));
        let _sub = app.register_callbacks(recording_callbacks(&log));

        app.document_mut().set_content("text");
        assert!(!app.save_document_as(&bad_path));

        assert!(app.has_unsaved_changes());
        assert_eq!(app.file_path(), None);
        assert_eq!(*log.borrow(), vec!["error: Failed to open file"]);
    }

    #[test]
    fn test_failed_save_preserves_previous_path() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.txt").to_string_lossy().to_string();
        let bad = dir.path().to_string_lossy().to_string();

        let mut app = Application::new();
        app.document_mut().set_content("text");
        assert!(app.save_document_as(&good));

        app.document_mut().set_content("more text");
        assert!(!app.save_document_as(&bad));

        assert_eq!(app.file_path(), Some(good.as_str()));
        assert!(app.has_unsaved_changes());
    }

    #[test]
    fn test_failed_save_to_existing_path_reports_error() {
        let dir = tempdir().unwrap();
        let bad_path = dir.path().to_string_lossy().to_string();

        let mut app = Application::new();
        let log: EventLog = Rc::new(RefCell::new(Vec::new()));
        let _sub = app.register_callbacks(recording_callbacks(&log));

        app.document_mut().set_content("text");
        app.document_mut().set_file_path(bad_path.as_str());

        // Path exists, so save_document owns the attempt and reports the
        // failure itself; the modified flag must survive.
        assert!(app.save_document());
        assert!(app.has_unsaved_changes());
        assert_eq!(*log.borrow(), vec!["error: Failed to open file"]);
    }

    #[test]
    fn test_document_edited_marks_and_notifies() {
        let mut app = Application::new();
        let log: EventLog = Rc::new(RefCell::new(Vec::new()));
        let _sub = app.register_callbacks(recording_callbacks(&log));

        app.document_edited();
        assert!(app.has_unsaved_changes());
        assert_eq!(*log.borrow(), vec!["modified"]);
    }

    #[test]
    fn test_cut_and_copy_record_without_touching_document() {
        let mut app = Application::new();
        app.document_mut().set_content("document text");
        app.document_mut().mark_saved();

        app.copy("selection");
        assert_eq!(app.clipboard().paste(), Some("selection".to_string()));

        app.cut("other selection");
        assert_eq!(app.clipboard().paste(), Some("other selection".to_string()));

        // Deleting the cut selection is the presentation surface's job.
        assert_eq!(app.document().content(), "document text");
        assert!(!app.has_unsaved_changes());
    }

    #[test]
    fn test_reregistration_replaces_previous_hooks() {
        let mut app = Application::new();
        let first: EventLog = Rc::new(RefCell::new(Vec::new()));
        let second: EventLog = Rc::new(RefCell::new(Vec::new()));

        let _a = app.register_callbacks(recording_callbacks(&first));
        let _b = app.register_callbacks(recording_callbacks(&second));

        app.new_document();
        assert!(first.borrow().is_empty());
        assert_eq!(*second.borrow(), vec!["new"]);
    }

    #[test]
    fn test_dropped_registration_silences_hooks() {
        let mut app = Application::new();
        let log: EventLog = Rc::new(RefCell::new(Vec::new()));

        let sub = app.register_callbacks(recording_callbacks(&log));
        drop(sub);

        app.new_document();
        app.open_document("missing.txt");
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_unset_hooks_are_skipped() {
        let mut app = Application::new();
        let _sub = app.register_callbacks(ApplicationCallbacks::default());
        app.new_document();
        app.open_document("missing.txt");
    }

    #[test]
    fn test_toggle_theme_notifies_theme_observer() {
        let mut app = Application::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let _sub = app
            .theme_manager_mut()
            .register_callback(move |v| log.borrow_mut().push(v));

        app.toggle_theme();
        assert_eq!(app.theme_manager().current(), ThemeVariant::Light);
        assert_eq!(*seen.borrow(), vec![ThemeVariant::Light]);
    }

    #[test]
    fn test_from_settings_picks_initial_theme() {
        let settings = AppSettings {
            theme: ThemePreference::Light,
            ..Default::default()
        };
        let app = Application::from_settings(&settings);
        assert_eq!(app.theme_manager().current(), ThemeVariant::Light);
    }
}
