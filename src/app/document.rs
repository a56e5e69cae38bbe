use super::text_ops::extract_filename;

/// The in-memory unit of editable text: the content, an optional storage
/// path, and a flag tracking divergence from the last durable state.
///
/// A document performs no I/O and raises no callbacks; it only enforces the
/// dirty-flag invariant. The flag is cleared exactly by [`mark_saved`],
/// which the load and save paths call after a successful transfer.
///
/// [`mark_saved`]: Document::mark_saved
pub struct Document {
    content: String,
    file_path: Option<String>,
    modified: bool,
}

impl Document {
    /// A fresh untitled document: empty, path-less, unmodified.
    pub fn new() -> Self {
        Self {
            content: String::new(),
            file_path: None,
            modified: false,
        }
    }

    /// Replace the entire content and mark the document dirty.
    ///
    /// Load and save-style callers reset the flag afterwards with
    /// [`mark_saved`](Document::mark_saved); everything else is a user edit.
    pub fn set_content(&mut self, text: impl Into<String>) {
        self.content = text.into();
        self.modified = true;
    }

    /// Associate the document with a storage path. The path is only ever
    /// set by load and save-as; nothing clears it implicitly.
    pub fn set_file_path(&mut self, path: impl Into<String>) {
        self.file_path = Some(path.into());
    }

    pub fn mark_modified(&mut self) {
        self.modified = true;
    }

    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn file_path(&self) -> Option<&str> {
        self.file_path.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Name to show in a title bar: the filename component of the path,
    /// or "Untitled" for a path-less document.
    pub fn display_name(&self) -> String {
        match self.file_path {
            Some(ref path) => extract_filename(path),
            None => "Untitled".to_string(),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
