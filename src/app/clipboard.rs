use super::observer::{CallbackSlot, Subscription};

/// Process-internal clipboard: holds the last copied text.
///
/// System-clipboard integration belongs to the presentation surface; this
/// buffer is what `cut`/`copy` record and what paste requests read back.
#[derive(Default)]
pub struct Clipboard {
    buffer: Option<String>,
    on_copy: CallbackSlot<Box<dyn FnMut()>>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held text and notify the copy observer.
    pub fn copy(&mut self, text: impl Into<String>) {
        self.buffer = Some(text.into());
        self.on_copy.with(|cb| cb());
    }

    /// A copy of the held text, or `None` if nothing has been copied.
    pub fn paste(&self) -> Option<String> {
        self.buffer.clone()
    }

    /// True only when non-empty text is held.
    pub fn has_text(&self) -> bool {
        self.buffer.as_deref().is_some_and(|text| !text.is_empty())
    }

    pub fn clear(&mut self) {
        self.buffer = None;
    }

    /// Register the copy observer. Last registration wins; dropping the
    /// returned subscription deregisters it.
    pub fn register_callback(&mut self, callback: impl FnMut() + 'static) -> Subscription {
        self.on_copy.register(Box::new(callback))
    }
}
