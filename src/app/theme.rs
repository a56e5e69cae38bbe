use super::observer::{CallbackSlot, Subscription};

/// One member of the closed two-variant theme set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// The other member of the set. Total and symmetric: toggling twice
    /// returns the starting variant.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// The immutable style record for this variant.
    ///
    /// New variants are added by extending this mapping (and the enum);
    /// nothing else in the crate branches on the variant.
    pub fn style(self) -> &'static ThemeStyle {
        match self {
            Self::Dark => &DARK_STYLE,
            Self::Light => &LIGHT_STYLE,
        }
    }
}

/// The five named colors of a theme, as CSS hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: &'static str,
    pub foreground: &'static str,
    pub selection_background: &'static str,
    pub selection_foreground: &'static str,
    pub cursor: &'static str,
}

/// Immutable style payload for one variant: palette plus the stylesheet
/// the presentation surface feeds to its widget toolkit.
pub struct ThemeStyle {
    pub colors: ThemeColors,
    pub stylesheet: &'static str,
}

static DARK_STYLE: ThemeStyle = ThemeStyle {
    colors: ThemeColors {
        background: "#1e1e1e",
        foreground: "#d4d4d4",
        selection_background: "#264f78",
        selection_foreground: "#ffffff",
        cursor: "#aeafad",
    },
    stylesheet: "\
textview {
  background-color: #1e1e1e;
  color: #d4d4d4;
  font-family: monospace;
  font-size: 11pt;
}
textview text {
  background-color: #1e1e1e;
  color: #d4d4d4;
}
textview selection {
  background-color: #264f78;
  color: #ffffff;
}
textview border {
  background-color: #252526;
  color: #858585;
}
textview:focus {
  background-color: #1e1e1e;
  caret-color: #aeafad;
}
textview text selection:focus {
  background-color: #2b2b2b;
}",
};

static LIGHT_STYLE: ThemeStyle = ThemeStyle {
    colors: ThemeColors {
        background: "#ffffff",
        foreground: "#000000",
        selection_background: "#add6ff",
        selection_foreground: "#000000",
        cursor: "#000000",
    },
    stylesheet: "\
textview {
  background-color: #ffffff;
  color: #000000;
  font-family: monospace;
  font-size: 11pt;
}
textview text {
  background-color: #ffffff;
  color: #000000;
}
textview selection {
  background-color: #add6ff;
  color: #000000;
}
textview border {
  background-color: #f0f0f0;
  color: #237893;
}
textview:focus {
  background-color: #ffffff;
  caret-color: #000000;
}
textview text selection:focus {
  background-color: #f2f2f2;
}",
};

/// Holds the active theme selection and notifies one registered observer
/// when it changes.
///
/// Reads never fail and never notify; `set` notifies only on an actual
/// change, so setting the current variant again is a no-op.
pub struct ThemeManager {
    current: ThemeVariant,
    on_change: CallbackSlot<Box<dyn FnMut(ThemeVariant)>>,
}

impl ThemeManager {
    pub fn new(default_variant: ThemeVariant) -> Self {
        Self {
            current: default_variant,
            on_change: CallbackSlot::new(),
        }
    }

    pub fn current(&self) -> ThemeVariant {
        self.current
    }

    pub fn colors(&self) -> &'static ThemeColors {
        &self.current.style().colors
    }

    pub fn css(&self) -> &'static str {
        self.current.style().stylesheet
    }

    /// Switch to `variant`, notifying the observer if it differs from the
    /// current selection.
    pub fn set(&mut self, variant: ThemeVariant) {
        if self.current != variant {
            self.current = variant;
            self.on_change.with(|cb| cb(variant));
        }
    }

    /// Switch to the other variant.
    pub fn toggle(&mut self) {
        self.set(self.current.toggled());
    }

    /// Register the change observer. Last registration wins; dropping the
    /// returned subscription deregisters it.
    pub fn register_callback(
        &mut self,
        callback: impl FnMut(ThemeVariant) + 'static,
    ) -> Subscription {
        self.on_change.register(Box::new(callback))
    }
}
