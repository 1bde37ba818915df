//! Presentation defaults for the client application shell.
//!
//! The shell document carries a `data-theme` attribute on its root element.
//! [`ColorSchemeInitializer`] applies the configured default exactly once at
//! application start. The once-guard lives in the initializer itself, so a
//! second invocation never touches the document, whatever its attributes
//! currently hold.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Deserialize;

/// Root attribute holding the active color scheme.
pub const COLOR_SCHEME_ATTRIBUTE: &str = "data-theme";

/// Supported color schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Light palette.
    #[default]
    Light,
    /// Dark palette.
    Dark,
}

impl ColorScheme {
    /// Attribute value written to the document root.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a color scheme label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color scheme `{0}`; expected `light` or `dark`")]
pub struct UnknownColorScheme(pub String);

impl FromStr for ColorScheme {
    type Err = UnknownColorScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(UnknownColorScheme(s.to_owned())),
        }
    }
}

/// Mutable attribute set on a document root element.
pub trait DocumentRoot {
    /// Current value of `name`, if set.
    fn attribute(&self, name: &str) -> Option<&str>;
    /// Set `name` to `value`, replacing any previous value.
    fn set_attribute(&mut self, name: &str, value: &str);
}

/// In-memory root attribute set used when assembling the server-rendered
/// shell. Attributes render in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootAttributes {
    values: BTreeMap<String, String>,
}

impl RootAttributes {
    /// Empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of attributes set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl DocumentRoot for RootAttributes {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_owned(), value.to_owned());
    }
}

/// One-shot initialiser for the default color scheme.
///
/// # Examples
/// ```
/// use coursehub::domain::{
///     ColorScheme, ColorSchemeInitializer, DocumentRoot, RootAttributes,
///     COLOR_SCHEME_ATTRIBUTE,
/// };
///
/// let initializer = ColorSchemeInitializer::new(ColorScheme::Dark);
/// let mut root = RootAttributes::new();
/// assert!(initializer.initialize(&mut root));
/// assert!(!initializer.initialize(&mut root));
/// assert_eq!(root.attribute(COLOR_SCHEME_ATTRIBUTE), Some("dark"));
/// ```
#[derive(Debug)]
pub struct ColorSchemeInitializer {
    default_scheme: ColorScheme,
    initialized: AtomicBool,
}

impl ColorSchemeInitializer {
    /// Initializer that has not yet touched any root.
    pub const fn new(default_scheme: ColorScheme) -> Self {
        Self {
            default_scheme,
            initialized: AtomicBool::new(false),
        }
    }

    /// Scheme applied on initialization.
    pub const fn default_scheme(&self) -> ColorScheme {
        self.default_scheme
    }

    /// Whether a root has already been initialized.
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Apply the default scheme to `root` on the first call only.
    ///
    /// Returns `true` when the attribute was written.
    pub fn initialize(&self, root: &mut dyn DocumentRoot) -> bool {
        if self
            .initialized
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }
        root.set_attribute(COLOR_SCHEME_ATTRIBUTE, self.default_scheme.as_str());
        true
    }
}
