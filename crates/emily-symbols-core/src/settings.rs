// Emily Symbols Settings Module
// User defaults for the attachment method and dictionary generation

use std::path::{Path, PathBuf};

use crate::method::AttachmentMethod;

/// Settings for emily-symbols
///
/// Loaded from a TOML file (default: ~/.config/emily-symbols/settings.toml).
/// Command line flags override whatever is set here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Meaning of the A/O keys
    attachment_method: AttachmentMethod,

    /// Where generated dictionaries go
    output_directory: PathBuf,

    /// Add number-embedded outlines to generated dictionaries
    embed_numbers: bool,

    /// Custom symbol table replacing the built-in one
    symbols_path: Option<PathBuf>,
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid setting value: {0}")]
    InvalidValue(String),
}

/// TOML representation for deserializing settings
#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SettingsToml {
    #[serde(default)]
    general: Option<GeneralSettings>,

    #[serde(default)]
    generate: Option<GenerateSettings>,

    #[serde(default)]
    symbols: Option<SymbolsSettings>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct GeneralSettings {
    #[serde(default)]
    attachment_method: Option<AttachmentMethod>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct GenerateSettings {
    #[serde(default)]
    directory: Option<PathBuf>,

    #[serde(default)]
    include_embedded_numbers: Option<toml::Value>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SymbolsSettings {
    #[serde(default)]
    path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Create settings with every value at its default
    pub fn new() -> Self {
        Self {
            attachment_method: AttachmentMethod::default(),
            output_directory: PathBuf::from("."),
            embed_numbers: false,
            symbols_path: None,
        }
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(&path)?;
        log::debug!("Reading settings from {}", path.as_ref().display());
        Self::from_toml(&content)
    }

    /// Load settings from TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let toml_settings: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::new();

        if let Some(method) = toml_settings.general.and_then(|g| g.attachment_method) {
            settings.attachment_method = method;
        }

        if let Some(generate) = toml_settings.generate {
            if let Some(directory) = generate.directory {
                settings.output_directory = expand_home(directory);
            }
            if let Some(value) = generate.include_embedded_numbers {
                settings.embed_numbers = parse_bool_value(&value)?;
            }
        }

        if let Some(symbols) = toml_settings.symbols {
            settings.symbols_path = symbols.path.map(expand_home);
        }

        Ok(settings)
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("emily-symbols").join("settings.toml"))
    }

    /// Load from default location (~/.config/emily-symbols/settings.toml)
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
            log::debug!("No settings at {}, using defaults", path.display());
        }
        Ok(Self::new())
    }

    pub fn attachment_method(&self) -> AttachmentMethod {
        self.attachment_method
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    pub fn embed_numbers(&self) -> bool {
        self.embed_numbers
    }

    pub fn symbols_path(&self) -> Option<&Path> {
        self.symbols_path.as_deref()
    }
}

/// Replace a leading `~` with the home directory
fn expand_home(path: PathBuf) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path,
    }
}

/// Parse a TOML value as a boolean
fn parse_bool_value(value: &toml::Value) -> Result<bool, SettingsError> {
    match value {
        toml::Value::Boolean(b) => Ok(*b),
        toml::Value::Integer(1) => Ok(true),
        toml::Value::Integer(0) => Ok(false),
        toml::Value::String(s) => match s.to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(SettingsError::InvalidValue(format!(
                "Cannot convert '{}' to boolean",
                s
            ))),
        },
        _ => Err(SettingsError::InvalidValue(format!(
            "Cannot convert {:?} to boolean",
            value
        ))),
    }
}

/// Create default settings content for a new installation
pub fn default_settings_content() -> &'static str {
    r#"# Emily Symbols Settings
# Place this file at: ~/.config/emily-symbols/settings.toml

[general]
# What the A/O keys mark: "space" (where spaces go) or "attachment"
attachment_method = "space"

[generate]
# Directory for generated dictionaries
directory = "."
# Add 1KW4-style outlines next to #SKWH ones
include_embedded_numbers = false

[symbols]
# Optional custom symbol table (TOML); a leading ~ expands to the home directory
# path = "~/.config/emily-symbols/symbols.toml"
"#
}
