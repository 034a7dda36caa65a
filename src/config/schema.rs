use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/quicktune/config.toml` or
/// `~/.config/quicktune/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `QUICKTUNE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub generation: GenerationSettings,
    pub storage: StorageSettings,
    pub controls: ControlsSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Simulated generation latency (milliseconds).
    pub delay_ms: u64,
    /// Directory the catalog's relative audio paths resolve against.
    pub assets_dir: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            delay_ms: 2000,
            assets_dir: "assets".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Override for the persisted store file. Defaults to
    /// `quicktune/store.json` under the platform data directory.
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Number of seconds to jump when seeking with `H` / `L`.
    pub seek_seconds: u64,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self { seek_seconds: 5 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Color scheme the session starts with.
    pub theme: ThemeSetting,

    /// The text rendered inside the top header box.
    pub header_text: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: ThemeSetting::Dark,
            header_text: " ~ pick a mood, get a track ~ ".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeSetting {
    Dark,
    Light,
}
