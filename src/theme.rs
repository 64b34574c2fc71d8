use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Theme shipped for dark appearance.
pub const DEFAULT_DARK_THEME: &str = "material-theme-darker";

/// Theme shipped for light appearance.
pub const DEFAULT_LIGHT_THEME: &str = "material-theme-lighter";

/// Appearance mode selecting which of the two registered themes is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    Dark,
    Light,
}

impl AppearanceMode {
    pub fn as_str(self) -> &'static str {
        match self {
            AppearanceMode::Dark => "dark",
            AppearanceMode::Light => "light",
        }
    }
}

impl fmt::Display for AppearanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for appearance-mode strings outside the fixed `dark`/`light` set.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown appearance mode: {0:?}")]
pub struct UnknownMode(pub String);

impl FromStr for AppearanceMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(AppearanceMode::Dark),
            "light" => Ok(AppearanceMode::Light),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

/// Theme identifiers for both appearance modes.
///
/// Both modes are present by construction. The identifiers name pre-packaged
/// themes known to the highlighting engine; whether a name actually resolves
/// is validated by the engine, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSelection {
    pub dark: String,
    pub light: String,
}

impl ThemeSelection {
    /// Theme identifier for the given appearance mode.
    pub fn for_mode(&self, mode: AppearanceMode) -> &str {
        match mode {
            AppearanceMode::Dark => &self.dark,
            AppearanceMode::Light => &self.light,
        }
    }
}

impl Default for ThemeSelection {
    fn default() -> Self {
        ThemeSelection {
            dark: DEFAULT_DARK_THEME.to_string(),
            light: DEFAULT_LIGHT_THEME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_uses_material_pair() {
        let themes = ThemeSelection::default();
        assert_eq!(themes.dark, "material-theme-darker");
        assert_eq!(themes.light, "material-theme-lighter");
    }

    #[test]
    fn for_mode_looks_up_both_modes() {
        let themes = ThemeSelection::default();
        assert_eq!(themes.for_mode(AppearanceMode::Dark), DEFAULT_DARK_THEME);
        assert_eq!(themes.for_mode(AppearanceMode::Light), DEFAULT_LIGHT_THEME);
    }

    #[test]
    fn mode_round_trips_through_str() {
        for mode in [AppearanceMode::Dark, AppearanceMode::Light] {
            assert_eq!(mode.as_str().parse::<AppearanceMode>(), Ok(mode));
        }
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = "solarized".parse::<AppearanceMode>().unwrap_err();
        assert_eq!(err, UnknownMode("solarized".to_string()));
    }
}
