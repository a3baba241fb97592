use strum_macros::Display;
use strum_macros::EnumString;
use strum_macros::EnumVariantNames;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumVariantNames)]
#[strum(serialize_all = "kebab-case")]
pub enum ThemeMode {
    #[default]
    Auto,
    Dark,
    Light,
}

/// Parses a `COLORFGBG` hint (`"fg;bg"` or `"fg;default;bg"`). Background
/// indexes 7 and above are the light half of the ANSI palette.
pub fn dark_from_colorfgbg(colorfgbg: Option<&str>) -> Option<bool> {
    let bg_index = colorfgbg?
        .split(';')
        .next_back()
        .and_then(|value| value.trim().parse::<u8>().ok())?;

    return Some(bg_index < 7 || bg_index == 8);
}

/// Resolves whether the terminal background is dark. Unknown terminals are
/// treated as dark.
pub fn resolve_dark_mode(mode: ThemeMode, colorfgbg: Option<&str>) -> bool {
    match mode {
        ThemeMode::Dark => true,
        ThemeMode::Light => false,
        ThemeMode::Auto => dark_from_colorfgbg(colorfgbg).unwrap_or(true),
    }
}

pub fn detect_dark_mode(mode: ThemeMode) -> bool {
    let colorfgbg = std::env::var("COLORFGBG").ok();
    let is_dark = resolve_dark_mode(mode, colorfgbg.as_deref());
    tracing::debug!(mode = %mode, colorfgbg = ?colorfgbg, is_dark, "resolved terminal tone");
    return is_dark;
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_colorfgbg_light_and_dark() {
        assert_eq!(dark_from_colorfgbg(Some("0;15")), Some(false));
        assert_eq!(dark_from_colorfgbg(Some("15;0")), Some(true));
        assert_eq!(dark_from_colorfgbg(Some("15;default;0")), Some(true));
        assert_eq!(dark_from_colorfgbg(Some("0;8")), Some(true));
        assert_eq!(dark_from_colorfgbg(Some("garbage")), None);
        assert_eq!(dark_from_colorfgbg(None), None);
    }

    #[test]
    fn test_explicit_mode_wins() {
        assert!(resolve_dark_mode(ThemeMode::Dark, Some("0;15")));
        assert!(!resolve_dark_mode(ThemeMode::Light, Some("15;0")));
        assert!(!resolve_dark_mode(ThemeMode::Auto, Some("0;15")));
        assert!(resolve_dark_mode(ThemeMode::Auto, None));
    }

    #[test]
    fn test_mode_parses_from_config_values() {
        assert_eq!(ThemeMode::from_str("light").unwrap(), ThemeMode::Light);
        assert_eq!(ThemeMode::Auto.to_string(), "auto");
        assert!(ThemeMode::from_str("sepia").is_err());
    }
}
