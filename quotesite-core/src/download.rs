//! Image download settings recorded when a visitor downloads a quote image

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a single recorded setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownloadSetting {
    ColorScheme,
    Border,
    ImagePreset,
    Width,
    Height,
}

impl DownloadSetting {
    /// Column value stored in `download_settings.setting`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ColorScheme => "color_scheme",
            Self::Border => "border",
            Self::ImagePreset => "image_preset",
            Self::Width => "width",
            Self::Height => "height",
        }
    }
}

impl fmt::Display for DownloadSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings chosen for one download. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadSettings {
    #[serde(default)]
    pub color_scheme: Option<String>,
    #[serde(default)]
    pub border: Option<String>,
    #[serde(default)]
    pub image_preset: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl DownloadSettings {
    /// Settings that carry a value, in a fixed order.
    ///
    /// Empty strings and zero dimensions are treated as not supplied.
    pub fn entries(&self) -> Vec<(DownloadSetting, String)> {
        let text = |v: &Option<String>| v.as_deref().filter(|s| !s.is_empty()).map(str::to_owned);
        let dim = |v: Option<u32>| v.filter(|n| *n > 0).map(|n| n.to_string());

        [
            (DownloadSetting::ColorScheme, text(&self.color_scheme)),
            (DownloadSetting::Border, text(&self.border)),
            (DownloadSetting::ImagePreset, text(&self.image_preset)),
            (DownloadSetting::Width, dim(self.width)),
            (DownloadSetting::Height, dim(self.height)),
        ]
        .into_iter()
        .filter_map(|(setting, value)| value.map(|v| (setting, v)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_settings_have_no_entries() {
        let settings = DownloadSettings::default();
        assert!(settings.entries().is_empty());
    }

    #[test]
    fn blank_values_are_skipped() {
        let settings = DownloadSettings {
            color_scheme: Some(String::new()),
            width: Some(0),
            ..Default::default()
        };
        assert!(settings.entries().is_empty());
    }

    #[test]
    fn two_settings_give_two_entries() {
        let settings = DownloadSettings {
            color_scheme: Some("dark".into()),
            width: Some(1080),
            ..Default::default()
        };
        assert_eq!(
            settings.entries(),
            vec![
                (DownloadSetting::ColorScheme, "dark".to_string()),
                (DownloadSetting::Width, "1080".to_string()),
            ]
        );
    }

    #[test]
    fn deserializes_partial_body() {
        let settings: DownloadSettings =
            serde_json::from_str(r#"{"border":"thin","height":1920}"#).unwrap();
        assert_eq!(settings.border.as_deref(), Some("thin"));
        assert_eq!(settings.height, Some(1920));
        assert_eq!(settings.color_scheme, None);
    }

    #[test]
    fn setting_names_match_columns() {
        assert_eq!(DownloadSetting::ImagePreset.as_str(), "image_preset");
        assert_eq!(DownloadSetting::ColorScheme.to_string(), "color_scheme");
    }
}
