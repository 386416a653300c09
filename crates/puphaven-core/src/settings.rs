//! Application settings.

use serde::{Deserialize, Serialize};

/// User-facing application settings.
///
/// Settings live only for the process lifetime; the demo does not persist
/// them to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Dark mode toggle
    pub dark_mode: bool,
    /// UI scale factor
    pub ui_scale: f32,
    /// Window title
    #[serde(default = "default_window_title")]
    pub window_title: String,
    /// Initial window width in logical pixels
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    /// Initial window height in logical pixels
    #[serde(default = "default_window_height")]
    pub window_height: u32,
    /// Portrait render resolution (square, in pixels)
    #[serde(default = "default_portrait_size")]
    pub portrait_size: u32,
}

fn default_window_title() -> String {
    "PupHaven".to_string()
}

fn default_window_width() -> u32 {
    480
}

fn default_window_height() -> u32 {
    860
}

fn default_portrait_size() -> u32 {
    512
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            ui_scale: 1.0,
            window_title: default_window_title(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            portrait_size: default_portrait_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert!(settings.dark_mode);
        assert_eq!(settings.ui_scale, 1.0);
        assert_eq!(settings.window_title, "PupHaven");
        assert_eq!(settings.portrait_size, 512);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut settings = AppSettings::default();
        settings.dark_mode = false;
        settings.ui_scale = 1.25;

        let json = serde_json::to_string(&settings).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let back: AppSettings =
            serde_json::from_str(r#"{"dark_mode": false, "ui_scale": 1.0}"#).unwrap();
        assert_eq!(back.window_title, "PupHaven");
        assert_eq!(back.window_width, 480);
    }
}
