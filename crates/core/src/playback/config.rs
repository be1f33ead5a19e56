use serde::Serialize;

/// Player controls, named the way the widget expects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Control {
    PlayLarge,
    Restart,
    Rewind,
    Play,
    FastForward,
    Progress,
    CurrentTime,
    Duration,
    Mute,
    Volume,
    Captions,
    Settings,
    Pip,
    Airplay,
    Download,
    Fullscreen,
}

/// Entries of the widget's settings menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsMenu {
    Captions,
    Quality,
    Speed,
    Loop,
}

/// Vertical resolutions offered by the quality menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityOptions {
    pub default: u32,
    pub options: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeedOptions {
    pub selected: f64,
    pub options: Vec<f64>,
}

/// Options handed to the widget verbatim.
///
/// The controller never reads these; quality and speed selection belong to
/// the widget. Serializes to the widget's own option object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerConfig {
    pub controls: Vec<Control>,
    pub settings: Vec<SettingsMenu>,
    pub quality: QualityOptions,
    pub speed: SpeedOptions,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            controls: vec![
                Control::PlayLarge,
                Control::Play,
                Control::Progress,
                Control::CurrentTime,
                Control::Mute,
                Control::Volume,
                Control::Settings,
                Control::Fullscreen,
            ],
            settings: vec![SettingsMenu::Quality, SettingsMenu::Speed],
            quality: QualityOptions {
                default: 720,
                options: vec![4320, 2880, 2160, 1440, 1080, 720, 576, 480, 360, 240],
            },
            speed: SpeedOptions {
                selected: 1.0,
                options: vec![0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0],
            },
        }
    }
}

impl PlayerConfig {
    /// Replace the control bar, dropping duplicates while keeping first-seen order.
    #[must_use]
    pub fn with_controls(mut self, controls: impl IntoIterator<Item = Control>) -> Self {
        let mut unique = Vec::new();
        for control in controls {
            if !unique.contains(&control) {
                unique.push(control);
            }
        }
        self.controls = unique;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_config_serializes_to_widget_options() {
        let value = serde_json::to_value(PlayerConfig::default()).unwrap();
        assert_eq!(
            value["controls"],
            json!([
                "play-large",
                "play",
                "progress",
                "current-time",
                "mute",
                "volume",
                "settings",
                "fullscreen"
            ])
        );
        assert_eq!(value["settings"], json!(["quality", "speed"]));
        assert_eq!(value["quality"]["default"], json!(720));
        assert_eq!(value["speed"]["selected"], json!(1.0));
        assert_eq!(value["speed"]["options"].as_array().map(Vec::len), Some(7));
    }

    #[test]
    fn with_controls_drops_duplicates() {
        let config = PlayerConfig::default().with_controls([
            Control::Play,
            Control::FastForward,
            Control::Play,
        ]);
        assert_eq!(config.controls, vec![Control::Play, Control::FastForward]);
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["controls"], json!(["play", "fast-forward"]));
    }
}
