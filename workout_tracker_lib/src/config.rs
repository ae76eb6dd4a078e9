use serde::Deserialize;

pub const DEFAULT_STORAGE_KEY: &str = "workouts";
pub const CONFIG_STORAGE_KEY: &str = "workout-tracker-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Local storage key holding the workout list.
    pub storage_key: String,
    pub zoom_level: f64,
    pub pan_duration_secs: f64,
    pub tile_url: String,
    pub tile_attribution: String,
    /// How long the form stays out of the layout after a submit.
    pub form_redisplay_ms: u32,
    pub log_level: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.into(),
            zoom_level: 12.,
            pan_duration_secs: 1.,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
            tile_attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".into(),
            form_redisplay_ms: 1000,
            log_level: "info".into(),
        }
    }
}

impl TrackerConfig {
    /// Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[test]
fn partial_override_keeps_defaults() {
    let config = TrackerConfig::from_json(r#"{ "zoom_level": 14, "log_level": "debug" }"#).unwrap();
    assert_eq!(config.zoom_level, 14.);
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.storage_key, "workouts");
    assert_eq!(config.form_redisplay_ms, 1000);
}

#[test]
fn invalid_override_is_an_error() {
    assert!(TrackerConfig::from_json("{ zoom_level: }").is_err());
}
