//! Tunables for the page widgets.
//!
//! The page may embed a JSON object in `<script id="site-config"
//! type="application/json">`; any field left out keeps its default.

use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Number of sprites in the background field.
    pub particle_count: usize,
    /// Distance below the bottom edge at which a sprite re-enters.
    pub respawn_margin: f64,
    /// Carousel auto-scroll speed.
    pub scroll_px_per_sec: f64,
    /// Distance moved by one press of a carousel paging button.
    pub page_step_px: f64,
    pub type_tick_ms: u32,
    pub dwell_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            particle_count: 20,
            respawn_margin: 100.0,
            scroll_px_per_sec: 100.0,
            page_step_px: 300.0,
            type_tick_ms: 100,
            dwell_ms: 10_000,
        }
    }
}

impl SiteConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parses `text` if present, falling back to defaults on absence or error.
    pub fn load_or_default(text: Option<&str>) -> Self {
        match text.map(str::trim).filter(|t| !t.is_empty()) {
            None => Self::default(),
            Some(text) => Self::from_json(text).unwrap_or_else(|err| {
                log::warn!("{err}; using default site config");
                Self::default()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg = SiteConfig::from_json(r#"{ "particle_count": 5, "dwell_ms": 2000 }"#).unwrap();
        assert_eq!(cfg.particle_count, 5);
        assert_eq!(cfg.dwell_ms, 2000);
        assert_eq!(cfg.scroll_px_per_sec, 100.0);
        assert_eq!(cfg.type_tick_ms, 100);
    }

    #[test]
    fn malformed_config_falls_back() {
        assert_eq!(
            SiteConfig::load_or_default(Some("{ particle_count: ")),
            SiteConfig::default()
        );
    }

    #[test]
    fn blank_config_is_default() {
        assert_eq!(SiteConfig::load_or_default(Some("  \n")), SiteConfig::default());
        assert_eq!(SiteConfig::load_or_default(None), SiteConfig::default());
    }

    #[test]
    fn wrong_field_type_is_an_error() {
        assert!(SiteConfig::from_json(r#"{ "type_tick_ms": "fast" }"#).is_err());
    }
}
