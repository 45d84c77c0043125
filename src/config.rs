//! Page tunables.
//!
//! Everything defaults to the values the portfolio page ships with. A page can
//! override any subset by embedding
//! `<script type="application/json" id="page-config">{ ... }</script>`.

use serde::Deserialize;
use web_sys::Document;

use crate::error::PageError;

pub const CONFIG_ELEMENT_ID: &str = "page-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub log_level: String,
    pub timings: Timings,
    pub scroll: ScrollConfig,
    pub glitch: GlitchConfig,
    pub matrix: MatrixConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            timings: Timings::default(),
            scroll: ScrollConfig::default(),
            glitch: GlitchConfig::default(),
            matrix: MatrixConfig::default(),
        }
    }
}

/// Fixed delays, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub hero_typing_delay: u32,
    pub hero_char: u32,
    pub description_delay: u32,
    pub description_char: u32,
    pub skill_lead_in: u32,
    pub skill_stagger: u32,
    pub hero_stagger: u32,
    pub submit_latency: u32,
    pub notification_enter: u32,
    pub notification_slide: u32,
    pub notification_dismiss: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            hero_typing_delay: 1000,
            hero_char: 100,
            description_delay: 500,
            description_char: 30,
            skill_lead_in: 300,
            skill_stagger: 100,
            hero_stagger: 200,
            submit_latency: 2000,
            notification_enter: 100,
            notification_slide: 300,
            notification_dismiss: 5000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub navbar_threshold: f64,
    pub section_lookahead: f64,
    pub anchor_offset: f64,
    pub section_reveal_ratio: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            navbar_threshold: 100.0,
            section_lookahead: 200.0,
            anchor_offset: 70.0,
            section_reveal_ratio: 0.75,
        }
    }
}

/// One periodic glitch: every `period_ms`, with `probability`, the effect
/// is applied and reverted `revert_ms` later.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GlitchSpec {
    pub period_ms: u32,
    pub probability: f64,
    pub revert_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GlitchConfig {
    pub title: GlitchSpec,
    pub icon: GlitchSpec,
    pub ambient: GlitchSpec,
}

impl Default for GlitchConfig {
    fn default() -> Self {
        Self {
            title: GlitchSpec { period_ms: 2000, probability: 0.05, revert_ms: 100 },
            icon: GlitchSpec { period_ms: 3000, probability: 0.02, revert_ms: 200 },
            ambient: GlitchSpec { period_ms: 5000, probability: 0.01, revert_ms: 100 },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
    pub columns: usize,
    pub digits_per_column: usize,
    pub digits_per_row: usize,
    pub min_duration_s: f64,
    pub duration_spread_s: f64,
    pub max_delay_s: f64,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            columns: 20,
            digits_per_column: 50,
            digits_per_row: 10,
            min_duration_s: 10.0,
            duration_spread_s: 20.0,
            max_delay_s: 10.0,
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        let config: PageConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the `#page-config` block, if the page has one.
    pub fn from_document(document: &Document) -> Result<Self, PageError> {
        match document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), PageError> {
        for (name, spec) in [
            ("title", &self.glitch.title),
            ("icon", &self.glitch.icon),
            ("ambient", &self.glitch.ambient),
        ] {
            if !(0.0..=1.0).contains(&spec.probability) {
                return Err(PageError::Config(format!(
                    "glitch.{}.probability must be within [0, 1], got {}",
                    name, spec.probability
                )));
            }
            if spec.period_ms == 0 {
                return Err(PageError::Config(format!("glitch.{}.period_ms must be positive", name)));
            }
        }
        if self.matrix.digits_per_row == 0 {
            return Err(PageError::Config("matrix.digits_per_row must be positive".to_string()));
        }
        if self.matrix.duration_spread_s < 0.0 || self.matrix.max_delay_s < 0.0 {
            return Err(PageError::Config("matrix timings must not be negative".to_string()));
        }
        Ok(())
    }
}
