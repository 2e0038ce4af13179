use super::celebration::CelebrationMode;
use super::constants::{BG_HEART_COUNT, NAVIGATE_DELAY_MS, SHOWER_HEART_COUNT};
use super::dodge::DodgeConfig;
use super::persuasion::{PersuasionConfig, PersuasionTrigger};
use anyhow::{anyhow, bail, Context};

/// Everything tunable about one page session.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionConfig {
    pub dodge: DodgeConfig,
    pub persuasion: PersuasionConfig,
    pub celebration: CelebrationMode,
    pub shower_count: usize,
    pub ambient_count: usize,
    pub seed: Option<u64>,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            dodge: DodgeConfig::default(),
            persuasion: PersuasionConfig::default(),
            celebration: CelebrationMode::Overlay,
            shower_count: SHOWER_HEART_COUNT,
            ambient_count: BG_HEART_COUNT,
            seed: None,
        }
    }
}

fn parse_px(key: &str, value: &str) -> anyhow::Result<f32> {
    let v: f32 = value
        .trim()
        .trim_end_matches("px")
        .parse()
        .with_context(|| format!("{key}: expected a number, got {value:?}"))?;
    if !v.is_finite() || v < 0.0 {
        bail!("{key}: must be a non-negative number, got {value:?}");
    }
    Ok(v)
}

fn parse_count<T: std::str::FromStr>(key: &str, value: &str) -> anyhow::Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| anyhow!("{key}: expected a whole number, got {value:?}"))
}

fn parse_switch(key: &str, value: &str) -> anyhow::Result<bool> {
    match value.trim() {
        "on" | "true" | "1" | "yes" => Ok(true),
        "off" | "false" | "0" | "no" => Ok(false),
        other => bail!("{key}: expected on/off, got {other:?}"),
    }
}

impl InteractionConfig {
    /// Apply one page override (a `data-*` attribute name without the prefix).
    /// Unknown keys are ignored; a malformed value leaves the config untouched.
    pub fn apply_override(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "dodge-distance" => self.dodge.dodge_distance = parse_px(key, value)?,
            "move-distance" => self.dodge.move_distance = parse_px(key, value)?,
            "jitter" => self.dodge.jitter = parse_px(key, value)?,
            "padding" => self.dodge.placement.padding = parse_px(key, value)?,
            "max-moves" => {
                self.dodge.max_moves = match value.trim() {
                    "never" | "none" => u32::MAX,
                    other => parse_count(key, other)?,
                }
            }
            "attempts" => {
                let n: u32 = parse_count(key, value)?;
                if n == 0 {
                    bail!("{key}: needs at least one attempt");
                }
                self.dodge.placement.max_attempts = n;
            }
            "persuasion" => {
                self.persuasion.trigger = match value.trim() {
                    "explicit" => PersuasionTrigger::Explicit,
                    "every-dodge" => PersuasionTrigger::EveryDodge,
                    "off" => PersuasionTrigger::Off,
                    other => bail!("{key}: unknown trigger {other:?}"),
                }
            }
            "chirp" => self.persuasion.chirp = parse_switch(key, value)?,
            "lines" => {
                let lines: Vec<String> = value
                    .split('|')
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(String::from)
                    .collect();
                if lines.is_empty() {
                    bail!("{key}: no lines given");
                }
                self.persuasion.lines = lines;
            }
            "celebration" => {
                self.celebration = match value.trim() {
                    "overlay" => CelebrationMode::Overlay,
                    "navigate" => match &self.celebration {
                        CelebrationMode::Navigate { .. } => self.celebration.clone(),
                        CelebrationMode::Overlay => CelebrationMode::default_navigate(),
                    },
                    other => bail!("{key}: unknown mode {other:?}"),
                }
            }
            "destination" => {
                let destination = value.trim();
                if destination.is_empty() {
                    bail!("{key}: empty destination");
                }
                let delay_ms = match &self.celebration {
                    CelebrationMode::Navigate { delay_ms, .. } => *delay_ms,
                    CelebrationMode::Overlay => NAVIGATE_DELAY_MS,
                };
                self.celebration = CelebrationMode::Navigate {
                    destination: destination.to_string(),
                    delay_ms,
                };
            }
            "shower-count" => self.shower_count = parse_count(key, value)?,
            "ambient-count" => self.ambient_count = parse_count(key, value)?,
            "seed" => self.seed = Some(parse_count(key, value)?),
            _ => {}
        }
        Ok(())
    }

    /// Apply every override, logging and skipping the malformed ones.
    pub fn with_overrides<'a>(mut self, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        for (key, value) in pairs {
            if let Err(e) = self.apply_override(key, value) {
                log::warn!("[config] ignoring override: {e:#}");
            }
        }
        self
    }
}
