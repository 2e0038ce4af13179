use super::constants::{CHIRP_BASE_HZ, CHIRP_STEP_SEMITONES, DEFAULT_LINES, LINE_HIDE_DELAY_MS};
use super::cue::Cue;
use super::timeline::{Timeline, TimerId};

/// Which dodger activations rotate the persuasion line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PersuasionTrigger {
    /// Primary click, touch-start, Enter/Space.
    #[default]
    Explicit,
    /// Explicit attempts and proximity dodges.
    EveryDodge,
    Off,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PersuasionConfig {
    pub lines: Vec<String>,
    pub hide_delay_ms: f64,
    pub trigger: PersuasionTrigger,
    pub chirp: bool,
}

impl Default for PersuasionConfig {
    fn default() -> Self {
        Self {
            lines: DEFAULT_LINES.iter().map(|s| s.to_string()).collect(),
            hide_delay_ms: LINE_HIDE_DELAY_MS,
            trigger: PersuasionTrigger::Explicit,
            chirp: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PersuasionRotor {
    lines: Vec<String>,
    index: usize,
    hide_delay_ms: f64,
    chirp: bool,
    hide_timer: Option<TimerId>,
    showing: Option<usize>,
}

impl PersuasionRotor {
    pub fn new(config: &PersuasionConfig) -> Self {
        Self {
            lines: config.lines.clone(),
            index: 0,
            hide_delay_ms: config.hide_delay_ms,
            chirp: config.chirp,
            hide_timer: None,
            showing: None,
        }
    }

    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Cursor of the line the next `show_next` will display.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn showing(&self) -> Option<usize> {
        self.showing
    }

    #[inline]
    pub fn hide_timer(&self) -> Option<TimerId> {
        self.hide_timer
    }

    /// Display the line under the cursor, replacing any visible one, and
    /// advance. Returns the index shown, or `None` with no lines configured.
    pub fn show_next(&mut self, timeline: &mut Timeline<Cue>) -> Option<usize> {
        if self.lines.is_empty() {
            return None;
        }
        if let Some(stale) = self.hide_timer.take() {
            timeline.cancel(stale);
        }
        let index = self.index % self.lines.len();
        timeline.now(Cue::ShowLine {
            index,
            text: self.lines[index].clone(),
        });
        if self.chirp {
            timeline.now(Cue::Chirp {
                frequency_hz: chirp_frequency(index),
            });
        }
        self.hide_timer = Some(timeline.schedule(self.hide_delay_ms, Cue::HideLine));
        self.showing = Some(index);
        self.index = (index + 1) % self.lines.len();
        Some(index)
    }

    /// Called when a `HideLine` fires. Stale timers are ignored.
    pub fn hidden(&mut self, timer: TimerId) -> bool {
        if self.hide_timer == Some(timer) {
            self.hide_timer = None;
            self.showing = None;
            return true;
        }
        false
    }

    pub fn reset(&mut self, timeline: &mut Timeline<Cue>) {
        if let Some(pending) = self.hide_timer.take() {
            timeline.cancel(pending);
            timeline.now(Cue::HideLine);
        }
        self.index = 0;
        self.showing = None;
    }
}

/// Pitch for the chirp accompanying line `index`; climbs a pentatonic step per line.
pub fn chirp_frequency(index: usize) -> f32 {
    let steps = CHIRP_STEP_SEMITONES.len();
    let octave = ((index / steps) % 2) as f32;
    let semis = CHIRP_STEP_SEMITONES[index % steps] + octave * 12.0;
    CHIRP_BASE_HZ * 2.0_f32.powf(semis / 12.0)
}
