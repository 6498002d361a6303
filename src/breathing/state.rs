use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One stage of the breathing cycle. The successor relation is a fixed ring:
/// Inhale -> HoldIn -> Exhale -> HoldOut -> Inhale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum BreathPhase {
    Inhale,
    HoldIn,
    Exhale,
    HoldOut,
}

/// Direction of the animated visual cue a phase calls for. Presentation is
/// the host's concern; the sequencer only names the direction.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum BreathCue {
    Expand,
    Contract,
    Still,
}

impl BreathPhase {
    pub fn successor(self) -> BreathPhase {
        match self {
            BreathPhase::Inhale => BreathPhase::HoldIn,
            BreathPhase::HoldIn => BreathPhase::Exhale,
            BreathPhase::Exhale => BreathPhase::HoldOut,
            BreathPhase::HoldOut => BreathPhase::Inhale,
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            BreathPhase::Inhale => "Breathe In",
            BreathPhase::HoldIn | BreathPhase::HoldOut => "Hold",
            BreathPhase::Exhale => "Breathe Out",
        }
    }

    pub fn cue(self) -> BreathCue {
        match self {
            BreathPhase::Inhale => BreathCue::Expand,
            BreathPhase::Exhale => BreathCue::Contract,
            BreathPhase::HoldIn | BreathPhase::HoldOut => BreathCue::Still,
        }
    }
}

/// Cycle-count thresholds that unlock a badge, in increasing order.
pub const MILESTONES: [(u32, &str); 3] = [
    (5, "Beginner Breather"),
    (10, "Breathing Pro"),
    (20, "Zen Master"),
];

pub fn milestone_badge(completed_cycles: u32) -> Option<&'static str> {
    MILESTONES
        .iter()
        .find(|(count, _)| *count == completed_cycles)
        .map(|(_, badge)| *badge)
}

/// Per-phase durations for the sequencer.
#[derive(Debug, Clone)]
pub struct BreathingConfig {
    pub inhale_ms: u64,
    pub hold_in_ms: u64,
    pub exhale_ms: u64,
    pub hold_out_ms: u64,
}

impl Default for BreathingConfig {
    fn default() -> Self {
        Self {
            inhale_ms: 4000,
            hold_in_ms: 4000,
            exhale_ms: 4000,
            hold_out_ms: 4000,
        }
    }
}

impl BreathingConfig {
    pub fn duration_ms(&self, phase: BreathPhase) -> u64 {
        match phase {
            BreathPhase::Inhale => self.inhale_ms,
            BreathPhase::HoldIn => self.hold_in_ms,
            BreathPhase::Exhale => self.exhale_ms,
            BreathPhase::HoldOut => self.hold_out_ms,
        }
    }

    pub fn duration(&self, phase: BreathPhase) -> Duration {
        Duration::from_millis(self.duration_ms(phase))
    }
}

/// What a single transition produced, for the controller to translate into
/// observable events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    pub entered: BreathPhase,
    pub completed_cycle: Option<u32>,
    pub milestone: Option<(u32, &'static str)>,
}

/// Running/paused flag, current phase and completed-cycle counter for one
/// breathing session. Mutated only by [`BreathingSession::begin`],
/// [`BreathingSession::pause`] and [`BreathingSession::advance`].
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BreathingSession {
    pub running: bool,
    /// `None` until the session is first started.
    pub phase: Option<BreathPhase>,
    pub completed_cycles: u32,
}

impl Default for BreathingSession {
    fn default() -> Self {
        Self {
            running: false,
            phase: None,
            completed_cycles: 0,
        }
    }
}

impl BreathingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter Inhale with the cycle counter reset. Every start is
    /// from-scratch; a paused session does not resume in place.
    pub fn begin(&mut self) {
        self.running = true;
        self.phase = Some(BreathPhase::Inhale);
        self.completed_cycles = 0;
    }

    /// Stop advancing but keep the current phase and counter readable.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// The single transition function: move to the successor phase.
    /// Completing HoldOut increments the cycle counter exactly once.
    pub fn advance(&mut self) -> Option<Advance> {
        if !self.running {
            return None;
        }
        let current = self.phase?;

        let mut completed_cycle = None;
        let mut milestone = None;
        if current == BreathPhase::HoldOut {
            self.completed_cycles += 1;
            completed_cycle = Some(self.completed_cycles);
            milestone =
                milestone_badge(self.completed_cycles).map(|badge| (self.completed_cycles, badge));
        }

        let next = current.successor();
        self.phase = Some(next);

        Some(Advance {
            entered: next,
            completed_cycle,
            milestone,
        })
    }
}
