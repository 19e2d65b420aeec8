//! Pomodoro countdown state machine.
//!
//! The timer holds no thread and never reads the clock. The caller feeds it
//! elapsed whole seconds via [`PomodoroTimer::tick`] and reacts to the
//! returned phase changes.
//!
//! ## State transitions
//!
//! ```text
//! Idle -> Running <-> Paused
//!          |
//!          v (last work phase expires)
//!         Idle
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// Work/break/cycle configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PomodoroConfig {
    pub work_minutes: u32,
    pub break_minutes: u32,
    pub cycles: u32,
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            break_minutes: 5,
            cycles: 4,
        }
    }
}

impl PomodoroConfig {
    /// Reject configurations the countdown cannot make progress on.
    pub fn validate(&self) -> Result<()> {
        if self.work_minutes == 0 {
            return Err(ValidationError::InvalidValue {
                field: "work_minutes".into(),
                message: "work duration must be at least one minute".into(),
            }
            .into());
        }
        if self.cycles == 0 {
            return Err(ValidationError::InvalidValue {
                field: "cycles".into(),
                message: "at least one cycle is required".into(),
            }
            .into());
        }
        Ok(())
    }

    pub fn work_secs(&self) -> u64 {
        self.work_minutes as u64 * 60
    }

    pub fn break_secs(&self) -> u64 {
        self.break_minutes as u64 * 60
    }
}

/// Current phase of the session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Work,
    Break,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Work => "Work Time",
            Phase::Break => "Break Time",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PomodoroState {
    Idle,
    Running,
    Paused,
}

/// Phase transition reported by [`PomodoroTimer::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseChange {
    /// A work phase ended; a break began and the cycle count advanced.
    BreakStarted { cycle: u32 },
    /// A break ended; the next work phase began.
    WorkStarted { cycle: u32 },
    /// The final work phase ended; the timer reset to idle.
    Completed,
}

/// Caller-driven pomodoro countdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PomodoroTimer {
    config: PomodoroConfig,
    state: PomodoroState,
    phase: Phase,
    /// 1-based cycle counter.
    cycle: u32,
    remaining_secs: u64,
}

impl PomodoroTimer {
    pub fn new(config: PomodoroConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            remaining_secs: config.work_secs(),
            config,
            state: PomodoroState::Idle,
            phase: Phase::Work,
            cycle: 1,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> PomodoroState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    pub fn config(&self) -> &PomodoroConfig {
        &self.config
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) {
        if self.state != PomodoroState::Running {
            self.state = PomodoroState::Running;
        }
    }

    pub fn pause(&mut self) {
        if self.state == PomodoroState::Running {
            self.state = PomodoroState::Paused;
        }
    }

    /// Back to idle at the start of the first work phase.
    pub fn reset(&mut self) {
        self.state = PomodoroState::Idle;
        self.phase = Phase::Work;
        self.cycle = 1;
        self.remaining_secs = self.config.work_secs();
    }

    /// Swap in a new configuration and reset the countdown.
    pub fn apply_config(&mut self, config: PomodoroConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        self.reset();
        Ok(())
    }

    /// Advance the countdown by `elapsed_secs` of wall time.
    ///
    /// Only ticks while running. When a phase boundary falls inside the
    /// elapsed span the transition fires and the remainder of the span
    /// carries into the next phase, so coarse tick intervals don't lose
    /// time.
    pub fn tick(&mut self, elapsed_secs: u64) -> Vec<PhaseChange> {
        let mut changes = Vec::new();
        if self.state != PomodoroState::Running {
            return changes;
        }
        let mut left = elapsed_secs;
        while left > 0 {
            if left < self.remaining_secs {
                self.remaining_secs -= left;
                break;
            }
            left -= self.remaining_secs;
            match self.phase {
                Phase::Work => {
                    if self.cycle < self.config.cycles {
                        self.cycle += 1;
                        self.phase = Phase::Break;
                        self.remaining_secs = self.config.break_secs();
                        changes.push(PhaseChange::BreakStarted { cycle: self.cycle });
                        // A zero-minute break falls through to the next
                        // work phase on the next loop iteration.
                        if self.remaining_secs == 0 {
                            self.phase = Phase::Work;
                            self.remaining_secs = self.config.work_secs();
                            changes.push(PhaseChange::WorkStarted { cycle: self.cycle });
                        }
                    } else {
                        self.reset();
                        changes.push(PhaseChange::Completed);
                        return changes;
                    }
                }
                Phase::Break => {
                    self.phase = Phase::Work;
                    self.remaining_secs = self.config.work_secs();
                    changes.push(PhaseChange::WorkStarted { cycle: self.cycle });
                }
            }
        }
        changes
    }
}

/// Format seconds as `H:MM:SS`.
pub fn format_hms(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}
