use std::fmt;

pub const MIN_FOCUS_MINUTES: u16 = 1;
pub const MAX_FOCUS_MINUTES: u16 = 120;

/// Emitted exactly once when a run naturally reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub focus_minutes: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Completed,
}

/// Wall-clock-free countdown state machine. No internal thread; the caller
/// is responsible for feeding `on_tick` with elapsed milliseconds.
#[derive(Debug, Clone)]
pub struct Countdown {
    state: TimerState,
    focus_minutes: u16,
    /// Applied on the next reset when the duration changes mid-run.
    pending_minutes: Option<u16>,
    remaining_secs: u32,
    carry_ms: u64,
}

fn clamp_minutes(minutes: u16) -> u16 {
    minutes.clamp(MIN_FOCUS_MINUTES, MAX_FOCUS_MINUTES)
}

impl Countdown {
    pub fn new(focus_minutes: u16) -> Self {
        let focus_minutes = clamp_minutes(focus_minutes);
        Self {
            state: TimerState::Idle,
            focus_minutes,
            pending_minutes: None,
            remaining_secs: focus_minutes as u32 * 60,
            carry_ms: 0,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn focus_minutes(&self) -> u16 {
        self.pending_minutes.unwrap_or(self.focus_minutes)
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn total_secs(&self) -> u32 {
        self.focus_minutes as u32 * 60
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Fraction of the session elapsed, in [0, 1].
    pub fn progress(&self) -> f64 {
        let total = self.total_secs();
        if total == 0 {
            return 0.0;
        }
        1.0 - (self.remaining_secs as f64 / total as f64)
    }

    pub fn start(&mut self) {
        if matches!(self.state, TimerState::Idle | TimerState::Paused) {
            self.state = TimerState::Running;
        }
    }

    pub fn pause(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Paused;
        }
    }

    /// Space-bar behavior: start/pause, and from Completed begin a fresh run.
    pub fn toggle(&mut self) {
        match self.state {
            TimerState::Idle | TimerState::Paused => self.state = TimerState::Running,
            TimerState::Running => self.state = TimerState::Paused,
            TimerState::Completed => {
                self.reset();
                self.state = TimerState::Running;
            }
        }
    }

    pub fn reset(&mut self) {
        if let Some(minutes) = self.pending_minutes.take() {
            self.focus_minutes = minutes;
        }
        self.state = TimerState::Idle;
        self.remaining_secs = self.total_secs();
        self.carry_ms = 0;
    }

    /// Change the configured duration (clamped to [1, 120] minutes).
    ///
    /// Outside a run the remaining time snaps to the new duration
    /// immediately; mid-run the change is deferred until the next reset so
    /// `remaining_secs <= total_secs` holds throughout.
    pub fn set_focus_minutes(&mut self, minutes: u16) {
        let minutes = clamp_minutes(minutes);
        match self.state {
            TimerState::Running => self.pending_minutes = Some(minutes),
            TimerState::Idle | TimerState::Paused => {
                self.focus_minutes = minutes;
                self.pending_minutes = None;
                self.remaining_secs = self.total_secs();
            }
            TimerState::Completed => {
                self.focus_minutes = minutes;
                self.pending_minutes = None;
                self.reset();
            }
        }
    }

    /// Advance the countdown by `dt_ms`. Sub-second remainders accumulate so
    /// a 100ms tick cadence still decrements exactly once per second.
    pub fn on_tick(&mut self, dt_ms: u64) -> Option<Completion> {
        if self.state != TimerState::Running {
            return None;
        }

        self.carry_ms += dt_ms;
        while self.carry_ms >= 1000 && self.remaining_secs > 0 {
            self.carry_ms -= 1000;
            self.remaining_secs -= 1;

            if self.remaining_secs == 0 {
                self.state = TimerState::Completed;
                self.carry_ms = 0;
                return Some(Completion {
                    focus_minutes: self.focus_minutes,
                });
            }
        }

        None
    }
}

impl fmt::Display for Countdown {
    /// Remaining time as `MM:SS`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mins = self.remaining_secs / 60;
        let secs = self.remaining_secs % 60;
        write!(f, "{:02}:{:02}", mins, secs)
    }
}
