use std::time::{Duration, Instant};

/// How long the planet stays angry after the last provocation.
pub const ANGER_WINDOW: Duration = Duration::from_secs(2);

/// Transient feedback flag raised when the user fidgets during a run (or on
/// completion, as a wake-up). Caller-driven like the rest of the app: call
/// `update` once per tick to let the window expire.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mood {
    angry_until: Option<Instant>,
}

impl Mood {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag. Overlapping provocations restart the window; the
    /// last trigger wins.
    pub fn provoke(&mut self, now: Instant) {
        self.angry_until = Some(now + ANGER_WINDOW);
    }

    pub fn update(&mut self, now: Instant) {
        if let Some(deadline) = self.angry_until {
            if now >= deadline {
                self.angry_until = None;
            }
        }
    }

    pub fn is_angry(&self) -> bool {
        self.angry_until.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_calm() {
        let mood = Mood::new();
        assert!(!mood.is_angry());
    }

    #[test]
    fn test_provoke_sets_flag() {
        let mut mood = Mood::new();
        mood.provoke(Instant::now());
        assert!(mood.is_angry());
    }

    #[test]
    fn test_expires_after_window() {
        let mut mood = Mood::new();
        let start = Instant::now();

        mood.provoke(start);
        mood.update(start + Duration::from_millis(1999));
        assert!(mood.is_angry());

        mood.update(start + Duration::from_millis(2000));
        assert!(!mood.is_angry());
    }

    #[test]
    fn test_overlapping_provocations_restart_window() {
        let mut mood = Mood::new();
        let start = Instant::now();

        mood.provoke(start);
        // 1.5s in, provoke again: the window restarts from here
        let second = start + Duration::from_millis(1500);
        mood.provoke(second);

        mood.update(start + Duration::from_millis(2500));
        assert!(mood.is_angry(), "restarted window should still be open");

        mood.update(second + ANGER_WINDOW);
        assert!(!mood.is_angry());
    }

    #[test]
    fn test_update_when_calm_is_a_no_op() {
        let mut mood = Mood::new();
        mood.update(Instant::now());
        assert!(!mood.is_angry());
    }
}
