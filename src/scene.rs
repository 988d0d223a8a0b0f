use rand::Rng;

use crate::journey::Stage;

pub const STAR_COUNT: usize = 140;
pub const STREAK_COUNT: usize = 45;

/// Depth at which a particle has flown past the viewer and gets re-seeded.
const NEAR_PLANE: f64 = 0.08;

/// Fraction of the travel speed kept while the timer is not running, so the
/// field still drifts gently instead of freezing.
const IDLE_DRIFT: f64 = 0.15;

/// One star (or motion streak) of the travel field. Positions are offsets
/// from the screen center in [-0.5, 0.5]; `depth` shrinks toward the viewer
/// and drives the perspective spread at render time.
#[derive(Debug, Clone, Copy)]
pub struct StarParticle {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
    pub streak: bool,
}

impl StarParticle {
    fn seed<R: Rng>(rng: &mut R, streak: bool) -> Self {
        Self {
            x: rng.gen_range(-0.5..0.5),
            y: rng.gen_range(-0.5..0.5),
            depth: rng.gen_range(NEAR_PLANE..1.0),
            streak,
        }
    }

    /// Re-seed at the far plane after flying past the viewer.
    fn respawn<R: Rng>(&mut self, rng: &mut R) {
        self.x = rng.gen_range(-0.5..0.5);
        self.y = rng.gen_range(-0.5..0.5);
        self.depth = 1.0;
    }
}

/// Decorative scene state: the star/streak field plus the oscillators the
/// angry feedback drives. Pure state, advanced once per tick; rendering
/// happens in `ui::scene_view`.
#[derive(Debug)]
pub struct Scene {
    pub stars: Vec<StarParticle>,
    /// Elapsed scene time in seconds, for the oscillators.
    pub clock: f64,
    /// Horizontal planet offset in cells while shaking.
    pub shake: f64,
    /// Multiplier on the atmosphere radius (pulses while angry).
    pub pulse: f64,
}

impl Scene {
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();
        let mut stars = Vec::with_capacity(STAR_COUNT + STREAK_COUNT);
        for _ in 0..STAR_COUNT {
            stars.push(StarParticle::seed(&mut rng, false));
        }
        for _ in 0..STREAK_COUNT {
            stars.push(StarParticle::seed(&mut rng, true));
        }
        Self {
            stars,
            clock: 0.0,
            shake: 0.0,
            pulse: 1.0,
        }
    }

    /// Advance the field by `dt` seconds under the given stage parameters.
    pub fn advance(&mut self, dt: f64, stage: &Stage, running: bool, angry: bool) {
        self.clock += dt;

        let rate = if running {
            stage.star_speed
        } else {
            stage.star_speed * IDLE_DRIFT
        };

        let mut rng = rand::thread_rng();
        for star in &mut self.stars {
            // Streaks travel ahead of the field for the motion-blur feel
            let factor = if star.streak { 1.5 } else { 1.0 };
            star.depth -= dt * rate * factor * 0.4;
            if star.depth <= NEAR_PLANE {
                star.respawn(&mut rng);
            }
        }

        if angry {
            self.shake = (self.clock * 15.0).sin() * 0.8;
            self.pulse = 1.0 + (self.clock * 15.0).sin() * 0.05;
        } else {
            self.shake = 0.0;
            self.pulse = 1.0;
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journey::JOURNEY_STAGES;

    #[test]
    fn test_new_seeds_full_field() {
        let scene = Scene::new();
        assert_eq!(scene.stars.len(), STAR_COUNT + STREAK_COUNT);
        assert_eq!(scene.stars.iter().filter(|s| s.streak).count(), STREAK_COUNT);
        for star in &scene.stars {
            assert!((-0.5..0.5).contains(&star.x));
            assert!((-0.5..0.5).contains(&star.y));
            assert!(star.depth > NEAR_PLANE && star.depth <= 1.0);
        }
    }

    #[test]
    fn test_advance_moves_stars_toward_viewer() {
        let mut scene = Scene::new();
        let depths: Vec<f64> = scene.stars.iter().map(|s| s.depth).collect();

        scene.advance(0.1, &JOURNEY_STAGES[4], true, false);

        let moved = scene
            .stars
            .iter()
            .zip(&depths)
            .filter(|(s, &d)| s.depth < d)
            .count();
        assert!(moved > 0, "stars should approach the viewer while running");
    }

    #[test]
    fn test_depth_stays_in_bounds_over_time() {
        let mut scene = Scene::new();
        for _ in 0..2000 {
            scene.advance(0.1, &JOURNEY_STAGES[4], true, false);
        }
        for star in &scene.stars {
            assert!(
                star.depth > NEAR_PLANE && star.depth <= 1.0,
                "particle at depth {} escaped its bounds",
                star.depth
            );
        }
    }

    #[test]
    fn test_idle_field_drifts_slower() {
        let base = Scene::new();
        let mut running = Scene::new();
        let mut idle = Scene::new();
        // Align the fields so the comparison is apples to apples
        running.stars = base.stars.clone();
        idle.stars = base.stars.clone();

        running.advance(0.5, &JOURNEY_STAGES[2], true, false);
        idle.advance(0.5, &JOURNEY_STAGES[2], false, false);

        let travelled = |after: &Scene| -> f64 {
            base.stars
                .iter()
                .zip(&after.stars)
                .map(|(b, a)| (b.depth - a.depth).max(0.0))
                .sum()
        };
        assert!(travelled(&running) > travelled(&idle));
    }

    #[test]
    fn test_angry_oscillators_are_bounded() {
        let mut scene = Scene::new();
        for _ in 0..100 {
            scene.advance(0.1, &JOURNEY_STAGES[0], true, true);
            assert!(scene.shake.abs() <= 0.8);
            assert!((scene.pulse - 1.0).abs() <= 0.05 + 1e-9);
        }
    }

    #[test]
    fn test_calm_scene_has_no_shake_or_pulse() {
        let mut scene = Scene::new();
        scene.advance(0.1, &JOURNEY_STAGES[0], true, true);
        scene.advance(0.1, &JOURNEY_STAGES[0], true, false);
        assert_eq!(scene.shake, 0.0);
        assert_eq!(scene.pulse, 1.0);
    }
}
