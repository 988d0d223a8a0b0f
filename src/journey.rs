//! The space journey: five fixed waypoints parameterizing the decorative
//! scene, blended piecewise-linearly by session progress.

/// Visual parameters at one waypoint of the journey.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    /// Apparent distance to the planet; shrinks as the session advances.
    pub distance: f64,
    pub speed: f64,
    pub star_speed: f64,
    pub atmosphere_size: f64,
    pub streak_length: f64,
}

pub const JOURNEY_STAGES: [Stage; 5] = [
    Stage {
        distance: 50.0,
        speed: 0.5,
        star_speed: 0.1,
        atmosphere_size: 0.2,
        streak_length: 0.1,
    },
    Stage {
        distance: 40.0,
        speed: 1.0,
        star_speed: 0.3,
        atmosphere_size: 0.3,
        streak_length: 0.3,
    },
    Stage {
        distance: 30.0,
        speed: 1.5,
        star_speed: 0.5,
        atmosphere_size: 0.4,
        streak_length: 0.5,
    },
    Stage {
        distance: 20.0,
        speed: 2.0,
        star_speed: 0.8,
        atmosphere_size: 0.5,
        streak_length: 0.7,
    },
    Stage {
        distance: 10.0,
        speed: 2.5,
        star_speed: 1.0,
        atmosphere_size: 0.6,
        streak_length: 1.0,
    },
];

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Blend the waypoint table at `progress` in [0, 1] (clamped).
///
/// The segment index is `floor(p * (N-1))` clamped to the last segment, so
/// the output is continuous and equals the first/last waypoint exactly at
/// the endpoints.
pub fn params_at(progress: f64) -> Stage {
    let p = progress.clamp(0.0, 1.0);
    let scaled = p * (JOURNEY_STAGES.len() - 1) as f64;
    let idx = (scaled.floor() as usize).min(JOURNEY_STAGES.len() - 2);
    let t = scaled - idx as f64;

    let a = &JOURNEY_STAGES[idx];
    let b = &JOURNEY_STAGES[idx + 1];
    Stage {
        distance: lerp(a.distance, b.distance, t),
        speed: lerp(a.speed, b.speed, t),
        star_speed: lerp(a.star_speed, b.star_speed, t),
        atmosphere_size: lerp(a.atmosphere_size, b.atmosphere_size, t),
        streak_length: lerp(a.streak_length, b.streak_length, t),
    }
}
