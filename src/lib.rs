// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod app_dirs;
pub mod config;
pub mod countdown;
pub mod journey;
pub mod mood;
pub mod runtime;
pub mod scene;
pub mod stats;

/// Cadence of the UI tick, in milliseconds. The countdown only decrements
/// whole seconds; the scene animates on every tick.
pub const TICK_RATE_MS: u64 = 100;
