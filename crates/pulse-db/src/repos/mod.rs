//! Repository modules for MarketPulse entities.
//!
//! Each module adds methods to `PulseDb` via `impl PulseDb` blocks.

pub mod insight;
pub mod user;
