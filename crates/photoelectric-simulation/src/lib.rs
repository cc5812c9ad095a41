//! # Photoelectric Simulation
//!
//! Frame-driven animation of photons hitting a metal surface and the
//! electrons they knock loose, plus the session object tying it to the
//! physics calculator.

pub mod animator;
pub mod params;
pub mod session;

pub use animator::*;
pub use params::*;
pub use session::*;
