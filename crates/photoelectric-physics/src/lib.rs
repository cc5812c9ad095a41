//! # Photoelectric Physics
//!
//! Pure calculations behind the photoelectric effect simulator: photon
//! energy, threshold frequency, kinetic energy of ejected electrons and the
//! color a photon is drawn with.

pub mod calculator;
pub mod chart;
pub mod constants;
pub mod display;
pub mod error;
pub mod metal;
pub mod spectrum;

pub use calculator::*;
pub use chart::*;
pub use constants::*;
pub use display::*;
pub use error::*;
pub use metal::*;
pub use spectrum::*;
