//! Physical constants for the photoelectric calculations
//!
//! Values are rounded to four significant figures so the displayed results
//! match the classroom tables the simulator is used alongside.

/// Planck constant (J·s)
pub const PLANCK_CONSTANT: f64 = 6.626e-34;

/// Elementary charge (C), also the joules in one electron-volt
pub const ELECTRON_CHARGE: f64 = 1.602e-19;

/// Speed of light in vacuum (m/s)
pub const SPEED_OF_LIGHT: f64 = 2.998e8;

/// Frequencies entered by the user are in units of 10¹⁴ Hz
pub const FREQUENCY_UNIT_HZ: f64 = 1.0e14;

/// Metres to nanometres
pub const NM_PER_M: f64 = 1.0e9;

/// Fewest photons a simulate action ever emits
pub const MIN_PHOTON_COUNT: usize = 5;

/// Most photons a simulate action ever emits
pub const MAX_PHOTON_COUNT: usize = 500;

/// Intensity units per emitted photon
pub const INTENSITY_PER_PHOTON: f64 = 10.0;
