//! Photoelectric calculations
//!
//! Everything here is a pure function of the frequency and the metal.

use crate::constants::*;
use crate::spectrum::{photon_color, Rgb};
use crate::{InputError, Metal};

/// Photon energy in joules, E = h·f
pub fn photon_energy(frequency_hz: f64) -> f64 {
    PLANCK_CONSTANT * frequency_hz
}

/// Wavelength in nanometres, λ = c / f
///
/// A frequency of zero has no finite wavelength and returns
/// `f64::INFINITY`, which the color mapping treats as infrared.
pub fn wavelength_nm(frequency_hz: f64) -> f64 {
    if frequency_hz == 0.0 {
        return f64::INFINITY;
    }
    SPEED_OF_LIGHT / frequency_hz * NM_PER_M
}

/// Threshold frequency in Hz for a work function in eV, f₀ = φ·e / h
pub fn threshold_frequency(work_function_ev: f64) -> f64 {
    work_function_ev * ELECTRON_CHARGE / PLANCK_CONSTANT
}

/// Number of photons emitted for a given beam intensity.
///
/// Negative or NaN intensities produce the minimum count; anything past
/// `MAX_PHOTON_COUNT` photons (including infinity) is capped there.
pub fn photon_count(intensity: f64) -> usize {
    let scaled = (intensity / INTENSITY_PER_PHOTON).floor();
    if scaled.is_nan() || scaled < MIN_PHOTON_COUNT as f64 {
        MIN_PHOTON_COUNT
    } else if scaled >= MAX_PHOTON_COUNT as f64 {
        MAX_PHOTON_COUNT
    } else {
        scaled as usize
    }
}

/// One simulate action's worth of user input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationInput {
    /// Light frequency in units of 10¹⁴ Hz
    pub frequency: f64,
    /// Beam intensity (arbitrary units, 10 per photon)
    pub intensity: f64,
    pub metal: Option<Metal>,
}

impl SimulationInput {
    pub fn new(frequency: f64, intensity: f64, metal: Metal) -> Self {
        Self {
            frequency,
            intensity,
            metal: Some(metal),
        }
    }

    /// Capture input from raw text fields.
    ///
    /// The frequency must parse as a non-negative number. An unparsable
    /// intensity is kept as NaN, which emits the minimum photon count.
    pub fn parse(frequency: &str, intensity: &str, metal: &str) -> Result<Self, InputError> {
        let frequency_text = frequency.trim();
        let frequency = frequency_text
            .parse::<f64>()
            .map_err(|_| InputError::InvalidFrequency(frequency_text.to_string()))?;
        validate_frequency(frequency)?;

        let metal = metal.parse::<Metal>()?;
        let intensity = intensity.trim().parse::<f64>().unwrap_or(f64::NAN);

        Ok(Self {
            frequency,
            intensity,
            metal: Some(metal),
        })
    }

    /// Frequency converted to Hz
    pub fn frequency_hz(&self) -> f64 {
        self.frequency * FREQUENCY_UNIT_HZ
    }

    pub fn photon_count(&self) -> usize {
        photon_count(self.intensity)
    }
}

fn validate_frequency(frequency: f64) -> Result<(), InputError> {
    if !frequency.is_finite() || frequency < 0.0 {
        return Err(InputError::InvalidFrequency(frequency.to_string()));
    }
    Ok(())
}

/// Everything derived from one simulate action
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationResult {
    pub metal: Metal,
    pub frequency_hz: f64,
    pub photon_energy_ev: f64,
    pub work_function_ev: f64,
    pub threshold_frequency_hz: f64,
    pub wavelength_nm: f64,
    pub kinetic_energy_ev: f64,
    pub electron_ejected: bool,
    pub photon_color: Rgb,
    /// Relative launch speed for ejected electrons, √KE (0 when none are ejected).
    /// Only drives the animation.
    pub velocity_scale: f64,
}

/// Validate input and compute the full result
pub fn evaluate(input: &SimulationInput) -> Result<SimulationResult, InputError> {
    validate_frequency(input.frequency)?;
    let metal = input.metal.ok_or(InputError::MissingMetal)?;
    Ok(evaluate_hz(input.frequency_hz(), metal))
}

/// Compute the result for a frequency already in Hz.
///
/// Callers are expected to pass a non-negative frequency.
pub fn evaluate_hz(frequency_hz: f64, metal: Metal) -> SimulationResult {
    let work_function_ev = metal.work_function_ev();
    let threshold_frequency_hz = threshold_frequency(work_function_ev);

    let photon_energy_j = photon_energy(frequency_hz);
    let work_function_j = work_function_ev * ELECTRON_CHARGE;
    let kinetic_energy_j = (photon_energy_j - work_function_j).max(0.0);
    let kinetic_energy_ev = kinetic_energy_j / ELECTRON_CHARGE;

    let electron_ejected = frequency_hz >= threshold_frequency_hz;
    let wavelength_nm = wavelength_nm(frequency_hz);

    SimulationResult {
        metal,
        frequency_hz,
        photon_energy_ev: photon_energy_j / ELECTRON_CHARGE,
        work_function_ev,
        threshold_frequency_hz,
        wavelength_nm,
        kinetic_energy_ev,
        electron_ejected,
        photon_color: photon_color(wavelength_nm),
        velocity_scale: if electron_ejected {
            kinetic_energy_ev.sqrt()
        } else {
            0.0
        },
    }
}
