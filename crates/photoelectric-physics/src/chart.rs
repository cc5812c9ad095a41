//! Sampled curves for the energy charts
//!
//! Both curves share a 16-point grid from 0 to 15 × 10¹⁴ Hz. Points are
//! `[x, y]` with x in 10¹⁴ Hz and y in eV, ready for a line plot.

use crate::calculator::{evaluate_hz, photon_energy};
use crate::constants::{ELECTRON_CHARGE, FREQUENCY_UNIT_HZ};
use crate::Metal;

/// Number of samples in each curve
pub const FREQUENCY_GRID_POINTS: usize = 16;

/// Spacing between samples (Hz)
pub const FREQUENCY_GRID_STEP_HZ: f64 = 1.0e14;

/// Sample frequencies in Hz
pub fn frequency_grid() -> impl Iterator<Item = f64> {
    (0..FREQUENCY_GRID_POINTS).map(|i| i as f64 * FREQUENCY_GRID_STEP_HZ)
}

/// Photon energy against frequency. Independent of the metal.
pub fn photon_energy_curve() -> Vec<[f64; 2]> {
    frequency_grid()
        .map(|f| [f / FREQUENCY_UNIT_HZ, photon_energy(f) / ELECTRON_CHARGE])
        .collect()
}

/// Maximum kinetic energy of ejected electrons against frequency
pub fn kinetic_energy_curve(metal: Metal) -> Vec<[f64; 2]> {
    frequency_grid()
        .map(|f| [f / FREQUENCY_UNIT_HZ, evaluate_hz(f, metal).kinetic_energy_ev])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn curves_have_sixteen_points_on_unit_grid() {
        let energy = photon_energy_curve();
        let kinetic = kinetic_energy_curve(Metal::Sodium);

        assert_eq!(energy.len(), FREQUENCY_GRID_POINTS);
        assert_eq!(kinetic.len(), FREQUENCY_GRID_POINTS);
        for (i, (e, k)) in energy.iter().zip(&kinetic).enumerate() {
            assert_abs_diff_eq!(e[0], i as f64, epsilon = 1e-9);
            assert_abs_diff_eq!(k[0], i as f64, epsilon = 1e-9);
        }
    }

    #[test]
    fn photon_energy_is_linear() {
        let curve = photon_energy_curve();
        assert_eq!(curve[0][1], 0.0);
        let slope = curve[1][1];
        for point in &curve {
            assert_abs_diff_eq!(point[1], slope * point[0], epsilon = 1e-9);
        }
    }

    #[test]
    fn kinetic_energy_is_zero_below_threshold() {
        // Platinum needs ~12.3 × 10¹⁴ Hz
        let curve = kinetic_energy_curve(Metal::Platinum);
        assert!(curve[..12].iter().all(|p| p[1] == 0.0));
        assert!(curve[13..].iter().all(|p| p[1] > 0.0));
    }

    #[test]
    fn kinetic_curve_depends_on_metal() {
        let cesium = kinetic_energy_curve(Metal::Cesium);
        let copper = kinetic_energy_curve(Metal::Copper);
        assert!(cesium[15][1] > copper[15][1]);
    }
}
