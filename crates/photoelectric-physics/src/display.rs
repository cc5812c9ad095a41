//! Text for the results panel

use crate::constants::FREQUENCY_UNIT_HZ;
use crate::spectrum::{SpectralBand, SpectrumRegion};
use crate::SimulationResult;

/// How the "electron ejected" field should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EjectionStyle {
    Highlight,
    Error,
}

/// Formatted result fields, rounded for display
#[derive(Debug, Clone, PartialEq)]
pub struct ResultDisplay {
    pub photon_energy: String,
    pub work_function: String,
    pub threshold_frequency: String,
    pub wavelength: String,
    pub spectrum: String,
    pub kinetic_energy: String,
    pub electron_ejected: &'static str,
    pub ejection_style: EjectionStyle,
}

impl From<&SimulationResult> for ResultDisplay {
    fn from(result: &SimulationResult) -> Self {
        let wavelength = if result.wavelength_nm.is_finite() {
            format!("{:.0} nm", result.wavelength_nm)
        } else {
            "∞ nm".to_string()
        };

        Self {
            photon_energy: format!("{:.2} eV", result.photon_energy_ev),
            work_function: format!("{:.2} eV", result.work_function_ev),
            threshold_frequency: format!(
                "{:.2} ×10¹⁴ Hz",
                result.threshold_frequency_hz / FREQUENCY_UNIT_HZ
            ),
            wavelength,
            spectrum: region_name(SpectrumRegion::from_wavelength_nm(result.wavelength_nm)),
            kinetic_energy: format!("{:.2} eV", result.kinetic_energy_ev),
            electron_ejected: if result.electron_ejected { "Yes" } else { "No" },
            ejection_style: if result.electron_ejected {
                EjectionStyle::Highlight
            } else {
                EjectionStyle::Error
            },
        }
    }
}

fn region_name(region: SpectrumRegion) -> String {
    match region {
        SpectrumRegion::Ultraviolet => "Ultraviolet".to_string(),
        SpectrumRegion::Infrared => "Infrared".to_string(),
        SpectrumRegion::Visible(band) => {
            let name = match band {
                SpectralBand::Violet => "violet",
                SpectralBand::Blue => "blue",
                SpectralBand::Green => "green",
                SpectralBand::Yellow => "yellow",
                SpectralBand::Orange => "orange",
                SpectralBand::Red => "red",
            };
            format!("Visible ({name})")
        }
    }
}

/// One-paragraph explanation of the outcome in terms of E_k = hf − φ
pub fn explanation(result: &SimulationResult) -> String {
    let photon = format!("{:.2}", result.photon_energy_ev);
    let work_function = format!("{:.2}", result.work_function_ev);
    let metal = result.metal.name();

    if result.electron_ejected {
        format!(
            "The incident light has sufficient energy ({photon} eV) to overcome the work \
             function of {work_function} eV for {metal}. The ejected electrons have a kinetic \
             energy of {:.2} eV, following Einstein's photoelectric equation: E_k = hf − φ",
            result.kinetic_energy_ev
        )
    } else {
        format!(
            "The incident light has insufficient energy ({photon} eV) to overcome the work \
             function of {work_function} eV for {metal}. According to Einstein's photoelectric \
             equation, the photon energy (hf) must exceed the work function (φ) for electrons \
             to be ejected."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{evaluate, evaluate_hz, Metal, SimulationInput};

    #[test]
    fn formats_copper_result() {
        let result = evaluate(&SimulationInput::new(15.0, 50.0, Metal::Copper)).unwrap();
        let display = ResultDisplay::from(&result);

        assert_eq!(display.photon_energy, "6.20 eV");
        assert_eq!(display.work_function, "4.30 eV");
        assert_eq!(display.threshold_frequency, "10.40 ×10¹⁴ Hz");
        assert_eq!(display.wavelength, "200 nm");
        assert_eq!(display.spectrum, "Ultraviolet");
        assert_eq!(display.kinetic_energy, "1.90 eV");
        assert_eq!(display.electron_ejected, "Yes");
        assert_eq!(display.ejection_style, EjectionStyle::Highlight);
    }

    #[test]
    fn formats_rejected_ejection() {
        let result = evaluate(&SimulationInput::new(5.0, 50.0, Metal::Platinum)).unwrap();
        let display = ResultDisplay::from(&result);

        assert_eq!(display.kinetic_energy, "0.00 eV");
        assert_eq!(display.spectrum, "Visible (orange)");
        assert_eq!(display.electron_ejected, "No");
        assert_eq!(display.ejection_style, EjectionStyle::Error);
    }

    #[test]
    fn zero_frequency_shows_infinite_wavelength() {
        let display = ResultDisplay::from(&evaluate_hz(0.0, Metal::Cesium));
        assert_eq!(display.wavelength, "∞ nm");
        assert_eq!(display.spectrum, "Infrared");
    }

    #[test]
    fn explanation_names_metal_and_outcome() {
        let ejected = explanation(&evaluate_hz(1.5e15, Metal::Copper));
        assert!(ejected.contains("sufficient energy (6.20 eV)"));
        assert!(ejected.contains("for Copper"));
        assert!(ejected.contains("1.90 eV"));

        let blocked = explanation(&evaluate_hz(5.0e14, Metal::Platinum));
        assert!(blocked.contains("insufficient energy (2.07 eV)"));
        assert!(blocked.contains("for Platinum"));
    }
}
