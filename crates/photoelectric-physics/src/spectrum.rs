//! Mapping from wavelength to a display color
//!
//! Six contiguous bands cover the visible range. Ultraviolet is drawn
//! violet and infrared red so every photon still has a visible color.

/// 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Build from a packed `0xRRGGBB` value
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Normalized sRGB components with the given alpha
    pub fn to_rgba_f32(self, alpha: f32) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            alpha,
        ]
    }
}

/// Visible spectrum bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpectralBand {
    Violet,
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
}

/// Shortest wavelength treated as visible (nm)
pub const VISIBLE_MIN_NM: f64 = 380.0;
/// Longest wavelength treated as visible (nm)
pub const VISIBLE_MAX_NM: f64 = 750.0;

impl SpectralBand {
    /// Band for a wavelength in nanometres.
    ///
    /// Lower edges are inclusive, upper edges exclusive, except red which
    /// includes 750 nm. Anything shorter than 380 nm maps to violet and
    /// anything longer than 750 nm (including infinity) maps to red.
    pub fn from_wavelength_nm(wavelength_nm: f64) -> Self {
        match wavelength_nm {
            // Ultraviolet shares the violet band
            w if w < 450.0 => SpectralBand::Violet,
            w if w < 495.0 => SpectralBand::Blue,
            w if w < 570.0 => SpectralBand::Green,
            w if w < 590.0 => SpectralBand::Yellow,
            w if w < 620.0 => SpectralBand::Orange,
            // NaN falls through to red along with everything past 620 nm
            _ => SpectralBand::Red,
        }
    }

    pub const fn color(self) -> Rgb {
        match self {
            SpectralBand::Violet => Rgb::from_hex(0x9400d3),
            SpectralBand::Blue => Rgb::from_hex(0x0000ff),
            SpectralBand::Green => Rgb::from_hex(0x00ff00),
            SpectralBand::Yellow => Rgb::from_hex(0xffff00),
            SpectralBand::Orange => Rgb::from_hex(0xff7f00),
            SpectralBand::Red => Rgb::from_hex(0xff0000),
        }
    }
}

/// Where a wavelength sits relative to the visible range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpectrumRegion {
    Ultraviolet,
    Visible(SpectralBand),
    Infrared,
}

impl SpectrumRegion {
    pub fn from_wavelength_nm(wavelength_nm: f64) -> Self {
        if wavelength_nm < VISIBLE_MIN_NM {
            SpectrumRegion::Ultraviolet
        } else if wavelength_nm > VISIBLE_MAX_NM {
            SpectrumRegion::Infrared
        } else {
            SpectrumRegion::Visible(SpectralBand::from_wavelength_nm(wavelength_nm))
        }
    }
}

/// Display color for a photon of the given wavelength
pub fn photon_color(wavelength_nm: f64) -> Rgb {
    SpectralBand::from_wavelength_nm(wavelength_nm).color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        assert_eq!(SpectralBand::from_wavelength_nm(380.0), SpectralBand::Violet);
        assert_eq!(SpectralBand::from_wavelength_nm(449.999), SpectralBand::Violet);
        assert_eq!(SpectralBand::from_wavelength_nm(450.0), SpectralBand::Blue);
        assert_eq!(SpectralBand::from_wavelength_nm(495.0), SpectralBand::Green);
        assert_eq!(SpectralBand::from_wavelength_nm(570.0), SpectralBand::Yellow);
        assert_eq!(SpectralBand::from_wavelength_nm(590.0), SpectralBand::Orange);
        assert_eq!(SpectralBand::from_wavelength_nm(620.0), SpectralBand::Red);
        assert_eq!(SpectralBand::from_wavelength_nm(750.0), SpectralBand::Red);
    }

    #[test]
    fn visible_samples() {
        assert_eq!(photon_color(500.0), Rgb::from_hex(0x00ff00));
        assert_eq!(photon_color(600.0), Rgb::from_hex(0xff7f00));
    }

    #[test]
    fn out_of_range_falls_back_to_nearest_edge() {
        assert_eq!(photon_color(10.0), Rgb::from_hex(0x9400d3));
        assert_eq!(photon_color(1000.0), Rgb::from_hex(0xff0000));
        assert_eq!(photon_color(f64::INFINITY), Rgb::from_hex(0xff0000));
    }

    #[test]
    fn regions() {
        assert_eq!(SpectrumRegion::from_wavelength_nm(200.0), SpectrumRegion::Ultraviolet);
        assert_eq!(
            SpectrumRegion::from_wavelength_nm(470.0),
            SpectrumRegion::Visible(SpectralBand::Blue)
        );
        assert_eq!(SpectrumRegion::from_wavelength_nm(f64::INFINITY), SpectrumRegion::Infrared);
    }

    #[test]
    fn hex_round_trip() {
        let orange = Rgb::from_hex(0xff7f00);
        assert_eq!((orange.r, orange.g, orange.b), (0xff, 0x7f, 0x00));
        assert_eq!(orange.to_hex(), 0xff7f00);
    }
}
