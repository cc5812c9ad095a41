//! Metal surfaces and their work functions

use std::fmt;
use std::str::FromStr;

use crate::InputError;

/// Metals the simulator knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metal {
    Cesium,
    Potassium,
    Sodium,
    Copper,
    Platinum,
}

impl Metal {
    /// Every metal, in increasing work function order
    pub const ALL: [Metal; 5] = [
        Metal::Cesium,
        Metal::Potassium,
        Metal::Sodium,
        Metal::Copper,
        Metal::Platinum,
    ];

    /// Work function in electron-volts
    pub const fn work_function_ev(self) -> f64 {
        match self {
            Metal::Cesium => 2.14,
            Metal::Potassium => 2.3,
            Metal::Sodium => 2.7,
            Metal::Copper => 4.3,
            Metal::Platinum => 5.1,
        }
    }

    /// Lowercase identifier accepted by [`str::parse`]
    pub const fn id(self) -> &'static str {
        match self {
            Metal::Cesium => "cesium",
            Metal::Potassium => "potassium",
            Metal::Sodium => "sodium",
            Metal::Copper => "copper",
            Metal::Platinum => "platinum",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Metal::Cesium => "Cesium",
            Metal::Potassium => "Potassium",
            Metal::Sodium => "Sodium",
            Metal::Copper => "Copper",
            Metal::Platinum => "Platinum",
        }
    }

    /// Label used in selectors and chart legends, e.g. `Copper (4.30 eV)`
    pub fn label(self) -> String {
        format!("{} ({:.2} eV)", self.name(), self.work_function_ev())
    }
}

impl fmt::Display for Metal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metal {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InputError::MissingMetal);
        }

        Metal::ALL
            .into_iter()
            .find(|metal| metal.id().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| InputError::UnknownMetal(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_identifiers_case_insensitively() {
        assert_eq!("copper".parse::<Metal>(), Ok(Metal::Copper));
        assert_eq!(" Platinum ".parse::<Metal>(), Ok(Metal::Platinum));
    }

    #[test]
    fn empty_selection_is_missing_metal() {
        assert_eq!("".parse::<Metal>(), Err(InputError::MissingMetal));
        assert_eq!("   ".parse::<Metal>(), Err(InputError::MissingMetal));
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "gold".parse::<Metal>(),
            Err(InputError::UnknownMetal("gold".to_string()))
        );
    }

    #[test]
    fn table_is_sorted_by_work_function() {
        let work_functions: Vec<f64> = Metal::ALL.iter().map(|m| m.work_function_ev()).collect();
        assert!(work_functions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn label_shows_work_function() {
        assert_eq!(Metal::Copper.label(), "Copper (4.30 eV)");
    }
}
