//! Fingerprint class and engine configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::FingerprintError;

/// Width of the folded bit vector when none is configured.
pub const DEFAULT_FOLDED_LENGTH: usize = 1024;

/// Which seed scheme to use and how far to grow each environment.
///
/// The digit is the environment diameter, so the iteration count is half of
/// it: `Ecfp4` runs two iterations on elemental seeds, `Fcfp4` runs two on
/// functional seeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FingerprintClass {
    Ecfp0 = 1,
    Ecfp2 = 2,
    Ecfp4 = 3,
    #[default]
    Ecfp6 = 4,
    Fcfp0 = 5,
    Fcfp2 = 6,
    Fcfp4 = 7,
    Fcfp6 = 8,
}

impl FingerprintClass {
    pub const ALL: [FingerprintClass; 8] = [
        FingerprintClass::Ecfp0,
        FingerprintClass::Ecfp2,
        FingerprintClass::Ecfp4,
        FingerprintClass::Ecfp6,
        FingerprintClass::Fcfp0,
        FingerprintClass::Fcfp2,
        FingerprintClass::Fcfp4,
        FingerprintClass::Fcfp6,
    ];

    pub fn code(self) -> i32 {
        self as i32
    }

    /// Number of circular iterations after the seed step.
    pub fn max_radius(self) -> u32 {
        match self {
            FingerprintClass::Ecfp0 | FingerprintClass::Fcfp0 => 0,
            FingerprintClass::Ecfp2 | FingerprintClass::Fcfp2 => 1,
            FingerprintClass::Ecfp4 | FingerprintClass::Fcfp4 => 2,
            FingerprintClass::Ecfp6 | FingerprintClass::Fcfp6 => 3,
        }
    }

    /// Whether seeds come from the functional (pharmacophore) typing.
    pub fn is_functional(self) -> bool {
        matches!(
            self,
            FingerprintClass::Fcfp0
                | FingerprintClass::Fcfp2
                | FingerprintClass::Fcfp4
                | FingerprintClass::Fcfp6
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            FingerprintClass::Ecfp0 => "ECFP0",
            FingerprintClass::Ecfp2 => "ECFP2",
            FingerprintClass::Ecfp4 => "ECFP4",
            FingerprintClass::Ecfp6 => "ECFP6",
            FingerprintClass::Fcfp0 => "FCFP0",
            FingerprintClass::Fcfp2 => "FCFP2",
            FingerprintClass::Fcfp4 => "FCFP4",
            FingerprintClass::Fcfp6 => "FCFP6",
        }
    }
}

impl fmt::Display for FingerprintClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for FingerprintClass {
    type Error = FingerprintError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|class| class.code() == code)
            .ok_or(FingerprintError::InvalidClass(code))
    }
}

impl FromStr for FingerprintClass {
    type Err = FingerprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| FingerprintError::UnknownClassName(s.to_string()))
    }
}

/// Options recognized by [`CircularFingerprinter`](crate::CircularFingerprinter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FingerprintConfig {
    pub class: FingerprintClass,
    /// Width of the folded bit vector.
    pub folded_length: usize,
    /// Derive tetrahedral configurations from coordinates and wedge bonds
    /// instead of reading the molecule's stereo annotations.
    pub perceive_stereo: bool,
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self {
            class: FingerprintClass::default(),
            folded_length: DEFAULT_FOLDED_LENGTH,
            perceive_stereo: false,
        }
    }
}

impl FingerprintConfig {
    pub fn new(class: FingerprintClass) -> Self {
        Self {
            class,
            ..Self::default()
        }
    }

    pub fn with_folded_length(mut self, folded_length: usize) -> Self {
        self.folded_length = folded_length;
        self
    }

    pub fn with_perceive_stereo(mut self, perceive_stereo: bool) -> Self {
        self.perceive_stereo = perceive_stereo;
        self
    }

    pub fn validate(&self) -> Result<(), FingerprintError> {
        if self.folded_length == 0 {
            return Err(FingerprintError::InvalidFoldedLength(self.folded_length));
        }
        Ok(())
    }
}
