use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SlotSize {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    Small,
    Medium,
    Large,
}

/// Slot sizes and vehicle types share the same codes: "S", "M", "L" (or the full names), case
/// insensitive.
fn parse_code(code: &str) -> Option<usize> {
    match code.trim().to_ascii_uppercase().as_str() {
        "S" | "SMALL" => Some(0),
        "M" | "MEDIUM" => Some(1),
        "L" | "LARGE" => Some(2),
        _ => None,
    }
}

/////////////////////////////////////////////////////////////////////
////////////////////////////// SlotSize /////////////////////////////
/////////////////////////////////////////////////////////////////////

impl SlotSize {
    pub const ALL: [SlotSize; 3] = [SlotSize::Small, SlotSize::Medium, SlotSize::Large];

    pub fn code(&self) -> &'static str {
        match self {
            SlotSize::Small => "S",
            SlotSize::Medium => "M",
            SlotSize::Large => "L",
        }
    }
}

impl FromStr for SlotSize {
    type Err = ConfigurationError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        parse_code(code)
            .map(|i| SlotSize::ALL[i])
            .ok_or_else(|| ConfigurationError::UnknownSizeCode(code.to_string()))
    }
}

impl fmt::Display for SlotSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/////////////////////////////////////////////////////////////////////
///////////////////////////// VehicleType ///////////////////////////
/////////////////////////////////////////////////////////////////////

impl VehicleType {
    pub const ALL: [VehicleType; 3] = [
        VehicleType::Small,
        VehicleType::Medium,
        VehicleType::Large,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            VehicleType::Small => "S",
            VehicleType::Medium => "M",
            VehicleType::Large => "L",
        }
    }
}

impl FromStr for VehicleType {
    type Err = ConfigurationError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        parse_code(code)
            .map(|i| VehicleType::ALL[i])
            .ok_or_else(|| ConfigurationError::UnknownSizeCode(code.to_string()))
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_short_and_long_codes() {
        assert_eq!("S".parse::<SlotSize>().unwrap(), SlotSize::Small);
        assert_eq!("medium".parse::<SlotSize>().unwrap(), SlotSize::Medium);
        assert_eq!(" l ".parse::<VehicleType>().unwrap(), VehicleType::Large);
        assert_eq!("Large".parse::<VehicleType>().unwrap(), VehicleType::Large);
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(
            "XL".parse::<VehicleType>(),
            Err(ConfigurationError::UnknownSizeCode(String::from("XL")))
        );
        assert!("".parse::<SlotSize>().is_err());
    }

    #[test]
    fn display_uses_short_code() {
        assert_eq!(SlotSize::Medium.to_string(), "M");
        assert_eq!(VehicleType::Small.to_string(), "S");
    }
}
