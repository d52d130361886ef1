use serde::{Deserialize, Serialize};
use std::fmt;

/// Metals a line item can be priced in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MetalType {
    Silver,
    Gold,
}

impl MetalType {
    /// Every metal, in the order bill summaries list them
    pub const ALL: [MetalType; 2] = [MetalType::Silver, MetalType::Gold];

    /// Human-facing name ("Gold", "Silver")
    pub fn display_name(&self) -> &'static str {
        match self {
            MetalType::Gold => "Gold",
            MetalType::Silver => "Silver",
        }
    }

    /// Storage code, as written to the database
    pub fn code(&self) -> &'static str {
        match self {
            MetalType::Gold => "GOLD",
            MetalType::Silver => "SILVER",
        }
    }
}

impl fmt::Display for MetalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for MetalType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GOLD" => Ok(MetalType::Gold),
            "SILVER" => Ok(MetalType::Silver),
            _ => Err(format!("Invalid metal type: {}", s)),
        }
    }
}
