//! Work categories and quality tiers.

use serde::{Deserialize, Serialize};

/// Trade a line item belongs to.
///
/// Declaration order is the display order used by category breakdowns, so
/// `Ord` is derived and must not be reordered casually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkCategory {
    Masonry,
    Plumbing,
    Electrical,
    Kitchen,
    Carpentry,
    Package,
}

impl WorkCategory {
    pub const ALL: [WorkCategory; 6] = [
        WorkCategory::Masonry,
        WorkCategory::Plumbing,
        WorkCategory::Electrical,
        WorkCategory::Kitchen,
        WorkCategory::Carpentry,
        WorkCategory::Package,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkCategory::Masonry => "masonry",
            WorkCategory::Plumbing => "plumbing",
            WorkCategory::Electrical => "electrical",
            WorkCategory::Kitchen => "kitchen",
            WorkCategory::Carpentry => "carpentry",
            WorkCategory::Package => "package",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WorkCategory::Masonry => "Masonry",
            WorkCategory::Plumbing => "Plumbing",
            WorkCategory::Electrical => "Electrical",
            WorkCategory::Kitchen => "Kitchen",
            WorkCategory::Carpentry => "Carpentry",
            WorkCategory::Package => "Packages",
        }
    }
}

impl std::fmt::Display for WorkCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for WorkCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "masonry" => Ok(WorkCategory::Masonry),
            "plumbing" => Ok(WorkCategory::Plumbing),
            "electrical" => Ok(WorkCategory::Electrical),
            "kitchen" => Ok(WorkCategory::Kitchen),
            "carpentry" => Ok(WorkCategory::Carpentry),
            "package" => Ok(WorkCategory::Package),
            _ => Err(format!("Invalid work category: {}", s)),
        }
    }
}

/// Material and finish grade selecting a price column.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    Basic,
    #[default]
    Standard,
    Premium,
}

impl QualityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityTier::Basic => "basic",
            QualityTier::Standard => "standard",
            QualityTier::Premium => "premium",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            QualityTier::Basic => "Basic",
            QualityTier::Standard => "Standard",
            QualityTier::Premium => "Premium",
        }
    }
}

impl std::fmt::Display for QualityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for QualityTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(QualityTier::Basic),
            "standard" => Ok(QualityTier::Standard),
            "premium" => Ok(QualityTier::Premium),
            _ => Err(format!("Invalid quality tier: {}", s)),
        }
    }
}
