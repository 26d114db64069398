//! Project parameters supplied by the form layer.

use super::QualityTier;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of property being renovated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Flat,
    House,
    Office,
    Commercial,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Flat => "flat",
            PropertyType::House => "house",
            PropertyType::Office => "office",
            PropertyType::Commercial => "commercial",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PropertyType::Flat => "Flat",
            PropertyType::House => "Detached house",
            PropertyType::Office => "Office",
            PropertyType::Commercial => "Commercial premises",
        }
    }

    /// Whether the property can be someone's home.
    pub fn is_residential(&self) -> bool {
        matches!(self, PropertyType::Flat | PropertyType::House)
    }
}

impl std::str::FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flat" => Ok(PropertyType::Flat),
            "house" => Ok(PropertyType::House),
            "office" => Ok(PropertyType::Office),
            "commercial" => Ok(PropertyType::Commercial),
            _ => Err(format!("Invalid property type: {}", s)),
        }
    }
}

/// Current state of the property. Worse states need more work per unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyCondition {
    New,
    #[default]
    Normal,
    Old,
    Derelict,
}

impl PropertyCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyCondition::New => "new",
            PropertyCondition::Normal => "normal",
            PropertyCondition::Old => "old",
            PropertyCondition::Derelict => "derelict",
        }
    }

    /// Price multiplier for individually priced work.
    pub fn factor(&self) -> Decimal {
        match self {
            PropertyCondition::New => Decimal::new(95, 2),
            PropertyCondition::Normal => Decimal::ONE,
            PropertyCondition::Old => Decimal::new(110, 2),
            PropertyCondition::Derelict => Decimal::new(125, 2),
        }
    }
}

impl std::str::FromStr for PropertyCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(PropertyCondition::New),
            "normal" => Ok(PropertyCondition::Normal),
            "old" => Ok(PropertyCondition::Old),
            "derelict" => Ok(PropertyCondition::Derelict),
            _ => Err(format!("Invalid property condition: {}", s)),
        }
    }
}

/// Property descriptor a quote is priced against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectParameters {
    pub property_type: PropertyType,
    pub floor_area: Decimal,
    #[serde(default)]
    pub quality: QualityTier,
    #[serde(default)]
    pub condition: PropertyCondition,
    #[serde(default)]
    pub primary_residence: bool,
}

impl ProjectParameters {
    pub fn new(property_type: PropertyType, floor_area: Decimal) -> Self {
        Self {
            property_type,
            floor_area,
            quality: QualityTier::default(),
            condition: PropertyCondition::default(),
            primary_residence: false,
        }
    }

    pub fn with_quality(mut self, quality: QualityTier) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_condition(mut self, condition: PropertyCondition) -> Self {
        self.condition = condition;
        self
    }

    pub fn with_primary_residence(mut self, primary_residence: bool) -> Self {
        self.primary_residence = primary_residence;
        self
    }
}
