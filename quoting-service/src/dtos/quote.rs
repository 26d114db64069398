use crate::models::{
    ItemSelection, PackageSelection, ProjectParameters, PropertyCondition, PropertyType,
    QualityTier, QuoteRequest, QuoteSummary, QuoteValidation, ValidationWarning, WorkCategory,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

const MAX_AREA: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);
const MAX_QUANTITY: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

fn validate_area(area: &Decimal) -> Result<(), ValidationError> {
    if *area <= Decimal::ZERO || *area > MAX_AREA {
        let mut err = ValidationError::new("area_range");
        err.message = Some("Area must be greater than 0 and at most 10000 m²".into());
        return Err(err);
    }
    Ok(())
}

fn validate_quantity(quantity: &Decimal) -> Result<(), ValidationError> {
    if *quantity <= Decimal::ZERO || *quantity > MAX_QUANTITY {
        let mut err = ValidationError::new("quantity_range");
        err.message = Some("Quantity must be greater than 0 and at most 1000000".into());
        return Err(err);
    }
    Ok(())
}

fn validate_has_selection(req: &CreateQuoteRequest) -> Result<(), ValidationError> {
    if req.items.is_empty() && req.packages.is_empty() {
        let mut err = ValidationError::new("no_selection");
        err.message = Some("At least one item or package must be selected".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProjectDto {
    pub property_type: PropertyType,

    #[validate(custom(function = "validate_area"))]
    pub floor_area: Decimal,

    #[serde(default)]
    pub quality: QualityTier,

    #[serde(default)]
    pub condition: PropertyCondition,

    #[serde(default)]
    pub primary_residence: bool,
}

impl From<ProjectDto> for ProjectParameters {
    fn from(dto: ProjectDto) -> Self {
        ProjectParameters::new(dto.property_type, dto.floor_area)
            .with_quality(dto.quality)
            .with_condition(dto.condition)
            .with_primary_residence(dto.primary_residence)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ItemSelectionDto {
    pub category: WorkCategory,

    #[validate(length(min = 1, message = "Item code is required"))]
    pub code: String,

    #[validate(custom(function = "validate_quantity"))]
    pub quantity: Decimal,

    pub quality: Option<QualityTier>,

    #[serde(default = "default_true")]
    pub apply_markup: bool,
}

fn default_true() -> bool {
    true
}

impl From<ItemSelectionDto> for ItemSelection {
    fn from(dto: ItemSelectionDto) -> Self {
        Self {
            category: dto.category,
            code: dto.code,
            quantity: dto.quantity,
            quality: dto.quality,
            apply_markup: dto.apply_markup,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PackageSelectionDto {
    #[validate(length(min = 1, message = "Package code is required"))]
    pub code: String,

    pub quality: Option<QualityTier>,

    #[validate(custom(function = "validate_area"))]
    pub area: Option<Decimal>,
}

impl From<PackageSelectionDto> for PackageSelection {
    fn from(dto: PackageSelectionDto) -> Self {
        Self {
            code: dto.code,
            quality: dto.quality,
            area: dto.area,
        }
    }
}

/// Body of `POST /v1/quotes`.
///
/// Out-of-range discounts are accepted here; the quote clamps them and
/// reports a warning.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_has_selection"))]
pub struct CreateQuoteRequest {
    #[validate(nested)]
    pub project: ProjectDto,

    #[serde(default)]
    #[validate(nested)]
    pub items: Vec<ItemSelectionDto>,

    #[serde(default)]
    #[validate(nested)]
    pub packages: Vec<PackageSelectionDto>,

    #[serde(default)]
    pub discount_percentage: Decimal,
}

impl From<CreateQuoteRequest> for QuoteRequest {
    fn from(req: CreateQuoteRequest) -> Self {
        Self {
            project: req.project.into(),
            items: req.items.into_iter().map(Into::into).collect(),
            packages: req.packages.into_iter().map(Into::into).collect(),
            discount_percentage: req.discount_percentage,
        }
    }
}

/// Body of `POST /v1/quotes/quick`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuickQuoteRequest {
    #[validate(nested)]
    pub project: ProjectDto,

    #[validate(length(min = 1, message = "Package code is required"))]
    pub package_code: String,
}

/// Body of `POST /v1/quotes/compare`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CompareRequest {
    #[validate(nested)]
    pub project: ProjectDto,

    #[validate(length(min = 1, message = "At least one item is required"), nested)]
    pub items: Vec<ItemSelectionDto>,

    #[validate(length(min = 1, message = "Package code is required"))]
    pub package_code: String,

    /// Defaults to the project tier.
    pub quality: Option<QualityTier>,

    /// Defaults to the project floor area.
    #[validate(custom(function = "validate_area"))]
    pub area: Option<Decimal>,
}

/// Body of `POST /v1/estimates`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EstimateRequest {
    #[validate(custom(function = "validate_area"))]
    pub floor_area: Decimal,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    #[serde(flatten)]
    pub summary: QuoteSummary,
    pub warnings: Vec<ValidationWarning>,
    pub validation: QuoteValidation,
}
