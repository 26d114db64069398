//! Rule-of-thumb quantities from floor area.
//!
//! Assumes a roughly square layout with 2.5 m ceilings and one door
//! every 17 m².

use crate::error::PricingError;
use crate::models::{EstimateConfidence, QuantityEstimate};
use crate::money::round_money;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

const CEILING_HEIGHT: Decimal = Decimal::from_parts(25, 0, 0, false, 1);
const AREA_PER_DOOR: u32 = 17;

pub fn estimate_quantities(floor_area: Decimal) -> Result<QuantityEstimate, PricingError> {
    if floor_area <= Decimal::ZERO {
        return Err(PricingError::InvalidArea(floor_area));
    }

    let side = floor_area.sqrt().ok_or(PricingError::InvalidArea(floor_area))?;
    let perimeter = side * Decimal::from(4);

    let doors = (floor_area / Decimal::from(AREA_PER_DOOR))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(u32::MAX)
        .max(1);

    Ok(QuantityEstimate {
        floor_area,
        wall_area: round_money(perimeter * CEILING_HEIGHT),
        skirting_length: round_money(perimeter),
        door_count: doors,
        confidence: EstimateConfidence::Low,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_square_area_estimate() {
        let estimate = estimate_quantities(Decimal::from(100)).unwrap();

        assert_eq!(estimate.skirting_length, Decimal::from(40));
        assert_eq!(estimate.wall_area, Decimal::from(100));
        assert_eq!(estimate.door_count, 6);
        assert_eq!(estimate.confidence, EstimateConfidence::Low);
    }

    #[test]
    fn test_small_area_has_at_least_one_door() {
        let estimate = estimate_quantities(Decimal::from_str("4").unwrap()).unwrap();

        assert_eq!(estimate.door_count, 1);
        assert_eq!(estimate.skirting_length, Decimal::from(8));
        assert_eq!(estimate.wall_area, Decimal::from(20));
    }

    #[test]
    fn test_rejects_non_positive_area() {
        assert_eq!(
            estimate_quantities(Decimal::ZERO),
            Err(PricingError::InvalidArea(Decimal::ZERO))
        );
    }
}
