//! Emission factors and fixed estimation constants

/// Grid electricity, kg CO2 per kWh
pub const GRID_KG_PER_KWH: f64 = 0.474;
/// Gasoline, kg CO2 per liter
pub const GASOLINE_KG_PER_L: f64 = 2.3;
/// Diesel, kg CO2 per liter
pub const DIESEL_KG_PER_L: f64 = 2.6;

pub const DEFAULT_KM_PER_YEAR: f64 = 15_000.0;
pub const DEFAULT_KM_PER_L: f64 = 10.0;

/// Fallback annual emissions of one generic car, tonnes CO2e (~3.45)
pub const CAR_TONNES_PER_YEAR: f64 =
    (DEFAULT_KM_PER_YEAR / DEFAULT_KM_PER_L) * GASOLINE_KG_PER_L / 1000.0;

/// A motorcycle counts as half a car in the count-based proxy
pub const MOTORCYCLE_EQUIVALENCE: f64 = 0.5;

/// Water, tonnes CO2e per m³
pub const WATER_TONNES_PER_M3: f64 = 0.0004;
/// Waste, tonnes CO2e per tonne
pub const WASTE_TONNES_PER_TONNE: f64 = 0.33;

pub const DEFAULT_PRICE_PER_KWH: f64 = 4.4;
pub const DEFAULT_REFRIGERANT_GWP: f64 = 1000.0;

/// Rule of thumb: Scope 1 is 10% of Scope 2
pub const RULE_OF_THUMB_RATIO: f64 = 1.1;
/// Share of the assumed Scope 1 attributed to vehicles (rest goes to refrigerant)
pub const RULE_OF_THUMB_VEHICLE_SPLIT: f64 = 0.9;

/// Documented average error of the estimate, in percent
pub const DOCUMENTED_MARGIN_PCT: f64 = 10.0;

/// One row of the factor table shown by the `factors` command
#[derive(Debug, Clone, Copy)]
pub struct FactorRow {
    pub name: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

/// All factors used by the estimator, in display order
pub fn factor_table() -> Vec<FactorRow> {
    vec![
        FactorRow {
            name: "grid electricity",
            value: GRID_KG_PER_KWH,
            unit: "kg CO2/kWh",
        },
        FactorRow {
            name: "gasoline",
            value: GASOLINE_KG_PER_L,
            unit: "kg CO2/L",
        },
        FactorRow {
            name: "diesel",
            value: DIESEL_KG_PER_L,
            unit: "kg CO2/L",
        },
        FactorRow {
            name: "default distance",
            value: DEFAULT_KM_PER_YEAR,
            unit: "km/year",
        },
        FactorRow {
            name: "default economy",
            value: DEFAULT_KM_PER_L,
            unit: "km/L",
        },
        FactorRow {
            name: "car (fallback)",
            value: CAR_TONNES_PER_YEAR,
            unit: "t CO2e/year",
        },
        FactorRow {
            name: "motorcycle equivalence",
            value: MOTORCYCLE_EQUIVALENCE,
            unit: "car",
        },
        FactorRow {
            name: "water",
            value: WATER_TONNES_PER_M3,
            unit: "t CO2e/m3",
        },
        FactorRow {
            name: "waste",
            value: WASTE_TONNES_PER_TONNE,
            unit: "t CO2e/t",
        },
    ]
}
