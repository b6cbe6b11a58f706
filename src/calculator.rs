//! Emission estimation logic

use tracing::debug;

use crate::factors::{
    CAR_TONNES_PER_YEAR, DIESEL_KG_PER_L, GASOLINE_KG_PER_L, GRID_KG_PER_KWH,
    MOTORCYCLE_EQUIVALENCE, RULE_OF_THUMB_RATIO, RULE_OF_THUMB_VEHICLE_SPLIT,
    WASTE_TONNES_PER_TONNE, WATER_TONNES_PER_M3,
};
use crate::models::{EstimationInput, EstimationResult, Shares};

/// Scope 2 emissions from purchased electricity, tonnes CO2e
///
/// Direct annual kWh wins over a bill-derived figure, even when it is zero.
pub fn electricity_tonnes(
    annual_kwh: Option<f64>,
    monthly_bill: Option<f64>,
    price_per_kwh: f64,
) -> f64 {
    if let Some(kwh) = annual_kwh {
        return kwh * GRID_KG_PER_KWH / 1000.0;
    }
    match monthly_bill {
        Some(bill) if price_per_kwh > 0.0 => {
            let annual_kwh = (bill / price_per_kwh) * 12.0;
            annual_kwh * GRID_KG_PER_KWH / 1000.0
        }
        _ => 0.0,
    }
}

/// Scope 1 emissions from vehicles, tonnes CO2e
///
/// Any non-zero fuel volume replaces the vehicle-count proxy entirely.
pub fn vehicle_tonnes(
    car_count: f64,
    motorcycles: f64,
    gasoline_liters: Option<f64>,
    diesel_liters: Option<f64>,
) -> f64 {
    let gasoline = gasoline_liters.unwrap_or(0.0);
    let diesel = diesel_liters.unwrap_or(0.0);

    if gasoline != 0.0 || diesel != 0.0 {
        return gasoline * GASOLINE_KG_PER_L / 1000.0 + diesel * DIESEL_KG_PER_L / 1000.0;
    }

    let car_equivalents = car_count + motorcycles * MOTORCYCLE_EQUIVALENCE;
    car_equivalents * CAR_TONNES_PER_YEAR
}

/// Scope 1 emissions from refrigerant leaks, tonnes CO2e
pub fn refrigerant_tonnes(leak_kg: f64, gwp: f64) -> f64 {
    leak_kg * gwp / 1000.0
}

/// Minor Scope 3 add-on from water use and waste, tonnes CO2e
pub fn minor_scope3_tonnes(water_m3: f64, waste_tonnes: f64) -> f64 {
    water_m3 * WATER_TONNES_PER_M3 + waste_tonnes * WASTE_TONNES_PER_TONNE
}

/// Estimate annual emissions for the given activity figures.
///
/// Never fails: missing figures contribute nothing and a zero total yields
/// zero shares.
pub fn estimate(input: &EstimationInput) -> EstimationResult {
    let electricity = electricity_tonnes(
        input.annual_kwh,
        input.monthly_bill,
        input.price_per_kwh,
    );
    let mut vehicle = vehicle_tonnes(
        input.car_count,
        input.motorcycles,
        input.gasoline_liters_year,
        input.diesel_liters_year,
    );
    let mut refrigerant = refrigerant_tonnes(input.refrigerant_leak_kg, input.refrigerant_gwp);
    let mut scope1 = vehicle + refrigerant;
    let mut total = scope1 + electricity;

    let rule_of_thumb_applied = input.use_rule_of_thumb && electricity > 0.0;
    if rule_of_thumb_applied {
        total = electricity * RULE_OF_THUMB_RATIO;
        scope1 = total - electricity;
        vehicle = scope1 * RULE_OF_THUMB_VEHICLE_SPLIT;
        refrigerant = scope1 * (1.0 - RULE_OF_THUMB_VEHICLE_SPLIT);
    }

    let shares = Shares {
        electricity: round1(share_pct(electricity, total)),
        vehicle: round1(share_pct(vehicle, total)),
        refrigerant: round1(share_pct(refrigerant, total)),
    };

    let scope3_minor = if input.include_scope3 {
        minor_scope3_tonnes(input.water_m3_year, input.waste_ton_year)
    } else {
        0.0
    };

    debug!(
        mode = ?input.mode,
        kwh_given = input.annual_kwh.is_some(),
        bill_given = input.monthly_bill.is_some(),
        rule_of_thumb_applied,
        electricity,
        vehicle,
        refrigerant,
        scope3_minor,
        "estimated emissions"
    );

    EstimationResult {
        mode: input.mode,
        electricity: round2(electricity),
        vehicle: round2(vehicle),
        refrigerant: round2(refrigerant),
        scope1: round2(scope1),
        total_s1s2: round2(total),
        scope3_minor: round2(scope3_minor),
        total_with_s3: round2(total + scope3_minor),
        shares,
        rule_of_thumb_applied,
    }
}

fn share_pct(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}

/// Round on the exact decimal expansion, ties to even ("1.115" is 1.11)
fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

fn round1(value: f64) -> f64 {
    round_to(value, 1)
}
