//! Data models for estimation inputs and results

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::factors::{DEFAULT_PRICE_PER_KWH, DEFAULT_REFRIGERANT_GWP};

/// Input fidelity level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Monthly electricity bill only
    #[default]
    Quick,
    /// Itemized utility, vehicle, fuel and refrigerant data
    Detail,
}

impl Mode {
    /// Nominal accuracy advertised for the mode, in percent
    pub fn accuracy_pct(self) -> u8 {
        match self {
            Mode::Quick => 80,
            Mode::Detail => 95,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Quick => write!(f, "Quick ({}%)", self.accuracy_pct()),
            Mode::Detail => write!(f, "Detail ({}%)", self.accuracy_pct()),
        }
    }
}

/// Activity figures supplied by the user.
///
/// `None` means "not provided" and is distinct from `Some(0.0)`: an explicit
/// zero kWh still beats the monthly bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimationInput {
    pub mode: Mode,
    pub monthly_bill: Option<f64>,
    pub price_per_kwh: f64,
    pub annual_kwh: Option<f64>,
    pub car_count: f64,
    pub motorcycles: f64,
    pub gasoline_liters_year: Option<f64>,
    pub diesel_liters_year: Option<f64>,
    pub refrigerant_leak_kg: f64,
    pub refrigerant_gwp: f64,
    pub include_scope3: bool,
    pub water_m3_year: f64,
    pub waste_ton_year: f64,
    pub use_rule_of_thumb: bool,
}

impl Default for EstimationInput {
    fn default() -> Self {
        Self {
            mode: Mode::Quick,
            monthly_bill: None,
            price_per_kwh: DEFAULT_PRICE_PER_KWH,
            annual_kwh: None,
            car_count: 0.0,
            motorcycles: 0.0,
            gasoline_liters_year: None,
            diesel_liters_year: None,
            refrigerant_leak_kg: 0.0,
            refrigerant_gwp: DEFAULT_REFRIGERANT_GWP,
            include_scope3: false,
            water_m3_year: 0.0,
            waste_ton_year: 0.0,
            use_rule_of_thumb: false,
        }
    }
}

impl EstimationInput {
    /// Bill-only input with the rule-of-thumb policy enabled
    pub fn quick(monthly_bill: Option<f64>) -> Self {
        Self {
            mode: Mode::Quick,
            monthly_bill,
            use_rule_of_thumb: true,
            ..Self::default()
        }
    }

    /// Empty itemized input; callers fill in what they have
    pub fn detail() -> Self {
        Self {
            mode: Mode::Detail,
            use_rule_of_thumb: false,
            ..Self::default()
        }
    }

    /// Adds the minor Scope 3 figures
    pub fn with_scope3(mut self, water_m3_year: f64, waste_ton_year: f64) -> Self {
        self.include_scope3 = true;
        self.water_m3_year = water_m3_year;
        self.waste_ton_year = waste_ton_year;
        self
    }

    /// Check that every numeric field is finite and non-negative.
    ///
    /// The estimator assumes this holds; form layers call it before estimating.
    pub fn validate(&self) -> Result<(), InputError> {
        let fields: [(&'static str, Option<f64>); 11] = [
            ("monthly_bill", self.monthly_bill),
            ("price_per_kwh", Some(self.price_per_kwh)),
            ("annual_kwh", self.annual_kwh),
            ("car_count", Some(self.car_count)),
            ("motorcycles", Some(self.motorcycles)),
            ("gasoline_liters_year", self.gasoline_liters_year),
            ("diesel_liters_year", self.diesel_liters_year),
            ("refrigerant_leak_kg", Some(self.refrigerant_leak_kg)),
            ("refrigerant_gwp", Some(self.refrigerant_gwp)),
            ("water_m3_year", Some(self.water_m3_year)),
            ("waste_ton_year", Some(self.waste_ton_year)),
        ];

        for (field, value) in fields {
            let Some(value) = value else { continue };
            if !value.is_finite() {
                return Err(InputError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(InputError::Negative { field, value });
            }
        }
        Ok(())
    }
}

/// Percentage split of the Scope 1+2 total
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Shares {
    pub electricity: f64,
    pub vehicle: f64,
    pub refrigerant: f64,
}

/// Emissions breakdown, tonnes CO2e per year
///
/// Tonnages are rounded to 2 decimals, shares to 1 decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    pub mode: Mode,
    pub electricity: f64,
    pub vehicle: f64,
    pub refrigerant: f64,
    pub scope1: f64,
    pub total_s1s2: f64,
    pub scope3_minor: f64,
    pub total_with_s3: f64,
    pub shares: Shares,
    pub rule_of_thumb_applied: bool,
}
