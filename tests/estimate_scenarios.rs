//! End-to-end estimation scenarios

use emission_engine::{EstimationInput, Mode, Shares, estimate};

#[test]
fn kwh_wins_over_bill() {
    let input = EstimationInput {
        annual_kwh: Some(1000.0),
        monthly_bill: Some(5000.0),
        price_per_kwh: 4.4,
        ..EstimationInput::detail()
    };
    let result = estimate(&input);
    assert_eq!(result.electricity, 0.47);
    assert_eq!(result.total_s1s2, 0.47);
    assert_eq!(result.shares.electricity, 100.0);
}

#[test]
fn bill_derived_electricity() {
    let input = EstimationInput {
        monthly_bill: Some(2200.0),
        ..EstimationInput::detail()
    };
    assert_eq!(estimate(&input).electricity, 2.84);
}

#[test]
fn fuel_volume_overrides_vehicle_count() {
    let input = EstimationInput {
        car_count: 5.0,
        gasoline_liters_year: Some(1000.0),
        ..EstimationInput::detail()
    };
    let result = estimate(&input);
    assert_eq!(result.vehicle, 2.3);
    assert_eq!(result.scope1, 2.3);
}

#[test]
fn gasoline_and_diesel_are_summed() {
    let input = EstimationInput {
        car_count: 3.0,
        gasoline_liters_year: Some(1000.0),
        diesel_liters_year: Some(1000.0),
        ..EstimationInput::detail()
    };
    let result = estimate(&input);
    assert_eq!(result.vehicle, 4.9);
    assert_eq!(result.scope1, 4.9);
}

#[test]
fn vehicle_count_fallback() {
    let input = EstimationInput {
        car_count: 2.0,
        motorcycles: 4.0,
        ..EstimationInput::detail()
    };
    assert_eq!(estimate(&input).vehicle, 13.8);
}

#[test]
fn quick_mode_rule_of_thumb() {
    let result = estimate(&EstimationInput::quick(Some(4400.0)));
    assert_eq!(result.mode, Mode::Quick);
    assert!(result.rule_of_thumb_applied);
    assert_eq!(result.electricity, 5.69);
    assert_eq!(result.total_s1s2, 6.26);
    assert_eq!(result.scope1, 0.57);
    assert_eq!(result.vehicle, 0.51);
    assert_eq!(result.refrigerant, 0.06);
    assert_eq!(result.shares.electricity, 90.9);
    assert_eq!(result.shares.vehicle, 8.2);
    assert_eq!(result.shares.refrigerant, 0.9);
}

#[test]
fn all_zero_input_has_zero_shares() {
    let input = EstimationInput {
        annual_kwh: Some(0.0),
        gasoline_liters_year: Some(0.0),
        diesel_liters_year: Some(0.0),
        refrigerant_gwp: 0.0,
        price_per_kwh: 0.0,
        ..EstimationInput::detail()
    };
    let result = estimate(&input);
    assert_eq!(result.shares, Shares::default());
    assert_eq!(result.total_with_s3, 0.0);
}

#[test]
fn scope3_adds_to_grand_total_only() {
    let base = EstimationInput {
        monthly_bill: Some(2200.0),
        car_count: 1.0,
        refrigerant_leak_kg: 1.0,
        ..EstimationInput::detail()
    };
    let without = estimate(&base);
    let with = estimate(&base.clone().with_scope3(1000.0, 2.0));

    assert_eq!(with.scope3_minor, 1.06);
    assert_eq!(with.total_s1s2, without.total_s1s2);
    assert_eq!(with.shares, without.shares);
    assert!((with.total_with_s3 - without.total_with_s3 - 1.06).abs() < 0.011);
    assert_eq!(without.scope3_minor, 0.0);
}

#[test]
fn scope3_figures_ignored_without_flag() {
    let input = EstimationInput {
        water_m3_year: 1000.0,
        waste_ton_year: 2.0,
        ..EstimationInput::detail()
    };
    assert_eq!(estimate(&input).total_with_s3, 0.0);
}

#[test]
fn estimate_is_deterministic() {
    let input = EstimationInput {
        monthly_bill: Some(3100.0),
        car_count: 3.0,
        diesel_liters_year: Some(420.0),
        refrigerant_leak_kg: 0.7,
        ..EstimationInput::detail()
    }
    .with_scope3(55.0, 0.4);

    let first = serde_json::to_string(&estimate(&input)).unwrap();
    let second = serde_json::to_string(&estimate(&input)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn outputs_are_finite_and_non_negative() {
    let values = [None, Some(0.0), Some(0.5), Some(1250.0)];

    for kwh in values {
        for bill in values {
            for fuel in values {
                for rule_of_thumb in [false, true] {
                    let input = EstimationInput {
                        annual_kwh: kwh,
                        monthly_bill: bill,
                        gasoline_liters_year: fuel,
                        car_count: 1.0,
                        refrigerant_leak_kg: 0.2,
                        use_rule_of_thumb: rule_of_thumb,
                        ..EstimationInput::detail()
                    }
                    .with_scope3(10.0, 0.1);
                    let r = estimate(&input);

                    for value in [
                        r.electricity,
                        r.vehicle,
                        r.refrigerant,
                        r.scope1,
                        r.total_s1s2,
                        r.scope3_minor,
                        r.total_with_s3,
                        r.shares.electricity,
                        r.shares.vehicle,
                        r.shares.refrigerant,
                    ] {
                        assert!(value.is_finite() && value >= 0.0, "{input:?} -> {r:?}");
                    }

                    let shares = r.shares;
                    let share_sum = shares.electricity + shares.vehicle + shares.refrigerant;
                    assert!((share_sum - 100.0).abs() <= 0.16, "shares {shares:?}");
                }
            }
        }
    }
}
