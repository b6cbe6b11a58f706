//! Presentation of estimation results

use crate::factors::DOCUMENTED_MARGIN_PCT;
use crate::models::{EstimationResult, Mode, Shares};

impl std::fmt::Display for EstimationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Emission Summary ({}) ===", self.mode)?;
        writeln!(f)?;

        writeln!(f, "{:<24} {:>12}", "Source", "t CO2e/year")?;
        writeln!(f, "{}", "-".repeat(37))?;
        table_row(f, "Scope 2 electricity", self.electricity)?;
        table_row(f, "Scope 1 vehicles", self.vehicle)?;
        table_row(f, "Scope 1 refrigerant", self.refrigerant)?;
        table_row(f, "Scope 1 subtotal", self.scope1)?;
        table_row(f, "Scope 1 + 2", self.total_s1s2)?;
        if self.scope3_minor > 0.0 {
            table_row(f, "Scope 3 (water, waste)", self.scope3_minor)?;
            table_row(f, "Total incl. Scope 3", self.total_with_s3)?;
        }
        writeln!(f)?;

        writeln!(f, "Shares of Scope 1 + 2:")?;
        writeln!(f, "  Electricity: {:>5.1}%", self.shares.electricity)?;
        writeln!(f, "  Vehicles:    {:>5.1}%", self.shares.vehicle)?;
        writeln!(f, "  Refrigerant: {:>5.1}%", self.shares.refrigerant)?;
        writeln!(f, "  {}", share_bar(&self.shares, 40))?;

        if self.rule_of_thumb_applied {
            writeln!(f)?;
            writeln!(f, "Scope 1 assumed at 10% of electricity (rule of thumb).")?;
        }

        Ok(())
    }
}

fn table_row(f: &mut std::fmt::Formatter<'_>, label: &str, tonnes: f64) -> std::fmt::Result {
    writeln!(f, "{label:<24} {tonnes:>12.2}")
}

/// Render the shares as a fixed-width bar: E = electricity, V = vehicles,
/// R = refrigerant
pub fn share_bar(shares: &Shares, width: usize) -> String {
    let cells = |pct: f64| ((pct / 100.0) * width as f64).round() as usize;

    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    bar.push_str(&"E".repeat(cells(shares.electricity)));
    bar.push_str(&"V".repeat(cells(shares.vehicle)));
    bar.push_str(&"R".repeat(cells(shares.refrigerant)));

    // Independent rounding can over- or under-fill by a cell
    let filled = bar.len() - 1;
    if filled > width {
        bar.truncate(width + 1);
    } else {
        bar.push_str(&" ".repeat(width - filled));
    }
    bar.push(']');
    bar
}

/// Narrative summary of a result, one statement per line
pub fn narrative(result: &EstimationResult) -> String {
    let mut lines = Vec::new();

    if result.scope3_minor > 0.0 {
        lines.push(format!(
            "Total emissions: {:.2} t CO2e/year (including Scope 3: {:.2} t)",
            result.total_with_s3, result.scope3_minor
        ));
    } else {
        lines.push(format!("Total emissions: {:.2} t CO2e/year", result.total_s1s2));
    }

    lines.push(format!(
        "Electricity accounts for about {:.1}%, vehicles about {:.1}%, refrigerant about {:.1}%.",
        result.shares.electricity, result.shares.vehicle, result.shares.refrigerant
    ));
    lines.push(format!(
        "The model follows the 80/20 rule, with an average error of ±{:.0}%.",
        DOCUMENTED_MARGIN_PCT
    ));

    if result.mode == Mode::Quick {
        lines.push(format!(
            "Supplying full utility bills and fuel records raises accuracy to {}%.",
            Mode::Detail.accuracy_pct()
        ));
    }

    lines.join("\n")
}
