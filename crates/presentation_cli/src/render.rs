//! Plain-text rendering of estimates, catalogs and comparisons

use std::fmt::Write;

use application::{Comparison, ProjectCalculator};
use domain::{
    TransportEstimate,
    value_objects::{Facility, VehicleClass},
};

pub fn vehicles() -> String {
    let mut out = String::from("Road vehicle classes (kg CO2 per km and tonne of cargo):\n");
    for class in VehicleClass::ALL {
        let _ = writeln!(
            out,
            "  {:<16} {:>6.3}  {}  [--vehicle {}]",
            class.label(),
            class.co2_kg_per_km(),
            class.description(),
            class.slug()
        );
    }
    out
}

pub fn facilities() -> String {
    let mut out = String::from("Production facilities:\n");
    for facility in Facility::ALL {
        let _ = writeln!(
            out,
            "  {:<18} {}  ({})",
            facility.name(),
            facility.address(),
            facility.description()
        );
    }
    out
}

/// Summary, per-leg waypoints and map centre
pub fn estimate(estimate: &TransportEstimate) -> String {
    if estimate.is_empty() {
        return "No route could be calculated between the given locations.".to_string();
    }

    let mut out = estimate.format_summary();
    let waypoints = estimate.waypoints();
    let _ = write!(
        out,
        "\nStart: {}\nDestination: {}",
        waypoints.start, waypoints.destination
    );
    if let Some((departure, arrival)) = waypoints.ports {
        let _ = write!(out, "\nPorts: {departure} -> {arrival}");
    }
    let _ = write!(out, "\nMap centre: {}", waypoints.map_center());
    out
}

/// Indented list of values, or a note when empty
pub fn listing(title: &str, values: &[String]) -> String {
    if values.is_empty() {
        return format!("{title}: none");
    }
    let mut out = format!("{title}:");
    for value in values {
        let _ = write!(out, "\n  {value}");
    }
    out
}

/// Category table with one row per product and a total column
pub fn comparison(comparison: &Comparison) -> String {
    let label_width = comparison
        .chart
        .iter()
        .map(|series| series.label.len())
        .max()
        .unwrap_or(0)
        .max("Product".len());

    let mut out = format!("{:<label_width$}", "Product");
    for category in &comparison.categories {
        let _ = write!(out, " {category:>10}");
    }
    let _ = write!(out, " {:>10}", "Total");

    for series in &comparison.chart {
        let _ = write!(out, "\n{:<label_width$}", series.label);
        for (_, value) in &series.values {
            match value {
                Some(v) => {
                    let _ = write!(out, " {v:>10.3}");
                },
                None => {
                    let _ = write!(out, " {:>10}", "-");
                },
            }
        }
        let _ = write!(out, " {:>10.3}", series.total);
    }
    out
}

/// Project header, line items newest first, total and budget
pub fn project(calc: &ProjectCalculator) -> String {
    let details = calc.details();
    let mut out = format!(
        "Project: {} | Company: {} | Location: {}",
        or_dash(&details.name),
        or_dash(&details.company),
        or_dash(&details.location)
    );

    if calc.items().is_empty() {
        out.push_str("\nNo products added to the project yet.");
    }
    for (i, item) in calc.items().iter().enumerate() {
        let _ = write!(out, "\n{:>3}. {}", i + 1, item.format_line());
    }
    let _ = write!(out, "\nTotal Project CO2 (A1-A3): {:.0} kg CO2eq.", calc.total_co2_kg());

    if let Some(status) = calc.budget_status() {
        let _ = write!(
            out,
            "\nBudget Remaining: {:.0} kg CO2eq.{}\nBudget Usage: {:.1}%",
            status.remaining_kg,
            if status.is_over_budget() { " (over budget)" } else { "" },
            status.usage_fraction * 100.0
        );
    }
    out
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
