//! Text rendering of area reports
//!
//! Display precision lives here, not in the converter: m² grouped in
//! thousands, hectares and acres at 2 decimals, km² at 4, unless the
//! configuration overrides the decimal count for all derived units.

use crate::geometry::AreaReport;
use crate::session::SessionEvent;

/// Render a report with the default per-unit precision
pub fn format_report(report: &AreaReport) -> String {
    format_report_with_precision(report, None)
}

/// Render a report as an aligned multi-line table
///
/// `precision`, when set, replaces the per-unit decimal defaults for
/// hectares, km² and acres; m² stays a grouped whole number.
pub fn format_report_with_precision(report: &AreaReport, precision: Option<u8>) -> String {
    let hectares_dp = precision.map_or(2, usize::from);
    let square_km_dp = precision.map_or(4, usize::from);
    let acres_dp = precision.map_or(2, usize::from);

    format!(
        "Square Meters:     {} m²\n\
         Hectares:          {:.ha$} ha\n\
         Square Kilometers: {:.km$} km²\n\
         Acres:             {:.ac$} acres",
        group_thousands(report.square_meters),
        report.hectares,
        report.square_kilometers,
        report.acres,
        ha = hectares_dp,
        km = square_km_dp,
        ac = acres_dp
    )
}

/// Render a session event: a report table, or a degraded-state message
/// with the last good report left in place
pub fn format_event(event: &SessionEvent) -> String {
    match event {
        SessionEvent::Report(report) => format_report(report),
        SessionEvent::Degraded {
            message,
            last_report,
        } => match last_report {
            Some(report) => format!(
                "Area unavailable: {}\nShowing last valid report:\n{}",
                message,
                format_report(report)
            ),
            None => format!("Area unavailable: {}", message),
        },
    }
}

/// Group the integer part of a non-negative value in thousands
fn group_thousands(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    let mut grouped = String::with_capacity(rounded.len() + rounded.len() / 3);

    for (i, c) in rounded.chars().enumerate() {
        if i > 0 && (rounded.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Ring;
    use crate::geometry::report_from_raw;

    fn sample_report() -> AreaReport {
        let ring = Ring::from_latlon(&[(51.509, -0.08), (51.503, -0.06), (51.51, -0.047)]);
        report_from_raw(&ring, 2_000_000.0).unwrap()
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(2_000_000.0), "2,000,000");
        assert_eq!(group_thousands(2_000_000.4), "2,000,000");
    }

    #[test]
    fn test_format_report_precision() {
        let rendered = format_report(&sample_report());

        assert!(rendered.contains("2,000,000 m²"));
        assert!(rendered.contains("200.00 ha"));
        assert!(rendered.contains("2.0000 km²"));
        assert!(rendered.contains("494.21 acres"));
    }

    #[test]
    fn test_format_report_precision_override() {
        let rendered = format_report_with_precision(&sample_report(), Some(6));

        assert!(rendered.contains("200.000000 ha"));
        assert!(rendered.contains("2.000000 km²"));
        assert!(rendered.contains("494.210326 acres"));
        // m² stays a grouped whole number regardless of the override
        assert!(rendered.contains("2,000,000 m²"));
    }

    #[test]
    fn test_format_report_zero_precision() {
        let rendered = format_report_with_precision(&sample_report(), Some(0));

        assert!(rendered.contains("200 ha"));
        assert!(rendered.contains("2 km²"));
        assert!(rendered.contains("494 acres"));
    }

    #[test]
    fn test_format_degraded_event_without_report() {
        let event = SessionEvent::Degraded {
            message: "invalid geometry".to_string(),
            last_report: None,
        };
        assert_eq!(format_event(&event), "Area unavailable: invalid geometry");
    }

    #[test]
    fn test_format_degraded_event_keeps_last_report() {
        let event = SessionEvent::Degraded {
            message: "invalid geometry".to_string(),
            last_report: Some(sample_report()),
        };

        let rendered = format_event(&event);
        assert!(rendered.contains("Area unavailable"));
        assert!(rendered.contains("last valid report"));
        assert!(rendered.contains("2,000,000 m²"));
    }
}
