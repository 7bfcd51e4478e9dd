//! Terminal rendering of summaries and histograms.

use pi_report::{Histogram, SummaryReport};
use std::fmt::Write;

/// Width of the longest histogram bar, in characters.
const BAR_WIDTH: usize = 50;

/// Formats an integer with comma thousands separators.
pub fn format_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Column headers and cell values of one summary row.
fn summary_cells(report: &SummaryReport) -> [(String, String); 9] {
    let low_label = format!("{} perc.", trim_float(100.0 * (1.0 - report.confidence) / 2.0));
    let high_label = format!(
        "{} perc.",
        trim_float(100.0 * (1.0 - (1.0 - report.confidence) / 2.0))
    );
    [
        ("Trials".to_string(), format_thousands(report.trials)),
        ("Average".to_string(), format!("{:.4}", report.mean)),
        ("St. Dev".to_string(), format!("{:.4}", report.std_dev)),
        ("Low Bound".to_string(), format!("{:.4}", report.ci_low)),
        ("Upper Bound".to_string(), format!("{:.4}", report.ci_high)),
        ("Width".to_string(), format!("{:.4}", report.ci_width)),
        (low_label, format!("{:.4}", report.p_low)),
        (high_label, format!("{:.4}", report.p_high)),
        ("Width_p".to_string(), format!("{:.4}", report.p_width)),
    ]
}

/// Formats a percentile level without trailing zeros (2.5, 97.5, 5).
fn trim_float(value: f64) -> String {
    let text = format!("{:.3}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Renders one or more summaries as a box-drawn table, one row per report.
pub fn render_summary_table(reports: &[SummaryReport]) -> String {
    let Some(first) = reports.first() else {
        return String::new();
    };
    let headers: Vec<String> = summary_cells(first).into_iter().map(|(h, _)| h).collect();
    let rows: Vec<Vec<String>> = reports
        .iter()
        .map(|r| summary_cells(r).into_iter().map(|(_, v)| v).collect())
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, h)| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}\n", left, segments.join(mid), right)
    };
    let line = |cells: &[String]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!(" {:>width$} ", c, width = w))
            .collect();
        format!("│{}│\n", padded.join("│"))
    };

    let mut out = rule("┌", "┬", "┐");
    out.push_str(&line(&headers[..]));
    out.push_str(&rule("├", "┼", "┤"));
    for row in &rows {
        out.push_str(&line(row.as_slice()));
    }
    out.push_str(&rule("└", "┴", "┘"));
    out
}

/// Renders a histogram as horizontal bars labelled by left bin edge.
pub fn render_histogram(hist: &Histogram) -> String {
    let peak = hist.densities.iter().cloned().fold(0.0_f64, f64::max);
    let mut out = String::from("Estimated pi value (density)\n");

    for (edge, density) in hist.bars() {
        let len = if peak > 0.0 {
            ((density / peak) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "{:>8.3} │{:<width$} {:.3}",
            edge,
            "█".repeat(len),
            density,
            width = BAR_WIDTH
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pi_report::{histogram, summarize};

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(100), "100");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(10_000_000), "10,000,000");
        assert_eq!(format_thousands(123_456), "123,456");
    }

    #[test]
    fn test_trim_float() {
        assert_eq!(trim_float(2.5), "2.5");
        assert_eq!(trim_float(97.5), "97.5");
        assert_eq!(trim_float(5.0), "5");
    }

    #[test]
    fn test_summary_table_contents() {
        let report = summarize(&[3.0, 3.2, 3.1, 3.3], 0.95).unwrap();
        let table = render_summary_table(&[report]);

        assert!(table.contains("Average"));
        assert!(table.contains("2.5 perc."));
        assert!(table.contains("97.5 perc."));
        assert!(table.contains("3.1500"));
        assert_eq!(table.lines().count(), 5);
    }

    #[test]
    fn test_summary_table_rows_per_report() {
        let a = summarize(&[3.0, 3.2], 0.95).unwrap();
        let b = summarize(&[3.1, 3.3], 0.95).unwrap();
        assert_eq!(render_summary_table(&[a, b]).lines().count(), 6);
        assert!(render_summary_table(&[]).is_empty());
    }

    #[test]
    fn test_histogram_rendering() {
        let hist = histogram(&[0.0, 1.0, 1.0, 2.0], 2).unwrap();
        let text = render_histogram(&hist);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        // The densest bin gets the full bar
        assert!(lines[2].contains(&"█".repeat(BAR_WIDTH)));
        assert!(lines[1].contains("0.250"));
    }
}
