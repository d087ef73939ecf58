//! Output formatting for query results

use chrono::TimeDelta;

/// One finished query with its timing
pub struct QueryReport {
    /// Seed interpretation the query ran under
    pub mode_label: &'static str,
    /// The minimum reachable value
    pub minimum: u64,
    /// Wall-clock time spent parsing the almanac
    pub parse_duration: TimeDelta,
    /// Wall-clock time spent on the query itself
    pub solve_duration: TimeDelta,
}

/// Output formatter for query results
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Format and print a finished query
    pub fn print_report(&self, report: &QueryReport) {
        if self.quiet {
            println!("{}", report.minimum);
        } else {
            println!(
                "{}: {} (parse: {}, solve: {})",
                report.mode_label,
                report.minimum,
                format_duration(report.parse_duration),
                format_duration(report.solve_duration)
            );
        }
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_scaling() {
        assert_eq!(format_duration(TimeDelta::microseconds(750)), "750µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1_500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::seconds(2)), "2.00s");
    }

    #[test]
    fn test_negative_duration() {
        assert_eq!(format_duration(TimeDelta::microseconds(-750)), "-750µs");
    }
}
