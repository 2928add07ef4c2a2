//! Human-readable summary of a benchmark run.

use crate::results::ResultStore;
use std::fmt;
use std::io::{self, Write};

/// Qualitative latency bucket derived from a scenario's mean.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Excellent,
    Good,
    Fair,
    Slow,
}

impl Tier {
    /// Thresholds are strict upper bounds; a boundary mean falls into the
    /// faster tier (100.00 is `Good`, not `Excellent`).
    pub fn from_avg_ms(avg: f64) -> Self {
        if avg < 100.0 {
            Tier::Excellent
        } else if avg < 500.0 {
            Tier::Good
        } else if avg < 1000.0 {
            Tier::Fair
        } else {
            Tier::Slow
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tier::Excellent => "EXCELLENT",
            Tier::Good => "GOOD",
            Tier::Fair => "FAIR",
            Tier::Slow => "SLOW",
        };
        f.write_str(s)
    }
}

/// Writes the tiered summary for every stored scenario, in run order.
///
/// Values round to two decimal places here; the stored statistics keep full
/// precision. Scenarios that recorded no samples never made it into the
/// store, so they simply do not appear.
pub fn write_summary<W: Write>(out: &mut W, results: &ResultStore) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out, "PERFORMANCE TEST SUMMARY")?;
    writeln!(out, "{}", "=".repeat(60))?;

    if results.is_empty() {
        writeln!(out, "No test results available")?;
        return Ok(());
    }

    for (name, stats) in results.all() {
        writeln!(out)?;
        writeln!(out, "{}:", display_name(name))?;
        writeln!(out, "  Average:  {:.2}ms", stats.avg)?;
        writeln!(out, "  Median:   {:.2}ms", stats.median)?;
        writeln!(out, "  Min:      {:.2}ms", stats.min)?;
        writeln!(out, "  Max:      {:.2}ms", stats.max)?;
        writeln!(out, "  Std Dev:  {:.2}ms", stats.std_dev)?;
        writeln!(out, "  Requests: {}", stats.count)?;
        writeln!(out, "  Performance: {}", Tier::from_avg_ms(stats.avg))?;
    }

    Ok(())
}

/// Writes the summary to stdout.
pub fn print_summary(results: &ResultStore) -> io::Result<()> {
    let stdout = io::stdout();
    write_summary(&mut stdout.lock(), results)
}

/// `bulk_update_5_items` renders as `Bulk Update 5 Items`.
fn display_name(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
