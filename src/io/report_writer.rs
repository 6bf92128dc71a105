//! Writers for result tables.
//!
//! # N-summary table
//!
//! ```text
//! # N-summary: 10 records, 2 calm
//! Dir         (0, 4]    (4, 7]  ...   Total %
//! N             10.0      10.0  ...      20.0
//! ...
//! Calm                                   20.0
//! Total %       20.0      20.0  ...     100.0
//! ```
//!
//! # Period resultants CSV
//!
//! ```text
//! period,dp,rdp,rdd,ratio
//! Monthly: Jan,1520.000000,830.112000,247.500000,0.546126
//! ```
//!
//! The ratio column is empty when no DP reference was used.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::wind_reader::WindFileError;
use crate::drift::PeriodResultant;
use crate::summary::NSummaryTable;
use crate::types::CardinalDirection;

const LABEL_WIDTH: usize = 8;
const CELL_WIDTH: usize = 10;

/// Write an N-summary table as aligned text.
pub fn write_n_summary<W: Write>(out: &mut W, table: &NSummaryTable) -> std::io::Result<()> {
    let prec = table.precision() as usize;
    let n_bins = table.bins().len();

    writeln!(
        out,
        "# N-summary: {} records, {} calm",
        table.total_records(),
        table.calm_records()
    )?;

    write!(out, "{:<LABEL_WIDTH$}", "Dir")?;
    for interval in table.bins().intervals() {
        write!(out, "{:>CELL_WIDTH$}", interval.to_string())?;
    }
    writeln!(out, "{:>CELL_WIDTH$}", "Total %")?;

    for dir in CardinalDirection::ALL {
        write!(out, "{:<LABEL_WIDTH$}", dir.label())?;
        for value in table.row(dir) {
            write!(out, "{value:>CELL_WIDTH$.prec$}")?;
        }
        writeln!(out, "{:>CELL_WIDTH$.prec$}", table.direction_total(dir))?;
    }

    write!(out, "{:<LABEL_WIDTH$}", "Calm")?;
    write!(out, "{:width$}", "", width = CELL_WIDTH * n_bins)?;
    writeln!(out, "{:>CELL_WIDTH$.prec$}", table.calm_percentage())?;

    write!(out, "{:<LABEL_WIDTH$}", "Total %")?;
    for value in table.bin_totals() {
        write!(out, "{value:>CELL_WIDTH$.prec$}")?;
    }
    writeln!(out, "{:>CELL_WIDTH$.prec$}", table.grand_total())?;

    Ok(())
}

/// Write per-period resultants as CSV.
pub fn write_resultants<W: Write>(out: &mut W, rows: &[PeriodResultant]) -> std::io::Result<()> {
    writeln!(out, "period,dp,rdp,rdd,ratio")?;
    for row in rows {
        let ratio = row
            .resultant
            .ratio()
            .map(|r| format!("{r:.6}"))
            .unwrap_or_default();
        writeln!(
            out,
            "{},{:.6},{:.6},{:.6},{}",
            row.period.bin_label(),
            row.drift_potential,
            row.resultant.rdp(),
            row.resultant.rdd(),
            ratio
        )?;
    }
    Ok(())
}

/// Save an N-summary table to a text file.
pub fn save_n_summary(path: &Path, table: &NSummaryTable) -> Result<(), WindFileError> {
    let mut out = BufWriter::new(File::create(path)?);
    write_n_summary(&mut out, table)?;
    out.flush()?;
    Ok(())
}

/// Save per-period resultants to a CSV file.
pub fn save_resultants(path: &Path, rows: &[PeriodResultant]) -> Result<(), WindFileError> {
    let mut out = BufWriter::new(File::create(path)?);
    write_resultants(&mut out, rows)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drift::{DpReference, aggregate};
    use crate::summary::n_summary;
    use crate::types::{PeriodKind, SpeedBins};
    use crate::summary::NSummaryConfig;
    use chrono::NaiveDate;
    use tempfile::NamedTempFile;
    use crate::types::CardinalDirection::*;

    #[test]
    fn test_n_summary_layout() {
        let bins = SpeedBins::new(vec![0.0, 10.0, 20.0]).unwrap();
        let config = NSummaryConfig::default().with_bins(bins);
        let table =
            NSummaryTable::build(&[0.0, 5.0, 15.0, 15.0], &[N, N, E, E], &config).unwrap();

        let mut buf = Vec::new();
        write_n_summary(&mut buf, &table).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "# N-summary: 4 records, 1 calm");
        assert_eq!(lines.len(), 2 + 16 + 2);
        assert!(lines[1].starts_with("Dir"));
        assert!(lines[1].contains("(0, 10]"));
        assert_eq!(lines[2], format!("{:<8}{:>10}{:>10}{:>10}", "N", "25.0", "0.0", "25.0"));
        assert!(lines[18].starts_with("Calm"));
        assert!(lines[18].ends_with("25.0"));
        assert!(lines[19].starts_with("Total %"));
        assert!(lines[19].ends_with("100.0"));
    }

    #[test]
    fn test_resultants_csv() {
        let day = |d| NaiveDate::from_ymd_opt(2020, 1, d).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let table = aggregate(
            &[day(1), day(2)],
            &[30.0, 10.0],
            &[S, N],
            PeriodKind::Monthly,
        )
        .unwrap();

        let mut buf = Vec::new();
        write_resultants(&mut buf, &table.resultants(DpReference::PerPeriod).unwrap()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "period,dp,rdp,rdd,ratio");
        assert_eq!(lines[1], "Monthly: Jan,40.000000,20.000000,180.000000,0.500000");

        let mut buf = Vec::new();
        write_resultants(&mut buf, &table.resultants(DpReference::Omit).unwrap()).unwrap();
        assert!(String::from_utf8(buf).unwrap().lines().nth(1).unwrap().ends_with(','));
    }

    #[test]
    fn test_save_to_files() {
        let table = n_summary(&[3.0, 9.0], &[W, W]).unwrap();
        let file = NamedTempFile::new().unwrap();
        save_n_summary(file.path(), &table).unwrap();
        let text = std::fs::read_to_string(file.path()).unwrap();
        assert!(text.contains("# N-summary: 2 records, 0 calm"));

        let file = NamedTempFile::new().unwrap();
        save_resultants(file.path(), &[]).unwrap();
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "period,dp,rdp,rdd,ratio\n");
    }
}
