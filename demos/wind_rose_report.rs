//! Wind Rose Report Example
//!
//! Reads a wind record file, runs the wind rose analysis with monthly
//! grouping and writes the N-summary table and the per-period resultants.
//!
//! Without an argument a synthetic coastal station is generated first:
//! a northerly summer wind regime and a weaker south-westerly winter one.
//!
//! ## Run
//!
//! ```bash
//! cargo run --example wind_rose_report -- station.txt
//! cargo run --example wind_rose_report
//! ```

use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};

use aeolian_rs::io::{read_wind_file, save_n_summary, save_resultants, write_wind_file};
use aeolian_rs::{
    CardinalDirection, HeightAdjustment, PeriodKind, WindFile, WindRecord, WindRecords,
    WindRoseAnalysis, WindRoseConfig,
};
use chrono::{Datelike, NaiveDate, TimeDelta};

/// Recorder height of the synthetic station, metres
const SYNTHETIC_HEIGHT: f64 = 2.5;

fn synthetic_station(path: &Path) -> Result<(), Box<dyn Error>> {
    let start = NaiveDate::from_ymd_opt(2021, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or("invalid start date")?;

    let mut records = Vec::new();
    for step in 0..(365 * 8) {
        let timestamp = start + TimeDelta::hours(3 * step);
        let summer = (4..=9).contains(&timestamp.month());
        let phase = (step % 8) as f64;

        let (speed, direction) = if step % 17 == 0 {
            (0.0, CardinalDirection::N)
        } else if summer {
            let dir = if step % 5 == 0 {
                CardinalDirection::NNE
            } else {
                CardinalDirection::N
            };
            (10.0 + 2.5 * phase, dir)
        } else {
            let dir = if step % 3 == 0 {
                CardinalDirection::WSW
            } else {
                CardinalDirection::SW
            };
            (6.0 + 1.5 * phase, dir)
        };
        records.push(WindRecord::new(timestamp, speed, direction));
    }

    let records = WindRecords::new(records)?.with_name("Synthetic Coast");
    let file = WindFile::from_records(records).with_height(SYNTHETIC_HEIGHT);
    write_wind_file(path, &file)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = env::temp_dir();

    let input = match env::args().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => {
            let path = out_dir.join("synthetic_station.txt");
            synthetic_station(&path)?;
            println!("Wrote synthetic records to {}", path.display());
            path
        }
    };

    let data = read_wind_file(&input)?;
    println!(
        "Station: {} ({} records, {})",
        data.station.as_deref().unwrap_or("unnamed"),
        data.records.len(),
        data.units
    );

    let mut config = WindRoseConfig::for_unit(data.units).with_period(PeriodKind::Monthly);
    if let Some(height) = data.height {
        config = config.with_height_adjustment(HeightAdjustment::log_law(height));
        println!("Adjusting speeds from {height} m to 10 m (log law)");
    }

    let report = WindRoseAnalysis::new(config).run(&data.records)?;

    println!();
    println!("{:<14} {:>12} {:>12} {:>8} {:>8}", "Period", "DP", "RDP", "RDD", "RDP/DP");
    for row in &report.resultants {
        let ratio = row
            .resultant
            .ratio()
            .map(|r| format!("{r:.3}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<14} {:>12.1} {:>12.1} {:>8.1} {:>8}",
            row.period.bin_label(),
            row.drift_potential,
            row.resultant.rdp(),
            row.resultant.rdd(),
            ratio
        );
    }

    println!();
    println!("Total DP:  {:.1}", report.total_drift_potential);
    println!(
        "Overall:   RDP {:.1} toward {:.1}° (from {:.1}°)",
        report.overall.rdp(),
        report.overall.transport_bearing(),
        report.overall.rdd()
    );
    println!(
        "Area DP:   {:.1}, calm {:.1} %",
        report.area.total(),
        report.n_summary.calm_percentage()
    );

    let summary_path = out_dir.join("n_summary.txt");
    let resultants_path = out_dir.join("resultants.csv");
    save_n_summary(&summary_path, &report.n_summary)?;
    save_resultants(&resultants_path, &report.resultants)?;

    println!();
    println!("N-summary:  {}", summary_path.display());
    println!("Resultants: {}", resultants_path.display());

    Ok(())
}
