//! End-to-end wind rose analysis of a record series.

use chrono::TimeDelta;
use tracing::{debug, info};

use crate::conversions::HeightAdjustment;
use crate::drift::{
    AreaDriftPotential, DpReference, DriftPotential, DriftPotentialTable, PeriodResultant,
    ResultantDrift, aggregate, resultant, time_fraction,
};
use crate::error::{Result, WindRoseError};
use crate::records::{WindRecords, validate_speeds};
use crate::summary::{NSummaryConfig, NSummaryTable};
use crate::types::{CardinalDirection, PeriodKey, PeriodKind, SpeedBins, SpeedUnit};

/// Configuration for a wind rose analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct WindRoseConfig {
    /// Drift potential law (threshold, clamping)
    pub drift: DriftPotential,
    /// N-summary bins and precision
    pub summary: NSummaryConfig,
    /// Calendar grouping of the drift potential table
    pub period: PeriodKind,
    /// Time each record represents
    pub record_duration: TimeDelta,
    /// Optional correction of speeds to the reference height
    pub height_adjustment: Option<HeightAdjustment>,
    /// Reference for the per-period RDP/DP ratio
    pub dp_reference: DpReference,
}

impl Default for WindRoseConfig {
    fn default() -> Self {
        Self::knots()
    }
}

impl WindRoseConfig {
    /// Hourly records in knots, 12 kn threshold, default bins, whole-record period.
    pub fn knots() -> Self {
        Self::for_unit(SpeedUnit::Knots)
    }

    /// Hourly records in m/s with a 6 m/s threshold.
    ///
    /// The default bin edges are knot classes, so they are converted to m/s.
    pub fn meters_per_second() -> Self {
        Self::for_unit(SpeedUnit::MetersPerSecond)
    }

    /// Preset for a speed unit.
    pub fn for_unit(unit: SpeedUnit) -> Self {
        Self {
            drift: DriftPotential::for_unit(unit),
            summary: NSummaryConfig::default().with_bins(SpeedBins::for_unit(unit)),
            period: PeriodKind::All,
            record_duration: TimeDelta::hours(1),
            height_adjustment: None,
            dp_reference: DpReference::PerPeriod,
        }
    }

    /// Set the drift potential law.
    pub fn with_drift(mut self, drift: DriftPotential) -> Self {
        self.drift = drift;
        self
    }

    /// Set the N-summary configuration.
    pub fn with_summary(mut self, summary: NSummaryConfig) -> Self {
        self.summary = summary;
        self
    }

    /// Set the period grouping.
    pub fn with_period(mut self, period: PeriodKind) -> Self {
        self.period = period;
        self
    }

    /// Set the record duration.
    pub fn with_record_duration(mut self, duration: TimeDelta) -> Self {
        self.record_duration = duration;
        self
    }

    /// Adjust speeds to the reference height before analysis.
    pub fn with_height_adjustment(mut self, adjustment: HeightAdjustment) -> Self {
        self.height_adjustment = Some(adjustment);
        self
    }

    /// Set the DP reference for per-period ratios.
    pub fn with_dp_reference(mut self, reference: DpReference) -> Self {
        self.dp_reference = reference;
        self
    }
}

/// Everything derived from one analysis run.
#[derive(Clone, Debug)]
pub struct WindRoseReport {
    /// Fraction of the span each record represents
    pub time_fraction: f64,
    /// Speeds after height adjustment
    pub speeds: Vec<f64>,
    /// Resolved direction per record
    pub directions: Vec<CardinalDirection>,
    /// Drift potential per record
    pub drift_potential: Vec<f64>,
    /// Period × direction table
    pub table: DriftPotentialTable,
    /// Resultant per period
    pub resultants: Vec<PeriodResultant>,
    /// Total drift potential over the record
    pub total_drift_potential: f64,
    /// Resultant of the whole record, ratio against the total when positive
    pub overall: ResultantDrift,
    /// Occurrence table
    pub n_summary: NSummaryTable,
    /// Bin-weighted drift potential surface
    pub area: AreaDriftPotential,
    /// Resultant of the bin-weighted surface
    pub area_resultant: ResultantDrift,
}

impl WindRoseReport {
    /// Resultant of one period, if it was observed.
    pub fn resultant_for(&self, period: PeriodKey) -> Option<&PeriodResultant> {
        self.resultants.iter().find(|r| r.period == period)
    }
}

/// Wind rose analysis pipeline.
///
/// ```text
/// height adjustment → directions → time fraction → drift potential
///     → period aggregation → resultants
/// speeds + directions → N-summary → area drift potential
/// ```
#[derive(Clone, Debug, Default)]
pub struct WindRoseAnalysis {
    config: WindRoseConfig,
}

impl WindRoseAnalysis {
    /// Create an analysis with the given configuration.
    pub fn new(config: WindRoseConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &WindRoseConfig {
        &self.config
    }

    /// Run the full pipeline over a record series.
    ///
    /// # Errors
    /// Any validation failure of the underlying steps: empty or single-record
    /// input, zero or negative time span, unresolvable directions, speeds
    /// outside the bins, or invalid height adjustment parameters.
    pub fn run(&self, records: &WindRecords) -> Result<WindRoseReport> {
        if records.is_empty() {
            return Err(WindRoseError::EmptyInput);
        }
        let config = &self.config;

        info!(
            records = records.len(),
            station = records.name.as_deref().unwrap_or("unnamed"),
            period = config.period.prefix(),
            threshold = config.drift.threshold,
            "Starting wind rose analysis"
        );

        let speeds = match &config.height_adjustment {
            Some(adjustment) => {
                let adjusted = adjustment.apply(&records.speeds())?;
                validate_speeds(adjusted.iter().copied())?;
                debug!(?adjustment, "Applied height adjustment");
                adjusted
            }
            None => records.speeds(),
        };

        let directions = records.cardinal_directions()?;
        let timestamps = records.timestamps();

        let t = time_fraction(config.record_duration, &timestamps)?;
        debug!(time_fraction = t, "Computed time fraction");

        #[cfg(feature = "parallel")]
        let drift_potential = config.drift.compute_parallel(&speeds, t);
        #[cfg(not(feature = "parallel"))]
        let drift_potential = config.drift.compute(&speeds, t);

        let table = aggregate(&timestamps, &drift_potential, &directions, config.period)?;
        let resultants = table.resultants(config.dp_reference)?;

        let total_drift_potential = table.total();
        let whole = table.collapse();
        let distribution = whole.distribution(PeriodKey::All).unwrap_or([0.0; 16]);
        let overall = resultant(
            &distribution,
            (total_drift_potential > 0.0).then_some(total_drift_potential),
        )?;

        let n_summary = NSummaryTable::build(&speeds, &directions, &config.summary)?;
        let area = n_summary.area_drift_potential(&config.drift);
        let area_resultant = area.resultant()?;

        info!(
            dp = total_drift_potential,
            rdp = overall.rdp(),
            rdd = overall.rdd(),
            periods = resultants.len(),
            "Wind rose analysis complete"
        );

        Ok(WindRoseReport {
            time_fraction: t,
            speeds,
            directions,
            drift_potential,
            table,
            resultants,
            total_drift_potential,
            overall,
            n_summary,
            area,
            area_resultant,
        })
    }
}
