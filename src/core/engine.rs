use crate::core::approx::{Rounder, Truncator};
use crate::core::pi::MachinPi;
use crate::core::precision::PrecisionContext;
use crate::core::volume::cylinder_volume;
use crate::core::{ApproximationPolicy, ConfigProvider, PiSource};
use crate::domain::decimal::Decimal;
use crate::domain::digits::DigitString;
use crate::domain::model::{ComparisonRow, Report, VolumeTable};
use crate::utils::error::{PiError, Result};
use crate::utils::monitor::SystemMonitor;
use crate::utils::validation::{validate_precision_budget, MIN_PRECISION_MARGIN};

/// Runs the comparison: precision check, pi, truncation set, rounding set,
/// differences.
pub struct ComparisonEngine<C: ConfigProvider, P: PiSource = MachinPi> {
    config: C,
    source: P,
    monitor: SystemMonitor,
}

impl<C: ConfigProvider> ComparisonEngine<C, MachinPi> {
    pub fn new(config: C) -> Self {
        Self::new_with_monitoring(config, false)
    }

    pub fn new_with_monitoring(config: C, monitor_enabled: bool) -> Self {
        Self {
            config,
            source: MachinPi,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }
}

impl<C: ConfigProvider, P: PiSource> ComparisonEngine<C, P> {
    pub fn with_source(config: C, source: P) -> Self {
        Self {
            config,
            source,
            monitor: SystemMonitor::default(),
        }
    }

    pub fn run(&self) -> Result<Report> {
        let decimals = self.config.decimals();
        let digits = self.config.working_digits();

        // 精度不足時在任何計算前失敗，邊界不得低於最小值
        let margin = self.config.precision_margin().max(MIN_PRECISION_MARGIN);
        validate_precision_budget(digits, decimals, margin)?;

        let mut ctx = PrecisionContext::new(digits);
        tracing::info!("🔢 Working precision: {} digits", ctx.digits());

        let pi = self.source.pi(&mut ctx)?.to_digits();
        tracing::info!("🥧 Pi generated with {} fractional digits", pi.places());

        // 四捨五入至少需要第 N+1 位
        let required = decimals.iter().copied().max().unwrap_or(0) + 1;
        if pi.places() < required {
            return Err(PiError::InsufficientPrecision {
                required,
                available: pi.places(),
            });
        }
        self.monitor.log_stats("Pi generation");

        let radius = self.config.radius();
        let height = self.config.height();

        let truncated = self.volume_set(&Truncator, &pi, &radius, &height)?;
        self.monitor.log_stats("Truncation");

        let rounder = Rounder::new(self.config.rounding_mode());
        tracing::debug!("Rounding mode: {}", rounder.mode());
        let rounded = self.volume_set(&rounder, &pi, &radius, &height)?;
        self.monitor.log_stats("Rounding");

        let mut rows = Vec::with_capacity(decimals.len());
        for &n in decimals {
            let truncated_volume = lookup(&truncated, n)?;
            let rounded_volume = lookup(&rounded, n)?;
            let difference = (&rounded_volume - &truncated_volume).abs();
            tracing::debug!("N={} difference={}", n, difference);
            rows.push(ComparisonRow {
                decimals: n,
                truncated_volume,
                rounded_volume,
                difference,
            });
        }

        tracing::info!("✅ Compared {} decimal counts", rows.len());
        self.monitor.log_final_stats();

        Ok(Report {
            radius,
            height,
            working_digits: digits,
            rounding: rounder.mode(),
            rows,
        })
    }

    fn volume_set(
        &self,
        policy: &dyn ApproximationPolicy,
        pi: &DigitString,
        radius: &Decimal,
        height: &Decimal,
    ) -> Result<VolumeTable> {
        let mut table = VolumeTable::new();
        for &n in self.config.decimals() {
            let approx = Decimal::from_digits(&policy.approximate(pi, n)?);
            let volume = cylinder_volume(radius, height, &approx);
            tracing::debug!("{} N={} pi={} volume={}", policy.label(), n, approx, volume);
            table.insert(n, volume);
        }
        Ok(table)
    }
}

fn lookup(table: &VolumeTable, decimals: usize) -> Result<Decimal> {
    table
        .get(decimals)
        .cloned()
        .ok_or_else(|| PiError::ProcessingError {
            message: format!("no volume recorded for {} decimals", decimals),
        })
}
