//! 文字報表

use prodsim_calc::{ProductionCalculator, SimulationResult};
use prodsim_core::SimulationConfig;
use std::fmt;

use crate::export::SimulationExport;

/// 報表標題
pub const REPORT_HEADER: &str = "--- Production Simulation Report ---";

/// 生產模擬報表
#[derive(Debug, Clone)]
pub struct SimulationReport<'a> {
    config: &'a SimulationConfig,
    result: SimulationResult,
}

impl<'a> SimulationReport<'a> {
    /// 以已計算的結果創建報表
    pub fn new(config: &'a SimulationConfig, result: SimulationResult) -> Self {
        Self { config, result }
    }

    /// 計算並創建報表
    pub fn generate(config: &'a SimulationConfig) -> prodsim_core::Result<Self> {
        let result =
            ProductionCalculator::new(&config.products, config.overall_daily_capacity)
                .calculate_total_time()?;

        tracing::info!(
            "模擬完成：總工時 {} 小時，預估 {} 天",
            result.total_hours,
            result.total_days
        );

        Ok(Self::new(config, result))
    }

    pub fn result(&self) -> SimulationResult {
        self.result
    }

    /// 轉換為匯出結構
    pub fn to_export(&self) -> SimulationExport {
        SimulationExport::new(self.config, self.result)
    }
}

impl fmt::Display for SimulationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{REPORT_HEADER}")?;
        writeln!(f, "Products configuration:")?;
        for (name, spec) in self.config.products.iter() {
            writeln!(
                f,
                "{}: quantity={} units, unit_time={} min, daily_capacity={} units/day",
                name,
                spec.quantity,
                format_real(spec.unit_time),
                spec.daily_capacity
            )?;
        }
        writeln!(
            f,
            "Overall daily capacity: {} units/day",
            self.config.overall_daily_capacity
        )?;
        write!(
            f,
            "Total production time: {} hours (~{} days)",
            format_real(self.result.total_hours),
            format_real(self.result.total_days)
        )
    }
}

/// 實數顯示：最短可還原表示，整數值補 `.0`，無窮大顯示為 `inf`
///
/// 絕對值 `>= 1e16` 或 `< 1e-4`（非零）時改用指數形式，指數至少兩位並帶正負號，
/// 例如 `1e+16`、`1.5e-05`。
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        format!("{sign}inf")
    } else if value != 0.0 && (value.abs() >= 1e16 || value.abs() < 1e-4) {
        format_exponent(value)
    } else if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

fn format_exponent(value: f64) -> String {
    let repr = format!("{value:e}");
    match repr.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodsim_core::ProductSpec;
    use rstest::rstest;

    fn sample_config() -> SimulationConfig {
        SimulationConfig::new(1000)
            .with_product("Product 1", ProductSpec::new(10, 1.0, 100))
            .with_product("Product 2", ProductSpec::new(20, 1.25, 200))
    }

    #[test]
    fn test_report_contains_sections() {
        let config = sample_config();
        let report = SimulationReport::generate(&config).unwrap().to_string();

        assert!(report.contains("Production Simulation Report"));
        assert!(report.contains("Products configuration"));
        assert!(report.contains("Total production time"));
    }

    #[test]
    fn test_report_layout() {
        // 10 + 25 = 35 分鐘；瓶頸 1.25 × 1000 = 1250 分鐘/天
        let config = sample_config();
        let report = SimulationReport::generate(&config).unwrap().to_string();

        let expected = "\
--- Production Simulation Report ---
Products configuration:
Product 1: quantity=10 units, unit_time=1.0 min, daily_capacity=100 units/day
Product 2: quantity=20 units, unit_time=1.25 min, daily_capacity=200 units/day
Overall daily capacity: 1000 units/day
Total production time: 0.58 hours (~0.03 days)";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_report_unbounded_days() {
        let config = SimulationConfig::new(0).with_product("P1", ProductSpec::new(10, 1.0, 100));
        let report = SimulationReport::generate(&config).unwrap().to_string();

        assert!(report.ends_with("Total production time: 0.17 hours (~inf days)"));
    }

    #[test]
    fn test_generate_empty_catalog_fails() {
        let config = SimulationConfig::new(100);
        assert!(matches!(
            SimulationReport::generate(&config),
            Err(prodsim_core::SimError::EmptyCatalog)
        ));
    }

    #[rstest]
    #[case(1.0, "1.0")]
    #[case(0.0, "0.0")]
    #[case(0.17, "0.17")]
    #[case(1.25, "1.25")]
    #[case(1500.0, "1500.0")]
    #[case(f64::INFINITY, "inf")]
    #[case(1e15, "1000000000000000.0")]
    #[case(1e16, "1e+16")]
    #[case(1.5e16, "1.5e+16")]
    #[case(1e100, "1e+100")]
    #[case(0.0001, "0.0001")]
    #[case(1.5e-5, "1.5e-05")]
    #[case(-2e-7, "-2e-07")]
    fn test_format_real(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_real(value), expected);
    }
}
