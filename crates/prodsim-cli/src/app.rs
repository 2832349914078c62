//! 命令列流程：取得配置 → 計算 → 報表 → 匯出

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

use prodsim_calc::RandomConfigGenerator;
use prodsim_core::SimulationConfig;
use prodsim_report::{write_export, SimulationReport};

use crate::config::{AppConfig, ConfigSource, DEFAULT_PRODUCT_NAMES};

/// 執行模擬，報表輸出到 stdout
pub fn run(config: &AppConfig) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_output(config, &mut out)
}

/// 執行模擬，報表輸出到 `out`，匯出檔寫到 `--output` 路徑
pub fn run_with_output(config: &AppConfig, out: &mut impl Write) -> Result<()> {
    let sim_config = load_config(config)?;

    let report = SimulationReport::generate(&sim_config).context("simulation failed")?;
    writeln!(out, "{report}")?;

    write_export(&report.to_export(), &config.output)?;
    writeln!(
        out,
        "\nSimulation data exported to {}",
        config.output.display()
    )?;

    Ok(())
}

/// 依命令列參數取得模擬配置
pub fn load_config(config: &AppConfig) -> Result<SimulationConfig> {
    match config.source() {
        ConfigSource::File(path) => SimulationConfig::load(&path)
            .with_context(|| format!("failed to load config {}", path.display())),
        ConfigSource::Auto => {
            let mut rng = match config.seed {
                Some(seed) => {
                    tracing::debug!("使用固定種子 {}", seed);
                    StdRng::seed_from_u64(seed)
                }
                None => StdRng::from_entropy(),
            };
            RandomConfigGenerator::generate_random_config(&mut rng, &DEFAULT_PRODUCT_NAMES)
                .context("failed to generate random config")
        }
    }
}
