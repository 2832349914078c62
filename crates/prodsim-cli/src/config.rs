//! 命令列參數與環境變數

use clap::Parser;
use prodsim_report::DEFAULT_EXPORT_FILE;
use std::path::PathBuf;

/// 預設產品名稱
pub const DEFAULT_PRODUCT_NAMES: [&str; 6] = [
    "Product 1",
    "Product 2",
    "Product 3",
    "Product 4",
    "Product 5",
    "Product 6",
];

/// Production Simulator — estimate total production time from product throughput.
#[derive(Parser, Debug)]
#[command(name = "prodsim", version, about)]
pub struct AppConfig {
    /// Use a randomly generated configuration (default when no source is given).
    #[arg(long, conflicts_with = "config")]
    pub auto: bool,

    /// Path to a manual JSON config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for the random configuration generator.
    #[arg(long, env = "PRODSIM_SEED")]
    pub seed: Option<u64>,

    /// Export file path.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_EXPORT_FILE)]
    pub output: PathBuf,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

/// 配置來源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// 隨機產生
    Auto,
    /// 從檔案載入
    File(PathBuf),
}

impl AppConfig {
    /// 解析命令列參數
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// 決定配置來源；未指定 `--config` 時一律隨機產生
    pub fn source(&self) -> ConfigSource {
        match &self.config {
            Some(path) => ConfigSource::File(path.clone()),
            None => ConfigSource::Auto,
        }
    }
}
