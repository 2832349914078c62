//! 日誌系統初始化

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日誌系統，輸出到 stderr
///
/// # 日誌級別
/// - `--verbose`：debug，覆蓋 `RUST_LOG`
/// - 否則讀取 `RUST_LOG`（例如 `RUST_LOG=debug` 或 `RUST_LOG=prodsim_core=trace`）
/// - 兩者皆無時為 warn
pub fn init(verbose: bool) {
    fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn build_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}
