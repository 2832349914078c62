//! JSON 匯出

use prodsim_calc::SimulationResult;
use prodsim_core::{ProductCatalog, SimError, SimulationConfig};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 預設匯出檔名
pub const DEFAULT_EXPORT_FILE: &str = "simulation_output.json";

/// 模擬結果匯出結構
///
/// `total_days` 無法完工時輸出為 JSON `null`。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationExport {
    /// 產品清單（與輸入相同）
    pub products: ProductCatalog,

    /// 整體日產能
    pub overall_daily_capacity: u32,

    /// 總工時（小時）
    pub total_hours: f64,

    /// 預估完工天數
    pub total_days: Option<f64>,
}

impl SimulationExport {
    pub fn new(config: &SimulationConfig, result: SimulationResult) -> Self {
        Self {
            products: config.products.clone(),
            overall_daily_capacity: config.overall_daily_capacity,
            total_hours: result.total_hours,
            total_days: result.finite_days(),
        }
    }
}

/// 寫出匯出檔（JSON，兩格縮排）
pub fn write_export(export: &SimulationExport, path: impl AsRef<Path>) -> prodsim_core::Result<()> {
    let path = path.as_ref();
    let failed = |err: &dyn std::fmt::Display| {
        SimError::ExportFailed(format!("{}: {}", path.display(), err))
    };

    let file = File::create(path).map_err(|e| failed(&e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, export).map_err(|e| failed(&e))?;
    writer.write_all(b"\n").map_err(|e| failed(&e))?;
    writer.flush().map_err(|e| failed(&e))?;

    tracing::info!("匯出 {} 項產品至 {}", export.products.len(), path.display());
    Ok(())
}
