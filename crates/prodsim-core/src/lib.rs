//! # Production Simulator Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod product;
pub mod rounding;

// Re-export 主要類型
pub use config::SimulationConfig;
pub use product::{ProductCatalog, ProductSpec};
pub use rounding::round_dp;

/// 生產模擬錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("找不到配置檔: {0}")]
    ConfigNotFound(String),

    #[error("配置檔格式錯誤: {0}")]
    ConfigMalformed(String),

    #[error("配置檔缺少必要欄位: {0}")]
    ConfigIncomplete(String),

    #[error("產品 {name} 參數無效: {reason}")]
    InvalidProduct { name: String, reason: String },

    #[error("產品清單為空，無法計算瓶頸單位工時")]
    EmptyCatalog,

    #[error("無效的範圍 {what}: [{min}, {max}]")]
    InvalidRange {
        what: &'static str,
        min: String,
        max: String,
    },

    #[error("匯出失敗: {0}")]
    ExportFailed(String),

    #[error("I/O 錯誤: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
