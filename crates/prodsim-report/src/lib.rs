//! # Production Simulation Report
//!
//! 文字報表與 JSON 匯出

pub mod export;
pub mod text;

// Re-export 主要類型
pub use export::{write_export, SimulationExport, DEFAULT_EXPORT_FILE};
pub use text::SimulationReport;
