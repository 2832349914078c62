//! # Production Simulator
//!
//! 生產總工時與完工天數估算

pub use prodsim_calc::{
    calculate_total_time, GenerationRanges, ProductParameters, ProductionCalculator,
    RandomConfigGenerator, SimulationResult,
};
pub use prodsim_core::{ProductCatalog, ProductSpec, Result, SimError, SimulationConfig};
pub use prodsim_report::{write_export, SimulationExport, SimulationReport, DEFAULT_EXPORT_FILE};
