//! # Production Time Calculation Engine
//!
//! 總工時與完工天數計算、隨機配置產生

pub mod calculator;
pub mod generator;

// Re-export 主要類型
pub use calculator::{calculate_total_time, ProductionCalculator};
pub use generator::{GenerationRanges, ProductParameters, RandomConfigGenerator};

use serde::Serialize;

/// 生產模擬計算結果
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationResult {
    /// 總工時（小時，兩位小數）
    pub total_hours: f64,

    /// 預估完工天數（兩位小數）；整體產能為零時為正無窮
    pub total_days: f64,
}

impl SimulationResult {
    pub fn new(total_hours: f64, total_days: f64) -> Self {
        Self {
            total_hours,
            total_days,
        }
    }

    /// 檢查是否永遠無法完工
    pub fn is_unbounded(&self) -> bool {
        self.total_days.is_infinite()
    }

    /// 完工天數，無法完工時為 `None`
    pub fn finite_days(&self) -> Option<f64> {
        if self.is_unbounded() {
            None
        } else {
            Some(self.total_days)
        }
    }
}
