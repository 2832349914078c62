//! 生產總工時計算器

use prodsim_core::{round_dp, ProductCatalog, SimError};

use crate::SimulationResult;

/// 每小時分鐘數
const MINUTES_PER_HOUR: f64 = 60.0;

/// 結果保留的小數位數
const RESULT_DECIMALS: u32 = 2;

/// 生產總工時計算器
///
/// 持有產品清單的引用，可重複計算。
pub struct ProductionCalculator<'a> {
    /// 產品清單
    catalog: &'a ProductCatalog,

    /// 整體日產能（件/天）
    overall_daily_capacity: u32,
}

impl<'a> ProductionCalculator<'a> {
    /// 創建新的計算器
    pub fn new(catalog: &'a ProductCatalog, overall_daily_capacity: u32) -> Self {
        Self {
            catalog,
            overall_daily_capacity,
        }
    }

    /// 計算總工時（小時）與預估完工天數
    ///
    /// 天數以最慢產品的單位工時作為瓶頸：整體日產能全部按瓶頸速率消耗，
    /// 每日可用分鐘數 = 整體日產能 × 瓶頸單位工時。
    ///
    /// * 整體日產能為 0 → 天數為正無窮
    /// * 每日可用分鐘數不為正（瓶頸單位工時 ≤ 0）→ 天數為正無窮
    ///
    /// # 錯誤
    /// 產品清單為空時返回 `SimError::EmptyCatalog`。
    pub fn calculate_total_time(&self) -> prodsim_core::Result<SimulationResult> {
        let bottleneck = self.bottleneck_unit_time().ok_or(SimError::EmptyCatalog)?;

        let total_minutes = self.total_minutes();
        let total_hours = round_dp(total_minutes / MINUTES_PER_HOUR, RESULT_DECIMALS);

        tracing::debug!(
            "總工時 {} 分鐘，瓶頸單位工時 {} 分鐘",
            total_minutes,
            bottleneck
        );

        if self.overall_daily_capacity == 0 {
            tracing::debug!("整體日產能為 0，無法完工");
            return Ok(SimulationResult::new(total_hours, f64::INFINITY));
        }

        let daily_max_minutes = f64::from(self.overall_daily_capacity) * bottleneck;
        let total_days = if daily_max_minutes > 0.0 {
            round_dp(total_minutes / daily_max_minutes, RESULT_DECIMALS)
        } else {
            tracing::debug!("每日可用分鐘數為 {}，無法完工", daily_max_minutes);
            f64::INFINITY
        };

        Ok(SimulationResult::new(total_hours, total_days))
    }

    /// 所有產品的總工時（分鐘，未捨入）
    pub fn total_minutes(&self) -> f64 {
        self.catalog.specs().map(|spec| spec.total_minutes()).sum()
    }

    /// 瓶頸單位工時（所有產品中最大的單位工時），清單為空時為 `None`
    pub fn bottleneck_unit_time(&self) -> Option<f64> {
        self.catalog
            .specs()
            .map(|spec| spec.unit_time)
            .reduce(f64::max)
    }
}

/// 單次計算的便捷函式
pub fn calculate_total_time(
    catalog: &ProductCatalog,
    overall_daily_capacity: u32,
) -> prodsim_core::Result<SimulationResult> {
    ProductionCalculator::new(catalog, overall_daily_capacity).calculate_total_time()
}
