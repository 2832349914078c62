//! 小數位數捨入

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// 將浮點數捨入到指定小數位數
///
/// 以浮點數的精確二進位值轉為 `Decimal` 後做銀行家捨入（四捨六入五成雙），
/// 所以 `2.675` 這類實際略小於 .5 的值會捨去。非有限值原樣返回。
pub fn round_dp(value: f64, dp: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    match Decimal::from_f64_retain(value) {
        Some(decimal) => decimal
            .round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven)
            .to_f64()
            .unwrap_or(value),
        // 超出 Decimal 表示範圍，數值已大到小數位無意義
        None => value,
    }
}
