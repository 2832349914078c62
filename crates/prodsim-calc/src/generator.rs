//! 隨機配置產生
//!
//! 所有函式都由呼叫端傳入亂數產生器，固定種子即可重現結果。

use prodsim_core::{round_dp, ProductCatalog, ProductSpec, SimError, SimulationConfig};
use rand::Rng;
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// 預設最小生產數量
pub const DEFAULT_MIN_QUANTITY: u32 = 50;

/// 預設最大生產數量
pub const DEFAULT_MAX_QUANTITY: u32 = 200;

/// 單位工時保留的小數位數
const UNIT_TIME_DECIMALS: u32 = 2;

/// 隨機參數的取值範圍（皆為閉區間）
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRanges {
    /// 單位工時（分鐘/件）
    pub unit_time: RangeInclusive<f64>,

    /// 產品日產能（件/天）
    pub daily_capacity: RangeInclusive<u32>,

    /// 整體日產能（件/天）
    pub overall_capacity: RangeInclusive<u32>,
}

impl Default for GenerationRanges {
    fn default() -> Self {
        Self {
            unit_time: 0.5..=2.0,
            daily_capacity: 100..=500,
            overall_capacity: 1000..=2000,
        }
    }
}

impl GenerationRanges {
    /// 檢查各範圍下限不大於上限
    pub fn validate(&self) -> prodsim_core::Result<()> {
        let (lo, hi) = (*self.unit_time.start(), *self.unit_time.end());
        if !(lo.is_finite() && hi.is_finite() && lo <= hi) {
            return Err(invalid_range("unit_time", lo, hi));
        }
        check_int_range("daily_capacity", &self.daily_capacity)?;
        check_int_range("overall_capacity", &self.overall_capacity)?;
        Ok(())
    }
}

/// 隨機產生的單一產品參數
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductParameters {
    pub unit_time: f64,
    pub daily_capacity: u32,
}

/// 隨機配置產生器
pub struct RandomConfigGenerator;

impl RandomConfigGenerator {
    /// 為每個產品獨立、均勻地抽取生產數量（閉區間 `[min_qty, max_qty]`）
    pub fn generate_random_quantities<R, S>(
        rng: &mut R,
        names: &[S],
        min_qty: u32,
        max_qty: u32,
    ) -> prodsim_core::Result<HashMap<String, u32>>
    where
        R: Rng,
        S: AsRef<str>,
    {
        let range = min_qty..=max_qty;
        check_int_range("quantity", &range)?;

        Ok(names
            .iter()
            .map(|name| (name.as_ref().to_string(), rng.gen_range(range.clone())))
            .collect())
    }

    /// 以預設範圍產生產品參數與整體日產能
    pub fn generate_random_parameters<R, S>(
        rng: &mut R,
        names: &[S],
    ) -> (HashMap<String, ProductParameters>, u32)
    where
        R: Rng,
        S: AsRef<str>,
    {
        Self::draw_parameters(rng, names, &GenerationRanges::default())
    }

    /// 以自訂範圍產生產品參數與整體日產能
    pub fn generate_random_parameters_with_ranges<R, S>(
        rng: &mut R,
        names: &[S],
        ranges: &GenerationRanges,
    ) -> prodsim_core::Result<(HashMap<String, ProductParameters>, u32)>
    where
        R: Rng,
        S: AsRef<str>,
    {
        ranges.validate()?;
        Ok(Self::draw_parameters(rng, names, ranges))
    }

    /// 產生完整的模擬配置，產品順序與 `names` 相同
    ///
    /// 先抽生產數量（預設範圍 `[50, 200]`），再抽產品參數與整體日產能
    /// （`GenerationRanges::default()`），全部來自同一個亂數產生器。
    pub fn generate_random_config<R, S>(
        rng: &mut R,
        names: &[S],
    ) -> prodsim_core::Result<SimulationConfig>
    where
        R: Rng,
        S: AsRef<str>,
    {
        let quantities = Self::generate_random_quantities(
            rng,
            names,
            DEFAULT_MIN_QUANTITY,
            DEFAULT_MAX_QUANTITY,
        )?;
        let (params, overall_capacity) = Self::generate_random_parameters(rng, names);

        let products: ProductCatalog = names
            .iter()
            .filter_map(|name| {
                let name = name.as_ref();
                let quantity = *quantities.get(name)?;
                let p = params.get(name)?;
                Some((
                    name.to_string(),
                    ProductSpec::new(quantity, p.unit_time, p.daily_capacity),
                ))
            })
            .collect();

        tracing::debug!(
            "隨機配置：產品 {} 項，整體日產能 {}",
            products.len(),
            overall_capacity
        );

        Ok(SimulationConfig::new(overall_capacity).with_products(products))
    }

    fn draw_parameters<R, S>(
        rng: &mut R,
        names: &[S],
        ranges: &GenerationRanges,
    ) -> (HashMap<String, ProductParameters>, u32)
    where
        R: Rng,
        S: AsRef<str>,
    {
        let mut params = HashMap::with_capacity(names.len());
        for name in names {
            let unit_time = round_dp(rng.gen_range(ranges.unit_time.clone()), UNIT_TIME_DECIMALS);
            let daily_capacity = rng.gen_range(ranges.daily_capacity.clone());
            params.insert(
                name.as_ref().to_string(),
                ProductParameters {
                    unit_time,
                    daily_capacity,
                },
            );
        }

        // 整體日產能只抽一次，所有產品共用
        let overall_capacity = rng.gen_range(ranges.overall_capacity.clone());
        (params, overall_capacity)
    }
}

fn check_int_range(what: &'static str, range: &RangeInclusive<u32>) -> prodsim_core::Result<()> {
    if range.start() > range.end() {
        return Err(invalid_range(what, range.start(), range.end()));
    }
    Ok(())
}

fn invalid_range(what: &'static str, min: impl ToString, max: impl ToString) -> SimError {
    SimError::InvalidRange {
        what,
        min: min.to_string(),
        max: max.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const NAMES: [&str; 6] = ["P1", "P2", "P3", "P4", "P5", "P6"];

    #[test]
    fn test_fixed_quantity_range() {
        let mut rng = StdRng::seed_from_u64(0);

        let quantities =
            RandomConfigGenerator::generate_random_quantities(&mut rng, &["X", "Y"], 5, 5).unwrap();

        let expected: HashMap<String, u32> =
            [("X".to_string(), 5), ("Y".to_string(), 5)].into_iter().collect();
        assert_eq!(quantities, expected);
    }

    #[test]
    fn test_quantities_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);

        let quantities =
            RandomConfigGenerator::generate_random_quantities(&mut rng, &NAMES, 50, 200).unwrap();

        assert_eq!(quantities.len(), NAMES.len());
        assert!(quantities.values().all(|q| (50..=200).contains(q)));
    }

    #[test]
    fn test_inverted_quantity_range() {
        let mut rng = StdRng::seed_from_u64(0);

        let result = RandomConfigGenerator::generate_random_quantities(&mut rng, &NAMES, 10, 1);

        assert!(matches!(
            result,
            Err(SimError::InvalidRange { what: "quantity", .. })
        ));
    }

    #[test]
    fn test_parameters_within_default_ranges() {
        let mut rng = StdRng::seed_from_u64(42);

        let (params, overall) = RandomConfigGenerator::generate_random_parameters(&mut rng, &NAMES);

        assert_eq!(params.len(), NAMES.len());
        assert!((1000..=2000).contains(&overall));
        for p in params.values() {
            assert!((0.5..=2.0).contains(&p.unit_time), "unit_time {}", p.unit_time);
            assert!((100..=500).contains(&p.daily_capacity));
            // 兩位小數
            assert_eq!(round_dp(p.unit_time, 2), p.unit_time);
        }
    }

    #[test]
    fn test_same_seed_same_parameters() {
        let mut first = StdRng::seed_from_u64(2024);
        let mut second = StdRng::seed_from_u64(2024);

        let a = RandomConfigGenerator::generate_random_parameters(&mut first, &NAMES);
        let b = RandomConfigGenerator::generate_random_parameters(&mut second, &NAMES);

        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_ranges() {
        let mut rng = StdRng::seed_from_u64(3);
        let ranges = GenerationRanges {
            unit_time: 1.0..=1.0,
            daily_capacity: 250..=250,
            overall_capacity: 800..=800,
        };

        let (params, overall) =
            RandomConfigGenerator::generate_random_parameters_with_ranges(&mut rng, &["A"], &ranges)
                .unwrap();

        assert_eq!(overall, 800);
        assert_eq!(
            params.get("A"),
            Some(&ProductParameters {
                unit_time: 1.0,
                daily_capacity: 250
            })
        );
    }

    #[test]
    fn test_invalid_custom_ranges() {
        let mut rng = StdRng::seed_from_u64(3);
        let ranges = GenerationRanges {
            overall_capacity: 2000..=1000,
            ..GenerationRanges::default()
        };

        let result =
            RandomConfigGenerator::generate_random_parameters_with_ranges(&mut rng, &["A"], &ranges);

        assert!(matches!(
            result,
            Err(SimError::InvalidRange {
                what: "overall_capacity",
                ..
            })
        ));
    }

    #[test]
    fn test_random_config_keeps_name_order() {
        let mut rng = StdRng::seed_from_u64(11);

        let config = RandomConfigGenerator::generate_random_config(&mut rng, &NAMES).unwrap();

        let names: Vec<&str> = config.products.names().collect();
        assert_eq!(names, NAMES.to_vec());
        assert!(config.validate().is_ok());
        assert!(config
            .products
            .specs()
            .all(|s| (DEFAULT_MIN_QUANTITY..=DEFAULT_MAX_QUANTITY).contains(&s.quantity)));
    }

    #[test]
    fn test_random_config_matches_separate_draws() {
        // 同一種子：整體產生與分步產生（先數量、後參數）結果一致
        let mut combined = StdRng::seed_from_u64(5);
        let mut stepwise = StdRng::seed_from_u64(5);

        let config = RandomConfigGenerator::generate_random_config(&mut combined, &NAMES).unwrap();
        let quantities = RandomConfigGenerator::generate_random_quantities(
            &mut stepwise,
            &NAMES,
            DEFAULT_MIN_QUANTITY,
            DEFAULT_MAX_QUANTITY,
        )
        .unwrap();
        let (params, overall) =
            RandomConfigGenerator::generate_random_parameters(&mut stepwise, &NAMES);

        assert_eq!(config.overall_daily_capacity, overall);
        for name in NAMES {
            let p = params[name];
            assert_eq!(
                config.products.get(name),
                Some(&ProductSpec::new(quantities[name], p.unit_time, p.daily_capacity))
            );
        }
    }
}
