//! 模擬配置模型與配置檔載入

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use crate::product::{OrderedEntries, ProductCatalog, ProductSpec};
use crate::{Result, SimError};

/// 模擬配置：產品清單與整體日產能
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SimulationConfig {
    /// 產品清單
    pub products: ProductCatalog,

    /// 整體日產能（所有產品合計，件/天）
    pub overall_daily_capacity: u32,
}

/// 配置檔原始結構，所有欄位皆可缺，缺漏在轉換時回報
#[derive(Debug, Deserialize)]
struct RawConfig {
    products: Option<OrderedEntries<RawProduct>>,
    overall_daily_capacity: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawProduct {
    quantity: Option<u32>,
    unit_time: Option<f64>,
    daily_capacity: Option<u32>,
}

impl RawProduct {
    fn into_spec(self, name: &str) -> Result<ProductSpec> {
        let missing = |field: &str| SimError::ConfigIncomplete(format!("products.{name}.{field}"));

        Ok(ProductSpec {
            quantity: self.quantity.ok_or_else(|| missing("quantity"))?,
            unit_time: self.unit_time.ok_or_else(|| missing("unit_time"))?,
            daily_capacity: self.daily_capacity.ok_or_else(|| missing("daily_capacity"))?,
        })
    }
}

impl TryFrom<RawConfig> for SimulationConfig {
    type Error = SimError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let entries = raw
            .products
            .ok_or_else(|| SimError::ConfigIncomplete("products".to_string()))?;
        let overall_daily_capacity = raw
            .overall_daily_capacity
            .ok_or_else(|| SimError::ConfigIncomplete("overall_daily_capacity".to_string()))?;

        let mut products = ProductCatalog::new();
        for (name, raw_product) in entries.0 {
            let spec = raw_product.into_spec(&name)?;
            products.insert(name, spec);
        }

        let config = Self {
            products,
            overall_daily_capacity,
        };
        config.validate()?;
        Ok(config)
    }
}

impl SimulationConfig {
    /// 創建新的模擬配置
    pub fn new(overall_daily_capacity: u32) -> Self {
        Self {
            products: ProductCatalog::new(),
            overall_daily_capacity,
        }
    }

    /// 建構器模式：加入產品
    pub fn with_product(mut self, name: impl Into<String>, spec: ProductSpec) -> Self {
        self.products.insert(name, spec);
        self
    }

    /// 建構器模式：設置產品清單
    pub fn with_products(mut self, products: ProductCatalog) -> Self {
        self.products = products;
        self
    }

    /// 從 JSON 配置檔載入
    ///
    /// # 錯誤
    /// * `ConfigNotFound` - 路徑不存在
    /// * `ConfigMalformed` - 內容不是合法 JSON 或型別不符
    /// * `ConfigIncomplete` - 缺少 `products`、`overall_daily_capacity` 或產品欄位
    /// * `InvalidProduct` - 有生產數量的產品單位工時不為正數
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!("載入配置檔: {}", path.display());

        let file = File::open(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => SimError::ConfigNotFound(path.display().to_string()),
            _ => SimError::Io(err),
        })?;

        let raw: RawConfig =
            serde_json::from_reader(BufReader::new(file)).map_err(Self::classify_parse_error)?;

        let config = Self::try_from(raw)?;
        config.log_summary();
        Ok(config)
    }

    /// 從 JSON 字串解析
    pub fn from_json_str(text: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(text).map_err(Self::classify_parse_error)?;
        Self::try_from(raw)
    }

    /// 驗證產品參數
    ///
    /// 有生產數量的產品單位工時必須為有限正數；數量為零的產品不影響結果，不檢查。
    pub fn validate(&self) -> Result<()> {
        for (name, spec) in self.products.iter() {
            if spec.is_producing() && !(spec.unit_time.is_finite() && spec.unit_time > 0.0) {
                return Err(SimError::InvalidProduct {
                    name: name.to_string(),
                    reason: format!("單位工時必須為正數，實際為 {}", spec.unit_time),
                });
            }
        }
        Ok(())
    }

    fn classify_parse_error(err: serde_json::Error) -> SimError {
        if err.is_io() {
            SimError::Io(err.into())
        } else {
            SimError::ConfigMalformed(err.to_string())
        }
    }

    fn log_summary(&self) {
        if self.products.is_empty() {
            tracing::warn!("配置檔產品清單為空");
        }
        tracing::debug!(
            "配置載入完成：產品 {} 項，整體日產能 {}",
            self.products.len(),
            self.overall_daily_capacity
        );
    }
}
