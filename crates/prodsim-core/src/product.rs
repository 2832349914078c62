//! 產品模型

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// 單一產品的生產參數
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductSpec {
    /// 生產數量（件）
    pub quantity: u32,

    /// 單位工時（分鐘/件）
    pub unit_time: f64,

    /// 產品日產能（件/天），僅供參考，不參與總工時計算
    pub daily_capacity: u32,
}

impl ProductSpec {
    /// 創建新的產品參數
    pub fn new(quantity: u32, unit_time: f64, daily_capacity: u32) -> Self {
        Self {
            quantity,
            unit_time,
            daily_capacity,
        }
    }

    /// 該產品的總工時（分鐘）
    pub fn total_minutes(&self) -> f64 {
        f64::from(self.quantity) * self.unit_time
    }

    /// 檢查是否有生產需求
    pub fn is_producing(&self) -> bool {
        self.quantity > 0
    }
}

/// 產品清單（名稱 → 參數），保留插入順序
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCatalog {
    entries: Vec<(String, ProductSpec)>,
}

impl ProductCatalog {
    /// 創建空的產品清單
    pub fn new() -> Self {
        Self::default()
    }

    /// 加入產品；名稱已存在時原位置替換並返回舊參數
    pub fn insert(&mut self, name: impl Into<String>, spec: ProductSpec) -> Option<ProductSpec> {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, spec)),
            None => {
                self.entries.push((name, spec));
                None
            }
        }
    }

    /// 建構器模式：加入產品
    pub fn with_product(mut self, name: impl Into<String>, spec: ProductSpec) -> Self {
        self.insert(name, spec);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ProductSpec> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, spec)| spec)
    }

    /// 依插入順序遍歷
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProductSpec)> {
        self.entries.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn specs(&self) -> impl Iterator<Item = &ProductSpec> {
        self.entries.iter().map(|(_, spec)| spec)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, ProductSpec)> for ProductCatalog {
    fn from_iter<I: IntoIterator<Item = (N, ProductSpec)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (name, spec) in iter {
            catalog.insert(name, spec);
        }
        catalog
    }
}

impl Serialize for ProductCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, spec) in &self.entries {
            map.serialize_entry(name, spec)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ProductCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = OrderedEntries::<ProductSpec>::deserialize(deserializer)?;
        Ok(entries.0.into_iter().collect())
    }
}

/// 依原始順序讀取 JSON 物件的鍵值對
///
/// 重複鍵保留最後一次出現的值，位置取第一次出現處。
#[derive(Debug)]
pub(crate) struct OrderedEntries<V>(pub(crate) Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedEntries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = OrderedEntries<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of product name to product parameters")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries: Vec<(String, V)> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    match entries.iter_mut().find(|(k, _)| *k == key) {
                        Some((_, existing)) => *existing = value,
                        None => entries.push((key, value)),
                    }
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}
