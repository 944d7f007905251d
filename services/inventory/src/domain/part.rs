//! 零件实体

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use spacecraft_errors::{AppError, AppResult};
use uuid::Uuid;

use super::Category;

/// 零件 ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
pub struct PartId(pub String);

impl PartId {
    /// 生成新的随机 ID（UUID v4）
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PartId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::borrow::Borrow<str> for PartId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// 外形尺寸
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
}

impl Dimensions {
    pub fn new(length: f64, width: f64, height: f64, weight: f64) -> Self {
        Self {
            length,
            width,
            height,
            weight,
        }
    }

    fn validate(&self) -> Result<(), String> {
        let fields = [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
            ("weight", self.weight),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(format!(
                    "dimension {} must be a non-negative number, got {}",
                    name, value
                ));
            }
        }
        Ok(())
    }
}

/// 制造商
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Manufacturer {
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub website: String,
}

impl Manufacturer {
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        website: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            website: website.into(),
        }
    }
}

/// 元数据值
///
/// 目录只存储和返回，不做任何解释
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    String(String),
    Bool(bool),
    Int64(i64),
    Double(f64),
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        Self::Int64(value)
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// 零件
///
/// 加载后不可变：目录只对外提供只读快照
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub id: PartId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_quantity: i64,
    pub category: Category,
    pub dimensions: Option<Dimensions>,
    pub manufacturer: Option<Manufacturer>,
    /// 允许重复，顺序不影响匹配
    pub tags: Vec<String>,
    pub metadata: HashMap<String, MetadataValue>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Part {
    /// 创建零件，创建时间和更新时间相同
    pub fn new(id: PartId, name: impl Into<String>, category: Category, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            price: 0.0,
            stock_quantity: 0,
            category,
            dimensions: None,
            manufacturer: None,
            tags: Vec::new(),
            metadata: HashMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_stock_quantity(mut self, stock_quantity: i64) -> Self {
        self.stock_quantity = stock_quantity;
        self
    }

    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    pub fn with_manufacturer(mut self, manufacturer: Manufacturer) -> Self {
        self.manufacturer = Some(manufacturer);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// 制造商国家；没有制造商或国家为空时返回 None
    pub fn manufacturer_country(&self) -> Option<&str> {
        self.manufacturer
            .as_ref()
            .map(|m| m.country.as_str())
            .filter(|country| !country.is_empty())
    }

    /// 校验记录级不变量
    pub fn validate(&self) -> AppResult<()> {
        if self.id.as_str().trim().is_empty() {
            return Err(AppError::validation("part id must not be empty"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(AppError::validation(format!(
                "part {} has invalid price {}",
                self.id, self.price
            )));
        }
        if self.stock_quantity < 0 {
            return Err(AppError::validation(format!(
                "part {} has negative stock quantity {}",
                self.id, self.stock_quantity
            )));
        }
        if let Some(dimensions) = &self.dimensions {
            dimensions
                .validate()
                .map_err(|e| AppError::validation(format!("part {}: {}", self.id, e)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Part {
        Part::new(PartId::from("p-1"), "Main Engine", Category::Engine, Utc::now())
            .with_price(9999.99)
            .with_stock_quantity(5)
    }

    #[test]
    fn test_generated_ids_are_unique_uuids() {
        let a = PartId::generate();
        let b = PartId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_new_part_has_equal_timestamps() {
        let part = engine();
        assert_eq!(part.created_at, part.updated_at);
    }

    #[test]
    fn test_manufacturer_country() {
        let part = engine();
        assert_eq!(part.manufacturer_country(), None);

        let part = part.with_manufacturer(Manufacturer::new("AeroGmbH", "", ""));
        assert_eq!(part.manufacturer_country(), None);

        let part = part.with_manufacturer(Manufacturer::new("AeroGmbH", "Germany", ""));
        assert_eq!(part.manufacturer_country(), Some("Germany"));
    }

    #[test]
    fn test_validate_accepts_well_formed_part() {
        let part = engine().with_dimensions(Dimensions::new(200.0, 200.0, 300.0, 1200.0));
        assert!(part.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_records() {
        let empty_id = Part::new(PartId::from("  "), "x", Category::Wing, Utc::now());
        assert!(matches!(empty_id.validate(), Err(AppError::Validation(_))));

        let negative_price = engine().with_price(-1.0);
        assert!(negative_price.validate().is_err());

        let nan_price = engine().with_price(f64::NAN);
        assert!(nan_price.validate().is_err());

        let negative_stock = engine().with_stock_quantity(-3);
        assert!(negative_stock.validate().is_err());

        let bad_dimensions = engine().with_dimensions(Dimensions::new(1.0, -1.0, 1.0, 1.0));
        assert!(bad_dimensions.validate().is_err());
    }

    #[test]
    fn test_metadata_value_untagged_json() {
        let values: HashMap<String, MetadataValue> =
            serde_json::from_str(r#"{"series":"X","rev":3,"mass":1.5,"certified":true}"#).unwrap();
        assert_eq!(values["series"], MetadataValue::String("X".into()));
        assert_eq!(values["rev"], MetadataValue::Int64(3));
        assert_eq!(values["mass"], MetadataValue::Double(1.5));
        assert_eq!(values["certified"], MetadataValue::Bool(true));
    }
}
