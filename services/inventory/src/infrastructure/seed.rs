//! 初始数据加载
//!
//! 启动时一次性生成目录内容：来自 JSON 文件，或者使用内置样例数据。

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use spacecraft_config::SeedConfig;
use tracing::info;

use crate::domain::{Category, Dimensions, Manufacturer, MetadataValue, Part, PartId};
use crate::error::InventoryError;

/// 种子文件中的一条记录
///
/// `id` 缺省时自动生成；时间戳在加载时统一设置。
#[derive(Debug, Clone, Deserialize)]
pub struct SeedPart {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub stock_quantity: i64,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
    #[serde(default)]
    pub manufacturer: Option<Manufacturer>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub metadata: HashMap<String, MetadataValue>,
}

impl SeedPart {
    pub fn into_part(self, now: DateTime<Utc>) -> Part {
        let id = self.id.map(PartId::from).unwrap_or_else(PartId::generate);
        Part {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            stock_quantity: self.stock_quantity,
            category: self.category,
            dimensions: self.dimensions,
            manufacturer: self.manufacturer,
            tags: self.tags,
            metadata: self.metadata,
            created_at: now,
            updated_at: now,
        }
    }
}

/// 种子数据加载器
pub struct SeedLoader;

impl SeedLoader {
    /// 按配置选择数据来源
    pub fn from_config(config: &SeedConfig) -> Result<Vec<Part>, InventoryError> {
        match &config.path {
            Some(path) => Self::from_file(path),
            None => {
                let parts = Self::builtin();
                info!(count = parts.len(), "Using built-in seed catalog");
                Ok(parts)
            }
        }
    }

    /// 从 JSON 文件加载（顶层为记录数组）
    pub fn from_file(path: impl AsRef<Path>) -> Result<Vec<Part>, InventoryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| InventoryError::SeedIo {
            path: path.display().to_string(),
            source,
        })?;
        let parts = Self::from_json(&content)?;
        info!(path = %path.display(), count = parts.len(), "Seed file loaded");
        Ok(parts)
    }

    pub fn from_json(json: &str) -> Result<Vec<Part>, InventoryError> {
        let records: Vec<SeedPart> = serde_json::from_str(json)?;
        let now = Utc::now();
        Ok(records.into_iter().map(|r| r.into_part(now)).collect())
    }

    /// 内置样例目录
    pub fn builtin() -> Vec<Part> {
        let now = Utc::now();
        vec![
            Part::new(PartId::generate(), "Main Engine", Category::Engine, now)
                .with_description("Core booster")
                .with_price(9999.99)
                .with_stock_quantity(5)
                .with_dimensions(Dimensions::new(200.0, 200.0, 300.0, 1200.0))
                .with_manufacturer(Manufacturer::new("AeroGmbH", "Germany", "https://aero"))
                .with_tags(["engine", "core"])
                .with_metadata("series", "X"),
            Part::new(PartId::generate(), "Cryo Fuel Tank", Category::Fuel, now)
                .with_description("Insulated liquid oxygen tank")
                .with_price(4200.0)
                .with_stock_quantity(12)
                .with_dimensions(Dimensions::new(400.0, 150.0, 150.0, 800.0))
                .with_manufacturer(Manufacturer::new("Nordtank", "Norway", "https://nordtank"))
                .with_tags(["fuel", "cryogenic"])
                .with_metadata("capacity_liters", 5000_i64),
            Part::new(PartId::generate(), "Panoramic Porthole", Category::Porthole, now)
                .with_description("Triple-pane viewing port")
                .with_price(1350.5)
                .with_stock_quantity(30)
                .with_dimensions(Dimensions::new(60.0, 60.0, 12.0, 45.0))
                .with_manufacturer(Manufacturer::new("ClearView", "France", "https://clearview"))
                .with_tags(["glass", "crew"])
                .with_metadata("pressure_rated", true),
            Part::new(PartId::generate(), "Delta Wing", Category::Wing, now)
                .with_description("Carbon composite wing")
                .with_price(15800.0)
                .with_stock_quantity(2)
                .with_dimensions(Dimensions::new(900.0, 350.0, 40.0, 2100.0))
                .with_manufacturer(Manufacturer::new("SkyForge", "USA", "https://skyforge"))
                .with_tags(["aero", "composite"])
                .with_metadata("span_m", 9.0),
            Part::new(PartId::generate(), "Hull Plate", Category::Hull, now)
                .with_description("Titanium hull segment")
                .with_price(780.0)
                .with_stock_quantity(120)
                .with_tags(["hull", "titanium"]),
        ]
    }
}
