//! Domain <-> Proto conversions

use chrono::{DateTime, Utc};
use prost_types::Timestamp;

use crate::api::proto::v1;
use crate::domain::{Category, Dimensions, Manufacturer, MetadataValue, Part, PartFilter, PartId};

// ========== Part 转换 ==========

pub fn part_to_proto(part: &Part) -> v1::Part {
    v1::Part {
        uuid: part.id.to_string(),
        name: part.name.clone(),
        description: part.description.clone(),
        price: part.price,
        stock_quantity: part.stock_quantity,
        category: category_to_proto(part.category) as i32,
        dimensions: part.dimensions.as_ref().map(dimensions_to_proto),
        manufacturer: part.manufacturer.as_ref().map(manufacturer_to_proto),
        tags: part.tags.clone(),
        metadata: part
            .metadata
            .iter()
            .map(|(key, value)| (key.clone(), metadata_value_to_proto(value)))
            .collect(),
        created_at: Some(datetime_to_timestamp(part.created_at)),
        updated_at: Some(datetime_to_timestamp(part.updated_at)),
    }
}

pub fn category_to_proto(category: Category) -> v1::Category {
    match category {
        Category::Unspecified => v1::Category::Unspecified,
        Category::Engine => v1::Category::Engine,
        Category::Fuel => v1::Category::Fuel,
        Category::Porthole => v1::Category::Porthole,
        Category::Wing => v1::Category::Wing,
        Category::Hull => v1::Category::Hull,
        Category::Avionics => v1::Category::Avionics,
    }
}

fn dimensions_to_proto(dimensions: &Dimensions) -> v1::Dimensions {
    v1::Dimensions {
        length: dimensions.length,
        width: dimensions.width,
        height: dimensions.height,
        weight: dimensions.weight,
    }
}

fn manufacturer_to_proto(manufacturer: &Manufacturer) -> v1::Manufacturer {
    v1::Manufacturer {
        name: manufacturer.name.clone(),
        country: manufacturer.country.clone(),
        website: manufacturer.website.clone(),
    }
}

fn metadata_value_to_proto(value: &MetadataValue) -> v1::Value {
    let kind = match value {
        MetadataValue::String(v) => v1::value::Kind::StringValue(v.clone()),
        MetadataValue::Int64(v) => v1::value::Kind::Int64Value(*v),
        MetadataValue::Double(v) => v1::value::Kind::DoubleValue(*v),
        MetadataValue::Bool(v) => v1::value::Kind::BoolValue(*v),
    };
    v1::Value { kind: Some(kind) }
}

/// 将 DateTime 转换为 Timestamp
pub fn datetime_to_timestamp(dt: DateTime<Utc>) -> Timestamp {
    Timestamp {
        seconds: dt.timestamp(),
        // 闰秒时 chrono 的纳秒部分可达 1_999_999_999
        nanos: dt.timestamp_subsec_nanos().min(999_999_999) as i32,
    }
}

// ========== Proto to Domain 转换 ==========

/// 转换过滤条件
///
/// 未知的类别值不可能匹配任何零件，直接丢弃；如果类别条件只包含未知值，
/// 整个过滤条件不可满足，返回 `None`（调用方应直接返回空结果）。
pub fn filter_from_proto(filter: Option<v1::PartsFilter>) -> Option<PartFilter> {
    let Some(filter) = filter else {
        return Some(PartFilter::new());
    };

    let categories: Vec<Category> = filter
        .categories
        .iter()
        .filter_map(|code| Category::from_code(*code))
        .collect();
    if !filter.categories.is_empty() && categories.is_empty() {
        return None;
    }

    Some(
        PartFilter::new()
            .with_ids(filter.uuids.into_iter().map(PartId::from))
            .with_names(filter.names)
            .with_categories(categories)
            .with_manufacturer_countries(filter.manufacturer_countries)
            .with_tags(filter.tags),
    )
}
