//! 零件类别枚举

use serde::{Deserialize, Serialize};

/// 零件类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// 未指定
    #[default]
    Unspecified,
    Engine,
    Fuel,
    Porthole,
    Wing,
    Hull,
    Avionics,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Unspecified,
        Category::Engine,
        Category::Fuel,
        Category::Porthole,
        Category::Wing,
        Category::Hull,
        Category::Avionics,
    ];

    /// 从线上整数值解析，未知值返回 None
    pub fn from_code(value: i32) -> Option<Self> {
        match value {
            0 => Some(Category::Unspecified),
            1 => Some(Category::Engine),
            2 => Some(Category::Fuel),
            3 => Some(Category::Porthole),
            4 => Some(Category::Wing),
            5 => Some(Category::Hull),
            6 => Some(Category::Avionics),
            _ => None,
        }
    }
}

impl From<Category> for i32 {
    fn from(category: Category) -> Self {
        match category {
            Category::Unspecified => 0,
            Category::Engine => 1,
            Category::Fuel => 2,
            Category::Porthole => 3,
            Category::Wing => 4,
            Category::Hull => 5,
            Category::Avionics => 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_conversion_is_consistent() {
        for category in Category::ALL {
            let code: i32 = category.into();
            assert_eq!(Category::from_code(code), Some(category));
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert_eq!(Category::from_code(42), None);
        assert_eq!(Category::from_code(-1), None);
    }

    #[test]
    fn test_serde_uses_upper_case_names() {
        let json = serde_json::to_string(&Category::Avionics).unwrap();
        assert_eq!(json, r#""AVIONICS""#);
        let parsed: Category = serde_json::from_str(r#""ENGINE""#).unwrap();
        assert_eq!(parsed, Category::Engine);
    }
}
