//! 零件过滤条件
//!
//! 五个条件之间为 AND；空集合表示不约束。`tags` 是多对多的交集判断，
//! 其余四个是单值对集合的成员判断。

use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::Hash;

use super::{Category, Part, PartId};

/// 单值条件：空集合不约束，否则要求 value 在集合中
fn criterion_accepts<T, Q>(criterion: &HashSet<T>, value: &Q) -> bool
where
    T: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
{
    criterion.is_empty() || criterion.contains(value)
}

/// 多值条件：空集合不约束，否则要求 values 中至少一个在集合中
fn criterion_intersects<'a, T, Q, I>(criterion: &HashSet<T>, values: I) -> bool
where
    T: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized + 'a,
    I: IntoIterator<Item = &'a Q>,
{
    criterion.is_empty() || values.into_iter().any(|value| criterion.contains(value))
}

/// 零件过滤条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartFilter {
    pub ids: HashSet<PartId>,
    pub names: HashSet<String>,
    pub categories: HashSet<Category>,
    pub manufacturer_countries: HashSet<String>,
    pub tags: HashSet<String>,
}

impl PartFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PartId>,
    {
        self.ids.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_categories<I>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = Category>,
    {
        self.categories.extend(categories);
        self
    }

    pub fn with_manufacturer_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.manufacturer_countries
            .extend(countries.into_iter().map(Into::into));
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// 没有任何条件
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
            && self.names.is_empty()
            && self.categories.is_empty()
            && self.manufacturer_countries.is_empty()
            && self.tags.is_empty()
    }

    /// 零件是否满足所有已设置的条件
    pub fn matches(&self, part: &Part) -> bool {
        criterion_accepts(&self.ids, part.id.as_str())
            && criterion_accepts(&self.names, part.name.as_str())
            && criterion_accepts(&self.categories, &part.category)
            && self.matches_country(part)
            && criterion_intersects(&self.tags, part.tags.iter().map(String::as_str))
    }

    // 没有制造商（或国家为空）的零件永远不满足非空的国家条件
    fn matches_country(&self, part: &Part) -> bool {
        if self.manufacturer_countries.is_empty() {
            return true;
        }
        part.manufacturer_country()
            .is_some_and(|country| self.manufacturer_countries.contains(country))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Manufacturer;
    use chrono::Utc;

    fn part(id: &str, name: &str, category: Category) -> Part {
        Part::new(PartId::from(id), name, category, Utc::now())
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = PartFilter::new();
        assert!(filter.is_empty());
        assert!(filter.matches(&part("a", "Main Engine", Category::Engine)));
        assert!(filter.matches(&part("b", "", Category::Unspecified)));
    }

    #[test]
    fn test_single_value_criteria() {
        let a = part("a", "Main Engine", Category::Engine);
        let b = part("b", "Hull Plate", Category::Hull);

        let by_id = PartFilter::new().with_ids(["a", "zzz"]);
        assert!(by_id.matches(&a));
        assert!(!by_id.matches(&b));

        let by_name = PartFilter::new().with_names(["Hull Plate"]);
        assert!(!by_name.matches(&a));
        assert!(by_name.matches(&b));

        let by_category = PartFilter::new().with_categories([Category::Engine]);
        assert!(by_category.matches(&a));
        assert!(!by_category.matches(&b));
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let filter = PartFilter::new()
            .with_names(["Main Engine"])
            .with_categories([Category::Engine]);

        assert!(filter.matches(&part("a", "Main Engine", Category::Engine)));
        assert!(!filter.matches(&part("b", "Main Engine", Category::Hull)));
        assert!(!filter.matches(&part("c", "Aux Engine", Category::Engine)));
    }

    #[test]
    fn test_tags_match_any() {
        let p = part("a", "Main Engine", Category::Engine).with_tags(["engine", "core"]);

        assert!(PartFilter::new().with_tags(["core", "fuel"]).matches(&p));
        assert!(!PartFilter::new().with_tags(["fuel"]).matches(&p));

        let untagged = part("b", "Plate", Category::Hull);
        assert!(!PartFilter::new().with_tags(["core"]).matches(&untagged));
    }

    #[test]
    fn test_duplicate_tags_do_not_change_matching() {
        let p = part("a", "Wing", Category::Wing).with_tags(["aero", "aero"]);
        assert!(PartFilter::new().with_tags(["aero"]).matches(&p));
        assert!(!PartFilter::new().with_tags(["fuel"]).matches(&p));
    }

    #[test]
    fn test_country_requires_manufacturer() {
        let filter = PartFilter::new().with_manufacturer_countries(["Germany"]);

        let german = part("a", "Main Engine", Category::Engine)
            .with_manufacturer(Manufacturer::new("AeroGmbH", "Germany", "https://aero"));
        let french = part("b", "Porthole", Category::Porthole)
            .with_manufacturer(Manufacturer::new("Vue", "France", ""));
        let anonymous = part("c", "Tank", Category::Fuel);

        assert!(filter.matches(&german));
        assert!(!filter.matches(&french));
        assert!(!filter.matches(&anonymous));
    }

    #[test]
    fn test_empty_country_criterion_value_never_matches_missing_manufacturer() {
        let filter = PartFilter::new().with_manufacturer_countries([""]);
        let anonymous = part("c", "Tank", Category::Fuel);
        let blank_country = part("d", "Tank", Category::Fuel)
            .with_manufacturer(Manufacturer::new("NoName", "", ""));

        assert!(!filter.matches(&anonymous));
        assert!(!filter.matches(&blank_country));
    }
}
