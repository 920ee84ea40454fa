//! Collection-level filter operations.
//!
//! Builds filter collections from the raw key→values maps exchanged with an
//! external API, serializes them back, and applies a collection of filters to
//! a collection of candidate objects.

use std::collections::BTreeMap;

use serde_json::Value as Json;

use crate::error::{FilterError, Result};
use crate::filter::Filter;
use crate::resolver::Filterable;
use crate::value::FilterValue;

/// The wire-level shape of a filter set: field name → loosely-typed values.
pub type RawFilterMap = BTreeMap<String, Vec<Json>>;

/// Which values [`FilterOps::serialize`] emits per filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerializeScope {
    /// Every legal value.
    All,
    /// Only the active selection.
    ActiveOnly,
}

/// Build filters from a raw map, permissively.
///
/// Field names are lowercased before resolution. Fields the type does not
/// recognize are dropped silently, as are raw values with no scalar form;
/// server-supplied filter sets routinely carry entries a given client build
/// does not know about. Each filter takes the type's per-field collapse
/// policy. Filters come out in the map's key order.
pub fn filters_from_raw<T: Filterable>(raw: &RawFilterMap) -> Vec<Filter<T>> {
    let mut filters = Vec::new();
    for (field, raw_values) in raw {
        let field = field.to_lowercase();
        let Some(target) = T::accessor_for(&field) else {
            continue;
        };
        let values: Vec<FilterValue> = raw_values.iter().filter_map(FilterValue::from_json).collect();
        let dismiss = T::dismiss_values_when_all_are_selected(&field);
        filters.push(Filter::new(field, target, values).with_dismiss_policy(dismiss));
    }
    filters
}

/// Strict variant of [`filters_from_raw`]: fails with
/// [`FilterError::RawConversion`] on the first unrecognized field or
/// non-scalar value instead of dropping it.
pub fn filters_from_raw_strict<T: Filterable>(raw: &RawFilterMap) -> Result<Vec<Filter<T>>> {
    let mut filters = Vec::new();
    for (field, raw_values) in raw {
        let field = field.to_lowercase();
        let target = T::accessor_for(&field).ok_or_else(|| {
            FilterError::RawConversion(format!("unrecognized field '{field}'"))
        })?;
        let values = raw_values
            .iter()
            .map(|raw_value| {
                FilterValue::from_json(raw_value).ok_or_else(|| {
                    FilterError::RawConversion(format!(
                        "field '{field}': {raw_value} has no scalar filter-value form"
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let dismiss = T::dismiss_values_when_all_are_selected(&field);
        filters.push(Filter::new(field, target, values).with_dismiss_policy(dismiss));
    }
    Ok(filters)
}

/// Batch operations over a collection of filters.
pub trait FilterOps<T> {
    /// First filter with the given key, if any.
    fn lookup(&self, raw_key: &str) -> Option<&Filter<T>>;

    /// Replace the element sharing `filter`'s key.
    ///
    /// Fails with [`FilterError::FilterNotFound`] if no element shares it;
    /// the collection is unchanged on failure.
    fn update(&mut self, filter: Filter<T>) -> Result<()>;

    /// Only the filters with a nonempty selection.
    fn active_only(&self) -> Vec<Filter<T>>;

    /// Convert back to the raw wire shape.
    ///
    /// Every filter contributes its key; under
    /// [`SerializeScope::ActiveOnly`] an unconstrained filter contributes an
    /// empty value list.
    fn serialize(&self, scope: SerializeScope) -> RawFilterMap;

    /// Select every value of every filter.
    fn activate_all(&mut self);

    /// Clear every filter's selection.
    fn deactivate_all(&mut self);
}

impl<T> FilterOps<T> for Vec<Filter<T>> {
    fn lookup(&self, raw_key: &str) -> Option<&Filter<T>> {
        self.iter().find(|filter| filter.raw_key() == raw_key)
    }

    fn update(&mut self, filter: Filter<T>) -> Result<()> {
        match self
            .iter()
            .position(|existing| existing.raw_key() == filter.raw_key())
        {
            Some(index) => {
                self[index] = filter;
                Ok(())
            }
            None => Err(FilterError::FilterNotFound(filter.raw_key().to_string())),
        }
    }

    fn active_only(&self) -> Vec<Filter<T>> {
        self.iter().filter(|f| f.is_active()).cloned().collect()
    }

    fn serialize(&self, scope: SerializeScope) -> RawFilterMap {
        let mut raw = RawFilterMap::new();
        for filter in self {
            let values = match scope {
                SerializeScope::All => filter.values(),
                SerializeScope::ActiveOnly => filter.active_values(),
            };
            raw.insert(
                filter.raw_key().to_string(),
                values.iter().map(FilterValue::to_json).collect(),
            );
        }
        raw
    }

    fn activate_all(&mut self) {
        for filter in self.iter_mut() {
            filter.activate_all_values();
        }
    }

    fn deactivate_all(&mut self) {
        for filter in self.iter_mut() {
            filter.deactivate_all_values();
        }
    }
}

/// Applying a filter collection to a collection of candidate objects.
pub trait Filtered<T> {
    /// The objects every filter accepts, in input order.
    ///
    /// Filters AND across the collection; each filter ORs across its active
    /// values. An empty filter collection accepts everything. Pure: neither
    /// the objects nor the filters are mutated.
    fn filtered(&self, filters: &[Filter<T>]) -> Vec<T>;
}

impl<T: Clone> Filtered<T> for [T] {
    fn filtered(&self, filters: &[Filter<T>]) -> Vec<T> {
        self.iter()
            .filter(|object| filters.iter().all(|filter| filter.matches(object)))
            .cloned()
            .collect()
    }
}
