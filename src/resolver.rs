//! The key-resolver capability.
//!
//! A domain type opts into filtering by implementing [`Filterable`]: given a
//! field name from the wire, it hands back an accessor that extracts that
//! field's erased value from an instance. The accessor is a plain function
//! value bound once at filter construction, not a reflective path.

use std::sync::Arc;

use crate::value::FilterValue;

/// An accessor bound to one field of `T`, producing the field's erased value.
pub type ValueAccessor<T> = Arc<dyn Fn(&T) -> FilterValue + Send + Sync>;

/// Contract a domain type implements to expose its filterable fields.
pub trait Filterable: Sized {
    /// Map a lowercased field name to an accessor for that field, or `None`
    /// if the type has no such field.
    fn accessor_for(field: &str) -> Option<ValueAccessor<Self>>;

    /// Per-field override of the collapse policy: whether selecting every
    /// value of this field should reset the selection to "no filter".
    fn dismiss_values_when_all_are_selected(_field: &str) -> bool {
        true
    }
}

/// Wrap a field-extraction closure as a [`ValueAccessor`].
///
/// The closure may return any type convertible into [`FilterValue`], which
/// keeps `accessor_for` implementations down to one line per field:
///
/// ```ignore
/// fn accessor_for(field: &str) -> Option<ValueAccessor<Self>> {
///     match field {
///         "age" => Some(accessor(|p: &Person| p.age)),
///         "gender" => Some(accessor(|p: &Person| p.gender.clone())),
///         _ => None,
///     }
/// }
/// ```
pub fn accessor<T, V, F>(extract: F) -> ValueAccessor<T>
where
    F: Fn(&T) -> V + Send + Sync + 'static,
    V: Into<FilterValue>,
{
    Arc::new(move |object| extract(object).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Person {
        age: i64,
    }

    #[test]
    fn accessor_converts_through_into() {
        let age = accessor(|p: &Person| p.age);
        assert_eq!(age(&Person { age: 11 }), FilterValue::Int(11));
    }
}
