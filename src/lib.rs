//! # Sift
//!
//! Sift is a **UI-agnostic object-filtering library**. It backs toggleable
//! filter controls (checkboxes, chips) over arbitrary heterogeneous field
//! types without bespoke filter logic per field: a domain type declares which
//! of its fields are filterable, and sift handles value matching, selection
//! state, and the wire round-trip.
//!
//! ## The pieces
//!
//! ```text
//! raw filter map          field name → loosely-typed values, as exchanged
//!      │                  with an external API (collection.rs)
//!      ▼
//! filters_from_raw        resolves each field through the type's Filterable
//!      │                  implementation (resolver.rs)
//!      ▼
//! Vec<Filter<T>>          one Filter per field: legal values + the active
//!      │                  selection, driven by toggle/activate/deactivate
//!      │                  (filter.rs, values erased via value.rs)
//!      ▼
//! objects.filtered(..)    AND across filters, OR across each filter's
//!                         active values (collection.rs)
//! ```
//!
//! Independently, `serialize` converts a filter collection back into the raw
//! map for transmission.
//!
//! ## Selection semantics
//!
//! An empty selection means "no filter applied" and accepts everything. Under
//! the default collapse policy a selection that grows to cover every legal
//! value folds back to the empty form, since both states accept everything;
//! [`Filter::activate_all_values`] is the one path that leaves a full
//! selection visibly active. Domain types can opt out per field through
//! [`Filterable::dismiss_values_when_all_are_selected`].
//!
//! ## Example
//!
//! ```
//! use sift::{accessor, filters_from_raw, FilterOps, Filterable, Filtered, ValueAccessor};
//!
//! #[derive(Clone)]
//! struct Person {
//!     age: i64,
//!     gender: String,
//! }
//!
//! impl Filterable for Person {
//!     fn accessor_for(field: &str) -> Option<ValueAccessor<Self>> {
//!         match field {
//!             "age" => Some(accessor(|p: &Person| p.age)),
//!             "gender" => Some(accessor(|p: &Person| p.gender.clone())),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let raw: sift::RawFilterMap = serde_json::from_value(serde_json::json!({
//!     "age": [10, 11, 12],
//!     "gender": ["male", "female"],
//! }))
//! .unwrap();
//!
//! let mut filters = filters_from_raw::<Person>(&raw);
//! let mut age = filters.lookup("age").unwrap().clone();
//! age.toggle(&11.into()).unwrap();
//! filters.update(age).unwrap();
//!
//! let people = vec![
//!     Person { age: 10, gender: "male".into() },
//!     Person { age: 11, gender: "female".into() },
//! ];
//! let matching = people.filtered(&filters);
//! assert_eq!(matching.len(), 1);
//! assert_eq!(matching[0].age, 11);
//! ```
//!
//! ## No I/O, no locking
//!
//! Every operation is synchronous and works on values the caller owns; the
//! library performs no I/O and provides no synchronization. Callers sharing a
//! filter collection across threads synchronize externally.

pub mod collection;
pub mod error;
pub mod filter;
pub mod key;
pub mod resolver;
pub mod value;

pub use collection::{
    filters_from_raw, filters_from_raw_strict, FilterOps, Filtered, RawFilterMap, SerializeScope,
};
pub use error::{FilterError, Result};
pub use filter::Filter;
pub use key::FilterKey;
pub use resolver::{accessor, Filterable, ValueAccessor};
pub use value::FilterValue;
