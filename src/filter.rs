//! The filter entity and its activation state machine.
//!
//! A [`Filter`] pairs one field of a domain type with the field's legal
//! values and the subset currently selected. UI code drives the selection
//! through `toggle`/`activate`/`deactivate`; the matching side asks
//! [`Filter::matches`] whether a candidate object survives.
//!
//! An empty active set means "no filter applied" and accepts every object.
//! Under the dismiss policy a selection that grows to cover every value is
//! folded back into that empty form, since both states mean the same thing.

use std::fmt;
use std::sync::Arc;

use crate::error::{FilterError, Result};
use crate::resolver::ValueAccessor;
use crate::value::FilterValue;

/// A single filter over one field of `T`.
pub struct Filter<T> {
    raw_key: String,
    comparison_target: ValueAccessor<T>,
    values: Vec<FilterValue>,
    active_values: Vec<FilterValue>,
    dismiss_values_when_all_are_selected: bool,
}

impl<T> Filter<T> {
    /// Create a filter with an empty selection.
    ///
    /// Duplicate entries in `values` are dropped, keeping the first
    /// occurrence; order is otherwise preserved. The dismiss policy defaults
    /// to `true`.
    pub fn new(
        raw_key: impl Into<String>,
        comparison_target: ValueAccessor<T>,
        values: Vec<FilterValue>,
    ) -> Self {
        let mut unique: Vec<FilterValue> = Vec::with_capacity(values.len());
        for value in values {
            if !unique.contains(&value) {
                unique.push(value);
            }
        }
        Self {
            raw_key: raw_key.into(),
            comparison_target,
            values: unique,
            active_values: Vec::new(),
            dismiss_values_when_all_are_selected: true,
        }
    }

    /// Override the collapse policy for this filter.
    pub fn with_dismiss_policy(mut self, dismiss: bool) -> Self {
        self.dismiss_values_when_all_are_selected = dismiss;
        self
    }

    /// The filter's identity within a collection.
    pub fn raw_key(&self) -> &str {
        &self.raw_key
    }

    /// Every legal value for this field.
    pub fn values(&self) -> &[FilterValue] {
        &self.values
    }

    /// The currently selected subset.
    pub fn active_values(&self) -> &[FilterValue] {
        &self.active_values
    }

    /// Whether a full selection collapses back to the empty no-filter form.
    pub fn dismiss_values_when_all_are_selected(&self) -> bool {
        self.dismiss_values_when_all_are_selected
    }

    fn ensure_defined(&self, value: &FilterValue) -> Result<()> {
        if self.values.contains(value) {
            Ok(())
        } else {
            Err(FilterError::UndefinedValue {
                key: self.raw_key.clone(),
                value: value.clone(),
            })
        }
    }

    // active_values holds no duplicates and only members of values, so a
    // length match means the selection covers the full set.
    fn selection_is_full(&self) -> bool {
        !self.values.is_empty() && self.active_values.len() == self.values.len()
    }

    fn collapse_if_full(&mut self) {
        if self.dismiss_values_when_all_are_selected && self.selection_is_full() {
            self.active_values.clear();
        }
    }

    /// Flip one value's membership in the selection.
    ///
    /// Fails with [`FilterError::UndefinedValue`] if `value` is not among
    /// this filter's legal values; the selection is untouched on failure.
    ///
    /// A fully active selection only survives [`Filter::activate_all_values`];
    /// under the dismiss policy the first toggle afterwards normalizes it back
    /// to the empty no-filter form instead of flipping a single value.
    pub fn toggle(&mut self, value: &FilterValue) -> Result<()> {
        self.ensure_defined(value)?;
        if self.dismiss_values_when_all_are_selected && self.selection_is_full() {
            self.active_values.clear();
            return Ok(());
        }
        match self.active_values.iter().position(|active| active == value) {
            Some(index) => {
                self.active_values.remove(index);
            }
            None => self.active_values.push(value.clone()),
        }
        self.collapse_if_full();
        Ok(())
    }

    /// Add one value to the selection; a no-op if it is already active.
    pub fn activate(&mut self, value: &FilterValue) -> Result<()> {
        self.ensure_defined(value)?;
        if !self.is_value_active(value) {
            self.active_values.push(value.clone());
            self.collapse_if_full();
        }
        Ok(())
    }

    /// Remove one value from the selection; a no-op if it is not active.
    pub fn deactivate(&mut self, value: &FilterValue) -> Result<()> {
        self.ensure_defined(value)?;
        self.active_values.retain(|active| active != value);
        Ok(())
    }

    /// Select every value verbatim.
    ///
    /// This is the one path that bypasses the dismiss policy and can leave
    /// the full set visibly active.
    pub fn activate_all_values(&mut self) {
        self.active_values = self.values.clone();
    }

    /// Clear the selection back to the no-filter form.
    pub fn deactivate_all_values(&mut self) {
        self.active_values.clear();
    }

    /// Non-mutating variant of [`Filter::activate_all_values`].
    pub fn as_all_values_activated(&self) -> Self {
        let mut copy = self.clone();
        copy.activate_all_values();
        copy
    }

    /// Non-mutating variant of [`Filter::deactivate_all_values`].
    pub fn as_all_values_deactivated(&self) -> Self {
        let mut copy = self.clone();
        copy.deactivate_all_values();
        copy
    }

    /// Whether `value` is currently selected.
    pub fn is_value_active(&self, value: &FilterValue) -> bool {
        self.active_values.contains(value)
    }

    /// True when every value is selected and also when none is: the empty
    /// selection means "no filter applied", which accepts everything.
    pub fn all_values_are_active(&self) -> bool {
        self.active_values.is_empty() || self.selection_is_full()
    }

    /// Whether this filter constrains anything (nonempty selection).
    pub fn is_active(&self) -> bool {
        !self.active_values.is_empty()
    }

    /// Whether `object` passes this filter.
    ///
    /// An empty selection accepts everything; otherwise the object's field
    /// value, resolved through the bound accessor, must be among the active
    /// values.
    pub fn matches(&self, object: &T) -> bool {
        if self.active_values.is_empty() {
            return true;
        }
        let resolved = (self.comparison_target)(object);
        self.active_values.contains(&resolved)
    }
}

impl<T> Clone for Filter<T> {
    fn clone(&self) -> Self {
        Self {
            raw_key: self.raw_key.clone(),
            comparison_target: Arc::clone(&self.comparison_target),
            values: self.values.clone(),
            active_values: self.active_values.clone(),
            dismiss_values_when_all_are_selected: self.dismiss_values_when_all_are_selected,
        }
    }
}

impl<T> fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("raw_key", &self.raw_key)
            .field("values", &self.values)
            .field("active_values", &self.active_values)
            .field(
                "dismiss_values_when_all_are_selected",
                &self.dismiss_values_when_all_are_selected,
            )
            .finish_non_exhaustive()
    }
}

/// Filter identity is the `raw_key`; equality also compares the active
/// selection (order-insensitively) but ignores `values`, the accessor and
/// the dismiss policy.
impl<T> PartialEq for Filter<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw_key == other.raw_key
            && same_value_set(&self.active_values, &other.active_values)
    }
}

fn same_value_set(a: &[FilterValue], b: &[FilterValue]) -> bool {
    a.len() == b.len() && a.iter().all(|value| b.contains(value))
}
