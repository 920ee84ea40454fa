//! Closed, enumerable field-key sets.
//!
//! Domain types usually expose a small fixed set of filterable fields.
//! [`FilterKey`] gives those fields symbolic names with a canonical lowercase
//! raw form and case-insensitive lookup, so wire-level field names can be
//! matched without scattering string literals through a resolver.

/// A finite set of symbolic field names for one filterable type.
///
/// Implementors are plain fieldless enums; `ALL` lists every key in
/// declaration order and `raw` supplies the canonical lowercase form used on
/// the wire.
pub trait FilterKey: Sized + Copy + 'static {
    /// Every key of the set, in declaration order.
    const ALL: &'static [Self];

    /// The canonical lowercase string form of this key.
    fn raw(&self) -> &'static str;

    /// Case-insensitive lookup. Unknown names yield `None`, never a default.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.raw().eq_ignore_ascii_case(name))
    }
}
