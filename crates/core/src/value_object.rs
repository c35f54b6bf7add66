//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object has no identity; two instances holding the same values are
/// interchangeable. `CurrencyCode("SEK")` is the same currency wherever it
/// appears, and a `RateTable` is a snapshot compared field by field.
///
/// Value objects are immutable once built. "Changing" one means constructing a
/// new instance through its validating constructor, so every live value has
/// already passed validation.
///
/// ```ignore
/// let a = CurrencyCode::parse("sek")?;
/// let b = CurrencyCode::parse("SEK")?;
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
