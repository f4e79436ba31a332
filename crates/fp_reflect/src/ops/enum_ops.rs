use crate::Reflect;

/// A unit-only enum.
///
/// The derive implements this for enums whose variants carry no data.
/// Ordinals are the variants' discriminants, so `enum P { Low = 1, High = 10 }`
/// maps `Low` to `1`.
pub trait Enum: Reflect {
    /// The discriminant of the current variant.
    fn ordinal(&self) -> i64;

    /// The identifier of the current variant.
    fn variant_name(&self) -> &'static str;

    /// Returns the variant with discriminant `ordinal`.
    fn from_ordinal(ordinal: i64) -> Option<Self>
    where
        Self: Sized;

    /// Labels declared with `#[reflect(label = "..")]`, as `(ordinal, label)`.
    ///
    /// Declared labels take effect once registered, see
    /// [`register_declared_labels`](crate::register_declared_labels).
    #[inline]
    fn declared_labels() -> &'static [(i64, &'static str)]
    where
        Self: Sized,
    {
        &[]
    }
}
