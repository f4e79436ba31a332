use core::fmt;

/// The representation of a duration's count.
///
/// Implemented for `i32`, `i64`, `u32`, `u64`, `f32` and `f64`.
pub trait Count: Copy + Default + PartialEq + PartialOrd + fmt::Display + fmt::Debug + Send + Sync + 'static {
    /// `true` when conversions truncate toward zero.
    const INTEGRAL: bool;

    /// Primitive name used in type paths.
    const NAME: &'static str;

    /// Converts from `f64`, truncating integral counts.
    ///
    /// Returns `None` for NaN and for values the representation cannot hold.
    fn from_f64(value: f64) -> Option<Self>;

    fn to_f64(self) -> f64;
}

macro_rules! impl_integral_count {
    ($($ty:ident: $lo:expr, $hi:expr;)*) => {$(
        impl Count for $ty {
            const INTEGRAL: bool = true;
            const NAME: &'static str = stringify!($ty);

            #[inline]
            fn from_f64(value: f64) -> Option<Self> {
                let value = value.trunc();
                // `$hi` is exclusive and exactly representable.
                (value >= $lo && value < $hi).then_some(value as $ty)
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_integral_count! {
    i32: i32::MIN as f64, -(i32::MIN as f64);
    i64: i64::MIN as f64, -(i64::MIN as f64);
    u32: 0.0, u32::MAX as f64 + 1.0;
    u64: 0.0, u64::MAX as f64;
}

macro_rules! impl_float_count {
    ($($ty:ident),*) => {$(
        impl Count for $ty {
            const INTEGRAL: bool = false;
            const NAME: &'static str = stringify!($ty);

            #[inline]
            fn from_f64(value: f64) -> Option<Self> {
                (!value.is_nan()).then_some(value as $ty)
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_float_count!(f32, f64);

#[cfg(test)]
mod tests {
    use super::Count;

    #[test]
    fn integral_counts_truncate() {
        assert_eq!(i64::from_f64(2.9), Some(2));
        assert_eq!(i64::from_f64(-2.9), Some(-2));
        assert_eq!(u32::from_f64(-0.5), Some(0));
        assert_eq!(u32::from_f64(-1.0), None);
        assert_eq!(i32::from_f64(f64::NAN), None);
        assert_eq!(i32::from_f64(3e9), None);
        assert_eq!(u64::from_f64(f64::INFINITY), None);
    }

    #[test]
    fn float_counts_keep_fraction() {
        assert_eq!(f64::from_f64(1.5), Some(1.5));
        assert_eq!(f32::from_f64(0.25), Some(0.25));
        assert_eq!(f64::from_f64(f64::NAN), None);
    }
}
