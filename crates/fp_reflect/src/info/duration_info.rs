use crate::info::{Type, TypePath};
use crate::time::UnitKind;

/// Information of a duration quantity type.
#[derive(Clone, Debug)]
pub struct DurationInfo {
    ty: Type,
    unit: UnitKind,
    integral: bool,
}

impl DurationInfo {
    /// Creates the info of `T`, counting in `unit`.
    ///
    /// `integral` is `true` when the count truncates on conversion.
    #[inline]
    pub fn new<T: TypePath>(unit: UnitKind, integral: bool) -> Self {
        Self {
            ty: Type::of::<T>(),
            unit,
            integral,
        }
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// The unit a bare number is counted in.
    #[inline]
    pub const fn unit(&self) -> UnitKind {
        self.unit
    }

    #[inline]
    pub const fn is_integral(&self) -> bool {
        self.integral
    }
}
