use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{Enum, List, Struct};

/// An immutable kind-specific view of a reflected value.
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Enum(&'a dyn Enum),
    /// Durations and scalar leaves.
    Opaque(&'a dyn Reflect),
}

/// A mutable kind-specific view of a reflected value.
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    List(&'a mut dyn List),
    Enum(&'a mut dyn Enum),
    /// Durations and scalar leaves.
    Opaque(&'a mut dyn Reflect),
}

impl ReflectRef<'_> {
    /// Returns the kind of the viewed value.
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Enum(_) => ReflectKind::Enum,
            Self::Opaque(value) => value.reflect_kind(),
        }
    }
}

impl ReflectMut<'_> {
    /// Returns the kind of the viewed value.
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Enum(_) => ReflectKind::Enum,
            Self::Opaque(value) => value.reflect_kind(),
        }
    }
}
