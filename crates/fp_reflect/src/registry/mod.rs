//! The process-wide enum label table.
//!
//! ## Menu
//!
//! - [`register_enum`] / [`register_enum!`]: attach string labels to an enum's
//!   variants.
//! - [`register_declared_labels`]: register the labels an enum declares with
//!   `#[reflect(label = "..")]`.
//! - [`labels_of`] / [`labels_by_type_id`]: read the table.
//!
//! Each enum type is registered at most once; later attempts are rejected and
//! logged. Registered enums encode as their label and decode from it, ignoring
//! ASCII case. Unregistered enums use their ordinal.
//!
//! ## auto_register
//!
//! With the `auto_register` feature, every derived enum that declares labels is
//! registered the first time the table is touched. We use the [`inventory`]
//! crate for this, so explicit registration of such an enum is rejected as a
//! duplicate.
//!
//! [`register_enum!`]: crate::register_enum!
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod enum_labels;

// -----------------------------------------------------------------------------
// Exports

pub use enum_labels::EnumLabels;

// -----------------------------------------------------------------------------
// Table

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::TypeId;
use std::sync::{PoisonError, RwLock};

use fp_utils::TypeIdMap;

use crate::info::TypePath;
use crate::ops::Enum;

static LABELS: RwLock<TypeIdMap<&'static EnumLabels>> = RwLock::new(TypeIdMap::new());

/// Registers string labels for the variants of `E`.
///
/// Returns `false`, logging a warning, if `E` already has labels.
///
/// # Examples
///
/// ```
/// use fp_reflect::{Reflect, derive::Reflect, register_enum};
/// use serde_json::json;
///
/// #[derive(Reflect, Clone, Copy, PartialEq, Debug)]
/// enum Status { Active, Inactive }
///
/// assert!(register_enum(&[(Status::Active, "active"), (Status::Inactive, "inactive")]));
/// assert!(!register_enum(&[(Status::Active, "on")]));
///
/// let mut status = Status::Inactive;
/// status.try_apply(&json!("ACTIVE")).unwrap();
/// assert_eq!(status, Status::Active);
/// assert_eq!(status.to_value(), json!("active"));
/// ```
pub fn register_enum<E: Enum + TypePath>(labels: &[(E, &'static str)]) -> bool {
    ensure_auto_registered();
    let entries: Vec<(i64, &'static str)> = labels
        .iter()
        .map(|(variant, label)| (variant.ordinal(), *label))
        .collect();
    insert_labels(TypeId::of::<E>(), E::type_path(), entries.into_boxed_slice())
}

/// Registers the labels `E` declares with `#[reflect(label = "..")]`.
///
/// Returns `false` if `E` declares none or already has labels. Called for
/// every such enum automatically under the `auto_register` feature.
pub fn register_declared_labels<E: Enum + TypePath>() -> bool {
    ensure_auto_registered();
    insert_declared_labels::<E>()
}

/// Returns the labels registered for `E`.
#[inline]
pub fn labels_of<E: 'static>() -> Option<&'static EnumLabels> {
    labels_by_type_id(TypeId::of::<E>())
}

/// Returns the labels registered for the type with id `type_id`.
pub fn labels_by_type_id(type_id: TypeId) -> Option<&'static EnumLabels> {
    ensure_auto_registered();
    LABELS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&type_id)
        .copied()
}

/// Returns `true` if `E` has registered labels.
#[inline]
pub fn is_registered<E: 'static>() -> bool {
    labels_of::<E>().is_some()
}

// Must not call `ensure_auto_registered`, it runs inside it.
pub(crate) fn insert_declared_labels<E: Enum + TypePath>() -> bool {
    let declared = E::declared_labels();
    if declared.is_empty() {
        return false;
    }
    insert_labels(TypeId::of::<E>(), E::type_path(), declared.into())
}

fn insert_labels(
    type_id: TypeId,
    type_path: &'static str,
    entries: Box<[(i64, &'static str)]>,
) -> bool {
    let count = entries.len();
    let inserted = LABELS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .try_insert(type_id, || &*Box::leak(Box::new(EnumLabels::new(type_path, entries))));

    if inserted {
        log::debug!("registered {count} labels for `{type_path}`");
    } else {
        log::warn!("labels of `{type_path}` are already registered, ignoring the new set");
    }
    inserted
}

#[cfg(feature = "auto_register")]
#[inline]
fn ensure_auto_registered() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(crate::__macro_exports::auto_register::run_all);
}

#[cfg(not(feature = "auto_register"))]
#[inline(always)]
fn ensure_auto_registered() {}

// -----------------------------------------------------------------------------
// Macro

/// Registers labels for an enum's variants, see [`register_enum`].
///
/// ```
/// use fp_reflect::{Reflect, derive::Reflect};
/// use serde_json::json;
///
/// #[derive(Reflect, Clone, Copy, PartialEq, Debug)]
/// enum Level { Debug, Info, Warn, Error }
///
/// let registered = fp_reflect::register_enum!(Level {
///     Debug => "debug",
///     Info => "info",
///     Warn => "warn",
///     Error => "error",
/// });
/// assert!(registered);
/// assert_eq!(Level::Warn.to_value(), json!("warn"));
/// ```
#[macro_export]
macro_rules! register_enum {
    ($ty:ty { $($variant:ident => $label:expr),* $(,)? }) => {
        $crate::registry::register_enum::<$ty>(&[$((<$ty>::$variant, $label)),*])
    };
}
