//! Items referenced by the output of `#[derive(Reflect)]`. Not public API.

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::info::TypePath;
    use crate::ops::Enum;

    /// A registration hook submitted by derived enums that declare labels.
    pub struct __AutoRegisterFunc(pub fn());

    inventory::collect!(__AutoRegisterFunc);

    /// The hook submitted for `E`.
    pub fn __register_labels<E: Enum + TypePath>() {
        crate::registry::insert_declared_labels::<E>();
    }

    pub(crate) fn run_all() {
        let mut count = 0usize;
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)();
            count += 1;
        }
        log::trace!("ran {count} enum label registration hooks");
    }
}
