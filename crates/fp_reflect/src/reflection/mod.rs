// -----------------------------------------------------------------------------
// Modules

mod from_value;
mod reflect;

// -----------------------------------------------------------------------------
// Exports

pub use from_value::FromValue;
pub use reflect::Reflect;
