use alloc::format;
use alloc::string::ToString;
use core::time::Duration;

use serde_json::Value;

use crate::convert::{ConvertError, Numeric, ValueKind, decode_string};
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell, concat};
use crate::info::{DurationInfo, ReflectKind, TypeInfo, TypePath, Typed};
use crate::ops::{ReflectMut, ReflectRef};
use crate::time::{Count, DurationOf, TimeUnit, UnitKind, decode_amount, split_quantity};
use crate::{FromValue, Reflect};

// -----------------------------------------------------------------------------
// DurationOf

impl<U: TimeUnit, R: Count> TypePath for DurationOf<U, R> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&["fp_reflect::time::DurationOf<fp_reflect::time::", U::NAME, ", ", R::NAME, ">"])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["DurationOf<", U::NAME, ", ", R::NAME, ">"]))
    }
}

impl<U: TimeUnit, R: Count> Typed for DurationOf<U, R> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Duration(DurationInfo::new::<Self>(U::KIND, R::INTEGRAL)))
    }
}

impl<U: TimeUnit, R: Count> Reflect for DurationOf<U, R> {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Duration
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Opaque(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Opaque(self)
    }

    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }

    fn try_apply(&mut self, value: &Value) -> Result<(), ConvertError> {
        *self = Self::from_value(value)?;
        Ok(())
    }
}

impl<U: TimeUnit, R: Count> FromValue for DurationOf<U, R> {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        let amount = decode_amount(value, U::KIND)?;
        Self::from_amount(amount).ok_or_else(|| ConvertError::OutOfRange {
            input: decode_string(value),
            target: R::NAME,
        })
    }
}

// -----------------------------------------------------------------------------
// core::time::Duration

impl TypePath for Duration {
    #[inline]
    fn type_path() -> &'static str {
        "core::time::Duration"
    }

    #[inline]
    fn type_name() -> &'static str {
        "Duration"
    }
}

impl Typed for Duration {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Duration(DurationInfo::new::<Self>(UnitKind::Seconds, false)))
    }
}

impl Reflect for Duration {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Duration
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Opaque(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Opaque(self)
    }

    /// Whole seconds encode as `"<n>s"`, whole milliseconds as `"<n>ms"`,
    /// anything finer as exact fractional seconds.
    fn to_value(&self) -> Value {
        let secs = self.as_secs();
        let nanos = self.subsec_nanos();
        let text = if nanos == 0 {
            format!("{secs}s")
        } else if nanos % 1_000_000 == 0 {
            format!("{}ms", self.as_millis())
        } else {
            let fraction = format!("{nanos:09}");
            format!("{secs}.{}s", fraction.trim_end_matches('0'))
        };
        Value::String(text)
    }

    fn try_apply(&mut self, value: &Value) -> Result<(), ConvertError> {
        *self = Self::from_value(value)?;
        Ok(())
    }
}

impl FromValue for Duration {
    /// Strings are read digit by digit, so every literal this type encodes
    /// decodes back to the same value. Bare numbers count seconds.
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        let out_of_range = || ConvertError::InvalidDuration {
            input: decode_string(value),
            reason: "negative or too large",
        };

        match value {
            Value::String(text) => {
                let (number, unit) = split_quantity(text)?;
                exact_duration(number, unit.unwrap_or(UnitKind::Seconds)).ok_or_else(out_of_range)
            }
            Value::Number(number) => match Numeric::of_number(number) {
                Numeric::Int(secs) => u64::try_from(secs).map(Duration::from_secs).map_err(|_| out_of_range()),
                Numeric::UInt(secs) => Ok(Duration::from_secs(secs)),
                Numeric::Float(secs) => Duration::try_from_secs_f64(secs).map_err(|_| out_of_range()),
            },
            other => Err(ConvertError::TypeMismatch {
                expected: "a duration string or a number",
                found: ValueKind::of(other),
            }),
        }
    }
}

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Converts `[+-]digits[.[digits]]` counted in `unit` to a `Duration`,
/// truncating below one nanosecond. Returns `None` for negative or
/// unrepresentable amounts.
fn exact_duration(number: &str, unit: UnitKind) -> Option<Duration> {
    let (negative, digits) = match number.as_bytes().first() {
        Some(b'-') => (true, &number[1..]),
        Some(b'+') => (false, &number[1..]),
        _ => (false, number),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));

    let whole: u128 = whole.parse().ok()?;
    let mut fraction_nanos = 0u128;
    for (place, digit) in fraction.bytes().take(9).enumerate() {
        fraction_nanos += u128::from(digit - b'0') * 10u128.pow(8 - place as u32);
    }

    // The amount scaled by 1e9, then converted from `unit` to nanoseconds.
    let scaled = whole.checked_mul(NANOS_PER_SEC)?.checked_add(fraction_nanos)?;
    let total = scaled.checked_mul(u128::from(unit.millis()))? / 1_000;

    if negative && total != 0 {
        return None;
    }

    let secs = u64::try_from(total / NANOS_PER_SEC).ok()?;
    Some(Duration::new(secs, (total % NANOS_PER_SEC) as u32))
}
