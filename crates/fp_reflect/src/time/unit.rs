use core::fmt;

// -----------------------------------------------------------------------------
// UnitKind

/// A unit of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UnitKind {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl UnitKind {
    /// Every unit, shortest first.
    pub const ALL: [Self; 5] = [
        Self::Milliseconds,
        Self::Seconds,
        Self::Minutes,
        Self::Hours,
        Self::Days,
    ];

    /// The length of the unit in milliseconds.
    pub const fn millis(self) -> u64 {
        match self {
            Self::Milliseconds => 1,
            Self::Seconds => 1_000,
            Self::Minutes => 60_000,
            Self::Hours => 3_600_000,
            Self::Days => 86_400_000,
        }
    }

    /// The suffix used when encoding, e.g. `s` in `"30s"`.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Milliseconds => "ms",
            Self::Seconds => "s",
            Self::Minutes => "m",
            Self::Hours => "h",
            Self::Days => "d",
        }
    }

    /// Resolves a duration suffix. Case-sensitive.
    ///
    /// ```
    /// use fp_reflect::time::UnitKind;
    ///
    /// assert_eq!(UnitKind::from_suffix("sec"), Some(UnitKind::Seconds));
    /// assert_eq!(UnitKind::from_suffix("m"), Some(UnitKind::Minutes));
    /// assert_eq!(UnitKind::from_suffix("ms"), Some(UnitKind::Milliseconds));
    /// assert_eq!(UnitKind::from_suffix("H"), None);
    /// ```
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "ms" => Some(Self::Milliseconds),
            "s" | "sec" | "seconds" => Some(Self::Seconds),
            "m" | "min" | "minutes" => Some(Self::Minutes),
            "h" | "hour" | "hours" => Some(Self::Hours),
            "d" | "day" | "days" => Some(Self::Days),
            _ => None,
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.suffix())
    }
}

// -----------------------------------------------------------------------------
// TimeUnit

/// A type-level unit of time, the `U` of [`DurationOf<U, R>`](crate::time::DurationOf).
pub trait TimeUnit: Send + Sync + 'static {
    const KIND: UnitKind;

    /// Short name used in type paths.
    const NAME: &'static str;
}

macro_rules! define_unit {
    ($($(#[$meta:meta])* $name:ident => $kind:ident;)*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {}

        impl TimeUnit for $name {
            const KIND: UnitKind = UnitKind::$kind;
            const NAME: &'static str = stringify!($name);
        }
    )*};
}

define_unit! {
    /// Millisecond marker.
    Milli => Milliseconds;
    /// Second marker.
    Second => Seconds;
    /// Minute marker.
    Minute => Minutes;
    /// Hour marker.
    Hour => Hours;
    /// Day marker.
    Day => Days;
}
