use alloc::boxed::Box;

/// The registered labels of one enum type.
///
/// Entries keep registration order. Lookup by label ignores ASCII case.
#[derive(Debug)]
pub struct EnumLabels {
    type_path: &'static str,
    entries: Box<[(i64, &'static str)]>,
}

impl EnumLabels {
    #[inline]
    pub(crate) fn new(type_path: &'static str, entries: Box<[(i64, &'static str)]>) -> Self {
        Self { type_path, entries }
    }

    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Returns the label of `ordinal`.
    pub fn label_of(&self, ordinal: i64) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(value, _)| *value == ordinal)
            .map(|(_, label)| *label)
    }

    /// Returns the ordinal labelled `label`, ignoring ASCII case.
    pub fn ordinal_of(&self, label: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(_, candidate)| candidate.eq_ignore_ascii_case(label))
            .map(|(value, _)| *value)
    }

    /// Labels in registration order.
    #[inline]
    pub fn labels(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(_, label)| *label)
    }

    /// `(ordinal, label)` pairs in registration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (i64, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::EnumLabels;

    #[test]
    fn lookups() {
        let labels = EnumLabels::new(
            "app::LogLevel",
            vec![(0, "debug"), (1, "info"), (3, "error")].into_boxed_slice(),
        );

        assert_eq!(labels.label_of(3), Some("error"));
        assert_eq!(labels.label_of(2), None);
        assert_eq!(labels.ordinal_of("INFO"), Some(1));
        assert_eq!(labels.ordinal_of("Error"), Some(3));
        assert_eq!(labels.ordinal_of("warn"), None);
        assert_eq!(labels.labels().collect::<Vec<_>>(), ["debug", "info", "error"]);
    }
}
