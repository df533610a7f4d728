// Three-valued configuration values.
//
// A declarative field is Known (the user set it), Null (the user left
// it unset), or Unknown (the remote system will decide — e.g. the
// identifier before creation, or a server-computed order). Unknown is
// deliberately NOT collapsible into a default: only a remote response
// may resolve it, otherwise drift detection would confuse "user never
// set this" with "user set this to the zero value".

/// A configuration-model value with tri-state nullability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Value<T> {
    /// An explicit value supplied by the user or a remote response.
    Known(T),
    /// Absent: the user did not set the field.
    #[default]
    Null,
    /// To be determined by the remote system.
    Unknown,
}

impl<T> Value<T> {
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Borrowing view, mirroring `Option::as_ref`.
    pub fn as_ref(&self) -> Value<&T> {
        match self {
            Self::Known(v) => Value::Known(v),
            Self::Null => Value::Null,
            Self::Unknown => Value::Unknown,
        }
    }

    /// The known value, if there is one.
    pub fn known(self) -> Option<T> {
        match self {
            Self::Known(v) => Some(v),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Value<U> {
        match self {
            Self::Known(v) => Value::Known(f(v)),
            Self::Null => Value::Null,
            Self::Unknown => Value::Unknown,
        }
    }
}

impl<T> From<Option<T>> for Value<T> {
    /// `Some` becomes `Known`, `None` becomes `Null` (not `Unknown` —
    /// an absent remote field means the value does not exist, not that
    /// it is still pending).
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Self::Known)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_is_distinguishable_from_null_and_unknown() {
        let known = Value::Known(String::new());
        let null: Value<String> = Value::Null;
        let unknown: Value<String> = Value::Unknown;

        assert!(known.is_known());
        assert!(null.is_null());
        assert!(unknown.is_unknown());
        assert_ne!(known, null);
        assert_ne!(null, unknown);
    }

    #[test]
    fn map_passes_through_null_and_unknown() {
        assert_eq!(Value::Known(2).map(|v| v * 2), Value::Known(4));
        assert_eq!(Value::<i32>::Null.map(|v| v * 2), Value::Null);
        assert_eq!(Value::<i32>::Unknown.map(|v| v * 2), Value::Unknown);
    }

    #[test]
    fn from_option_never_produces_unknown() {
        assert_eq!(Value::from(Some(1)), Value::Known(1));
        assert_eq!(Value::<i32>::from(None), Value::Null);
    }
}
