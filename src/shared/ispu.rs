/// An ISPU severity bucket: display color plus textual level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Severity {
    pub color: &'static str,
    pub label: &'static str,
}

pub const GOOD: Severity = Severity {
    color: "#4CAF50",
    label: "Good",
};
pub const MODERATE: Severity = Severity {
    color: "#2196F3",
    label: "Moderate",
};
pub const UNHEALTHY: Severity = Severity {
    color: "#FF9800",
    label: "Unhealthy",
};
pub const VERY_UNHEALTHY: Severity = Severity {
    color: "#F44336",
    label: "Very Unhealthy",
};
pub const HAZARDOUS: Severity = Severity {
    color: "#000000",
    label: "Hazardous",
};
pub const UNDEFINED: Severity = Severity {
    color: "#FFFFFF",
    label: "Undefined",
};

impl Severity {
    /// Total over all of f64, including NaN. Bucket boundaries are inclusive
    /// on the upper bound.
    pub fn of(ispu: f64) -> Severity {
        if ispu.is_nan() {
            UNDEFINED
        } else if ispu <= 50.0 {
            GOOD
        } else if ispu <= 100.0 {
            MODERATE
        } else if ispu <= 200.0 {
            UNHEALTHY
        } else if ispu <= 300.0 {
            VERY_UNHEALTHY
        } else {
            HAZARDOUS
        }
    }

    /// Missing readings classify as undefined rather than panicking.
    pub fn of_reading(value: Option<f64>) -> Severity {
        match value {
            Some(v) => Severity::of(v),
            None => UNDEFINED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_are_inclusive_on_the_upper_bound() {
        assert_eq!(Severity::of(50.0), GOOD);
        assert_eq!(Severity::of(50.1), MODERATE);
        assert_eq!(Severity::of(100.0), MODERATE);
        assert_eq!(Severity::of(100.1), UNHEALTHY);
        assert_eq!(Severity::of(200.0), UNHEALTHY);
        assert_eq!(Severity::of(200.1), VERY_UNHEALTHY);
        assert_eq!(Severity::of(300.0), VERY_UNHEALTHY);
        assert_eq!(Severity::of(300.1), HAZARDOUS);
    }

    #[test]
    fn negative_and_zero_are_good() {
        assert_eq!(Severity::of(-12.0), GOOD);
        assert_eq!(Severity::of(0.0), GOOD);
    }

    #[test]
    fn unbounded_positive_is_hazardous() {
        assert_eq!(Severity::of(1e9), HAZARDOUS);
        assert_eq!(Severity::of(f64::INFINITY), HAZARDOUS);
    }

    #[test]
    fn nan_and_missing_fall_back_to_undefined() {
        assert_eq!(Severity::of(f64::NAN), UNDEFINED);
        assert_eq!(Severity::of_reading(None), UNDEFINED);
    }

    #[test]
    fn same_input_same_output() {
        for v in [-1.0, 0.0, 50.0, 99.9, 250.0, 301.0] {
            assert_eq!(Severity::of(v), Severity::of(v));
        }
    }
}
