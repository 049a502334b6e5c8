//! Field-level checkers.
//!
//! Each checker is a total function over the value's domain: it returns whether the value is
//! legal and, when it is not, records one [`FieldViolation`] in the report. Values are widened
//! to `i64` so every FAPI field type (up to `u32`) compares without truncation; the
//! diagnostic value is saturated to `i32`.

use crate::report::{FieldViolation, MessageKind, PduKind, ValidationReport};

/// Message and PDU context attached to every diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope {
    pub message: MessageKind,
    pub pdu: Option<PduKind>,
}

impl Scope {
    /// Scope for message-level fields (no PDU).
    pub const fn message(message: MessageKind) -> Self {
        Scope { message, pdu: None }
    }

    pub const fn pdu(message: MessageKind, pdu: PduKind) -> Self {
        Scope { message, pdu: Some(pdu) }
    }
}

/// One side of a dual-encoded quantity: active when in `[min, max]`, inactive when equal to
/// `sentinel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoded {
    pub value: i64,
    pub min: i64,
    pub max: i64,
    pub sentinel: i64,
}

impl Encoded {
    pub fn new(value: impl Into<i64>, min: i64, max: i64, sentinel: i64) -> Self {
        Encoded { value: value.into(), min, max, sentinel }
    }

    fn is_active(&self) -> bool {
        self.min <= self.value && self.value <= self.max
    }

    fn is_inactive(&self) -> bool {
        self.value == self.sentinel
    }
}

/// Widens a collection length for range checks.
pub(crate) fn len_value(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

pub(crate) fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

fn fail(
    value: i64,
    property: &'static str,
    expected: Option<(i64, i64)>,
    scope: Scope,
    report: &mut ValidationReport,
) -> bool {
    report.record(FieldViolation {
        value: saturate(value),
        property,
        message: scope.message,
        pdu: scope.pdu,
        expected: expected.map(|(min, max)| (saturate(min), saturate(max))),
    });
    false
}

/// Passes iff `min <= value <= max`; the violation carries `(min, max)`.
pub fn check_range(
    min: i64,
    max: i64,
    value: impl Into<i64>,
    property: &'static str,
    scope: Scope,
    report: &mut ValidationReport,
) -> bool {
    let value = value.into();
    if min <= value && value <= max {
        return true;
    }
    fail(value, property, Some((min, max)), scope, report)
}

/// Passes iff `actual == expected`; the violation carries `(expected, expected)`.
pub fn check_equals(
    expected: impl Into<i64>,
    actual: impl Into<i64>,
    property: &'static str,
    scope: Scope,
    report: &mut ValidationReport,
) -> bool {
    let (expected, actual) = (expected.into(), actual.into());
    if expected == actual {
        return true;
    }
    fail(actual, property, Some((expected, expected)), scope, report)
}

/// Passes iff `value` is one of `allowed`. The allowed set is not contiguous, so the violation
/// carries no range.
pub fn check_one_of(
    allowed: &[i64],
    value: impl Into<i64>,
    property: &'static str,
    scope: Scope,
    report: &mut ValidationReport,
) -> bool {
    let value = value.into();
    if allowed.contains(&value) {
        return true;
    }
    fail(value, property, None, scope, report)
}

/// Passes iff `min <= value <= max` and `value` is a multiple of `divisor`.
///
/// Both failures are reported with the `(min, max)` range. A zero divisor never passes.
pub fn check_divisible(
    value: impl Into<i64>,
    divisor: i64,
    min: i64,
    max: i64,
    property: &'static str,
    scope: Scope,
    report: &mut ValidationReport,
) -> bool {
    let value = value.into();
    if min <= value && value <= max && value.checked_rem(divisor) == Some(0) {
        return true;
    }
    fail(value, property, Some((min, max)), scope, report)
}

/// Passes iff `value` is in `[min, max]` or equals the "not used" `sentinel`.
pub fn check_range_or_sentinel(
    min: i64,
    max: i64,
    sentinel: i64,
    value: impl Into<i64>,
    property: &'static str,
    scope: Scope,
    report: &mut ValidationReport,
) -> bool {
    let value = value.into();
    if value == sentinel || (min <= value && value <= max) {
        return true;
    }
    fail(value, property, Some((min, max)), scope, report)
}

/// Passes iff exactly one side is active and the other holds its sentinel.
///
/// Both active, both inactive, or any out-of-range value fails with a single violation that
/// carries `first.value` and no range.
pub fn check_dual_encoding(
    first: Encoded,
    second: Encoded,
    property: &'static str,
    scope: Scope,
    report: &mut ValidationReport,
) -> bool {
    if (first.is_inactive() && second.is_active()) || (first.is_active() && second.is_inactive()) {
        return true;
    }
    fail(first.value, property, None, scope, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCOPE: Scope = Scope::pdu(MessageKind::DlTtiRequest, PduKind::CsiRs);

    fn report() -> ValidationReport {
        ValidationReport::new(0, 0)
    }

    #[test]
    fn range_bounds_inclusive() {
        let mut r = report();
        assert!(check_range(1, 275, 1u16, "BWP size", SCOPE, &mut r));
        assert!(check_range(1, 275, 275u16, "BWP size", SCOPE, &mut r));
        assert!(r.is_empty());
        assert!(!check_range(1, 275, 0u16, "BWP size", SCOPE, &mut r));
        assert!(!check_range(1, 275, 276u16, "BWP size", SCOPE, &mut r));
        assert_eq!(r.total_violations(), 2);
        let v = r.violations().next().expect("violation");
        assert_eq!(v.value, 0);
        assert_eq!(v.expected, Some((1, 275)));
        assert_eq!(v.pdu, Some(PduKind::CsiRs));
    }

    #[test]
    fn range_saturates_large_values() {
        let mut r = report();
        assert!(!check_range(0, 170_000, u32::MAX, "AVG RSSI", SCOPE, &mut r));
        assert_eq!(r.violations().next().map(|v| v.value), Some(i32::MAX));
    }

    #[test]
    fn equals_reports_expected_value() {
        let mut r = report();
        assert!(check_equals(0u16, 0u16, "HARQ payload size", SCOPE, &mut r));
        assert!(!check_equals(0u16, 5u16, "HARQ payload size", SCOPE, &mut r));
        let v = r.violations().next().expect("violation");
        assert_eq!(v.value, 5);
        assert_eq!(v.expected, Some((0, 0)));
    }

    #[test]
    fn one_of_rejects_gaps() {
        let mut r = report();
        for al in [1u8, 2, 4, 8, 16] {
            assert!(check_one_of(&[1, 2, 4, 8, 16], al, "Aggregation level", SCOPE, &mut r));
        }
        assert!(!check_one_of(&[1, 2, 4, 8, 16], 3u8, "Aggregation level", SCOPE, &mut r));
        assert_eq!(r.violations().next().and_then(|v| v.expected), None);
    }

    #[test]
    fn divisible_reports_range_on_modulus_failure() {
        let mut r = report();
        assert!(check_divisible(24u16, 4, 24, 276, "Number of RBs", SCOPE, &mut r));
        assert!(check_divisible(276u16, 4, 24, 276, "Number of RBs", SCOPE, &mut r));
        assert!(!check_divisible(25u16, 4, 24, 276, "Number of RBs", SCOPE, &mut r));
        assert!(!check_divisible(280u16, 4, 24, 276, "Number of RBs", SCOPE, &mut r));
        assert!(!check_divisible(8u16, 0, 0, 10, "Number of RBs", SCOPE, &mut r));
        assert_eq!(r.total_violations(), 3);
        assert!(r.violations().all(|v| v.property == "Number of RBs"));
        assert_eq!(r.violations().next().and_then(|v| v.expected), Some((24, 276)));
    }

    #[test]
    fn sentinel_accepted_outside_range() {
        let mut r = report();
        assert!(check_range_or_sentinel(0, 63, 255, 255u8, "RAPID", SCOPE, &mut r));
        assert!(check_range_or_sentinel(0, 63, 255, 63u8, "RAPID", SCOPE, &mut r));
        assert!(!check_range_or_sentinel(0, 63, 255, 64u8, "RAPID", SCOPE, &mut r));
    }

    #[test]
    fn dual_encoding_needs_exactly_one_active_side() {
        let nr = |v: i8| Encoded::new(v, -8, 8, -127);
        let sss = |v: i16| Encoded::new(v, -32767, 32767, -32768);
        let mut r = report();
        assert!(check_dual_encoding(nr(-127), sss(100), "DMRS Power offset", SCOPE, &mut r));
        assert!(check_dual_encoding(nr(3), sss(-32768), "DMRS Power offset", SCOPE, &mut r));
        assert!(r.is_empty());
        assert!(!check_dual_encoding(nr(-127), sss(-32768), "DMRS Power offset", SCOPE, &mut r));
        assert!(!check_dual_encoding(nr(3), sss(100), "DMRS Power offset", SCOPE, &mut r));
        assert!(!check_dual_encoding(nr(9), sss(-32768), "DMRS Power offset", SCOPE, &mut r));
        assert_eq!(r.total_violations(), 3);
        assert_eq!(r.violations().next().map(|v| v.value), Some(-127));
    }
}
