use chrono::NaiveDate;

use crate::core::types::Assignment;

/// Whole days two assignments share, measured from the later start to the
/// earlier end. Ongoing assignments end on `today`.
///
/// Ranges that only touch on one day overlap but yield 0. An inverted range
/// (end before start) that still passes the overlap test yields 0 as well,
/// not the absolute length of its span.
pub(crate) fn overlap_days(a: &Assignment, b: &Assignment, today: NaiveDate) -> i64 {
    let a_end = a.effective_end(today);
    let b_end = b.effective_end(today);

    if a.start <= b_end && a_end >= b.start {
        let later_start = a.start.max(b.start);
        let first_end = a_end.min(b_end);
        // inverted ranges can pass the test above with a negative span
        (first_end - later_start).num_days().max(0)
    } else {
        0
    }
}
