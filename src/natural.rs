//! Natural-order string comparison.
//!
//! Runs of ASCII digits compare by numeric value, everything else compares by code
//! point, so `"img2" < "img10"`. Leading whitespace is ignored. When two strings only
//! differ in the leading zeros of a digit run, the run with fewer characters sorts
//! first.

use std::cmp::Ordering;

/// Compares `a` and `b` in natural order.
///
/// ```
/// use kvsort::natural::natural_cmp;
/// use std::cmp::Ordering;
///
/// assert_eq!(natural_cmp("img2", "img10"), Ordering::Less);
/// assert_eq!(natural_cmp("img10", "img10"), Ordering::Equal);
/// ```
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (mut a, mut b) = (a.trim_start(), b.trim_start());
    let mut tiebreak = Ordering::Equal;

    loop {
        let (ca, cb) = match (a.chars().next(), b.chars().next()) {
            (None, None) => return tiebreak,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ca), Some(cb)) => (ca, cb),
        };

        if ca.is_ascii_digit() && cb.is_ascii_digit() {
            let (run_a, rest_a) = split_digits(a);
            let (run_b, rest_b) = split_digits(b);

            let ordering = compare_digit_runs(run_a, run_b);
            if ordering != Ordering::Equal {
                return ordering;
            }
            if tiebreak == Ordering::Equal {
                tiebreak = run_a.len().cmp(&run_b.len());
            }

            a = rest_a;
            b = rest_b;
            continue;
        }

        if ca != cb {
            return ca.cmp(&cb);
        }
        a = &a[ca.len_utf8()..];
        b = &b[cb.len_utf8()..];
    }
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());
    s.split_at(end)
}

// Equal-length runs of ASCII digits compare lexicographically as numbers do.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
