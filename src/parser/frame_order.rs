//! Total order over frame identifiers.
//!
//! Identifiers have the form `<opaque-prefix>-<integer>`; the trailing
//! integer is monotonically assigned at capture time and is compared
//! numerically, never lexicographically ("...-3" orders before "...-24").
//! The order is used only for deterministic iteration over a frame table
//! (serialization, sub-profile layout); lookups are always by exact key.

use crate::utils::error::OrderError;
use std::cmp::Ordering;

/// Extract the numeric suffix after the last `-`, if well formed
///
/// **Private** - internal helper
fn suffix(identifier: &str) -> Option<u64> {
    let (_, tail) = identifier.rsplit_once('-')?;
    tail.parse::<u64>().ok()
}

/// Compare two frame identifiers by numeric suffix
///
/// **Public** - the frame ordering comparator
///
/// Ties on the suffix fall back to the full identifier so the order stays
/// strict and total even for duplicate suffixes.
///
/// # Errors
/// `OrderError::MalformedIdentifier` naming whichever identifier(s) lack the
/// separator or a parseable integer suffix.
pub fn compare(a: &str, b: &str) -> Result<Ordering, OrderError> {
    match (suffix(a), suffix(b)) {
        (Some(x), Some(y)) => Ok(x.cmp(&y).then_with(|| a.cmp(b))),
        (sa, sb) => {
            let mut offenders = Vec::new();
            if sa.is_none() {
                offenders.push(a.to_string());
            }
            if sb.is_none() {
                offenders.push(b.to_string());
            }
            Err(OrderError::MalformedIdentifier { offenders })
        }
    }
}

/// Sort frame identifiers ascending per [`compare`]
///
/// **Public** - used when a frame table must be iterated deterministically
///
/// Validates every identifier up front so the error lists all offenders, not
/// just the first pair the sort happens to touch.
pub fn sorted_ids<'a, I>(ids: I) -> Result<Vec<&'a str>, OrderError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut keyed: Vec<(u64, &str)> = Vec::new();
    let mut offenders: Vec<String> = Vec::new();

    for id in ids {
        match suffix(id) {
            Some(n) => keyed.push((n, id)),
            None => offenders.push(id.to_string()),
        }
    }

    if !offenders.is_empty() {
        return Err(OrderError::MalformedIdentifier { offenders });
    }

    keyed.sort_unstable();
    Ok(keyed.into_iter().map(|(_, id)| id).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_not_lexicographic() {
        let ord = compare("140225212960768-3", "140225212960768-24").unwrap();
        assert_eq!(ord, Ordering::Less);
    }

    #[test]
    fn test_equal_identifiers() {
        let ord = compare("f-7", "f-7").unwrap();
        assert_eq!(ord, Ordering::Equal);
    }

    #[test]
    fn test_suffix_tie_broken_by_full_identifier() {
        // Duplicate suffixes never occur in captured data, but the order
        // must stay total anyway
        assert_eq!(compare("a-1", "b-1").unwrap(), Ordering::Less);
    }

    #[test]
    fn test_malformed_left_identifier() {
        let err = compare("nosuffix", "f-2").unwrap_err();
        assert_eq!(
            err,
            OrderError::MalformedIdentifier {
                offenders: vec!["nosuffix".to_string()]
            }
        );
    }

    #[test]
    fn test_malformed_both_identifiers() {
        let err = compare("bad", "f-x").unwrap_err();
        assert_eq!(
            err,
            OrderError::MalformedIdentifier {
                offenders: vec!["bad".to_string(), "f-x".to_string()]
            }
        );
    }

    #[test]
    fn test_sorted_ids_ascending() {
        let ids = ["p-24", "p-3", "p-100", "p-1"];
        let sorted = sorted_ids(ids).unwrap();
        assert_eq!(sorted, vec!["p-1", "p-3", "p-24", "p-100"]);
    }

    #[test]
    fn test_sorted_ids_reports_all_offenders() {
        let err = sorted_ids(["p-1", "oops", "p-", "p-2"]).unwrap_err();
        assert_eq!(
            err,
            OrderError::MalformedIdentifier {
                offenders: vec!["oops".to_string(), "p-".to_string()]
            }
        );
    }
}
