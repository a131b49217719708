/// Number of items on a page when the caller does not ask for a size.
pub const DEFAULT_PAGE_SIZE: i64 = 3;
/// Page returned when the caller does not ask for one.
pub const DEFAULT_PAGE_NUMBER: i64 = 0;

/// Half-open `[from, to)` window of the requested page over `len` items.
///
/// `from` is `page_number * page_size` clamped into `[0, len]`, and `to` never
/// runs past `len` or falls below `from`, so an out-of-range page is empty
/// rather than an error.
pub fn page_bounds(len: usize, page_number: Option<i64>, page_size: Option<i64>) -> (usize, usize) {
    let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    let page_number = page_number.unwrap_or(DEFAULT_PAGE_NUMBER);
    let len_i64 = i64::try_from(len).unwrap_or(i64::MAX);

    let from = page_number.saturating_mul(page_size).clamp(0, len_i64);
    let to = from.saturating_add(page_size).clamp(from, len_i64);

    // Both ends are within [0, len], which fits in usize.
    (from as usize, to as usize)
}

/// Keep only the items that fall on the requested page.
pub fn paginate<T>(items: Vec<T>, page_number: Option<i64>, page_size: Option<i64>) -> Vec<T> {
    let (from, to) = page_bounds(items.len(), page_number, page_size);
    items.into_iter().skip(from).take(to - from).collect()
}

#[cfg(test)]
mod tests {
    use super::{page_bounds, paginate};

    fn ten() -> Vec<u32> {
        (0..10).collect()
    }

    #[test]
    fn defaults_to_first_page_of_three() {
        assert_eq!(paginate(ten(), None, None), vec![0, 1, 2]);
        assert_eq!(paginate(ten(), Some(1), None), vec![3, 4, 5]);
        assert_eq!(paginate(ten(), None, Some(4)), vec![0, 1, 2, 3]);
    }

    #[test]
    fn last_partial_page_is_truncated() {
        assert_eq!(page_bounds(10, Some(3), Some(3)), (9, 10));
        assert_eq!(paginate(ten(), Some(3), Some(3)), vec![9]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        assert_eq!(page_bounds(10, Some(4), Some(3)), (10, 10));
        assert!(paginate(ten(), Some(4), Some(3)).is_empty());
        assert!(paginate(Vec::<u32>::new(), None, None).is_empty());
    }

    #[test]
    fn negative_and_zero_inputs_never_panic() {
        assert_eq!(page_bounds(10, Some(-2), Some(3)), (0, 3));
        assert_eq!(page_bounds(10, Some(1), Some(0)), (0, 0));
        assert_eq!(page_bounds(10, Some(1), Some(-3)), (0, 0));
        assert_eq!(page_bounds(10, Some(2), Some(-3)), (0, 0));
        assert_eq!(page_bounds(10, Some(i64::MAX), Some(i64::MAX)), (10, 10));
    }
}
