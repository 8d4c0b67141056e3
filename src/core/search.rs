//! Index lookups over the ascending x-series.

/// Binary search over an ascending slice.
///
/// Returns `Ok(index)` on an exact hit and `Err(insertion_point)` otherwise,
/// where `insertion_point` is the index `target` would occupy to keep the
/// slice sorted.
pub fn search_sorted(values: &[f64], target: f64) -> Result<usize, usize> {
    values.binary_search_by(|probe| probe.total_cmp(&target))
}

/// Packs a search result into the signed convention used by hosts that cannot
/// carry a `Result`: `index` on a hit, `-(insertion_point) - 1` on a miss.
///
/// The insertion point is recovered with `code.unsigned_abs() - 1`.
#[must_use]
pub fn encode_search_result(result: Result<usize, usize>) -> i64 {
    match result {
        Ok(index) => index as i64,
        Err(insertion_point) => -(insertion_point as i64) - 1,
    }
}

/// Inverse of [`encode_search_result`].
#[must_use]
pub fn decode_search_result(code: i64) -> Result<usize, usize> {
    if code >= 0 {
        Ok(code as usize)
    } else {
        Err((code.unsigned_abs() - 1) as usize)
    }
}

/// [`search_sorted`] with the signed result encoding.
#[must_use]
pub fn binary_search_index(values: &[f64], target: f64) -> i64 {
    encode_search_result(search_sorted(values, target))
}

/// Index of the sample closest to `target`.
///
/// The search candidate is compared with its left neighbour; on an exact tie
/// the right (later) sample wins. Queries outside the slice snap to the first
/// or last index. Returns `None` for an empty slice or a non-finite target.
#[must_use]
pub fn nearest_index(values: &[f64], target: f64) -> Option<usize> {
    if values.is_empty() || !target.is_finite() {
        return None;
    }

    let candidate = match search_sorted(values, target) {
        Ok(index) => return Some(index),
        Err(insertion_point) => insertion_point.min(values.len() - 1),
    };
    if candidate == 0 {
        return Some(0);
    }

    let left = candidate - 1;
    if (values[left] - target).abs() < (values[candidate] - target).abs() {
        Some(left)
    } else {
        Some(candidate)
    }
}

/// [`nearest_index`] restricted to the inclusive index range `[begin, end]`.
#[must_use]
pub fn nearest_index_within(values: &[f64], target: f64, begin: usize, end: usize) -> Option<usize> {
    if begin > end || end >= values.len() {
        return None;
    }
    nearest_index(&values[begin..=end], target).map(|offset| begin + offset)
}
