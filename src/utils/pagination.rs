pub const QUESTIONS_PER_PAGE: usize = 10;

/// Parses a raw `page` query value. Anything that is not a positive integer
/// falls back to the first page.
pub fn page_number(raw: Option<&str>) -> usize {
    raw.and_then(|raw| raw.parse().ok())
        .filter(|&page| page >= 1)
        .unwrap_or(1)
}

/// Returns the 1-indexed, 10-item slice of `items` for `page`. Pages past
/// the end yield an empty vec, the caller decides whether that is an error.
pub fn paginate<T>(items: Vec<T>, page: usize) -> Vec<T> {
    // a page large enough to overflow the offset is out of range by
    // definition
    let Some(start) = page.saturating_sub(1).checked_mul(QUESTIONS_PER_PAGE) else {
        return Vec::new();
    };

    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}
