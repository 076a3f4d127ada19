#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Whether an intersection report should reveal its element.
///
/// Observers also report on initial observation, where an element may be
/// intersecting by a sliver below the threshold; those reports are ignored.
pub fn crosses_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold
}
