use super::*;

#[test]
fn reveals_at_or_above_threshold() {
    assert!(crosses_threshold(true, 0.12, 0.12));
    assert!(crosses_threshold(true, 1.0, 0.12));
}

#[test]
fn ignores_slivers_and_exits() {
    assert!(!crosses_threshold(true, 0.05, 0.12));
    assert!(!crosses_threshold(false, 0.5, 0.12));
}
