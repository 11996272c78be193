use crate::P2;

/// Check if `point` lies between two corners in both dimensions, whichever way the
/// corners are ordered.
pub(crate) fn between(point: &P2, a: &P2, b: &P2) -> bool {
    (*a <= *point && *b >= *point) || (*a >= *point && *b <= *point)
}
