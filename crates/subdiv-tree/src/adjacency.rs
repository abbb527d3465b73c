//! The geometric face-adjacency predicate.
//!
//! Two cells are adjacent when they share a boundary of positive
//! (d-1)-dimensional measure: an edge segment in 2D, a face patch in 3D
//! (6-connectivity). Contact at a single corner or along a single edge
//! of two cuboids does not count.

use crate::cell::Bounds;
use subdiv_core::Dimension;

/// Floating-point tolerance for boundary coincidence and overlap.
pub const EPS: f64 = 1e-9;

/// `true` when two intervals overlap by more than [`EPS`].
///
/// Strict positive-measure overlap: touching endpoints do not overlap.
pub(crate) fn overlaps(a: (f64, f64), b: (f64, f64)) -> bool {
    a.0.max(b.0) < a.1.min(b.1) - EPS
}

/// `true` when `a` and `b` share a boundary of positive measure.
///
/// Axes are checked in canonical order. On the first axis where one
/// cell's upper bound coincides (within [`EPS`]) with the other's lower
/// bound, the cells are adjacent iff their extents overlap strictly on
/// every remaining axis of the dimension. Cells produced by the half
/// subdivision can have a valid coincidence on at most one axis, so the
/// first match decides.
pub fn are_adjacent(a: &Bounds, b: &Bounds, dimension: Dimension) -> bool {
    let axes = dimension.axes();
    for &axis in axes {
        let (a_lo, a_hi) = a.interval(axis);
        let (b_lo, b_hi) = b.interval(axis);
        if (a_hi - b_lo).abs() < EPS || (a_lo - b_hi).abs() < EPS {
            return axes
                .iter()
                .filter(|&&other| other != axis)
                .all(|&other| overlaps(a.interval(other), b.interval(other)));
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: (f64, f64), y: (f64, f64)) -> Bounds {
        Bounds::from_intervals([x.0, y.0, 0.0], [x.1, y.1, 1.0])
    }

    fn cuboid(x: (f64, f64), y: (f64, f64), z: (f64, f64)) -> Bounds {
        Bounds::from_intervals([x.0, y.0, z.0], [x.1, y.1, z.1])
    }

    #[test]
    fn side_by_side_rects_are_adjacent() {
        let a = rect((0.0, 0.5), (0.0, 1.0));
        let b = rect((0.5, 1.0), (0.0, 1.0));
        assert!(are_adjacent(&a, &b, Dimension::D2));
        assert!(are_adjacent(&b, &a, Dimension::D2));
    }

    #[test]
    fn stacked_rects_are_adjacent() {
        let a = rect((0.0, 1.0), (0.0, 0.5));
        let b = rect((0.0, 1.0), (0.5, 1.0));
        assert!(are_adjacent(&a, &b, Dimension::D2));
    }

    #[test]
    fn corner_contact_is_not_adjacency() {
        let a = rect((0.0, 0.5), (0.0, 0.5));
        let b = rect((0.5, 1.0), (0.5, 1.0));
        assert!(!are_adjacent(&a, &b, Dimension::D2));
    }

    #[test]
    fn separated_rects_are_not_adjacent() {
        let a = rect((0.0, 0.25), (0.0, 1.0));
        let b = rect((0.5, 1.0), (0.0, 1.0));
        assert!(!are_adjacent(&a, &b, Dimension::D2));
    }

    #[test]
    fn partial_edge_overlap_counts() {
        let a = rect((0.0, 0.5), (0.0, 1.0));
        let b = rect((0.5, 1.0), (0.25, 0.5));
        assert!(are_adjacent(&a, &b, Dimension::D2));
    }

    #[test]
    fn coincident_boundary_without_overlap_is_rejected() {
        // Boundaries meet on x but the y extents only touch.
        let a = rect((0.0, 0.5), (0.0, 0.5));
        let b = rect((0.5, 1.0), (0.5, 1.0));
        assert!(!are_adjacent(&a, &b, Dimension::D2));
    }

    #[test]
    fn tolerance_absorbs_float_error() {
        let a = rect((0.0, 0.5 + 1e-12), (0.0, 1.0));
        let b = rect((0.5, 1.0), (0.0, 1.0));
        assert!(are_adjacent(&a, &b, Dimension::D2));
    }

    #[test]
    fn face_sharing_cuboids_are_adjacent() {
        let a = cuboid((0.0, 0.5), (0.0, 1.0), (0.0, 1.0));
        let b = cuboid((0.5, 1.0), (0.0, 1.0), (0.0, 1.0));
        assert!(are_adjacent(&a, &b, Dimension::D3));
    }

    #[test]
    fn edge_sharing_cuboids_are_not_adjacent() {
        // Share the x=0.5 plane but their y extents only touch: the
        // shared boundary is a line, not a face.
        let a = cuboid((0.0, 0.5), (0.0, 0.5), (0.0, 1.0));
        let b = cuboid((0.5, 1.0), (0.5, 1.0), (0.0, 1.0));
        assert!(!are_adjacent(&a, &b, Dimension::D3));
    }

    #[test]
    fn z_face_adjacency_in_3d() {
        let a = cuboid((0.0, 1.0), (0.0, 1.0), (0.0, 0.5));
        let b = cuboid((0.0, 1.0), (0.0, 1.0), (0.5, 1.0));
        assert!(are_adjacent(&a, &b, Dimension::D3));
    }

    #[test]
    fn z_is_ignored_in_2d() {
        // Identical xy extents, stacked in z: adjacent cuboids in 3D
        // but not distinct cells in 2D geometry. The 2D predicate never
        // inspects z.
        let a = cuboid((0.0, 0.5), (0.0, 1.0), (0.0, 0.5));
        let b = cuboid((0.5, 1.0), (0.0, 1.0), (0.5, 1.0));
        assert!(are_adjacent(&a, &b, Dimension::D2));
    }

    #[test]
    fn identical_bounds_are_not_adjacent() {
        // A cell never coincides boundary-to-boundary with itself, so
        // the predicate is false for identical bounds.
        let a = rect((0.25, 0.5), (0.25, 0.5));
        assert!(!are_adjacent(&a, &a, Dimension::D2));
    }
}
