use serde::{Deserialize, Serialize};

/// One row of the road table: how far the segment runs along the centerline
/// and the curvature (1/r) at both of its ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentSpec {
    pub length: f64,
    pub start_curvature: f64,
    pub end_curvature: f64,
}

impl SegmentSpec {
    pub fn new(length: f64, start_curvature: f64, end_curvature: f64) -> Self {
        Self {
            length,
            start_curvature,
            end_curvature,
        }
    }

    /// straight segment, zero curvature end to end
    pub fn line(length: f64) -> Self {
        Self::new(length, 0.0, 0.0)
    }

    /// circular arc of constant curvature
    pub fn arc(length: f64, curvature: f64) -> Self {
        Self::new(length, curvature, curvature)
    }

    /// clothoid transition, curvature varying linearly with arc-length
    pub fn spiral(length: f64, start_curvature: f64, end_curvature: f64) -> Self {
        Self::new(length, start_curvature, end_curvature)
    }

    /// Decide once what kind of geometry this segment is.
    ///
    /// The zero comparisons are exact on purpose: only a literal 0.0 on both
    /// ends counts as a straight, tiny float noise stays an arc/spiral.
    pub fn classify(&self) -> GeometryKind {
        if self.start_curvature == 0.0 && self.end_curvature == 0.0 {
            GeometryKind::Straight
        } else if self.start_curvature == self.end_curvature {
            GeometryKind::Arc {
                curvature: self.start_curvature,
            }
        } else {
            GeometryKind::Spiral {
                curv_start: self.start_curvature,
                curv_end: self.end_curvature,
            }
        }
    }
}

/// Closed set of planView geometry kinds, one per segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GeometryKind {
    Straight,
    Arc { curvature: f64 },
    Spiral { curv_start: f64, curv_end: f64 },
}

/// The built-in demo track, used by the generator binary and the gui preview.
pub fn demo_road() -> Vec<SegmentSpec> {
    vec![
        SegmentSpec::line(100.0),
        SegmentSpec::arc(3.14 / 0.05, 0.05),
        SegmentSpec::line(130.0),
        SegmentSpec::arc(20.0, 0.1),
        SegmentSpec::arc(45.0, -0.05),
        SegmentSpec::spiral(10.0, -0.05, 0.0),
        SegmentSpec::spiral(5.0, 0.0, 0.1),
        SegmentSpec::spiral(67.0, 0.1, 0.0),
        SegmentSpec::line(60.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_precedence() {
        assert_eq!(SegmentSpec::line(10.0).classify(), GeometryKind::Straight);
        assert_eq!(
            SegmentSpec::arc(10.0, 0.05).classify(),
            GeometryKind::Arc { curvature: 0.05 }
        );
        assert_eq!(
            SegmentSpec::spiral(10.0, 0.0, 0.1).classify(),
            GeometryKind::Spiral {
                curv_start: 0.0,
                curv_end: 0.1
            }
        );
        assert_eq!(
            SegmentSpec::spiral(10.0, -0.05, 0.0).classify(),
            GeometryKind::Spiral {
                curv_start: -0.05,
                curv_end: 0.0
            }
        );
    }

    #[test]
    fn exact_zero_policy() {
        // float noise on both ends is not a straight, it is a (tiny) arc
        let noisy = SegmentSpec::new(10.0, 1e-12, 1e-12);
        assert_eq!(
            noisy.classify(),
            GeometryKind::Arc { curvature: 1e-12 }
        );

        let negative_zero = SegmentSpec::new(10.0, -0.0, 0.0);
        assert_eq!(negative_zero.classify(), GeometryKind::Straight);
    }

    #[test]
    fn demo_road_covers_all_kinds() {
        let specs = demo_road();
        assert_eq!(specs.len(), 9);
        let kinds: Vec<_> = specs.iter().map(|s| s.classify()).collect();
        assert!(kinds.contains(&GeometryKind::Straight));
        assert!(kinds.iter().any(|k| matches!(k, GeometryKind::Arc { .. })));
        assert!(kinds
            .iter()
            .any(|k| matches!(k, GeometryKind::Spiral { .. })));
    }
}
