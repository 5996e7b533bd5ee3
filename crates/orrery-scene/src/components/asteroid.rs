//! Hand-authored asteroid silhouettes.
//!
//! Each outline is a closed path of five relative cubic bezier segments
//! starting at a caller-supplied point. Coordinates are in scene units.

use crate::api::error::{SceneError, SceneResult};

/// One relative cubic segment: `(c1x, c1y, c2x, c2y, x, y)`, all relative
/// to the segment's start point, as in SVG `c`.
pub type CubicSegment = [f32; 6];

/// Distinct rock silhouettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsteroidTemplate {
    Round,
    Chipped,
    Squat,
    Boulder,
    Spur,
}

/// Slot table indexed by asteroid position within a cluster.
/// The first two slots share a silhouette.
const SLOT_TABLE: [AsteroidTemplate; 6] = [
    AsteroidTemplate::Round,
    AsteroidTemplate::Round,
    AsteroidTemplate::Chipped,
    AsteroidTemplate::Squat,
    AsteroidTemplate::Boulder,
    AsteroidTemplate::Spur,
];

const ROUND: [CubicSegment; 5] = [
    [-14.37321, 0.0, -25.55691, -16.2359, -27.40937, -23.398236],
    [-4.24311, -16.40557, -2.82817, -31.95398, 9.3593, -41.782587],
    [10.36207, -8.356518, 29.43489, -5.457223, 35.76588, 4.011125],
    [7.11801, 10.645396, 9.36518, 20.244736, 6.68522, 31.754772],
    [-3.58337, 15.390048, -11.0306, 27.743626, -24.40103, 29.414926],
];

const CHIPPED: [CubicSegment; 5] = [
    [-14.37321, 0.0, -25.5569, -16.2359, -27.40936, -23.39824],
    [-4.24311, -16.40557, 11.87808, -16.66855, 18.71859, -30.75198],
    [5.68242, -11.69913, 20.07559, -16.48783, 26.40658, -7.01948],
    [7.11801, 10.6454, 11.37074, 32.94664, 8.69078, 44.45667],
    [-3.58337, 15.39005, -13.03616, 15.04173, -26.40659, 16.71303],
];

const SQUAT: [CubicSegment; 5] = [
    [-14.373212, 0.0, -23.885609, -3.86826, -25.738073, -11.0306],
    [-4.24311, -16.40557, -8.350094, -40.03164, 7.688001, -54.15022],
    [13.487782, -11.873498, 28.097852, 5.57337, 34.428842, 15.04172],
    [7.11801, 10.6454, 10.70222, 9.21414, 8.02226, 20.72417],
    [-3.58337, 15.39006, -11.0306, 27.74363, -24.40103, 29.41493],
];

const BOULDER: [CubicSegment; 5] = [
    [-14.37321, 0.0, -20.326055, -15.03377, -20.389896, -33.09179],
    [-0.03216, -9.09647, 2.18574, -19.25208, 14.37321, -29.08068],
    [10.36207, -8.35652, 35.99903, -20.756483, 44.79092, -7.01948],
    [10.15072, 15.86012, 4.68553, 30.94108, -2.33982, 42.78537],
    [-8.06128, 13.5908, -23.063984, 24.73528, -36.434414, 26.40658],
];

const SPUR: [CubicSegment; 5] = [
    [-24.73529, 1.33705, -20.66031, -27.40141, -20.38989, -33.09179],
    [0.4318, -9.08627, -1.82539, -26.60581, 10.36208, -36.43441],
    [10.36207, -8.3565196, 26.97399, -8.3888396, 35.76588, 5.34816],
    [10.15072, 15.86012, 17.67618, 37.52818, 7.688, 58.49562],
    [-4.07011, 8.54408, -33.09181, 19.05285, -33.42607, 5.68242],
];

impl AsteroidTemplate {
    /// Number of slots in the lookup table; the largest valid cluster size.
    pub const SLOTS: usize = SLOT_TABLE.len();

    /// Every distinct silhouette.
    pub const DISTINCT: [AsteroidTemplate; 5] = [
        Self::Round,
        Self::Chipped,
        Self::Squat,
        Self::Boulder,
        Self::Spur,
    ];

    /// Template for the asteroid at `index` within its cluster.
    pub fn for_index(index: usize) -> SceneResult<Self> {
        SLOT_TABLE
            .get(index)
            .copied()
            .ok_or(SceneError::UnsupportedAsteroidIndex {
                index,
                available: Self::SLOTS,
            })
    }

    /// Relative cubic segments of the outline.
    pub fn segments(self) -> &'static [CubicSegment; 5] {
        match self {
            Self::Round => &ROUND,
            Self::Chipped => &CHIPPED,
            Self::Squat => &SQUAT,
            Self::Boulder => &BOULDER,
            Self::Spur => &SPUR,
        }
    }

    /// Absolute control and end points, starting from `start`.
    /// Yields `(ctrl1, ctrl2, to)` per segment.
    pub fn absolute_segments(self, start: [f32; 2]) -> Vec<[[f32; 2]; 3]> {
        let mut cursor = start;
        self.segments()
            .iter()
            .map(|s| {
                let c1 = [cursor[0] + s[0], cursor[1] + s[1]];
                let c2 = [cursor[0] + s[2], cursor[1] + s[3]];
                let to = [cursor[0] + s[4], cursor[1] + s[5]];
                cursor = to;
                [c1, c2, to]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_slots_five_silhouettes() {
        assert_eq!(AsteroidTemplate::SLOTS, 6);
        let mut seen: Vec<AsteroidTemplate> = (0..AsteroidTemplate::SLOTS)
            .map(|i| AsteroidTemplate::for_index(i).unwrap())
            .collect();
        seen.dedup();
        assert_eq!(seen, AsteroidTemplate::DISTINCT.to_vec());
    }

    #[test]
    fn index_past_table_is_error() {
        for index in [6, 7, 100] {
            match AsteroidTemplate::for_index(index) {
                Err(SceneError::UnsupportedAsteroidIndex { index: i, available }) => {
                    assert_eq!(i, index);
                    assert_eq!(available, 6);
                }
                other => panic!("Expected UnsupportedAsteroidIndex, got {other:?}"),
            }
        }
    }

    #[test]
    fn absolute_segments_chain_from_start() {
        let segs = AsteroidTemplate::Round.absolute_segments([100.0, 50.0]);
        assert_eq!(segs.len(), 5);
        // First segment ends at start + its relative end point.
        assert!((segs[0][2][0] - (100.0 - 27.40937)).abs() < 1e-4);
        // Second segment's control point is relative to the first end point.
        assert!((segs[1][0][0] - (segs[0][2][0] - 4.24311)).abs() < 1e-4);
    }

    #[test]
    fn outlines_nearly_close() {
        // Each outline returns close to its start before the explicit close.
        for template in AsteroidTemplate::DISTINCT {
            let end = template.absolute_segments([0.0, 0.0])[4][2];
            let gap = (end[0] * end[0] + end[1] * end[1]).sqrt();
            assert!(gap < 0.01, "{template:?} gap = {gap}");
        }
    }
}
