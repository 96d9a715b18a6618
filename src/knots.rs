//! Knot table validation and segment lookup.
//!
//! A knot vector is an immutable sequence of keyframe positions in [0,1]:
//! strictly increasing, starting at 0.0, ending at 1.0. Lookup finds the
//! bracketing segment for a driving value and the normalized fraction
//! within it.

use crate::error::InvalidKeyframeData;
use crate::Result;

/// Bracketing segment index and normalized local fraction within it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSample {
    /// Index `i` such that `knot[i] <= value < knot[i+1]` (with 1.0
    /// mapping to the final segment).
    pub segment: usize,
    /// `(value - knot[i]) / (knot[i+1] - knot[i])`, in [0,1].
    pub fraction: f32,
}

impl PathSample {
    /// True when the sample means "use keyframe 0 verbatim, no blend".
    ///
    /// Blending keyframe 0 with itself can introduce normalization drift
    /// on quaternions, so callers must special-case this rather than
    /// blending with a zero fraction.
    #[inline]
    pub fn is_first_knot(&self) -> bool {
        self.segment == 0 && self.fraction == 0.0
    }
}

/// Immutable, validated knot sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct KnotVector {
    knots: Vec<f32>,
}

impl KnotVector {
    /// Validate and take ownership of a knot sequence.
    ///
    /// Fails with [`InvalidKeyframeData`] when the sequence is shorter
    /// than two entries, does not start at 0.0, does not end at 1.0, or is
    /// not strictly increasing. Equal consecutive knots are invalid, which
    /// guarantees [`KnotVector::locate`] never divides by zero.
    pub fn new(knots: Vec<f32>) -> Result<Self> {
        if knots.len() < 2 {
            return Err(InvalidKeyframeData::TooFewKnots { count: knots.len() });
        }
        if knots[0] != 0.0 {
            return Err(InvalidKeyframeData::FirstKnotNotZero { value: knots[0] });
        }
        let last = knots[knots.len() - 1];
        if last != 1.0 {
            return Err(InvalidKeyframeData::LastKnotNotOne { value: last });
        }
        if let Some(index) = (0..knots.len() - 1).find(|&i| knots[i] >= knots[i + 1]) {
            return Err(InvalidKeyframeData::NonIncreasingKnots {
                index,
                value: knots[index],
                next: knots[index + 1],
            });
        }
        Ok(Self { knots })
    }

    /// Number of knots (always at least 2).
    #[inline]
    pub fn len(&self) -> usize {
        self.knots.len()
    }

    /// Never true; validation requires at least two knots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.knots
    }

    /// Find the segment containing `value` and the normalized fraction
    /// within it.
    ///
    /// Values at or below 0.0 return the first-knot sentinel (segment 0,
    /// fraction 0.0); values at or above 1.0 return the final segment with
    /// fraction 1.0. Interior values binary-search for the unique segment
    /// with `knot[i] <= value < knot[i+1]`.
    pub fn locate(&self, value: f32) -> PathSample {
        let n = self.knots.len();
        if value <= 0.0 {
            return PathSample {
                segment: 0,
                fraction: 0.0,
            };
        }
        if value >= 1.0 {
            return PathSample {
                segment: n - 2,
                fraction: 1.0,
            };
        }
        // First index whose knot exceeds value; the segment starts one
        // before it. value in (0,1) keeps this in bounds.
        let upper = self.knots.partition_point(|k| *k <= value);
        let segment = upper - 1;
        let t0 = self.knots[segment];
        let t1 = self.knots[segment + 1];
        PathSample {
            segment,
            fraction: (value - t0) / (t1 - t0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_sequences() {
        assert_eq!(
            KnotVector::new(vec![]),
            Err(InvalidKeyframeData::TooFewKnots { count: 0 })
        );
        assert_eq!(
            KnotVector::new(vec![0.0]),
            Err(InvalidKeyframeData::TooFewKnots { count: 1 })
        );
    }

    #[test]
    fn rejects_bad_endpoints() {
        assert_eq!(
            KnotVector::new(vec![0.1, 1.0]),
            Err(InvalidKeyframeData::FirstKnotNotZero { value: 0.1 })
        );
        assert_eq!(
            KnotVector::new(vec![0.0, 0.9]),
            Err(InvalidKeyframeData::LastKnotNotOne { value: 0.9 })
        );
    }

    #[test]
    fn rejects_equal_consecutive_knots() {
        assert_eq!(
            KnotVector::new(vec![0.0, 0.5, 0.5, 1.0]),
            Err(InvalidKeyframeData::NonIncreasingKnots {
                index: 1,
                value: 0.5,
                next: 0.5,
            })
        );
    }

    #[test]
    fn locate_endpoints() {
        let knots = KnotVector::new(vec![0.0, 0.25, 0.5, 1.0]).unwrap();
        assert_eq!(
            knots.locate(0.0),
            PathSample {
                segment: 0,
                fraction: 0.0,
            }
        );
        assert!(knots.locate(0.0).is_first_knot());
        assert_eq!(
            knots.locate(1.0),
            PathSample {
                segment: 2,
                fraction: 1.0,
            }
        );
    }

    #[test]
    fn locate_clamps_out_of_range_values() {
        let knots = KnotVector::new(vec![0.0, 1.0]).unwrap();
        assert!(knots.locate(-0.5).is_first_knot());
        assert_eq!(
            knots.locate(1.5),
            PathSample {
                segment: 0,
                fraction: 1.0,
            }
        );
    }

    #[test]
    fn locate_interior_segments() {
        let knots = KnotVector::new(vec![0.0, 0.25, 1.0]).unwrap();

        let sample = knots.locate(0.125);
        assert_eq!(sample.segment, 0);
        assert!((sample.fraction - 0.5).abs() < 1e-6);

        // Non-uniform segment: (0.5 - 0.25) / 0.75
        let sample = knots.locate(0.5);
        assert_eq!(sample.segment, 1);
        assert!((sample.fraction - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn locate_matches_linear_scan_on_dense_table() {
        let n = 64;
        let knots: Vec<f32> = (0..n).map(|i| i as f32 / (n - 1) as f32).collect();
        let knots = KnotVector::new(knots).unwrap();
        for step in 0..200 {
            let value = step as f32 / 199.0;
            let sample = knots.locate(value);
            assert!(knots.as_slice()[sample.segment] <= value + 1e-6);
            assert!(value <= knots.as_slice()[sample.segment + 1] + 1e-6);
            assert!((0.0..=1.0).contains(&sample.fraction));
        }
    }
}
