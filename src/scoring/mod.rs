// ScoreCrab - GPL-3.0-or-later
// This file is part of ScoreCrab.
//
// Copyright (C) 2026 Daniel Freiermuth
//
// ScoreCrab is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// ScoreCrab is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with ScoreCrab.  If not, see <https://www.gnu.org/licenses/>.

//! Min-max normalization of raw scores into `[0, 1]`.

use crate::error::ScoreError;
use crate::parser::Record;

/// What to do when every score is the same and `max - min` is zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UniformPolicy {
    /// Map every score to 0.0
    #[default]
    Zero,
    /// Fail the run with [`ScoreError::UniformScores`]
    Reject,
}

/// Global bounds of a score set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax {
    pub min: f64,
    pub max: f64,
}

impl MinMax {
    /// Scan `scores` once for its bounds. `None` when empty.
    #[must_use]
    pub fn from_scores(scores: &[f64]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }

        let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self { min, max })
    }

    #[must_use]
    pub const fn is_uniform(&self) -> bool {
        self.max <= self.min
    }

    /// Linear rescale of `value` against these bounds.
    ///
    /// When `max - min` overflows `f64`, the operands are halved first so the
    /// result still lands in [0, 1].
    #[must_use]
    pub const fn scale(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range.is_finite() {
            (value - self.min) / range
        } else {
            (value / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0)
        }
    }
}

/// Normalize scores to the [0, 1] range over the whole set.
///
/// The minimum maps to 0.0 and the maximum to 1.0. Output order matches input
/// order.
pub fn normalize_scores(scores: &[f64], policy: UniformPolicy) -> Result<Vec<f64>, ScoreError> {
    let Some(bounds) = MinMax::from_scores(scores) else {
        return Ok(Vec::new());
    };

    if bounds.is_uniform() {
        return match policy {
            UniformPolicy::Zero => {
                tracing::warn!(
                    "All {} scores equal {}, normalizing every score to 0.0",
                    scores.len(),
                    bounds.min
                );
                Ok(vec![0.0; scores.len()])
            }
            UniformPolicy::Reject => Err(ScoreError::UniformScores {
                count: scores.len(),
                value: bounds.min,
            }),
        };
    }

    Ok(scores.iter().map(|&s| bounds.scale(s)).collect())
}

/// Overwrite each record's raw score with its normalized value.
///
/// Returns the raw bounds, or `None` if there were no records.
pub fn apply_normalized(
    records: &mut [Record],
    policy: UniformPolicy,
) -> Result<Option<MinMax>, ScoreError> {
    let raw: Vec<f64> = records.iter().map(|r| r.score).collect();
    let bounds = MinMax::from_scores(&raw);
    let normalized = normalize_scores(&raw, policy)?;

    for (record, score) in records.iter_mut().zip(normalized) {
        record.score = score;
    }

    if let Some(MinMax { min, max }) = bounds {
        tracing::info!("Normalized {} scores from [{min}, {max}]", records.len());
    }

    Ok(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_scores() {
        let normalized = normalize_scores(&[10.0, 20.0, 30.0], UniformPolicy::Zero).unwrap();
        assert_eq!(normalized, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_bounds_map_to_unit_interval() {
        let scores = [3.7, -12.5, 8.25, 0.0, 101.3, -12.5, 44.0];
        let normalized = normalize_scores(&scores, UniformPolicy::Zero).unwrap();

        assert_eq!(normalized.len(), scores.len());
        assert_eq!(normalized[1], 0.0);
        assert_eq!(normalized[5], 0.0);
        assert_eq!(normalized[4], 1.0);
        assert!(normalized.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_range_wider_than_f64() {
        let scores = [-1e308, 0.0, 1e308, f64::MAX, -f64::MAX];
        let normalized = normalize_scores(&scores, UniformPolicy::Zero).unwrap();

        assert_eq!(normalized[3], 1.0);
        assert_eq!(normalized[4], 0.0);
        assert!((normalized[1] - 0.5).abs() < 1e-12);
        assert!(normalized.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_range_wider_than_f64_keeps_exact_bounds() {
        let normalized = normalize_scores(&[-1e308, 0.0, 1e308], UniformPolicy::Zero).unwrap();
        assert_eq!(normalized, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_order_is_preserved() {
        let normalized = normalize_scores(&[4.0, 0.0, 2.0], UniformPolicy::Zero).unwrap();
        assert_eq!(normalized, vec![1.0, 0.0, 0.5]);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize_scores(&[], UniformPolicy::Reject).unwrap().is_empty());
        assert_eq!(MinMax::from_scores(&[]), None);
    }

    #[test]
    fn test_uniform_scores_become_zero() {
        let normalized = normalize_scores(&[5.0, 5.0, 5.0], UniformPolicy::Zero).unwrap();
        assert_eq!(normalized, vec![0.0, 0.0, 0.0]);

        let single = normalize_scores(&[42.0], UniformPolicy::Zero).unwrap();
        assert_eq!(single, vec![0.0]);
    }

    #[test]
    fn test_uniform_scores_rejected() {
        let err = normalize_scores(&[5.0, 5.0], UniformPolicy::Reject).unwrap_err();
        assert!(matches!(
            err,
            ScoreError::UniformScores { count: 2, value } if value == 5.0
        ));
    }

    #[test]
    fn test_apply_normalized_rewrites_in_place() {
        let mut records = vec![
            Record::new("a", 10.0, 1),
            Record::new("b", 30.0, 2),
            Record::new("c", 20.0, 3),
        ];

        let bounds = apply_normalized(&mut records, UniformPolicy::Zero).unwrap();

        assert_eq!(bounds, Some(MinMax { min: 10.0, max: 30.0 }));
        let scores: Vec<f64> = records.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![0.0, 1.0, 0.5]);
        let ids: Vec<&str> = records.iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_apply_normalized_leaves_records_on_reject() {
        let mut records = vec![Record::new("a", 7.0, 1), Record::new("b", 7.0, 2)];
        assert!(apply_normalized(&mut records, UniformPolicy::Reject).is_err());
        assert!(records.iter().all(|r| r.score == 7.0));
    }
}
