/// Smallest rating step the next-point score targets.
const NEXT_RATING_POINT: f64 = 0.001;

/// Score ceiling of both games' score scale.
const MAX_SCORE: f64 = 1_010_000.0;

/// Rating of a single chart, plus the score gain that would raise it by
/// [`NEXT_RATING_POINT`] (bracket model only).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartRating {
    pub rating: f64,
    pub next_point_score: Option<f64>,
}

/// Per-chart rating formula. Selected once per pipeline: `Accuracy` for the
/// binary-save game, `ScoreBrackets` for the JSON-save game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingModel {
    /// `((accuracy * 100 - 55) / 45)^2 * difficulty`, accuracy as a fraction.
    Accuracy,
    /// Piecewise score brackets anchored on the chart constant.
    ScoreBrackets,
}

impl RatingModel {
    /// Computes a chart's rating.
    ///
    /// `accuracy` feeds the `Accuracy` model only; a record without one rates
    /// zero there. `cleared` feeds the `ScoreBrackets` model only, capping
    /// uncleared charts at 6.0.
    pub fn chart_rating(
        &self,
        score: u32,
        accuracy: Option<f32>,
        difficulty: f64,
        cleared: bool,
    ) -> ChartRating {
        match self {
            Self::Accuracy => ChartRating {
                rating: accuracy
                    .map(|acc| {
                        let factor = (f64::from(acc) * 100.0 - 55.0) / 45.0;
                        factor * factor * difficulty
                    })
                    .unwrap_or(0.0),
                next_point_score: None,
            },
            Self::ScoreBrackets => score_bracket_rating(score, difficulty, cleared),
        }
    }
}

fn score_bracket_rating(score: u32, difficulty: f64, cleared: bool) -> ChartRating {
    let s = f64::from(score);
    let d = difficulty;

    // Each bracket pairs the rating with the score that earns the next
    // 0.001 of rating inside the same bracket.
    let (rating, next_point) = if s >= 1_010_000.0 {
        (d + 3.7, MAX_SCORE)
    } else if s >= 1_008_000.0 {
        let r = d + 3.4 + (s - 1_008_000.0) / 10_000.0;
        (r, (r + NEXT_RATING_POINT - d - 3.4) * 10_000.0 + 1_008_000.0)
    } else if s >= 1_004_000.0 {
        let r = d + 2.4 + (s - 1_004_000.0) / 4_000.0;
        (r, (r + NEXT_RATING_POINT - d - 2.4) * 4_000.0 + 1_004_000.0)
    } else if s >= 1_000_000.0 {
        let r = d + 2.0 + (s - 1_000_000.0) / 10_000.0;
        (r, (r + NEXT_RATING_POINT - d - 2.0) * 10_000.0 + 1_000_000.0)
    } else if s >= 980_000.0 {
        let r = d + 1.0 + (s - 980_000.0) / 20_000.0;
        (r, (r + NEXT_RATING_POINT - d - 1.0) * 20_000.0 + 980_000.0)
    } else if s >= 950_000.0 {
        let r = d + (s - 950_000.0) / 30_000.0;
        (r, (r + NEXT_RATING_POINT - d) * 30_000.0 + 950_000.0)
    } else if s >= 900_000.0 {
        let r = d - 1.0 + (s - 900_000.0) / 50_000.0;
        (r, (r + NEXT_RATING_POINT - d + 1.0) * 50_000.0 + 900_000.0)
    } else if s >= 500_000.0 {
        let r = d - 5.0 + (s - 500_000.0) / 100_000.0;
        (r, (r + NEXT_RATING_POINT - d + 5.0) * 100_000.0 + 500_000.0)
    } else {
        (0.0, 500_000.0)
    };

    let mut rating = rating.max(0.0);
    if !cleared {
        rating = rating.min(6.0);
    }

    let mut gain = next_point - s;
    if gain + s > MAX_SCORE {
        gain = MAX_SCORE - s;
    }

    ChartRating {
        rating,
        next_point_score: Some(gain),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn bracket(score: u32, difficulty: f64) -> ChartRating {
        RatingModel::ScoreBrackets.chart_rating(score, None, difficulty, true)
    }

    #[test]
    fn test_bracket_anchors() {
        let d = 10.0;
        assert!(close(bracket(1_010_000, d).rating, d + 3.7));
        assert!(close(bracket(1_008_000, d).rating, d + 3.4));
        assert!(close(bracket(1_004_000, d).rating, d + 2.4));
        assert!(close(bracket(1_000_000, d).rating, d + 2.0));
        assert!(close(bracket(980_000, d).rating, d + 1.0));
        assert!(close(bracket(950_000, d).rating, d));
        assert!(close(bracket(900_000, d).rating, d - 1.0));
        assert!(close(bracket(500_000, d).rating, d - 5.0));
        assert!(close(bracket(499_999, d).rating, 0.0));
        assert!(close(bracket(0, d).rating, 0.0));
    }

    #[test]
    fn test_bracket_interior() {
        // Halfway through the 980k bracket adds half its 1.0 span
        assert!(close(bracket(990_000, 10.0).rating, 11.5));
        // 4k bracket is the steepest: 2000 points for 0.5 rating
        assert!(close(bracket(1_006_000, 10.0).rating, 12.9));
    }

    #[test]
    fn test_negative_rating_clamped_to_zero() {
        assert!(close(bracket(500_000, 2.0).rating, 0.0));
        assert!(close(bracket(700_000, 1.0).rating, 0.0));
    }

    #[test]
    fn test_uncleared_capped_at_six() {
        let result = RatingModel::ScoreBrackets.chart_rating(1_010_000, None, 12.0, false);
        assert!(close(result.rating, 6.0));

        // Below the cap the flag changes nothing
        let result = RatingModel::ScoreBrackets.chart_rating(900_000, None, 5.0, false);
        assert!(close(result.rating, 4.0));
    }

    #[test]
    fn test_monotonic_in_score() {
        let d = 10.0;
        let mut last = -1.0;
        for score in (0..=1_010_000).step_by(500) {
            let rating = bracket(score, d).rating;
            assert!(
                rating >= last,
                "rating dropped at score {}: {} < {}",
                score,
                rating,
                last
            );
            last = rating;
        }
    }

    #[test]
    fn test_next_point_score_gain() {
        // In the 20k-per-1.0 bracket a 0.001 step costs 20 points
        let result = bracket(980_000, 10.0);
        assert!(close(result.next_point_score.unwrap(), 20.0));

        // In the steep 4k bracket it costs 4
        let result = bracket(1_004_000, 10.0);
        assert!(close(result.next_point_score.unwrap(), 4.0));
    }

    #[test]
    fn test_next_point_score_capped_at_max() {
        let result = bracket(1_009_999, 10.0);
        assert!(close(result.next_point_score.unwrap(), 1.0));

        let result = bracket(1_010_000, 10.0);
        assert!(close(result.next_point_score.unwrap(), 0.0));
    }

    #[test]
    fn test_accuracy_model() {
        let model = RatingModel::Accuracy;

        let result = model.chart_rating(1_000_000, Some(1.0), 13.0, true);
        assert!(close(result.rating, 13.0));
        assert_eq!(result.next_point_score, None);

        // Tolerance widened for the f32 accuracy input
        let result = model.chart_rating(900_000, Some(0.955), 10.0, true);
        assert!((result.rating - 8.1).abs() < 1e-5);

        // No accuracy, no rating
        let result = model.chart_rating(900_000, None, 10.0, true);
        assert!(close(result.rating, 0.0));
    }
}
