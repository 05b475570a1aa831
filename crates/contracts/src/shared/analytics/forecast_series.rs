//! Merging of historical actuals and model predictions into one chart-ready
//! sequence.
//!
//! The predicted, upper and lower tracks repeat the last historical value at
//! the bridge index so the dashed prediction line starts exactly where the
//! solid historical line ends. The bridge point itself is not a prediction:
//! it is drawn without a marker and excluded from tooltips.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Marker radius of predicted points (except the bridge)
pub const PREDICTION_POINT_RADIUS: f64 = 4.0;
/// Marker radius of predicted points under the pointer (except the bridge)
pub const PREDICTION_POINT_HOVER_RADIUS: f64 = 6.0;

/// A single observed value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub period: String,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(period: impl Into<String>, value: f64) -> Self {
        Self {
            period: period.into(),
            value,
        }
    }
}

/// A model output with its 10th/90th percentile band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionPoint {
    pub period: String,
    pub point: f64,
    /// 10th percentile
    pub lower: f64,
    /// 90th percentile
    pub upper: f64,
}

/// Value tracks of a `MergedSeries`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesTrack {
    Historical,
    Predicted,
    Upper,
    Lower,
}

impl SeriesTrack {
    /// Tracks that get a legend entry; the band edges only shade the area between them.
    pub fn in_legend(&self) -> bool {
        matches!(self, SeriesTrack::Historical | SeriesTrack::Predicted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForecastMergeError {
    #[error("forecast has predictions but no historical data to anchor them")]
    EmptyHistory,
}

/// Historical and predicted values aligned on one label axis.
///
/// All four tracks have `labels.len()` entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergedSeries {
    pub labels: Vec<String>,
    pub historical: Vec<Option<f64>>,
    pub predicted: Vec<Option<f64>>,
    pub upper: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
    /// Index of the last historical period
    pub bridge: Option<usize>,
}

impl MergedSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn track(&self, track: SeriesTrack) -> &[Option<f64>] {
        match track {
            SeriesTrack::Historical => &self.historical,
            SeriesTrack::Predicted => &self.predicted,
            SeriesTrack::Upper => &self.upper,
            SeriesTrack::Lower => &self.lower,
        }
    }

    pub fn is_bridge(&self, index: usize) -> bool {
        self.bridge == Some(index)
    }

    /// Marker radius of the predicted track at `index`
    pub fn point_radius(&self, index: usize) -> f64 {
        if self.is_bridge(index) {
            0.0
        } else {
            PREDICTION_POINT_RADIUS
        }
    }

    pub fn point_hover_radius(&self, index: usize) -> f64 {
        if self.is_bridge(index) {
            0.0
        } else {
            PREDICTION_POINT_HOVER_RADIUS
        }
    }

    /// Whether the value of `track` at `index` is offered in a tooltip
    pub fn shows_tooltip(&self, track: SeriesTrack, index: usize) -> bool {
        let has_value = self
            .track(track)
            .get(index)
            .map(Option::is_some)
            .unwrap_or(false);
        has_value && !(track == SeriesTrack::Predicted && self.is_bridge(index))
    }

    pub fn legend_entries(&self) -> Vec<SeriesTrack> {
        [
            SeriesTrack::Historical,
            SeriesTrack::Upper,
            SeriesTrack::Predicted,
            SeriesTrack::Lower,
        ]
        .into_iter()
        .filter(SeriesTrack::in_legend)
        .collect()
    }

    /// Smallest and largest value over all tracks
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.historical
            .iter()
            .chain(&self.predicted)
            .chain(&self.upper)
            .chain(&self.lower)
            .flatten()
            .fold(None, |acc, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Aligns `historical` (chronological) and `predictions` (continuing right
/// after it) into one `MergedSeries` of length `n + m`.
///
/// With no history there is nothing to anchor the prediction to: an empty
/// request yields an empty series, predictions alone are rejected.
pub fn merge_forecast(
    historical: &[TimeSeriesPoint],
    predictions: &[PredictionPoint],
) -> Result<MergedSeries, ForecastMergeError> {
    let n = historical.len();
    let m = predictions.len();

    if n == 0 {
        return if m == 0 {
            Ok(MergedSeries::default())
        } else {
            Err(ForecastMergeError::EmptyHistory)
        };
    }

    let bridge = n - 1;
    let bridge_value = Some(historical[bridge].value);

    let labels = historical
        .iter()
        .map(|p| p.period.clone())
        .chain(predictions.iter().map(|p| p.period.clone()))
        .collect();

    let historical_track = historical
        .iter()
        .map(|p| Some(p.value))
        .chain(std::iter::repeat(None).take(m))
        .collect();

    let prediction_track = |pick: fn(&PredictionPoint) -> f64| -> Vec<Option<f64>> {
        std::iter::repeat(None)
            .take(bridge)
            .chain(std::iter::once(bridge_value))
            .chain(predictions.iter().map(|p| Some(pick(p))))
            .collect()
    };

    Ok(MergedSeries {
        labels,
        historical: historical_track,
        predicted: prediction_track(|p| p.point),
        upper: prediction_track(|p| p.upper),
        lower: prediction_track(|p| p.lower),
        bridge: Some(bridge),
    })
}

/// The first predicted period, shown as the "next month" tile
pub fn next_prediction(predictions: &[PredictionPoint]) -> Option<&PredictionPoint> {
    predictions.first()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> Vec<TimeSeriesPoint> {
        vec![
            TimeSeriesPoint::new("Jan-2024", 100.0),
            TimeSeriesPoint::new("Feb-2024", 120.0),
            TimeSeriesPoint::new("Mar-2024", 110.0),
        ]
    }

    fn predictions() -> Vec<PredictionPoint> {
        vec![
            PredictionPoint {
                period: "Apr-2024".to_string(),
                point: 130.0,
                lower: 115.0,
                upper: 150.0,
            },
            PredictionPoint {
                period: "May-2024".to_string(),
                point: 140.0,
                lower: 118.0,
                upper: 165.0,
            },
        ]
    }

    #[test]
    fn test_merge_layout() {
        let merged = merge_forecast(&history(), &predictions()).unwrap();

        assert_eq!(
            merged.labels,
            vec!["Jan-2024", "Feb-2024", "Mar-2024", "Apr-2024", "May-2024"]
        );
        assert_eq!(
            merged.historical,
            vec![Some(100.0), Some(120.0), Some(110.0), None, None]
        );
        assert_eq!(
            merged.predicted,
            vec![None, None, Some(110.0), Some(130.0), Some(140.0)]
        );
        assert_eq!(
            merged.upper,
            vec![None, None, Some(110.0), Some(150.0), Some(165.0)]
        );
        assert_eq!(
            merged.lower,
            vec![None, None, Some(110.0), Some(115.0), Some(118.0)]
        );
        assert_eq!(merged.bridge, Some(2));
    }

    #[test]
    fn test_track_lengths_and_bridge_value() {
        let h = history();
        let p = predictions();
        let merged = merge_forecast(&h, &p).unwrap();

        assert_eq!(merged.len(), h.len() + p.len());
        for track in [
            SeriesTrack::Historical,
            SeriesTrack::Predicted,
            SeriesTrack::Upper,
            SeriesTrack::Lower,
        ] {
            assert_eq!(merged.track(track).len(), merged.len());
            assert_eq!(merged.track(track)[2], Some(110.0));
        }
    }

    #[test]
    fn test_bridge_marker_and_tooltip() {
        let merged = merge_forecast(&history(), &predictions()).unwrap();

        assert_eq!(merged.point_radius(2), 0.0);
        assert_eq!(merged.point_hover_radius(2), 0.0);
        assert_eq!(merged.point_radius(3), PREDICTION_POINT_RADIUS);
        assert_eq!(merged.point_hover_radius(4), PREDICTION_POINT_HOVER_RADIUS);

        assert!(!merged.shows_tooltip(SeriesTrack::Predicted, 2));
        assert!(merged.shows_tooltip(SeriesTrack::Historical, 2));
        assert!(merged.shows_tooltip(SeriesTrack::Predicted, 3));
        assert!(!merged.shows_tooltip(SeriesTrack::Predicted, 0));
        assert!(!merged.shows_tooltip(SeriesTrack::Historical, 4));
    }

    #[test]
    fn test_legend_hides_band_edges() {
        let merged = merge_forecast(&history(), &predictions()).unwrap();
        assert_eq!(
            merged.legend_entries(),
            vec![SeriesTrack::Historical, SeriesTrack::Predicted]
        );
    }

    #[test]
    fn test_no_predictions_renders_history_only() {
        let merged = merge_forecast(&history(), &[]).unwrap();

        assert_eq!(merged.len(), 3);
        assert_eq!(merged.predicted, vec![None, None, Some(110.0)]);
        assert_eq!(merged.upper, vec![None, None, Some(110.0)]);
        assert_eq!(merged.lower, vec![None, None, Some(110.0)]);
    }

    #[test]
    fn test_single_historical_point_bridges_at_zero() {
        let merged = merge_forecast(&history()[..1], &predictions()).unwrap();
        assert_eq!(merged.bridge, Some(0));
        assert_eq!(merged.predicted, vec![Some(100.0), Some(130.0), Some(140.0)]);
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(
            merge_forecast(&[], &predictions()),
            Err(ForecastMergeError::EmptyHistory)
        );
        let empty = merge_forecast(&[], &[]).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.bridge, None);
    }

    #[test]
    fn test_value_range_and_next_prediction() {
        let p = predictions();
        let merged = merge_forecast(&history(), &p).unwrap();
        assert_eq!(merged.value_range(), Some((100.0, 165.0)));
        assert_eq!(next_prediction(&p).map(|p| p.point), Some(130.0));
        assert!(next_prediction(&[]).is_none());
    }
}
