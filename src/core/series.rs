//! Date-indexed closing price series and rolling-window primitives.

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// A sequence of daily closes ordered by date. Derived columns use `None`
/// for positions where the value is undefined (leading window positions,
/// first percent-change slot).
#[derive(Debug, Clone, Default)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Rolling arithmetic mean over `window` trailing closes. The first
    /// `window - 1` positions are `None`; position i >= window - 1 holds the
    /// mean of closes `i - window + 1 ..= i`.
    pub fn rolling_mean(&self, window: usize) -> Vec<Option<f64>> {
        if window == 0 {
            return vec![None; self.points.len()];
        }

        let mut means = Vec::with_capacity(self.points.len());
        let mut sum = 0.0;
        for (i, point) in self.points.iter().enumerate() {
            sum += point.close;
            if i >= window {
                sum -= self.points[i - window].close;
            }
            if i + 1 >= window {
                means.push(Some(sum / window as f64));
            } else {
                means.push(None);
            }
        }
        means
    }

    /// Simple percent change from the previous close:
    /// `(p[i] - p[i-1]) / p[i-1]`. Undefined at position 0.
    pub fn pct_change(&self) -> Vec<Option<f64>> {
        let mut changes = Vec::with_capacity(self.points.len());
        for (i, point) in self.points.iter().enumerate() {
            if i == 0 {
                changes.push(None);
                continue;
            }
            let prev = self.points[i - 1].close;
            changes.push(Some((point.close - prev) / prev));
        }
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(closes: &[f64]) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        PriceSeries::new(
            closes
                .iter()
                .enumerate()
                .map(|(i, &close)| PricePoint {
                    date: start + chrono::Duration::days(i as i64),
                    close,
                })
                .collect(),
        )
    }

    #[test]
    fn test_points_sorted_by_date() {
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let s = PriceSeries::new(vec![
            PricePoint {
                date: d1,
                close: 2.0,
            },
            PricePoint {
                date: d2,
                close: 1.0,
            },
        ]);
        assert_eq!(s.points()[0].date, d2);
        assert_eq!(s.last().unwrap().close, 2.0);
    }

    #[test]
    fn test_rolling_mean_leading_positions_undefined() {
        let s = series(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let means = s.rolling_mean(3);

        assert_eq!(means[0], None);
        assert_eq!(means[1], None);
        assert_eq!(means[2], Some(2.0));
        assert_eq!(means[3], Some(3.0));
        assert_eq!(means[4], Some(4.0));
    }

    #[test]
    fn test_rolling_mean_window_one_is_identity() {
        let s = series(&[10.0, 20.0, 30.0]);
        assert_eq!(
            s.rolling_mean(1),
            vec![Some(10.0), Some(20.0), Some(30.0)]
        );
    }

    #[test]
    fn test_rolling_mean_window_longer_than_series() {
        let s = series(&[1.0, 2.0]);
        assert_eq!(s.rolling_mean(5), vec![None, None]);
    }

    #[test]
    fn test_pct_change() {
        let s = series(&[100.0, 110.0, 99.0]);
        let changes = s.pct_change();

        assert_eq!(changes[0], None);
        assert!((changes[1].unwrap() - 0.1).abs() < 1e-12);
        assert!((changes[2].unwrap() - (-0.1)).abs() < 1e-12);
    }

    #[test]
    fn test_pct_change_empty_series() {
        let s = PriceSeries::default();
        assert!(s.pct_change().is_empty());
        assert!(s.rolling_mean(20).is_empty());
        assert!(s.is_empty());
    }
}
