//! Trend line and histogram math used by the chart displayers

use serde::Serialize;

/// Bin count for the temperature distribution
pub const DEFAULT_HISTOGRAM_BINS: usize = 7;

/// Ordinary least squares line over index positions (x = 0, 1, 2, ...)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    /// Fit a line through `values`; `None` for fewer than 2 points, where the
    /// slope is undefined
    pub fn fit(values: &[f64]) -> Option<Self> {
        let n = values.len();
        if n < 2 {
            return None;
        }

        let n_f = n as f64;
        let x_mean = (n_f - 1.0) / 2.0;
        let y_mean = values.iter().sum::<f64>() / n_f;

        let (mut sxx, mut sxy) = (0.0, 0.0);
        for (i, y) in values.iter().enumerate() {
            let dx = i as f64 - x_mean;
            sxx += dx * dx;
            sxy += dx * (y - y_mean);
        }

        let slope = sxy / sxx;
        Some(Self {
            slope,
            intercept: y_mean - slope * x_mean,
        })
    }

    pub fn value_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Fitted values at x = 0..n
    pub fn points(&self, n: usize) -> Vec<f64> {
        (0..n).map(|i| self.value_at(i as f64)).collect()
    }
}

/// One histogram bin covering `[lower, upper)` (the last bin includes `upper`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width histogram between the smallest and largest value.
///
/// Non-finite values are ignored. All-equal input yields a single bin.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max == min {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: finite.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut result: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for value in finite {
        let index = (((value - min) / width) as usize).min(bins - 1);
        result[index].count += 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_no_regression_below_two_points() {
        assert!(TrendLine::fit(&[]).is_none());
        assert!(TrendLine::fit(&[-27.0]).is_none());
    }

    #[test]
    fn test_fit_exact_line() {
        let line = TrendLine::fit(&[1.0, 3.0, 5.0, 7.0]).unwrap();
        assert!(close(line.slope, 2.0));
        assert!(close(line.intercept, 1.0));
        assert_eq!(line.points(2).len(), 2);
    }

    #[test]
    fn test_fit_least_squares() {
        // x = 0, 1, 2; y = -27, -26, -28
        let line = TrendLine::fit(&[-27.0, -26.0, -28.0]).unwrap();
        assert!(close(line.slope, -0.5));
        assert!(close(line.intercept, -26.5));
        assert!(close(line.value_at(2.0), -27.5));
    }

    #[test]
    fn test_two_points_pass_through_both() {
        let line = TrendLine::fit(&[80.0, 82.0]).unwrap();
        assert!(close(line.value_at(0.0), 80.0));
        assert!(close(line.value_at(1.0), 82.0));
    }

    #[test]
    fn test_histogram_counts_every_value() {
        let values = [-30.0, -29.0, -28.0, -27.0, -26.0, -25.0, -25.0];
        let bins = histogram(&values, DEFAULT_HISTOGRAM_BINS);
        assert_eq!(bins.len(), 7);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
        assert_eq!(bins[0].lower, -30.0);
        assert_eq!(bins[6].upper, -25.0);
        assert_eq!(bins[6].count, 2);
    }

    #[test]
    fn test_histogram_single_value() {
        let bins = histogram(&[-27.0, -27.0], 7);
        assert_eq!(
            bins,
            vec![HistogramBin {
                lower: -27.0,
                upper: -27.0,
                count: 2
            }]
        );
        assert!(histogram(&[], 7).is_empty());
    }
}
