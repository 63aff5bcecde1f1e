//! Time-series extraction for the dashboard charts.
//!
//! Everything here maps sales series into SVG user-space coordinates or
//! chart-ready values:
//! - per-product sparklines (160x40 box)
//! - combined monthly units line chart
//! - last-month bar chart

use super::metrics::units_overflow;
use crate::parser::schema::{NamedValue, Point, Product};
use crate::utils::config::{
    BAR_MIN_HEIGHT_PCT, LINE_CHART_BASELINE, LINE_CHART_HEIGHT, LINE_CHART_OFFSET,
    LINE_CHART_SPAN, LINE_CHART_STEP, SPARKLINE_HEIGHT, SPARKLINE_PADDING, SPARKLINE_WIDTH,
};
use crate::utils::error::MetricsError;

/// Shared series length across all products (0 for an empty list)
///
/// # Errors
/// * `MetricsError::SeriesLengthMismatch` - the first product that disagrees
pub fn uniform_series_len(products: &[Product]) -> Result<usize, MetricsError> {
    let Some(first) = products.first() else {
        return Ok(0);
    };
    let expected = first.monthly_sales.len();

    match products.iter().find(|p| p.monthly_sales.len() != expected) {
        Some(bad) => Err(MetricsError::SeriesLengthMismatch {
            id: bad.id.to_string(),
            expected,
            actual: bad.monthly_sales.len(),
        }),
        None => Ok(expected),
    }
}

/// Value as a fraction of `max`; a zero maximum puts everything at the baseline
fn normalize(value: u64, max: u64) -> f64 {
    if max == 0 {
        0.0
    } else {
        value as f64 / max as f64
    }
}

/// Sparkline points for one product's monthly series
///
/// Higher values map to smaller `y` (higher on screen). Returns no points
/// for series shorter than two.
pub fn sparkline_series(series: &[u64]) -> Vec<Point> {
    if series.len() < 2 {
        return Vec::new();
    }

    let max = series.iter().copied().max().unwrap_or(0);
    let step = (SPARKLINE_WIDTH - 2.0 * SPARKLINE_PADDING) / (series.len() - 1) as f64;
    let span = SPARKLINE_HEIGHT - 2.0 * SPARKLINE_PADDING;

    series
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            Point::new(
                SPARKLINE_PADDING + i as f64 * step,
                SPARKLINE_PADDING + (1.0 - normalize(v, max)) * span,
            )
        })
        .collect()
}

/// Units sold in `month_index` summed across all products
///
/// An empty product list sums to 0.
///
/// # Errors
/// * `MetricsError::SeriesLengthMismatch` - products disagree on series length
/// * `MetricsError::MonthOutOfRange` - index past the end of the series
/// * `MetricsError::UnitsOverflow` - the month's combined units do not fit in a `u64`
pub fn monthly_aggregate(products: &[Product], month_index: usize) -> Result<u64, MetricsError> {
    if products.is_empty() {
        return Ok(0);
    }

    let len = uniform_series_len(products)?;
    if month_index >= len {
        return Err(MetricsError::MonthOutOfRange {
            index: month_index,
            len,
        });
    }

    products.iter().try_fold(0u64, |acc, p| {
        acc.checked_add(p.monthly_sales[month_index])
            .ok_or_else(|| units_overflow(p))
    })
}

/// `monthly_aggregate` for every reporting month
pub fn monthly_aggregate_series(products: &[Product]) -> Result<Vec<u64>, MetricsError> {
    let len = uniform_series_len(products)?;
    (0..len).map(|i| monthly_aggregate(products, i)).collect()
}

/// Last month's units for each product, in input order
///
/// # Errors
/// * `MetricsError::SeriesTooShort` - a product has no months at all
pub fn last_month_per_product(products: &[Product]) -> Result<Vec<NamedValue>, MetricsError> {
    products
        .iter()
        .map(|p| match p.monthly_sales.last() {
            Some(&value) => Ok(NamedValue {
                name: p.name.clone(),
                value,
            }),
            None => Err(MetricsError::SeriesTooShort {
                id: p.id.to_string(),
                actual: 0,
                required: 1,
            }),
        })
        .collect()
}

/// Points for the combined monthly line chart
///
/// The chart is `len * 60` wide and 120 high; values occupy a 90-unit band
/// sitting 10 units above the bottom edge.
pub fn line_chart_points(aggregate: &[u64]) -> Vec<Point> {
    let max = aggregate.iter().copied().max().unwrap_or(0);

    aggregate
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            Point::new(
                i as f64 * LINE_CHART_STEP + LINE_CHART_OFFSET,
                LINE_CHART_HEIGHT - normalize(v, max) * LINE_CHART_SPAN - LINE_CHART_BASELINE,
            )
        })
        .collect()
}

/// Bar heights in percent of the tallest bar, floored at 6%
pub fn bar_heights(values: &[u64]) -> Vec<f64> {
    let max = values.iter().copied().max().unwrap_or(0);

    values
        .iter()
        .map(|&v| (normalize(v, max) * 100.0).round().max(BAR_MIN_HEIGHT_PCT))
        .collect()
}
