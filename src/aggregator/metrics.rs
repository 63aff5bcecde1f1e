//! Headline metrics: revenue totals, growth rate and the top seller.

use super::series::uniform_series_len;
use crate::parser::schema::{Product, Totals};
use crate::utils::config::MIN_SERIES_LEN;
use crate::utils::error::MetricsError;
use log::debug;

/// Compute the headline totals for a product list
///
/// **Public** - main entry point for metrics calculation
///
/// # Returns
/// * all-zero `Totals` for an empty list
/// * `growth_rate` is 0 whenever the previous month had no revenue
///
/// # Errors
/// * `MetricsError::SeriesLengthMismatch` - products disagree on series length
/// * `MetricsError::SeriesTooShort` - fewer than two months of data
/// * `MetricsError::UnitsOverflow` - units sold do not fit in a `u64`
pub fn compute_totals(products: &[Product]) -> Result<Totals, MetricsError> {
    if products.is_empty() {
        return Ok(Totals::default());
    }

    let len = uniform_series_len(products)?;
    if len < MIN_SERIES_LEN {
        return Err(MetricsError::SeriesTooShort {
            id: products[0].id.to_string(),
            actual: len,
            required: MIN_SERIES_LEN,
        });
    }

    let last_idx = len - 1;
    let prev_idx = last_idx - 1;

    let mut totals = Totals::default();
    for product in products {
        let units = product
            .total_units()
            .ok_or_else(|| units_overflow(product))?;
        totals.total_revenue += product.price * units as f64;
        totals.total_units = totals
            .total_units
            .checked_add(units)
            .ok_or_else(|| units_overflow(product))?;
        totals.last_revenue += product.price * product.monthly_sales[last_idx] as f64;
        totals.prev_revenue += product.price * product.monthly_sales[prev_idx] as f64;
    }

    totals.growth_rate = growth_rate(totals.last_revenue, totals.prev_revenue);

    debug!(
        "Totals over {} products: revenue {:.2}, units {}, growth {:.2}%",
        products.len(),
        totals.total_revenue,
        totals.total_units,
        totals.growth_rate
    );

    Ok(totals)
}

pub(crate) fn units_overflow(product: &Product) -> MetricsError {
    MetricsError::UnitsOverflow {
        id: product.id.to_string(),
    }
}

/// Month-on-month growth in percent, 0 when there is nothing to grow from
pub fn growth_rate(last: f64, prev: f64) -> f64 {
    if prev == 0.0 {
        0.0
    } else {
        (last - prev) / prev * 100.0
    }
}

/// Product with the most units sold over the whole series
///
/// Ties go to the product that appears first. Returns `None` for an
/// empty list, which the dashboard shows as "no data".
pub fn top_seller_by_units(products: &[Product]) -> Option<&Product> {
    // Summed as u128; a u64 total can overflow
    let mut best: Option<(&Product, u128)> = None;

    for product in products {
        let units: u128 = product.monthly_sales.iter().map(|&v| u128::from(v)).sum();
        match best {
            Some((_, best_units)) if units <= best_units => {}
            _ => best = Some((product, units)),
        }
    }

    best.map(|(product, _)| product)
}
