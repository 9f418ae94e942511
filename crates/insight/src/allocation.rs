//! Central-warehouse allocation: split a shipment across stores by demand
//! score and compare the split with the ERP's equal share.
//!
//! The allocation report returns one row per store with an `allocation_score`
//! and the `requested_qty` echoed from the request. [`prepare`] adds the
//! derived columns the allocation rules read:
//!
//! | column                | meaning                                   |
//! |-----------------------|-------------------------------------------|
//! | `allocation_ratio`    | store score over the total score          |
//! | `ai_recommended_qty`  | proportional share, summing to the request |
//! | `erp_suggested_qty`   | equal share, summing to the request       |
//! | `difference`          | AI minus ERP units                        |
//! | `allocation_reason`   | demand band of the ratio                  |
//! | `days_of_supply_ai`   | AI units over average daily sales         |
//! | `days_of_supply_erp`  | ERP units over average daily sales        |

use atelier_core::{FieldValue, Row};
use atelier_intent::Category;
use tracing::debug;

use crate::fmt::round1;

/// Ratio bands for `allocation_reason`, highest first.
const REASON_BANDS: &[(f64, &str)] = &[
    (0.25, "Yüksek talep ve trend"),
    (0.20, "Normal talep"),
    (0.15, "Orta seviye talep"),
];
const REASON_LOW: &str = "Düşük talep";

/// Split `quantity` in proportion to `scores`.
///
/// Negative scores count as zero; when no score is positive every store gets
/// an equal share. Shares are rounded half away from zero and the rounding
/// remainder goes to the largest share (the first on ties). A negative
/// remainder larger than that share spills over to the next largest, so no
/// share drops below zero. The result always sums to `quantity`.
pub fn proportional(scores: &[f64], quantity: i64) -> Vec<i64> {
    if scores.is_empty() || quantity <= 0 {
        return vec![0; scores.len()];
    }
    let clean: Vec<f64> = scores.iter().map(|s| if s.is_finite() { s.max(0.0) } else { 0.0 }).collect();
    let total: f64 = clean.iter().sum();
    if total <= 0.0 {
        return equal_split(quantity, scores.len());
    }

    let mut shares: Vec<i64> = clean
        .iter()
        .map(|s| (quantity as f64 * s / total).round() as i64)
        .collect();
    let mut remainder = quantity - shares.iter().sum::<i64>();

    for index in order_by_share(&shares) {
        if remainder == 0 {
            break;
        }
        let applied = remainder.max(-shares[index]);
        shares[index] += applied;
        remainder -= applied;
    }
    shares
}

/// Indices by descending share; equal shares keep input order.
fn order_by_share(shares: &[i64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..shares.len()).collect();
    order.sort_by(|a, b| shares[*b].cmp(&shares[*a]));
    order
}

/// Equal split of `quantity` over `stores`; the first stores take one extra
/// unit each until the remainder is used up.
pub fn equal_split(quantity: i64, stores: usize) -> Vec<i64> {
    if stores == 0 {
        return Vec::new();
    }
    let quantity = quantity.max(0);
    let n = stores as i64;
    let (base, extra) = (quantity / n, quantity % n);
    (0..n).map(|i| base + i64::from(i < extra)).collect()
}

/// Demand band for a store's share of the total score.
pub fn allocation_reason(ratio: f64) -> &'static str {
    REASON_BANDS
        .iter()
        .find(|(floor, _)| ratio > *floor)
        .map_or(REASON_LOW, |(_, reason)| reason)
}

/// How close a split lands to `ideal_days` of cover, weighted by units.
///
/// Each `(units, days_of_supply)` pair with positive cover scores
/// `1 - |days - ideal| / ideal`. The weighted total is divided by
/// `reference_units` and scaled to a percentage with two decimals. Zero when
/// there is nothing to weigh against.
pub fn efficiency_score(splits: &[(f64, f64)], reference_units: f64, ideal_days: f64) -> f64 {
    if reference_units <= 0.0 || ideal_days <= 0.0 {
        return 0.0;
    }
    let weighted: f64 = splits
        .iter()
        .filter(|(_, days)| *days > 0.0)
        .map(|(units, days)| (1.0 - (days - ideal_days).abs() / ideal_days) * units)
        .sum();
    (weighted / reference_units * 10_000.0).round() / 100.0
}

/// Days of stock `units` cover at `daily_sales`, one decimal. `None` without sales.
pub fn days_of_supply(units: f64, daily_sales: f64) -> Option<f64> {
    (daily_sales > 0.0).then(|| round1(units / daily_sales))
}

/// Add derived columns a category's rules expect. Only allocation reports
/// carry any; other categories are left as returned.
pub fn prepare(category: Category, rows: &mut [Row]) {
    if category == Category::Allocation {
        allocate_rows(rows);
    }
}

fn allocate_rows(rows: &mut [Row]) {
    let Some(requested) = rows.first().and_then(|r| r.number("requested_qty")) else {
        debug!("allocation rows carry no requested_qty; leaving them as returned");
        return;
    };
    let quantity = requested.round() as i64;
    let scores: Vec<f64> = rows.iter().map(|r| r.number_or_zero("allocation_score")).collect();
    let total: f64 = scores.iter().filter(|s| s.is_finite()).map(|s| s.max(0.0)).sum();
    let ai = proportional(&scores, quantity);
    let erp = equal_split(quantity, rows.len());

    for (i, row) in rows.iter_mut().enumerate() {
        let ratio = if total > 0.0 { scores[i].max(0.0) / total } else { 1.0 / ai.len() as f64 };
        let daily = row.number_or_zero("avg_daily_sales_30d");
        row.insert("allocation_ratio", (ratio * 10_000.0).round() / 10_000.0);
        row.insert("ai_recommended_qty", ai[i]);
        row.insert("erp_suggested_qty", erp[i]);
        row.insert("difference", ai[i] - erp[i]);
        row.insert("allocation_reason", allocation_reason(ratio));
        for (column, units) in [("days_of_supply_ai", ai[i]), ("days_of_supply_erp", erp[i])] {
            match days_of_supply(units as f64, daily) {
                Some(days) => row.insert(column, days),
                None => row.insert(column, FieldValue::Null),
            }
        }
    }
    debug!(stores = rows.len(), quantity, "allocation split computed");
}
