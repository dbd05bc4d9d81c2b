//! Aggregates and chart series for the house-price dataset.

use ddash_api::houses::HousePriceRow;
use ddash_api::weather::is_yes;

use crate::{mean, Aggregate, CountBucket, ScatterPoint};

/// Overview card values for the house-price dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseSummary {
    pub avg_price: Aggregate,
    pub avg_area: Aggregate,
    /// mean(price) / mean(area) -- deliberately NOT the mean of per-row
    /// price/area ratios.
    pub avg_price_per_sqft: Aggregate,
    pub avg_bedrooms: Aggregate,
    pub avg_bathrooms: Aggregate,
    pub total_properties: usize,
}

pub fn summarize(rows: &[HousePriceRow]) -> HouseSummary {
    let avg_price = mean(rows, |r| r.price);
    let avg_area = mean(rows, |r| r.area);
    HouseSummary {
        avg_price,
        avg_area,
        avg_price_per_sqft: avg_price.per(avg_area),
        avg_bedrooms: mean(rows, |r| r.bedrooms as f64),
        avg_bathrooms: mean(rows, |r| r.bathrooms as f64),
        total_properties: rows.len(),
    }
}

/// Per-bedroom-count price group with a running average. The average is
/// recomputed from the running total on every fold step, so the final
/// value is exactly total/count with no streaming drift.
#[derive(Debug, Clone, PartialEq)]
pub struct BedroomBucket {
    pub bedrooms: u32,
    pub count: usize,
    pub total_price: f64,
    pub avg_price: f64,
}

/// Average price grouped by bedroom count, ascending by bedroom count.
pub fn price_by_bedrooms(rows: &[HousePriceRow]) -> Vec<BedroomBucket> {
    let mut buckets: Vec<BedroomBucket> = Vec::new();
    for row in rows {
        match buckets.iter_mut().find(|b| b.bedrooms == row.bedrooms) {
            Some(bucket) => {
                bucket.count += 1;
                bucket.total_price += row.price;
                bucket.avg_price = bucket.total_price / bucket.count as f64;
            }
            None => buckets.push(BedroomBucket {
                bedrooms: row.bedrooms,
                count: 1,
                total_price: row.price,
                avg_price: row.price,
            }),
        }
    }
    buckets.sort_by_key(|b| b.bedrooms);
    buckets
}

/// Listing counts per furnishing status, in first-seen order.
pub fn furnishing_distribution(rows: &[HousePriceRow]) -> Vec<CountBucket> {
    let mut buckets: Vec<CountBucket> = Vec::new();
    for row in rows {
        match buckets.iter_mut().find(|b| b.name == row.furnishingstatus) {
            Some(bucket) => bucket.count += 1,
            None => buckets.push(CountBucket {
                name: row.furnishingstatus.clone(),
                count: 1,
            }),
        }
    }
    buckets
}

/// Listing counts per story count, in first-seen order, with pie labels
/// ("1 Story" vs "n Stories").
pub fn stories_distribution(rows: &[HousePriceRow]) -> Vec<CountBucket> {
    let mut seen: Vec<(u32, usize)> = Vec::new();
    for row in rows {
        match seen.iter_mut().find(|(stories, _)| *stories == row.stories) {
            Some((_, count)) => *count += 1,
            None => seen.push((row.stories, 1)),
        }
    }
    seen.into_iter()
        .map(|(stories, count)| CountBucket {
            name: if stories == 1 {
                "1 Story".to_string()
            } else {
                format!("{stories} Stories")
            },
            count,
        })
        .collect()
}

/// Six fixed amenity counts over the coerced "Yes" flags.
pub fn amenity_tally(rows: &[HousePriceRow]) -> Vec<CountBucket> {
    let count_yes = |field: fn(&HousePriceRow) -> &str| -> usize {
        rows.iter().filter(|row| is_yes(field(row))).count()
    };
    vec![
        CountBucket {
            name: "Main Road".to_string(),
            count: count_yes(|r| &r.mainroad),
        },
        CountBucket {
            name: "Guest Room".to_string(),
            count: count_yes(|r| &r.guestroom),
        },
        CountBucket {
            name: "Basement".to_string(),
            count: count_yes(|r| &r.basement),
        },
        CountBucket {
            name: "Hot Water".to_string(),
            count: count_yes(|r| &r.hotwaterheating),
        },
        CountBucket {
            name: "AC".to_string(),
            count: count_yes(|r| &r.airconditioning),
        },
        CountBucket {
            name: "Preferred Area".to_string(),
            count: count_yes(|r| &r.prefarea),
        },
    ]
}

/// Price-vs-area scatter over the full loaded row set.
pub fn price_vs_area_points(rows: &[HousePriceRow]) -> Vec<ScatterPoint> {
    rows.iter()
        .map(|row| ScatterPoint {
            x: row.area,
            y: row.price,
            z: 1.0,
            label: format!(
                "{}bd {}ba, {} stories",
                row.bedrooms, row.bathrooms, row.stories
            ),
        })
        .collect()
}
