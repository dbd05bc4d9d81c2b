//! Session-scoped dataset loading.
//!
//! The API exposes no pagination, so each dataset is fetched as a full
//! collection exactly once per session and sliced client-side per request.
//! The cache key is the dataset itself, not the limit: two loads with
//! different limits share one network call.

use std::future::Future;

use tokio::sync::OnceCell;

use crate::client::{ApiClient, FLIGHTS_ENDPOINT, HOUSEPRICE_ENDPOINT, WEATHER_ENDPOINT};
use crate::error::Result;
use crate::flights::FlightRow;
use crate::houses::HousePriceRow;
use crate::weather::WeatherRow;

/// Single-flight memoization for one dataset's full row collection.
///
/// Concurrent loads coalesce onto one in-flight fetch; later loads in the
/// same session observe the cached rows. A failed fetch is not cached, so
/// the next load attempts again.
pub struct DatasetCache<T> {
    rows: OnceCell<Vec<T>>,
}

impl<T: Clone> DatasetCache<T> {
    pub fn new() -> Self {
        Self {
            rows: OnceCell::new(),
        }
    }

    /// Load the first `limit` rows, fetching the full collection via
    /// `fetch` if it is not cached yet. Never pads: if fewer rows exist,
    /// all of them are returned.
    pub async fn load<F, Fut>(&self, limit: usize, fetch: F) -> Result<Vec<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>>>,
    {
        let all = self.rows.get_or_try_init(fetch).await?;
        Ok(all.iter().take(limit).cloned().collect())
    }
}

impl<T: Clone> Default for DatasetCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Assign synthetic 1-based ids in slice order. Runs after truncation, so
/// re-loading with a different limit renumbers from 1.
pub fn assign_house_ids(rows: &mut [HousePriceRow]) {
    for (index, row) in rows.iter_mut().enumerate() {
        row.id = Some(index as u32 + 1);
    }
}

/// One fetch/render context: an API client plus a per-dataset cache.
///
/// Dropping the session drops the caches; a new session fetches fresh.
pub struct Session {
    client: ApiClient,
    weather: DatasetCache<WeatherRow>,
    flights: DatasetCache<FlightRow>,
    houses: DatasetCache<HousePriceRow>,
}

impl Session {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            weather: DatasetCache::new(),
            flights: DatasetCache::new(),
            houses: DatasetCache::new(),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Load the first `limit` weather rows.
    pub async fn weather(&self, limit: usize) -> Result<Vec<WeatherRow>> {
        self.weather
            .load(limit, || self.client.fetch_list(WEATHER_ENDPOINT))
            .await
    }

    /// Load the first `limit` flight rows.
    pub async fn flights(&self, limit: usize) -> Result<Vec<FlightRow>> {
        self.flights
            .load(limit, || self.client.fetch_list(FLIGHTS_ENDPOINT))
            .await
    }

    /// Load the first `limit` house-price rows, attaching synthetic ids.
    pub async fn houses(&self, limit: usize) -> Result<Vec<HousePriceRow>> {
        let mut rows = self
            .houses
            .load(limit, || self.client.fetch_list(HOUSEPRICE_ENDPOINT))
            .await?;
        assign_house_ids(&mut rows);
        Ok(rows)
    }
}
