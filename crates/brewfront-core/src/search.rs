//! Store search: query normalization and ranking.
//!
//! A raw [`StoreSearchRequest`] is normalized exactly once, at the API
//! boundary, into a [`StoreQuery`]. The two search strategies are then
//! statically distinguished: [`StoreQuery::Nearby`] ranks stores by
//! great-circle distance from a point, [`StoreQuery::Directory`] filters
//! by exact city/zip match and orders by name.

use serde::Deserialize;
use thiserror::Error;

use crate::geo::{distance_km, GeoPoint};
use crate::stores::Store;

/// Radius applied when a search omits one, in kilometers.
pub const DEFAULT_RADIUS_KM: f64 = 25.0;

/// Raw store search input as received at the API boundary.
///
/// `radius` is in kilometers. The front end historically labeled this
/// field "miles"; the service is specified in kilometers end-to-end.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreSearchRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub radius: Option<f64>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("radius must be a positive number of kilometers")]
    InvalidRadius,
    #[error("latitude and longitude must be supplied together")]
    IncompleteCoordinates,
    #[error("latitude must be within [-90, 90] and longitude within [-180, 180]")]
    CoordinateOutOfRange,
}

/// A normalized, validated store query.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreQuery {
    /// Rank active stores by distance from a point, nearest first,
    /// keeping only those within `radius_km`.
    Nearby {
        latitude: f64,
        longitude: f64,
        radius_km: f64,
    },
    /// Filter active stores by exact city and/or zip match, ordered by
    /// name. Both filters absent means "all active stores".
    Directory {
        city: Option<String>,
        zip_code: Option<String>,
    },
}

impl StoreQuery {
    /// Normalize a raw request into a query, applying `default_radius_km`
    /// when the request omits a radius.
    ///
    /// Empty-string city/zip values are treated as absent. A request
    /// carrying exactly one of latitude/longitude is rejected rather than
    /// silently demoted to a directory query.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] for a non-positive or non-finite radius,
    /// one-sided coordinates, or coordinates outside valid ranges.
    pub fn from_request(
        request: StoreSearchRequest,
        default_radius_km: f64,
    ) -> Result<Self, SearchError> {
        let radius_km = request.radius.unwrap_or(default_radius_km);
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(SearchError::InvalidRadius);
        }

        match (request.latitude, request.longitude) {
            (Some(latitude), Some(longitude)) => {
                if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
                    return Err(SearchError::CoordinateOutOfRange);
                }
                Ok(Self::Nearby {
                    latitude,
                    longitude,
                    radius_km,
                })
            }
            (None, None) => Ok(Self::Directory {
                city: request.city.filter(|s| !s.is_empty()),
                zip_code: request.zip_code.filter(|s| !s.is_empty()),
            }),
            _ => Err(SearchError::IncompleteCoordinates),
        }
    }
}

/// A store paired with its distance from the query point.
///
/// `distance_km` is `None` for directory queries.
#[derive(Debug, Clone)]
pub struct StoreMatch {
    pub store: Store,
    pub distance_km: Option<f64>,
}

/// Resolve a normalized query against a snapshot of stores.
///
/// Inactive stores never appear in the result regardless of query mode.
/// The radius boundary is inclusive. Ordering is deterministic for a
/// fixed snapshot and query: nearby results sort by ascending distance
/// then store id, directory results by name then store id.
#[must_use]
pub fn search_stores(stores: Vec<Store>, query: &StoreQuery) -> Vec<StoreMatch> {
    match query {
        StoreQuery::Nearby {
            latitude,
            longitude,
            radius_km,
        } => {
            let origin = GeoPoint::new(*latitude, *longitude);
            let mut ranked: Vec<(f64, Store)> = stores
                .into_iter()
                .filter(|store| store.is_active)
                .filter_map(|store| {
                    let here = GeoPoint::new(store.latitude, store.longitude);
                    let distance = distance_km(origin, here);
                    (distance <= *radius_km).then_some((distance, store))
                })
                .collect();
            ranked.sort_by(|(da, a), (db, b)| da.total_cmp(db).then_with(|| a.id.cmp(&b.id)));
            ranked
                .into_iter()
                .map(|(distance, store)| StoreMatch {
                    store,
                    distance_km: Some(distance),
                })
                .collect()
        }
        StoreQuery::Directory { city, zip_code } => {
            let mut kept: Vec<Store> = stores
                .into_iter()
                .filter(|store| store.is_active)
                .filter(|store| city.as_deref().is_none_or(|c| store.city == c))
                .filter(|store| zip_code.as_deref().is_none_or(|z| store.zip_code == z))
                .collect();
            kept.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
            kept.into_iter()
                .map(|store| StoreMatch {
                    store,
                    distance_km: None,
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    const PIKE_PLACE: (f64, f64) = (47.6062, -122.3321);

    fn store(id: i64, name: &str, city: &str, zip: &str, lat: f64, lon: f64) -> Store {
        Store {
            id,
            name: name.to_string(),
            address: format!("{id} Test Ave"),
            city: city.to_string(),
            state: "WA".to_string(),
            zip_code: zip.to_string(),
            phone: None,
            latitude: lat,
            longitude: lon,
            hours: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn inactive(mut s: Store) -> Store {
        s.is_active = false;
        s
    }

    /// Seattle fixture: the roastery is ~0.9 km from Pike Place Market,
    /// Capitol Hill ~2.3 km, Ballard ~8 km.
    fn seattle_fixture() -> Vec<Store> {
        vec![
            store(1, "Ballard", "Seattle", "98107", 47.6687, -122.3847),
            store(2, "Pike Street Roastery", "Seattle", "98101", 47.6097, -122.3422),
            store(3, "Capitol Hill", "Seattle", "98102", 47.6253, -122.3222),
            inactive(store(4, "Downtown (closed)", "Seattle", "98101", 47.6062, -122.3321)),
            store(5, "Bellevue Square", "Bellevue", "98004", 47.6158, -122.2036),
        ]
    }

    fn nearby(radius_km: f64) -> StoreQuery {
        StoreQuery::Nearby {
            latitude: PIKE_PLACE.0,
            longitude: PIKE_PLACE.1,
            radius_km,
        }
    }

    fn ids(matches: &[StoreMatch]) -> Vec<i64> {
        matches.iter().map(|m| m.store.id).collect()
    }

    // -----------------------------------------------------------------------
    // Normalization
    // -----------------------------------------------------------------------

    #[test]
    fn from_request_defaults_radius() {
        let query = StoreQuery::from_request(
            StoreSearchRequest {
                latitude: Some(47.0),
                longitude: Some(-122.0),
                ..StoreSearchRequest::default()
            },
            25.0,
        )
        .unwrap();
        assert_eq!(
            query,
            StoreQuery::Nearby {
                latitude: 47.0,
                longitude: -122.0,
                radius_km: 25.0
            }
        );
    }

    #[test]
    fn from_request_without_coordinates_is_directory() {
        let query = StoreQuery::from_request(
            StoreSearchRequest {
                city: Some("Seattle".to_string()),
                zip_code: Some("98101".to_string()),
                ..StoreSearchRequest::default()
            },
            25.0,
        )
        .unwrap();
        assert_eq!(
            query,
            StoreQuery::Directory {
                city: Some("Seattle".to_string()),
                zip_code: Some("98101".to_string())
            }
        );
    }

    #[test]
    fn from_request_treats_empty_strings_as_absent() {
        let query = StoreQuery::from_request(
            StoreSearchRequest {
                city: Some(String::new()),
                zip_code: Some(String::new()),
                ..StoreSearchRequest::default()
            },
            25.0,
        )
        .unwrap();
        assert_eq!(
            query,
            StoreQuery::Directory {
                city: None,
                zip_code: None
            }
        );
    }

    #[test]
    fn from_request_rejects_non_positive_radius() {
        for radius in [0.0, -5.0] {
            let result = StoreQuery::from_request(
                StoreSearchRequest {
                    radius: Some(radius),
                    ..StoreSearchRequest::default()
                },
                25.0,
            );
            assert_eq!(result, Err(SearchError::InvalidRadius), "radius {radius}");
        }
    }

    #[test]
    fn from_request_rejects_nan_radius() {
        let result = StoreQuery::from_request(
            StoreSearchRequest {
                radius: Some(f64::NAN),
                ..StoreSearchRequest::default()
            },
            25.0,
        );
        assert_eq!(result, Err(SearchError::InvalidRadius));
    }

    #[test]
    fn from_request_rejects_one_sided_coordinates() {
        let result = StoreQuery::from_request(
            StoreSearchRequest {
                latitude: Some(47.0),
                ..StoreSearchRequest::default()
            },
            25.0,
        );
        assert_eq!(result, Err(SearchError::IncompleteCoordinates));

        let result = StoreQuery::from_request(
            StoreSearchRequest {
                longitude: Some(-122.0),
                ..StoreSearchRequest::default()
            },
            25.0,
        );
        assert_eq!(result, Err(SearchError::IncompleteCoordinates));
    }

    #[test]
    fn from_request_rejects_out_of_range_coordinates() {
        let result = StoreQuery::from_request(
            StoreSearchRequest {
                latitude: Some(91.0),
                longitude: Some(0.0),
                ..StoreSearchRequest::default()
            },
            25.0,
        );
        assert_eq!(result, Err(SearchError::CoordinateOutOfRange));

        let result = StoreQuery::from_request(
            StoreSearchRequest {
                latitude: Some(0.0),
                longitude: Some(-180.5),
                ..StoreSearchRequest::default()
            },
            25.0,
        );
        assert_eq!(result, Err(SearchError::CoordinateOutOfRange));
    }

    // -----------------------------------------------------------------------
    // Nearby mode
    // -----------------------------------------------------------------------

    #[test]
    fn nearby_one_km_returns_only_the_roastery() {
        let matches = search_stores(seattle_fixture(), &nearby(1.0));
        assert_eq!(ids(&matches), vec![2]);
        let distance = matches[0].distance_km.unwrap();
        assert!(distance <= 1.0, "distance {distance} exceeds radius");
    }

    #[test]
    fn nearby_25_km_returns_all_active_ordered_by_distance() {
        let matches = search_stores(seattle_fixture(), &nearby(25.0));
        // Roastery (~0.9 km), Capitol Hill (~2.3), Ballard (~8), Bellevue (~10).
        assert_eq!(ids(&matches), vec![2, 3, 1, 5]);
        let distances: Vec<f64> = matches.iter().map(|m| m.distance_km.unwrap()).collect();
        assert!(
            distances.windows(2).all(|w| w[0] <= w[1]),
            "distances not ascending: {distances:?}"
        );
        assert!(distances.iter().all(|d| *d <= 25.0));
    }

    #[test]
    fn nearby_never_returns_inactive_stores() {
        // Store 4 sits exactly at the query point but is inactive.
        let matches = search_stores(seattle_fixture(), &nearby(25.0));
        assert!(!ids(&matches).contains(&4));
    }

    #[test]
    fn nearby_radius_boundary_is_inclusive() {
        let target = store(7, "Boundary", "Seattle", "98101", 47.6097, -122.3422);
        let exact = distance_km(
            GeoPoint::new(PIKE_PLACE.0, PIKE_PLACE.1),
            GeoPoint::new(target.latitude, target.longitude),
        );
        let matches = search_stores(vec![target], &nearby(exact));
        assert_eq!(ids(&matches), vec![7]);
    }

    #[test]
    fn nearby_ties_break_on_store_id() {
        let a = store(9, "North Twin", "Seattle", "98101", 47.6097, -122.3422);
        let b = store(3, "South Twin", "Seattle", "98101", 47.6097, -122.3422);
        let matches = search_stores(vec![a, b], &nearby(5.0));
        assert_eq!(ids(&matches), vec![3, 9]);
    }

    #[test]
    fn nearby_with_no_stores_in_radius_is_empty() {
        let matches = search_stores(seattle_fixture(), &nearby(0.1));
        assert!(matches.is_empty());
    }

    // -----------------------------------------------------------------------
    // Directory mode
    // -----------------------------------------------------------------------

    #[test]
    fn directory_city_filter_is_exact_and_ordered_by_name() {
        let query = StoreQuery::Directory {
            city: Some("Seattle".to_string()),
            zip_code: None,
        };
        let matches = search_stores(seattle_fixture(), &query);
        // Active Seattle stores, name ascending: Ballard, Capitol Hill, Pike Street Roastery.
        assert_eq!(ids(&matches), vec![1, 3, 2]);
        assert!(matches.iter().all(|m| m.distance_km.is_none()));
    }

    #[test]
    fn directory_city_match_is_case_sensitive() {
        let query = StoreQuery::Directory {
            city: Some("seattle".to_string()),
            zip_code: None,
        };
        let matches = search_stores(seattle_fixture(), &query);
        assert!(matches.is_empty());
    }

    #[test]
    fn directory_city_and_zip_are_conjunctive() {
        let query = StoreQuery::Directory {
            city: Some("Seattle".to_string()),
            zip_code: Some("98101".to_string()),
        };
        let matches = search_stores(seattle_fixture(), &query);
        assert_eq!(ids(&matches), vec![2]);
    }

    #[test]
    fn directory_without_filters_returns_all_active() {
        let query = StoreQuery::Directory {
            city: None,
            zip_code: None,
        };
        let matches = search_stores(seattle_fixture(), &query);
        assert_eq!(ids(&matches), vec![1, 5, 3, 2]);
    }

    #[test]
    fn directory_never_returns_inactive_stores() {
        let query = StoreQuery::Directory {
            city: None,
            zip_code: Some("98101".to_string()),
        };
        let matches = search_stores(seattle_fixture(), &query);
        assert_eq!(ids(&matches), vec![2], "inactive store 4 shares the zip");
    }

    #[test]
    fn directory_name_ties_break_on_store_id() {
        let a = store(8, "Twin", "Seattle", "98101", 47.0, -122.0);
        let b = store(2, "Twin", "Seattle", "98101", 47.0, -122.0);
        let query = StoreQuery::Directory {
            city: None,
            zip_code: None,
        };
        let matches = search_stores(vec![a, b], &query);
        assert_eq!(ids(&matches), vec![2, 8]);
    }
}
