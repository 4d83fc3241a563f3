//! Validated, typed search queries for spots.

use crate::{entities::*, util::validate::FieldErrors};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const DEFAULT_MAX_PAGE_SIZE: u64 = 100;

/// Raw, unvalidated query parameters as received
/// from the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpotQueryParams {
    pub page: Option<String>,
    pub size: Option<String>,
    pub min_lat: Option<String>,
    pub max_lat: Option<String>,
    pub min_lng: Option<String>,
    pub max_lng: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_size: u64,
    pub max_size: u64,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_PAGE_SIZE,
            max_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,
}

/// Optional lower and upper bound of a single dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bounds {
    fn from_options(min: Option<f64>, max: Option<f64>) -> Option<Self> {
        if min.is_none() && max.is_none() {
            return None;
        }
        Some(Self { min, max })
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.map(|min| value >= min).unwrap_or(true)
            && self.max.map(|max| value <= max).unwrap_or(true)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Lat,
    Lng,
    Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// Greater than or equal
    Ge,
    /// Less than or equal
    Le,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    pub dimension: Dimension,
    pub comparison: Comparison,
    pub value: f64,
}

impl Constraint {
    pub fn matches(&self, spot: &Spot) -> bool {
        let actual = match self.dimension {
            Dimension::Lat => spot.pos.lat(),
            Dimension::Lng => spot.pos.lng(),
            Dimension::Price => spot.price,
        };
        match self.comparison {
            Comparison::Ge => actual >= self.value,
            Comparison::Le => actual <= self.value,
        }
    }
}

/// Range constraints per dimension, `None` for
/// unconstrained dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpotFilter {
    pub lat: Option<Bounds>,
    pub lng: Option<Bounds>,
    pub price: Option<Bounds>,
}

impl SpotFilter {
    pub fn is_unconstrained(&self) -> bool {
        self.lat.is_none() && self.lng.is_none() && self.price.is_none()
    }

    /// The conjunction of all present bounds. Absent
    /// dimensions and bounds do not contribute anything.
    pub fn constraints(&self) -> Vec<Constraint> {
        [
            (Dimension::Lat, self.lat),
            (Dimension::Lng, self.lng),
            (Dimension::Price, self.price),
        ]
        .into_iter()
        .filter_map(|(dimension, bounds)| bounds.map(|bounds| (dimension, bounds)))
        .flat_map(|(dimension, Bounds { min, max })| {
            let min = min.map(|value| Constraint {
                dimension,
                comparison: Comparison::Ge,
                value,
            });
            let max = max.map(|value| Constraint {
                dimension,
                comparison: Comparison::Le,
                value,
            });
            min.into_iter().chain(max)
        })
        .collect()
    }

    pub fn matches(&self, spot: &Spot) -> bool {
        self.constraints().iter().all(|c| c.matches(spot))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotQuery {
    pub filter: SpotFilter,
    pub page: u64,
    pub size: u64,
}

impl SpotQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            offset: (self.page - 1).saturating_mul(self.size),
            limit: self.size,
        }
    }
}

fn parse_page_number(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<&str>,
    message: &str,
) -> Option<u64> {
    let value = value?;
    match value.trim().parse::<u64>() {
        Ok(n) if n >= 1 => Some(n),
        _ => {
            errors.add(field, message);
            None
        }
    }
}

fn parse_float(errors: &mut FieldErrors, field: &str, value: Option<&str>, message: &str) -> Option<f64> {
    let value = value?;
    match value.trim().parse::<f64>() {
        Ok(x) if x.is_finite() => Some(x),
        _ => {
            errors.add(field, message);
            None
        }
    }
}

/// Validates all parameters at once and reports every
/// violation before any query is executed.
pub fn build_spot_query(
    params: &SpotQueryParams,
    limits: &PageLimits,
) -> Result<SpotQuery, FieldErrors> {
    let mut errors = FieldErrors::new();

    let page = parse_page_number(
        &mut errors,
        "page",
        params.page.as_deref(),
        "Page must be an integer greater than 0",
    );
    let size = parse_page_number(
        &mut errors,
        "size",
        params.size.as_deref(),
        "Size must be an integer greater than 0",
    );

    const MIN_LAT_MSG: &str = "Minimum latitude must be between -90 to 90";
    const MAX_LAT_MSG: &str =
        "Maximum latitude must be between -90 to 90 and greater than minimum latitude";
    let min_lat = parse_float(&mut errors, "minLat", params.min_lat.as_deref(), MIN_LAT_MSG)
        .filter(|lat| {
            let valid = is_valid_lat_deg(*lat);
            if !valid {
                errors.add("minLat", MIN_LAT_MSG);
            }
            valid
        });
    let max_lat = parse_float(&mut errors, "maxLat", params.max_lat.as_deref(), MAX_LAT_MSG)
        .filter(|lat| {
            let valid = is_valid_lat_deg(*lat) && min_lat.map(|min| *lat > min).unwrap_or(true);
            if !valid {
                errors.add("maxLat", MAX_LAT_MSG);
            }
            valid
        });

    const MIN_LNG_MSG: &str = "Minimum longitude must be between -180 to 180";
    const MAX_LNG_RANGE_MSG: &str = "Maximum longitude must be less than 180";
    const MAX_LNG_ORDER_MSG: &str = "Maximum longitude must be greater than minimum longitude";
    let min_lng = parse_float(&mut errors, "minLng", params.min_lng.as_deref(), MIN_LNG_MSG)
        .filter(|lng| {
            let valid = is_valid_lng_deg(*lng);
            if !valid {
                errors.add("minLng", MIN_LNG_MSG);
            }
            valid
        });
    let max_lng = parse_float(
        &mut errors,
        "maxLng",
        params.max_lng.as_deref(),
        MAX_LNG_RANGE_MSG,
    )
    .filter(|lng| {
        if !is_valid_lng_deg(*lng) {
            errors.add("maxLng", MAX_LNG_RANGE_MSG);
            return false;
        }
        if min_lng.map(|min| *lng <= min).unwrap_or(false) {
            errors.add("maxLng", MAX_LNG_ORDER_MSG);
            return false;
        }
        true
    });

    const MIN_PRICE_MSG: &str = "Minimum price must be greater than or equal to 0";
    const MAX_PRICE_MSG: &str = "Maximum price must be greater than 0 and greater than minimum price";
    let min_price = parse_float(
        &mut errors,
        "minPrice",
        params.min_price.as_deref(),
        MIN_PRICE_MSG,
    )
    .filter(|price| {
        let valid = *price >= 0.0;
        if !valid {
            errors.add("minPrice", MIN_PRICE_MSG);
        }
        valid
    });
    let max_price = parse_float(
        &mut errors,
        "maxPrice",
        params.max_price.as_deref(),
        MAX_PRICE_MSG,
    )
    .filter(|price| {
        let valid = min_price.map(|min| *price > min).unwrap_or(true);
        if !valid {
            errors.add("maxPrice", MAX_PRICE_MSG);
        }
        valid
    });

    if !errors.is_empty() {
        return Err(errors);
    }

    let page = page.unwrap_or(DEFAULT_PAGE);
    let mut size = size.unwrap_or(limits.default_size);
    if size > limits.max_size {
        log::debug!(
            "Requested page size {size} exceeds the maximum of {}",
            limits.max_size
        );
        size = limits.max_size;
    }
    let filter = SpotFilter {
        lat: Bounds::from_options(min_lat, max_lat),
        lng: Bounds::from_options(min_lng, max_lng),
        price: Bounds::from_options(min_price, max_price),
    };
    Ok(SpotQuery { filter, page, size })
}

#[cfg(test)]
mod tests {
    use super::*;
    use staybook_entities::builders::*;

    fn params() -> SpotQueryParams {
        SpotQueryParams::default()
    }

    fn build(params: SpotQueryParams) -> Result<SpotQuery, FieldErrors> {
        build_spot_query(&params, &PageLimits::default())
    }

    #[test]
    fn defaults_without_any_parameters() {
        let query = build(params()).unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.size, 20);
        assert!(query.filter.is_unconstrained());
        assert!(query.filter.constraints().is_empty());
        assert_eq!(
            query.pagination(),
            Pagination {
                offset: 0,
                limit: 20
            }
        );
    }

    #[test]
    fn pagination_of_second_page() {
        let query = build(SpotQueryParams {
            page: Some("2".into()),
            size: Some("10".into()),
            ..params()
        })
        .unwrap();
        assert_eq!(
            query.pagination(),
            Pagination {
                offset: 10,
                limit: 10
            }
        );
    }

    #[test]
    fn cap_page_size() {
        let query = build(SpotQueryParams {
            size: Some("5000".into()),
            ..params()
        })
        .unwrap();
        assert_eq!(query.size, DEFAULT_MAX_PAGE_SIZE);
    }

    #[test]
    fn reject_invalid_page_numbers() {
        let errors = build(SpotQueryParams {
            page: Some("0".into()),
            size: Some("abc".into()),
            ..params()
        })
        .unwrap_err();
        assert_eq!(errors.get("page"), Some("Page must be an integer greater than 0"));
        assert_eq!(errors.get("size"), Some("Size must be an integer greater than 0"));
        let errors = build(SpotQueryParams {
            page: Some("1.5".into()),
            ..params()
        })
        .unwrap_err();
        assert!(errors.contains("page"));
    }

    #[test]
    fn reject_min_lat_greater_than_max_lat() {
        let errors = build(SpotQueryParams {
            min_lat: Some("40".into()),
            max_lat: Some("30".into()),
            ..params()
        })
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains("maxLat"));
    }

    #[test]
    fn report_all_violations_together() {
        let errors = build(SpotQueryParams {
            min_lat: Some("-91".into()),
            min_lng: Some("181".into()),
            max_lng: Some("-200".into()),
            min_price: Some("-1".into()),
            ..params()
        })
        .unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors.get("maxLng"),
            Some("Maximum longitude must be less than 180")
        );
    }

    #[test]
    fn max_lng_must_exceed_min_lng() {
        let errors = build(SpotQueryParams {
            min_lng: Some("10".into()),
            max_lng: Some("10".into()),
            ..params()
        })
        .unwrap_err();
        assert_eq!(
            errors.get("maxLng"),
            Some("Maximum longitude must be greater than minimum longitude")
        );
    }

    #[test]
    fn max_price_may_be_given_alone() {
        let query = build(SpotQueryParams {
            max_price: Some("-5".into()),
            ..params()
        })
        .unwrap();
        assert_eq!(
            query.filter.price,
            Some(Bounds {
                min: None,
                max: Some(-5.0)
            })
        );
        let errors = build(SpotQueryParams {
            min_price: Some("50".into()),
            max_price: Some("50".into()),
            ..params()
        })
        .unwrap_err();
        assert!(errors.contains("maxPrice"));
    }

    #[test]
    fn only_present_bounds_become_constraints() {
        let query = build(SpotQueryParams {
            min_lat: Some("10".into()),
            min_price: Some("50".into()),
            max_price: Some("100".into()),
            ..params()
        })
        .unwrap();
        assert!(query.filter.lng.is_none());
        assert_eq!(
            query.filter.constraints(),
            vec![
                Constraint {
                    dimension: Dimension::Lat,
                    comparison: Comparison::Ge,
                    value: 10.0
                },
                Constraint {
                    dimension: Dimension::Price,
                    comparison: Comparison::Ge,
                    value: 50.0
                },
                Constraint {
                    dimension: Dimension::Price,
                    comparison: Comparison::Le,
                    value: 100.0
                },
            ]
        );
    }

    #[test]
    fn filter_spots_by_price_range() {
        let query = build(SpotQueryParams {
            min_price: Some("50".into()),
            max_price: Some("100".into()),
            ..params()
        })
        .unwrap();
        let spots: Vec<_> = [20.0, 50.0, 75.5, 100.0, 100.01]
            .into_iter()
            .enumerate()
            .map(|(i, price)| Spot::build().id(i as i64).price(price).finish())
            .collect();
        let prices: Vec<_> = spots
            .iter()
            .filter(|s| query.filter.matches(s))
            .map(|s| s.price)
            .collect();
        assert_eq!(prices, vec![50.0, 75.5, 100.0]);
    }

    #[test]
    fn filter_spots_by_bounding_box() {
        let filter = build(SpotQueryParams {
            min_lat: Some("10".into()),
            max_lat: Some("20".into()),
            min_lng: Some("-5".into()),
            max_lng: Some("5".into()),
            ..params()
        })
        .unwrap()
        .filter;
        assert!(filter.matches(&Spot::build().lat_lng(15.0, 0.0).finish()));
        assert!(filter.matches(&Spot::build().lat_lng(10.0, 5.0).finish()));
        assert!(!filter.matches(&Spot::build().lat_lng(25.0, 0.0).finish()));
        assert!(!filter.matches(&Spot::build().lat_lng(15.0, -6.0).finish()));
    }
}
