//! Catalog query parameters.
//!
//! Built from validated criteria. Unset fields are omitted from the query
//! string entirely; the catalog treats a missing parameter differently from an
//! empty one.

use quakewatch_core::{OrderBy, SearchCriteria};

/// Response format requested from the catalog.
pub const FORMAT: &str = "geojson";

/// Record cap for criteria-driven searches.
pub const SEARCH_LIMIT: u32 = 84;

/// Query parameters for the FDSN event endpoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpstreamParams {
    pub limit: Option<u32>,
    /// `YYYY-01-01` of the start year.
    pub starttime: Option<String>,
    /// `YYYY-12-31` of the end year.
    pub endtime: Option<String>,
    pub minmagnitude: Option<f64>,
    pub orderby: Option<OrderBy>,
    pub minsig: Option<u32>,
    pub eventid: Option<String>,
}

impl UpstreamParams {
    /// Parameters for a criteria-driven search.
    pub fn search(criteria: &SearchCriteria, limit: u32) -> Self {
        Self {
            limit: Some(limit),
            starttime: criteria.start_year.map(|year| format!("{year:04}-01-01")),
            endtime: criteria.end_year.map(|year| format!("{year:04}-12-31")),
            minmagnitude: criteria.min_magnitude,
            orderby: criteria.order_by,
            ..Default::default()
        }
    }

    /// Parameters for the latest significant events, newest first.
    pub fn latest(limit: u32, min_significance: u32) -> Self {
        Self { limit: Some(limit), orderby: Some(OrderBy::Time), minsig: Some(min_significance), ..Default::default() }
    }

    /// Parameters for a single-event lookup.
    pub fn event(id: &str) -> Self {
        Self { eventid: Some(id.to_string()), ..Default::default() }
    }

    /// Ordered `(name, value)` pairs; `format` always comes first.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("format", FORMAT.to_string())];

        if let Some(eventid) = &self.eventid {
            pairs.push(("eventid", eventid.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(starttime) = &self.starttime {
            pairs.push(("starttime", starttime.clone()));
        }
        if let Some(endtime) = &self.endtime {
            pairs.push(("endtime", endtime.clone()));
        }
        if let Some(minmagnitude) = self.minmagnitude {
            pairs.push(("minmagnitude", minmagnitude.to_string()));
        }
        if let Some(orderby) = self.orderby {
            pairs.push(("orderby", orderby.to_string()));
        }
        if let Some(minsig) = self.minsig {
            pairs.push(("minsig", minsig.to_string()));
        }

        pairs
    }

    /// Full request URL against `base_url`.
    pub fn to_url(&self, base_url: &str) -> Result<url::Url, url::ParseError> {
        url::Url::parse_with_params(base_url, self.pairs())
    }
}
