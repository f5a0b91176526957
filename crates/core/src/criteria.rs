//! Criteria validation.
//!
//! Turns raw form input into a [`SearchCriteria`]. Unparsable numeric fields
//! fall back to the field's configured placeholder instead of failing the
//! request; the year-range rule is checked afterwards and always rejects.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use crate::Error;
use crate::model::{OrderBy, SearchCriteria};

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}$").expect("static regex"));

/// Raw, untrusted search form fields as submitted.
#[derive(Debug, Clone, Default)]
pub struct RawSearchForm {
    pub start_year: Option<String>,
    pub end_year: Option<String>,
    pub min_magnitude: Option<String>,
    pub orderby: Option<String>,
}

/// Placeholder values substituted for missing or unparsable form fields.
///
/// Blank placeholders mean "leave the field unset". Numbers are accepted as
/// well as text, since env and TOML sources hand `1990` or `4.5` over as
/// numeric values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormDefaults {
    #[serde(default, deserialize_with = "text_or_number")]
    pub start_year: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub end_year: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub min_magnitude: String,
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Placeholder {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Placeholder::deserialize(deserializer)? {
        Placeholder::Text(text) => text,
        Placeholder::Int(n) => n.to_string(),
        Placeholder::Float(f) => f.to_string(),
    })
}

/// Validate raw form input into canonical criteria.
///
/// # Errors
///
/// Returns `Error::Validation` when both years are present and the end year
/// precedes the start year, or when `orderby` names an unknown sort order.
pub fn validate(form: &RawSearchForm, defaults: &FormDefaults) -> Result<SearchCriteria, Error> {
    let start_year = field_or_default(form.start_year.as_deref(), &defaults.start_year, parse_year);
    let end_year = field_or_default(form.end_year.as_deref(), &defaults.end_year, parse_year);
    let min_magnitude = field_or_default(form.min_magnitude.as_deref(), &defaults.min_magnitude, parse_magnitude);

    let order_by = match form.orderby.as_deref().map(str::trim) {
        None | Some("") => OrderBy::TimeAsc,
        Some(raw) => raw.parse().map_err(Error::Validation)?,
    };

    if let (Some(start), Some(end)) = (start_year, end_year)
        && end < start
    {
        return Err(Error::Validation(format!("end year {end} is before start year {start}")));
    }

    Ok(SearchCriteria { start_year, end_year, min_magnitude, order_by: Some(order_by) })
}

fn field_or_default<T>(raw: Option<&str>, placeholder: &str, parse: fn(&str) -> Option<T>) -> Option<T> {
    match raw.and_then(parse) {
        Some(value) => Some(value),
        None => {
            if raw.is_some_and(|r| !r.trim().is_empty()) {
                tracing::debug!(raw = raw.unwrap_or_default(), placeholder, "unparsable form field, using placeholder");
            }
            parse(placeholder)
        }
    }
}

fn parse_year(raw: &str) -> Option<u16> {
    let raw = raw.trim();
    if !YEAR_RE.is_match(raw) {
        return None;
    }
    raw.parse().ok()
}

fn parse_magnitude(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|m| m.is_finite() && *m >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(start: &str, end: &str, mag: &str, order: &str) -> RawSearchForm {
        RawSearchForm {
            start_year: Some(start.into()),
            end_year: Some(end.into()),
            min_magnitude: Some(mag.into()),
            orderby: Some(order.into()),
        }
    }

    #[test]
    fn test_valid_form() {
        let criteria = validate(&form("2000", "2020", "5", "magnitude"), &FormDefaults::default()).unwrap();
        assert_eq!(criteria.start_year, Some(2000));
        assert_eq!(criteria.end_year, Some(2020));
        assert_eq!(criteria.min_magnitude, Some(5.0));
        assert_eq!(criteria.order_by, Some(OrderBy::Magnitude));
    }

    #[test]
    fn test_blank_orderby_defaults_to_time_asc() {
        let criteria = validate(&form("2000", "2020", "5", ""), &FormDefaults::default()).unwrap();
        assert_eq!(criteria.order_by, Some(OrderBy::TimeAsc));

        let criteria = validate(&RawSearchForm::default(), &FormDefaults::default()).unwrap();
        assert_eq!(criteria.order_by, Some(OrderBy::TimeAsc));
    }

    #[test]
    fn test_end_before_start_rejected() {
        let result = validate(&form("2020", "2010", "", ""), &FormDefaults::default());
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_same_year_accepted() {
        let criteria = validate(&form("2015", "2015", "", ""), &FormDefaults::default()).unwrap();
        assert_eq!(criteria.start_year, criteria.end_year);
    }

    #[test]
    fn test_unparsable_fields_take_placeholder() {
        let defaults =
            FormDefaults { start_year: "1990".into(), end_year: "2000".into(), min_magnitude: "4.5".into() };
        let criteria = validate(&form("abc", "", "-3", ""), &defaults).unwrap();
        assert_eq!(criteria.start_year, Some(1990));
        assert_eq!(criteria.end_year, Some(2000));
        assert_eq!(criteria.min_magnitude, Some(4.5));
    }

    #[test]
    fn test_blank_placeholders_leave_fields_unset() {
        let criteria = validate(&form("nineteen", "20", "NaN", "time"), &FormDefaults::default()).unwrap();
        assert_eq!(criteria.start_year, None);
        assert_eq!(criteria.end_year, None);
        assert_eq!(criteria.min_magnitude, None);
        assert_eq!(criteria.order_by, Some(OrderBy::Time));
    }

    #[test]
    fn test_range_check_runs_after_substitution() {
        let defaults = FormDefaults { end_year: "1950".into(), ..Default::default() };
        let result = validate(&form("2000", "garbage", "", ""), &defaults);
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_unknown_orderby_rejected() {
        let result = validate(&form("2000", "2020", "", "newest"), &FormDefaults::default());
        assert!(matches!(result, Err(Error::Validation(msg)) if msg.contains("newest")));
    }

    #[test]
    fn test_form_defaults_accept_numbers() {
        let defaults: FormDefaults =
            serde_json::from_str(r#"{"start_year": 1990, "end_year": "2000", "min_magnitude": 4.5}"#).unwrap();
        assert_eq!(defaults.start_year, "1990");
        assert_eq!(defaults.end_year, "2000");
        assert_eq!(defaults.min_magnitude, "4.5");

        let criteria = validate(&RawSearchForm::default(), &defaults).unwrap();
        assert_eq!(criteria.start_year, Some(1990));
        assert_eq!(criteria.min_magnitude, Some(4.5));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let criteria = validate(&form(" 2001 ", "2002\n", " 3.2", " magnitude-asc "), &FormDefaults::default()).unwrap();
        assert_eq!(criteria.start_year, Some(2001));
        assert_eq!(criteria.end_year, Some(2002));
        assert_eq!(criteria.min_magnitude, Some(3.2));
        assert_eq!(criteria.order_by, Some(OrderBy::MagnitudeAsc));
    }
}
