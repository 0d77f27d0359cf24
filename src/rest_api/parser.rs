//! # Query Parameter Parser
//!
//! Turns the raw `/books` query string into a structured listing query.
//! Nothing here fails: malformed values degrade to defaults or to a
//! criterion that matches no record.

use std::collections::HashMap;

use super::filter::{Criterion, FilterSet};
use super::pagination::{PageRequest, DEFAULT_LIMIT, DEFAULT_PAGE};
use super::sort::{SortDirection, SortSpec};

/// Parsed listing query
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Criteria, combined with AND
    pub filters: FilterSet,

    /// Optional single-field ordering
    pub sort: Option<SortSpec>,

    /// Page window
    pub page: PageRequest,
}

impl ListQuery {
    /// Parse query parameters from a HashMap
    pub fn parse(params: &HashMap<String, String>) -> Self {
        let param = |names: &[&str]| first_present(params, names);

        let mut filters = FilterSet::new();

        if let Some(title) = param(&["title", "titulo"]) {
            filters = filters.and(Criterion::title_contains(title));
        }
        if let Some(author) = param(&["author", "autor"]) {
            filters = filters.and(Criterion::author_contains(author));
        }
        if let Some(genre) = param(&["genre", "genero"]) {
            filters = filters.and(Criterion::genre_contains(genre));
        }
        if let Some(min) = param(&["yearMin", "anoMin"]) {
            filters = filters.and(Criterion::YearAtLeast(coerce_number(min)));
        }
        if let Some(max) = param(&["yearMax", "anoMax"]) {
            filters = filters.and(Criterion::YearAtMost(coerce_number(max)));
        }

        // An absent `order` defaults to "asc"; a present but empty one does not.
        let sort = param(&["sortBy"]).map(|field| {
            let direction = match params.get("order") {
                None => SortDirection::Ascending,
                Some(order) => SortDirection::from_param(order),
            };
            SortSpec::new(field, direction)
        });

        let page = PageRequest {
            page: coerce_positive(param(&["page"]), DEFAULT_PAGE),
            limit: coerce_positive(param(&["limit"]), DEFAULT_LIMIT),
        };

        Self {
            filters,
            sort,
            page,
        }
    }

    /// Parse `key=value` pairs, as given on the command line.
    ///
    /// A pair without `=` is a key with an empty value.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = &'a str>) -> Self {
        let params: HashMap<String, String> = pairs
            .into_iter()
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (key.to_string(), value.to_string())
            })
            .collect();
        Self::parse(&params)
    }
}

/// First non-empty value among `names`, in order
fn first_present<'a>(params: &'a HashMap<String, String>, names: &[&str]) -> Option<&'a str> {
    names
        .iter()
        .filter_map(|name| params.get(*name))
        .map(String::as_str)
        .find(|v| !v.is_empty())
}

/// Loose numeric coercion.
///
/// Surrounding whitespace is ignored, an empty string is zero, decimal,
/// exponent, `0x`/`0o`/`0b` prefixed integers and `Infinity` forms are
/// accepted. Anything else is NaN.
pub fn coerce_number(value: &str) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(n) = parse_prefixed_integer(trimmed) {
        return n;
    }

    // Rust's float parser also takes "inf"/"nan"; those are not numbers here.
    if trimmed
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return f64::NAN;
    }

    trimmed.parse().unwrap_or(f64::NAN)
}

/// `0x`, `0o` and `0b` integers, unsigned. `None` when there is no prefix.
fn parse_prefixed_integer(value: &str) -> Option<f64> {
    let radix = match value.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &value[2..];

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(f64::NAN);
    }
    Some(u64::from_str_radix(digits, radix).map_or(f64::NAN, |n| n as f64))
}

/// Coerce a page/limit parameter: missing or NaN falls back to `default`,
/// fractions truncate, anything below 1 clamps to 1.
fn coerce_positive(value: Option<&str>, default: usize) -> usize {
    let Some(raw) = value else {
        return default;
    };

    let n = coerce_number(raw);
    if n.is_nan() {
        return default;
    }

    let n = n.trunc();
    if n < 1.0 {
        1
    } else {
        // saturating float-to-int cast
        n as usize
    }
}
