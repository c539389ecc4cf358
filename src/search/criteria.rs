use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default page size for facet searches
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Page size for mood and random sections
pub const MOOD_PAGE_SIZE: u32 = 6;

/// Hard cap on page size; larger requests are clamped
pub const MAX_PAGE_SIZE: u32 = 100;

/// Sort key accepted by the upstream search endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Popularity,
    Time,
    Healthiness,
    Random,
    Trending,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Popularity => "popularity",
            SortKey::Time => "time",
            SortKey::Healthiness => "healthiness",
            SortKey::Random => "random",
            SortKey::Trending => "trending",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "popularity" => Ok(SortKey::Popularity),
            "time" => Ok(SortKey::Time),
            "healthiness" => Ok(SortKey::Healthiness),
            "random" => Ok(SortKey::Random),
            "trending" => Ok(SortKey::Trending),
            other => Err(Error::InvalidInput(format!("Unknown sort key: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(Error::InvalidInput(format!(
                "Sort direction must be asc or desc, got {other}"
            ))),
        }
    }
}

/// Raw facet values exactly as they arrive on the query string.
///
/// Everything is an optional string; validation and defaulting happen in
/// [`FilterCriteria::from_facets`], so a malformed number produces our own
/// error body instead of a framework rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFacets {
    pub query: Option<String>,
    pub cuisine: Option<String>,
    pub diet: Option<String>,
    #[serde(rename = "type")]
    pub meal_type: Option<String>,
    pub intolerances: Option<String>,
    #[serde(rename = "maxReadyTime")]
    pub max_ready_time: Option<String>,
    pub sort: Option<String>,
    #[serde(rename = "sortDirection")]
    pub sort_direction: Option<String>,
    pub offset: Option<String>,
    pub number: Option<String>,
}

/// Canonical, validated filter record for one search request.
///
/// Immutable once built; the upstream adapter reads it field by field and
/// omits every empty value.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub query: String,
    pub cuisine: String,
    pub diet: String,
    pub meal_type: String,
    pub intolerances: String,
    pub max_ready_time: Option<u32>,
    pub sort: SortKey,
    pub sort_direction: SortDirection,
    pub offset: u32,
    pub number: u32,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            cuisine: String::new(),
            diet: String::new(),
            meal_type: String::new(),
            intolerances: String::new(),
            max_ready_time: None,
            sort: SortKey::Popularity,
            sort_direction: SortDirection::Desc,
            offset: 0,
            number: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FilterCriteria {
    /// Validate and default raw facets into a canonical filter record
    pub fn from_facets(raw: RawFacets) -> Result<Self> {
        let sort = match raw.sort.as_deref().map(str::trim) {
            None | Some("") => SortKey::Popularity,
            Some(value) => SortKey::parse(value)?,
        };

        let sort_direction = match raw.sort_direction.as_deref().map(str::trim) {
            None | Some("") => SortDirection::Desc,
            Some(value) => SortDirection::parse(value)?,
        };

        let offset = match raw.offset.as_deref().map(str::trim) {
            None | Some("") => 0,
            Some(value) => parse_non_negative("offset", value)?,
        };

        let number = match raw.number.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_PAGE_SIZE,
            Some(value) => {
                let n = parse_non_negative("number", value)?;
                if n == 0 {
                    return Err(Error::InvalidInput("number must be positive".to_string()));
                }
                n.min(MAX_PAGE_SIZE)
            }
        };

        let max_ready_time = match raw.max_ready_time.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => {
                let minutes = parse_non_negative("maxReadyTime", value)?;
                if minutes == 0 {
                    return Err(Error::InvalidInput(
                        "maxReadyTime must be positive".to_string(),
                    ));
                }
                Some(minutes)
            }
        };

        Ok(Self {
            query: normalize_text(raw.query),
            cuisine: normalize_text(raw.cuisine),
            diet: normalize_text(raw.diet),
            meal_type: normalize_text(raw.meal_type),
            intolerances: normalize_text(raw.intolerances),
            max_ready_time,
            sort,
            sort_direction,
            offset,
            number,
        })
    }

    /// Whether any of the primary search facets is set.
    ///
    /// When none is, the search runs unfiltered with defaults only; the
    /// adapter omits every empty parameter either way.
    pub fn has_facets(&self) -> bool {
        !self.query.is_empty()
            || !self.cuisine.is_empty()
            || !self.diet.is_empty()
            || !self.meal_type.is_empty()
    }
}

fn normalize_text(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

pub(crate) fn parse_non_negative(name: &str, value: &str) -> Result<u32> {
    // Parse through i64 so "-1" reads as a negative value rather than a
    // generic parse failure
    let parsed: i64 = value
        .parse()
        .map_err(|_| Error::InvalidInput(format!("{name} must be an integer, got {value}")))?;

    if parsed < 0 {
        return Err(Error::InvalidInput(format!(
            "{name} must be non-negative, got {parsed}"
        )));
    }

    u32::try_from(parsed)
        .map_err(|_| Error::InvalidInput(format!("{name} is out of range: {parsed}")))
}
