//! Collection queries and their version-sensitive wire translation.
//!
//! Responsibilities:
//! - Model filter/search/sort/pagination queries independently of any API
//!   generation.
//! - Translate a query into URL parameters for the legacy (v8) or modern
//!   (v9) Directus query dialect.
//!
//! Does NOT handle:
//! - URL encoding (the HTTP layer encodes parameter values).
//! - The `fields` parameter (derived from the read model by the client).
//!
//! Invariants:
//! - Translation is a pure function of (query, version); repeated calls
//!   produce identical parameter lists.
//! - Parameters come out in a fixed order: filters, search, sort, limit,
//!   offset, page.

use serde_json::{Map, Value, json};

/// Directus API generation, selecting the query-parameter dialect.
///
/// The legacy dialect spells filters as `filter[field][op]=value` pairs;
/// the modern dialect packs all filters into a single JSON `filter`
/// parameter and renames the full-text search parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Version {
    /// Legacy v8 dialect.
    #[default]
    V8,
    /// Modern v9+ dialect.
    V9,
}

/// A filter comparison value.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FilterValue {
    /// Legacy dialect rendering: booleans become `1`/`0`, everything else
    /// its plain text form.
    fn render_legacy(&self) -> String {
        match self {
            Self::Bool(true) => "1".to_string(),
            Self::Bool(false) => "0".to_string(),
            Self::Integer(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&FilterValue> for Value {
    fn from(value: &FilterValue) -> Self {
        match value {
            FilterValue::Bool(b) => json!(b),
            FilterValue::Integer(n) => json!(n),
            FilterValue::Float(n) => json!(n),
            FilterValue::Text(s) => json!(s),
        }
    }
}

/// A comparison applied to one field.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparison {
    Eq(FilterValue),
    Neq(FilterValue),
    Lt(FilterValue),
    Lte(FilterValue),
    Gt(FilterValue),
    Gte(FilterValue),
    In(Vec<FilterValue>),
    NotIn(Vec<FilterValue>),
    Contains(String),
    Null,
    NotNull,
}

impl Comparison {
    /// Operator name without dialect decoration (`eq`, `nin`, ...).
    fn operator(&self) -> &'static str {
        match self {
            Self::Eq(_) => "eq",
            Self::Neq(_) => "neq",
            Self::Lt(_) => "lt",
            Self::Lte(_) => "lte",
            Self::Gt(_) => "gt",
            Self::Gte(_) => "gte",
            Self::In(_) => "in",
            Self::NotIn(_) => "nin",
            Self::Contains(_) => "contains",
            Self::Null => "null",
            Self::NotNull => "nnull",
        }
    }

    fn render_legacy(&self) -> String {
        match self {
            Self::Eq(v) | Self::Neq(v) | Self::Lt(v) | Self::Lte(v) | Self::Gt(v)
            | Self::Gte(v) => v.render_legacy(),
            Self::In(values) | Self::NotIn(values) => values
                .iter()
                .map(FilterValue::render_legacy)
                .collect::<Vec<_>>()
                .join(","),
            Self::Contains(s) => s.clone(),
            // Presence operators take a throwaway truthy value.
            Self::Null | Self::NotNull => "1".to_string(),
        }
    }

    fn render_modern(&self) -> Value {
        match self {
            Self::Eq(v) | Self::Neq(v) | Self::Lt(v) | Self::Lte(v) | Self::Gt(v)
            | Self::Gte(v) => v.into(),
            Self::In(values) | Self::NotIn(values) => {
                Value::Array(values.iter().map(Value::from).collect())
            }
            Self::Contains(s) => json!(s),
            Self::Null | Self::NotNull => json!(true),
        }
    }
}

/// A single field filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    field: String,
    comparison: Comparison,
}

impl Filter {
    pub fn new(field: impl Into<String>, comparison: Comparison) -> Self {
        Self {
            field: field.into(),
            comparison,
        }
    }

    fn as_modern_value(&self) -> Value {
        let mut inner = Map::new();
        inner.insert(
            format!("_{}", self.comparison.operator()),
            self.comparison.render_modern(),
        );
        let mut outer = Map::new();
        outer.insert(self.field.clone(), Value::Object(inner));
        Value::Object(outer)
    }
}

/// Sort key for one field.
#[derive(Debug, Clone, PartialEq)]
pub struct Sort {
    field: String,
    descending: bool,
}

impl Sort {
    /// Ascending sort on a field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: false,
        }
    }

    /// Descending sort on a field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: true,
        }
    }

    fn render(&self) -> String {
        if self.descending {
            format!("-{}", self.field)
        } else {
            self.field.clone()
        }
    }
}

/// A collection query: filters, full-text search, sorting, and pagination.
///
/// # Example
///
/// ```
/// use directus_client::query::{Comparison, Query, Sort, Version};
///
/// let query = Query::new()
///     .filter("status", Comparison::Eq("published".into()))
///     .sort(Sort::desc("published_at"))
///     .limit(20);
///
/// let params = query.to_params(Version::V8);
/// assert!(params.contains(&("filter[status][eq]".to_string(), "published".to_string())));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Query {
    filters: Vec<Filter>,
    search: Option<String>,
    sort: Vec<Sort>,
    limit: Option<u64>,
    offset: Option<u64>,
    page: Option<u64>,
}

impl Query {
    /// An empty query matching every item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field filter. Filters are combined with logical AND.
    pub fn filter(mut self, field: impl Into<String>, comparison: Comparison) -> Self {
        self.filters.push(Filter::new(field, comparison));
        self
    }

    /// Full-text search over the collection.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Append a sort key. Earlier keys take precedence.
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort.push(sort);
        self
    }

    /// Maximum number of items to return.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Number of items to skip.
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Page number (1-based), an alternative to `offset`.
    pub fn page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    /// Translate into URL query parameters for the given API generation.
    ///
    /// Pure: no side effects, and repeated calls return identical lists.
    pub fn to_params(&self, version: Version) -> Vec<(String, String)> {
        let mut params = Vec::new();

        match version {
            Version::V8 => {
                for filter in &self.filters {
                    params.push((
                        format!(
                            "filter[{}][{}]",
                            filter.field,
                            filter.comparison.operator()
                        ),
                        filter.comparison.render_legacy(),
                    ));
                }
                if let Some(search) = &self.search {
                    params.push(("q".to_string(), search.clone()));
                }
            }
            Version::V9 => {
                if let Some(filter) = self.as_modern_filter() {
                    params.push(("filter".to_string(), filter.to_string()));
                }
                if let Some(search) = &self.search {
                    params.push(("search".to_string(), search.clone()));
                }
            }
        }

        if !self.sort.is_empty() {
            let rendered = self
                .sort
                .iter()
                .map(Sort::render)
                .collect::<Vec<_>>()
                .join(",");
            params.push(("sort".to_string(), rendered));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset".to_string(), offset.to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page".to_string(), page.to_string()));
        }

        params
    }

    /// The single JSON filter value of the modern dialect. Multiple filters
    /// nest under `_and`; one filter stays bare.
    fn as_modern_filter(&self) -> Option<Value> {
        match self.filters.as_slice() {
            [] => None,
            [only] => Some(only.as_modern_value()),
            many => Some(json!({
                "_and": many.iter().map(Filter::as_modern_value).collect::<Vec<_>>(),
            })),
        }
    }
}
