//! Pagination types for list operations.

use crate::{BidflareError, BidflareResult, ResourceKind, ValidateExt};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Returns the SQL keyword for this direction.
    #[must_use]
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A sort key and direction, written `field,dir` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sort {
    /// The sort field, in its wire (camelCase) form.
    pub field: String,
    /// The sort direction.
    pub direction: SortDirection,
}

impl Sort {
    /// Creates an ascending sort on a field.
    #[must_use]
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Creates a descending sort on a field.
    #[must_use]
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }

    /// Parses `field` or `field,asc|desc`.
    pub fn parse(expression: &str) -> BidflareResult<Self> {
        let mut parts = expression.split(',').map(str::trim);
        let field = parts.next().filter(|f| !f.is_empty()).ok_or_else(|| {
            BidflareError::invalid_page(format!("Empty sort expression: '{}'", expression))
        })?;

        let direction = match parts.next().map(str::to_ascii_lowercase).as_deref() {
            None | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(other) => {
                return Err(BidflareError::invalid_page(format!(
                    "Unknown sort direction: '{}'",
                    other
                )))
            }
        };

        if parts.next().is_some() {
            return Err(BidflareError::invalid_page(format!(
                "Malformed sort expression: '{}'",
                expression
            )));
        }

        Ok(Self {
            field: field.to_string(),
            direction,
        })
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            SortDirection::Asc => write!(f, "{},asc", self.field),
            SortDirection::Desc => write!(f, "{},desc", self.field),
        }
    }
}

/// A request for a page of results.
///
/// Deserializes through [`PageParams`], so wire input is range-checked and
/// clamped like any other transport value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PageParams", into = "PageParams")]
pub struct PageRequest {
    /// The page number (0-indexed).
    pub page: usize,
    /// The number of items per page.
    pub size: usize,
    /// Optional sort key and direction.
    pub sort: Option<Sort>,
}

impl PageRequest {
    /// The default page size.
    pub const DEFAULT_SIZE: usize = 20;
    /// The maximum allowed page size.
    pub const MAX_SIZE: usize = 100;

    /// Creates a new page request.
    #[must_use]
    pub fn new(page: usize, size: usize) -> Self {
        Self {
            page,
            size: size.min(Self::MAX_SIZE),
            sort: None,
        }
    }

    /// Creates a page request for the first page with default size.
    #[must_use]
    pub fn first() -> Self {
        Self::new(0, Self::DEFAULT_SIZE)
    }

    /// Creates a page request from signed transport values.
    ///
    /// Rejects a negative index or a non-positive size.
    pub fn from_signed(page: i64, size: i64) -> BidflareResult<Self> {
        if page < 0 {
            return Err(BidflareError::invalid_page(format!(
                "Page index must not be negative, got {}",
                page
            )));
        }
        if size <= 0 {
            return Err(BidflareError::invalid_page(format!(
                "Page size must be positive, got {}",
                size
            )));
        }
        let page = usize::try_from(page)
            .map_err(|_| BidflareError::invalid_page(format!("Page index out of range: {}", page)))?;
        let size = usize::try_from(size)
            .map_err(|_| BidflareError::invalid_page(format!("Page size out of range: {}", size)))?;
        Ok(Self::new(page, size))
    }

    /// Sets the sort order.
    #[must_use]
    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Caps the size at `max`.
    #[must_use]
    pub fn clamp_size(mut self, max: usize) -> Self {
        self.size = self.size.min(max);
        self
    }

    /// Checks the size and offset without consulting any store.
    ///
    /// The offset must fit a signed 64-bit SQL bound.
    pub fn validate(&self) -> BidflareResult<()> {
        if self.size == 0 {
            return Err(BidflareError::invalid_page("Page size must be positive, got 0"));
        }
        if self.size > Self::MAX_SIZE {
            return Err(BidflareError::invalid_page(format!(
                "Page size {} exceeds the maximum of {}",
                self.size,
                Self::MAX_SIZE
            )));
        }
        self.sql_bounds().map(|_| ())
    }

    /// Checks the page and that the sort field is sortable for the resource kind.
    pub fn validate_for(&self, kind: ResourceKind) -> BidflareResult<()> {
        self.validate()?;
        if let Some(sort) = &self.sort {
            if !kind.sortable_fields().contains(&sort.field.as_str()) {
                return Err(BidflareError::invalid_page(format!(
                    "Cannot sort {} by '{}'; expected one of: {}",
                    kind,
                    sort.field,
                    kind.sortable_fields().join(", ")
                )));
            }
        }
        Ok(())
    }

    /// Returns the offset for database queries, saturating on overflow.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }

    /// Returns `(limit, offset)` as SQL bind values.
    pub fn sql_bounds(&self) -> BidflareResult<(i64, i64)> {
        let out_of_range = || {
            BidflareError::invalid_page(format!(
                "Page index {} is out of range for size {}",
                self.page, self.size
            ))
        };
        let offset = self.page.checked_mul(self.size).ok_or_else(out_of_range)?;
        let offset = i64::try_from(offset).map_err(|_| out_of_range())?;
        let limit = i64::try_from(self.size).map_err(|_| out_of_range())?;
        Ok((limit, offset))
    }

    /// Returns the limit for database queries.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// Raw paging parameters as a transport receives them.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PageParams {
    /// Requested page index.
    #[serde(default)]
    #[validate(range(min = 0, message = "Page index must not be negative"))]
    pub page: i64,

    /// Requested page size.
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, message = "Page size must be positive"))]
    pub size: i64,

    /// Sort expression (`field,asc|desc`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::validation::rules::sort_expression"))]
    pub sort: Option<String>,
}

#[allow(clippy::cast_possible_wrap)]
fn default_page_size() -> i64 {
    PageRequest::DEFAULT_SIZE as i64
}

impl TryFrom<PageParams> for PageRequest {
    type Error = BidflareError;

    fn try_from(params: PageParams) -> Result<Self, Self::Error> {
        params.validate_fields().map_err(|errors| {
            BidflareError::invalid_page(crate::validation::describe(&errors))
        })?;

        let request = Self::from_signed(params.page, params.size)?;
        match params.sort.as_deref() {
            Some(expression) => Ok(request.with_sort(Sort::parse(expression)?)),
            None => Ok(request),
        }
    }
}

impl From<PageRequest> for PageParams {
    fn from(request: PageRequest) -> Self {
        Self {
            page: i64::try_from(request.page).unwrap_or(i64::MAX),
            size: i64::try_from(request.size).unwrap_or(i64::MAX),
            sort: request.sort.map(|sort| sort.to_string()),
        }
    }
}

/// Information about a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// The current page number (0-indexed).
    pub page: usize,
    /// The number of items per page.
    pub size: usize,
    /// The total number of items across all pages.
    pub total_elements: u64,
    /// The total number of pages.
    pub total_pages: u64,
    /// Whether this is the first page.
    pub first: bool,
    /// Whether this is the last page.
    pub last: bool,
    /// The number of items on this page.
    pub number_of_elements: usize,
}

impl PageInfo {
    /// Creates a new page info.
    #[must_use]
    pub fn new(page: usize, size: usize, total_elements: u64, number_of_elements: usize) -> Self {
        let total_pages = if size > 0 {
            total_elements.div_ceil(size as u64)
        } else {
            0
        };

        Self {
            page,
            size,
            total_elements,
            total_pages,
            first: page == 0,
            last: page as u64 >= total_pages.saturating_sub(1),
            number_of_elements,
        }
    }
}

/// A page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub content: Vec<T>,
    /// Information about this page.
    #[serde(flatten)]
    pub info: PageInfo,
}

impl<T> Page<T> {
    /// Creates a new page.
    #[must_use]
    pub fn new(content: Vec<T>, page: usize, size: usize, total_elements: u64) -> Self {
        let number_of_elements = content.len();
        Self {
            content,
            info: PageInfo::new(page, size, total_elements, number_of_elements),
        }
    }

    /// Creates an empty page.
    #[must_use]
    pub fn empty(page: usize, size: usize) -> Self {
        Self::new(Vec::new(), page, size, 0)
    }

    /// Maps the page content to a different type, keeping order and metadata.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            info: self.info,
        }
    }

    /// Returns true if the page is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns the total number of elements across all pages.
    #[must_use]
    pub const fn total_elements(&self) -> u64 {
        self.info.total_elements
    }

    /// Returns the total number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.info.total_pages
    }

    /// Returns true if there is a next page.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        !self.info.last
    }

    /// Returns true if there is a previous page.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        !self.info.first
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty(0, PageRequest::DEFAULT_SIZE)
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}
