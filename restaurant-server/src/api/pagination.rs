//! `?recordPerPage=&page=` query parameters

use serde::Deserialize;

use crate::db::repository::PageRequest;
use crate::utils::AppError;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 2;

/// Raw pagination query
///
/// Kept as strings so a non-integer value can be reported as a validation
/// error instead of axum's query rejection.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(rename = "recordPerPage")]
    pub record_per_page: Option<String>,
    pub page: Option<String>,
}

impl PageParams {
    /// Missing or `< 1` falls back to the default; non-integers are rejected
    pub fn to_request(&self) -> Result<PageRequest, AppError> {
        let size = parse_or_default(
            "recordPerPage",
            self.record_per_page.as_deref(),
            DEFAULT_PAGE_SIZE,
        )?;
        let page = parse_or_default("page", self.page.as_deref(), DEFAULT_PAGE)?;
        let req = PageRequest::new(page, size);
        if req.checked_start().is_none() {
            return Err(AppError::validation("page window out of range"));
        }
        Ok(req)
    }
}

fn parse_or_default(name: &str, raw: Option<&str>, default: u64) -> Result<u64, AppError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(default);
    };
    let value: i64 = raw
        .parse()
        .map_err(|_| AppError::validation(format!("{name} must be an integer")))?;
    Ok(if value < 1 { default } else { value as u64 })
}
