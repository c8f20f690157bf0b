//! Menu Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Create menu payload
///
/// 菜单有效期: `start_date` 必须在未来, `end_date` 必须晚于 `start_date`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_menu_create"))]
pub struct MenuCreate {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub category: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Update menu payload
///
/// Dates are applied only as a pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_menu_update"))]
pub struct MenuUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl MenuUpdate {
    /// Both dates, when both were supplied
    pub fn date_span(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        self.start_date.zip(self.end_date)
    }
}

/// Check a start/end pair against now
pub fn check_menu_span(
    start: &DateTime<Utc>,
    end: &DateTime<Utc>,
) -> Result<(), ValidationError> {
    let now = Utc::now();
    if *start <= now {
        let mut err = ValidationError::new("start_date");
        err.message = Some("start_date must be in the future".into());
        return Err(err);
    }
    if *end <= *start {
        let mut err = ValidationError::new("end_date");
        err.message = Some("end_date must be after start_date".into());
        return Err(err);
    }
    Ok(())
}

fn validate_menu_create(menu: &MenuCreate) -> Result<(), ValidationError> {
    check_menu_span(&menu.start_date, &menu.end_date)
}

fn validate_menu_update(menu: &MenuUpdate) -> Result<(), ValidationError> {
    match menu.date_span() {
        Some((start, end)) => check_menu_span(&start, &end),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn menu(start: DateTime<Utc>, end: DateTime<Utc>) -> MenuCreate {
        MenuCreate {
            name: "Lunch".into(),
            category: "Main".into(),
            start_date: start,
            end_date: end,
        }
    }

    #[test]
    fn test_menu_span_ok() {
        let start = Utc::now() + Duration::days(1);
        assert!(menu(start, start + Duration::days(7)).validate().is_ok());
    }

    #[test]
    fn test_menu_start_in_past() {
        let start = Utc::now() - Duration::days(1);
        assert!(menu(start, start + Duration::days(7)).validate().is_err());
    }

    #[test]
    fn test_menu_end_before_start() {
        let start = Utc::now() + Duration::days(2);
        assert!(menu(start, start - Duration::days(1)).validate().is_err());
    }

    #[test]
    fn test_update_single_date_is_ignored() {
        let update = MenuUpdate {
            start_date: Some(Utc::now() - Duration::days(3)),
            ..Default::default()
        };
        assert!(update.validate().is_ok());
        assert!(update.date_span().is_none());
    }
}
