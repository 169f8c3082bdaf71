//! Next-watering date calculation.
//!
//! A pure function of the last logged watering and the species' watering
//! interval: the due date is the calendar date (UTC) of the last watering
//! plus the interval in days, with no time-of-day component. When no
//! watering was ever logged the forecast carries no due date and an
//! informational message instead.

use jiff::{civil::Date, tz::TimeZone, Span, Timestamp};
use serde::{Deserialize, Serialize};

use crate::error::{GardenError, Result};

/// Task type tag identifying watering events.
pub const WATERING_TASK_TYPE: &str = "Rega";

/// Suggested next watering for a plant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WateringForecast {
    /// Due date for the next watering, or `None` when the plant was never
    /// watered
    #[serde(rename = "proxima_rega_em")]
    pub due_on: Option<Date>,

    /// Human-readable message embedding the due date (DD/MM/YYYY)
    #[serde(rename = "mensagem")]
    pub message: String,
}

/// Computes the next watering date from the last watering timestamp and
/// the species interval in days.
pub fn next_watering_date(last_watering: Timestamp, interval_days: i32) -> Result<Date> {
    let last_date = last_watering.to_zoned(TimeZone::UTC).date();
    last_date
        .checked_add(Span::new().days(i64::from(interval_days)))
        .map_err(|e| {
            GardenError::invalid_input(
                "frequencia_rega_dias",
                format!("Cannot compute next watering date: {e}"),
            )
        })
}

/// Builds the full forecast for a plant.
///
/// Idempotent: repeated calls with the same inputs produce the same
/// forecast; only a newly logged watering changes the result.
pub fn forecast(last_watering: Option<Timestamp>, interval_days: i32) -> Result<WateringForecast> {
    let Some(last) = last_watering else {
        return Ok(WateringForecast {
            due_on: None,
            message: "Esta planta nunca foi regada. Que tal regar agora?".to_string(),
        });
    };

    let due = next_watering_date(last, interval_days)?;
    let formatted = due.strftime("%d/%m/%Y");
    Ok(WateringForecast {
        due_on: Some(due),
        message: format!("Baseado na última rega, a próxima será em {formatted}."),
    })
}
