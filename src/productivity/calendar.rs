//! Google Calendar integration.

use chrono::{Datelike, NaiveDate};
use clap::Subcommand;
use tracing::instrument;
use url::Url;

use crate::link::{self, LinkError, LinkResult};

const HOST: &str = "calendar.google.com";

/// Calendar subcommands.
#[derive(Subcommand, Debug)]
pub enum CalendarCommands {
    /// Open today's view
    Today,

    /// Open the week view
    Week,

    /// Open the day view for a date
    Day {
        /// Date as YYYY-MM-DD
        date: String,
    },
}

#[instrument]
pub fn resolve(command: &CalendarCommands) -> LinkResult<Url> {
    let base = link::service_url(HOST)?;
    match command {
        CalendarCommands::Today => Ok(link::join(base, &["calendar", "r", "day"])),
        CalendarCommands::Week => Ok(link::join(base, &["calendar", "r", "week"])),
        CalendarCommands::Day { date } => {
            let date = parse_date(date)?;
            let (y, m, d) = (
                date.year().to_string(),
                date.month().to_string(),
                date.day().to_string(),
            );
            Ok(link::join(base, &["calendar", "r", "day", &y, &m, &d]))
        }
    }
}

fn parse_date(value: &str) -> LinkResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| LinkError::InvalidDate {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_today_when_resolving_then_day_view() {
        let url = resolve(&CalendarCommands::Today).unwrap();
        assert_eq!(url.as_str(), "https://calendar.google.com/calendar/r/day");
    }

    #[test]
    fn given_date_when_resolving_then_dated_day_view() {
        let url = resolve(&CalendarCommands::Day {
            date: "2025-03-07".into(),
        })
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://calendar.google.com/calendar/r/day/2025/3/7"
        );
    }

    #[test]
    fn given_malformed_date_when_resolving_then_invalid_date() {
        let err = resolve(&CalendarCommands::Day {
            date: "03/07/2025".into(),
        })
        .unwrap_err();
        assert!(matches!(err, LinkError::InvalidDate { .. }));
    }

    #[test]
    fn given_impossible_date_when_resolving_then_invalid_date() {
        assert!(resolve(&CalendarCommands::Day {
            date: "2025-02-30".into(),
        })
        .is_err());
    }
}
