use anyhow::Context;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::cli::CommonArgs;
use crate::config::Config;
use crate::error::{DigestError, Result};
use crate::git::LocalGitFeed;
use crate::model::{ActivitySnapshot, WINDOW_DAYS};
use crate::source::{materialize, JsonFeed};

/// Reference date of a run: explicit input, or today. Dates are UTC throughout,
/// matching how commit timestamps are turned into dates.
pub fn reference_date(input: Option<&str>) -> Result<NaiveDate> {
    let today = Utc::now().date_naive();
    match input {
        Some(s) => parse_date(s, today),
        None => Ok(today),
    }
}

pub fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    // RFC3339
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.date_naive());
    }

    // YYYY-MM-DD
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }

    // Relative (e.g., "2 weeks ago")
    if let Some(days) = parse_natural_days(input)? {
        return Duration::try_days(days)
            .and_then(|d| today.checked_sub_signed(d))
            .ok_or_else(|| {
                DigestError::InvalidDate(format!("Duration overflow for '{input}'"))
            });
    }

    Err(DigestError::InvalidDate(format!(
        "'{input}' is not YYYY-MM-DD, RFC3339, or 'N days/weeks/months ago'"
    )))
}

fn parse_natural_days(input: &str) -> Result<Option<i64>> {
    let trimmed = input.trim().to_lowercase();
    let units = [
        (" days ago", 1),
        (" day ago", 1),
        (" weeks ago", 7),
        (" week ago", 7),
        (" months ago", 30),
        (" month ago", 30),
    ];
    for (suffix, factor) in units {
        let Some(n) = trimmed.strip_suffix(suffix) else {
            continue;
        };
        let Ok(n) = n.trim().parse::<i64>() else {
            return Ok(None);
        };
        if n < 0 {
            return Err(DigestError::InvalidDate(format!(
                "'{input}' points into the future"
            )));
        }
        return n.checked_mul(factor).map(Some).ok_or_else(|| {
            DigestError::InvalidDate(format!("Duration overflow for '{input}'"))
        });
    }
    Ok(None)
}

/// Earliest commit time worth reading from a local clone for `reference`.
pub fn history_floor(reference: NaiveDate) -> DateTime<Utc> {
    let day = reference - Duration::days(WINDOW_DAYS + 1);
    Utc.from_utc_datetime(&day.and_time(chrono::NaiveTime::MIN))
}

/// Reads the run's feed once: the JSON snapshot if given, else the configured clones.
pub fn load_snapshot(
    common: &CommonArgs,
    config: &Config,
    reference: NaiveDate,
) -> anyhow::Result<ActivitySnapshot> {
    let snapshot = match &common.feed {
        Some(path) => materialize(&mut JsonFeed::new(path))
            .with_context(|| format!("Failed to read activity feed {}", path.display()))?,
        None => {
            let mut feed = LocalGitFeed::new(
                config.repositories.clone(),
                config.authors.clone(),
                history_floor(reference),
            );
            materialize(&mut feed).context("Failed to read configured repositories")?
        }
    };
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
    }

    #[test]
    fn parses_iso_and_rfc3339() {
        assert_eq!(
            parse_date("2024-02-29", today()).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            parse_date("2024-02-29T23:00:00+00:00", today()).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn parses_relative_dates() {
        let day = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();
        assert_eq!(parse_date("3 days ago", today()).unwrap(), day(3, 28));
        assert_eq!(parse_date("2 Weeks ago", today()).unwrap(), day(3, 17));
        assert_eq!(parse_date("1 month ago", today()).unwrap(), day(3, 1));
    }

    #[test]
    fn huge_relative_dates_are_errors() {
        for input in [
            "200000000000 days ago",
            "9223372036854775807 weeks ago",
            "400000000 months ago",
        ] {
            assert!(
                matches!(parse_date(input, today()), Err(DigestError::InvalidDate(_))),
                "{input}"
            );
        }
    }

    #[test]
    fn negative_relative_dates_are_errors() {
        assert!(matches!(
            parse_date("-3 days ago", today()),
            Err(DigestError::InvalidDate(_))
        ));
    }

    #[test]
    fn reference_date_defaults_to_utc_today() {
        assert_eq!(reference_date(None).unwrap(), Utc::now().date_naive());
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_date("last tuesday", today()),
            Err(DigestError::InvalidDate(_))
        ));
    }

    #[test]
    fn history_floor_precedes_window() {
        let floor = history_floor(today());
        assert_eq!(floor.date_naive(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }
}
