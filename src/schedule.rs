//! Local schedule heuristic for the free-text day/time descriptors carried
//! by listings ("Sabado 18 de octubre" / "18:00").
//!
//! The backend stores no structured date, so past/upcoming is decided
//! client-side by anchoring the descriptor to the current year and rolling
//! to the next year when the month already passed. Listings spanning a year
//! boundary can be misclassified; descriptors that fail to parse count as
//! upcoming.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

/// Month names as they appear in day descriptors, in calendar order.
const MESES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

fn month_number(token: &str) -> Option<u32> {
    let lower = token.to_lowercase();
    MESES.iter().position(|m| *m == lower).map(|i| i as u32 + 1)
}

/// Parse "<weekday> <day-number> de <month-name>" into (day, month).
///
/// The weekday is ignored; the first numeric token is the day and the first
/// token matching a month name is the month.
fn parse_dia(dia: &str) -> Option<(u32, u32)> {
    let mut day = None;
    let mut month = None;

    for token in dia.split_whitespace() {
        if day.is_none() {
            if let Ok(d) = token.parse::<u32>() {
                day = Some(d);
                continue;
            }
        }
        if month.is_none() {
            if let Some(m) = month_number(token) {
                month = Some(m);
            }
        }
    }

    Some((day?, month?))
}

/// Parse "HH:MM".
fn parse_hora(hora: &str) -> Option<NaiveTime> {
    let (h, m) = hora.trim().split_once(':')?;
    let h: u32 = h.trim().parse().ok()?;
    let m: u32 = m.trim().parse().ok()?;
    NaiveTime::from_hms_opt(h, m, 0)
}

/// Candidate instant for a listing, anchored to `now`'s year. A month that
/// already passed rolls the candidate into next year.
fn candidate_instant(dia: &str, hora: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let (day, month) = parse_dia(dia)?;
    let time = parse_hora(hora)?;

    let year = if month < now.month() {
        now.year() + 1
    } else {
        now.year()
    };

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(date.and_time(time))
}

/// Whether the instant described by `dia`/`hora` is before `now`.
///
/// On the current day the comparison falls to time-of-day. If either
/// descriptor is unparseable the listing is treated as upcoming, never as an
/// error.
pub fn is_past(dia: &str, hora: &str, now: NaiveDateTime) -> bool {
    match candidate_instant(dia, hora, now) {
        Some(instant) => instant < now,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(h, mi, 0).unwrap())
    }

    #[test]
    fn test_same_day_earlier_hour_is_upcoming() {
        let now = at(2025, 1, 15, 9, 0);
        assert!(!is_past("Lunes 15 de enero", "10:00", now));
    }

    #[test]
    fn test_same_day_later_hour_is_past() {
        let now = at(2025, 1, 15, 11, 0);
        assert!(is_past("Lunes 15 de enero", "10:00", now));
    }

    #[test]
    fn test_passed_month_rolls_to_next_year() {
        let now = at(2025, 6, 10, 12, 0);
        assert!(!is_past("Lunes 1 de enero", "00:00", now));
    }

    #[test]
    fn test_future_month_stays_in_current_year() {
        let now = at(2025, 6, 10, 12, 0);
        assert!(!is_past("Viernes 3 de octubre", "20:00", now));
    }

    #[test]
    fn test_earlier_day_in_current_month_is_past() {
        let now = at(2025, 6, 10, 12, 0);
        assert!(is_past("Martes 3 de junio", "20:00", now));
    }

    #[test]
    fn test_later_day_in_current_month_is_upcoming() {
        let now = at(2025, 6, 10, 12, 0);
        assert!(!is_past("Viernes 20 de junio", "20:00", now));
    }

    #[test]
    fn test_month_name_is_case_insensitive() {
        let now = at(2025, 6, 10, 12, 0);
        assert!(is_past("Martes 3 de Junio", "20:00", now));
    }

    #[test]
    fn test_unparseable_day_is_upcoming() {
        let now = at(2025, 6, 10, 12, 0);
        assert!(!is_past("proximamente", "20:00", now));
    }

    #[test]
    fn test_unparseable_hour_is_upcoming() {
        let now = at(2025, 6, 10, 12, 0);
        assert!(!is_past("Martes 3 de junio", "a la tarde", now));
    }

    #[test]
    fn test_invalid_calendar_date_is_upcoming() {
        let now = at(2025, 6, 10, 12, 0);
        assert!(!is_past("Lunes 31 de junio", "20:00", now));
    }
}
