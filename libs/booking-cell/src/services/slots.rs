use chrono::{Duration, NaiveDate, NaiveTime};

use shared_models::appointment::wall_clock;

use crate::models::BookingError;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_time(value: &str) -> Result<NaiveTime, BookingError> {
    NaiveTime::parse_from_str(value, wall_clock::FORMAT).map_err(|_| BookingError::MalformedTime {
        value: value.to_string(),
    })
}

pub fn parse_date(value: &str) -> Result<NaiveDate, BookingError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| BookingError::MalformedDate {
        value: value.to_string(),
    })
}

/// The open/close range and interval defining all bookable time points in a
/// business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessWindow {
    open: NaiveTime,
    close: NaiveTime,
    interval_minutes: u32,
}

impl BusinessWindow {
    pub fn new(
        open: NaiveTime,
        close: NaiveTime,
        interval_minutes: u32,
    ) -> Result<Self, BookingError> {
        if interval_minutes == 0 {
            return Err(BookingError::InvalidInterval(interval_minutes));
        }
        Ok(Self {
            open,
            close,
            interval_minutes,
        })
    }

    pub fn parse(open: &str, close: &str, interval_minutes: u32) -> Result<Self, BookingError> {
        Self::new(parse_time(open)?, parse_time(close)?, interval_minutes)
    }

    /// Every bookable time point of the day, earliest first: successive
    /// points spaced `interval_minutes` apart while strictly earlier than
    /// close. The close boundary itself is excluded, and a step that wraps
    /// past midnight ends the sequence. Pure function of the window.
    pub fn slots(&self) -> Vec<NaiveTime> {
        let step = Duration::minutes(i64::from(self.interval_minutes));
        let mut slots = Vec::new();
        let mut current = self.open;
        while current < self.close {
            slots.push(current);
            let (next, wrapped) = current.overflowing_add_signed(step);
            if wrapped != 0 {
                break;
            }
            current = next;
        }
        slots
    }
}

/// String-facing form of the generator: `HH:MM` bounds in, ordered slot
/// sequence out.
pub fn generate_slots(
    open: &str,
    close: &str,
    interval_minutes: u32,
) -> Result<Vec<NaiveTime>, BookingError> {
    Ok(BusinessWindow::parse(open, close, interval_minutes)?.slots())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn time(value: &str) -> NaiveTime {
        parse_time(value).unwrap()
    }

    #[test]
    fn full_business_day_has_thirteen_slots() {
        let slots = generate_slots("09:00", "22:00", 60).unwrap();
        assert_eq!(slots.len(), 13);
        assert_eq!(slots.first(), Some(&time("09:00")));
        assert_eq!(slots.last(), Some(&time("21:00")));
    }

    #[test]
    fn slots_are_strictly_increasing_and_below_close() {
        let close = time("22:00");
        let slots = generate_slots("09:00", "22:00", 60).unwrap();
        for pair in slots.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(slots.iter().all(|slot| *slot < close));
    }

    #[test]
    fn generation_is_deterministic() {
        let first = generate_slots("09:00", "22:00", 60).unwrap();
        let second = generate_slots("09:00", "22:00", 60).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn equal_open_and_close_yield_nothing() {
        assert!(generate_slots("09:00", "09:00", 60).unwrap().is_empty());
    }

    #[test]
    fn inverted_window_yields_nothing() {
        assert!(generate_slots("22:00", "09:00", 60).unwrap().is_empty());
    }

    #[test]
    fn partial_interval_before_close_is_kept() {
        let slots = generate_slots("09:00", "10:30", 45).unwrap();
        assert_eq!(slots, vec![time("09:00"), time("09:45")]);
    }

    #[test]
    fn wrap_past_midnight_terminates() {
        let slots = generate_slots("23:00", "23:59", 60).unwrap();
        assert_eq!(slots, vec![time("23:00")]);
    }

    #[test]
    fn malformed_time_is_rejected() {
        assert_matches!(
            generate_slots("9am", "22:00", 60),
            Err(BookingError::MalformedTime { .. })
        );
        assert_matches!(
            generate_slots("09:00", "25:99", 60),
            Err(BookingError::MalformedTime { .. })
        );
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert_matches!(
            generate_slots("09:00", "22:00", 0),
            Err(BookingError::InvalidInterval(0))
        );
    }
}
