//! Calendar date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A calendar date rendered the way the day picker shows it, e.g.
/// `Sat, Jun 1`.
pub struct ShortDate(pub Date);

impl fmt::Display for ShortDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%a, %b %-d"))
    }
}

/// Heading form of a date: the short form followed by the ISO date.
pub struct DayHeading(pub Date);

impl fmt::Display for DayHeading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", ShortDate(self.0), self.0)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_short_date() {
        assert_eq!(ShortDate(date(2024, 6, 1)).to_string(), "Sat, Jun 1");
        assert_eq!(ShortDate(date(2023, 12, 25)).to_string(), "Mon, Dec 25");
    }

    #[test]
    fn test_day_heading() {
        assert_eq!(
            DayHeading(date(2024, 6, 1)).to_string(),
            "Sat, Jun 1 (2024-06-01)"
        );
    }
}
