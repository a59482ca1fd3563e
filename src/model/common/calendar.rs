use chrono::Month;

/// Returned in place of a date that cannot be displayed.
pub const INVALID_DATE: &str = "Invalid date";

/// Month names used when rendering dates for display.
///
/// This is managed state rather than a global table so that alternative
/// calendars can be injected by whoever builds the view models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    months: [String; 12],
}

impl Default for Calendar {
    /// English month names, January to December.
    fn default() -> Self {
        let mut month = Month::January;
        let months = std::array::from_fn(|_| {
            let name = month.name().to_string();
            month = month.succ();
            name
        });
        Self { months }
    }
}

impl Calendar {
    pub fn new(months: [String; 12]) -> Self {
        Self { months }
    }

    /// The name of the given 1-based month, if it exists.
    pub fn month_name(&self, month: usize) -> Option<&str> {
        month
            .checked_sub(1)
            .and_then(|i| self.months.get(i))
            .map(String::as_str)
    }

    /// Change a date in the form `YYYY-MM-DD` into the display form
    /// `Month D, YYYY`, e.g. `2020-08-16` becomes `August 16, 2020`.
    ///
    /// Any trailing time component is ignored. Anything that cannot be
    /// rendered yields [`INVALID_DATE`] rather than an error.
    pub fn format_date(&self, api_date: Option<&str>) -> String {
        self.try_format_date(api_date)
            .unwrap_or_else(|| INVALID_DATE.to_string())
    }

    /// As [`Self::format_date`], but `None` for invalid input.
    pub fn try_format_date(&self, api_date: Option<&str>) -> Option<String> {
        let mut parts = api_date?.trim().splitn(3, '-');
        let (Some(year), Some(month), Some(rest)) = (parts.next(), parts.next(), parts.next())
        else {
            return None;
        };

        let month_name = self.month_name(month.trim().parse().ok()?)?;
        let day: u32 = strip_time(rest).parse().ok()?;

        Some(format!("{month_name} {day}, {}", year.trim()))
    }
}

/// The day part of a date, without any ISO-8601 `T...` or space-separated
/// time suffix.
fn strip_time(rest: &str) -> &str {
    let rest = rest.trim_start();
    rest.split(|c: char| c == 'T' || c.is_whitespace())
        .next()
        .unwrap_or(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_plain_dates() {
        let calendar = Calendar::default();
        assert_eq!(
            calendar.format_date(Some("2020-10-19")),
            "October 19, 2020"
        );
        assert_eq!(calendar.format_date(Some("2020-01-01")), "January 1, 2020");
        assert_eq!(
            calendar.format_date(Some("2021-12-31")),
            "December 31, 2021"
        );
    }

    #[test]
    fn strips_leading_zeros_from_day() {
        let calendar = Calendar::default();
        assert_eq!(calendar.format_date(Some("2020-08-06")), "August 6, 2020");
    }

    #[test]
    fn strips_time_suffix() {
        let calendar = Calendar::default();
        assert_eq!(
            calendar.format_date(Some("2020-08-06T00:00:00Z")),
            "August 6, 2020"
        );
        assert_eq!(
            calendar.format_date(Some("2020-11-03 07:00")),
            "November 3, 2020"
        );
    }

    #[test]
    fn tolerates_padding_around_parts() {
        let calendar = Calendar::default();
        assert_eq!(
            calendar.format_date(Some("2020- 10 -19")),
            "October 19, 2020"
        );
        assert_eq!(
            calendar.format_date(Some(" 2020-10- 19 ")),
            "October 19, 2020"
        );
    }

    #[test]
    fn missing_date_is_invalid() {
        assert_eq!(Calendar::default().format_date(None), INVALID_DATE);
    }

    #[test]
    fn wrong_part_count_is_invalid() {
        let calendar = Calendar::default();
        assert_eq!(calendar.format_date(Some("bad-format-string")), INVALID_DATE);
        assert_eq!(calendar.format_date(Some("2020-10")), INVALID_DATE);
        assert_eq!(calendar.format_date(Some("")), INVALID_DATE);
        assert_eq!(calendar.format_date(Some("2020-10-19-01")), INVALID_DATE);
    }

    #[test]
    fn out_of_range_month_is_invalid() {
        let calendar = Calendar::default();
        assert_eq!(calendar.format_date(Some("2020-13-01")), INVALID_DATE);
        assert_eq!(calendar.format_date(Some("2020-00-01")), INVALID_DATE);
    }

    #[test]
    fn non_numeric_parts_are_invalid() {
        let calendar = Calendar::default();
        assert_eq!(calendar.format_date(Some("2020-Oct-01")), INVALID_DATE);
        assert_eq!(calendar.format_date(Some("2020-10-first")), INVALID_DATE);
    }

    #[test]
    fn custom_month_names() {
        let months = [
            "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août",
            "septembre", "octobre", "novembre", "décembre",
        ]
        .map(String::from);
        let calendar = Calendar::new(months);
        assert_eq!(calendar.format_date(Some("2020-10-19")), "octobre 19, 2020");
        assert_eq!(calendar.month_name(13), None);
        assert_eq!(calendar.month_name(0), None);
    }
}
