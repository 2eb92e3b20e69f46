//! # Display Formatting Helpers
//!
//! The small formatting vocabulary the event and social-link previews
//! share: ordinal day-of-month, lower-cased 12-hour time, and generic
//! tag title-casing.

/// A day of the month with its ordinal suffix, e.g. `21` renders `"21st"`.
///
/// The teens all take `th`.
pub fn ordinal_day(day: u32) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}

/// A lower-cased 12-hour clock time, omitting `:00` minutes.
///
/// `19:00` renders `"7pm"`, `21:30` renders `"9:30pm"`, midnight is
/// `"12am"`.
pub fn twelve_hour(hour: u32, minute: u32) -> String {
    let meridiem = if hour < 12 { "am" } else { "pm" };
    let clock_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    if minute == 0 {
        format!("{clock_hour}{meridiem}")
    } else {
        format!("{clock_hour}:{minute:02}{meridiem}")
    }
}

/// Upper-case the first character, leaving the rest unchanged.
///
/// This is deliberately not word-wise: `"tiktok"` becomes `"Tiktok"`,
/// and tags whose display form differs more than that carry an explicit
/// override in their preview declaration.
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ordinal_day() {
        assert_eq!(ordinal_day(1), "1st");
        assert_eq!(ordinal_day(2), "2nd");
        assert_eq!(ordinal_day(3), "3rd");
        assert_eq!(ordinal_day(4), "4th");
        assert_eq!(ordinal_day(11), "11th");
        assert_eq!(ordinal_day(12), "12th");
        assert_eq!(ordinal_day(13), "13th");
        assert_eq!(ordinal_day(21), "21st");
        assert_eq!(ordinal_day(22), "22nd");
        assert_eq!(ordinal_day(23), "23rd");
        assert_eq!(ordinal_day(31), "31st");
    }

    #[test]
    fn test_twelve_hour() {
        assert_eq!(twelve_hour(19, 0), "7pm");
        assert_eq!(twelve_hour(21, 30), "9:30pm");
        assert_eq!(twelve_hour(0, 0), "12am");
        assert_eq!(twelve_hour(12, 0), "12pm");
        assert_eq!(twelve_hour(9, 5), "9:05am");
        assert_eq!(twelve_hour(23, 59), "11:59pm");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("instagram"), "Instagram");
        assert_eq!(title_case("tiktok"), "Tiktok");
        assert_eq!(title_case("Already"), "Already");
        assert_eq!(title_case(""), "");
    }

    proptest! {
        #[test]
        fn prop_ordinal_suffix_valid(day in 1u32..=31) {
            let s = ordinal_day(day);
            prop_assert!(s.starts_with(&day.to_string()));
            let suffix = &s[day.to_string().len()..];
            prop_assert!(["st", "nd", "rd", "th"].contains(&suffix));
        }

        #[test]
        fn prop_twelve_hour_lowercase(hour in 0u32..24, minute in 0u32..60) {
            let s = twelve_hour(hour, minute);
            prop_assert_eq!(s.to_lowercase(), s.clone());
            prop_assert!(s.ends_with("am") || s.ends_with("pm"));
        }

        #[test]
        fn prop_title_case_idempotent(s in "[a-z]{0,12}") {
            let once = title_case(&s);
            prop_assert_eq!(title_case(&once), once.clone());
        }
    }
}
