//! Time phrase resolution - maps natural-language temporal expressions
//! onto a forecast-day selector relative to the current weekday.

use chrono::Weekday;

use crate::application::rendering::capitalize;

/// Which forecast day to read, as a 1-indexed provider "limit"
/// parameter (1 = today only), plus the human-readable label echoed
/// back in the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTime {
    pub limit: u8,
    pub label: String,
}

/// Day numbering starts at 1 for Monday, not 0. The provider's limit
/// parameter is 1-indexed the same way.
fn day_number(day: Weekday) -> u8 {
    day.number_from_monday() as u8
}

/// The phrase table: seven weekday names plus the synthetic relative
/// keys. Synthetic values may exceed 7; the wraparound below folds
/// them back into range.
fn mapped_value(phrase: &str, today: u8) -> Option<u8> {
    let value = match phrase {
        "monday" => 1,
        "tuesday" => 2,
        "wednesday" => 3,
        "thursday" => 4,
        "friday" => 5,
        "saturday" => 6,
        "sunday" => 7,
        "tomorrow" => today + 1,
        "day after tomorrow" => today + 2,
        "after the day after tomorrow" => today + 3,
        _ => return None,
    };
    Some(value)
}

/// Resolve a recognized time entity against the current weekday.
///
/// Absent or unrecognized text is not an error: it returns `None`,
/// which tells the renderer to label the reply from the gateway's
/// current-observation date instead.
pub fn resolve(entity_value: Option<&str>, today: Weekday) -> Option<ResolvedTime> {
    let phrase = entity_value?.trim().to_lowercase();
    let today = day_number(today);
    let mapped = mapped_value(&phrase, today)?;

    // Keep the intermediate in [0,6] before the final +1 folds it into
    // the 1-indexed limit.
    let limit = (mapped + 7 - today) % 7 + 1;

    Some(ResolvedTime {
        limit,
        label: capitalize(&phrase),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEEKDAYS: [&str; 7] = [
        "monday",
        "tuesday",
        "wednesday",
        "thursday",
        "friday",
        "saturday",
        "sunday",
    ];

    const ALL_DAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    #[test]
    fn test_weekday_limits_stay_in_range() {
        for today in ALL_DAYS {
            for name in WEEKDAYS {
                let resolved = resolve(Some(name), today).unwrap();
                assert!(
                    (1..=7).contains(&resolved.limit),
                    "{} on {:?} gave {}",
                    name,
                    today,
                    resolved.limit
                );
            }
        }
    }

    #[test]
    fn test_same_day_is_limit_one() {
        assert_eq!(resolve(Some("friday"), Weekday::Fri).unwrap().limit, 1);
        assert_eq!(resolve(Some("monday"), Weekday::Mon).unwrap().limit, 1);
    }

    #[test]
    fn test_tomorrow_follows_today() {
        for (i, today) in ALL_DAYS.iter().enumerate() {
            let today_limit = resolve(Some(WEEKDAYS[i]), *today).unwrap().limit;
            let tomorrow = resolve(Some("tomorrow"), *today).unwrap().limit;
            assert_eq!(tomorrow, today_limit % 7 + 1);
        }
    }

    #[test]
    fn test_relative_phrases_wrap_over_the_week_end() {
        // Sunday + 3 must fold back into range, not overflow past 7.
        let resolved = resolve(Some("after the day after tomorrow"), Weekday::Sun).unwrap();
        assert_eq!(resolved.limit, 4);
        assert_eq!(resolve(Some("day after tomorrow"), Weekday::Sat).unwrap().limit, 3);
    }

    #[test]
    fn test_weekday_before_today_wraps() {
        // Asking for Monday on a Wednesday means next week's Monday.
        assert_eq!(resolve(Some("monday"), Weekday::Wed).unwrap().limit, 6);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let resolved = resolve(Some("FriDay"), Weekday::Mon).unwrap();
        assert_eq!(resolved.limit, 5);
        assert_eq!(resolved.label, "Friday");
    }

    #[test]
    fn test_label_is_capitalized_phrase() {
        assert_eq!(
            resolve(Some("day after tomorrow"), Weekday::Mon).unwrap().label,
            "Day after tomorrow"
        );
    }

    #[test]
    fn test_unknown_text_is_no_explicit_day() {
        assert_eq!(resolve(Some("next month"), Weekday::Mon), None);
        assert_eq!(resolve(Some(""), Weekday::Mon), None);
        assert_eq!(resolve(None, Weekday::Mon), None);
    }
}
