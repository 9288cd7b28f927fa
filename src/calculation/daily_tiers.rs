//! The daily hour-tier resolver.
//!
//! For one non-sick, non-vacation day, splits the elapsed hours into the
//! pay categories: regular hours up to the daily cap (bounded on Friday by
//! the remaining room under the weekly ceiling), weekday overtime at
//! 125%/150%, the Saturday/holiday 150%/175%/200% ladder, and the unpaid
//! meal-break deduction.

use chrono::{NaiveTime, Timelike, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{FoodBreakRule, WorkingTimeRules};

/// The per-day hour categories produced by the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTierBreakdown {
    /// Regular weekday hours up to the daily/weekly cap.
    pub regular_hours: Decimal,
    /// Total weekday hours beyond the regular figure.
    pub overtime_extra_hours: Decimal,
    /// First-tier weekday overtime.
    pub overtime_125: Decimal,
    /// Second-tier weekday overtime.
    pub overtime_150: Decimal,
    /// Saturday/holiday hours up to the daily cap.
    pub holiday_base_hours: Decimal,
    /// Saturday/holiday base tier (equals the capped base hours).
    pub holiday_150: Decimal,
    /// Saturday/holiday first overflow tier.
    pub holiday_175: Decimal,
    /// Saturday/holiday remaining overflow.
    pub holiday_200: Decimal,
    /// Unpaid meal-break deduction.
    pub food_break_hours: Decimal,
    /// Sum of the tiers minus the meal break.
    pub final_total_hours: Decimal,
}

/// Returns true if a shift starting at `start` is a night shift.
///
/// A night shift starts at or after the night window's opening hour or
/// before its closing hour, and carries a lower daily cap.
pub fn is_night_shift(start: NaiveTime, rules: &WorkingTimeRules) -> bool {
    let hour = start.hour();
    hour >= rules.night_start_hour || hour < rules.night_end_hour
}

/// Returns the worked hours capped at the shift's daily limit.
///
/// The limit is the night cap for night shifts and the day cap otherwise.
/// This figure is what Sunday-Thursday days contribute to the Friday
/// weekly ceiling.
pub fn capped_daily_hours(
    worked: Decimal,
    start: NaiveTime,
    rules: &WorkingTimeRules,
) -> Decimal {
    let cap = if is_night_shift(start, rules) {
        rules.night_cap
    } else {
        rules.day_cap
    };
    worked.min(cap)
}

/// Splits one day's worked hours into its pay categories.
///
/// # Arguments
///
/// * `worked` - Elapsed hours for the day
/// * `start` - Clock-in time (determines the night-shift cap)
/// * `weekday` - The day of week (Friday triggers the weekly bound)
/// * `weekend_or_holiday` - True on Saturday or a configured holiday
/// * `week_regular_so_far` - Capped Sunday-Thursday regular hours already
///   accumulated in this day's week; only consulted on Friday
/// * `rules` - Working-time rules (caps, night window, weekly ceiling)
/// * `food` - Meal-break thresholds
///
/// # Behavior
///
/// On Saturday or a holiday the regular figure stays zero and the hours
/// populate the holiday ladder instead: the capped base at 150%, the next
/// two overflow hours at 175%, the remainder at 200%. On an ordinary
/// weekday the capped hours are regular and the excess splits into the
/// first overtime tier (two hours at 125%) and the rest at 150%. On Friday
/// the regular figure is additionally bounded by the room left under the
/// weekly ceiling, floored at zero; hours pushed out of the regular figure
/// become overtime.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::resolve_daily_tiers;
/// use payslip_engine::config::{FoodBreakRule, WorkingTimeRules};
/// use chrono::{NaiveTime, Weekday};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rules = WorkingTimeRules {
///     weekly_ceiling: Decimal::from(42),
///     day_cap: Decimal::from(8),
///     night_cap: Decimal::from(7),
///     night_start_hour: 22,
///     night_end_hour: 6,
///     overtime_first_tier_hours: Decimal::from(2),
/// };
/// let food = FoodBreakRule {
///     qualifying_hours: Decimal::from(8),
///     half_break_above: Decimal::from_str("8.5").unwrap(),
///     full_break_above: Decimal::from_str("11.5").unwrap(),
///     half_break_hours: Decimal::from_str("0.5").unwrap(),
///     full_break_hours: Decimal::from_str("1.0").unwrap(),
/// };
///
/// let start = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
/// let tiers = resolve_daily_tiers(
///     Decimal::from(11),
///     start,
///     Weekday::Mon,
///     false,
///     Decimal::ZERO,
///     &rules,
///     &food,
/// );
/// assert_eq!(tiers.regular_hours, Decimal::from(8));
/// assert_eq!(tiers.overtime_125, Decimal::from(2));
/// assert_eq!(tiers.overtime_150, Decimal::from(1));
/// ```
pub fn resolve_daily_tiers(
    worked: Decimal,
    start: NaiveTime,
    weekday: Weekday,
    weekend_or_holiday: bool,
    week_regular_so_far: Decimal,
    rules: &WorkingTimeRules,
    food: &FoodBreakRule,
) -> DailyTierBreakdown {
    let mut tiers = DailyTierBreakdown::default();
    if worked <= Decimal::ZERO {
        return tiers;
    }

    let capped = capped_daily_hours(worked, start, rules);

    if weekend_or_holiday {
        let overflow = (worked - capped).max(Decimal::ZERO);
        tiers.holiday_base_hours = capped;
        tiers.holiday_150 = capped;
        tiers.holiday_175 = overflow.min(rules.overtime_first_tier_hours);
        tiers.holiday_200 = (overflow - tiers.holiday_175).max(Decimal::ZERO);
    } else {
        tiers.regular_hours = if weekday == Weekday::Fri {
            let weekly_room = (rules.weekly_ceiling - week_regular_so_far).max(Decimal::ZERO);
            capped.min(weekly_room)
        } else {
            capped
        };

        let extra = (worked - tiers.regular_hours).max(Decimal::ZERO);
        tiers.overtime_extra_hours = extra;
        tiers.overtime_125 = extra.min(rules.overtime_first_tier_hours);
        tiers.overtime_150 = extra - tiers.overtime_125;
    }

    tiers.food_break_hours = food_break_hours(worked, food);

    tiers.final_total_hours = tiers.regular_hours
        + tiers.overtime_125
        + tiers.overtime_150
        + tiers.holiday_150
        + tiers.holiday_175
        + tiers.holiday_200
        - tiers.food_break_hours;

    tiers
}

/// The unpaid meal-break deduction for a day's worked hours.
///
/// Nothing under the qualifying threshold, the full break above the upper
/// threshold, the half break above the middle one.
pub fn food_break_hours(worked: Decimal, food: &FoodBreakRule) -> Decimal {
    if worked < food.qualifying_hours {
        Decimal::ZERO
    } else if worked > food.full_break_above {
        food.full_break_hours
    } else if worked > food.half_break_above {
        food.half_break_hours
    } else {
        Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rules() -> WorkingTimeRules {
        WorkingTimeRules {
            weekly_ceiling: dec("42"),
            day_cap: dec("8"),
            night_cap: dec("7"),
            night_start_hour: 22,
            night_end_hour: 6,
            overtime_first_tier_hours: dec("2"),
        }
    }

    fn food() -> FoodBreakRule {
        FoodBreakRule {
            qualifying_hours: dec("8"),
            half_break_above: dec("8.5"),
            full_break_above: dec("11.5"),
            half_break_hours: dec("0.5"),
            full_break_hours: dec("1.0"),
        }
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn weekday_tiers(worked: &str) -> DailyTierBreakdown {
        resolve_daily_tiers(
            dec(worked),
            time(8, 0),
            Weekday::Mon,
            false,
            Decimal::ZERO,
            &rules(),
            &food(),
        )
    }

    #[test]
    fn test_weekday_under_cap_all_regular() {
        let tiers = weekday_tiers("6");
        assert_eq!(tiers.regular_hours, dec("6"));
        assert_eq!(tiers.overtime_125, dec("0"));
        assert_eq!(tiers.overtime_150, dec("0"));
        assert_eq!(tiers.final_total_hours, dec("6"));
    }

    #[test]
    fn test_weekday_overtime_tiering_11_hours() {
        let tiers = weekday_tiers("11");
        assert_eq!(tiers.regular_hours, dec("8"));
        assert_eq!(tiers.overtime_125, dec("2"));
        assert_eq!(tiers.overtime_150, dec("1"));
        // 8 + 2*1 + 1 - 0.5 food break (11 > 8.5)
        assert_eq!(tiers.final_total_hours, dec("10.5"));
    }

    #[test]
    fn test_weekday_first_tier_partial() {
        let tiers = weekday_tiers("9");
        assert_eq!(tiers.regular_hours, dec("8"));
        assert_eq!(tiers.overtime_extra_hours, dec("1"));
        assert_eq!(tiers.overtime_125, dec("1"));
        assert_eq!(tiers.overtime_150, dec("0"));
    }

    #[test]
    fn test_night_shift_lowers_cap_to_7() {
        let tiers = resolve_daily_tiers(
            dec("9"),
            time(22, 0),
            Weekday::Tue,
            false,
            Decimal::ZERO,
            &rules(),
            &food(),
        );
        assert_eq!(tiers.regular_hours, dec("7"));
        assert_eq!(tiers.overtime_125, dec("2"));
        assert_eq!(tiers.overtime_150, dec("0"));
    }

    #[test]
    fn test_early_morning_start_is_night_shift() {
        assert!(is_night_shift(time(5, 59), &rules()));
        assert!(!is_night_shift(time(6, 0), &rules()));
        assert!(is_night_shift(time(22, 0), &rules()));
        assert!(!is_night_shift(time(21, 59), &rules()));
    }

    #[test]
    fn test_saturday_ladder_11_hours() {
        let tiers = resolve_daily_tiers(
            dec("11"),
            time(8, 0),
            Weekday::Sat,
            true,
            Decimal::ZERO,
            &rules(),
            &food(),
        );
        assert_eq!(tiers.regular_hours, dec("0"));
        assert_eq!(tiers.holiday_base_hours, dec("8"));
        assert_eq!(tiers.holiday_150, dec("8"));
        assert_eq!(tiers.holiday_175, dec("2"));
        assert_eq!(tiers.holiday_200, dec("1"));
    }

    #[test]
    fn test_holiday_ladder_under_cap() {
        let tiers = resolve_daily_tiers(
            dec("5"),
            time(9, 0),
            Weekday::Wed,
            true,
            Decimal::ZERO,
            &rules(),
            &food(),
        );
        assert_eq!(tiers.holiday_150, dec("5"));
        assert_eq!(tiers.holiday_175, dec("0"));
        assert_eq!(tiers.holiday_200, dec("0"));
        assert_eq!(tiers.final_total_hours, dec("5"));
    }

    #[test]
    fn test_friday_bounded_by_weekly_ceiling() {
        // 38 capped hours already worked Sunday through Thursday leaves
        // 4 hours of room; an 8-hour Friday yields 4 regular + 4 overtime.
        let tiers = resolve_daily_tiers(
            dec("8"),
            time(8, 0),
            Weekday::Fri,
            false,
            dec("38"),
            &rules(),
            &food(),
        );
        assert_eq!(tiers.regular_hours, dec("4"));
        assert_eq!(tiers.overtime_extra_hours, dec("4"));
        assert_eq!(tiers.overtime_125, dec("2"));
        assert_eq!(tiers.overtime_150, dec("2"));
    }

    #[test]
    fn test_friday_room_floored_at_zero() {
        let tiers = resolve_daily_tiers(
            dec("6"),
            time(8, 0),
            Weekday::Fri,
            false,
            dec("45"),
            &rules(),
            &food(),
        );
        assert_eq!(tiers.regular_hours, dec("0"));
        assert_eq!(tiers.overtime_extra_hours, dec("6"));
        assert_eq!(tiers.overtime_125, dec("2"));
        assert_eq!(tiers.overtime_150, dec("4"));
    }

    #[test]
    fn test_friday_with_free_week_uses_daily_cap() {
        let tiers = resolve_daily_tiers(
            dec("9"),
            time(8, 0),
            Weekday::Fri,
            false,
            dec("0"),
            &rules(),
            &food(),
        );
        assert_eq!(tiers.regular_hours, dec("8"));
        assert_eq!(tiers.overtime_125, dec("1"));
    }

    #[test]
    fn test_food_break_thresholds() {
        assert_eq!(food_break_hours(dec("7"), &food()), dec("0"));
        assert_eq!(food_break_hours(dec("8"), &food()), dec("0"));
        assert_eq!(food_break_hours(dec("8.5"), &food()), dec("0"));
        assert_eq!(food_break_hours(dec("9"), &food()), dec("0.5"));
        assert_eq!(food_break_hours(dec("11.5"), &food()), dec("0.5"));
        assert_eq!(food_break_hours(dec("12"), &food()), dec("1.0"));
    }

    #[test]
    fn test_zero_worked_hours_all_zero() {
        let tiers = weekday_tiers("0");
        assert_eq!(tiers, DailyTierBreakdown::default());
    }
}
