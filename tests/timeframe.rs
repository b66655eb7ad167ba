use trendview::Timeframe;

const JAN_1_2024_MS: i64 = 1_704_067_200_000;
const DAY_MS: i64 = 86_400_000;

fn jan_2024(day: i64) -> i64 {
    JAN_1_2024_MS + (day - 1) * DAY_MS
}

#[test]
fn daily_uses_calendar_dates() {
    assert_eq!(Timeframe::Daily.format_tick(jan_2024(10)), "2024-01-10");
}

#[test]
fn weekly_counts_weeks_within_the_month() {
    // 2024-01-10: ceil(10 / 7) == 2
    assert_eq!(Timeframe::Weekly.format_tick(jan_2024(10)), "Week 2 - Jan");
}

#[test]
fn weekly_boundaries() {
    assert_eq!(Timeframe::Weekly.format_tick(jan_2024(1)), "Week 1 - Jan");
    assert_eq!(Timeframe::Weekly.format_tick(jan_2024(7)), "Week 1 - Jan");
    assert_eq!(Timeframe::Weekly.format_tick(jan_2024(8)), "Week 2 - Jan");
    assert_eq!(Timeframe::Weekly.format_tick(jan_2024(29)), "Week 5 - Jan");
}

#[test]
fn monthly_shows_month_and_year() {
    assert_eq!(Timeframe::Monthly.format_tick(jan_2024(10)), "Jan 2024");
    assert_eq!(
        Timeframe::Monthly.format_tick(jan_2024(10) + 31 * DAY_MS),
        "Feb 2024"
    );
}

#[test]
fn unrepresentable_timestamps_format_as_empty() {
    for timeframe in [Timeframe::Daily, Timeframe::Weekly, Timeframe::Monthly] {
        assert_eq!(timeframe.format_tick(i64::MAX), "");
    }
}

#[test]
fn default_timeframe_is_daily() {
    assert_eq!(Timeframe::default(), Timeframe::Daily);
}
