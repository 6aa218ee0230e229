use crate::Date;

pub(crate) const fn ymd(year: i64, month: i64, day: i64) -> Date {
    Date::new(year, month, day)
}

/// Every valid date of `years` in month-number order, using `month_days` to
/// decide which months exist and how long they are.
pub(crate) fn dates_in_years(
    years: impl IntoIterator<Item = i64>,
    month_days: fn(i64, i64) -> i64,
) -> impl Iterator<Item = Date> {
    years.into_iter().flat_map(move |year| {
        (1..=13).flat_map(move |month| {
            (1..=month_days(year, month)).map(move |day| ymd(year, month, day))
        })
    })
}
