use crate::domain::fertility::PhaseRange;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One calendar month. Kept as `(year, month)` so offsets far outside the
/// representable date range still name a month; no date falls inside those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthWindow {
    year: i64,
    month: u32,
}

/// Where a phase range sits relative to a [`MonthWindow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    Inside,
    /// Begins in the month and continues past its end.
    StartsInside,
    /// Began before the month and ends in it.
    EndsInside,
    Outside,
}

impl MonthWindow {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: i64::from(date.year()),
            month: date.month(),
        }
    }

    /// The month `months` calendar months away from the month containing `today`.
    pub fn offset_from(today: NaiveDate, months: i32) -> Self {
        let index = i64::from(today.year()) * 12 + i64::from(today.month0()) + i64::from(months);
        Self {
            year: index.div_euclid(12),
            // rem_euclid(12) is in 0..12
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// `target_month_start`; `None` when the month is outside chrono's range.
    pub fn start(&self) -> Option<NaiveDate> {
        i32::try_from(self.year)
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, self.month, 1))
    }

    /// `next_month_start`, the exclusive upper bound.
    pub fn next_start(&self) -> Option<NaiveDate> {
        self.next().start()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        i64::from(date.year()) == self.year && date.month() == self.month
    }

    pub fn classify(&self, range: PhaseRange) -> Placement {
        match (self.contains(range.start), self.contains(range.end)) {
            (true, true) => Placement::Inside,
            (true, false) => Placement::StartsInside,
            (false, true) => Placement::EndsInside,
            (false, false) => Placement::Outside,
        }
    }
}

impl fmt::Display for MonthWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", month_abbr(self.month), self.year)
    }
}

fn month_abbr(month: u32) -> &'static str {
    MONTH_ABBR[(month as usize + 11) % 12]
}

/// `07 Jul`
pub fn format_day(date: NaiveDate) -> String {
    format!("{:02} {}", date.day(), month_abbr(date.month()))
}

/// `21 Jul`, `07-11 Jul`, `28 Jul-03 Aug`, or `none` for an empty range.
pub fn format_range(range: PhaseRange) -> String {
    if range.is_empty() {
        return "none".to_string();
    }
    if range.start == range.end {
        return format_day(range.start);
    }
    if MonthWindow::containing(range.start) == MonthWindow::containing(range.end) {
        return format!("{:02}-{}", range.start.day(), format_day(range.end));
    }
    format!("{}-{}", format_day(range.start), format_day(range.end))
}

/// Applies the arrow convention: `22 Jul->` continues past the month,
/// `<-03 Aug` began before it. Inside and outside ranges print literally.
pub fn format_placed(range: PhaseRange, placement: Placement) -> String {
    if range.is_empty() {
        return format_range(range);
    }
    match placement {
        Placement::StartsInside => format!("{}->", format_day(range.start)),
        Placement::EndsInside => format!("<-{}", format_day(range.end)),
        Placement::Inside | Placement::Outside => format_range(range),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_offset_crosses_year_boundaries() {
        let today = date(2025, 11, 20);
        assert_eq!(MonthWindow::offset_from(today, 0), MonthWindow::containing(today));
        assert_eq!(MonthWindow::offset_from(today, 2).start(), Some(date(2026, 1, 1)));
        assert_eq!(MonthWindow::offset_from(today, -11).start(), Some(date(2024, 12, 1)));
        assert_eq!(MonthWindow::offset_from(today, 1).next_start(), Some(date(2026, 1, 1)));
    }

    #[test]
    fn test_extreme_offset_has_no_start_and_contains_nothing() {
        let window = MonthWindow::offset_from(date(2025, 7, 1), i32::MAX);
        assert!(window.start().is_none());
        assert!(!window.contains(date(2025, 7, 1)));
        assert!(!window.contains(NaiveDate::MAX));
    }

    #[test]
    fn test_classify() {
        let july = MonthWindow::containing(date(2025, 7, 15));
        let inside = PhaseRange::new(date(2025, 7, 7), date(2025, 7, 11));
        let starts = PhaseRange::new(date(2025, 7, 22), date(2025, 8, 3));
        let ends = PhaseRange::new(date(2025, 6, 28), date(2025, 7, 2));
        let straddles = PhaseRange::new(date(2025, 6, 1), date(2025, 8, 31));

        assert_eq!(july.classify(inside), Placement::Inside);
        assert_eq!(july.classify(starts), Placement::StartsInside);
        assert_eq!(july.classify(ends), Placement::EndsInside);
        assert_eq!(july.classify(straddles), Placement::Outside);
    }

    #[test]
    fn test_format_ranges() {
        assert_eq!(format_day(date(2025, 7, 7)), "07 Jul");
        assert_eq!(format_range(PhaseRange::new(date(2025, 7, 7), date(2025, 7, 11))), "07-11 Jul");
        assert_eq!(format_range(PhaseRange::new(date(2025, 7, 28), date(2025, 8, 3))), "28 Jul-03 Aug");
        assert_eq!(format_range(PhaseRange::single(date(2025, 7, 21))), "21 Jul");
        assert_eq!(format_range(PhaseRange::new(date(2025, 7, 9), date(2025, 7, 8))), "none");
        // Same month name in different years is a cross-month range.
        assert_eq!(
            format_range(PhaseRange::new(date(2024, 7, 30), date(2025, 7, 2))),
            "30 Jul-02 Jul"
        );
    }

    #[test]
    fn test_format_placed_arrows() {
        let luteal = PhaseRange::new(date(2025, 7, 22), date(2025, 8, 3));
        assert_eq!(format_placed(luteal, Placement::StartsInside), "22 Jul->");
        assert_eq!(format_placed(luteal, Placement::EndsInside), "<-03 Aug");
        assert_eq!(format_placed(luteal, Placement::Outside), "22 Jul-03 Aug");
    }

    #[test]
    fn test_display() {
        assert_eq!(MonthWindow::containing(date(2025, 12, 3)).to_string(), "Dec 2025");
    }
}
