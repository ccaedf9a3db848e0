//! Synthetic dates
//!
//! All bounds are inclusive. Days stop at 28 inside date ranges so that every
//! begin/end pair is a valid calendar date.

use rand::Rng;
use std::fmt;

pub const YEAR_MIN: u32 = 1950;
pub const YEAR_MAX: u32 = 2016;
pub const DAY_MAX: u32 = 31;
pub const RANGE_DAY_MAX: u32 = 28;
/// An end year is at most this many years after the begin year
pub const RANGE_MAX_SPAN_YEARS: u32 = 2;

/// A single date component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePart {
    Day,
    Month,
    Year,
}

impl DatePart {
    fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> u32 {
        match self {
            Self::Day => rng.gen_range(1..=DAY_MAX),
            Self::Month => rng.gen_range(1..=12),
            Self::Year => rng.gen_range(YEAR_MIN..=YEAR_MAX),
        }
    }
}

/// Ordered date components and the separator placed between them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateLayout {
    pub parts: &'static [DatePart],
    pub separator: &'static str,
}

impl DateLayout {
    pub const DAY: Self = Self::new(&[DatePart::Day], "");
    pub const MONTH_SLASH_DAY: Self = Self::new(&[DatePart::Month, DatePart::Day], "/");
    pub const MONTH_SLASH_YEAR: Self = Self::new(&[DatePart::Month, DatePart::Year], "/");
    pub const MONTH_SLASH_DAY_SLASH_YEAR: Self =
        Self::new(&[DatePart::Month, DatePart::Day, DatePart::Year], "/");
    pub const YEAR_SLASH_MONTH_SLASH_DAY: Self =
        Self::new(&[DatePart::Year, DatePart::Month, DatePart::Day], "/");
    pub const YEAR_SLASH_MONTH: Self = Self::new(&[DatePart::Year, DatePart::Month], "/");
    pub const MONTH_DAY_YEAR: Self =
        Self::new(&[DatePart::Month, DatePart::Day, DatePart::Year], " ");
    pub const MONTH_YEAR: Self = Self::new(&[DatePart::Month, DatePart::Year], " ");
    pub const DAY_MONTH: Self = Self::new(&[DatePart::Day, DatePart::Month], " ");
    pub const DAY_MONTH_YEAR: Self =
        Self::new(&[DatePart::Day, DatePart::Month, DatePart::Year], " ");

    pub const fn new(parts: &'static [DatePart], separator: &'static str) -> Self {
        Self { parts, separator }
    }

    /// Draw each component in layout order and join them
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.parts
            .iter()
            .map(|part| part.sample(rng).to_string())
            .collect::<Vec<_>>()
            .join(self.separator)
    }
}

/// Random year truncated to its last `digits` characters
pub fn sample_year_digits<R: Rng + ?Sized>(digits: usize, rng: &mut R) -> String {
    let year = rng.gen_range(YEAR_MIN..=YEAR_MAX).to_string();
    let skip = year.len().saturating_sub(digits);
    year[skip..].to_string()
}

/// Ordered begin/end date pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub begin: (u32, u32, u32),
    pub end: (u32, u32, u32),
}

impl DateRange {
    /// Draw a range whose end never precedes its begin
    ///
    /// Draw order: begin year, month, day, then end year; the end month and
    /// day are only constrained while the end falls in the begin's year and
    /// month.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let year_begin = rng.gen_range(YEAR_MIN..=YEAR_MAX);
        let month_begin = rng.gen_range(1..=12);
        let day_begin = rng.gen_range(1..=RANGE_DAY_MAX);

        let year_end = rng.gen_range(year_begin..=year_begin + RANGE_MAX_SPAN_YEARS);
        let (month_end, day_end) = if year_end > year_begin {
            (rng.gen_range(1..=12), rng.gen_range(1..=RANGE_DAY_MAX))
        } else {
            let month_end = rng.gen_range(month_begin..=12);
            let day_end = if month_end > month_begin {
                rng.gen_range(1..=RANGE_DAY_MAX)
            } else {
                rng.gen_range(day_begin..=RANGE_DAY_MAX)
            };
            (month_end, day_end)
        };

        Self {
            begin: (year_begin, month_begin, day_begin),
            end: (year_end, month_end, day_end),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (yb, mb, db) = self.begin;
        let (ye, me, de) = self.end;
        write!(f, "{yb}/{mb}/{db}-{ye}/{me}/{de}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_date_range_end_not_before_begin() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..5000 {
            let range = DateRange::sample(&mut rng);
            assert!(range.begin <= range.end, "{range}");
            assert!(range.end.0 - range.begin.0 <= RANGE_MAX_SPAN_YEARS);
            assert!((1..=RANGE_DAY_MAX).contains(&range.begin.2));
            assert!((1..=RANGE_DAY_MAX).contains(&range.end.2));
        }
    }

    /// Replays `u32` draws so that each `gen_range` lands on a chosen offset
    struct ScriptedRng {
        draws: std::collections::VecDeque<u32>,
        calls: usize,
    }

    impl ScriptedRng {
        /// `steps` holds (offset, range size) per draw
        fn new(steps: &[(u32, u32)]) -> Self {
            // Widening multiply: high word is the offset, low word stays below the range
            let draws = steps
                .iter()
                .map(|&(offset, size)| {
                    (((offset as u64) << 32) + size as u64 - 1) / size as u64
                })
                .map(|v| v as u32)
                .collect();
            Self { draws, calls: 0 }
        }
    }

    impl rand::RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            self.calls += 1;
            self.draws.pop_front().unwrap_or(0)
        }

        fn next_u64(&mut self) -> u64 {
            self.next_u32() as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            dest.fill(0);
            Ok(())
        }
    }

    const YEARS: u32 = YEAR_MAX - YEAR_MIN + 1;

    #[test]
    fn test_date_range_all_lowest_draws() {
        let mut rng = ScriptedRng::new(&[]);
        let range = DateRange::sample(&mut rng);

        assert_eq!(range.to_string(), "1950/1/1-1950/1/1");
        assert_eq!(rng.calls, 6);
    }

    #[test]
    fn test_date_range_same_month_end_day_starts_at_begin_day() {
        let mut rng = ScriptedRng::new(&[
            (0, YEARS),
            (0, 12),
            (19, RANGE_DAY_MAX),
            (0, RANGE_MAX_SPAN_YEARS + 1),
            (0, 12),
            (0, RANGE_DAY_MAX - 19),
        ]);
        let range = DateRange::sample(&mut rng);

        assert_eq!(range.to_string(), "1950/1/20-1950/1/20");
        assert_eq!(rng.calls, 6);
    }

    #[test]
    fn test_date_range_same_year_end_month_starts_at_begin_month() {
        let mut rng = ScriptedRng::new(&[
            (10, YEARS),
            (4, 12),
            (14, RANGE_DAY_MAX),
            (0, RANGE_MAX_SPAN_YEARS + 1),
            (2, 8),
            (2, RANGE_DAY_MAX),
        ]);
        let range = DateRange::sample(&mut rng);

        // End month drawn from 5..=12, end day from 1..=28 once the month moved on
        assert_eq!(range.to_string(), "1960/5/15-1960/7/3");
    }

    #[test]
    fn test_date_range_later_year_draws_month_then_day() {
        let mut rng = ScriptedRng::new(&[
            (0, YEARS),
            (5, 12),
            (0, RANGE_DAY_MAX),
            (1, RANGE_MAX_SPAN_YEARS + 1),
            (2, 12),
            (9, RANGE_DAY_MAX),
        ]);
        let range = DateRange::sample(&mut rng);

        assert_eq!(range.to_string(), "1950/6/1-1951/3/10");
        assert_eq!(rng.calls, 6);
    }

    #[test]
    fn test_date_range_format() {
        let range = DateRange {
            begin: (2001, 3, 9),
            end: (2002, 1, 28),
        };
        assert_eq!(range.to_string(), "2001/3/9-2002/1/28");
    }

    #[test]
    fn test_layout_slash_separated() {
        let mut rng = StdRng::seed_from_u64(1);
        let value = DateLayout::MONTH_SLASH_DAY_SLASH_YEAR.sample(&mut rng);
        let parts: Vec<u32> = value.split('/').map(|p| p.parse().unwrap()).collect();

        assert_eq!(parts.len(), 3);
        assert!((1..=12).contains(&parts[0]));
        assert!((1..=DAY_MAX).contains(&parts[1]));
        assert!((YEAR_MIN..=YEAR_MAX).contains(&parts[2]));
    }

    #[test]
    fn test_layout_space_separated() {
        let mut rng = StdRng::seed_from_u64(2);
        let value = DateLayout::DAY_MONTH_YEAR.sample(&mut rng);
        let parts: Vec<u32> = value.split(' ').map(|p| p.parse().unwrap()).collect();

        assert_eq!(parts.len(), 3);
        assert!((1..=DAY_MAX).contains(&parts[0]));
        assert!((1..=12).contains(&parts[1]));
    }

    #[test]
    fn test_year_digits() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let four = sample_year_digits(4, &mut rng);
            let year: u32 = four.parse().unwrap();
            assert!((YEAR_MIN..=YEAR_MAX).contains(&year));

            assert_eq!(sample_year_digits(2, &mut rng).len(), 2);
            assert_eq!(sample_year_digits(9, &mut rng).len(), 4);
        }
    }
}
