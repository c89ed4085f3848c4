//! Bar and label helpers shared by the text and HTML renderers.

use chrono::NaiveDate;

/// Character used to draw text bars.
const BAR_CHAR: char = '█';

/// Length of a bar for `value` when `max` fills `width` cells.
///
/// Non-zero values always get at least one cell.
pub fn scaled(value: usize, max: usize, width: usize) -> usize {
    if max == 0 || value == 0 {
        return 0;
    }
    ((value * width) / max).max(1)
}

/// A text bar of [`scaled`] length.
pub fn text_bar(value: usize, max: usize, width: usize) -> String {
    std::iter::repeat_n(BAR_CHAR, scaled(value, max, width)).collect()
}

/// `count` as a percentage of `total`, 0 when `total` is 0.
pub fn share(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 * 100.0 / total as f64
}

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 21st...
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// "1 title", "3 titles".
pub fn titles(n: usize) -> String {
    if n == 1 {
        "1 title".to_string()
    } else {
        format!("{n} titles")
    }
}

/// Long-form date, e.g. "September 25, 2021".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling() {
        assert_eq!(scaled(0, 10, 40), 0);
        assert_eq!(scaled(10, 10, 40), 40);
        assert_eq!(scaled(5, 10, 40), 20);
        assert_eq!(scaled(1, 1000, 40), 1);
        assert_eq!(scaled(3, 0, 40), 0);
        assert_eq!(text_bar(2, 4, 4).chars().count(), 2);
    }

    #[test]
    fn shares() {
        assert_eq!(share(1, 4), 25.0);
        assert_eq!(share(1, 0), 0.0);
    }

    #[test]
    fn ordinals() {
        let got: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 102].iter().map(|n| ordinal(*n)).collect();
        assert_eq!(got, vec!["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "102nd"]);
    }

    #[test]
    fn long_dates() {
        let date = NaiveDate::from_ymd_opt(2008, 1, 1).expect("date");
        assert_eq!(long_date(date), "January 1, 2008");
    }
}
