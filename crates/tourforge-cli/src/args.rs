//! Command-line arguments.

use std::ffi::OsString;

use clap::Parser;
use tourforge_core::clamp_city_count;

/// Number of cities routed when no count is given.
pub const DEFAULT_CITY_COUNT: usize = 10;

/// Exact tour search over the built-in distance table.
#[derive(Debug, Default, Parser)]
#[command(name = "tourforge", version, about)]
pub struct Cli {
    /// Number of cities to route, clamped to 5..=15
    #[arg(
        value_name = "N",
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub cities: Option<OsString>,

    #[arg(
        hide = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub ignored: Vec<OsString>,
}

impl Cli {
    /// Returns the clamped number of cities to route.
    pub fn city_count(&self) -> usize {
        let requested = self.cities.as_ref().map_or(DEFAULT_CITY_COUNT, |arg| {
            parse_city_count(&arg.to_string_lossy())
        });
        clamp_city_count(requested)
    }
}

/// Reads the leading decimal integer of `arg`.
///
/// Leading whitespace and a sign are accepted; anything after the digits is
/// ignored. Text without leading digits and negative values read as 0, and
/// values too large for `usize` saturate.
pub fn parse_city_count(arg: &str) -> usize {
    let trimmed = arg.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0usize, |acc, digit| {
            acc.saturating_mul(10).saturating_add(usize::from(digit - b'0'))
        });

    if negative {
        0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city_count_of(args: &[&str]) -> usize {
        let argv = std::iter::once("tourforge").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap().city_count()
    }

    #[test]
    fn test_parse_leading_digits() {
        assert_eq!(parse_city_count("12"), 12);
        assert_eq!(parse_city_count("7x"), 7);
        assert_eq!(parse_city_count("  8"), 8);
        assert_eq!(parse_city_count("+9"), 9);
        assert_eq!(parse_city_count("abc"), 0);
        assert_eq!(parse_city_count(""), 0);
        assert_eq!(parse_city_count("-4"), 0);
        assert_eq!(parse_city_count("99999999999999999999999999"), usize::MAX);
    }

    #[test]
    fn test_default_city_count() {
        assert_eq!(city_count_of(&[]), DEFAULT_CITY_COUNT);
        assert_eq!(Cli::default().city_count(), DEFAULT_CITY_COUNT);
    }

    #[test]
    fn test_city_count_is_clamped() {
        assert_eq!(city_count_of(&["12"]), 12);
        assert_eq!(city_count_of(&["3"]), 5);
        assert_eq!(city_count_of(&["40"]), 15);
        assert_eq!(city_count_of(&["-3"]), 5);
        assert_eq!(city_count_of(&["many"]), 5);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_argument_is_clamped() {
        use std::os::unix::ffi::OsStringExt;

        let argv = [
            OsString::from("tourforge"),
            OsString::from_vec(vec![0xff, b'9']),
        ];
        assert_eq!(Cli::try_parse_from(argv).unwrap().city_count(), 5);

        let argv = [
            OsString::from("tourforge"),
            OsString::from_vec(vec![b'9', 0xff]),
        ];
        assert_eq!(Cli::try_parse_from(argv).unwrap().city_count(), 9);
    }

    #[test]
    fn test_extra_arguments_ignored() {
        assert_eq!(city_count_of(&["8", "extra", "--flag"]), 8);
    }
}
