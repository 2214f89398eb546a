use colored::{
    Color,
    Colorize,
};

/// Format a key/value pair with optional color overrides.
///
/// Requires the `colored::Colorize` trait to be in scope.
///
/// Examples, where `key_color` and `value_color` are `LogColor` values:
/// - fmt_kv!(key, value)
/// - fmt_kv!(key, value, key_color)
/// - fmt_kv!(key, value, key_color, value_color)
#[macro_export]
macro_rules! fmt_kv {
    ($key:expr, $value:expr $(,)?) => {
        $crate::fmt_kv!(
            $key,
            $value,
            $crate::LogColor::Highlight,
            $crate::LogColor::FadedGray
        )
    };
    ($key:expr, $value:expr, $key_color:expr $(,)?) => {
        $crate::fmt_kv!($key, $value, $key_color, $crate::LogColor::FadedGray)
    };
    ($key:expr, $value:expr, $key_color:expr, $value_color:expr $(,)?) => {{
        let __k = ::std::string::ToString::to_string(&$key);
        let __v = ::std::string::ToString::to_string(&$value);
        ::std::format!("{}: {}", __k.color($key_color), __v.color($value_color))
    }};
}

/// Prints a key/value pair with optional color overrides. Same arguments as [`fmt_kv!`].
#[macro_export]
macro_rules! print_kv {
    ($key:expr, $value:expr $(,)?) => {
        ::std::println!("{}", $crate::fmt_kv!($key, $value))
    };
    ($key:expr, $value:expr, $key_color:expr $(,)?) => {
        ::std::println!("{}", $crate::fmt_kv!($key, $value, $key_color))
    };
    ($key:expr, $value:expr, $key_color:expr, $value_color:expr $(,)?) => {
        ::std::println!(
            "{}",
            $crate::fmt_kv!($key, $value, $key_color, $value_color)
        )
    };
}

#[derive(Clone, Copy, Debug)]
pub enum LogColor {
    Highlight,
    Error,
    Warning,
    Header,
    Info,
    FadedGray,
}

#[rustfmt::skip]
impl From<LogColor> for Color {
    fn from(value: LogColor) -> Color {
        match value {
            LogColor::Highlight  => Color::TrueColor { r: 255, g: 215, b: 87  },
            LogColor::Error      => Color::TrueColor { r: 255, g: 0,   b: 45  },
            LogColor::Warning    => Color::TrueColor { r: 180, g: 105, b: 0   },
            LogColor::Header     => Color::TrueColor { r: 0,   g: 255, b: 0   },
            LogColor::Info       => Color::TrueColor { r: 0,   g: 95,  b: 255 },
            LogColor::FadedGray  => Color::TrueColor { r: 95,  g: 95,  b: 95  },
        }
    }
}

pub fn fmt_header(title: &str) -> String {
    format!("── {title} ──").color(LogColor::Header).to_string()
}

pub fn log_header(title: &str) {
    println!("{}", fmt_header(title));
}

/// Formats lamports as SOL with full precision, e.g. `0.002039280 SOL`.
pub fn fmt_sol(lamports: u64) -> String {
    format!("{}.{:09} SOL", lamports / 1_000_000_000, lamports % 1_000_000_000)
}

/// Prints a compact summary of a name and its derived accounts.
pub fn log_name_accounts(name: &str, name_account: &impl ToString, state: &impl ToString) {
    log_header(name);
    print_kv!("Name account", name_account.to_string(), LogColor::Info);
    print_kv!("Auction state", state.to_string(), LogColor::Info);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_and_print_kv() {
        colored::control::set_override(false);
        assert_eq!(fmt_kv!("hello", "world"), "hello: world");
        assert_eq!(fmt_kv!("lamports", 5, LogColor::Info), "lamports: 5");
        let _ = fmt_kv!("hello", "world", LogColor::Info);
        let _ = fmt_kv!("hello", "world", LogColor::Info, LogColor::Highlight);
        print_kv!("hello", "world");
        print_kv!("hello", "world", LogColor::Info);
        print_kv!("hello", "world", LogColor::Info, LogColor::Highlight);
    }

    #[test]
    fn sol_formatting() {
        assert_eq!(fmt_sol(0), "0.000000000 SOL");
        assert_eq!(fmt_sol(2_039_280), "0.002039280 SOL");
        assert_eq!(fmt_sol(12_500_000_000), "12.500000000 SOL");
    }

    #[test]
    fn header_contains_title() {
        colored::control::set_override(false);
        assert_eq!(fmt_header("bonfida"), "── bonfida ──");
    }
}
