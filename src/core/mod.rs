/// Declares a lazily compiled `static` regex. Patterns are literals, so a
/// failure to compile is a programming error.
macro_rules! regex {
    ($name:ident, $pattern:literal) => {
        static $name: std::sync::LazyLock<regex::Regex> = std::sync::LazyLock::new(|| {
            regex::Regex::new($pattern).expect(concat!("invalid pattern ", $pattern))
        });
    };
}

pub mod ajax;
pub mod collections;
pub mod dom;
pub mod form;
pub mod format;
pub mod rate_limit;
pub mod storage;
pub mod text;
pub mod validators;
pub mod widgets;

pub use ajax::AjaxClient;
pub use format::{Formatter, NumberLocale};
pub use rate_limit::{Debouncer, Throttle};
pub use storage::Storage;
pub use validators::ValidatorKind;
