//! Ordered extraction strategies
//!
//! A field is extracted by trying named strategies in order and taking the
//! first one that produces a value.

/// One named way of extracting a value from an input
pub struct Strategy<I: ?Sized, T> {
    /// Name used in logs
    pub name: &'static str,

    /// Extraction function; `None` means "not applicable here"
    pub run: fn(&I) -> Option<T>,
}

impl<I: ?Sized, T> Strategy<I, T> {
    /// Create a strategy
    pub const fn new(name: &'static str, run: fn(&I) -> Option<T>) -> Self {
        Self { name, run }
    }
}

/// Try each strategy in order and return the first success
///
/// # Examples
///
/// ```
/// use sudact_extractor::strategy::{first_match, Strategy};
///
/// let strategies: [Strategy<str, usize>; 2] = [
///     Strategy::new("digit", |s| s.find(|c: char| c.is_ascii_digit())),
///     Strategy::new("length", |s| Some(s.len())),
/// ];
/// assert_eq!(first_match("field", &strategies, "ab1"), Some(2));
/// assert_eq!(first_match("field", &strategies, "abc"), Some(3));
/// ```
pub fn first_match<I: ?Sized, T>(field: &str, strategies: &[Strategy<I, T>], input: &I) -> Option<T> {
    for strategy in strategies {
        if let Some(value) = (strategy.run)(input) {
            tracing::debug!(field, strategy = strategy.name, "strategy matched");
            return Some(value);
        }
    }
    tracing::debug!(field, "no strategy matched");
    None
}
