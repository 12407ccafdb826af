/// Returns the version string reported by the binaries of this workspace.
pub const fn portfolio_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Asserts that an expression matches a pattern, printing the value on
/// mismatch.
///
/// #### Example
/// ```rust
/// # use portfolio_utils::assert_matches;
/// let result: Result<u8, &str> = Err("nope");
/// assert_matches!(result, Err("nope"));
/// assert_matches!(Some(7), Some(x) if *x > 3);
/// ```
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match ($expr) {
            $pat => (),
            val => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $pred:expr) => {{
        let val = $expr;
        match (&val) {
            $pat if $pred => (),
            #[allow(unused_variables)]
            $pat => ::core::panic!(
                "Assertion failed: Value {val:?} does not match predicate {}",
                ::core::stringify!($pred)
            ),
            _ => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    }};
}
