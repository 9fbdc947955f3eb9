/// Unwraps a `Some`, panicking otherwise.
#[macro_export]
macro_rules! assert_some {
    ($e:expr) => {
        match $e {
            Some(value) => value,
            None => panic!("expected `Some`; actual=None"),
        }
    };
}

/// Asserts the expression evaluates to `None`.
#[macro_export]
macro_rules! assert_none {
    ($e:expr) => {
        match $e {
            None => {}
            Some(value) => panic!("expected `None`; actual=Some({:?})", value),
        }
    };
}
