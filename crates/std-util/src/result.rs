/// Unwraps the `Err` of a `Result`, panicking with the `Ok` value otherwise.
///
/// Extra arguments are formatted into the panic message.
#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            Ok(value) => {
                #[allow(unused_mut)]
                let mut msg = format!("expected `Err`; actual=Ok({:?})", value);
                $( msg.push_str(&format!(", {}", format_args!($($t)*))); )?
                panic!("{}", msg);
            }
        }
    };
}

/// Unwraps the `Ok` of a `Result`, panicking with the error otherwise.
///
/// Extra arguments are formatted into the panic message.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Ok(value) => value,
            Err(e) => {
                #[allow(unused_mut)]
                let mut msg = format!("expected `Ok`; actual=Err({})", e);
                $( msg.push_str(&format!(", {}", format_args!($($t)*))); )?
                panic!("{}", msg);
            }
        }
    };
}
