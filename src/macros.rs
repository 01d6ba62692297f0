/// Creates an [`Error`](crate::Error) at the current location.
///
/// The first argument is the error code, the rest are interpreted like the
/// arguments of [`format!()`]. Messages without interpolated arguments are
/// stored without allocating. The origin includes the enclosing function.
///
/// [`format!()`]: alloc::format
///
/// # Examples
///
/// ```
/// use faultline::error;
///
/// let error = error!(404, "User {} not found", 17);
/// assert_eq!(error.code(), 404);
/// assert_eq!(error.message(), "User 17 not found");
/// assert!(error.origin().function.is_some());
/// ```
#[macro_export]
macro_rules! error {
    ($code:expr, $($arg:tt)+) => {
        $crate::__private::format_error(
            $code,
            $crate::__private::format_args!($($arg)+),
            $crate::location!(),
        )
    };
}

/// Return early with a new error.
///
/// Takes the same arguments as [`error!()`](crate::error!). The enclosing
/// function may return any `Result<T, E>` where `E: From<Error>`.
///
/// # Examples
///
/// ```
/// use faultline::bail;
///
/// fn divide(a: i32, b: i32) -> faultline::Result<i32> {
///     if b == 0 {
///         bail!(101, "Division by zero");
///     }
///     Ok(a / b)
/// }
///
/// assert_eq!(divide(10, 2).unwrap(), 5);
/// assert_eq!(divide(10, 0).unwrap_err().code(), 101);
/// ```
#[macro_export]
macro_rules! bail {
    ($($args:tt)+) => {
        return $crate::__private::FromError::from_error($crate::error!($($args)+))
    };
}

/// Yields the success value of a `Result`, or returns its error from the
/// enclosing function.
///
/// On failure the error is converted into an [`Error`](crate::Error), the
/// source text of the expression is recorded (unless an earlier site already
/// recorded one) and the current location is appended to its trace. Works as
/// a statement as well as an expression.
///
/// # Examples
///
/// ```
/// use faultline::{bail, check};
///
/// fn parse_id(raw: i32) -> faultline::Result<i32> {
///     if raw < 1000 {
///         bail!(500, "ID too low");
///     }
///     Ok(raw)
/// }
///
/// fn process(raw: i32) -> faultline::Result<()> {
///     let id = check!(parse_id(raw));
///     assert!(id >= 1000);
///     Ok(())
/// }
///
/// let error = process(100).unwrap_err();
/// assert_eq!(error.code(), 500);
/// assert_eq!(error.expression(), Some("parse_id(raw)"));
/// ```
#[macro_export]
macro_rules! check {
    ($expr:expr $(,)?) => {
        match $expr {
            $crate::__private::Ok(value) => value,
            $crate::__private::Err(error) => {
                return $crate::__private::FromError::from_error($crate::__private::propagate(
                    error,
                    $crate::__private::stringify!($expr),
                    $crate::location!(),
                ));
            }
        }
    };
}

/// Like [`check!()`](crate::check!), naming the result type the error is
/// returned as.
///
/// Useful where the return type cannot be inferred, such as in closures.
///
/// ```
/// use faultline::{check_into, error};
///
/// let load = || {
///     let value: u8 = check_into!(faultline::Result<u8>, Err(error!(3, "empty")));
///     Ok(value)
/// };
/// assert_eq!(load().unwrap_err().code(), 3);
/// ```
#[macro_export]
macro_rules! check_into {
    ($target:ty, $expr:expr $(,)?) => {
        match $expr {
            $crate::__private::Ok(value) => value,
            $crate::__private::Err(error) => {
                return <$target as $crate::__private::FromError>::from_error(
                    $crate::__private::propagate(
                        error,
                        $crate::__private::stringify!($expr),
                        $crate::location!(),
                    ),
                );
            }
        }
    };
}

/// Like [`check!()`](crate::check!), additionally wrapping the error with a
/// formatted context.
///
/// The context is only formatted on failure.
///
/// ```
/// use faultline::{bail, check_ctx};
///
/// fn connect() -> faultline::Result<()> {
///     bail!(503, "Database Unavailable");
/// }
///
/// fn login(user: &str) -> faultline::Result<()> {
///     check_ctx!(connect(), "Login Failed for {user}");
///     Ok(())
/// }
///
/// let error = login("ada").unwrap_err();
/// assert_eq!(error.code(), 503);
/// assert_eq!(
///     error.message(),
///     "Database Unavailable\n  | context: Login Failed for ada"
/// );
/// ```
#[macro_export]
macro_rules! check_ctx {
    ($expr:expr, $($arg:tt)+) => {
        match $expr {
            $crate::__private::Ok(value) => value,
            $crate::__private::Err(error) => {
                return $crate::__private::FromError::from_error(
                    $crate::__private::propagate_with_context(
                        error,
                        $crate::__private::stringify!($expr),
                        $crate::location!(),
                        $crate::__private::format_args!($($arg)+),
                    ),
                );
            }
        }
    };
}

/// Returns a new error from the enclosing function unless a condition holds.
///
/// The error records the condition's source text as its expression.
///
/// ```
/// use faultline::ensure;
///
/// fn withdraw(balance: u32, amount: u32) -> faultline::Result<u32> {
///     ensure!(amount <= balance, 402, "Insufficient funds: {amount} > {balance}");
///     Ok(balance - amount)
/// }
///
/// assert_eq!(withdraw(10, 3).unwrap(), 7);
/// let error = withdraw(1, 3).unwrap_err();
/// assert_eq!(error.message(), "Insufficient funds: 3 > 1");
/// assert_eq!(error.expression(), Some("amount <= balance"));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $code:expr, $($arg:tt)+) => {
        if !$cond {
            return $crate::__private::FromError::from_error($crate::__private::condition_failed(
                $code,
                $crate::__private::format_args!($($arg)+),
                $crate::__private::stringify!($cond),
                $crate::location!(),
            ));
        }
    };
}

/// Like [`ensure!()`](crate::ensure!), naming the result type the error is
/// returned as.
#[macro_export]
macro_rules! ensure_into {
    ($target:ty, $cond:expr, $code:expr, $($arg:tt)+) => {
        if !$cond {
            return <$target as $crate::__private::FromError>::from_error(
                $crate::__private::condition_failed(
                    $code,
                    $crate::__private::format_args!($($arg)+),
                    $crate::__private::stringify!($cond),
                    $crate::location!(),
                ),
            );
        }
    };
}

/// Yields the success value of a `Result`, or `default` on failure.
///
/// The error is dropped silently. `default` is only evaluated on failure.
///
/// ```
/// use faultline::{error, try_or};
///
/// let port: u16 = try_or!("http".parse::<u16>(), 8080);
/// assert_eq!(port, 8080);
///
/// let failed: faultline::Result<u32> = Err(error!(1, "offline"));
/// assert_eq!(try_or!(failed, 0), 0);
/// ```
#[macro_export]
macro_rules! try_or {
    ($expr:expr, $default:expr $(,)?) => {
        match $expr {
            $crate::__private::Ok(value) => value,
            $crate::__private::Err(_) => $default,
        }
    };
}

/// Yields the value of an `Option`, or returns a new error from the enclosing
/// function for `None`.
///
/// ```
/// use faultline::try_some;
///
/// fn first_word(line: &str) -> faultline::Result<&str> {
///     let word = try_some!(line.split_whitespace().next(), 400, "Empty line");
///     Ok(word)
/// }
///
/// assert_eq!(first_word("hello world").unwrap(), "hello");
/// assert_eq!(first_word("   ").unwrap_err().code(), 400);
/// ```
#[macro_export]
macro_rules! try_some {
    ($option:expr, $code:expr, $($arg:tt)+) => {
        match $option {
            $crate::__private::Some(value) => value,
            $crate::__private::None => {
                return $crate::__private::FromError::from_error(
                    $crate::__private::condition_failed(
                        $code,
                        $crate::__private::format_args!($($arg)+),
                        $crate::__private::stringify!($option),
                        $crate::location!(),
                    ),
                );
            }
        }
    };
}

/// Yields the success value of a `Result`, or logs the error and aborts the
/// process.
///
/// See [`fatal`](crate::fatal::fatal). Use only where failure means a broken
/// invariant.
///
/// ```
/// let value: u8 = faultline::unwrap!("42".parse::<u8>());
/// assert_eq!(value, 42);
/// ```
#[macro_export]
macro_rules! unwrap {
    ($expr:expr $(,)?) => {
        $crate::expect!($expr, "unwrap() failed")
    };
}

/// Like [`unwrap!()`](crate::unwrap!), with a custom panic message.
///
/// ```
/// let value: u8 = faultline::expect!("7".parse::<u8>(), "config is validated");
/// assert_eq!(value, 7);
/// ```
#[macro_export]
macro_rules! expect {
    ($expr:expr, $message:expr $(,)?) => {
        match $expr {
            $crate::__private::Ok(value) => value,
            $crate::__private::Err(error) => $crate::__private::unwrap_failed(
                error,
                $crate::__private::stringify!($expr),
                $message,
                $crate::location!(),
            ),
        }
    };
}

/// Creates an [`Error`](crate::Error) whose message is followed by the
/// description of the last operating system error.
///
/// The operating system error is read before the code and message
/// arguments are evaluated, so arguments making system calls of their own
/// do not replace it.
///
/// ```
/// let error = faultline::system_error!(5, "Failed to open {}", "data.bin");
/// assert!(error.message().starts_with("Failed to open data.bin: "));
/// ```
#[cfg(feature = "std")]
#[macro_export]
macro_rules! system_error {
    ($code:expr, $($arg:tt)+) => {{
        let os_error = $crate::__private::last_os_error();
        $crate::__private::system_error(
            &os_error,
            $code,
            $crate::__private::format_args!($($arg)+),
            $crate::location!(),
        )
    }};
}

/// Yields the success value of a [`std::io::Result`], or returns a system
/// error from the enclosing function.
///
/// The error code is the raw OS error number, or `-1` for I/O errors without
/// one. The message is followed by the description of the I/O error.
///
/// ```
/// use faultline::check_sys;
///
/// fn read(path: &str) -> faultline::Result<String> {
///     Ok(check_sys!(std::fs::read_to_string(path), "Failed to read {path}"))
/// }
///
/// let error = read("/definitely/not/here").unwrap_err();
/// assert!(error.message().starts_with("Failed to read /definitely/not/here: "));
/// ```
#[cfg(feature = "std")]
#[macro_export]
macro_rules! check_sys {
    ($expr:expr $(,)?) => {
        $crate::check_sys!($expr, "system call failed")
    };
    ($expr:expr, $($arg:tt)+) => {
        match $expr {
            $crate::__private::Ok(value) => value,
            $crate::__private::Err(error) => {
                return $crate::__private::FromError::from_error(
                    $crate::__private::propagate_system(
                        &error,
                        $crate::__private::format_args!($($arg)+),
                        $crate::__private::stringify!($expr),
                        $crate::location!(),
                    ),
                );
            }
        }
    };
}
