//! Source code locations captured when errors are created or propagated.
//!
//! A [`Location`] records the file, line and column of a call site, and
//! optionally the name of the enclosing function. Locations created through
//! the [`location!()`] macro carry the function name; locations created via
//! [`Location::caller`] (from `#[track_caller]` methods) do not, since the
//! compiler does not expose it.
//!
//! ```rust
//! use faultline::location;
//!
//! fn load() -> faultline::location::Location {
//!     location!()
//! }
//!
//! let here = load();
//! assert!(here.function.unwrap().ends_with("load"));
//! assert_eq!(here.file, file!());
//! ```
//!
//! [`location!()`]: crate::location!

use core::fmt;

/// Name printed for locations whose enclosing function is unknown.
pub const UNKNOWN_FUNCTION: &str = "unknown";

/// Source code location information.
///
/// Represents the file, line, column and (when known) the enclosing function
/// of a point in the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// The source file path.
    pub file: &'static str,
    /// The line number.
    pub line: u32,
    /// The column number.
    pub column: u32,
    /// The fully qualified name of the enclosing function, if known.
    pub function: Option<&'static str>,
}

impl Location {
    /// Creates a location without function information.
    #[must_use]
    pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self {
            file,
            line,
            column,
            function: None,
        }
    }

    /// Creates a location that also names the enclosing function.
    #[must_use]
    pub const fn with_function(
        file: &'static str,
        line: u32,
        column: u32,
        function: &'static str,
    ) -> Self {
        Self {
            file,
            line,
            column,
            function: Some(function),
        }
    }

    /// Returns the location of the caller, as reported by
    /// [`core::panic::Location::caller()`].
    ///
    /// Only meaningful when invoked from a `#[track_caller]` function.
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        let location = core::panic::Location::caller();
        Self::new(location.file(), location.line(), location.column())
    }

    /// The function name, or [`UNKNOWN_FUNCTION`] if it was not captured.
    #[must_use]
    pub fn function_or_unknown(&self) -> &'static str {
        self.function.unwrap_or(UNKNOWN_FUNCTION)
    }
}

/// Formats as `function (file:line)`.
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}:{})",
            self.function_or_unknown(),
            self.file,
            self.line
        )
    }
}

/// Strips the helper item suffix produced by [`function_name!()`] and any
/// trailing closure segments.
///
/// [`function_name!()`]: crate::function_name!
#[doc(hidden)]
#[must_use]
pub fn trim_function_name(name: &'static str) -> &'static str {
    let mut name = name.strip_suffix("::__here").unwrap_or(name);
    while let Some(stripped) = name.strip_suffix("::{{closure}}") {
        name = stripped;
    }
    name
}

/// Expands to the fully qualified name of the enclosing function as a
/// `&'static str`.
///
/// Closures report the name of the function they are defined in.
///
/// ```rust
/// fn parse_header() -> &'static str {
///     faultline::function_name!()
/// }
///
/// assert!(parse_header().ends_with("::parse_header"));
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::location::trim_function_name(__type_name_of(__here))
    }};
}

/// Expands to a [`Location`] for the current file, line, column and
/// enclosing function.
///
/// [`Location`]: crate::location::Location
#[macro_export]
macro_rules! location {
    () => {
        $crate::location::Location::with_function(
            ::core::file!(),
            ::core::line!(),
            ::core::column!(),
            $crate::function_name!(),
        )
    };
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn test_function_name_of_plain_fn() {
        fn lookup_user() -> &'static str {
            crate::function_name!()
        }
        assert!(lookup_user().ends_with("::lookup_user"));
    }

    #[test]
    fn test_function_name_inside_closure() {
        let name = (|| crate::function_name!())();
        assert!(name.ends_with("test_function_name_inside_closure"));
    }

    #[test]
    fn test_location_macro_captures_site() {
        let location = crate::location!();
        assert_eq!(location.file, file!());
        assert_eq!(location.line, line!() - 2);
        assert!(location.function.is_some());
    }

    #[test]
    fn test_display() {
        let location = Location::with_function("src/db.rs", 12, 5, "app::db::connect");
        assert_eq!(format!("{location}"), "app::db::connect (src/db.rs:12)");

        let anonymous = Location::new("src/db.rs", 40, 1);
        assert_eq!(format!("{anonymous}"), "unknown (src/db.rs:40)");
    }

    #[test]
    fn test_caller() {
        #[track_caller]
        fn site() -> Location {
            Location::caller()
        }
        let location = site();
        assert_eq!(location.file, file!());
        assert_eq!(location.line, line!() - 2);
        assert_eq!(location.function, None);
    }
}
