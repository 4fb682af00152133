//! Call-site metadata: the function and line a log call came from.
//!
//! Two ways to capture it:
//!
//! - [`callsite!`](crate::callsite) expands at the call site and records the
//!   enclosing function's name and the source line. The logging macros use it.
//! - [`CallSite::caller`] is `#[track_caller]`; the function slot holds the
//!   caller's file stem because Rust exposes no function name at runtime.

use std::panic::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub function: &'static str,
    pub line: u32,
}

impl CallSite {
    pub const fn new(function: &'static str, line: u32) -> Self {
        Self { function, line }
    }

    /// Capture the location of whoever called the `#[track_caller]` chain.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            function: file_stem(location.file()),
            line: location.line(),
        }
    }
}

/// Last path segment of a type name produced by [`function_name!`](crate::function_name),
/// with the helper `::f` suffix and any closure segments removed.
///
/// `"app::server::run::f"` becomes `"run"`; `"app::main::{{closure}}::f"`
/// becomes `"main"`.
pub fn short_function_name(type_name: &'static str) -> &'static str {
    let mut path = type_name.strip_suffix("::f").unwrap_or(type_name);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path.rsplit("::").next().unwrap_or(path)
}

fn file_stem(file: &'static str) -> &'static str {
    let name = file.rsplit(['/', '\\']).next().unwrap_or(file);
    name.strip_suffix(".rs").unwrap_or(name)
}

/// Name of the enclosing function, without its module path.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::callsite::short_function_name(type_name_of(f))
    }};
}

/// [`CallSite`] for the current function and line.
#[macro_export]
macro_rules! callsite {
    () => {
        $crate::CallSite::new($crate::function_name!(), ::std::line!())
    };
}
