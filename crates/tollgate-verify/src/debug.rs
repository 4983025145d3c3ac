//! Every macro here mirrors one check and yields the same
//! `Result<(), Violation>`, so call sites read `debug_not_null!(x, "x")?;`.
//!
//! With `debug_assertions` or the `debug-checks` feature the macro calls the
//! check. Otherwise it yields `Ok(())` and its arguments sit behind
//! `if false`: still type-checked, never evaluated, and dropped by codegen.
//! The mode is fixed when this crate is compiled, not at the call site.

/// True when the `debug_*!` twins run their checks.
pub const fn debug_checks_enabled() -> bool {
    cfg!(any(debug_assertions, feature = "debug-checks"))
}

/// Debug-only twin of [`not_null`](crate::not_null).
#[cfg(any(debug_assertions, feature = "debug-checks"))]
#[macro_export]
macro_rules! debug_not_null {
    ($value:expr, $param_name:expr $(,)?) => {
        $crate::not_null($value, $param_name)
    };
}

/// Debug-only twin of [`not_null`](crate::not_null).
#[cfg(not(any(debug_assertions, feature = "debug-checks")))]
#[macro_export]
macro_rules! debug_not_null {
    ($value:expr, $param_name:expr $(,)?) => {{
        if false {
            let _ = $crate::not_null($value, $param_name);
        }
        ::core::result::Result::<(), $crate::Violation>::Ok(())
    }};
}

/// Debug-only twin of [`not_empty_str`](crate::not_empty_str).
#[cfg(any(debug_assertions, feature = "debug-checks"))]
#[macro_export]
macro_rules! debug_not_empty_str {
    ($value:expr, $param_name:expr $(,)?) => {
        $crate::not_empty_str($value, $param_name)
    };
}

/// Debug-only twin of [`not_empty_str`](crate::not_empty_str).
#[cfg(not(any(debug_assertions, feature = "debug-checks")))]
#[macro_export]
macro_rules! debug_not_empty_str {
    ($value:expr, $param_name:expr $(,)?) => {{
        if false {
            let _ = $crate::not_empty_str($value, $param_name);
        }
        ::core::result::Result::<(), $crate::Violation>::Ok(())
    }};
}

/// Debug-only twin of [`not_empty`](crate::not_empty).
#[cfg(any(debug_assertions, feature = "debug-checks"))]
#[macro_export]
macro_rules! debug_not_empty {
    ($collection:expr, $param_name:expr $(,)?) => {
        $crate::not_empty($collection, $param_name)
    };
}

/// Debug-only twin of [`not_empty`](crate::not_empty).
#[cfg(not(any(debug_assertions, feature = "debug-checks")))]
#[macro_export]
macro_rules! debug_not_empty {
    ($collection:expr, $param_name:expr $(,)?) => {{
        if false {
            let _ = $crate::not_empty($collection, $param_name);
        }
        ::core::result::Result::<(), $crate::Violation>::Ok(())
    }};
}

/// Debug-only twin of [`is_strictly_positive`](crate::is_strictly_positive).
#[cfg(any(debug_assertions, feature = "debug-checks"))]
#[macro_export]
macro_rules! debug_is_strictly_positive {
    ($value:expr, $param_name:expr $(,)?) => {
        $crate::is_strictly_positive($value, $param_name)
    };
}

/// Debug-only twin of [`is_strictly_positive`](crate::is_strictly_positive).
#[cfg(not(any(debug_assertions, feature = "debug-checks")))]
#[macro_export]
macro_rules! debug_is_strictly_positive {
    ($value:expr, $param_name:expr $(,)?) => {{
        if false {
            let _ = $crate::is_strictly_positive($value, $param_name);
        }
        ::core::result::Result::<(), $crate::Violation>::Ok(())
    }};
}

/// Debug-only twin of [`is_strictly_in_range`](crate::is_strictly_in_range).
#[cfg(any(debug_assertions, feature = "debug-checks"))]
#[macro_export]
macro_rules! debug_is_strictly_in_range {
    ($value:expr, $lower_limit:expr, $upper_limit:expr, $param_name:expr $(,)?) => {
        $crate::is_strictly_in_range($value, $lower_limit, $upper_limit, $param_name)
    };
}

/// Debug-only twin of [`is_strictly_in_range`](crate::is_strictly_in_range).
#[cfg(not(any(debug_assertions, feature = "debug-checks")))]
#[macro_export]
macro_rules! debug_is_strictly_in_range {
    ($value:expr, $lower_limit:expr, $upper_limit:expr, $param_name:expr $(,)?) => {{
        if false {
            let _ = $crate::is_strictly_in_range($value, $lower_limit, $upper_limit, $param_name);
        }
        ::core::result::Result::<(), $crate::Violation>::Ok(())
    }};
}

/// Debug-only twin of [`is_instantiable`](crate::is_instantiable).
#[cfg(any(debug_assertions, feature = "debug-checks"))]
#[macro_export]
macro_rules! debug_is_instantiable {
    ($descriptor:expr, $param_name:expr $(,)?) => {
        $crate::is_instantiable($descriptor, $param_name)
    };
}

/// Debug-only twin of [`is_instantiable`](crate::is_instantiable).
#[cfg(not(any(debug_assertions, feature = "debug-checks")))]
#[macro_export]
macro_rules! debug_is_instantiable {
    ($descriptor:expr, $param_name:expr $(,)?) => {{
        if false {
            let _ = $crate::is_instantiable($descriptor, $param_name);
        }
        ::core::result::Result::<(), $crate::Violation>::Ok(())
    }};
}
