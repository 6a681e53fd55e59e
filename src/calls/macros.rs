//! Item macros that wrap function and method bodies with call logging.
//!
//! ```ignore
//! layerlog::logged_fn! {
//!     pub fn checksum(data: &[u8], seed: u32) -> u32 {
//!         data.iter().fold(seed, |acc, b| acc.rotate_left(5) ^ u32::from(*b))
//!     }
//! }
//!
//! layerlog::logged_impl! {
//!     impl Store {
//!         const CAPACITY: usize = 64;
//!
//!         pub fn put(&mut self, key: String, value: u64) -> Result<(), StoreError> { ... }
//!         pub fn get(&self, key: &str) -> Option<u64> { ... }
//!     }
//! }
//! ```
//!
//! Parameters must be plain `name: Type` bindings (the receiver may be
//! `self`, `mut self`, `&self` or `&mut self`) and every parameter must
//! implement `Debug`. A `Result<T, E>` return is logged as a failure on `Err`,
//! with the error's `Display` text when `E: Display` and its `Debug` text
//! otherwise; any other return type must implement `Debug`.
//!
//! Generic functions, `const fn`, `async fn`, `unsafe fn`, `extern fn` and
//! `impl Trait` returns are not supported: the item is rejected with "no rules
//! expected the token". A `const fn` cannot log, so keep it outside the macro.

/// Wrap one or more free functions with call logging.
///
/// Each function is named `module_path::function` in the log.
#[macro_export]
macro_rules! logged_fn {
    ($($items:tt)*) => {
        $crate::__logged_items!([] $($items)*);
    };
}

/// Wrap every function of an inherent `impl` block with call logging.
///
/// Associated constants are emitted unchanged. Methods a type gets from trait
/// default implementations are not part of the block and stay unwrapped.
#[macro_export]
macro_rules! logged_impl {
    (impl $owner:ty { $($items:tt)* }) => {
        impl $owner {
            $crate::__logged_items!([$owner] $($items)*);
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __logged_items {
    ([$($owner:ty)?]) => {};

    (
        [$($owner:ty)?]
        $(#[$meta:meta])* $vis:vis const $cname:ident : $cty:ty = $value:expr;
        $($rest:tt)*
    ) => {
        $(#[$meta])* $vis const $cname: $cty = $value;
        $crate::__logged_items!([$($owner)?] $($rest)*);
    };

    (
        [$($owner:ty)?]
        $(#[$meta:meta])* $vis:vis fn $name:ident ( $($arg:ident : $argty:ty),* $(,)? )
        $(-> $ret:ty)? $body:block
        $($rest:tt)*
    ) => {
        $crate::__logged_item!(
            [$($owner)?] [$(#[$meta])*] [$vis] $name [] [$($arg : $argty),*] [$($ret)?] $body
        );
        $crate::__logged_items!([$($owner)?] $($rest)*);
    };

    (
        [$($owner:ty)?]
        $(#[$meta:meta])* $vis:vis fn $name:ident ( &mut $this:tt $(, $arg:ident : $argty:ty)* $(,)? )
        $(-> $ret:ty)? $body:block
        $($rest:tt)*
    ) => {
        $crate::__logged_item!(
            [$($owner)?] [$(#[$meta])*] [$vis] $name [&mut $this,] [$($arg : $argty),*] [$($ret)?] $body
        );
        $crate::__logged_items!([$($owner)?] $($rest)*);
    };

    (
        [$($owner:ty)?]
        $(#[$meta:meta])* $vis:vis fn $name:ident ( & $this:tt $(, $arg:ident : $argty:ty)* $(,)? )
        $(-> $ret:ty)? $body:block
        $($rest:tt)*
    ) => {
        $crate::__logged_item!(
            [$($owner)?] [$(#[$meta])*] [$vis] $name [&$this,] [$($arg : $argty),*] [$($ret)?] $body
        );
        $crate::__logged_items!([$($owner)?] $($rest)*);
    };

    (
        [$($owner:ty)?]
        $(#[$meta:meta])* $vis:vis fn $name:ident ( mut $this:tt $(, $arg:ident : $argty:ty)* $(,)? )
        $(-> $ret:ty)? $body:block
        $($rest:tt)*
    ) => {
        $crate::__logged_item!(
            [$($owner)?] [$(#[$meta])*] [$vis] $name [mut $this,] [$($arg : $argty),*] [$($ret)?] $body
        );
        $crate::__logged_items!([$($owner)?] $($rest)*);
    };

    (
        [$($owner:ty)?]
        $(#[$meta:meta])* $vis:vis fn $name:ident ( $this:tt $(, $arg:ident : $argty:ty)* $(,)? )
        $(-> $ret:ty)? $body:block
        $($rest:tt)*
    ) => {
        $crate::__logged_item!(
            [$($owner)?] [$(#[$meta])*] [$vis] $name [$this,] [$($arg : $argty),*] [$($ret)?] $body
        );
        $crate::__logged_items!([$($owner)?] $($rest)*);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __logged_item {
    (
        [$($owner:ty)?] [$(#[$meta:meta])*] [$vis:vis] $name:ident
        [$($recv:tt)*] [$($arg:ident : $argty:ty),*] [$($ret:ty)?] $body:block
    ) => {
        $(#[$meta])*
        $vis fn $name($($recv)* $($arg: $argty),*) $(-> $ret)? {
            let __layerlog_logger = $crate::global();
            let __layerlog_frame = __layerlog_logger.enter(
                concat!(module_path!(), $("::", stringify!($owner),)? "::", stringify!($name)),
                &$crate::ArgList(&[$((stringify!($arg), &$arg as &dyn ::core::fmt::Debug)),*]),
            );
            #[allow(clippy::redundant_closure_call)]
            let __layerlog_result = (|| $(-> $ret)? { $body })();
            {
                #[allow(unused_imports)]
                use $crate::calls::outcome::{
                    DebugResultOutcome as _, ResultOutcome as _, ValueOutcome as _,
                };
                __layerlog_frame.finish((&__layerlog_result).layered_outcome());
            }
            __layerlog_result
        }
    };
}
