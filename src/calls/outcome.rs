//! How a finished call is reported.
//!
//! `Result` values are reported as a return or a failure depending on the
//! variant; every other value is a plain return. Generated code calls
//! `(&value).layered_outcome()` with the traits below in scope, and method
//! resolution picks the first that applies:
//!
//! 1. [`ResultOutcome`] for `Result<T, E: Display>` (by value on `&Result`),
//! 2. [`DebugResultOutcome`] for `Result<T, E: Debug>` (after autoref),
//! 3. [`ValueOutcome`] for anything `Debug` (after mutable autoref).
//!
//! Closure wrappers work on generic return types and use [`Reportable`]
//! instead.

use std::fmt;

/// Result of a wrapped call as seen by the logger.
#[derive(Clone, Copy)]
pub enum Outcome<'a> {
    Returned(&'a dyn fmt::Debug),
    Failed(&'a dyn fmt::Display),
    /// Failure whose error only implements `Debug`.
    FailedDebug(&'a dyn fmt::Debug),
}

impl<'a> Outcome<'a> {
    pub fn of_result<T: fmt::Debug, E: fmt::Display>(result: &'a Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Returned(value),
            Err(err) => Outcome::Failed(err),
        }
    }
}

impl fmt::Debug for Outcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Returned(value) => f.debug_tuple("Returned").field(value).finish(),
            Outcome::Failed(err) => f
                .debug_tuple("Failed")
                .field(&format_args!("{}", err))
                .finish(),
            Outcome::FailedDebug(err) => f.debug_tuple("FailedDebug").field(err).finish(),
        }
    }
}

pub trait ResultOutcome {
    fn layered_outcome(&self) -> Outcome<'_>;
}

impl<T: fmt::Debug, E: fmt::Display> ResultOutcome for Result<T, E> {
    fn layered_outcome(&self) -> Outcome<'_> {
        Outcome::of_result(self)
    }
}

pub trait DebugResultOutcome {
    fn layered_outcome(&self) -> Outcome<'_>;
}

impl<T: fmt::Debug, E: fmt::Debug> DebugResultOutcome for &Result<T, E> {
    fn layered_outcome(&self) -> Outcome<'_> {
        match *self {
            Ok(value) => Outcome::Returned(value),
            Err(err) => Outcome::FailedDebug(err),
        }
    }
}

pub trait ValueOutcome {
    fn layered_outcome(&mut self) -> Outcome<'_>;
}

impl<T: fmt::Debug + ?Sized> ValueOutcome for &T {
    fn layered_outcome(&mut self) -> Outcome<'_> {
        Outcome::Returned(&*self)
    }
}

/// Return types the closure wrappers know how to report, in the manner of
/// `std::process::Termination`.
///
/// `Result<T, E: Display>` reports `Err` as a failure. Implement it for your
/// own return types with `Outcome::Returned(self)`.
pub trait Reportable {
    fn outcome(&self) -> Outcome<'_>;
}

impl<T: fmt::Debug, E: fmt::Display> Reportable for Result<T, E> {
    fn outcome(&self) -> Outcome<'_> {
        Outcome::of_result(self)
    }
}

macro_rules! reportable_values {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Reportable for $ty {
                fn outcome(&self) -> Outcome<'_> {
                    Outcome::Returned(self)
                }
            }
        )*
    };
}

reportable_values!(
    (), bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    String, &str,
);

macro_rules! reportable_generic {
    ($($ty:ident<$($param:ident),+>),* $(,)?) => {
        $(
            impl<$($param: fmt::Debug),+> Reportable for $ty<$($param),+> {
                fn outcome(&self) -> Outcome<'_> {
                    Outcome::Returned(self)
                }
            }
        )*
    };
}

reportable_generic!(Option<T>, Vec<T>, Box<T>);

macro_rules! reportable_tuples {
    ($(($($param:ident),+)),* $(,)?) => {
        $(
            impl<$($param: fmt::Debug),+> Reportable for ($($param,)+) {
                fn outcome(&self) -> Outcome<'_> {
                    Outcome::Returned(self)
                }
            }
        )*
    };
}

reportable_tuples!((A), (A, B), (A, B, C), (A, B, C, D));

/// Pre-rendered text reported verbatim as a returned value.
#[derive(Clone, Copy)]
pub struct Verbatim<'a>(pub &'a str);

impl fmt::Debug for Verbatim<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// `name=value` argument listing used in entry lines.
#[derive(Clone, Copy)]
pub struct ArgList<'a>(pub &'a [(&'a str, &'a dyn fmt::Debug)]);

impl fmt::Display for ArgList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={:?}", name, value)?;
        }
        Ok(())
    }
}
