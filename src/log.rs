//! Provides [`log`]-macro counterparts that only log when the `log`-feature
//! is enabled.

/// Mirrors the `warn!()`-macro from the [`log`](https://github.com/rust-lang/log)-crate.
///
/// With the `log`-feature enabled, this macro has exactly the same behaviour.
#[cfg(feature = "log")]
#[allow(unused)]
macro_rules! warning {
    ($($t:tt)*) => {
        ::log::warn!($($t)*)
    };
}
/// With the `log`-feature disabled, this macro does nothing.
#[cfg(not(feature = "log"))]
#[allow(unused)]
macro_rules! warning {
    ($($t:tt)*) => {};
}
#[allow(unused)]
pub(crate) use warning as warn;

/// Mirrors the `debug!()`-macro from the [`log`](https://github.com/rust-lang/log)-crate.
#[cfg(feature = "log")]
#[allow(unused)]
macro_rules! debug {
    ($($t:tt)*) => {
        ::log::debug!($($t)*)
    };
}
#[cfg(not(feature = "log"))]
#[allow(unused)]
macro_rules! debug {
    ($($t:tt)*) => {};
}
#[allow(unused)]
pub(crate) use debug;

/// Mirrors the `trace!()`-macro from the [`log`](https://github.com/rust-lang/log)-crate.
#[cfg(feature = "log")]
#[allow(unused)]
macro_rules! trace {
    ($($t:tt)*) => {
        ::log::trace!($($t)*)
    };
}
#[cfg(not(feature = "log"))]
#[allow(unused)]
macro_rules! trace {
    ($($t:tt)*) => {};
}
#[allow(unused)]
pub(crate) use trace;
