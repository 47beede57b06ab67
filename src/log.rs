//! Conditional logging macros.
//!
//! With the `tracing` feature these re-export the `tracing` macros.
//! Without it they expand to nothing. Callers: the barre fallback in
//! `diagram::render`, sheet layout in `renderer`, and the bundled catalog
//! load in `catalog`.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
