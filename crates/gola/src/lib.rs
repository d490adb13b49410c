//! Euclidean vectors of arbitrary dimension.
//!
//! This crate provides a single type, [`Vector`], along with the operations usually needed for
//! geometry and simple physics: arithmetic, scaling, magnitude and normalization, dot and cross
//! products, angles, parallelism and orthogonality tests, and decomposition into parallel and
//! perpendicular components.
//!
//! # Goals & Non-Goals
//!
//! - The dimension of a vector is chosen at run time, when it is created, and never changes
//!   afterwards. Const-generic dimensions are deliberately not used, so that vectors of any size
//!   can be built from data that is only known at run time.
//! - Components are always [`f64`]s. Matrices, other scalar types and batched/SIMD processing
//!   are out of scope.
//! - Mixing vectors of different dimension is a bug in the caller. The plain methods and
//!   operators panic on it, while `try_*` methods report it as a [`VectorError`].
//! - Numerical edge cases are handled consistently: "zero" means "magnitude at most
//!   [`ZERO_TOLERANCE`]", and every exact floating-point comparison has a tolerance-based
//!   counterpart (see [`Tolerance`]). [`Vector`] also implements the [`approx`] crate's traits.
//!
//! # Examples
//!
//! ```
//! use gola::*;
//!
//! let a = vector![3, 0, 0];
//! let b = vector![1, 2, 0];
//!
//! assert_eq!(a.to_string(), "[3,0,0]");
//! assert_eq!(&a + &b, vector![4, 2, 0]);
//! assert_eq!(a.dot(&b), 3.0);
//! assert_eq!(a.cross(&b), vector![0, 0, 6]);
//! assert_eq!(b.proj(&a), vector![1, 0, 0]);
//! assert_eq!(b.perp(&a), vector![0, 2, 0]);
//! assert!(a.cross(&b).is_orthogonal(&a));
//! ```
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger itself. Rejected inputs
//! of `try_*` methods are logged at `trace` level, degenerate computations that produce
//! non-finite values at `debug` level.

pub mod error;
mod tolerance;
mod vector;

pub use error::VectorError;
pub use tolerance::*;
pub use vector::*;

/// Creates a [`Vector`] from a list of components.
///
/// Each component is converted to [`f64`] with `as`, so integer literals can be used.
///
/// # Examples
///
/// ```
/// # use gola::*;
/// let v = vector![1, 2.5, -3];
/// assert_eq!(v.as_slice(), &[1.0, 2.5, -3.0]);
/// assert_eq!(vector![].dim(), 0);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Vector::new(::std::vec::Vec::<f64>::new())
    };
    ($($component:expr),+ $(,)?) => {
        $crate::Vector::new([$(($component) as f64),+])
    };
}
