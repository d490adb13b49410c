use std::{f64::consts::PI, fmt, slice};

use crate::{
    error::{Result, VectorError},
    tolerance::{Tolerance, ZERO_TOLERANCE},
};

mod ops;
mod parse;

/// A Euclidean vector of [`f64`] components, with a dimension chosen at construction time.
///
/// # Construction
///
/// - The [`vector!`][crate::vector] macro directly creates a vector from the provided values.
/// - [`Vector::new`] accepts anything that converts into a boxed slice (arrays, [`Vec`]s, slices).
/// - [`Vector::zeros`] and [`Vector::from_fn`] create vectors of a given dimension.
/// - Vectors can also be collected from an iterator of [`f64`]s, or parsed from their
///   [`Display`][fmt::Display] form via [`str::parse`].
///
/// # Dimension
///
/// The dimension of a [`Vector`] can never change after it has been created. Elements can be
/// modified via [`Index`] and [`IndexMut`], or through [`Vector::as_mut_slice`].
///
/// Binary operations require both operands to have the same dimension. Violating this is
/// considered a bug in the calling code, so the plain methods and operators will panic. Each of
/// them has a `try_` variant that returns a [`VectorError`] instead.
///
/// Equality comparisons via [`PartialEq`] are the exception: vectors of different dimension
/// simply compare unequal. Use [`Vector::try_eq`] to reject mismatched dimensions instead.
///
/// # Degenerate inputs
///
/// Operations that need a direction ([`Vector::unit`], [`Vector::angle`], [`Vector::proj`],
/// [`Vector::perp`]) divide by a magnitude. When that magnitude is zero they return non-finite
/// values rather than panicking; check [`Vector::is_zero`] beforehand, or use the `try_` variant.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Default)]
pub struct Vector(Box<[f64]>);

impl Vector {
    /// Creates a vector from an ordered list of components.
    ///
    /// The dimension of the vector is the number of components given, and may be zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gola::*;
    /// let v = Vector::new([1.0, 2.0, 4.0]);
    /// assert_eq!(v.dim(), 3);
    /// assert_eq!(Vector::new(vec![0.5; 7]).dim(), 7);
    /// assert!(Vector::new(Vec::<f64>::new()).is_empty());
    /// ```
    #[inline]
    pub fn new<C: Into<Box<[f64]>>>(components: C) -> Self {
        Self(components.into())
    }

    /// Creates a `dim`-dimensional vector with all components set to `0.0`.
    pub fn zeros(dim: usize) -> Self {
        Self(vec![0.0; dim].into_boxed_slice())
    }

    /// Creates a `dim`-dimensional vector where each component is initialized by invoking a
    /// closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gola::*;
    /// let v = Vector::from_fn(3, |i| i as f64 * 10.0);
    /// assert_eq!(v, vector![0, 10, 20]);
    /// ```
    pub fn from_fn<F>(dim: usize, cb: F) -> Self
    where
        F: FnMut(usize) -> f64,
    {
        (0..dim).map(cb).collect()
    }

    /// Returns the number of components in this vector.
    #[inline]
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if this vector has no components at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a reference to the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns a mutable reference to the components as a slice.
    ///
    /// The slice allows modifying components, but not changing their number.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.0
    }

    /// Returns an iterator over the components.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, f64> {
        self.0.iter()
    }

    /// Converts this vector into a [`Vec`] of its components.
    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.0.into_vec()
    }

    /// Combines `self` and `other` element-wise, after checking that their dimensions match.
    fn zip_with<F>(&self, other: &Self, f: F) -> Result<Self>
    where
        F: FnMut((&f64, &f64)) -> f64,
    {
        VectorError::check_dims(self.dim(), other.dim())?;
        Ok(self.iter().zip(other.iter()).map(f).collect())
    }

    /// Compares `self` and `other` for exact equality, failing if their dimensions differ.
    ///
    /// Unlike `==`, which treats vectors of different dimension as unequal, this reports a
    /// [`VectorError::DimensionMismatch`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use gola::*;
    /// assert_eq!(vector![45, 44, 90].try_eq(&vector![45, 44, 90]), Ok(true));
    /// assert_eq!(vector![12, 56, 7].try_eq(&vector![12, 56, 9]), Ok(false));
    /// assert!(vector![1, 2].try_eq(&vector![1, 2, 0]).is_err());
    /// ```
    pub fn try_eq(&self, other: &Self) -> Result<bool> {
        traced("try_eq", VectorError::check_dims(self.dim(), other.dim()))?;
        Ok(self == other)
    }

    /// Element-wise addition, failing if the dimensions differ.
    ///
    /// The `+` operator performs the same operation, but panics on mismatch.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        traced("try_add", self.zip_with(other, |(a, b)| a + b))
    }

    /// Element-wise subtraction, failing if the dimensions differ.
    ///
    /// The `-` operator performs the same operation, but panics on mismatch.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        traced("try_sub", self.zip_with(other, |(a, b)| a - b))
    }

    /// Multiplies every component by `scale`, in place.
    ///
    /// This is the only operation that modifies a vector's components; everything else returns a
    /// new [`Vector`]. The `*=` operator does the same thing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gola::*;
    /// let mut v = vector![1, -2, 0.5];
    /// v.scale(4.0);
    /// assert_eq!(v, vector![4, -8, 2]);
    /// ```
    pub fn scale(&mut self, scale: f64) {
        self.0.iter_mut().for_each(|c| *c *= scale);
    }

    /// Returns the magnitude (Euclidean length) of this vector.
    ///
    /// The empty vector has magnitude 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gola::*;
    /// assert_eq!(vector![3, 4].mag(), 5.0);
    /// assert_eq!(vector![].mag(), 0.0);
    /// ```
    pub fn mag(&self) -> f64 {
        self.iter().fold(0.0, |acc, c| acc + c * c).sqrt()
    }

    /// Returns whether the magnitude of this vector is at most [`ZERO_TOLERANCE`].
    ///
    /// This is a "close to zero" test: vectors computed by cancelling arithmetic rarely end up at
    /// exactly zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gola::*;
    /// assert!(vector![0, 0, 0].is_zero());
    /// assert!(vector![1e-12, -1e-12].is_zero());
    /// assert!(!vector![1e-9, 0].is_zero());
    /// ```
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.mag() <= ZERO_TOLERANCE
    }

    /// Returns a unit vector pointing in the same direction as `self`.
    ///
    /// If `self` has zero magnitude, the components of the result are not finite. See
    /// [`Vector::try_unit`] for a checked version.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gola::*;
    /// assert_eq!(vector![0, 0, 4].unit(), vector![0, 0, 1]);
    /// assert!(vector![0, 0].unit()[0].is_nan());
    /// ```
    pub fn unit(&self) -> Self {
        let mag = self.mag();
        if mag == 0.0 {
            log::debug!("normalizing zero-magnitude vector {self}, result will not be finite");
        }
        let mut unit = self.clone();
        unit.scale(1.0 / mag);
        unit
    }

    /// Returns a unit vector pointing in the same direction as `self`, or
    /// [`VectorError::ZeroMagnitude`] if `self` [is zero][Vector::is_zero].
    pub fn try_unit(&self) -> Result<Self> {
        if self.is_zero() {
            return traced("try_unit", Err(VectorError::ZeroMagnitude));
        }
        Ok(self.unit())
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Panics
    ///
    /// Panics if the vectors have different dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gola::*;
    /// let a = vector![1, 3, -5];
    /// let b = vector![4, -2, -1];
    /// assert_eq!(a.dot(&b), 3.0);
    /// ```
    #[track_caller]
    pub fn dot(&self, other: &Self) -> f64 {
        or_panic(self.try_dot(other))
    }

    /// Computes the dot product between `self` and `other`, failing if the dimensions differ.
    pub fn try_dot(&self, other: &Self) -> Result<f64> {
        traced("try_dot", VectorError::check_dims(self.dim(), other.dim()))?;
        Ok(self
            .iter()
            .zip(other.iter())
            .fold(0.0, |acc, (a, b)| acc + a * b))
    }

    /// Computes the angle between `self` and `other`, in radians.
    ///
    /// The result is in the range `[0, π]`. The cosine of the angle is clamped to `[-1, 1]` before
    /// taking its arc cosine, so rounding errors cannot push it out of the function's domain.
    ///
    /// Both vectors must have non-zero magnitude for the result to be meaningful; otherwise `NaN`
    /// is returned.
    ///
    /// # Panics
    ///
    /// Panics if the vectors have different dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gola::*;
    /// use std::f64::consts::PI;
    ///
    /// assert_eq!(vector![0, 1].angle(&vector![3, 0]), PI / 2.0);
    /// assert_eq!(vector![0, 1].angle(&vector![0, -2]), PI);
    /// assert!(vector![0, 0].angle(&vector![1, 0]).is_nan());
    /// ```
    #[track_caller]
    pub fn angle(&self, other: &Self) -> f64 {
        let dot = self.dot(other);
        let mags = self.mag() * other.mag();
        if mags == 0.0 {
            log::debug!("angle between {self} and {other} is undefined");
        }
        (dot / mags).clamp(-1.0, 1.0).acos()
    }

    /// Computes the angle between `self` and `other`, failing if the dimensions differ or either
    /// vector [is zero][Vector::is_zero].
    pub fn try_angle(&self, other: &Self) -> Result<f64> {
        traced("try_angle", VectorError::check_dims(self.dim(), other.dim()))?;
        if self.is_zero() || other.is_zero() {
            return traced("try_angle", Err(VectorError::ZeroMagnitude));
        }
        Ok(self.angle(other))
    }

    /// Returns whether `self` and `other` point in the same or in opposite directions.
    ///
    /// A zero vector is considered parallel to every vector. Otherwise, the [angle][Self::angle]
    /// between the vectors has to be *exactly* `0` or `π`, which rounding errors can easily
    /// prevent. [`Vector::is_parallel_within`] is the tolerance-based alternative.
    ///
    /// # Panics
    ///
    /// Panics if the vectors have different dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gola::*;
    /// assert!(vector![1, 0, 0].is_parallel(&vector![3, 0, 0]));
    /// assert!(vector![1, 0, 0].is_parallel(&vector![-3, 0, 0]));
    /// assert!(vector![0, 0, 0].is_parallel(&vector![1, 2, 3]));
    /// assert!(!vector![1, 0, 0].is_parallel(&vector![1, 1, 0]));
    /// ```
    #[track_caller]
    pub fn is_parallel(&self, other: &Self) -> bool {
        or_panic(VectorError::check_dims(self.dim(), other.dim()));
        if self.is_zero() || other.is_zero() {
            return true;
        }
        let angle = self.angle(other);
        angle == 0.0 || angle == PI
    }

    /// Returns whether `self` and `other` are parallel, allowing for rounding errors.
    ///
    /// A vector whose magnitude is at most `tolerance.zero` is parallel to every vector. Otherwise,
    /// the angle between the vectors has to be within `tolerance.angle` of `0` or `π`.
    ///
    /// # Panics
    ///
    /// Panics if the vectors have different dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gola::*;
    /// let a = vector![1, 1];
    /// let b = vector![2, 2];
    /// assert!(!a.is_parallel(&b)); // off by rounding
    /// assert!(a.is_parallel_within(&b, Tolerance::DEFAULT));
    /// ```
    #[track_caller]
    pub fn is_parallel_within(&self, other: &Self, tolerance: Tolerance) -> bool {
        or_panic(VectorError::check_dims(self.dim(), other.dim()));
        if self.mag() <= tolerance.zero || other.mag() <= tolerance.zero {
            return true;
        }
        let angle = self.angle(other);
        angle <= tolerance.angle || PI - angle <= tolerance.angle
    }

    /// Returns whether `self` and `other` are perpendicular to each other.
    ///
    /// A zero vector is considered orthogonal to every vector. Otherwise, the absolute value of
    /// the [dot product][Self::dot] has to be below [`ZERO_TOLERANCE`].
    ///
    /// # Panics
    ///
    /// Panics if the vectors have different dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gola::*;
    /// assert!(vector![1, 0].is_orthogonal(&vector![0, -5]));
    /// assert!(vector![0, 0].is_orthogonal(&vector![3, 4]));
    /// assert!(!vector![1, 1].is_orthogonal(&vector![1, 0]));
    /// ```
    #[track_caller]
    pub fn is_orthogonal(&self, other: &Self) -> bool {
        self.is_orthogonal_within(other, Tolerance::DEFAULT)
    }

    /// Returns whether `self` and `other` are perpendicular, using `tolerance.zero` both for the
    /// zero-vector test and as the bound on the absolute dot product.
    ///
    /// # Panics
    ///
    /// Panics if the vectors have different dimensions.
    #[track_caller]
    pub fn is_orthogonal_within(&self, other: &Self, tolerance: Tolerance) -> bool {
        or_panic(VectorError::check_dims(self.dim(), other.dim()));
        if self.mag() <= tolerance.zero || other.mag() <= tolerance.zero {
            return true;
        }
        self.dot(other).abs() < tolerance.zero
    }

    /// Returns the component of `self` that is parallel to `base` (the projection of `self` onto
    /// `base`).
    ///
    /// If `base` has zero magnitude, the components of the result are not finite.
    ///
    /// # Panics
    ///
    /// Panics if the vectors have different dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gola::*;
    /// let v = vector![3, 4];
    /// assert_eq!(v.proj(&vector![2, 0]), vector![3, 0]);
    /// ```
    #[track_caller]
    pub fn proj(&self, base: &Self) -> Self {
        let unit = base.unit();
        let len = self.dot(&unit);
        unit * len
    }

    /// Returns the projection of `self` onto `base`, failing if the dimensions differ or `base`
    /// [is zero][Vector::is_zero].
    pub fn try_proj(&self, base: &Self) -> Result<Self> {
        traced("try_proj", VectorError::check_dims(self.dim(), base.dim()))?;
        let unit = traced("try_proj", base.try_unit())?;
        let len = self.dot(&unit);
        Ok(unit * len)
    }

    /// Returns the component of `self` that is orthogonal to `base`.
    ///
    /// Together with [`Vector::proj`], this decomposes `self`: `v.proj(&b) + v.perp(&b)` is
    /// equal to `v`, up to rounding.
    ///
    /// # Panics
    ///
    /// Panics if the vectors have different dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gola::*;
    /// let v = vector![3, 4];
    /// let base = vector![2, 0];
    /// assert_eq!(v.perp(&base), vector![0, 4]);
    /// assert_eq!(v.proj(&base) + v.perp(&base), v);
    /// ```
    #[track_caller]
    pub fn perp(&self, base: &Self) -> Self {
        self - &self.proj(base)
    }

    /// Returns the component of `self` that is orthogonal to `base`, failing if the dimensions
    /// differ or `base` [is zero][Vector::is_zero].
    pub fn try_perp(&self, base: &Self) -> Result<Self> {
        let proj = self.try_proj(base)?;
        self.try_sub(&proj)
    }

    /// Computes the cross product of two 3-dimensional vectors.
    ///
    /// The result is perpendicular to both `self` and `other`, and its magnitude is the area of
    /// the parallelogram spanned by them. Swapping the operands inverts its direction.
    ///
    /// # Panics
    ///
    /// Panics if either vector is not 3-dimensional.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gola::*;
    /// let x = vector![1, 0, 0];
    /// let y = vector![0, 1, 0];
    /// assert_eq!(x.cross(&y), vector![0, 0, 1]);
    /// assert_eq!(y.cross(&x), vector![0, 0, -1]);
    /// ```
    #[track_caller]
    pub fn cross(&self, other: &Self) -> Self {
        or_panic(self.try_cross(other))
    }

    /// Computes the cross product, failing with [`VectorError::NotThreeDimensional`] unless both
    /// vectors are 3-dimensional.
    pub fn try_cross(&self, other: &Self) -> Result<Self> {
        match (self.as_slice(), other.as_slice()) {
            (&[a0, a1, a2], &[b0, b1, b2]) => {
                #[rustfmt::skip]
                let cross = Vector::new([
                    a1 * b2 - b1 * a2,
                    -(a0 * b2 - b0 * a2),
                    a0 * b1 - b0 * a1,
                ]);
                Ok(cross)
            }
            _ => traced(
                "try_cross",
                Err(VectorError::NotThreeDimensional {
                    lhs: self.dim(),
                    rhs: other.dim(),
                }),
            ),
        }
    }

    /// Returns the area of the parallelogram spanned by two 3-dimensional vectors.
    ///
    /// # Panics
    ///
    /// Panics if either vector is not 3-dimensional.
    #[track_caller]
    pub fn parallelogram_area(&self, other: &Self) -> f64 {
        self.cross(other).mag()
    }

    /// Returns the area of the triangle spanned by two 3-dimensional vectors.
    ///
    /// # Panics
    ///
    /// Panics if either vector is not 3-dimensional.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gola::*;
    /// let a = vector![2, 0, 0];
    /// let b = vector![0, 3, 0];
    /// assert_eq!(a.parallelogram_area(&b), 6.0);
    /// assert_eq!(a.triangle_area(&b), 3.0);
    /// ```
    #[track_caller]
    pub fn triangle_area(&self, other: &Self) -> f64 {
        self.parallelogram_area(other) / 2.0
    }
}

/// Logs rejected inputs of the `try_*` methods.
fn traced<T>(op: &str, res: Result<T>) -> Result<T> {
    if let Err(e) = &res {
        log::trace!("{op}: {e}");
    }
    res
}

#[track_caller]
pub(crate) fn or_panic<T>(res: Result<T>) -> T {
    match res {
        Ok(value) => value,
        Err(e) => panic!("{e}"),
    }
}

impl From<Vec<f64>> for Vector {
    #[inline]
    fn from(value: Vec<f64>) -> Self {
        Self(value.into_boxed_slice())
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    #[inline]
    fn from(value: [f64; N]) -> Self {
        Self::new(value)
    }
}

impl From<&[f64]> for Vector {
    #[inline]
    fn from(value: &[f64]) -> Self {
        Self::new(value)
    }
}

impl From<Vector> for Vec<f64> {
    #[inline]
    fn from(value: Vector) -> Self {
        value.into_vec()
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = slice::Iter<'a, f64>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl AsRef<[f64]> for Vector {
    #[inline]
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl AsMut<[f64]> for Vector {
    #[inline]
    fn as_mut(&mut self) -> &mut [f64] {
        &mut self.0
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Formats the vector as `[c0,c1,...]`, with each component in its shortest round-trip form.
///
/// Components with a decimal exponent below -4 or of at least 6 are written in exponent notation
/// with a signed, two-digit exponent (`1e+06`, `2.5e-07`). Infinities are written as `+Inf` and
/// `-Inf`. The output can be read back with [`str::parse`].
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, &c) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(",")?;
            }
            write_component(f, c)?;
        }
        f.write_str("]")
    }
}

/// Decimal exponents in `-4..EXP_NOTATION_FROM` are written without exponent notation.
const EXP_NOTATION_FROM: i32 = 6;

fn write_component(f: &mut fmt::Formatter<'_>, c: f64) -> fmt::Result {
    if c.is_infinite() {
        return f.write_str(if c > 0.0 { "+Inf" } else { "-Inf" });
    }
    if c.is_nan() {
        return f.write_str("NaN");
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `-2.5e-7`.
    let sci = format!("{c:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return write!(f, "{c}");
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return write!(f, "{c}");
    };

    if (-4..EXP_NOTATION_FROM).contains(&exp) {
        write!(f, "{c}")
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exp.unsigned_abs())
    }
}
