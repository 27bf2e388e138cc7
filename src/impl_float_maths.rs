// Element-wise methods for labeled arrays

#[cfg(feature = "std")]
use num_traits::Float;
use num_traits::Signed;

#[cfg(feature = "std")]
use crate::error::DimsError;
#[cfg(feature = "std")]
use crate::unit::require_dimensionless;
use crate::unit::Unit;
use crate::DimensionedArray;

#[cfg(feature = "std")]
macro_rules! dimensionless_ops {
    ($($(#[$meta:meta])* fn $id:ident)+) => {
        $($(#[$meta])*
        ///
        /// **Errors** if the unit is not dimensionless (`"Unit must be dimensionless"`).
        /// Arrays without unit tracking are accepted.
        pub fn $id(&self) -> Result<DimensionedArray<A, U>, DimsError> {
            require_dimensionless(self.unit())?;
            Ok(self.mapv(A::$id))
        })+
    };
}

/// # Element-wise methods for float arrays
///
/// Transcendental functions are only defined for dimensionless quantities:
/// they fail for arrays with a physical unit, and keep the unit otherwise
/// (`None`, or the dimensionless unit).
#[cfg(feature = "std")]
impl<A, U> DimensionedArray<A, U>
where
    A: 'static + Float,
    U: Unit,
{
    dimensionless_ops! {
        /// `e^x` of each element.
        fn exp
        /// `2^x` of each element.
        fn exp2
        /// `e^x - 1` of each element.
        fn exp_m1
        /// Natural logarithm of each element.
        fn ln
        /// `ln(1 + x)` of each element.
        fn ln_1p
        /// Base 2 logarithm of each element.
        fn log2
        /// Base 10 logarithm of each element.
        fn log10
        /// Sine of each element (in radians).
        fn sin
        /// Cosine of each element (in radians).
        fn cos
        /// Tangent of each element (in radians).
        fn tan
        /// Hyperbolic sine of each element.
        fn sinh
        /// Hyperbolic cosine of each element.
        fn cosh
        /// Hyperbolic tangent of each element.
        fn tanh
    }
}

/// # Unit preserving element-wise methods
impl<A, U> DimensionedArray<A, U>
where
    A: Clone + Signed,
    U: Unit,
{
    /// Negate each element; dims and unit are unchanged.
    ///
    /// Same as the `-` operator.
    #[must_use = "method returns a new array and does not mutate the original value"]
    pub fn negate(&self) -> DimensionedArray<A, U>
    {
        -self
    }

    /// Absolute value of each element; dims and unit are unchanged.
    #[must_use = "method returns a new array and does not mutate the original value"]
    pub fn abs(&self) -> DimensionedArray<A, U>
    {
        self.mapv(|x| x.abs())
    }
}
