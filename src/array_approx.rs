#[cfg(feature = "approx")]
mod approx_methods
{
    use crate::unit::Unit;
    use crate::DimensionedArray;

    impl<A, U> DimensionedArray<A, U>
    where U: Unit
    {
        /// A test for equality that uses the elementwise absolute difference to compute the
        /// approximate equality of two arrays. Dims and units must match exactly.
        ///
        /// **Requires crate feature `"approx"`**
        pub fn abs_diff_eq(&self, other: &DimensionedArray<A, U>, epsilon: A::Epsilon) -> bool
        where
            A: ::approx::AbsDiffEq,
            A::Epsilon: Clone,
        {
            <Self as ::approx::AbsDiffEq<_>>::abs_diff_eq(self, other, epsilon)
        }

        /// A test for equality that uses an elementwise relative comparison if the values are far
        /// apart; and the absolute difference otherwise. Dims and units must match exactly.
        ///
        /// **Requires crate feature `"approx"`**
        pub fn relative_eq(&self, other: &DimensionedArray<A, U>, epsilon: A::Epsilon, max_relative: A::Epsilon)
            -> bool
        where
            A: ::approx::RelativeEq,
            A::Epsilon: Clone,
        {
            <Self as ::approx::RelativeEq<_>>::relative_eq(self, other, epsilon, max_relative)
        }
    }
}

#[cfg(feature = "approx")]
mod approx_traits
{
    use approx::{AbsDiffEq, RelativeEq, UlpsEq};

    use crate::unit::Unit;
    use crate::DimensionedArray;

    fn same_labels<A, U: Unit>(a: &DimensionedArray<A, U>, b: &DimensionedArray<A, U>) -> bool
    {
        a.dims() == b.dims() && a.unit() == b.unit() && a.shape() == b.shape()
    }

    /// **Requires crate feature `"approx"`.**
    impl<A, U> AbsDiffEq for DimensionedArray<A, U>
    where
        A: AbsDiffEq,
        A::Epsilon: Clone,
        U: Unit,
    {
        type Epsilon = A::Epsilon;

        fn default_epsilon() -> A::Epsilon
        {
            A::default_epsilon()
        }

        fn abs_diff_eq(&self, other: &Self, epsilon: A::Epsilon) -> bool
        {
            same_labels(self, other) && AbsDiffEq::abs_diff_eq(self.values(), other.values(), epsilon)
        }
    }

    /// **Requires crate feature `"approx"`.**
    impl<A, U> RelativeEq for DimensionedArray<A, U>
    where
        A: RelativeEq,
        A::Epsilon: Clone,
        U: Unit,
    {
        fn default_max_relative() -> A::Epsilon
        {
            A::default_max_relative()
        }

        fn relative_eq(&self, other: &Self, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool
        {
            same_labels(self, other) && RelativeEq::relative_eq(self.values(), other.values(), epsilon, max_relative)
        }
    }

    /// **Requires crate feature `"approx"`.**
    impl<A, U> UlpsEq for DimensionedArray<A, U>
    where
        A: UlpsEq,
        A::Epsilon: Clone,
        U: Unit,
    {
        fn default_max_ulps() -> u32
        {
            A::default_max_ulps()
        }

        fn ulps_eq(&self, other: &Self, epsilon: A::Epsilon, max_ulps: u32) -> bool
        {
            same_labels(self, other) && UlpsEq::ulps_eq(self.values(), other.values(), epsilon, max_ulps)
        }
    }
}
