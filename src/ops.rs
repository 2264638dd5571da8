//! Elementwise operators and the named reductions.
//!
//! Binary operators require both operands to share element type, count and
//! shape tag; cross-type arithmetic is deliberately unsupported. Each
//! operator applies the element type's own arithmetic at every index, so
//! overflow, rounding and division-by-zero behave exactly as the element
//! type defines them.

use crate::{
    bounded::DynVector,
    fixed::Vector,
    shape::{Cartesian, Shape},
};
use core::ops::{Add, Div, Mul, Neg, Sub};
use num_traits::{Float, Zero};

macro_rules! impl_elementwise_ops {
    ($($trait:ident, $op:ident);* $(;)?) => {$(
        impl<T, const N: usize, S> $trait for Vector<T, N, S>
        where
            T: $trait<Output = T> + Copy,
            S: Shape,
        {
            type Output = Vector<T, N, S>;

            fn $op(self, rhs: Self) -> Self::Output {
                let mut out = self;
                for i in 0..N {
                    out.data[i] = self.data[i].$op(rhs.data[i]);
                }
                out
            }
        }

        impl<T, const N: usize, S> $trait<&Vector<T, N, S>> for Vector<T, N, S>
        where
            T: $trait<Output = T> + Copy,
            S: Shape,
        {
            type Output = Vector<T, N, S>;

            fn $op(self, rhs: &Vector<T, N, S>) -> Self::Output { self.$op(*rhs) }
        }

        impl<T, const N: usize, S> $trait<Vector<T, N, S>> for &Vector<T, N, S>
        where
            T: $trait<Output = T> + Copy,
            S: Shape,
        {
            type Output = Vector<T, N, S>;

            fn $op(self, rhs: Vector<T, N, S>) -> Self::Output { (*self).$op(rhs) }
        }

        impl<T, const N: usize, S> $trait<&Vector<T, N, S>> for &Vector<T, N, S>
        where
            T: $trait<Output = T> + Copy,
            S: Shape,
        {
            type Output = Vector<T, N, S>;

            fn $op(self, rhs: &Vector<T, N, S>) -> Self::Output { (*self).$op(*rhs) }
        }

        impl<T, const N: usize> $trait for DynVector<T, N>
        where
            T: $trait<Output = T> + Zero + Copy,
        {
            type Output = DynVector<T, N>;

            /// Applies the operator over the logical prefix; the operands
            /// must have equal lengths.
            #[track_caller]
            fn $op(self, rhs: Self) -> Self::Output {
                debug_assert_eq!(self.len(), rhs.len(), "operand lengths differ");
                let mut out = DynVector::new(self.len());
                for i in 0..self.len() {
                    out.data[i] = self.data[i].$op(rhs.data[i]);
                }
                out
            }
        }
    )*};
}

impl_elementwise_ops! {
    Add, add;
    Sub, sub;
    Mul, mul;
    Div, div;
}

macro_rules! impl_scalar_ops {
    ($($trait:ident, $op:ident);* $(;)?) => {$(
        impl<T, const N: usize, S> $trait<T> for Vector<T, N, S>
        where
            T: $trait<Output = T> + Copy,
            S: Shape,
        {
            type Output = Vector<T, N, S>;

            fn $op(self, rhs: T) -> Self::Output {
                let mut out = self;
                for i in 0..N {
                    out.data[i] = self.data[i].$op(rhs);
                }
                out
            }
        }

        impl<T, const N: usize, S> $trait<T> for &Vector<T, N, S>
        where
            T: $trait<Output = T> + Copy,
            S: Shape,
        {
            type Output = Vector<T, N, S>;

            fn $op(self, rhs: T) -> Self::Output { (*self).$op(rhs) }
        }
    )*};
}

impl_scalar_ops! {
    Mul, mul;
    Div, div;
}

// The scalar-on-the-left form cannot be written for a generic element type;
// provide it for the float primitives.
macro_rules! impl_left_scalar_mul {
    ($($t:ty),*) => {$(
        impl<const N: usize, S: Shape> Mul<Vector<$t, N, S>> for $t {
            type Output = Vector<$t, N, S>;

            fn mul(self, rhs: Vector<$t, N, S>) -> Self::Output { rhs * self }
        }

        impl<const N: usize, S: Shape> Mul<&Vector<$t, N, S>> for $t {
            type Output = Vector<$t, N, S>;

            fn mul(self, rhs: &Vector<$t, N, S>) -> Self::Output { *rhs * self }
        }
    )*};
}

impl_left_scalar_mul!(f32, f64);

impl<T, const N: usize, S> Neg for Vector<T, N, S>
where
    T: Neg<Output = T> + Copy,
    S: Shape,
{
    type Output = Vector<T, N, S>;

    fn neg(self) -> Self::Output {
        let mut out = self;
        for i in 0..N {
            out.data[i] = self.data[i].neg();
        }
        out
    }
}

impl<T, const N: usize, S> Neg for &Vector<T, N, S>
where
    T: Neg<Output = T> + Copy,
    S: Shape,
{
    type Output = Vector<T, N, S>;

    fn neg(self) -> Self::Output {
        (*self).neg()
    }
}

impl<T, const N: usize, S: Shape> Vector<T, N, S> {
    /// Returns the dot product `sum(self[i] * rhs[i])`.
    pub fn dot(&self, rhs: &Self) -> T
    where
        T: Zero + Mul<Output = T> + Copy,
    {
        self.data
            .iter()
            .zip(rhs.data.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Returns the squared Euclidean norm.
    pub fn norm_sqr(&self) -> T
    where
        T: Zero + Mul<Output = T> + Copy,
    {
        self.dot(self)
    }

    /// Returns the Euclidean norm.
    pub fn norm(&self) -> T
    where
        T: Float,
    {
        self.norm_sqr().sqrt()
    }

    /// Returns the vector scaled to unit norm.
    pub fn normalize(&self) -> Self
    where
        T: Float,
    {
        *self / self.norm()
    }
}

impl<T> Vector<T, 3, Cartesian> {
    /// Returns the 3D cross product.
    ///
    /// Defined only for three-element Cartesian vectors; any other
    /// instantiation fails to compile.
    pub fn cross(&self, rhs: &Self) -> Self
    where
        T: Mul<Output = T> + Sub<Output = T> + Copy,
    {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl<T, const N: usize> DynVector<T, N> {
    /// Returns the dot product over the logical prefix; the operands must
    /// have equal lengths.
    #[track_caller]
    pub fn dot(&self, rhs: &Self) -> T
    where
        T: Zero + Mul<Output = T> + Copy,
    {
        debug_assert_eq!(self.len(), rhs.len(), "operand lengths differ");
        self.as_slice()
            .iter()
            .zip(rhs.as_slice().iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }
}

/// Returns the dot product of two equally shaped vectors.
pub fn dot<T, const N: usize, S>(lhs: &Vector<T, N, S>, rhs: &Vector<T, N, S>) -> T
where
    T: Zero + Mul<Output = T> + Copy,
    S: Shape,
{
    lhs.dot(rhs)
}

/// Returns the 3D cross product of two Cartesian vectors.
///
/// ```compile_fail
/// use tagvec::{cross, Vector};
///
/// let a = Vector::<f32, 2>::new(1.0, 0.0);
/// let b = Vector::<f32, 2>::new(0.0, 1.0);
/// let _ = cross(&a, &b); // only defined for three elements
/// ```
pub fn cross<T>(lhs: &Vector<T, 3, Cartesian>, rhs: &Vector<T, 3, Cartesian>) -> Vector<T, 3, Cartesian>
where
    T: Mul<Output = T> + Sub<Output = T> + Copy,
{
    lhs.cross(rhs)
}

#[cfg(test)]
mod tests {
    use crate::{cross, dot, DynVector, Rgb, Vector, Vector3f};
    use approx::{assert_relative_eq, assert_ulps_eq};
    use proptest::prelude::*;

    #[test]
    fn elementwise_arithmetic() {
        let a = Vector::<i32, 3>::new(1, 2, 3);
        let b = Vector::<i32, 3>::new(10, 20, 30);
        // The expected values name their instantiation: a bare `Vector::new`
        // is ambiguous between the per-shape constructors.
        assert_eq!(a + b, Vector::<i32, 3>::new(11, 22, 33));
        assert_eq!(b - a, Vector::<i32, 3>::new(9, 18, 27));
        assert_eq!(a * b, Vector::<i32, 3>::new(10, 40, 90));
        assert_eq!(b / a, Vector::<i32, 3>::new(10, 10, 10));
        // Reference operands produce the same values.
        assert_eq!(&a + &b, a + b);
        assert_eq!(a + &b, &a + b);

        let c = Vector::<u8, 3, Rgb>::new(1, 2, 3);
        assert_eq!(c + c, Vector::<u8, 3, Rgb>::new(2, 4, 6));
    }

    #[test]
    fn division_follows_element_semantics() {
        let a = Vector3f::new(1.0, -1.0, 0.0);
        let b = Vector3f::zeros();
        let q = a / b;
        assert_eq!(q.x, f32::INFINITY);
        assert_eq!(q.y, f32::NEG_INFINITY);
        assert!(q.z.is_nan());
    }

    #[test]
    fn scalar_ops_and_neg() {
        let v = Vector3f::new(1.0, 2.0, 3.0);
        assert_eq!(v * 2.0, Vector3f::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * v, v * 2.0);
        assert_eq!(v / 2.0, Vector3f::new(0.5, 1.0, 1.5));
        assert_eq!(-v, Vector3f::new(-1.0, -2.0, -3.0));
        assert_eq!(-&v, -v);
    }

    #[test]
    fn lexicographic_order() {
        assert!(Vector3f::new(1.0, 2.0, 3.0) < Vector3f::new(1.0, 2.0, 4.0));

        let v = Vector3f::new(1.0, 2.0, 3.0);
        assert!(!(v < v));
        assert!(!(v > v));

        // The first differing index dominates.
        assert!(Vector3f::new(1.0, 9.0, 9.0) < Vector3f::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn dot_is_the_true_dot_product() {
        let a = Vector::<i32, 3>::new(1, 2, 3);
        let b = Vector::<i32, 3>::new(4, 5, 6);
        assert_eq!(a.dot(&b), 32);
        assert_eq!(dot(&a, &b), 32);
        // Not the left operand's squared magnitude.
        assert_ne!(a.dot(&b), a.dot(&a));
        assert_eq!(a.norm_sqr(), 14);
    }

    #[test]
    fn cross_product() {
        let x = Vector3f::new(1.0, 0.0, 0.0);
        let y = Vector3f::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(&x), Vector3f::new(0.0, 0.0, -1.0));

        let v = Vector3f::new(3.0, -2.0, 7.5);
        assert_eq!(cross(&v, &v), Vector3f::zeros());
    }

    #[test]
    fn norm_and_normalize() {
        let v = Vector3f::new(3.0, 4.0, 0.0);
        assert_relative_eq!(v.norm(), 5.0);
        let n = v.normalize();
        assert_ulps_eq!(n.norm(), 1.0);
        assert_relative_eq!(n, Vector3f::new(0.6, 0.8, 0.0));
    }

    #[test]
    fn bounded_dynamic_arithmetic() {
        let a = DynVector::<i32, 10>::from_slice(&[1, 2, 3]);
        let b = DynVector::<i32, 10>::from_slice(&[10, 20, 30]);
        let sum = a + b;
        assert_eq!(sum.as_slice(), &[11, 22, 33]);
        assert_eq!(sum.len(), 3);
        assert_eq!((b - a).as_slice(), &[9, 18, 27]);
        assert_eq!((a * b).as_slice(), &[10, 40, 90]);
        assert_eq!((b / a).as_slice(), &[10, 10, 10]);
        assert_eq!(a.dot(&b), 140);
    }

    #[test]
    fn composite_expression_end_to_end() {
        let mut v = Vector3f::new(1.0, 2.0, 3.0);
        v.x = 10.0;
        assert_eq!(v[0], 10.0);

        let b = Vector3f::new(2.0, 3.0, 4.0);
        let c = Vector3f::new(4.0, 5.0, 6.0);
        let expr = v + b * c - c / c;
        for i in 0..3 {
            assert_eq!(expr[i], v[i] + b[i] * c[i] - c[i] / c[i]);
        }

        let crossed = expr.cross(&v);
        assert_eq!(crossed.x, expr.y * v.z - expr.z * v.y);
        assert_eq!(crossed.y, expr.z * v.x - expr.x * v.z);
        assert_eq!(crossed.z, expr.x * v.y - expr.y * v.x);
    }

    fn small_i32_vec() -> impl Strategy<Value = Vector<i32, 3>> {
        prop::array::uniform3(-10_000..10_000i32).prop_map(Vector::from_array)
    }

    proptest! {
        #[test]
        fn addition_is_elementwise(a in small_i32_vec(), b in small_i32_vec()) {
            let sum = a + b;
            for i in 0..3 {
                prop_assert_eq!(sum[i], a[i] + b[i]);
            }
        }

        #[test]
        fn addition_commutes(a in small_i32_vec(), b in small_i32_vec()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn subtraction_inverts_addition(a in small_i32_vec(), b in small_i32_vec()) {
            prop_assert_eq!((a + b) - b, a);
        }

        #[test]
        fn dot_accumulates_both_operands(a in small_i32_vec(), b in small_i32_vec()) {
            let expected = a[0] * b[0] + a[1] * b[1] + a[2] * b[2];
            prop_assert_eq!(a.dot(&b), expected);
        }
    }
}
