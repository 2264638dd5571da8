//! Fixed-layout vector container.

use crate::{
    shape::{Cartesian, Fields, Rgb, Shape, Yuv},
    utils::print_slice,
};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use bytemuck::{Pod, Zeroable};
use core::{
    cmp::Ordering,
    fmt::{Debug, Display},
    marker::PhantomData,
    ops::{Deref, DerefMut, Index, IndexMut},
    slice::{Iter, IterMut},
};
use num_traits::{One, Zero};

/// A fixed-size vector of `N` elements of type `T`, tagged with a shape `S`.
///
/// The storage is exactly `[T; N]` (`#[repr(transparent)]`, no hidden
/// padding, no heap allocation); the shape tag is zero-sized and only
/// selects which named fields the vector exposes. For every supported
/// (shape, count) pair the vector dereferences to the matching
/// [`view`](crate::view) struct, so named access and indexed access read and
/// write the same storage:
///
/// ```
/// use tagvec::Vector3f;
///
/// let mut v = Vector3f::new(1.0, 2.0, 3.0);
/// v.x = 10.0;
/// assert_eq!(v[0], 10.0);
/// v[2] = 30.0;
/// assert_eq!(v.z, 30.0);
/// ```
///
/// `size == capacity == N` always; there is no separate size tracking. See
/// [`DynVector`](crate::DynVector) for the bounded-dynamic variant.
#[repr(transparent)]
pub struct Vector<T, const N: usize, S = Cartesian> {
    pub(crate) data: [T; N],
    pub(crate) marker: PhantomData<S>,
}

impl<T, const N: usize, S: Shape> Vector<T, N, S> {
    /// Maximum (and actual) number of elements.
    pub const CAPACITY: usize = N;

    /// Creates a vector from an array of elements in index order.
    pub const fn from_array(data: [T; N]) -> Self {
        Self {
            data,
            marker: PhantomData,
        }
    }

    /// Consumes the vector and returns its elements as an array.
    pub fn into_array(self) -> [T; N] {
        self.data
    }

    /// Creates a vector with every element set to `value`.
    pub fn splat(value: T) -> Self
    where
        T: Copy,
    {
        Self::from_array([value; N])
    }

    /// Creates a vector with all elements set to zero.
    pub fn zeros() -> Self
    where
        T: Zero + Copy,
    {
        Self::splat(T::zero())
    }

    /// Creates a vector with all elements set to one.
    pub fn ones() -> Self
    where
        T: One + Copy,
    {
        Self::splat(T::one())
    }

    /// Returns the element capacity, which equals the element count.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the number of elements.
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` if the vector holds no elements (`N == 0`).
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the elements as a slice in index order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the elements as a mutable slice in index order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns a pointer to the first element.
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Returns a mutable pointer to the first element.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// Returns the element at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Returns the element at `index` mutably, or `None` if out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Returns the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        self.data.get_unchecked(index)
    }

    /// Returns the element at `index` mutably, without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        self.data.get_unchecked_mut(index)
    }

    /// Returns an iterator over the elements in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    /// Returns a mutable iterator over the elements in index order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }
}

macro_rules! impl_field_ctor {
    ($tag:ty, $n:literal, $($f:ident),+) => {
        impl<T> Vector<T, $n, $tag> {
            /// Creates a vector from its named components, in canonical
            /// field order.
            pub const fn new($($f: T),+) -> Self {
                Self {
                    data: [$($f),+],
                    marker: PhantomData,
                }
            }
        }
    };
}

impl_field_ctor!(Cartesian, 1, x);
impl_field_ctor!(Cartesian, 2, x, y);
impl_field_ctor!(Cartesian, 3, x, y, z);
impl_field_ctor!(Cartesian, 4, x, y, z, w);
impl_field_ctor!(Rgb, 3, r, g, b);
impl_field_ctor!(Rgb, 4, r, g, b, a);
impl_field_ctor!(Yuv, 1, y);
impl_field_ctor!(Yuv, 3, y, u, v);

impl<T, const N: usize, S: Fields<T, N>> Deref for Vector<T, N, S> {
    type Target = S::View;

    #[inline]
    fn deref(&self) -> &Self::Target {
        // SAFETY: `Self` is `repr(transparent)` over `[T; N]` and `S::View`
        // is a `repr(C)` struct of `N` fields of type `T`, so both types
        // have identical size, alignment and per-element offsets. The layout
        // equality is additionally asserted in `lib.rs` for the canonical
        // instantiations.
        unsafe { &*(self as *const Self).cast::<S::View>() }
    }
}

impl<T, const N: usize, S: Fields<T, N>> DerefMut for Vector<T, N, S> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: see `Deref`.
        unsafe { &mut *(self as *mut Self).cast::<S::View>() }
    }
}

impl<T, const N: usize, S> Index<usize> for Vector<T, N, S> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T, const N: usize, S> IndexMut<usize> for Vector<T, N, S> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T: Clone, const N: usize, S> Clone for Vector<T, N, S> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            marker: PhantomData,
        }
    }
}

impl<T: Copy, const N: usize, S> Copy for Vector<T, N, S> {}

impl<T: Zero + Copy, const N: usize, S: Shape> Default for Vector<T, N, S> {
    /// Zero-fills all slots.
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: PartialEq, const N: usize, S> PartialEq for Vector<T, N, S> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq, const N: usize, S> Eq for Vector<T, N, S> {}

impl<T: PartialOrd, const N: usize, S> PartialOrd for Vector<T, N, S> {
    /// Lexicographic: the first index at which the operands differ decides.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.data.partial_cmp(&other.data)
    }
}

impl<T: Ord, const N: usize, S> Ord for Vector<T, N, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.data.cmp(&other.data)
    }
}

impl<T: Debug, const N: usize, S> Debug for Vector<T, N, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("Vector({:?})", &self.data))
    }
}

impl<T: Display, const N: usize, S> Display for Vector<T, N, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        print_slice(f, &self.data)
    }
}

impl<T, const N: usize, S: Shape> From<[T; N]> for Vector<T, N, S> {
    fn from(data: [T; N]) -> Self {
        Self::from_array(data)
    }
}

impl<T, const N: usize, S: Shape> From<Vector<T, N, S>> for [T; N] {
    fn from(v: Vector<T, N, S>) -> Self {
        v.into_array()
    }
}

impl<T, const N: usize, S> AsRef<[T]> for Vector<T, N, S> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T, const N: usize, S> AsMut<[T]> for Vector<T, N, S> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T, const N: usize, S> IntoIterator for Vector<T, N, S> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const N: usize, S> IntoIterator for &'a Vector<T, N, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, const N: usize, S> IntoIterator for &'a mut Vector<T, N, S> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

// Storage is a single `[T; N]` plus a zero-sized shape marker.
unsafe impl<T: Zeroable, const N: usize, S: Shape> Zeroable for Vector<T, N, S> {}
unsafe impl<T: Pod, const N: usize, S: Shape> Pod for Vector<T, N, S> {}

impl<T, const N: usize, S> AbsDiffEq for Vector<T, N, S>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize, S> RelativeEq for Vector<T, N, S>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize, S> UlpsEq for Vector<T, N, S>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(feature = "serde")]
impl<T, const N: usize, S> serde::Serialize for Vector<T, N, S>
where
    T: serde::Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        self.data.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, const N: usize, S: Shape> serde::Deserialize<'de> for Vector<T, N, S>
where
    [T; N]: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <[T; N]>::deserialize(deserializer).map(Self::from_array)
    }
}
