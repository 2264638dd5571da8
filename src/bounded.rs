//! Bounded-dynamic vector container.

use crate::utils::print_slice;
use core::{
    cmp::Ordering,
    fmt::{Debug, Display},
    ops::{Index, IndexMut},
    slice::{Iter, IterMut},
};
use num_traits::Zero;

/// A vector with compile-time capacity `N` and a runtime-set logical length.
///
/// Storage is sized to the full capacity on the stack (no allocation); a
/// trailing length field records how many leading slots belong to the
/// logical vector. The length is set at construction and never changes:
/// growing and shrinking are non-goals of this container. Slots past the
/// logical length exist in storage (zeroed) but are not observable through
/// the public interface.
///
/// The length must lie in `1..=N`; this precondition is checked with
/// `debug_assert!` only, keeping the release fast path free of the check.
///
/// ```
/// use tagvec::VectorX10f;
///
/// let v = VectorX10f::new(5);
/// assert_eq!(v.len(), 5);
/// assert_eq!(v.capacity(), 10);
/// ```
///
/// An allocator-backed variant (runtime capacity with a small-buffer
/// optimisation) is a planned extension point sharing this indexing and
/// iteration contract; it is deliberately not part of this crate.
#[derive(Clone, Copy)]
pub struct DynVector<T, const N: usize> {
    pub(crate) data: [T; N],
    pub(crate) len: usize,
}

impl<T, const N: usize> DynVector<T, N> {
    /// Maximum number of elements.
    pub const CAPACITY: usize = N;

    /// Creates a zero-filled vector with the given logical length.
    #[track_caller]
    pub fn new(len: usize) -> Self
    where
        T: Zero + Copy,
    {
        debug_assert!(
            (1..=N).contains(&len),
            "length {} outside 1..={}",
            len,
            N
        );
        Self {
            data: [T::zero(); N],
            len,
        }
    }

    /// Creates a vector of length `len` with every logical element set to
    /// `value`.
    #[track_caller]
    pub fn splat(value: T, len: usize) -> Self
    where
        T: Zero + Copy,
    {
        let mut out = Self::new(len);
        out.data[..len].fill(value);
        out
    }

    /// Creates a vector whose logical elements are copied from `slice`,
    /// with length `slice.len()`.
    #[track_caller]
    pub fn from_slice(slice: &[T]) -> Self
    where
        T: Zero + Copy,
    {
        let mut out = Self::new(slice.len());
        out.data[..slice.len()].copy_from_slice(slice);
        out
    }

    /// Returns the maximum number of elements.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the logical number of elements.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector holds no logical elements. Never true
    /// for a vector constructed through the public interface.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the logical elements as a slice in index order.
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.len]
    }

    /// Returns the logical elements as a mutable slice in index order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.len]
    }

    /// Returns a pointer to the first element.
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Returns a mutable pointer to the first element.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// Returns the element at `index`, or `None` if past the logical length.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns the element at `index` mutably, or `None` if past the
    /// logical length.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.len()`.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        self.data.get_unchecked(index)
    }

    /// Returns the element at `index` mutably, without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.len()`.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        self.data.get_unchecked_mut(index)
    }

    /// Returns an iterator over the logical elements in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a mutable iterator over the logical elements in index order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T, const N: usize> Index<usize> for DynVector<T, N> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for DynVector<T, N> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: PartialEq, const N: usize> PartialEq for DynVector<T, N> {
    /// Compares the logical elements only; equal vectors have equal lengths.
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const N: usize> Eq for DynVector<T, N> {}

impl<T: PartialOrd, const N: usize> PartialOrd for DynVector<T, N> {
    /// Lexicographic over the logical elements.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, const N: usize> Ord for DynVector<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Debug, const N: usize> Debug for DynVector<T, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("DynVector({:?})", self.as_slice()))
    }
}

impl<T: Display, const N: usize> Display for DynVector<T, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        print_slice(f, self.as_slice())
    }
}

impl<T, const N: usize> AsRef<[T]> for DynVector<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> AsMut<[T]> for DynVector<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> IntoIterator for DynVector<T, N> {
    type Item = T;
    type IntoIter = core::iter::Take<core::array::IntoIter<T, N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter().take(self.len)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a DynVector<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut DynVector<T, N> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(feature = "serde")]
impl<T, const N: usize> serde::Serialize for DynVector<T, N>
where
    T: serde::Serialize,
{
    /// Serializes the logical elements as a sequence.
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        serializer.collect_seq(self.as_slice())
    }
}

#[cfg(feature = "serde")]
impl<'de, T, const N: usize> serde::Deserialize<'de> for DynVector<T, N>
where
    T: serde::Deserialize<'de> + Zero + Copy,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let elems = Vec::<T>::deserialize(deserializer)?;
        if elems.is_empty() || elems.len() > N {
            return Err(D::Error::invalid_length(
                elems.len(),
                &"between 1 and the vector capacity",
            ));
        }
        Ok(Self::from_slice(&elems))
    }
}

#[cfg(test)]
mod tests {
    use crate::{DynVector, Vector10f, VectorX10f};
    use core::mem::size_of;

    #[test]
    fn footprint_is_fixed_storage_plus_length_field() {
        assert_eq!(
            size_of::<VectorX10f>(),
            size_of::<Vector10f>() + size_of::<usize>()
        );
    }

    #[test]
    fn len_and_capacity() {
        let v = VectorX10f::new(1);
        assert_eq!((v.len(), v.capacity()), (1, 10));
        let v = VectorX10f::new(5);
        assert_eq!((v.len(), v.capacity()), (5, 10));
        let v = VectorX10f::new(10);
        assert_eq!((v.len(), v.capacity()), (10, 10));
        assert_eq!(VectorX10f::CAPACITY, 10);
        assert!(!v.is_empty());
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn zero_length_is_rejected_in_debug() {
        let _ = VectorX10f::new(0);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn over_capacity_length_is_rejected_in_debug() {
        let _ = VectorX10f::new(11);
    }

    #[test]
    fn construction_fills() {
        let v = VectorX10f::new(4);
        assert_eq!(v.as_slice(), &[0.0; 4]);
        let v = DynVector::<i32, 10>::splat(7, 3);
        assert_eq!(v.as_slice(), &[7, 7, 7]);
        let v = DynVector::<i32, 10>::from_slice(&[1, 2, 3, 4]);
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn indexing_is_bounded_by_logical_length() {
        let mut v = DynVector::<i32, 10>::from_slice(&[1, 2, 3]);
        v[1] = 20;
        assert_eq!(v[1], 20);
        assert_eq!(v.get(2), Some(&3));
        assert_eq!(v.get(3), None);
        assert_eq!(unsafe { *v.get_unchecked(0) }, 1);
    }

    #[test]
    #[should_panic]
    fn indexing_past_logical_length_panics() {
        let v = DynVector::<i32, 10>::from_slice(&[1, 2, 3]);
        let _ = v[3];
    }

    #[test]
    fn iteration_covers_logical_elements_only() {
        let mut v = DynVector::<i32, 10>::from_slice(&[1, 2, 3, 4, 5]);
        assert_eq!(v.iter().count(), 5);
        assert_eq!(v.iter().count(), 5);
        for e in &mut v {
            *e *= 2;
        }
        assert_eq!(v.into_iter().collect::<Vec<_>>(), vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn comparison_over_logical_elements() {
        let a = DynVector::<i32, 10>::from_slice(&[1, 2, 3]);
        let b = DynVector::<i32, 10>::from_slice(&[1, 2, 4]);
        assert!(a < b);
        assert!(a == a);
        assert!(!(a < a));
        // A shorter vector that is a prefix of a longer one orders first.
        let c = DynVector::<i32, 10>::from_slice(&[1, 2]);
        assert!(c < a);
    }

    #[test]
    fn formatting() {
        let v = DynVector::<i32, 10>::from_slice(&[1, 2, 3]);
        assert_eq!(format!("{:?}", v), "DynVector([1, 2, 3])");
        assert_eq!(format!("{}", v), "[1, 2, 3]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let v = DynVector::<i32, 10>::from_slice(&[1, 2, 3]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1,2,3]");
        let back: DynVector<i32, 10> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
        assert_eq!(back.len(), 3);

        let too_long: Result<DynVector<i32, 2>, _> = serde_json::from_str("[1,2,3]");
        assert!(too_long.is_err());
        let empty: Result<DynVector<i32, 2>, _> = serde_json::from_str("[]");
        assert!(empty.is_err());
    }
}
