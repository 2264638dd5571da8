//! Shape tags and the named-field contract.
//!
//! A shape tag is a zero-sized, type-level selector deciding which named
//! fields (if any) a [`Vector`](crate::Vector) of a given element count
//! exposes. Tags carry no data and never exist at runtime; they only steer
//! trait resolution.

use crate::view;

mod sealed {
    pub trait Sealed {}
}

/// Type-level selector for the named-field layout of a vector.
///
/// The set of shapes is closed; this trait is sealed and implemented exactly
/// for [`Indexed`], [`Cartesian`], [`Rgb`] and [`Yuv`].
pub trait Shape: sealed::Sealed + 'static {}

macro_rules! def_shape {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub struct $name;

        impl sealed::Sealed for $name {}
        impl Shape for $name {}
    };
}

def_shape! {
    /// Plain indexed vector; no named fields, any element count.
    Indexed
}
def_shape! {
    /// Geometric shape: `x`, `y`, `z`, `w` for counts 1 to 4. Counts outside
    /// 1..=4 are still valid vectors, they just expose no named fields,
    /// matching the plain indexed layout.
    Cartesian
}
def_shape! {
    /// Color shape: `r`, `g`, `b` for count 3, plus `a` for count 4.
    Rgb
}
def_shape! {
    /// Luma/chroma shape: `y` for count 1; `y`, `u`, `v` for count 3.
    Yuv
}

/// Maps a supported (shape, element count) pair to its named-field view.
///
/// Implemented only for the closed set of conventional layouts; requesting
/// named fields or the exact-arity constructor for any other pair is a
/// compile-time error, not a runtime one:
///
/// ```compile_fail
/// use tagvec::{Rgb, Vector};
///
/// // There is no two-field color layout.
/// let v: Vector<f32, 2, Rgb> = Vector::new(0.1, 0.2);
/// ```
pub trait Fields<T, const N: usize>: Shape {
    /// The field-named struct overlapping the vector storage.
    type View;
}

impl<T> Fields<T, 1> for Cartesian {
    type View = view::X<T>;
}
impl<T> Fields<T, 2> for Cartesian {
    type View = view::Xy<T>;
}
impl<T> Fields<T, 3> for Cartesian {
    type View = view::Xyz<T>;
}
impl<T> Fields<T, 4> for Cartesian {
    type View = view::Xyzw<T>;
}
impl<T> Fields<T, 3> for Rgb {
    type View = view::Rgb<T>;
}
impl<T> Fields<T, 4> for Rgb {
    type View = view::Rgba<T>;
}
impl<T> Fields<T, 1> for Yuv {
    type View = view::Y<T>;
}
impl<T> Fields<T, 3> for Yuv {
    type View = view::Yuv<T>;
}
