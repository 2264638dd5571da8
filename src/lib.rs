//! Shape-tagged small-vector numeric containers.
//!
//! A [`Vector`] is a fixed-size sequence of homogeneous numeric elements
//! that can be accessed generically (by index, by slice, by iteration) or
//! through named fields whose meaning is selected by a compile-time
//! [`Shape`] tag: geometric `x`/`y`/`z`/`w` ([`Cartesian`]), color
//! `r`/`g`/`b`/`a` ([`Rgb`]), luma/chroma `y`/`u`/`v` ([`Yuv`]), or a plain
//! indexed layout ([`Indexed`]). The named-field view and the indexed view
//! cover the same storage with zero runtime overhead; a vector's memory
//! footprint is exactly that of its element array.
//!
//! ```
//! use tagvec::{Rgbf, Vector3f};
//!
//! let mut v = Vector3f::new(1.0, 2.0, 3.0);
//! v.x = 10.0;
//! assert_eq!(v[0], 10.0);
//!
//! let c = Rgbf::new(0.2, 0.4, 0.6);
//! assert_eq!(c.g, c[1]);
//!
//! let w = Vector3f::new(2.0, 3.0, 4.0);
//! assert_eq!((v + w).z, 7.0);
//! assert_eq!(v.dot(&w), 38.0);
//! ```
//!
//! Two storage disciplines share the indexing and iteration contract:
//! [`Vector`], whose size always equals its capacity, and [`DynVector`],
//! which is sized to a compile-time maximum capacity but carries a
//! runtime-set, immutable logical length. A third, allocator-backed
//! discipline (runtime capacity with small-buffer optimisation) is a
//! documented extension point and intentionally not implemented.
//!
//! The supported (shape, count) combinations form a closed set enforced by
//! the type system through [`Fields`]; asking for an unsupported pairing is
//! a compile-time error. Out-of-range indexed access panics; `get` probes
//! without panicking; `get_unchecked` opts into the unchecked fast path.

#![warn(missing_docs)]

mod bounded;
mod fixed;
mod ops;
mod shape;
mod utils;
pub mod view;

pub use bounded::DynVector;
pub use fixed::Vector;
pub use ops::{cross, dot};
pub use shape::{Cartesian, Fields, Indexed, Rgb, Shape, Yuv};

/// One-element Cartesian vector of `f32`: `x`.
pub type Vector1f = Vector<f32, 1>;
/// Two-element Cartesian vector of `f32`: `x`, `y`.
pub type Vector2f = Vector<f32, 2>;
/// Three-element Cartesian vector of `f32`: `x`, `y`, `z`.
pub type Vector3f = Vector<f32, 3>;
/// Four-element Cartesian vector of `f32`: `x`, `y`, `z`, `w`.
pub type Vector4f = Vector<f32, 4>;
/// Ten-element plain vector of `f32`; indexed access only.
pub type Vector10f = Vector<f32, 10, Indexed>;
/// Bounded-dynamic vector of `f32` with capacity 10 and a runtime length.
pub type VectorX10f = DynVector<f32, 10>;
/// Three-component color of `f32`: `r`, `g`, `b`.
pub type Rgbf = Vector<f32, 3, Rgb>;
/// Four-component color of `f32`: `r`, `g`, `b`, `a`.
pub type Rgbaf = Vector<f32, 4, Rgb>;
/// Three-component luma/chroma of `f32`: `y`, `u`, `v`.
pub type Yuvf = Vector<f32, 3, Yuv>;

// Layout contract: a fixed vector occupies exactly its element array, the
// bounded-dynamic vector adds exactly one length field, and every named
// view matches its backing array.
mod layout_checks {
    use super::*;
    use core::mem::size_of;
    use static_assertions::{assert_eq_size, const_assert_eq};

    assert_eq_size!(Vector1f, f32);
    assert_eq_size!(Vector2f, [f32; 2]);
    assert_eq_size!(Vector3f, [f32; 3]);
    assert_eq_size!(Vector4f, [f32; 4]);
    assert_eq_size!(Vector10f, [f32; 10]);
    assert_eq_size!(Rgbf, [f32; 3]);
    assert_eq_size!(Rgbaf, [f32; 4]);
    assert_eq_size!(Yuvf, [f32; 3]);

    assert_eq_size!(view::X<f32>, [f32; 1]);
    assert_eq_size!(view::Xy<f32>, [f32; 2]);
    assert_eq_size!(view::Xyz<f32>, [f32; 3]);
    assert_eq_size!(view::Xyzw<f32>, [f32; 4]);
    assert_eq_size!(view::Rgb<u8>, [u8; 3]);
    assert_eq_size!(view::Rgba<u8>, [u8; 4]);
    assert_eq_size!(view::Y<f64>, [f64; 1]);
    assert_eq_size!(view::Yuv<f64>, [f64; 3]);

    const_assert_eq!(
        size_of::<VectorX10f>(),
        size_of::<Vector10f>() + size_of::<usize>()
    );

    const_assert_eq!(Vector1f::CAPACITY, 1);
    const_assert_eq!(Vector2f::CAPACITY, 2);
    const_assert_eq!(Vector3f::CAPACITY, 3);
    const_assert_eq!(Vector4f::CAPACITY, 4);
    const_assert_eq!(Vector10f::CAPACITY, 10);
    const_assert_eq!(VectorX10f::CAPACITY, 10);
}
