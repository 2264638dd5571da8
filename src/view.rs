//! Named-field views over vector storage.
//!
//! Each view is a `#[repr(C)]` struct whose fields are all of the same
//! element type, in canonical order. A view with `N` fields therefore has
//! exactly the size and per-element offsets of `[T; N]`, which lets
//! [`Vector`](crate::Vector) hand out `&Xyz<T>` (and the other views) over
//! its own storage: writing `.x` and reading `vec[0]` observe the same
//! value.
//!
//! Which view belongs to which (shape tag, element count) pair is decided by
//! [`Fields`](crate::Fields); views are never instantiated on their own.

use bytemuck::{Pod, Zeroable};

macro_rules! def_view {
    ($(#[$meta:meta])* $name:ident { $($field:ident),+ }) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub struct $name<T> {
            $(
                #[doc = concat!("The `", stringify!($field), "` component.")]
                pub $field: T,
            )+
        }

        // All fields share one type and the struct is `repr(C)`, so the
        // layout is that of an array of the field type.
        unsafe impl<T: Zeroable> Zeroable for $name<T> {}
        unsafe impl<T: Pod> Pod for $name<T> {}
    };
}

def_view! {
    /// One-component Cartesian view: `x`.
    X { x }
}
def_view! {
    /// Two-component Cartesian view: `x`, `y`.
    Xy { x, y }
}
def_view! {
    /// Three-component Cartesian view: `x`, `y`, `z`.
    Xyz { x, y, z }
}
def_view! {
    /// Four-component Cartesian view: `x`, `y`, `z`, `w`.
    Xyzw { x, y, z, w }
}
def_view! {
    /// Three-component color view: `r`, `g`, `b`.
    Rgb { r, g, b }
}
def_view! {
    /// Four-component color view: `r`, `g`, `b`, `a`.
    Rgba { r, g, b, a }
}
def_view! {
    /// Single-component luma view: `y`.
    Y { y }
}
def_view! {
    /// Three-component luma/chroma view: `y`, `u`, `v`.
    Yuv { y, u, v }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{align_of, size_of};

    #[test]
    fn view_layouts_match_arrays() {
        assert_eq!(size_of::<X<f32>>(), size_of::<[f32; 1]>());
        assert_eq!(size_of::<Xy<f32>>(), size_of::<[f32; 2]>());
        assert_eq!(size_of::<Xyz<f32>>(), size_of::<[f32; 3]>());
        assert_eq!(size_of::<Xyzw<f32>>(), size_of::<[f32; 4]>());
        assert_eq!(size_of::<Rgb<u8>>(), size_of::<[u8; 3]>());
        assert_eq!(size_of::<Rgba<u8>>(), size_of::<[u8; 4]>());
        assert_eq!(size_of::<Y<f64>>(), size_of::<[f64; 1]>());
        assert_eq!(size_of::<Yuv<f64>>(), size_of::<[f64; 3]>());

        assert_eq!(align_of::<Xyzw<f32>>(), align_of::<[f32; 4]>());
        assert_eq!(align_of::<Yuv<f64>>(), align_of::<[f64; 3]>());
    }

    #[test]
    fn view_field_offsets() {
        let v = Xyzw {
            x: 1u32,
            y: 2,
            z: 3,
            w: 4,
        };
        let arr: [u32; 4] = bytemuck::cast(v);
        assert_eq!(arr, [1, 2, 3, 4]);

        let c = Rgba {
            r: 10u8,
            g: 20,
            b: 30,
            a: 40,
        };
        let arr: [u8; 4] = bytemuck::cast(c);
        assert_eq!(arr, [10, 20, 30, 40]);
    }
}
