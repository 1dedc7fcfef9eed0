#![doc(html_logo_url = "https://nical.github.io/lyon-doc/lyon-logo.svg")]
#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![no_std]

//! Polynomial roots and bézier curve crossing math on top of euclid.
//!
//! This crate is reexported in [crossings](https://docs.rs/crossings/).
//!
//! # Overview.
//!
//! This crate implements the numerical building blocks of ray-crossing tests:
//!
//! - real roots of quadratic and cubic polynomials,
//! - parametric models of quadratic and cubic bézier curves, translated so that
//!   their first point is the origin,
//! - a small table of candidate curve points used to decide whether a curve
//!   crosses a horizontal stripe.
//!
//! All of the computation happens in `f64` and on the stack.
//!
//! # Tolerance
//!
//! Parameters within [`DELTA`](polynomial/constant.DELTA.html) of `0` or `1`
//! are treated as curve endpoints, and roots closer than `DELTA` to each other
//! are merged. The tighter [`ROOT_DELTA`](polynomial/constant.ROOT_DELTA.html)
//! only steers the branches of the cubic solver.
//!

#[cfg(any(test, feature = "std"))]
extern crate std;

// Reexport dependencies.
pub use arrayvec;
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod bound;
pub mod cubic_bezier;
pub mod polynomial;
pub mod quadratic_bezier;

#[doc(inline)]
pub use crate::bound::{BoundClass, BoundEntry, BoundTable};
#[doc(inline)]
pub use crate::cubic_bezier::CubicCurve;
#[doc(inline)]
pub use crate::polynomial::{solve_cubic, solve_quadratic, Roots, Solutions, DELTA, ROOT_DELTA};
#[doc(inline)]
pub use crate::quadratic_bezier::QuadraticCurve;

/// Alias for `euclid::default::Point2D<f64>`.
pub type Point = euclid::default::Point2D<f64>;

/// Alias for `euclid::default::Vector2D<f64>`.
pub type Vector = euclid::default::Vector2D<f64>;

/// Alias for `euclid::default::Size2D<f64>`.
pub type Size = euclid::default::Size2D<f64>;

/// Alias for `euclid::default::Box2D<f64>`.
pub type Box2D = euclid::default::Box2D<f64>;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector(x: f64, y: f64) -> Vector {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Shorthand for `Size::new(w, h)`.
#[inline]
pub fn size(w: f64, h: f64) -> Size {
    Size::new(w, h)
}

/// Shorthand for `Box2D::new(point(x, y), point(x + w, y + h))`.
#[inline]
pub fn rect(x: f64, y: f64, w: f64, h: f64) -> Box2D {
    Box2D {
        min: point(x, y),
        max: point(x + w, y + h),
    }
}

#[test]
fn shorthands() {
    assert_eq!(point(1.0, 2.0), Point::new(1.0, 2.0));
    assert_eq!(vector(1.0, 2.0), Vector::new(1.0, 2.0));
    assert_eq!(size(3.0, 4.0), Size::new(3.0, 4.0));
    assert_eq!(
        rect(1.0, 2.0, 3.0, 4.0),
        Box2D {
            min: point(1.0, 2.0),
            max: point(4.0, 6.0)
        }
    );
    assert_eq!(rect(1.0, 2.0, 3.0, 4.0).size(), size(3.0, 4.0));
}
