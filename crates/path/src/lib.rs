#![doc(html_logo_url = "https://nical.github.io/lyon-doc/lyon-logo.svg")]
#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::match_like_matches_macro)]
#![no_std]

//! Data structures and traits to describe the paths and shapes that are
//! hit-tested.
//!
//! A path is consumed as a single-pass sequence of [`PathEvent`]s. A
//! [`Shape`] additionally knows its axis-aligned bounding box, which lets
//! hit-tests reject queries early.
//!
//! This crate is reexported in [crossings](https://docs.rs/crossings/).
//!
//! # Examples
//!
//! ```
//! # extern crate crossings_path;
//! # fn main() {
//! use crossings_path::Path;
//! use crossings_path::math::point;
//!
//! // Create a builder object to build the path.
//! let mut builder = Path::builder();
//! builder.begin(point(0.0, 0.0));
//! builder.line_to(point(1.0, 2.0));
//! builder.quadratic_bezier_to(point(2.0, 2.0), point(2.0, 0.0));
//! builder.close();
//!
//! // Generate the actual path object.
//! let path = builder.build();
//!
//! for event in &path {
//!     println!("{:?}", event);
//! }
//! # }
//! ```
//!

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub use crossings_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod events;
pub mod path;
pub mod polygon;
pub mod shape;

pub use crate::events::*;
#[doc(inline)]
pub use crate::path::{Builder, Path};
#[doc(inline)]
pub use crate::polygon::Polygon;
#[doc(inline)]
pub use crate::shape::Shape;

pub mod math {
    //! The f64 geometry types used everywhere. The other crates reexport them.

    pub use crate::geom::{point, rect, size, vector, Box2D, Point, Size, Vector};
}

/// The fill rule defines how to determine what is inside and what is outside of the shape.
///
/// See the SVG specification.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum FillRule {
    EvenOdd,
    NonZero,
}

impl FillRule {
    #[inline]
    pub fn is_in(&self, winding_number: i32) -> bool {
        match *self {
            FillRule::EvenOdd => winding_number % 2 != 0,
            FillRule::NonZero => winding_number != 0,
        }
    }

    #[inline]
    pub fn is_out(&self, winding_number: i32) -> bool {
        !self.is_in(winding_number)
    }
}

impl Default for FillRule {
    fn default() -> Self {
        FillRule::NonZero
    }
}

#[test]
fn fill_rules() {
    assert!(FillRule::NonZero.is_in(1));
    assert!(FillRule::NonZero.is_in(-2));
    assert!(FillRule::NonZero.is_out(0));

    assert!(FillRule::EvenOdd.is_in(1));
    assert!(FillRule::EvenOdd.is_in(-3));
    assert!(FillRule::EvenOdd.is_out(2));
    assert!(FillRule::EvenOdd.is_out(-2));
    assert!(FillRule::EvenOdd.is_out(0));
}
