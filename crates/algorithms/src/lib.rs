#![doc(html_logo_url = "https://nical.github.io/lyon-doc/lyon-logo.svg")]
#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]
#![allow(clippy::too_many_arguments)]
#![no_std]

//! Ray-crossing based hit-testing of paths made of lines, quadratic and cubic
//! bézier curves.
//!
//! This crate is reexported in [crossings](https://docs.rs/crossings/).
//!
//! # Crossing numbers
//!
//! All tests cast a vertical ray from the query position towards positive y
//! and count the signed crossings between the ray and the edges of the path.
//! Edges going towards positive x count `+1`, the others `-1`. The sum is
//! interpreted by a [`FillRule`](path/enum.FillRule.html).
//!
//! Curves are not flattened: the crossings are found by solving for the
//! curve parameters at the query's x coordinate.
//!
//! Rectangle tests sweep the same ray over the whole rectangle. As soon as an
//! edge is found to enter the rectangle, the test stops with
//! [`RectCrossing::Intersects`](crossing/enum.RectCrossing.html).
//!
//! # Examples
//!
//! ```
//! use crossings_algorithms::hit_test::{hit_test_path, HitTestOptions};
//! use crossings_algorithms::path::Path;
//! use crossings_algorithms::math::point;
//!
//! let mut builder = Path::builder();
//! builder.begin(point(0.0, 0.0));
//! builder.quadratic_bezier_to(point(5.0, 10.0), point(10.0, 0.0));
//! builder.close();
//! let path = builder.build();
//!
//! assert!(hit_test_path(&point(5.0, 2.0), &path, &HitTestOptions::DEFAULT));
//! assert!(!hit_test_path(&point(5.0, 8.0), &path, &HitTestOptions::DEFAULT));
//! ```

pub extern crate crossings_path as path;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod crossing;
mod error;
pub mod hit_test;

pub use crate::error::HitTestError;
pub use crate::path::geom;
pub use crate::path::math;
