#![doc(html_logo_url = "https://nical.github.io/lyon-doc/lyon-logo.svg")]
#![deny(bare_trait_objects)]
#![no_std]

//! Exact point containment and rectangle intersection tests for 2D paths made
//! of lines, quadratic and cubic bézier curves.
//!
//! # Crates
//!
//! This meta-crate (`crossings`) reexports the following sub-crates for convenience:
//!
//! * **crossings_algorithms** - Crossing numbers, hit-testing and rectangle queries.
//! * **crossings_path** - Tools to build and iterate over paths and shapes.
//! * **crossings_geom** - Polynomial roots and bézier curve crossing math.
//!
//! Each `crossings_<name>` crate is reexported as a `<name>` module in `crossings`.
//!
//! # Overview
//!
//! Curves are never flattened. A query casts a vertical ray from the
//! position towards positive y and counts the signed crossings between the
//! ray and each edge, solving the curves' polynomials where needed. The sum
//! is interpreted with the non-zero or the even-odd fill rule.
//!
//! ```
//! use crossings::math::{point, rect};
//! use crossings::path::Path;
//! use crossings::hit_test::*;
//!
//! let mut builder = Path::builder();
//! builder.begin(point(0.0, 5.0));
//! builder.quadratic_bezier_to(point(0.0, 0.0), point(5.0, 0.0));
//! builder.quadratic_bezier_to(point(10.0, 0.0), point(10.0, 5.0));
//! builder.cubic_bezier_to(point(10.0, 12.0), point(0.0, 12.0), point(0.0, 5.0));
//! builder.close();
//! let path = builder.build();
//!
//! let options = HitTestOptions::non_zero();
//!
//! assert!(hit_test_shape(&path, &point(5.0, 5.0), &options));
//! assert!(!hit_test_shape(&path, &point(0.5, 0.5), &options));
//!
//! assert!(shape_contains_rect(&path, &rect(4.0, 4.0, 2.0, 2.0), &options));
//! assert!(shape_intersects_rect(&path, &rect(8.0, 4.0, 4.0, 2.0), &options));
//! ```

pub extern crate crossings_algorithms;

pub use crossings_algorithms as algorithms;
pub use crossings_algorithms::path;
pub use path::geom;
pub use path::math;

pub use algorithms::crossing;
pub use algorithms::hit_test;
pub use algorithms::HitTestError;
pub use path::FillRule;
