//! Construction and serialization of WCPS queries.
//!
//! WCPS (Web Coverage Processing Service) is the OGC language for querying
//! geospatial datacubes. This crate builds the query text only: callers
//! assemble coverages, axis subsets, expressions, and optionally a
//! color-coding switch, then generate a string for a server such as rasdaman
//! to evaluate. Delivering the text is a transport concern, handled by the
//! companion `wcps-client` crate.
//!
//! ```
//! use wcps_query::{Axis, Coverage, OperationKind, Query, ReturnFormat, VariableAllocator};
//!
//! let vars = VariableAllocator::new();
//! let mut coverage = Coverage::with_allocator("AvgLandTemp", &vars);
//! coverage.set_subset([
//!     Axis::point("Lat", 53.08),
//!     Axis::point("Long", 8.80),
//!     Axis::range("ansi", "\"2014-01\"", "\"2014-12\""),
//! ])?;
//!
//! let query = Query::new()
//!     .with_coverage(&coverage)
//!     .with_operation(OperationKind::Encode)
//!     .with_return(ReturnFormat::Csv);
//!
//! assert_eq!(
//!     query.generate(&coverage)?,
//!     "for $c1 in (AvgLandTemp)\n\
//!      return encode($c1[Lat(53.08), Long(8.8), ansi(\"2014-01\":\"2014-12\")], \"text/csv\")"
//! );
//! # Ok::<(), wcps_query::QueryError>(())
//! ```

mod axis;
mod color;
mod coverage;
mod errors;
mod expr;
mod query;
mod scalar;

pub use axis::Axis;
pub use color::{Case, RgbColor, Switch};
pub use coverage::{Coverage, VariableAllocator};
pub use errors::QueryError;
pub use expr::{BinOp, Expr};
pub use query::{OperationKind, Query, ReturnFormat};
pub use scalar::Scalar;
