//! Doxygen XML extraction pipeline.
//!
//! Reads a Doxygen XML output directory, interprets its index, decodes each
//! compound document and turns every definition into a typed [`Entity`](crate::Entity).

pub(crate) mod builders;
pub(crate) mod dispatch;
pub mod index;
pub mod parser;
pub mod result;
pub(crate) mod schema;
pub mod source;
pub(crate) mod text;

pub use index::{CompoundRef, DoxygenIndex, parse_index};
pub use parser::parse;
pub use result::{ParseError, ParseMetadata, ParseResult, Severity};
