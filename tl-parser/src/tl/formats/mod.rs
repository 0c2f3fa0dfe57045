//! Output formats
//!
//! [`tl`] is the round-trip writer; the others serve downstream tooling.
//! All of them are reachable by name through [`FormatRegistry`].

pub mod listing;
pub mod proto;
pub mod registry;
pub mod structured;
pub mod tl;

pub use listing::ListingFormatter;
pub use proto::ProtoFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use structured::{JsonFormatter, YamlFormatter};
pub use self::tl::{write_schema, TlFormatter};
