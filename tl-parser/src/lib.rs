//! # tl-parser
//!
//! A parser and round-trip writer for TL schema files.
//!
//! TL ("Type Language") schemas declare serializable constructors and RPC
//! functions, one per line, grouped by `---types---` / `---functions---`
//! sections and documented with `//@name value` annotations:
//!
//! ```text
//! //@class Pong @description Reply to a ping
//!
//! pong#347773c5 msg_id:long ping_id:long = Pong;
//!
//! ---functions---
//!
//! //@description Checks that the connection is alive @ping_id Random id
//! ping#7abe77ec ping_id:long = Pong;
//! ```
//!
//! File Layout
//!
//! src/tl
//!   ├── token, grammar   Single-declaration and annotation grammars
//!   ├── ast              The schema model
//!   ├── parsing          The document-level line scanner
//!   ├── formats          Serializers (the round-trip TL writer among them)
//!   ├── loader           File / string / reader entry points
//!   └── testing          Sample schemas and fluent assertions
//!
//! For the testing conventions, see the [testing module](tl::testing).

pub mod tl;
