//! Bidirectional codec for Visual Studio solution (`.sln`) files.
//!
//! Parses a line stream into the typed model from `sln-model` and
//! serializes that model back into the exact textual form the reference
//! toolchain produces, including the fixed canonical ordering of global
//! sections on write.
//!
//! The codec never touches the filesystem: [`parse`] consumes any
//! `BufRead` and [`write`] emits to any `io::Write`; stream lifetime and
//! encoding are the caller's responsibility.
//!
//! # Round trip
//!
//! ```
//! use sln_codec::{parse_str, write_string};
//!
//! let input = [
//!     "",
//!     "Microsoft Visual Studio Solution File, Format Version 12.00",
//!     "# Visual Studio Version 17",
//!     "VisualStudioVersion = 17.0.31903.59",
//!     "MinimumVisualStudioVersion = 10.0.40219.1",
//!     "Global",
//!     "\tGlobalSection(SolutionConfigurationPlatforms) = preSolution",
//!     "\t\tDebug|Any CPU = Debug|Any CPU",
//!     "\tEndGlobalSection",
//!     "\tGlobalSection(SolutionProperties) = preSolution",
//!     "\t\tHideSolutionNode = FALSE",
//!     "\tEndGlobalSection",
//!     "EndGlobal",
//!     "",
//! ]
//! .join("\n");
//!
//! let document = parse_str(&input).unwrap();
//! assert_eq!(write_string(&document).unwrap(), input);
//! ```

pub mod error;
pub mod grammar;
pub mod order;
pub mod parser;
pub mod writer;

pub use error::{Error, Result};
pub use order::canonical_order;
pub use parser::{parse, parse_str};
pub use writer::{write, write_string};
