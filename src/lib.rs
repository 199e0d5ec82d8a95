//! # inoprep - Arduino Example Build Prep
//!
//! inoprep prepares an Arduino library's `examples/` folder for a C++
//! toolchain: every example directory holding a sketch named after itself
//! gets a sibling `.cpp` file with an exact copy of the sketch's contents,
//! so the toolchain can compile the example without renaming the original.
//!
//! ## Quick Start
//!
//! ```bash
//! # From the library root (the directory containing examples/)
//! inoprep
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - The mirroring pass configuration record
//! - [`fsio`] - Narrow filesystem port (listing, probing, copying)
//! - [`mirror`] - The mirroring pass itself

/// Mirroring pass configuration.
pub mod config;

/// Filesystem access behind a narrow port.
pub mod fsio;

/// The sketch mirroring pass.
pub mod mirror;
