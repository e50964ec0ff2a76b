//! Unamd - AMD to ES module migration checker
//!
//! Unamd is a CLI tool and library for finding legacy AMD `define()` module
//! definitions in JavaScript sources and mechanically rewriting them to
//! static `import`/`export` syntax where that is safe.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (check, fix, init)
//! - `config`: Configuration file loading and parsing
//! - `convert`: The conversion engine (classify → imports → rewrite)
//! - `analyzer`: Per-file driver mapping classifications to issues
//! - `editor`: Applying (range, replacement) edits to source text
//! - `issue`: Issue type definitions
//! - `parser`: SWC parse wrapper
//! - `reporter`: Cargo-style diagnostic printing
//! - `scanner`: File discovery

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod convert;
pub mod editor;
pub mod issue;
pub mod parser;
pub mod reporter;
pub mod scanner;
