//! intl-datagen - date localization table generator
//!
//! Reads the per-locale date symbol and pattern data shipped with the `intl`
//! package and emits a Dart source file declaring `dateSymbols` and
//! `datePatterns`, restricted to the locales the localization package supports.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Generation pipeline (indexing, locale resolution, encoding, assembly)
//! - `error`: Error taxonomy of the pipeline
//! - `logging`: Tracing subscriber setup
//! - `semantics`: Semantics event value objects

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod semantics;
