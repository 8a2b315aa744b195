//! Generation pipeline for the date localization tables.
//!
//! ## Module Structure
//!
//! - `index`: locale data file discovery per corpus
//! - `supported`: supported locale resolution from resource file names
//! - `encode`: JSON to Dart literal conversion
//! - `assemble`: document assembly from both corpora
//! - `preconditions`: repository root and dependency record checks
//! - `output`: writing the document and running the formatter
//! - `pipeline`: the full run, wiring the above together

pub mod assemble;
pub mod encode;
pub mod index;
pub mod output;
pub mod pipeline;
pub mod preconditions;
pub mod supported;

pub use assemble::{Corpus, assemble};
pub use encode::encode;
pub use index::{DataFile, LocaleFiles, index_locale_files};
pub use pipeline::{GenerateOutcome, GenerateRequest, generate};
pub use supported::{SupportedLocaleSet, supported_locale_set, supported_locales};
