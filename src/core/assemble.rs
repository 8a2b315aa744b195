//! Assembly of the generated Dart document from the two locale corpora.

use serde_json::Value;

use super::{
    encode::{describe, encode_entry, encode_string},
    index::LocaleFiles,
    supported::SupportedLocaleSet,
};
use crate::error::{GenerateError, Result};

pub const REGENERATE_COMMAND: &str = "intl-datagen --overwrite";

/// One of the two independent sets of locale data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corpus {
    Symbols,
    Patterns,
}

impl Corpus {
    /// Directory name under `src/data/dates`.
    pub fn dir_name(self) -> &'static str {
        match self {
            Corpus::Symbols => "symbols",
            Corpus::Patterns => "patterns",
        }
    }

    pub fn declaration_name(self) -> &'static str {
        match self {
            Corpus::Symbols => "dateSymbols",
            Corpus::Patterns => "datePatterns",
        }
    }

    fn value_type(self) -> &'static str {
        match self {
            Corpus::Symbols => "Map<String, dynamic>",
            Corpus::Patterns => "Map<String, Map<String, String>>",
        }
    }

    fn literal_type(self) -> &'static str {
        match self {
            Corpus::Symbols => "<String, dynamic>",
            Corpus::Patterns => "<String, Map<String, String>>",
        }
    }

    fn doc(self) -> &'static str {
        match self {
            Corpus::Symbols => "date symbols",
            Corpus::Patterns => "date patterns",
        }
    }

    /// Pattern tables are typed `Map<String, String>` per locale, so anything
    /// else would produce a declaration that does not type-check.
    fn validate(self, locale: &str, value: &Value) -> Result<()> {
        if self != Corpus::Patterns {
            return Ok(());
        }
        let unsupported = |value: &Value| GenerateError::UnsupportedType {
            context: format!("{}/{}", self.dir_name(), locale),
            description: describe(value),
        };
        let Value::Object(map) = value else {
            return Err(unsupported(value));
        };
        match map.values().find(|v| !v.is_string()) {
            Some(v) => Err(unsupported(v)),
            None => Ok(()),
        }
    }

    /// One `locale: table,` entry. Pattern tables are written as
    /// `<String, String>{..}` so they fit the declaration's value type.
    fn encode_locale(self, locale: &str, value: &Value) -> Result<String> {
        let (Corpus::Patterns, Value::Object(map)) = (self, value) else {
            return encode_entry(locale, value);
        };
        let mut entry = format!("{}: <String, String>{{\n", encode_string(locale)?);
        for (key, value) in map {
            entry.push_str(&encode_entry(key, value)?);
            entry.push('\n');
        }
        entry.push_str("},");
        Ok(entry)
    }
}

/// The data files of one corpus.
pub struct CorpusTable<'a> {
    pub corpus: Corpus,
    pub files: &'a LocaleFiles,
}

/// Build the complete document: header, then one declaration per corpus.
///
/// Only locales present in `supported` are emitted. The whole text is built in
/// memory, so an error leaves nothing behind on disk.
pub fn assemble(
    symbols: &LocaleFiles,
    patterns: &LocaleFiles,
    supported: &SupportedLocaleSet,
) -> Result<String> {
    let mut buffer = header();
    for table in [
        CorpusTable {
            corpus: Corpus::Symbols,
            files: symbols,
        },
        CorpusTable {
            corpus: Corpus::Patterns,
            files: patterns,
        },
    ] {
        buffer.push('\n');
        write_table(&mut buffer, &table, supported)?;
    }
    Ok(buffer)
}

pub fn header() -> String {
    format!(
        "// This file has been automatically generated. Please do not edit it manually.\n\
         // To regenerate run (omit --overwrite to print to console instead of the file):\n\
         // {REGENERATE_COMMAND}\n"
    )
}

fn write_table(
    buffer: &mut String,
    table: &CorpusTable<'_>,
    supported: &SupportedLocaleSet,
) -> Result<()> {
    let corpus = table.corpus;
    buffer.push_str(&format!(
        "/// The subset of {} supported by the intl package which are also\n\
         /// supported by the localizations package.\n",
        corpus.doc()
    ));
    buffer.push_str(&format!(
        "const {} {} = {}{{\n",
        corpus.value_type(),
        corpus.declaration_name(),
        corpus.literal_type()
    ));

    let mut emitted = 0;
    for (locale, file) in table.files {
        if !supported.contains(locale) {
            tracing::debug!(corpus = corpus.dir_name(), locale, "skipping unsupported locale");
            continue;
        }
        let value = file.read_json()?;
        corpus.validate(locale, &value)?;
        buffer.push_str(&corpus.encode_locale(locale, &value)?);
        buffer.push('\n');
        emitted += 1;
    }
    buffer.push_str("};\n");

    tracing::info!(
        corpus = corpus.dir_name(),
        emitted,
        available = table.files.len(),
        "assembled {}",
        corpus.declaration_name()
    );
    Ok(())
}
