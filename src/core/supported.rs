use std::{
    collections::{BTreeSet, HashSet},
    path::Path,
};

use regex::Regex;
use walkdir::WalkDir;

use crate::error::{GenerateError, Result};

/// Set of locale codes the localization package ships resources for.
pub type SupportedLocaleSet = BTreeSet<String>;

/// Lazy, single-pass sequence of locale codes parsed from resource file names.
///
/// A resource named `<prefix>_<locale>.<ext>` contributes `<locale>`: the
/// leftmost run of ASCII word characters that follows an underscore and reaches
/// the extension, so `material_zh_Hant.arb` yields `zh_Hant` and
/// `app_v-2_en.arb` yields `en`.
/// Each code is yielded at most once, in directory-listing order.
pub struct SupportedLocales {
    entries: walkdir::IntoIter,
    pattern: Regex,
    seen: HashSet<String>,
}

impl Iterator for SupportedLocales {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        for entry in self.entries.by_ref() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("cannot access resource entry: {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            let Some(locale) = self.pattern.captures(name).map(|c| c[1].to_string()) else {
                tracing::debug!(file = name, "skipping resource without a locale suffix");
                continue;
            };
            if self.seen.insert(locale.clone()) {
                return Some(locale);
            }
        }
        None
    }
}

/// Start scanning `dir` for resources with the given extension (without dot).
pub fn supported_locales(dir: impl AsRef<Path>, extension: &str) -> Result<SupportedLocales> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(GenerateError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let pattern = resource_pattern(extension);
    Ok(SupportedLocales {
        entries: WalkDir::new(dir)
            .follow_links(true)
            .min_depth(1)
            .max_depth(1)
            .into_iter(),
        pattern,
        seen: HashSet::new(),
    })
}

/// Collect the supported locales of `dir` into a set.
pub fn supported_locale_set(dir: impl AsRef<Path>, extension: &str) -> Result<SupportedLocaleSet> {
    let set: SupportedLocaleSet = supported_locales(dir, extension)?.collect();
    tracing::debug!(count = set.len(), "resolved supported locales");
    Ok(set)
}

fn resource_pattern(extension: &str) -> Regex {
    Regex::new(&format!(r"_((?-u:\w)+)\.{}$", regex::escape(extension)))
        .expect("escaped extension yields a valid regex")
}
