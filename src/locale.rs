// This file is part of Erpwgen.
//
// Copyright (c) 2026  The Erpwgen developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Finding a dictionary file for a locale.

use std::env;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::LengthRange;
use crate::error::LoadError;
use crate::wordlist::{self, Blacklist, LoadStats, WordList};

pub const FALLBACK_LOCALE: &str = "en_US";

pub const SYSTEM_DIRS: &[&str] = &[
    "/usr/share/hunspell",
    "/usr/share/myspell/dicts",
    "/usr/share/myspell",
];

/// Where the words come from: a locale looked up on the search path, or a
/// file given explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    Locale(String),
    Path(PathBuf),
}

impl DictionarySource {
    /// Label used in diagnostics: the locale, or the file name of an explicit path.
    pub fn name(&self) -> String {
        match self {
            Self::Locale(locale) => locale.clone(),
            Self::Path(path) => path
                .file_name()
                .unwrap_or(path.as_os_str())
                .to_string_lossy()
                .into_owned(),
        }
    }
}

/// Turns a `LANG` style value such as `en_GB.UTF-8` into `en_GB`.
pub fn locale_from_lang(lang: Option<&str>) -> String {
    let locale = lang
        .unwrap_or_default()
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();

    if locale.is_empty() {
        FALLBACK_LOCALE.to_string()
    } else {
        locale.to_string()
    }
}

pub fn default_locale() -> String {
    locale_from_lang(env::var("LANG").ok().as_deref())
}

/// Search path: `DICPATH` entries, then the user's `hunspell` data dir, then
/// the system dictionary dirs.
pub fn search_dirs_from(dicpath: Option<&str>, data_dir: Option<PathBuf>) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = dicpath
        .map(|value| env::split_paths(value).collect())
        .unwrap_or_default();
    dirs.retain(|dir| !dir.as_os_str().is_empty());

    if let Some(data_dir) = data_dir {
        dirs.push(data_dir.join("hunspell"));
    }
    dirs.extend(SYSTEM_DIRS.iter().map(PathBuf::from));

    dirs
}

pub fn search_dirs() -> Vec<PathBuf> {
    search_dirs_from(env::var("DICPATH").ok().as_deref(), dirs::data_dir())
}

/// `<dir>/<locale>.dic` for every directory of `dirs` that exists, in order.
pub fn candidates(locale: &str, dirs: &[PathBuf]) -> Vec<PathBuf> {
    dirs.iter()
        .filter(|dir| dir.is_dir())
        .map(|dir| dir.join(format!("{locale}.dic")))
        .collect()
}

/// Loads the dictionary for `source`.
///
/// For a locale, candidates are tried in search order and the first that
/// opens and yields words wins. An explicit path is tried alone.
pub fn open(
    source: &DictionarySource,
    dirs: &[PathBuf],
    blacklist: Option<&Blacklist>,
    range: LengthRange,
) -> Result<(WordList, LoadStats), LoadError> {
    let name = source.name();

    let locale = match source {
        DictionarySource::Path(path) => {
            let loaded = wordlist::load_file(path, blacklist, range, &name)?;
            info!("using dictionary {}", path.display());
            return Ok(loaded);
        }
        DictionarySource::Locale(locale) => locale,
    };

    let searched = candidates(locale, dirs);
    let mut empty = None;

    for path in &searched {
        match try_candidate(path, blacklist, range, &name) {
            Ok(loaded) => {
                info!("using dictionary {}", path.display());
                return Ok(loaded);
            }
            Err(err @ LoadError::EmptyVocabulary { .. }) => {
                debug!("skipping {}: {}", path.display(), err);
                empty = Some(err);
            }
            Err(err) => debug!("skipping {}: {}", path.display(), err),
        }
    }

    Err(empty.unwrap_or_else(|| LoadError::NotFound {
        locale: locale.clone(),
        searched,
    }))
}

fn try_candidate(
    path: &Path,
    blacklist: Option<&Blacklist>,
    range: LengthRange,
    name: &str,
) -> Result<(WordList, LoadStats), LoadError> {
    debug!("trying {}", path.display());
    wordlist::load_file(path, blacklist, range, name)
}
