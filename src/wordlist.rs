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

//! Dictionary and blacklist parsing.
//!
//! Both files follow the MySpell/Hunspell `.dic` convention: one entry per
//! line, a leading run of word characters, then optional `/FLAGS` or other
//! trailing metadata that is ignored.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::debug;
use unicode_normalization::UnicodeNormalization;

use crate::config::LengthRange;
use crate::error::LoadError;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Returns the leading run of word characters of `line`, NFC-normalized,
/// or `None` when the line does not start with one.
pub fn extract_word(line: &str) -> Option<String> {
    let word: String = line.nfc().take_while(|&c| is_word_char(c)).collect();
    if word.is_empty() { None } else { Some(word) }
}

/// Feeds every line of `reader` to `f`, decoding invalid UTF-8 lossily.
/// Returns the number of lines read.
fn for_each_line<R, F>(mut reader: R, mut f: F) -> io::Result<usize>
where
    R: BufRead,
    F: FnMut(&str),
{
    let mut buf = Vec::new();
    let mut count = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        count += 1;
        let line = String::from_utf8_lossy(&buf);
        f(&*line);
    }

    Ok(count)
}

/// Words excluded from the vocabulary regardless of their length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    words: HashSet<String>,
}

impl Blacklist {
    pub fn parse<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut words = HashSet::new();
        for_each_line(reader, |line| {
            if let Some(word) = extract_word(line) {
                words.insert(word);
            }
        })?;
        Ok(Self { words })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let to_err = |source| LoadError::Blacklist {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(to_err)?;
        let blacklist = Self::parse(BufReader::new(file)).map_err(to_err)?;
        debug!("{} words blacklisted from {}", blacklist.len(), path.display());
        Ok(blacklist)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Blacklist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Filtered vocabulary, in dictionary order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    /// Number of entries that differ ignoring case.
    pub fn distinct_len(&self) -> usize {
        self.words
            .iter()
            .map(|w| w.to_lowercase())
            .collect::<HashSet<_>>()
            .len()
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Counters gathered while loading, for the verbose report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadStats {
    pub source_name: String,
    pub path: Option<PathBuf>,
    pub lines_read: usize,
    pub blacklisted: usize,
    pub vocabulary: usize,
    pub range: LengthRange,
}

/// Parses a dictionary from `reader`, keeping words whose length is within
/// `range` and that are not in `blacklist`.
///
/// `source_name` labels the dictionary in errors and statistics.
pub fn load<R: BufRead>(
    reader: R,
    blacklist: Option<&Blacklist>,
    range: LengthRange,
    source_name: &str,
) -> Result<(WordList, LoadStats), LoadError> {
    let mut words = Vec::new();

    let lines_read = for_each_line(reader, |line| {
        let Some(word) = extract_word(line) else {
            return;
        };
        if !range.contains(word.chars().count()) {
            return;
        }
        if blacklist.is_some_and(|b| b.contains(&word)) {
            return;
        }
        words.push(word);
    })
    .map_err(|source| LoadError::Dictionary {
        path: PathBuf::from(source_name),
        source,
    })?;

    debug!(
        "{} lines read from {}, {} valid words",
        lines_read,
        source_name,
        words.len()
    );

    if words.is_empty() {
        return Err(LoadError::EmptyVocabulary {
            source_name: source_name.to_string(),
            range,
        });
    }

    let stats = LoadStats {
        source_name: source_name.to_string(),
        path: None,
        lines_read,
        blacklisted: blacklist.map_or(0, Blacklist::len),
        vocabulary: words.len(),
        range,
    };

    Ok((WordList { words }, stats))
}

/// Opens `path` and loads it as a dictionary.
pub fn load_file<P: AsRef<Path>>(
    path: P,
    blacklist: Option<&Blacklist>,
    range: LengthRange,
    source_name: &str,
) -> Result<(WordList, LoadStats), LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Dictionary {
        path: path.to_path_buf(),
        source,
    })?;

    let (words, mut stats) =
        load(BufReader::new(file), blacklist, range, source_name).map_err(|e| match e {
            LoadError::Dictionary { source, .. } => LoadError::Dictionary {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
    stats.path = Some(path.to_path_buf());

    Ok((words, stats))
}
