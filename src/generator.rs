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

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rand::Rng;
use zeroize::Zeroizing;

use crate::config::GeneratorConfig;
use crate::entropy::{self, DIGIT_CHOICES, EntropyReport};
use crate::error::{ConfigError, Result};
use crate::locale::{self, DictionarySource};
use crate::wordlist::{Blacklist, LoadStats, WordList};

/// Builds passwords from a fixed vocabulary.
///
/// Each password is `word_count` distinct words, title-cased and
/// concatenated, optionally followed by one decimal digit:
///
/// ```
/// use erpwgen::{GeneratorConfig, Generator, LengthRange, WordList};
///
/// let words: WordList = ["cat", "dog", "sun", "apple"].into_iter().collect();
/// let config = GeneratorConfig::new(2, LengthRange::new(3, 5).unwrap())
///     .unwrap()
///     .with_digits(false);
/// let generator = Generator::new(words, config).unwrap();
///
/// let password = generator.generate();
/// assert!(password.chars().next().unwrap().is_uppercase());
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    words: WordList,
    config: GeneratorConfig,
}

impl Generator {
    /// Fails when the vocabulary holds fewer case-insensitively distinct
    /// words than one password needs.
    pub fn new(words: WordList, config: GeneratorConfig) -> Result<Self, ConfigError> {
        if config.word_count == 0 {
            return Err(ConfigError::ZeroWords);
        }

        let available = words.distinct_len();
        if available < config.word_count {
            return Err(ConfigError::NotEnoughWords {
                requested: config.word_count,
                available,
            });
        }

        Ok(Self { words, config })
    }

    /// Reads the blacklist, then the dictionary for `source`, then checks the
    /// vocabulary against `config`.
    pub fn load(
        source: &DictionarySource,
        blacklist: Option<&Path>,
        config: GeneratorConfig,
        dirs: &[PathBuf],
    ) -> Result<(Self, LoadStats)> {
        let blacklist = blacklist.map(Blacklist::from_file).transpose()?;
        let (words, stats) = locale::open(source, dirs, blacklist.as_ref(), config.length_range)?;
        let generator = Self::new(words, config)?;
        Ok((generator, stats))
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn estimate(&self) -> Result<EntropyReport, ConfigError> {
        entropy::estimate(self.words.len(), self.config.word_count, self.config.digits)
    }

    /// Draws `word_count` words, never two that are equal ignoring case.
    pub fn pick_with<R: Rng>(&self, rng: &mut R) -> Vec<&str> {
        let words = self.words.as_slice();
        let mut picked = Vec::with_capacity(self.config.word_count);
        let mut seen = HashSet::with_capacity(self.config.word_count);

        while picked.len() < self.config.word_count {
            let word = &words[rng.random_range(0..words.len())];
            if seen.insert(word.to_lowercase()) {
                picked.push(word.as_str());
            }
        }

        picked
    }

    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Zeroizing<String> {
        let picked = self.pick_with(rng);

        // Uppercasing may widen the first char; leave room so the buffer never reallocates.
        let capacity = picked.iter().map(|w| w.len() + 4).sum::<usize>() + 1;
        let mut password = Zeroizing::new(String::with_capacity(capacity));

        for word in picked {
            push_title_case(&mut password, word);
        }

        if self.config.digits {
            let digit = rng.random_range(0..DIGIT_CHOICES as u8);
            password.push(char::from(b'0' + digit));
        }

        password
    }

    pub fn generate(&self) -> Zeroizing<String> {
        self.generate_with(&mut rand::rng())
    }
}

fn push_title_case(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

/// Uppercases the first character and leaves the rest untouched.
pub fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    push_title_case(&mut out, word);
    out
}
