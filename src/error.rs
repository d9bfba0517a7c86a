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

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::LengthRange;

/// Failures while locating or reading a dictionary or blacklist.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The dictionary file could not be opened or read.
    #[error("unable to read dictionary {}: {source}", .path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The blacklist file could not be opened or read.
    #[error("unable to read blacklist {}: {source}", .path.display())]
    Blacklist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// None of the search locations holds a readable dictionary for the locale.
    #[error("unable to load the dictionary ({locale}), searched: {}", display_paths(.searched))]
    NotFound {
        locale: String,
        searched: Vec<PathBuf>,
    },

    /// Every line was skipped or filtered out.
    #[error("no usable words in dictionary ({source_name}) for {range} letters")]
    EmptyVocabulary {
        source_name: String,
        range: LengthRange,
    },
}

/// Generator settings that cannot produce a password.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("password length must be at least one word")]
    ZeroWords,

    #[error("invalid word length range {min}-{max}")]
    InvalidLengthRange { min: usize, max: usize },

    /// Sampling without replacement needs at least `requested` distinct words.
    #[error("{requested} words per password requested but only {available} distinct words available")]
    NotEnoughWords { requested: usize, available: usize },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "no existing dictionary directories".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_lists_paths() {
        let err = LoadError::NotFound {
            locale: "xx_XX".to_string(),
            searched: vec![PathBuf::from("/a/xx_XX.dic"), PathBuf::from("/b/xx_XX.dic")],
        };
        assert_eq!(
            err.to_string(),
            "unable to load the dictionary (xx_XX), searched: /a/xx_XX.dic, /b/xx_XX.dic"
        );
    }

    #[test]
    fn test_not_found_without_paths() {
        let err = LoadError::NotFound {
            locale: "xx_XX".to_string(),
            searched: Vec::new(),
        };
        assert!(err.to_string().ends_with("no existing dictionary directories"));
    }

    #[test]
    fn test_empty_vocabulary_mentions_range() {
        let err = LoadError::EmptyVocabulary {
            source_name: "en_GB".to_string(),
            range: LengthRange::new(5, 6).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "no usable words in dictionary (en_GB) for 5-6 letters"
        );
    }

    #[test]
    fn test_config_error_wraps() {
        let err: Error = ConfigError::NotEnoughWords {
            requested: 4,
            available: 3,
        }
        .into();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(
            err.to_string(),
            "4 words per password requested but only 3 distinct words available"
        );
    }
}
