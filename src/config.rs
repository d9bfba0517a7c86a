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

use std::fmt;

use crate::error::ConfigError;

/// Inclusive range of accepted word lengths, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
    min: usize,
    max: usize,
}

impl LengthRange {
    pub const DEFAULT: Self = Self { min: 5, max: 6 };

    pub fn new(min: usize, max: usize) -> Result<Self, ConfigError> {
        if max == 0 || min > max {
            return Err(ConfigError::InvalidLengthRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub const fn min(&self) -> usize {
        self.min
    }

    pub const fn max(&self) -> usize {
        self.max
    }

    pub fn contains(&self, length: usize) -> bool {
        (self.min..=self.max).contains(&length)
    }
}

impl Default for LengthRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for LengthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub word_count: usize,
    pub length_range: LengthRange,
    pub digits: bool,
    pub verbose: bool,
}

impl GeneratorConfig {
    pub const DEFAULT_WORD_COUNT: usize = 3;

    pub fn new(word_count: usize, length_range: LengthRange) -> Result<Self, ConfigError> {
        if word_count == 0 {
            return Err(ConfigError::ZeroWords);
        }
        Ok(Self {
            word_count,
            length_range,
            ..Self::default()
        })
    }

    pub fn with_digits(mut self, digits: bool) -> Self {
        self.digits = digits;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            word_count: Self::DEFAULT_WORD_COUNT,
            length_range: LengthRange::DEFAULT,
            digits: true,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.word_count, 3);
        assert_eq!(config.length_range, LengthRange::new(5, 6).unwrap());
        assert!(config.digits);
        assert!(!config.verbose);
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = LengthRange::new(3, 5).unwrap();
        assert!(!range.contains(2));
        assert!(range.contains(3));
        assert!(range.contains(5));
        assert!(!range.contains(6));
    }

    #[test]
    fn test_invalid_ranges_rejected() {
        assert_eq!(
            LengthRange::new(7, 4),
            Err(ConfigError::InvalidLengthRange { min: 7, max: 4 })
        );
        assert_eq!(
            LengthRange::new(0, 0),
            Err(ConfigError::InvalidLengthRange { min: 0, max: 0 })
        );
        assert!(LengthRange::new(0, 1).is_ok());
    }

    #[test]
    fn test_zero_words_rejected() {
        assert_eq!(
            GeneratorConfig::new(0, LengthRange::DEFAULT),
            Err(ConfigError::ZeroWords)
        );
    }

    #[test]
    fn test_builder_flags() {
        let config = GeneratorConfig::new(4, LengthRange::new(3, 8).unwrap())
            .unwrap()
            .with_digits(false)
            .with_verbose(true);
        assert_eq!(config.word_count, 4);
        assert!(!config.digits);
        assert!(config.verbose);
    }

    #[test]
    fn test_range_display() {
        assert_eq!(LengthRange::new(5, 6).unwrap().to_string(), "5-6");
        assert_eq!(LengthRange::new(4, 4).unwrap().to_string(), "4");
    }
}
