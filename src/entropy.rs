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

use crate::error::ConfigError;

pub const DIGIT_CHOICES: u32 = 10;

/// Size and strength of the password space for a given vocabulary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyReport {
    pub vocabulary_size: usize,
    pub word_count: usize,
    pub digits: bool,
    /// `n! / (n - l)!`, times ten with a digit suffix. `None` if it does not fit in a `u128`.
    pub combinations: Option<u128>,
    /// `l * log2(n)`, plus `log2(10)` with a digit suffix.
    pub entropy_bits: f64,
}

impl EntropyReport {
    /// Base-2 logarithm of the combination count, available even when the
    /// exact count overflows.
    pub fn combinations_log2(&self) -> f64 {
        let n = self.vocabulary_size;
        let mut bits: f64 = (0..self.word_count).map(|i| (n.saturating_sub(i) as f64).log2()).sum();
        if self.digits {
            bits += f64::from(DIGIT_CHOICES).log2();
        }
        bits
    }
}

pub fn estimate(
    vocabulary_size: usize,
    word_count: usize,
    digits: bool,
) -> Result<EntropyReport, ConfigError> {
    if word_count == 0 {
        return Err(ConfigError::ZeroWords);
    }
    if vocabulary_size < word_count {
        return Err(ConfigError::NotEnoughWords {
            requested: word_count,
            available: vocabulary_size,
        });
    }

    let mut combinations = falling_factorial(vocabulary_size, word_count);
    let mut entropy_bits = word_count as f64 * (vocabulary_size as f64).log2();

    if digits {
        combinations = combinations.and_then(|c| c.checked_mul(u128::from(DIGIT_CHOICES)));
        entropy_bits += f64::from(DIGIT_CHOICES).log2();
    }

    Ok(EntropyReport {
        vocabulary_size,
        word_count,
        digits,
        combinations,
        entropy_bits,
    })
}

/// `n * (n - 1) * ... * (n - k + 1)`, with `k <= n`.
fn falling_factorial(n: usize, k: usize) -> Option<u128> {
    (0..k).try_fold(1u128, |acc, i| acc.checked_mul((n - i) as u128))
}
