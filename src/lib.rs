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

pub mod config;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod locale;
pub mod ui;
pub mod wordlist;

pub use config::{GeneratorConfig, LengthRange};
pub use entropy::{estimate, EntropyReport};
pub use error::{ConfigError, Error, LoadError};
pub use generator::{title_case, Generator};
pub use locale::{default_locale, search_dirs, DictionarySource};
pub use wordlist::{extract_word, Blacklist, LoadStats, WordList};
