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

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use erpwgen::ui::{self, DisplayOptions};
use erpwgen::{
    DictionarySource, Generator, GeneratorConfig, LengthRange, default_locale, search_dirs,
};

const DEFAULT_PASSWORD_COUNT: usize = 10;

#[derive(Parser, Debug)]
#[command(
    name = "erpwgen",
    version,
    about = "Generate easy to remember passwords",
    after_help = "A MySpell (or Hunspell) dictionary is required."
)]
struct Cli {
    /// Number of words to use in the passwords
    #[arg(default_value_t = GeneratorConfig::DEFAULT_WORD_COUNT)]
    pw_length: usize,

    /// Number of passwords to generate
    #[arg(default_value_t = DEFAULT_PASSWORD_COUNT)]
    num_pw: usize,

    /// Don't add a number at the end
    #[arg(long)]
    no_numbers: bool,

    /// Read blacklisted words from a file
    #[arg(long, value_name = "PATH")]
    blacklist: Option<PathBuf>,

    /// Language code to look for the dictionary [default: from LANG]
    #[arg(short = 'l', long = "language", value_name = "CODE")]
    language: Option<String>,

    /// Use this file as dictionary
    #[arg(long, value_name = "PATH")]
    dictionary: Option<PathBuf>,

    /// Shortest accepted word, in letters
    #[arg(long, value_name = "N", default_value_t = LengthRange::DEFAULT.min())]
    min_length: usize,

    /// Longest accepted word, in letters
    #[arg(long, value_name = "N", default_value_t = LengthRange::DEFAULT.max())]
    max_length: usize,

    /// Enable verbose operation
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn generator_config(&self) -> Result<GeneratorConfig> {
        let range = LengthRange::new(self.min_length, self.max_length)?;
        let config = GeneratorConfig::new(self.pw_length, range)?
            .with_digits(!self.no_numbers)
            .with_verbose(self.verbose);
        Ok(config)
    }

    /// An explicit dictionary file takes precedence over the language.
    fn source(&self) -> DictionarySource {
        match &self.dictionary {
            Some(path) => DictionarySource::Path(path.clone()),
            None => DictionarySource::Locale(self.language.clone().unwrap_or_else(default_locale)),
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.generator_config()?;
    let source = cli.source();

    let (generator, stats) =
        Generator::load(&source, cli.blacklist.as_deref(), config, &search_dirs())
            .with_context(|| format!("Failed to load the dictionary ({})", source.name()))?;

    if config.verbose {
        let report = generator.estimate()?;
        ui::display_report(&stats, &report, &DisplayOptions::detect())
            .context("Failed to write the report")?;
    }

    let mut stdout = io::stdout().lock();
    for _ in 0..cli.num_pw {
        let password = generator.generate();
        writeln!(stdout, "{}", password.as_str())?;
    }
    stdout.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use erpwgen::ConfigError;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("erpwgen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.pw_length, 3);
        assert_eq!(cli.num_pw, 10);
        assert!(!cli.no_numbers);
        assert!(!cli.verbose);
        assert_eq!(cli.blacklist, None);

        let config = cli.generator_config().unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_positionals_and_flags() {
        let cli = parse(&[
            "4",
            "2",
            "--no-numbers",
            "--blacklist",
            "bad.txt",
            "-l",
            "es_ES",
            "-v",
        ]);
        assert_eq!(cli.pw_length, 4);
        assert_eq!(cli.num_pw, 2);
        assert_eq!(cli.blacklist, Some(PathBuf::from("bad.txt")));
        assert_eq!(cli.source(), DictionarySource::Locale("es_ES".to_string()));

        let config = cli.generator_config().unwrap();
        assert_eq!(config.word_count, 4);
        assert!(!config.digits);
        assert!(config.verbose);
    }

    #[test]
    fn test_dictionary_overrides_language() {
        let cli = parse(&["--language", "de_DE", "--dictionary", "/tmp/words.dic"]);
        assert_eq!(
            cli.source(),
            DictionarySource::Path(PathBuf::from("/tmp/words.dic"))
        );
    }

    #[test]
    fn test_length_range_flags() {
        let cli = parse(&["--min-length", "4", "--max-length", "8"]);
        let config = cli.generator_config().unwrap();
        assert_eq!(config.length_range, LengthRange::new(4, 8).unwrap());
    }

    #[test]
    fn test_invalid_length_range() {
        let cli = parse(&["--min-length", "9", "--max-length", "3"]);
        let err = cli.generator_config().unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::InvalidLengthRange { min: 9, max: 3 })
        );
    }

    #[test]
    fn test_zero_words_rejected() {
        let cli = parse(&["0"]);
        assert!(cli.generator_config().is_err());
    }

    #[test]
    fn test_non_numeric_length_rejected() {
        assert!(Cli::try_parse_from(["erpwgen", "three"]).is_err());
    }
}
