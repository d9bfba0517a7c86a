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

use console::{Style, Term};

use crate::entropy::EntropyReport;
use crate::wordlist::LoadStats;

pub const FAIR_ENTROPY: f64 = 64.0;
pub const STRONG_ENTROPY: f64 = 80.0;

#[derive(Debug, Clone, Copy)]
pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
}

impl DisplayOptions {
    pub fn detect() -> Self {
        Self {
            unicode_support: detect_unicode_support(),
            color_support: detect_color_support(),
        }
    }

    pub fn plain() -> Self {
        Self {
            unicode_support: false,
            color_support: false,
        }
    }
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stderr)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stderr).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

/// Branch and last-branch prefixes for the report tree.
fn tree_glyphs(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("├─", "└─")
    } else {
        ("|-", "`-")
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Fair,
    Strong,
}

impl Strength {
    pub fn classify(entropy_bits: f64) -> Self {
        if entropy_bits >= STRONG_ENTROPY {
            Self::Strong
        } else if entropy_bits >= FAIR_ENTROPY {
            Self::Fair
        } else {
            Self::Weak
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Strong => "Strong",
        }
    }
}

fn format_combinations(report: &EntropyReport) -> String {
    match report.combinations {
        Some(count) => count.to_string(),
        None => format!("~2^{:.1}", report.combinations_log2()),
    }
}

pub fn render_dictionary(stats: &LoadStats, options: &DisplayOptions) -> Vec<String> {
    let (branch, last) = tree_glyphs(options.unicode_support);

    let source = match &stats.path {
        Some(path) => format!("{} ({})", stats.source_name, path.display()),
        None => stats.source_name.clone(),
    };

    vec![
        "Dictionary:".to_string(),
        format!("  {branch} Source     {source}"),
        format!("  {branch} Lines      {}", stats.lines_read),
        format!(
            "  {branch} Blacklist  {} {}",
            stats.blacklisted,
            plural(stats.blacklisted, "word", "words")
        ),
        format!(
            "  {last} Words      {} ({} letters)",
            stats.vocabulary, stats.range
        ),
    ]
}

pub fn render_stats(report: &EntropyReport, options: &DisplayOptions) -> Vec<String> {
    let (branch, last) = tree_glyphs(options.unicode_support);
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);

    let strength = Strength::classify(report.entropy_bits);
    let (status_icon, style) = match strength {
        Strength::Strong => (check_ok, Style::new().green()),
        Strength::Fair => (check_ok, Style::new().yellow()),
        Strength::Weak => (check_warn, Style::new().yellow()),
    };
    let style = if options.color_support {
        style
    } else {
        Style::new()
    };

    vec![
        "Stats:".to_string(),
        format!(
            "  {branch} Words      {} {}{}",
            report.word_count,
            plural(report.word_count, "word", "words"),
            if report.digits { " + 1 digit" } else { "" }
        ),
        format!("  {branch} Passwords  {}", format_combinations(report)),
        format!(
            "  {last} Entropy    {} {} bits ({})",
            style.apply_to(format!("[{}]", status_icon)),
            style.apply_to(format!("{:.1}", report.entropy_bits)),
            style.apply_to(strength.label())
        ),
    ]
}

/// Writes the verbose load report to stderr, keeping stdout for passwords.
pub fn display_report(
    stats: &LoadStats,
    report: &EntropyReport,
    options: &DisplayOptions,
) -> io::Result<()> {
    let term = Term::stderr();

    for line in render_dictionary(stats, options) {
        term.write_line(&line)?;
    }
    term.write_line("")?;
    for line in render_stats(report, options) {
        term.write_line(&line)?;
    }
    term.write_line("")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LengthRange;
    use crate::entropy::estimate;
    use std::path::PathBuf;

    fn stats() -> LoadStats {
        LoadStats {
            source_name: "en_GB".to_string(),
            path: Some(PathBuf::from("/usr/share/hunspell/en_GB.dic")),
            lines_read: 49569,
            blacklisted: 1,
            vocabulary: 9120,
            range: LengthRange::new(5, 6).unwrap(),
        }
    }

    #[test]
    fn test_get_status_symbols_unicode() {
        let (ok, warn) = get_status_symbols(true);
        assert_eq!(ok, "✓");
        assert_eq!(warn, "!");
    }

    #[test]
    fn test_get_status_symbols_ascii() {
        let (ok, warn) = get_status_symbols(false);
        assert_eq!(ok, "+");
        assert_eq!(warn, "!");
    }

    #[test]
    fn test_strength_classes() {
        assert_eq!(Strength::classify(42.0), Strength::Weak);
        assert_eq!(Strength::classify(64.0), Strength::Fair);
        assert_eq!(Strength::classify(79.9), Strength::Fair);
        assert_eq!(Strength::classify(80.0), Strength::Strong);
    }

    #[test]
    fn test_render_dictionary_plain() {
        let lines = render_dictionary(&stats(), &DisplayOptions::plain());
        assert_eq!(
            lines,
            vec![
                "Dictionary:",
                "  |- Source     en_GB (/usr/share/hunspell/en_GB.dic)",
                "  |- Lines      49569",
                "  |- Blacklist  1 word",
                "  `- Words      9120 (5-6 letters)",
            ]
        );
    }

    #[test]
    fn test_render_dictionary_unicode() {
        let options = DisplayOptions {
            unicode_support: true,
            color_support: false,
        };
        let lines = render_dictionary(&stats(), &options);
        assert!(lines[1].starts_with("  ├─ Source"));
        assert!(lines[4].starts_with("  └─ Words"));
    }

    #[test]
    fn test_render_stats_plain() {
        let report = estimate(4, 2, true).unwrap();
        let lines = render_stats(&report, &DisplayOptions::plain());
        assert_eq!(
            lines,
            vec![
                "Stats:",
                "  |- Words      2 words + 1 digit",
                "  |- Passwords  120",
                "  `- Entropy    [!] 7.3 bits (Weak)",
            ]
        );
    }

    #[test]
    fn test_render_stats_overflow() {
        let report = estimate(100_000, 12, false).unwrap();
        let lines = render_stats(&report, &DisplayOptions::plain());
        assert!(lines[2].contains("~2^"), "{}", lines[2]);
        assert!(lines[3].ends_with("(Strong)"));
    }
}
