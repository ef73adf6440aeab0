// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Chat-export cleanup.
//!
//! Exported chat logs wrap each message in noise: timestamps, the sender name,
//! encryption notices, media placeholders. Each line is scrubbed of that noise,
//! every character outside `[A-Za-z0-9-,\s]` is blanked, and the remainder is split
//! like typed input.
//!
//! Chat text is conversational, so candidates are filtered strictly: a token must
//! be a keyword on its own (`box`, not `boxes`) or a bare `<digits>[-<count>]`.
//! Prefix keyword matching would otherwise turn `about` into `AB`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::consts::MAX_COUNT_DIGITS;
use crate::config::RuleSet;
use crate::extractors::delimited::split_delimited;
use crate::traits::TokenExtractor;

lazy_static! {
    // [12/03/24, 10:15:32 PM]
    static ref BRACKET_TIMESTAMP: Regex =
        Regex::new(r"\[\d{1,2}/\d{1,2}/\d{2,4},?\s*\d{1,2}:\d{2}.*?\]").unwrap();
    // 12/03/24, 10:15 pm -
    static ref DASH_TIMESTAMP: Regex = Regex::new(
        r"^\s*\d{1,2}/\d{1,2}/\d{2,4},?\s*\d{1,2}:\d{2}(?::\d{2})?(?:\s?[AaPp]\.?[Mm]\.?)?\s*-\s*"
    )
    .unwrap();
    static ref SENDER_PREFIX: Regex = Regex::new(r"^[^:]*:").unwrap();
    static ref ENCRYPTION_NOTICE: Regex =
        Regex::new(r"(?i)messages and calls.*encrypted").unwrap();
    static ref MEDIA_OMITTED: Regex = Regex::new(
        r"(?i)<media omitted>|\b(?:image|video|audio|sticker|gif|document) omitted\b"
    )
    .unwrap();
    static ref MESSAGE_DELETED: Regex =
        Regex::new(r"(?i)this message was deleted|you deleted this message").unwrap();
    static ref DOT_RUN: Regex = Regex::new(r"\.{1,3}").unwrap();
    static ref DISALLOWED: Regex = Regex::new(r"[^a-zA-Z0-9\-,\s]").unwrap();
}

/// Chat log extractor - scrubs exported chat lines and keeps strict tokens
pub struct ChatLogExtractor {
    rules: RuleSet,
}

impl ChatLogExtractor {
    pub fn new(rules: &RuleSet) -> Self {
        Self {
            rules: rules.clone(),
        }
    }

    fn is_candidate(&self, token: &str) -> bool {
        self.rules.keyword_exactly(token).is_some()
            || is_strict_numeric(token, self.rules.min_digits, self.rules.pad_width)
    }
}

/// Strip one chat line down to its message body.
pub fn clean_line(line: &str) -> String {
    let line = BRACKET_TIMESTAMP.replace_all(line, "");
    let line = DASH_TIMESTAMP.replace(&line, "");
    let line = SENDER_PREFIX.replace(&line, "");
    let line = ENCRYPTION_NOTICE.replace_all(&line, "");
    let line = MEDIA_OMITTED.replace_all(&line, "");
    let line = MESSAGE_DELETED.replace_all(&line, "");
    let line = DOT_RUN.replace_all(&line, "-");
    let line = DISALLOWED.replace_all(&line, " ");
    line.trim().to_string()
}

/// `<min..=max digits>` optionally followed by `-<1..=5 digits>`.
fn is_strict_numeric(token: &str, min_digits: usize, max_digits: usize) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    let (base, count) = match token.split_once('-') {
        Some((base, count)) => (base, Some(count)),
        None => (token, None),
    };

    let base_ok = all_digits(base) && (min_digits..=max_digits).contains(&base.len());
    let count_ok = count.map_or(true, |c| all_digits(c) && c.len() <= MAX_COUNT_DIGITS);

    base_ok && count_ok
}

impl TokenExtractor for ChatLogExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        text.lines()
            .map(clean_line)
            .filter(|line| !line.is_empty())
            .flat_map(|line| split_delimited(&line))
            .filter(|token| self.is_candidate(token))
            .collect()
    }

    fn name(&self) -> &'static str {
        "chat_log"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<String> {
        ChatLogExtractor::new(&RuleSet::standard()).extract(text)
    }

    #[test]
    fn strips_bracketed_timestamp_and_sender() {
        assert_eq!(
            clean_line("[12/03/24, 10:15:32 PM] Ravi Kumar: 45 45, 7-2"),
            "45 45, 7-2"
        );
    }

    #[test]
    fn strips_dash_timestamp_and_sender() {
        assert_eq!(clean_line("12/03/24, 10:15 pm - Ravi: 123...4 box"), "123-4 box");
    }

    #[test]
    fn drops_boilerplate() {
        assert_eq!(
            clean_line("[1/2/24, 9:00] Ravi: Messages and calls are end-to-end encrypted"),
            ""
        );
        assert_eq!(clean_line("[1/2/24, 9:00] Ravi: image omitted"), "");
        assert_eq!(clean_line("1/2/24, 9:00 - Ravi: <Media omitted>"), "");
        assert_eq!(clean_line("[1/2/24, 9:00] Ravi: This message was deleted"), "");
    }

    #[test]
    fn blanks_symbols_and_emoji() {
        assert_eq!(clean_line("Ravi: 45😀 #12!"), "45   12");
    }

    #[test]
    fn keeps_only_strict_tokens() {
        let log = "\
[12/03/24, 10:15:32 PM] Ravi: about 45 45 boxes
[12/03/24, 10:16:01 PM] Ravi: box 7-2 October 1234 12-123456
continuation line 88";

        assert_eq!(extract(log), vec!["45", "45", "box", "7-2", "88"]);
    }

    #[test]
    fn legacy_rules_require_two_digits() {
        let extractor = ChatLogExtractor::new(&RuleSet::legacy());
        assert_eq!(extractor.extract("Ravi: 7 45 box"), vec!["45"]);
    }

    #[test]
    fn strict_numeric_shapes() {
        assert!(is_strict_numeric("7", 1, 3));
        assert!(is_strict_numeric("123-45678", 1, 3));
        assert!(!is_strict_numeric("123-", 1, 3));
        assert!(!is_strict_numeric("1234", 1, 3));
        assert!(!is_strict_numeric("-5", 1, 3));
        assert!(!is_strict_numeric("12-3-4", 1, 3));
    }
}
