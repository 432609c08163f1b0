//! Raw tweet normalization into the degree stream's line format

use regex::Regex;
use serde::Deserialize;

/// Fields of a raw tweet line we care about; everything else is ignored.
/// Rate-limit notices and partial records simply decode with `None`s.
#[derive(Debug, Deserialize)]
struct RawTweet {
    created_at: Option<String>,
    text: Option<String>,
}

/// Converts raw tweet JSON lines into normalized post lines
///
/// Output lines have the form `<clean text> (timestamp: <created_at>) `
/// where the text is ASCII-only with whitespace runs collapsed and
/// backslash escapes removed. Tweets whose text contained non-ASCII
/// characters are counted so the run can report them at the end.
pub struct TweetNormalizer {
    whitespace: Regex,
    escapes: Regex,
    unicode_tweets: usize,
}

impl TweetNormalizer {
    pub fn new() -> Self {
        Self {
            whitespace: Regex::new(r"\s+").expect("whitespace pattern is valid"),
            escapes: Regex::new(r"\\+(.)").expect("escape pattern is valid"),
            unicode_tweets: 0,
        }
    }

    /// Normalize one raw line, or `None` when it carries no usable tweet
    pub fn normalize_line(&mut self, line: &str) -> Option<String> {
        let raw: RawTweet = serde_json::from_str(line).ok()?;
        let created_at = raw.created_at?;
        let text = raw.text?;

        let clean = self.clean_text(&text);
        Some(format!("{} (timestamp: {}) ", clean, created_at))
    }

    fn clean_text(&mut self, text: &str) -> String {
        let ascii: String = if text.is_ascii() {
            text.to_string()
        } else {
            self.unicode_tweets += 1;
            text.chars().filter(char::is_ascii).collect()
        };

        let collapsed = self.whitespace.replace_all(&ascii, " ");
        self.escapes.replace_all(&collapsed, "$1").into_owned()
    }

    /// How many tweets contained non-ASCII characters so far
    pub fn unicode_tweets(&self) -> usize {
        self.unicode_tweets
    }

    /// Trailing summary line appended after the input is exhausted
    pub fn summary(&self) -> String {
        format!("\n {} tweet(s) contained unicode", self.unicode_tweets)
    }
}

impl Default for TweetNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
