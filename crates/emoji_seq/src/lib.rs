//! Recognizes emoji sequences (flags, modifier sequences, keycaps, tag sequences and ZWJ chains)
//! as single units of text.
//!
//! ```
//! let spans: Vec<_> = emoji_seq::match_all("hi \u{1F469}\u{1F3FE}\u{200D}\u{2708}\u{FE0F}!")
//!     .map(|s| s.range())
//!     .collect();
//!
//! assert_eq!(spans, [3..20]);
//! ```

extern crate tracing as log;

use std::{fmt, iter::FusedIterator, ops::Range, str::Chars};

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

pub mod bytes;
pub mod pattern;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The regex engine could not build the pattern, usually because
    /// its Unicode property tables are unavailable.
    #[error("Pattern Compile Error: {0}")]
    Compile(#[from] regex::Error),
}

/// Compiled emoji sequence matcher.
///
/// The scan position lives in the iterators returned by [`EmojiMatcher::match_all`], never in
/// the matcher itself, so a single instance can serve any number of concurrent scans.
#[derive(Debug, Clone)]
pub struct EmojiMatcher {
    re: Regex,
    /// Same grammar, only matching at the start of the haystack
    anchored: Regex,
}

/// Process-wide matcher, compiled on first use.
pub static EMOJI_RE: Lazy<EmojiMatcher> =
    Lazy::new(|| build().expect("emoji sequence pattern failed to compile"));

/// Compiles a fresh matcher.
///
/// Fails immediately if the regex engine lacks the Unicode support the pattern needs.
pub fn build() -> Result<EmojiMatcher, Error> {
    EmojiMatcher::new()
}

/// Returns `true` if any emoji sequence occurs in `text`
pub fn test(text: &str) -> bool {
    EMOJI_RE.test(text)
}

/// Iterates over all emoji sequences in `text`, left to right.
pub fn match_all(text: &str) -> Sequences<'static, '_> {
    Lazy::force(&EMOJI_RE).match_all(text)
}

pub fn count(text: &str) -> usize {
    EMOJI_RE.count(text)
}

impl EmojiMatcher {
    pub fn new() -> Result<Self, Error> {
        let re = RegexBuilder::new(pattern::PATTERN).unicode(true).build()?;
        let anchored = RegexBuilder::new(pattern::ANCHORED).unicode(true).build()?;

        log::debug!("Compiled emoji sequence pattern ({} bytes of source)", pattern::PATTERN.len());

        Ok(EmojiMatcher { re, anchored })
    }

    #[inline]
    pub fn test(&self, text: &str) -> bool {
        self.re.is_match(text)
    }

    #[inline]
    pub fn match_all<'r, 't>(&'r self, text: &'t str) -> Sequences<'r, 't> {
        Sequences(self.re.find_iter(text))
    }

    pub fn count(&self, text: &str) -> usize {
        self.match_all(text).count()
    }

    /// Finds the first sequence starting at or after byte offset `start`.
    ///
    /// Offsets past the end of `text` simply find nothing.
    pub fn find_at<'t>(&self, text: &'t str, start: usize) -> Option<Sequence<'t>> {
        if start > text.len() {
            return None;
        }

        self.re.find_at(text, start).map(Sequence::from)
    }

    /// Longest sequence beginning exactly at byte offset `pos`, if any.
    ///
    /// Only the text from `pos` onwards is considered, so an offset inside a sequence finds
    /// whatever sequence starts there, e.g. the second Regional Indicator of a flag on its own.
    /// Offsets that are not on a `char` boundary find nothing.
    ///
    /// The search never looks past the sequence itself, so querying every offset of a text is linear.
    pub fn sequence_at<'t>(&self, text: &'t str, pos: usize) -> Option<Sequence<'t>> {
        // the grammar has no look-behind, so slicing off the prefix does not change what matches
        let rest = text.get(pos..)?;

        self.anchored.find(rest).map(|m| Sequence {
            text: m.as_str(),
            start: pos + m.start(),
            end: pos + m.end(),
        })
    }

    /// Splits `text` into runs of plain text and emoji sequences, covering all of it.
    pub fn split<'r, 't>(&'r self, text: &'t str) -> Segments<'r, 't> {
        Segments {
            text,
            last: 0,
            pending: None,
            matches: self.match_all(text),
        }
    }

    /// Source text of the compiled pattern
    #[inline]
    pub fn as_str(&self) -> &str {
        self.re.as_str()
    }
}

/// One emoji sequence found in a haystack. Offsets are in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sequence<'t> {
    text: &'t str,
    start: usize,
    end: usize,
}

impl<'t> Sequence<'t> {
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Exclusive end offset
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn as_str(&self) -> &'t str {
        self.text
    }

    /// Iterates the code points making up this sequence
    #[inline]
    pub fn chars(&self) -> Chars<'t> {
        self.as_str().chars()
    }

    /// Length in code points
    pub fn char_len(&self) -> usize {
        self.chars().count()
    }
}

impl<'t> From<regex::Match<'t>> for Sequence<'t> {
    #[inline]
    fn from(m: regex::Match<'t>) -> Self {
        Sequence {
            text: m.as_str(),
            start: m.start(),
            end: m.end(),
        }
    }
}

impl fmt::Display for Sequence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lazy iterator of non-overlapping emoji sequences, see [`EmojiMatcher::match_all`]
#[derive(Debug)]
pub struct Sequences<'r, 't>(regex::Matches<'r, 't>);

impl<'r, 't> Iterator for Sequences<'r, 't> {
    type Item = Sequence<'t>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Sequence::from)
    }
}

impl FusedIterator for Sequences<'_, '_> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'t> {
    Text(&'t str),
    Emoji(Sequence<'t>),
}

impl<'t> Segment<'t> {
    pub fn as_str(&self) -> &'t str {
        match *self {
            Segment::Text(text) => text,
            Segment::Emoji(seq) => seq.as_str(),
        }
    }

    pub const fn is_emoji(&self) -> bool {
        matches!(self, Segment::Emoji(_))
    }
}

/// Iterator returned by [`EmojiMatcher::split`]
#[derive(Debug)]
pub struct Segments<'r, 't> {
    text: &'t str,
    last: usize,
    pending: Option<Sequence<'t>>,
    matches: Sequences<'r, 't>,
}

impl<'r, 't> Iterator for Segments<'r, 't> {
    type Item = Segment<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(seq) = self.pending.take() {
            self.last = seq.end();
            return Some(Segment::Emoji(seq));
        }

        match self.matches.next() {
            Some(seq) if seq.start() > self.last => {
                let text = &self.text[self.last..seq.start()];
                self.last = seq.start();
                self.pending = Some(seq);
                Some(Segment::Text(text))
            }
            Some(seq) => {
                self.last = seq.end();
                Some(Segment::Emoji(seq))
            }
            None if self.last < self.text.len() => {
                let text = &self.text[self.last..];
                self.last = self.text.len();
                Some(Segment::Text(text))
            }
            None => None,
        }
    }
}

impl FusedIterator for Segments<'_, '_> {}
