//! The same grammar over raw byte buffers.
//!
//! Input does not have to be valid UTF-8. Invalid bytes never match any part of the
//! grammar, so they just separate sequences like any other non-emoji text.

use std::{iter::FusedIterator, ops::Range};

use once_cell::sync::Lazy;
use regex::bytes::{Regex, RegexBuilder};

use crate::{pattern, Error};

#[derive(Debug, Clone)]
pub struct BytesMatcher {
    re: Regex,
}

pub static EMOJI_BYTES_RE: Lazy<BytesMatcher> =
    Lazy::new(|| build().expect("emoji sequence pattern failed to compile"));

pub fn build() -> Result<BytesMatcher, Error> {
    BytesMatcher::new()
}

impl BytesMatcher {
    pub fn new() -> Result<Self, Error> {
        let re = RegexBuilder::new(pattern::PATTERN).unicode(true).build()?;

        log::debug!("Compiled byte-oriented emoji sequence pattern");

        Ok(BytesMatcher { re })
    }

    #[inline]
    pub fn test(&self, haystack: &[u8]) -> bool {
        self.re.is_match(haystack)
    }

    #[inline]
    pub fn match_all<'r, 'h>(&'r self, haystack: &'h [u8]) -> ByteSequences<'r, 'h> {
        ByteSequences(self.re.find_iter(haystack))
    }

    pub fn count(&self, haystack: &[u8]) -> usize {
        self.match_all(haystack).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteSequence<'h> {
    bytes: &'h [u8],
    start: usize,
    end: usize,
}

impl<'h> ByteSequence<'h> {
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    #[inline]
    pub fn as_bytes(&self) -> &'h [u8] {
        self.bytes
    }

    /// Every part of the grammar is a Unicode class, so this only fails if the engine misbehaves.
    pub fn to_str(&self) -> Option<&'h str> {
        std::str::from_utf8(self.bytes).ok()
    }
}

impl<'h> From<regex::bytes::Match<'h>> for ByteSequence<'h> {
    #[inline]
    fn from(m: regex::bytes::Match<'h>) -> Self {
        ByteSequence {
            bytes: m.as_bytes(),
            start: m.start(),
            end: m.end(),
        }
    }
}

#[derive(Debug)]
pub struct ByteSequences<'r, 'h>(regex::bytes::Matches<'r, 'h>);

impl<'r, 'h> Iterator for ByteSequences<'r, 'h> {
    type Item = ByteSequence<'h>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(ByteSequence::from)
    }
}

impl FusedIterator for ByteSequences<'_, '_> {}
