//! The emoji sequence grammar, built from small named pieces.
//!
//! Each piece is a `macro_rules!` template expanding to a string literal, so the pieces can be
//! glued together with `concat!()` and the whole grammar ends up as one `&'static str`.
//!
//! <https://www.unicode.org/reports/tr51/tr51-22.html#EBNF_and_Regex>

/// Two Regional Indicator symbols, i.e. a country flag.
macro_rules! regional_pair {
    () => { r"\p{RI}\p{RI}" };
}

/// Tag characters closed by CANCEL TAG, used by subdivision flags.
macro_rules! tag_run {
    () => { r"[\x{E0020}-\x{E007E}]+\x{E007F}" };
}

/// Optional suffix of a base: skin tone, tag run, or `VS16? KEYCAP?`.
///
/// The last alternative may be empty, which makes the whole group optional.
macro_rules! qualifier {
    () => { concat!(r"(?:\p{EMod}|", tag_run!(), r"|\x{FE0F}?\x{20E3}?)") };
}

macro_rules! base {
    () => { concat!(r"\p{Emoji}", qualifier!()) };
}

/// `#`, `*` and ASCII digits carry the Emoji property but are almost always plain text.
macro_rules! keycap_chars {
    () => { "[#*0-9]" };
}

macro_rules! keycap {
    () => { concat!(keycap_chars!(), r"\x{FE0F}?\x{20E3}") };
}

/// A base that may not be a bare keycap character.
///
/// Equivalent to the lookahead `(?![#*0-9](?!\x{FE0F}?\x{20E3}))` followed by a base, without
/// requiring look-around from the engine.
macro_rules! guarded_base {
    () => {
        concat!(
            "(?:",
            keycap!(),
            r"|[\p{Emoji}--",
            keycap_chars!(),
            "]",
            qualifier!(),
            ")"
        )
    };
}

macro_rules! zwj_chain {
    () => { concat!(guarded_base!(), r"(?:\x{200D}", base!(), ")*") };
}

pub const REGIONAL_PAIR: &str = regional_pair!();
pub const TAG_RUN: &str = tag_run!();
pub const QUALIFIER: &str = qualifier!();
pub const BASE: &str = base!();
pub const KEYCAP: &str = keycap!();
pub const GUARDED_BASE: &str = guarded_base!();
pub const ZWJ_CHAIN: &str = zwj_chain!();

/// The full grammar. Alternatives are tried in order, so a flag pair always wins over two
/// separate Regional Indicators.
pub const PATTERN: &str = concat!(regional_pair!(), "|", zwj_chain!());

/// [`PATTERN`], but only matching at the start of the haystack
pub const ANCHORED: &str = concat!("^(?:", regional_pair!(), "|", zwj_chain!(), ")");

/// Source text of the full pattern
#[inline]
pub const fn source() -> &'static str {
    PATTERN
}
