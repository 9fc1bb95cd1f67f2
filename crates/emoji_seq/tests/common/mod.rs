#![allow(dead_code)]

//! Reader for the `emoji-test.txt` reference list.

static EMOJI_TEST: &str = include_str!("../data/emoji-test.txt");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualified {
    Fully,
    Minimal,
    None,
    Component,
}

impl Qualified {
    pub const ALL: [Qualified; 4] = [Qualified::Fully, Qualified::Minimal, Qualified::None, Qualified::Component];

    pub const fn as_str(self) -> &'static str {
        match self {
            Qualified::Fully => "fully-qualified",
            Qualified::Minimal => "minimally-qualified",
            Qualified::None => "unqualified",
            Qualified::Component => "component",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TestEntry {
    /// Built from the code point column
    pub emoji: String,
    /// The emoji as printed after the `#`
    pub symbol: &'static str,
    pub name: &'static str,
    pub status: Qualified,
}

pub fn entries() -> Vec<TestEntry> {
    let mut entries = Vec::new();

    for line in EMOJI_TEST.lines() {
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        let (code_points, rest) = line.split_once(';').unwrap_or_else(|| panic!("Missing status: {line}"));

        let emoji = code_points
            .split_whitespace()
            .map(|cp| {
                let cp = u32::from_str_radix(cp, 16).unwrap_or_else(|_| panic!("Invalid code point: {cp}"));
                char::from_u32(cp).unwrap_or_else(|| panic!("Not a scalar value: {cp:X}"))
            })
            .collect::<String>();

        let rest = rest.trim_start();

        let status = Qualified::ALL
            .into_iter()
            .find(|q| rest.starts_with(q.as_str()))
            .unwrap_or_else(|| panic!("Unknown qualification: {rest}"));

        // trim off the whitespace and single # before the emoji itself, the keycap emoji start with # too
        let rest = rest[status.as_str().len()..].trim_start();
        let rest = rest.strip_prefix('#').unwrap_or(rest).trim_start();

        let symbol_end = rest.find(" E").expect("End of emoji");
        let symbol = &rest[..symbol_end];

        // skip ' E', the version, then whitespace, to get the name
        let name = rest[(symbol_end + 2)..].trim_start_matches(|c: char| !c.is_ascii_whitespace()).trim();

        entries.push(TestEntry {
            emoji,
            symbol,
            name,
            status,
        });
    }

    entries
}

/// Sequences the Unicode lists did not carry at some point, but which platforms emit anyway.
pub const EXTRA_SEQUENCES: &[&str] = &[
    "\u{1F91D}\u{1F3FB}", // handshake: light skin
    "\u{1F91D}\u{1F3FC}",
    "\u{1F91D}\u{1F3FD}",
    "\u{1F91D}\u{1F3FE}",
    "\u{1F91D}\u{1F3FF}",
    "\u{1F93C}\u{1F3FB}", // wrestlers: light skin
    "\u{1F93C}\u{1F3FC}",
    "\u{1F93C}\u{1F3FD}",
    "\u{1F93C}\u{1F3FE}",
    "\u{1F93C}\u{1F3FF}",
    // overqualified, as entered via the iOS emoji picker
    "\u{231A}\u{FE0F}", // watch
    "\u{231B}\u{FE0F}", // hourglass
    "\u{25FE}\u{FE0F}",
    "\u{2614}\u{FE0F}",
    "\u{2615}\u{FE0F}",
    "\u{2648}\u{FE0F}", // Aries
    "\u{2649}\u{FE0F}",
    "\u{264A}\u{FE0F}",
    "\u{264B}\u{FE0F}",
    "\u{264C}\u{FE0F}",
    "\u{264D}\u{FE0F}",
    "\u{264E}\u{FE0F}",
    "\u{264F}\u{FE0F}",
    "\u{2650}\u{FE0F}",
    "\u{2651}\u{FE0F}",
    "\u{2652}\u{FE0F}",
    "\u{2653}\u{FE0F}", // Pisces
    "\u{267F}\u{FE0F}",
    "\u{26AA}\u{FE0F}",
    "\u{26BD}\u{FE0F}", // soccer ball
    "\u{26BE}\u{FE0F}",
    "\u{26C4}\u{FE0F}",
    "\u{26F2}\u{FE0F}",
    "\u{26F3}\u{FE0F}",
    "\u{26F5}\u{FE0F}",
    "\u{26FA}\u{FE0F}",
    "\u{2757}\u{FE0F}",
    "\u{2B1B}\u{FE0F}",
    "\u{2B1C}\u{FE0F}",
    "\u{2B55}\u{FE0F}",
    "\u{1F004}\u{FE0F}", // mahjong red dragon
    // platform specific
    "\u{1F93C}\u{1F3FB}\u{200D}\u{2640}\u{FE0F}", // women wrestling: light skin tone
    "\u{1F3F4}\u{E0075}\u{E0073}\u{E0074}\u{E0078}\u{E007F}", // flag: Texas
    "\u{1F431}\u{200D}\u{1F464}",                 // ninja cat
];
