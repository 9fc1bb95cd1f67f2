use std::{borrow::Cow, io::Write};

use emoji_seq::bytes::ByteSequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Plain,
    Json,
    Count,
}

impl Format {
    pub fn new(count: bool, json: bool) -> anyhow::Result<Format> {
        Ok(match (count, json) {
            (true, true) => anyhow::bail!("--count and --json cannot be used together"),
            (true, false) => Format::Count,
            (false, true) => Format::Json,
            (false, false) => Format::Plain,
        })
    }
}

#[derive(Debug, serde::Serialize)]
pub struct Record<'a> {
    pub source: &'a str,
    pub start: usize,
    pub end: usize,
    pub text: Cow<'a, str>,
    pub code_points: Vec<String>,
}

impl<'a> Record<'a> {
    pub fn new(source: &'a str, seq: &ByteSequence<'a>) -> Self {
        let text = String::from_utf8_lossy(seq.as_bytes());
        let code_points = text.chars().map(code_point).collect();

        Record {
            source,
            start: seq.start(),
            end: seq.end(),
            text,
            code_points,
        }
    }
}

pub fn code_point(c: char) -> String {
    format!("U+{:04X}", c as u32)
}

pub fn write_sequence<W: Write>(mut out: W, format: Format, record: &Record) -> anyhow::Result<()> {
    match format {
        Format::Count => {}
        Format::Json => {
            serde_json::to_writer(&mut out, record)?;
            writeln!(out)?;
        }
        Format::Plain => {
            writeln!(
                out,
                "{}:{}-{}\t{}\t{}",
                record.source,
                record.start,
                record.end,
                record.text,
                record.code_points.join(" ")
            )?;
        }
    }

    Ok(())
}
