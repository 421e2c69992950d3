//! Text parser for `#`-delimited Bible files
//!
//! Line format:
//!
//! ```text
//! <testament-flag>#<book-name>#<chapter>#<verse>#<verse-text>
//! ```
//!
//! Lines are read lazily. Blank lines are ignored. Malformed lines are
//! skipped and recorded in the [`ParseReport`]; they never abort a load.
//! Duplicate (book, chapter, verse) keys keep the last value seen.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::errors::{LoadError, LoadResult, MalformedLine, MalformedReason};
use super::kind::TranslationKind;
use super::model::TextIndex;

/// Field delimiter
pub const DELIMITER: char = '#';

/// Fields per line
pub const FIELD_COUNT: usize = 5;

/// One successfully split source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawVerse<'a> {
    /// Testament flag; read but unused by lookups
    pub testament: &'a str,
    pub book: &'a str,
    pub chapter: u32,
    pub verse: u32,
    pub text: &'a str,
}

/// Outcome of parsing one source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Non-blank lines seen
    pub lines_read: usize,
    /// Verses inserted (including overwrites)
    pub verses_inserted: usize,
    /// Inserts that replaced an earlier verse with the same key
    pub overwritten: usize,
    /// Lines skipped, in file order
    pub skipped: Vec<MalformedLine>,
}

/// Split a single line.
///
/// Returns `Ok(None)` for a blank line. The verse text is the remainder after
/// the fourth delimiter, so it may itself contain `#`.
pub fn parse_line(line: &str) -> Result<Option<RawVerse<'_>>, MalformedReason> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.splitn(FIELD_COUNT, DELIMITER).collect();
    if fields.len() < FIELD_COUNT {
        return Err(MalformedReason::MissingFields(fields.len()));
    }

    let book = fields[1].trim();
    if book.is_empty() {
        return Err(MalformedReason::EmptyBook);
    }

    let chapter = parse_number(fields[2])
        .ok_or_else(|| MalformedReason::InvalidChapter(fields[2].to_string()))?;
    let verse = parse_number(fields[3])
        .ok_or_else(|| MalformedReason::InvalidVerse(fields[3].to_string()))?;

    let text = fields[4].trim();
    if text.is_empty() {
        return Err(MalformedReason::EmptyText);
    }

    Ok(Some(RawVerse {
        testament: fields[0].trim(),
        book,
        chapter,
        verse,
        text,
    }))
}

/// Chapter and verse numbers start at 1
fn parse_number(field: &str) -> Option<u32> {
    let field = field.trim();
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse::<u32>().ok().filter(|n| *n >= 1)
}

/// Parse every line from `reader`, normalizing book names with `normalize`.
///
/// I/O errors (including invalid UTF-8) are returned; malformed lines are not.
pub fn parse_reader<R, F>(reader: R, normalize: F) -> io::Result<(TextIndex, ParseReport)>
where
    R: BufRead,
    F: Fn(&str) -> String,
{
    let mut index = TextIndex::new();
    let mut report = ParseReport::default();

    for (offset, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(raw)) => {
                report.lines_read += 1;
                let book = normalize(raw.book);
                if index.insert(book, raw.chapter, raw.verse, raw.text.to_string()) {
                    report.overwritten += 1;
                }
                report.verses_inserted += 1;
            }
            Err(reason) => {
                report.lines_read += 1;
                report.skipped.push(MalformedLine {
                    line: offset + 1,
                    reason,
                });
            }
        }
    }

    Ok((index, report))
}

/// Open `path` as UTF-8 and parse it with the normalization of `kind`.
pub fn parse_file(path: &Path, kind: TranslationKind) -> LoadResult<(TextIndex, ParseReport)> {
    let file = File::open(path).map_err(|e| LoadError::from_io(path, e))?;
    let reader = BufReader::new(file);

    parse_reader(reader, |name| kind.normalize_book(name))
        .map_err(|e| LoadError::from_io(path, e))
}
