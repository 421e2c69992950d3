//! Book-name normalization
//!
//! German translations collapse abbreviations ("1Mos"), English names
//! ("Genesis") and loosely written ordinal prefixes ("1.Mose") onto the
//! canonical German form ("1. Mose"). The same function runs when a text is
//! loaded and when a caller queries, so both sides always agree on the key.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

/// German abbreviation -> canonical book name
const GERMAN_ABBREVIATIONS: &[(&str, &str)] = &[
    ("1Mos", "1. Mose"),
    ("2Mos", "2. Mose"),
    ("3Mos", "3. Mose"),
    ("4Mos", "4. Mose"),
    ("5Mos", "5. Mose"),
    ("Jos", "Josua"),
    ("Ri", "Richter"),
    ("1Sam", "1. Samuel"),
    ("2Sam", "2. Samuel"),
    ("1Kön", "1. Könige"),
    ("2Kön", "2. Könige"),
    ("1Chr", "1. Chronik"),
    ("2Chr", "2. Chronik"),
    ("Esr", "Esra"),
    ("Neh", "Nehemia"),
    ("Est", "Esther"),
    ("Hi", "Hiob"),
    ("Ps", "Psalmen"),
    ("Spr", "Sprüche"),
    ("Pred", "Prediger"),
    ("Hld", "Hohelied"),
    ("Jes", "Jesaja"),
    ("Jer", "Jeremia"),
    ("Kla", "Klagelieder"),
    ("Hes", "Hesekiel"),
    ("Dan", "Daniel"),
    ("Hos", "Hosea"),
    ("Joe", "Joel"),
    ("Am", "Amos"),
    ("Ob", "Obadja"),
    ("Jon", "Jona"),
    ("Mi", "Micha"),
    ("Nah", "Nahum"),
    ("Hab", "Habakuk"),
    ("Zef", "Zefanja"),
    ("Hag", "Haggai"),
    ("Sach", "Sacharja"),
    ("Mal", "Maleachi"),
    ("Mt", "Matthäus"),
    ("Mk", "Markus"),
    ("Lk", "Lukas"),
    ("Joh", "Johannes"),
    ("Apg", "Apostelgeschichte"),
    ("Röm", "Römer"),
    ("1Kor", "1. Korinther"),
    ("2Kor", "2. Korinther"),
    ("Gal", "Galater"),
    ("Eph", "Epheser"),
    ("Phil", "Philipper"),
    ("Kol", "Kolosser"),
    ("1Thess", "1. Thessalonicher"),
    ("2Thess", "2. Thessalonicher"),
    ("1Tim", "1. Timotheus"),
    ("2Tim", "2. Timotheus"),
    ("Tit", "Titus"),
    ("Phlm", "Philemon"),
    ("Hebr", "Hebräer"),
    ("Jak", "Jakobus"),
    ("1Petr", "1. Petrus"),
    ("2Petr", "2. Petrus"),
    ("1Joh", "1. Johannes"),
    ("2Joh", "2. Johannes"),
    ("3Joh", "3. Johannes"),
    ("Jud", "Judas"),
    ("Offb", "Offenbarung"),
];

/// English book name -> canonical German book name
const ENGLISH_NAMES: &[(&str, &str)] = &[
    ("Genesis", "1. Mose"),
    ("Exodus", "2. Mose"),
    ("Leviticus", "3. Mose"),
    ("Numbers", "4. Mose"),
    ("Deuteronomy", "5. Mose"),
    ("Joshua", "Josua"),
    ("Judges", "Richter"),
    ("1 Samuel", "1. Samuel"),
    ("2 Samuel", "2. Samuel"),
    ("1 Kings", "1. Könige"),
    ("2 Kings", "2. Könige"),
    ("1 Chronicles", "1. Chronik"),
    ("2 Chronicles", "2. Chronik"),
    ("Ezra", "Esra"),
    ("Nehemiah", "Nehemia"),
    ("Job", "Hiob"),
    ("Psalms", "Psalmen"),
    ("Proverbs", "Sprüche"),
    ("Ecclesiastes", "Prediger"),
    ("Song of Solomon", "Hohelied"),
    ("Isaiah", "Jesaja"),
    ("Jeremiah", "Jeremia"),
    ("Lamentations", "Klagelieder"),
    ("Ezekiel", "Hesekiel"),
    ("Obadiah", "Obadja"),
    ("Jonah", "Jona"),
    ("Micah", "Micha"),
    ("Habakkuk", "Habakuk"),
    ("Zephaniah", "Zefanja"),
    ("Zechariah", "Sacharja"),
    ("Malachi", "Maleachi"),
    ("Matthew", "Matthäus"),
    ("Mark", "Markus"),
    ("Luke", "Lukas"),
    ("John", "Johannes"),
    ("Acts", "Apostelgeschichte"),
    ("Romans", "Römer"),
    ("1 Corinthians", "1. Korinther"),
    ("2 Corinthians", "2. Korinther"),
    ("Galatians", "Galater"),
    ("Ephesians", "Epheser"),
    ("Philippians", "Philipper"),
    ("Colossians", "Kolosser"),
    ("1 Thessalonians", "1. Thessalonicher"),
    ("2 Thessalonians", "2. Thessalonicher"),
    ("1 Timothy", "1. Timotheus"),
    ("2 Timothy", "2. Timotheus"),
    ("Hebrews", "Hebräer"),
    ("James", "Jakobus"),
    ("1 Peter", "1. Petrus"),
    ("2 Peter", "2. Petrus"),
    ("1 John", "1. Johannes"),
    ("2 John", "2. Johannes"),
    ("3 John", "3. Johannes"),
    ("Jude", "Judas"),
    ("Revelation", "Offenbarung"),
];

static GERMAN_LOOKUP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
static ORDINAL_PREFIX: OnceLock<Regex> = OnceLock::new();

fn german_lookup() -> &'static HashMap<&'static str, &'static str> {
    GERMAN_LOOKUP.get_or_init(|| {
        GERMAN_ABBREVIATIONS
            .iter()
            .chain(ENGLISH_NAMES.iter())
            .copied()
            .collect()
    })
}

fn ordinal_prefix() -> &'static Regex {
    // "1.Mose", "1 Mose", "1. Mose", "1Mose" -> ordinal + remainder
    ORDINAL_PREFIX.get_or_init(|| {
        Regex::new(r"^([1-5])\.?\s*(\p{L}.*)$").expect("ordinal prefix pattern is valid")
    })
}

/// Identity normalization (only surrounding whitespace is trimmed)
pub fn identity(name: &str) -> String {
    name.trim().to_string()
}

/// Canonicalize a German book name
pub fn german(name: &str) -> String {
    let collapsed = name.split_whitespace().collect::<Vec<_>>().join(" ");
    let lookup = german_lookup();

    if let Some(canonical) = lookup.get(collapsed.as_str()) {
        return (*canonical).to_string();
    }

    if let Some(caps) = ordinal_prefix().captures(&collapsed) {
        let ordinal = &caps[1];
        let rest = &caps[2];

        // "1. Kor" is an abbreviation written with a spaced ordinal
        let compact = format!("{}{}", ordinal, rest);
        if let Some(canonical) = lookup.get(compact.as_str()) {
            return (*canonical).to_string();
        }

        return format!("{}. {}", ordinal, rest);
    }

    collapsed
}
