//! Streaming search over a `UnicodeData.txt` stream.

use std::io::{self, BufRead, Write};

use crate::error::UcdError;
use crate::matcher::all_match;
use crate::record::{parse_line, CodePointEntry};
use crate::token::split_words;

/// Search words, uppercased and split once up front.
///
/// Each raw word is uppercased and then split on whitespace and hyphens the
/// same way names are, so `"greater-than"` and a single `"CAPITAL LATIN"`
/// argument both become two words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    words: Vec<String>,
}

impl Query {
    pub fn new<I, S>(raw_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = raw_words
            .into_iter()
            .flat_map(|raw| {
                split_words(&raw.as_ref().to_uppercase())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// An empty query matches every entry.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn matches(&self, entry: &CodePointEntry) -> bool {
        all_match(entry.tokens(), &self.words)
    }
}

/// Lazy iterator of entries read from a UCD stream.
///
/// Blank lines are skipped. Parse failures carry the 1-based line number.
/// The iterator is single-pass; it does not rewind the reader, and it ends
/// after yielding a read error.
#[derive(Debug)]
pub struct Entries<R> {
    lines: io::Lines<R>,
    line_number: usize,
    failed: bool,
}

/// Starts streaming entries from `reader`.
pub fn entries<R: BufRead>(reader: R) -> Entries<R> {
    Entries {
        lines: reader.lines(),
        line_number: 0,
        failed: false,
    }
}

impl<R: BufRead> Entries<R> {
    /// Number of lines consumed so far, blank lines included.
    pub fn lines_read(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for Entries<R> {
    type Item = Result<CodePointEntry, UcdError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(err) => {
                    self.failed = true;
                    return Some(Err(UcdError::Io(err)));
                }
            };
            self.line_number += 1;

            let line = line.trim_end_matches(['\r', '\n']);
            if line.is_empty() {
                continue;
            }

            return Some(parse_line(line).map_err(|err| err.at_line(self.line_number)));
        }
    }
}

/// Formats a hit as `U+XXXX<TAB><char><TAB><display name>`.
///
/// The hex code point has at least four uppercase digits. Code points that are
/// not Unicode scalar values print as U+FFFD.
pub fn format_hit(entry: &CodePointEntry) -> String {
    format!(
        "U+{:04X}\t{}\t{}",
        entry.code_point(),
        entry.as_char().unwrap_or(char::REPLACEMENT_CHARACTER),
        entry.display_name()
    )
}

/// Writes one line per entry of `reader` whose tokens contain every query word.
///
/// Lines are written in stream order. Returns the number of hits; zero hits is
/// a successful, empty listing. The first read, parse or write failure stops
/// the scan.
pub fn list<R, W>(reader: R, query: &Query, out: &mut W) -> Result<usize, UcdError>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let mut stream = entries(reader);
    let mut hits = 0usize;

    for entry in stream.by_ref() {
        let entry = entry?;
        if query.matches(&entry) {
            writeln!(out, "{}", format_hit(&entry))?;
            hits += 1;
        }
    }

    tracing::debug!(
        query = ?query.words(),
        lines = stream.lines_read(),
        hits,
        "ucd scan finished"
    );
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "
003D;EQUALS SIGN;Sm;0;ON;;;;;N;;;;;
003E;GREATER-THAN SIGN;Sm;0;ON;;;;;Y;;;;;
003F;QUESTION MARK;Po;0;ON;;;;;N;;;;;
0040;COMMERCIAL AT;Po;0;ON;;;;;N;;;;;
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
0042;LATIN CAPITAL LETTER B;Lu;0;L;;;;;N;;;;0062;
0043;LATIN CAPITAL LETTER C;Lu;0;L;;;;;N;;;;0063;
";

    fn listing(data: &str, words: &[&str]) -> (usize, String) {
        let mut out = Vec::new();
        let hits = list(data.as_bytes(), &Query::new(words), &mut out).expect("listing succeeds");
        (hits, String::from_utf8(out).expect("utf-8 output"))
    }

    #[test]
    fn query_uppercases_and_splits() {
        let query = Query::new(["capital latin", "greater-than"]);
        assert_eq!(query.words(), ["CAPITAL", "LATIN", "GREATER", "THAN"]);
    }

    #[test]
    fn query_drops_blank_words() {
        assert!(Query::new(["", "  "]).is_empty());
    }

    #[test]
    fn lists_single_mark() {
        assert_eq!(
            listing(SAMPLE, &["MARK"]),
            (1, "U+003F\t?\tQUESTION MARK\n".to_string())
        );
    }

    #[test]
    fn lists_two_signs() {
        let (hits, out) = listing(SAMPLE, &["SIGN"]);
        assert_eq!(hits, 2);
        assert_eq!(out, "U+003D\t=\tEQUALS SIGN\nU+003E\t>\tGREATER-THAN SIGN\n");
    }

    #[test]
    fn lowercase_query_matches() {
        let (hits, _) = listing(SAMPLE, &["capital", "latin"]);
        assert_eq!(hits, 3);
    }

    #[test]
    fn no_match_is_empty_success() {
        assert_eq!(listing(SAMPLE, &["NOTHING"]), (0, String::new()));
    }

    #[test]
    fn empty_query_lists_everything() {
        let (hits, out) = listing(SAMPLE, &[]);
        assert_eq!(hits, 7);
        assert_eq!(out.lines().count(), 7);
    }

    #[test]
    fn output_keeps_stream_order() {
        let data = "0043;LATIN CAPITAL LETTER C;Lu;0;L;;;;;N;;;;0063;\n\
                    003F;QUESTION MARK;Po;0;ON;;;;;N;;;;;\n\
                    0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;\n";
        let (_, out) = listing(data, &["LATIN"]);
        assert_eq!(
            out,
            "U+0043\tC\tLATIN CAPITAL LETTER C\nU+0041\tA\tLATIN CAPITAL LETTER A\n"
        );
    }

    #[test]
    fn formats_astral_and_alias_hits() {
        let cat = parse_line("1F63A;SMILING CAT FACE WITH OPEN MOUTH;So;0;ON;;;;;N;;;;;")
            .expect("cat parses");
        assert_eq!(format_hit(&cat), "U+1F63A\t\u{1F63A}\tSMILING CAT FACE WITH OPEN MOUTH");

        let quote = parse_line("0027;APOSTROPHE;Po;0;ON;;;;;N;APOSTROPHE-QUOTE;;;")
            .expect("apostrophe parses");
        assert_eq!(format_hit(&quote), "U+0027\t'\tAPOSTROPHE (APOSTROPHE-QUOTE)");
    }

    #[test]
    fn formats_surrogate_as_replacement() {
        let entry = parse_line("DB7F;<Non Private Use High Surrogate, Last>;Cs;0;L;;;;;N;;;;;")
            .expect("surrogate parses");
        assert!(format_hit(&entry).starts_with("U+DB7F\t\u{FFFD}\t"));
    }

    #[test]
    fn tolerates_crlf_line_endings() {
        let data = "003F;QUESTION MARK;Po;0;ON;;;;;N;;;;;\r\n\r\n0021;EXCLAMATION MARK;Po;0;ON;;;;;N;;;;;\r\n";
        let (hits, out) = listing(data, &["MARK"]);
        assert_eq!(hits, 2);
        assert!(!out.contains('\r'));
    }

    #[test]
    fn entries_skip_blank_lines() {
        let parsed: Vec<u32> = entries(SAMPLE.as_bytes())
            .map(|entry| entry.expect("entry parses").code_point())
            .collect();
        assert_eq!(parsed, vec![0x3D, 0x3E, 0x3F, 0x40, 0x41, 0x42, 0x43]);
    }

    /// Yields one good line, then fails every read after it.
    struct BrokenReader {
        served: bool,
    }

    impl io::Read for BrokenReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::other("disk gone"));
            }
            self.served = true;
            let line = b"003F;QUESTION MARK;Po;0;ON;;;;;N;;;;;\n";
            buf[..line.len()].copy_from_slice(line);
            Ok(line.len())
        }
    }

    #[test]
    fn entries_end_after_read_error() {
        let reader = io::BufReader::new(BrokenReader { served: false });
        let items: Vec<_> = entries(reader).take(10).collect();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_ref().expect("first line parses").code_point(), 0x3F);
        assert!(matches!(items[1], Err(UcdError::Io(_))));
    }

    #[test]
    fn entries_ok_filter_terminates_on_read_error() {
        let reader = io::BufReader::new(BrokenReader { served: false });
        assert_eq!(entries(reader).filter_map(Result::ok).count(), 1);
    }

    #[test]
    fn malformed_record_reports_line_number() {
        let data = "003F;QUESTION MARK;Po;0;ON;;;;;N;;;;;\n\nZZZZ;BROKEN;Po;0;ON;;;;;N;;;;;\n";
        let mut out = Vec::new();
        let err = list(data.as_bytes(), &Query::new(["MARK"]), &mut out)
            .expect_err("malformed record is fatal");

        match err {
            UcdError::Line { number, source } => {
                assert_eq!(number, 3);
                assert!(matches!(*source, UcdError::MalformedCodePoint(ref f) if f == "ZZZZ"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(String::from_utf8(out).unwrap(), "U+003F\t?\tQUESTION MARK\n");
    }
}
