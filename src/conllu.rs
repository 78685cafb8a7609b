//! CoNLL-U file parsing
//!
//! Reads CoNLL-U text into [`Sentence`] values, one per blank-line
//! separated block. Multiword token ranges (`1-2`) and empty nodes (`2.1`)
//! are not part of the basic tree and are skipped. Lines are handled as
//! bytes; only the columns that are kept get decoded.
//!
//! CoNLL-U format: https://universaldependencies.org/format.html

use crate::bytes::{bs_atoi, bs_split_once, bs_string, split_fields};
use crate::error::{ComplexityError, UnsupportedInputError};
use crate::tree::{Features, Sentence, Token};
use bstr::ByteSlice;
use flate2::read::MultiGzDecoder;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Token ID column variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenId {
    Single(usize),
    Range(usize, usize),
    Decimal(usize, usize),
}

/// CoNLL-U reader that iterates over sentences
pub struct ConlluReader<R: BufRead> {
    reader: R,
    line_num: usize,
    buffer: Vec<u8>,
}

impl<R: BufRead> ConlluReader<R> {
    /// Create a reader from any buffered source
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line_num: 0,
            buffer: Vec::with_capacity(256),
        }
    }
}

impl ConlluReader<Box<dyn BufRead>> {
    /// Create a reader from a file path, decompressing `.gz` files
    pub fn from_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader: Box<dyn BufRead> = if path.extension().is_some_and(|ext| ext == "gz") {
            Box::new(BufReader::new(MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };
        Ok(Self::from_reader(reader))
    }
}

impl<'a> ConlluReader<&'a [u8]> {
    /// Create a reader from a string
    pub fn from_str(text: &'a str) -> Self {
        Self::from_reader(text.as_bytes())
    }
}

impl<R: BufRead> Iterator for ConlluReader<R> {
    type Item = Result<Sentence, ComplexityError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut tokens = Vec::new();
        let mut metadata = BTreeMap::new();
        let mut sentence_text = None;
        let mut in_block = false;
        let mut error = None;

        // Read the whole block up to a blank line (sentence boundary) or EOF
        loop {
            self.buffer.clear();
            match self.reader.read_until(b'\n', &mut self.buffer) {
                Ok(0) => {
                    if !in_block {
                        return None;
                    }
                    // Last sentence without trailing blank line
                    break;
                }
                Ok(_) => {}
                Err(e) => return Some(Err(e.into())),
            }
            self.line_num += 1;

            let line = self.buffer.trim();
            if line.is_empty() {
                if in_block {
                    break;
                }
                continue;
            }

            if let Some(comment) = line.strip_prefix(b"#") {
                parse_comment(comment, &mut metadata, &mut sentence_text);
                continue;
            }

            in_block = true;
            if error.is_some() {
                continue;
            }
            match parse_line(line, self.line_num) {
                Ok(Some(token)) => tokens.push(token),
                Ok(None) => {}
                // The rest of the block is consumed so the next call starts clean
                Err(e) => error = Some(e),
            }
        }

        match error {
            Some(e) => Some(Err(e.into())),
            None => Some(Ok(Sentence::with_metadata(tokens, sentence_text, metadata))),
        }
    }
}

/// Parse a comment line (without the leading #)
fn parse_comment(
    comment: &[u8],
    metadata: &mut BTreeMap<String, String>,
    sentence_text: &mut Option<String>,
) {
    let Some((key, value)) = bs_split_once(comment, b'=') else {
        return;
    };
    let key = bs_string(key.trim());
    let value = bs_string(value.trim());
    if key == "text" {
        *sentence_text = Some(value);
    } else {
        metadata.insert(key, value);
    }
}

/// Parse a single token line; `None` for multiword tokens and empty nodes
fn parse_line(line: &[u8], line_num: usize) -> Result<Option<Token>, UnsupportedInputError> {
    let fields = split_fields(line);
    if fields.len() != 10 {
        return Err(UnsupportedInputError::new(
            line_num,
            format!("expected 10 fields, found {}", fields.len()),
        ));
    }

    let id = match parse_id(fields[0]) {
        Some(TokenId::Single(id)) => id,
        Some(TokenId::Range(..) | TokenId::Decimal(..)) => return Ok(None),
        None => {
            return Err(UnsupportedInputError::new(
                line_num,
                format!("invalid ID: {}", fields[0].as_bstr()),
            ));
        }
    };

    let head = bs_atoi(fields[6]).ok_or_else(|| {
        UnsupportedInputError::new(line_num, format!("invalid HEAD: {}", fields[6].as_bstr()))
    })?;

    let form = bs_string(fields[1]);
    let lemma = if fields[2] == b"_" {
        form.clone()
    } else {
        bs_string(fields[2])
    };

    Ok(Some(Token {
        id,
        form,
        lemma,
        upos: bs_string(fields[3]),
        xpos: optional(fields[4]),
        feats: parse_pairs(fields[5]),
        head,
        deprel: bs_string(fields[7]),
        deps: optional(fields[8]),
        misc: parse_pairs(fields[9]),
    }))
}

/// Parse ID field (integer, range or decimal)
fn parse_id(s: &[u8]) -> Option<TokenId> {
    if let Some((start, end)) = bs_split_once(s, b'-') {
        Some(TokenId::Range(bs_atoi(start)?, bs_atoi(end)?))
    } else if let Some((main, sub)) = bs_split_once(s, b'.') {
        Some(TokenId::Decimal(bs_atoi(main)?, bs_atoi(sub)?))
    } else {
        Some(TokenId::Single(bs_atoi(s)?))
    }
}

fn optional(s: &[u8]) -> Option<String> {
    if s == b"_" { None } else { Some(bs_string(s)) }
}

/// Parse FEATS or MISC (key=value|key=value)
fn parse_pairs(s: &[u8]) -> Features {
    let mut pairs = Features::new();
    if s == b"_" {
        return pairs;
    }
    for pair in s.split_str("|") {
        if let Some((key, value)) = bs_split_once(pair, b'=') {
            pairs.insert(bs_string(key), bs_string(value));
        }
    }
    pairs
}
