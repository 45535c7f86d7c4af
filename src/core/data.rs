//! Numeric ingest (whitespace / comma / semicolon separated) plus demo
//! sample generators.

use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
};

use crate::core::error::ChartError;

// --- Error Handling ---
#[derive(Debug)]
pub struct ParseError {
    /// 1-based; 0 when the fault is not tied to a line.
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    Io(std::io::Error),
    BadNumber(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Io(e) => write!(f, "I/O error on line {}: {}", self.line, e),
            ParseErrorKind::BadNumber(text) => {
                write!(f, "line {}: invalid number '{}'", self.line, text)
            }
        }
    }
}
impl Error for ParseError {}

// --- Helpers ---
#[inline]
fn is_separator(b: u8) -> bool {
    b.is_ascii_whitespace() || b == b',' || b == b';'
}

/// Rewrite U+2212 MINUS SIGN (`E2 88 92`) to ASCII `-` in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
        } else {
            buf[w] = buf[r];
            r += 1;
        }
        w += 1;
    }
    buf.truncate(w);
}

#[inline]
fn parse_f64(bytes: &[u8], line: usize) -> Result<f64, ParseError> {
    let bad = || ParseError {
        line,
        kind: ParseErrorKind::BadNumber(String::from_utf8_lossy(bytes).into_owned()),
    };
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| bad())?;
    if val.is_finite() { Ok(val) } else { Err(bad()) }
}

// --- Ingest ---

/// Read every number from `src`.
///
/// * blank lines and lines starting with `#` are skipped
/// * a first line whose first token is not numeric is treated as a header
/// * an input without numbers returns an empty vector
///
/// # Errors
///
/// [`ParseError`] with the 1-based line of the first token that is not a
/// finite number, or of the read that failed.
pub fn read_values<R: Read>(src: R) -> Result<Vec<f64>, ParseError> {
    let mut rdr = BufReader::new(src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut values = Vec::<f64>::new();
    let mut saw_first = false;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        normalize_unicode_minus(&mut buf);
        let mut tokens = buf
            .split(|&b| is_separator(b))
            .filter(|t| !t.is_empty())
            .peekable();

        let Some(first) = tokens.peek() else {
            continue;
        };
        if first.starts_with(b"#") {
            continue;
        }
        if !saw_first {
            saw_first = true;
            if lexical_core::parse::<f64>(first).is_err() {
                continue;
            }
        }

        for tok in tokens {
            values.push(parse_f64(tok, line_no)?);
        }
    }
    Ok(values)
}

/// `-` reads stdin, anything else is a file path.
///
/// # Errors
///
/// As [`read_values`]; a file that cannot be opened is reported on line 0.
pub fn read_values_from_path(path: &str) -> Result<Vec<f64>, ParseError> {
    if path == "-" {
        read_values(std::io::stdin().lock())
    } else {
        use std::fs::File;
        read_values(File::open(path).map_err(|e| ParseError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}

/// [`read_values`], but an input without any number is an error.
///
/// # Errors
///
/// [`ChartError::EmptyData`] when nothing numeric was read, otherwise
/// [`ChartError::Parse`] as in [`read_values`].
pub fn read_samples<R: Read>(src: R) -> Result<Vec<f64>, ChartError> {
    non_empty(read_values(src)?)
}

/// [`read_values_from_path`], but an input without any number is an error.
///
/// # Errors
///
/// [`ChartError::EmptyData`] when nothing numeric was read, otherwise
/// [`ChartError::Parse`] as in [`read_values_from_path`].
pub fn read_samples_from_path(path: &str) -> Result<Vec<f64>, ChartError> {
    non_empty(read_values_from_path(path)?)
}

#[inline]
fn non_empty(values: Vec<f64>) -> Result<Vec<f64>, ChartError> {
    if values.is_empty() {
        Err(ChartError::EmptyData)
    } else {
        Ok(values)
    }
}

// --- Generators ---

/// `n` samples of a sine wave completing `cycles` periods.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sine_samples(n: usize, cycles: f64) -> Vec<f64> {
    (0..n)
        .map(|i| (std::f64::consts::TAU * cycles * i as f64 / n as f64).sin())
        .collect()
}

/// `0, 1, …, n-1` scaled into `[-1, 1]`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ramp(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![1.0],
        _ => (0..n)
            .map(|i| 2.0 * i as f64 / (n - 1) as f64 - 1.0)
            .collect(),
    }
}
