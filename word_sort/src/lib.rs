//! Prints the distinct words of a string in byte order.
//!
//! The input is cut into runs of ASCII letters by [`tokenizer::words`], each
//! run goes into a [`WordSet`], and [`render`] writes the set one word per
//! line.

#![deny(rust_2018_idioms)]
#![forbid(unsafe_code)]

use std::io::Write;

use tracing::debug;
use word_tree::WordSet;

pub mod error;
pub mod tokenizer;

pub use error::{Result, SortError};

/// Collects the distinct words of `input`, in arrival order.
pub fn collect_words(input: &[u8]) -> WordSet {
    let mut set = WordSet::new();
    let mut seen = 0usize;
    for word in tokenizer::words(input) {
        set.insert(word);
        seen += 1;
    }
    debug!(seen, distinct = set.len(), "collected words");
    set
}

/// Writes every word of `set` on its own line.
pub fn render<W: Write>(set: &WordSet, mut out: W) -> Result<()> {
    for word in set {
        writeln!(out, "{word}")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    fn sort(input: &str) -> String {
        let mut out = Vec::new();
        render(&collect_words(input.as_bytes()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn one_word_per_line() {
        assert_eq!(sort("banana apple,cherry;apple"), "apple\nbanana\ncherry\n");
        assert_eq!(sort("aand, aAnd, and AND"), "AND\naAnd\naand\nand\n");
    }

    #[test]
    fn no_words_no_output() {
        assert_eq!(sort(""), "");
        assert_eq!(sort("42 + 7"), "");
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_surface() {
        let err = render(&collect_words(b"x"), Broken).unwrap_err();
        assert!(matches!(err, SortError::Write(_)), "{err:?}");
    }
}
