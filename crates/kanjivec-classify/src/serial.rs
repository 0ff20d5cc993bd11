//! Training database text serialization
//!
//! The on-disk format is a whitespace-delimited token stream:
//!
//! ```text
//! <classCount> ( <label> <exampleCount> ( <196 integers> )+ )*
//! ```
//!
//! Vector entries appear in the order fixed by the extraction pipeline
//! (49 windows row-major, 4 buckets each). The reader accepts any
//! whitespace between tokens; the writer puts each vector on its own
//! line for legibility.

use std::io::{BufRead, Write};

use kanjivec_core::{FEATURE_DIM, FeatureVector};

use crate::database::TrainingDatabase;
use crate::error::{ClassifyError, ClassifyResult};

/// Whitespace token cursor over a database stream.
struct Tokens<'a> {
    iter: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            iter: text.split_whitespace(),
        }
    }

    /// Next raw token, or `UnexpectedEof` naming what was wanted.
    fn next(&mut self, expected: &'static str) -> ClassifyResult<&'a str> {
        self.iter
            .next()
            .ok_or(ClassifyError::UnexpectedEof { expected })
    }

    /// Next token parsed as a non-negative integer.
    fn next_count(&mut self, expected: &'static str) -> ClassifyResult<usize> {
        let token = self.next(expected)?;
        token.parse().map_err(|_| ClassifyError::InvalidToken {
            expected,
            token: token.to_string(),
        })
    }

    /// Next token parsed as a vector entry.
    fn next_value(&mut self) -> ClassifyResult<u32> {
        let expected = "vector entry";
        let token = self.next(expected)?;
        token.parse().map_err(|_| ClassifyError::InvalidToken {
            expected,
            token: token.to_string(),
        })
    }
}

/// Parse a training database from a token stream.
///
/// # Errors
///
/// - [`ClassifyError::UnexpectedEof`] if the stream runs out of tokens
/// - [`ClassifyError::InvalidToken`] for non-integer counts or entries
/// - [`ClassifyError::EmptyClass`] if a class declares zero exemplars
///
/// A label that appears more than once accumulates exemplars instead of
/// overwriting the earlier ones.
pub fn read_database<R: BufRead>(mut reader: R) -> ClassifyResult<TrainingDatabase> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mut tokens = Tokens::new(&text);

    let mut db = TrainingDatabase::new();

    let class_count = tokens.next_count("class count")?;
    for _ in 0..class_count {
        let label = tokens.next("class label")?;
        let example_count = tokens.next_count("exemplar count")?;
        if example_count == 0 {
            return Err(ClassifyError::EmptyClass {
                label: label.to_string(),
            });
        }

        for _ in 0..example_count {
            let mut values = Vec::with_capacity(FEATURE_DIM);
            for _ in 0..FEATURE_DIM {
                values.push(tokens.next_value()?);
            }
            db.add_example(label, FeatureVector::new(values))?;
        }
    }

    Ok(db)
}

/// Write a training database as a token stream.
///
/// Classes are emitted in ascending label order, so the output is
/// byte-reproducible for a given database.
pub fn write_database<W: Write>(mut writer: W, db: &TrainingDatabase) -> ClassifyResult<()> {
    writeln!(writer, "{}", db.class_count())?;

    for (label, exemplars) in db.iter() {
        writeln!(writer, "{} {}", label, exemplars.len())?;
        for exemplar in exemplars {
            let mut line = String::with_capacity(FEATURE_DIM * 4);
            for (i, value) in exemplar.values().iter().enumerate() {
                if i > 0 {
                    line.push(' ');
                }
                line.push_str(&value.to_string());
            }
            writeln!(writer, "{}", line)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector_text(value: u32) -> String {
        vec![value.to_string(); FEATURE_DIM].join(" ")
    }

    #[test]
    fn test_read_two_classes() {
        let text = format!("2 一 1 {} 二 1 {}", vector_text(0), vector_text(5));
        let db = read_database(text.as_bytes()).unwrap();

        assert_eq!(db.class_count(), 2);
        assert_eq!(db.examples("一").unwrap().len(), 1);
        assert_eq!(db.examples("二").unwrap()[0].values()[0], 5);
    }

    #[test]
    fn test_read_merges_duplicate_label() {
        let text = format!("2 口 1 {} 口 1 {}", vector_text(1), vector_text(2));
        let db = read_database(text.as_bytes()).unwrap();

        assert_eq!(db.class_count(), 1);
        assert_eq!(db.examples("口").unwrap().len(), 2);
    }

    #[test]
    fn test_read_truncated_stream() {
        let text = "1 一 1 4 4 4";
        assert!(matches!(
            read_database(text.as_bytes()),
            Err(ClassifyError::UnexpectedEof {
                expected: "vector entry"
            })
        ));
    }

    #[test]
    fn test_read_non_integer_count() {
        let text = "x";
        assert!(matches!(
            read_database(text.as_bytes()),
            Err(ClassifyError::InvalidToken { token, .. }) if token == "x"
        ));
    }

    #[test]
    fn test_read_negative_entry() {
        let text = format!("1 一 1 -3 {}", vector_text(0));
        assert!(matches!(
            read_database(text.as_bytes()),
            Err(ClassifyError::InvalidToken { token, .. }) if token == "-3"
        ));
    }

    #[test]
    fn test_read_empty_class() {
        let text = "1 一 0";
        assert!(matches!(
            read_database(text.as_bytes()),
            Err(ClassifyError::EmptyClass { label }) if label == "一"
        ));
    }

    #[test]
    fn test_round_trip() {
        let mut db = TrainingDatabase::new();
        db.add_example("山", FeatureVector::new((0..FEATURE_DIM as u32).collect()))
            .unwrap();
        db.add_example("川", FeatureVector::new(vec![9; FEATURE_DIM]))
            .unwrap();

        let mut buffer = Vec::new();
        write_database(&mut buffer, &db).unwrap();
        let restored = read_database(buffer.as_slice()).unwrap();

        assert_eq!(restored.class_count(), 2);
        assert_eq!(
            restored.examples("山").unwrap()[0].values(),
            db.examples("山").unwrap()[0].values()
        );
        assert_eq!(restored.examples("川").unwrap()[0].values()[10], 9);
    }
}
