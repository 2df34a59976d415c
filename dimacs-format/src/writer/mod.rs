//! Implements the writing of DIMACS CNF files.
//!
//! See [`DimacsWriter`] for more information on how to write formulas.

use std::io::BufWriter;
use std::io::Write;
use std::num::NonZeroI32;

/// Abstraction for writing DIMACS CNF formulas.
///
/// # Example
/// ```
/// # use std::num::NonZeroI32;
/// # use dimacs_format::writer::DimacsWriter;
/// let mut cnf: Vec<u8> = Vec::new();
/// let mut writer = DimacsWriter::new(&mut cnf);
///
/// let lit = |num: i32| NonZeroI32::new(num).unwrap();
/// writer.comment("two clauses").unwrap();
/// writer.header(3, 2).unwrap();
/// writer.clause([lit(1), lit(-3)]).unwrap();
/// writer.clause([lit(2)]).unwrap();
/// writer.flush().unwrap();
/// drop(writer);
///
/// let expected = "
/// c two clauses
/// p cnf 3 2
/// 1 -3 0
/// 2 0
/// ";
/// assert_eq!(std::str::from_utf8(&cnf).unwrap(), expected.trim_start());
/// ```
#[derive(Debug)]
pub struct DimacsWriter<W: Write> {
    writer: BufWriter<W>,
    /// The number of clauses announced in the header, if the header has been written.
    announced_clauses: Option<usize>,
    written_clauses: usize,
}

impl<W: Write> DimacsWriter<W> {
    /// Create a new writer which writes the formula to an underlying sink implementing [`Write`].
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            announced_clauses: None,
            written_clauses: 0,
        }
    }

    /// Write a comment line. Comments may contain anything but new-lines; each line of a
    /// multi-line message becomes its own comment.
    pub fn comment(&mut self, message: &str) -> std::io::Result<()> {
        for line in message.lines() {
            writeln!(self.writer, "c {line}")?;
        }

        Ok(())
    }

    /// Write the problem line.
    pub fn header(&mut self, num_variables: usize, num_clauses: usize) -> std::io::Result<()> {
        self.announced_clauses = Some(num_clauses);
        writeln!(self.writer, "p cnf {num_variables} {num_clauses}")
    }

    /// Write a single clause, terminated by `0`. An empty clause is written as a lone `0`.
    pub fn clause(&mut self, literals: impl IntoIterator<Item = NonZeroI32>) -> std::io::Result<()> {
        for literal in literals {
            write!(self.writer, "{literal} ")?;
        }

        writeln!(self.writer, "0")?;
        self.written_clauses += 1;

        Ok(())
    }

    /// Flush the buffered output to the underlying sink.
    ///
    /// Fails with [`std::io::ErrorKind::InvalidData`] if the number of written clauses does not
    /// match the number announced in the header.
    pub fn flush(&mut self) -> std::io::Result<()> {
        if let Some(announced) = self.announced_clauses {
            if announced != self.written_clauses {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!(
                        "header announced {announced} clauses but {} were written",
                        self.written_clauses
                    ),
                ));
            }
        }

        self.writer.flush()
    }
}
