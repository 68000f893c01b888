use crate::error::Result;
use std::io::Write;

/// CSV results table: one row per matrix size, one column per strategy.
///
/// The layout is a `Matrix Size` column followed by one column per
/// strategy, timings printed as seconds with six decimal places. Rows are
/// flushed as they are written so an interrupted sweep still leaves
/// usable output for downstream plotting.
pub struct CsvReport<W: Write> {
    out: W,
}

impl<W: Write> CsvReport<W> {
    /// Write the header row and return the report writer.
    pub fn new(mut out: W, labels: &[&str]) -> Result<Self> {
        write!(out, "Matrix Size")?;
        for label in labels {
            write!(out, ",{}", label)?;
        }
        writeln!(out)?;
        out.flush()?;
        Ok(CsvReport { out })
    }

    /// Append one result row: the matrix size followed by the average
    /// seconds for each strategy, in header order.
    pub fn write_row(&mut self, size: usize, times: &[f64]) -> Result<()> {
        write!(self.out, "{}", size)?;
        for time in times {
            write!(self.out, ",{:.6}", time)?;
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
