use crate::domain::calculation::Operation;
use crate::error::Result;
use std::io::Write;

/// Writes evaluated calculations as `operation,result` CSV rows.
pub struct CalculationWriter<W: Write> {
    writer: csv::Writer<W>,
    wrote_header: bool,
}

impl<W: Write> CalculationWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
            wrote_header: false,
        }
    }

    pub fn write_result(&mut self, operation: Operation, result: f64) -> Result<()> {
        if !self.wrote_header {
            self.writer.write_record(["operation", "result"])?;
            self.wrote_header = true;
        }
        self.writer
            .write_record([operation.as_str(), result.to_string().as_str()])?;
        Ok(())
    }

    /// Flushes buffered rows, emitting the header even when no row was written.
    pub fn finish(mut self) -> Result<()> {
        if !self.wrote_header {
            self.writer.write_record(["operation", "result"])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
