use crate::domain::calculation::CalculationRequest;
use crate::error::{CoreError, Result};
use std::io::Read;

/// Reads calculation requests from a CSV source.
///
/// Each record is `OPERATION,v1,v2,...` with no header row. Records may have any
/// width, fields are trimmed, and lines starting with `#` are skipped.
pub struct CalculationReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CalculationReader<R> {
    /// Creates a new `CalculationReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .flexible(true)
            .comment(Some(b'#'))
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and parses requests.
    ///
    /// A malformed record yields an error item; reading continues with the next one.
    pub fn requests(self) -> impl Iterator<Item = Result<CalculationRequest>> {
        self.reader
            .into_records()
            .map(|record| {
                record
                    .map_err(CoreError::from)
                    .and_then(|record| parse_record(&record))
            })
    }
}

fn parse_record(record: &csv::StringRecord) -> Result<CalculationRequest> {
    let mut fields = record.iter();
    let tag = fields
        .next()
        .ok_or_else(|| CoreError::validation("operation", "Missing operation tag"))?;

    let values = fields
        .map(|field| {
            field.parse::<f64>().map_err(|_| {
                CoreError::validation("values", format!("Not a number: {field:?}"))
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    CalculationRequest::parse(tag, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calculation::Operation;

    #[test]
    fn test_reader_valid_stream() {
        let data = "add, 1, 2, 3\n# a comment\ndivide,10,2\nMULTIPLY, 4";
        let reader = CalculationReader::new(data.as_bytes());
        let results: Vec<Result<CalculationRequest>> = reader.requests().collect();

        assert_eq!(results.len(), 3);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.operation, Operation::Add);
        assert_eq!(first.values, vec![1.0, 2.0, 3.0]);
        assert_eq!(results[2].as_ref().unwrap().values, vec![4.0]);
    }

    #[test]
    fn test_reader_malformed_records() {
        let data = "modulo, 1, 2\nadd, 1, x\nadd, 5";
        let reader = CalculationReader::new(data.as_bytes());
        let results: Vec<Result<CalculationRequest>> = reader.requests().collect();

        assert!(matches!(results[0], Err(CoreError::UnsupportedOperation(_))));
        assert!(matches!(
            results[1],
            Err(CoreError::ValidationError { field: "values", .. })
        ));
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_reader_keeps_operand_less_requests() {
        let reader = CalculationReader::new("add".as_bytes());
        let results: Vec<Result<CalculationRequest>> = reader.requests().collect();

        assert!(results[0].as_ref().unwrap().values.is_empty());
    }
}
