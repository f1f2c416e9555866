use crate::error::{CoreError, Result};
use std::fmt;
use std::str::FromStr;

/// The closed set of arithmetic rules a request can select.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operation {
    Add,
    Multiply,
    Divide,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "ADD",
            Operation::Multiply => "MULTIPLY",
            Operation::Divide => "DIVIDE",
        }
    }

    /// Smallest number of operands the operation accepts.
    pub fn min_operands(&self) -> usize {
        match self {
            Operation::Add | Operation::Multiply => 1,
            Operation::Divide => 2,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CoreError;

    fn from_str(tag: &str) -> Result<Self> {
        let tag = tag.trim();
        if tag.eq_ignore_ascii_case("add") {
            Ok(Operation::Add)
        } else if tag.eq_ignore_ascii_case("multiply") {
            Ok(Operation::Multiply)
        } else if tag.eq_ignore_ascii_case("divide") {
            Ok(Operation::Divide)
        } else {
            Err(CoreError::UnsupportedOperation(tag.to_string()))
        }
    }
}

/// An operation tag plus the ordered operands it is applied to.
#[derive(Debug, PartialEq, Clone)]
pub struct CalculationRequest {
    pub operation: Operation,
    pub values: Vec<f64>,
}

impl CalculationRequest {
    pub fn new(operation: Operation, values: Vec<f64>) -> Self {
        Self { operation, values }
    }

    /// Builds a request from a textual tag, rejecting unknown operations.
    pub fn parse(tag: &str, values: Vec<f64>) -> Result<Self> {
        Ok(Self::new(tag.parse()?, values))
    }

    /// Checks the operand count for the selected operation.
    ///
    /// Zero divisors are not rejected here; division reports them as an
    /// arithmetic failure at the point they are reached.
    pub fn validate(&self) -> Result<()> {
        let required = self.operation.min_operands();
        if self.values.len() >= required {
            return Ok(());
        }

        let message = match self.operation {
            Operation::Divide => "At least two values required for division".to_string(),
            op => format!("{op} requires at least one value"),
        };
        Err(CoreError::validation("values", message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_parse_is_case_insensitive() {
        assert_eq!("add".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!(" Multiply ".parse::<Operation>().unwrap(), Operation::Multiply);
        assert_eq!("DIVIDE".parse::<Operation>().unwrap(), Operation::Divide);
    }

    #[test]
    fn test_operation_parse_unknown_tag() {
        let result = "subtract".parse::<Operation>();
        assert!(matches!(
            result,
            Err(CoreError::UnsupportedOperation(ref tag)) if tag == "subtract"
        ));
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Multiply.to_string(), "MULTIPLY");
    }

    #[test]
    fn test_validate_operand_counts() {
        assert!(CalculationRequest::new(Operation::Add, vec![1.0]).validate().is_ok());
        assert!(matches!(
            CalculationRequest::new(Operation::Multiply, vec![]).validate(),
            Err(CoreError::ValidationError { field: "values", .. })
        ));
        assert!(matches!(
            CalculationRequest::new(Operation::Divide, vec![5.0]).validate(),
            Err(CoreError::ValidationError { field: "values", .. })
        ));
        assert!(CalculationRequest::new(Operation::Divide, vec![5.0, 0.0])
            .validate()
            .is_ok());
    }
}
