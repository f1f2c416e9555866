use crate::domain::calculation::{CalculationRequest, Operation};
use crate::error::{CoreError, Result};
use tracing::debug;

/// Evaluates a calculation request.
///
/// Operand counts are checked before any arithmetic runs. Division folds from
/// the first value and stops at the first zero divisor, whatever follows it.
pub fn evaluate(request: &CalculationRequest) -> Result<f64> {
    request.validate()?;

    let result = match request.operation {
        Operation::Add => add_values(&request.values),
        Operation::Multiply => multiply_values(&request.values),
        Operation::Divide => divide_values(&request.values)?,
    };

    debug!(operation = %request.operation, operands = request.values.len(), result, "evaluated request");
    Ok(result)
}

/// Parses `tag` and evaluates it against `values`.
pub fn evaluate_tagged(tag: &str, values: &[f64]) -> Result<f64> {
    let request = CalculationRequest::parse(tag, values.to_vec())?;
    evaluate(&request)
}

fn add_values(values: &[f64]) -> f64 {
    values.iter().sum()
}

fn multiply_values(values: &[f64]) -> f64 {
    values.iter().fold(1.0, |acc, value| acc * value)
}

fn divide_values(values: &[f64]) -> Result<f64> {
    let Some((first, divisors)) = values.split_first() else {
        return Err(CoreError::validation(
            "values",
            "At least two values required for division",
        ));
    };

    divisors.iter().try_fold(*first, |acc, &divisor| {
        if divisor == 0.0 {
            Err(CoreError::ArithmeticError("Division by zero".to_string()))
        } else {
            Ok(acc / divisor)
        }
    })
}
