// Calculator module
// Operand extraction and the four-operation dispatch table

use std::collections::HashMap;

use serde_json::Value;

use crate::handler::error::HandlerError;

/// Operation selector carried in the request parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Parse the wire name of an operation. Anything unrecognized,
    /// including a missing selector, is a client error.
    pub fn parse(name: Option<&str>) -> Result<Self, HandlerError> {
        match name {
            Some("add") => Ok(Self::Add),
            Some("subtract") => Ok(Self::Subtract),
            Some("multiply") => Ok(Self::Multiply),
            Some("divide") => Ok(Self::Divide),
            _ => Err(HandlerError::InvalidOperation),
        }
    }
}

/// Validated calculator input: two operands and an operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorParams {
    pub a: f64,
    pub b: f64,
    pub operation: Operation,
}

impl CalculatorParams {
    /// Extract parameters from a JSON-encoded request body.
    ///
    /// Malformed JSON and non-object bodies are faults (the outer boundary
    /// turns them into a 500); a well-formed object with bad fields is a
    /// client error.
    pub fn from_body(body: &str) -> Result<Self, HandlerError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| HandlerError::Fault(e.to_string()))?;
        let params = value
            .as_object()
            .ok_or_else(|| HandlerError::Fault("request body is not a JSON object".to_string()))?;

        Ok(Self {
            a: operand_from_value(params.get("a"))?,
            b: operand_from_value(params.get("b"))?,
            operation: Operation::parse(params.get("operation").and_then(Value::as_str))?,
        })
    }

    /// Extract parameters from query-string parameters (body absent)
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self, HandlerError> {
        Ok(Self {
            a: operand_from_str(params.get("a").map(String::as_str))?,
            b: operand_from_str(params.get("b").map(String::as_str))?,
            operation: Operation::parse(params.get("operation").map(String::as_str))?,
        })
    }

    /// Run the selected operation.
    ///
    /// `divide` rejects a zero divisor before touching the division, so the
    /// handler never emits an IEEE infinity to the client.
    pub fn apply(&self) -> Result<f64, HandlerError> {
        match self.operation {
            Operation::Add => Ok(self.a + self.b),
            Operation::Subtract => Ok(self.a - self.b),
            Operation::Multiply => Ok(self.a * self.b),
            Operation::Divide => {
                if self.b == 0.0 {
                    Err(HandlerError::DivisionByZero)
                } else {
                    Ok(self.a / self.b)
                }
            }
        }
    }
}

/// Numeric operand from a JSON value: both `"10"` and `10` are accepted
fn operand_from_value(value: Option<&Value>) -> Result<f64, HandlerError> {
    match value {
        Some(Value::Number(n)) => n.as_f64().ok_or(HandlerError::InvalidNumber),
        Some(Value::String(s)) => operand_from_str(Some(s)),
        _ => Err(HandlerError::InvalidNumber),
    }
}

/// Numeric operand from a string, tolerating surrounding whitespace
fn operand_from_str(value: Option<&str>) -> Result<f64, HandlerError> {
    value
        .and_then(|s| s.trim().parse::<f64>().ok())
        .ok_or(HandlerError::InvalidNumber)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(a: f64, b: f64, operation: Operation) -> CalculatorParams {
        CalculatorParams { a, b, operation }
    }

    #[test]
    fn test_operation_parse() {
        assert_eq!(Operation::parse(Some("add")).unwrap(), Operation::Add);
        assert_eq!(
            Operation::parse(Some("subtract")).unwrap(),
            Operation::Subtract
        );
        assert_eq!(
            Operation::parse(Some("multiply")).unwrap(),
            Operation::Multiply
        );
        assert_eq!(Operation::parse(Some("divide")).unwrap(), Operation::Divide);
        assert_eq!(
            Operation::parse(Some("modulo")),
            Err(HandlerError::InvalidOperation)
        );
        assert_eq!(
            Operation::parse(Some("ADD")),
            Err(HandlerError::InvalidOperation)
        );
        assert_eq!(Operation::parse(None), Err(HandlerError::InvalidOperation));
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(params(10.0, 2.0, Operation::Add).apply().unwrap(), 12.0);
        assert_eq!(params(10.0, 2.0, Operation::Subtract).apply().unwrap(), 8.0);
        assert_eq!(params(10.0, 2.0, Operation::Multiply).apply().unwrap(), 20.0);
        assert_eq!(params(10.0, 2.0, Operation::Divide).apply().unwrap(), 5.0);
        assert_eq!(params(1.5, 0.25, Operation::Add).apply().unwrap(), 1.75);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            params(5.0, 0.0, Operation::Divide).apply(),
            Err(HandlerError::DivisionByZero)
        );
        assert_eq!(
            params(0.0, 0.0, Operation::Divide).apply(),
            Err(HandlerError::DivisionByZero)
        );
        // Negative zero compares equal to zero
        assert_eq!(
            params(5.0, -0.0, Operation::Divide).apply(),
            Err(HandlerError::DivisionByZero)
        );
    }

    #[test]
    fn test_from_body_string_operands() {
        let p = CalculatorParams::from_body(r#"{"a":"10","b":"2","operation":"divide"}"#)
            .expect("valid params");
        assert_eq!(p.a, 10.0);
        assert_eq!(p.b, 2.0);
        assert_eq!(p.operation, Operation::Divide);
    }

    #[test]
    fn test_from_body_numeric_operands() {
        let p = CalculatorParams::from_body(r#"{"a":10,"b":2.5,"operation":"multiply"}"#)
            .expect("valid params");
        assert_eq!(p.a, 10.0);
        assert_eq!(p.b, 2.5);
    }

    #[test]
    fn test_from_body_bad_operand() {
        assert_eq!(
            CalculatorParams::from_body(r#"{"a":"ten","b":"2","operation":"add"}"#),
            Err(HandlerError::InvalidNumber)
        );
        assert_eq!(
            CalculatorParams::from_body(r#"{"b":"2","operation":"add"}"#),
            Err(HandlerError::InvalidNumber)
        );
        assert_eq!(
            CalculatorParams::from_body(r#"{"a":null,"b":"2","operation":"add"}"#),
            Err(HandlerError::InvalidNumber)
        );
    }

    #[test]
    fn test_from_body_malformed_json_is_fault() {
        assert!(matches!(
            CalculatorParams::from_body("{not json"),
            Err(HandlerError::Fault(_))
        ));
        assert!(matches!(
            CalculatorParams::from_body("[1,2,3]"),
            Err(HandlerError::Fault(_))
        ));
    }

    #[test]
    fn test_from_query() {
        let mut query = HashMap::new();
        query.insert("a".to_string(), " 7 ".to_string());
        query.insert("b".to_string(), "3".to_string());
        query.insert("operation".to_string(), "subtract".to_string());
        let p = CalculatorParams::from_query(&query).expect("valid params");
        assert_eq!(p.a, 7.0);
        assert_eq!(p.b, 3.0);
        assert_eq!(p.operation, Operation::Subtract);
    }

    #[test]
    fn test_from_query_missing_operation() {
        let mut query = HashMap::new();
        query.insert("a".to_string(), "7".to_string());
        query.insert("b".to_string(), "3".to_string());
        assert_eq!(
            CalculatorParams::from_query(&query),
            Err(HandlerError::InvalidOperation)
        );
    }
}
