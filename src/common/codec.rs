use crate::error::{Error, Result};

use aws_sdk_dynamodb::types;
use serde::Serialize;
use serde_json::{Number, Value};

/// Encode a native value as an attribute value.
///
/// Numbers become `N`, strings become `S`, homogeneous arrays of numbers or strings
/// become `NS` or `SS` with their order preserved. Numbers are always carried as text.
///
/// ```rust
/// use aws_sdk_dynamodb::types::AttributeValue;
/// use dynamodb_params::common::codec;
///
/// let value = codec::to_attribute_value(vec![1, 2]).unwrap();
/// assert_eq!(value, AttributeValue::Ns(vec!["1".to_string(), "2".to_string()]));
/// ```
pub fn to_attribute_value<T: Serialize>(value: T) -> Result<types::AttributeValue> {
    let value = serde_json::to_value(value)?;
    encode(value)
}

pub(crate) fn encode(value: Value) -> Result<types::AttributeValue> {
    match value {
        Value::Array(values) => encode_set(values),
        Value::Number(number) => Ok(types::AttributeValue::N(number.to_string())),
        Value::String(string) => Ok(types::AttributeValue::S(string)),
        Value::Object(_) => Err(Error::UnsupportedType("object")),
        Value::Bool(true) => Err(Error::UnsupportedType("boolean")),
        Value::Bool(false) | Value::Null => Err(Error::MissingArgument),
    }
}

fn encode_set(values: Vec<Value>) -> Result<types::AttributeValue> {
    // the first element decides the set type, every other element must agree
    let is_number_set = match values.first() {
        None => return Err(Error::EmptySet),
        Some(Value::Number(_)) => true,
        Some(Value::String(_)) => false,
        Some(_) => return Err(Error::TypeMismatch),
    };
    if is_number_set {
        let numbers = values
            .into_iter()
            .map(|value| match value {
                Value::Number(number) => Ok(number.to_string()),
                _ => Err(Error::TypeMismatch),
            })
            .collect::<Result<_>>()?;
        Ok(types::AttributeValue::Ns(numbers))
    } else {
        let strings = values
            .into_iter()
            .map(|value| match value {
                Value::String(string) => Ok(string),
                _ => Err(Error::TypeMismatch),
            })
            .collect::<Result<_>>()?;
        Ok(types::AttributeValue::Ss(strings))
    }
}

/// Decode an attribute value into a native value.
///
/// `S` and `SS` come back unchanged, `N` and `NS` are parsed as `f64`; whole values
/// within the exactly representable integer range come back as integers.
/// Lists are decoded element by element.
///
/// ```rust
/// use aws_sdk_dynamodb::types::AttributeValue;
/// use dynamodb_params::common::codec;
/// use serde_json::json;
///
/// let value = codec::from_attribute_value(AttributeValue::N("5".to_string())).unwrap();
/// assert_eq!(value, json!(5));
/// let value = codec::from_attribute_value(AttributeValue::N("2.5".to_string())).unwrap();
/// assert_eq!(value, json!(2.5));
/// ```
pub fn from_attribute_value(value: types::AttributeValue) -> Result<Value> {
    match value {
        types::AttributeValue::S(string) => Ok(Value::String(string)),
        types::AttributeValue::Ss(strings) => {
            Ok(Value::Array(strings.into_iter().map(Value::String).collect()))
        }
        types::AttributeValue::N(number) => parse_number(&number),
        types::AttributeValue::Ns(numbers) => {
            let numbers = numbers
                .iter()
                .map(|number| parse_number(number))
                .collect::<Result<_>>()?;
            Ok(Value::Array(numbers))
        }
        types::AttributeValue::L(values) => {
            let values = values
                .into_iter()
                .map(from_attribute_value)
                .collect::<Result<_>>()?;
            Ok(Value::Array(values))
        }
        other => Err(Error::UnsupportedTag(tag(&other))),
    }
}

/// Largest magnitude below which every whole `f64` is an exact integer (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

fn parse_number(text: &str) -> Result<Value> {
    let number = text
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| Error::InvalidNumber(text.to_string()))?;
    if number.fract() == 0.0 && number.abs() <= MAX_SAFE_INTEGER {
        return Ok(Value::from(number as i64));
    }
    Number::from_f64(number)
        .map(Value::Number)
        .ok_or_else(|| Error::InvalidNumber(text.to_string()))
}

fn tag(value: &types::AttributeValue) -> &'static str {
    match value {
        types::AttributeValue::B(_) => "B",
        types::AttributeValue::Bool(_) => "BOOL",
        types::AttributeValue::Bs(_) => "BS",
        types::AttributeValue::L(_) => "L",
        types::AttributeValue::M(_) => "M",
        types::AttributeValue::N(_) => "N",
        types::AttributeValue::Ns(_) => "NS",
        types::AttributeValue::Null(_) => "NULL",
        types::AttributeValue::S(_) => "S",
        types::AttributeValue::Ss(_) => "SS",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::integer(
        json!(5),
        types::AttributeValue::N(
            "5".to_string()
        )
    )]
    #[case::negative_float(
        json!(-1.5),
        types::AttributeValue::N(
            "-1.5".to_string()
        )
    )]
    #[case::string(
        json!("bob"),
        types::AttributeValue::S(
            "bob".to_string()
        )
    )]
    #[case::empty_string(
        json!(""),
        types::AttributeValue::S(
            "".to_string()
        )
    )]
    #[case::number_set(
        json!([3, 1, 2]),
        types::AttributeValue::Ns(
            vec![
                "3".to_string(),
                "1".to_string(),
                "2".to_string(),
            ]
        )
    )]
    #[case::string_set(
        json!(["b", "a"]),
        types::AttributeValue::Ss(
            vec![
                "b".to_string(),
                "a".to_string(),
            ]
        )
    )]
    fn test_to_attribute_value(#[case] value: Value, #[case] expected: types::AttributeValue) {
        let actual = to_attribute_value(value).unwrap();
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case::mixed_array(json!([1, "a"]))]
    #[case::string_then_number(json!(["a", 1]))]
    #[case::array_of_booleans(json!([true, false]))]
    #[case::array_of_objects(json!([{"a": 1}]))]
    fn test_to_attribute_value_type_mismatch(#[case] value: Value) {
        let actual = to_attribute_value(value);
        assert!(matches!(actual, Err(Error::TypeMismatch)));
    }

    #[rstest]
    #[case::object(json!({"nested": 1}))]
    #[case::true_boolean(json!(true))]
    fn test_to_attribute_value_unsupported_type(#[case] value: Value) {
        let actual = to_attribute_value(value);
        assert!(matches!(actual, Err(Error::UnsupportedType(_))));
    }

    #[rstest]
    #[case::null(Value::Null)]
    #[case::false_boolean(json!(false))]
    fn test_to_attribute_value_missing_argument(#[case] value: Value) {
        let actual = to_attribute_value(value);
        assert!(matches!(actual, Err(Error::MissingArgument)));
    }

    #[test]
    fn test_to_attribute_value_none() {
        let actual = to_attribute_value(None::<i32>);
        assert!(matches!(actual, Err(Error::MissingArgument)));
    }

    #[test]
    fn test_to_attribute_value_zero_is_a_number() {
        let actual = to_attribute_value(0).unwrap();
        assert_eq!(actual, types::AttributeValue::N("0".to_string()));
    }

    #[test]
    fn test_to_attribute_value_empty_array() {
        let actual = to_attribute_value(Vec::<String>::new());
        assert!(matches!(actual, Err(Error::EmptySet)));
    }

    #[rstest]
    #[case::string(
        types::AttributeValue::S(
            "abc".to_string()
        ),
        json!("abc")
    )]
    #[case::string_set(
        types::AttributeValue::Ss(
            vec![
                "x".to_string(),
                "y".to_string(),
            ]
        ),
        json!(["x", "y"])
    )]
    #[case::number(
        types::AttributeValue::N(
            "42".to_string()
        ),
        json!(42)
    )]
    #[case::fraction(
        types::AttributeValue::N(
            "0.5".to_string()
        ),
        json!(0.5)
    )]
    #[case::exponent(
        types::AttributeValue::N(
            "1e3".to_string()
        ),
        json!(1000)
    )]
    #[case::beyond_exact_integers(
        types::AttributeValue::N(
            "1e20".to_string()
        ),
        json!(1e20)
    )]
    #[case::number_set(
        types::AttributeValue::Ns(
            vec![
                "2.5".to_string(),
                "1".to_string(),
            ]
        ),
        json!([2.5, 1])
    )]
    #[case::list(
        types::AttributeValue::L(
            vec![
                types::AttributeValue::S(
                    "a".to_string()
                ),
                types::AttributeValue::Ns(
                    vec![
                        "7".to_string(),
                    ]
                ),
            ]
        ),
        json!(["a", [7]])
    )]
    fn test_from_attribute_value(#[case] value: types::AttributeValue, #[case] expected: Value) {
        let actual = from_attribute_value(value).unwrap();
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case::boolean(types::AttributeValue::Bool(true), "BOOL")]
    #[case::null(types::AttributeValue::Null(true), "NULL")]
    #[case::map(types::AttributeValue::M(Default::default()), "M")]
    fn test_from_attribute_value_unsupported_tag(
        #[case] value: types::AttributeValue,
        #[case] expected: &str,
    ) {
        let actual = from_attribute_value(value);
        assert!(matches!(actual, Err(Error::UnsupportedTag(found)) if found == expected));
    }

    #[rstest]
    #[case::not_a_number("abc")]
    #[case::infinite("inf")]
    fn test_from_attribute_value_invalid_number(#[case] text: &str) {
        let actual = from_attribute_value(types::AttributeValue::N(text.to_string()));
        assert!(matches!(actual, Err(Error::InvalidNumber(_))));
    }

    #[rstest]
    #[case::integer(json!(17), json!(17))]
    #[case::negative_integer(json!(-3), json!(-3))]
    #[case::fraction(json!(0.1), json!(0.1))]
    #[case::string(json!("hello"), json!("hello"))]
    #[case::number_set(json!([1, 2.5]), json!([1, 2.5]))]
    #[case::string_set(json!(["b", "a"]), json!(["b", "a"]))]
    fn test_round_trip(#[case] value: Value, #[case] expected: Value) {
        let encoded = to_attribute_value(value).unwrap();
        let actual = from_attribute_value(encoded).unwrap();
        assert_eq!(actual, expected);
    }
}
