//! Literal classifier using nom.
//!
//! Turns the raw text of a filter value into a typed [`Value`]:
//!
//! ```text
//! 'bob'  "bob"     -> STRING
//! true   false     -> BOOLEAN
//! 30  -1.5  2e3    -> NUMBER
//! anything else    -> STRING (bare)
//! ```

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{char, digit1, one_of},
    combinator::{all_consuming, map_res, opt, recognize, value},
    sequence::{delimited, pair, tuple},
};

use crate::error::{QueryError, QueryResult};
use crate::value::Value;

/// Classify a raw literal.
///
/// Input is trimmed first. Only a quote that is opened and never closed is
/// an error.
pub fn classify(input: &str) -> QueryResult<Value> {
    let input = input.trim();

    if input.starts_with('\'') || input.starts_with('"') {
        return match all_consuming(parse_quoted_string)(input) {
            Ok((_, s)) => Ok(Value::String(s.to_string())),
            Err(_) => Err(QueryError::InvalidLiteral(format!(
                "unterminated string: {}",
                input
            ))),
        };
    }

    match all_consuming(alt((parse_bool, parse_number)))(input) {
        Ok((_, v)) => Ok(v),
        Err(_) => Ok(Value::String(input.to_string())),
    }
}

/// Parse a quoted string, single or double quotes.
fn parse_quoted_string(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('\''), take_while(|c| c != '\''), char('\'')),
        delimited(char('"'), take_while(|c| c != '"'), char('"')),
    ))(input)
}

fn parse_bool(input: &str) -> IResult<&str, Value> {
    alt((
        value(Value::Bool(true), tag("true")),
        value(Value::Bool(false), tag("false")),
    ))(input)
}

/// Parse a number (integer, fraction, optional exponent).
fn parse_number(input: &str) -> IResult<&str, Value> {
    map_res(
        recognize(tuple((
            opt(one_of("+-")),
            digit1,
            opt(pair(char('.'), digit1)),
            opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
        ))),
        |s: &str| s.parse::<f64>().map(Value::Number),
    )(input)
}
