//! Arithmetic expression evaluation
//!
//! Evaluates one side of an equation in three passes: tokenize the string
//! into number and operator tokens, convert infix to postfix with the
//! shunting-yard algorithm, then reduce the postfix form on a value stack.

use std::fmt;

/// Error type for expression evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// The expression does not reduce to a single value
    Malformed,
    /// A division step had a zero divisor
    DivisionByZero,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "expression is malformed"),
            Self::DivisionByZero => write!(f, "expression divides by zero"),
        }
    }
}

impl std::error::Error for EvalError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Number(i64),
    Operator(char),
}

/// Operator precedence: `+ -` bind loosest, `* /` tightest.
///
/// Anything else (including parentheses) gets 0 so it is never popped by
/// the precedence rule.
const fn precedence(op: char) -> u8 {
    match op {
        '+' | '-' => 1,
        '*' | '/' => 2,
        _ => 0,
    }
}

/// Scan left to right: runs of digits become one multi-digit number token,
/// every other character becomes its own operator token.
fn tokenize(side: &str) -> Result<Vec<Token>, EvalError> {
    let chars: Vec<char> = side.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i].is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let number: String = chars[start..i].iter().collect();
            let value = number.parse().map_err(|_| EvalError::Malformed)?;
            tokens.push(Token::Number(value));
        } else {
            tokens.push(Token::Operator(chars[i]));
            i += 1;
        }
    }

    Ok(tokens)
}

/// Shunting-yard infix-to-postfix conversion, left-associative.
///
/// An incoming operator first pops every operator on the stack whose
/// precedence is greater than or equal to its own, so equal-precedence
/// chains evaluate left to right.
fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, EvalError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<char> = Vec::new();

    for &token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::Operator('(') => stack.push('('),
            Token::Operator(')') => loop {
                match stack.pop() {
                    Some('(') => break,
                    Some(op) => output.push(Token::Operator(op)),
                    None => return Err(EvalError::Malformed),
                }
            },
            Token::Operator(op) => {
                while let Some(&top) = stack.last() {
                    if precedence(top) >= precedence(op) {
                        output.push(Token::Operator(top));
                        stack.pop();
                    } else {
                        break;
                    }
                }
                stack.push(op);
            }
        }
    }

    while let Some(op) = stack.pop() {
        output.push(Token::Operator(op));
    }

    Ok(output)
}

fn apply(left: i64, right: i64, op: char) -> Result<i64, EvalError> {
    match op {
        '+' => left.checked_add(right).ok_or(EvalError::Malformed),
        '-' => left.checked_sub(right).ok_or(EvalError::Malformed),
        '*' => left.checked_mul(right).ok_or(EvalError::Malformed),
        '/' => {
            if right == 0 {
                Err(EvalError::DivisionByZero)
            } else {
                // Truncating integer division
                left.checked_div(right).ok_or(EvalError::Malformed)
            }
        }
        _ => Err(EvalError::Malformed),
    }
}

/// Evaluate one side of an equation to an integer
///
/// # Errors
///
/// Returns [`EvalError::Malformed`] if the expression does not reduce to
/// exactly one value (empty input, dangling operators, unknown characters),
/// and [`EvalError::DivisionByZero`] if any division has a zero divisor.
///
/// # Examples
/// ```
/// use numberle::core::eval::evaluate;
///
/// assert_eq!(evaluate("7/1").unwrap(), 7);
/// assert_eq!(evaluate("2+5").unwrap(), 7);
/// assert_eq!(evaluate("1+2*3").unwrap(), 7);
/// ```
pub fn evaluate(side: &str) -> Result<i64, EvalError> {
    let tokens = tokenize(side)?;
    if tokens.is_empty() {
        return Err(EvalError::Malformed);
    }

    let postfix = to_postfix(&tokens)?;
    let mut stack: Vec<i64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token {
            Token::Number(value) => stack.push(value),
            Token::Operator(op) => {
                // The operand popped second is the left operand
                let right = stack.pop().ok_or(EvalError::Malformed)?;
                let left = stack.pop().ok_or(EvalError::Malformed)?;
                stack.push(apply(left, right, op)?);
            }
        }
    }

    if stack.len() == 1 {
        Ok(stack[0])
    } else {
        Err(EvalError::Malformed)
    }
}
