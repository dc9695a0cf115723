//! Restricted arithmetic evaluation for the `calculate` tool.
//!
//! Expressions are tokenized and parsed by recursive descent. Only numbers,
//! `+ - * / % ^` and parentheses are understood, so nothing but arithmetic
//! can ever run.
//!
//! Precedence from loosest to tightest: `+ -`, then `* / %`, then unary
//! minus, then `^` (right-associative). `-2^2` is therefore `-4`.
//! Nesting is capped at [`MAX_NESTING`] levels.

use async_trait::async_trait;
use serde_json::json;
use thiserror::Error;
use toolgate_core::{
    HandlerResult, ParamType, ParameterSchema, ParameterSpec, ToolArgs, ToolDescriptor,
    ToolHandler, ToolId,
};
use tracing::debug;

/// Reasons an expression cannot be evaluated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("expression is empty")]
    Empty,

    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedChar { ch: char, position: usize },

    #[error("invalid number literal '{0}'")]
    InvalidNumber(String),

    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unbalanced parentheses")]
    UnbalancedParens,

    #[error("division by zero")]
    DivisionByZero,

    #[error("result is not a finite number")]
    NonFinite,

    #[error("expression nests deeper than {limit} levels")]
    TooDeep { limit: usize },
}

/// Deepest nesting of parentheses, signs and exponents the parser accepts.
pub const MAX_NESTING: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    LParen,
    RParen,
}

impl Token {
    fn symbol(&self) -> String {
        match self {
            Token::Number(n) => n.to_string(),
            Token::Plus => "+".into(),
            Token::Minus => "-".into(),
            Token::Star => "*".into(),
            Token::Slash => "/".into(),
            Token::Percent => "%".into(),
            Token::Caret => "^".into(),
            Token::LParen => "(".into(),
            Token::RParen => ")".into(),
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(position, ch)) = chars.peek() {
        let token = match ch {
            c if c.is_whitespace() => {
                chars.next();
                continue;
            }
            '0'..='9' | '.' => {
                let mut literal = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_ascii_digit() || c == '.' {
                        literal.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| EvalError::InvalidNumber(literal.clone()))?;
                tokens.push(Token::Number(value));
                continue;
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '%' => Token::Percent,
            '^' => Token::Caret,
            '(' => Token::LParen,
            ')' => Token::RParen,
            other => {
                return Err(EvalError::UnexpectedChar {
                    ch: other,
                    position,
                });
            }
        };
        tokens.push(token);
        chars.next();
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    nesting: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        self.pos += 1;
        token
    }

    fn expression(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.advance();
            let rhs = self.term()?;
            value = if op == Token::Plus {
                value + rhs
            } else {
                value - rhs
            };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.unary()?;
        while let Some(op @ (Token::Star | Token::Slash | Token::Percent)) = self.peek() {
            self.advance();
            let rhs = self.unary()?;
            value = match op {
                Token::Star => value * rhs,
                _ if rhs == 0.0 => return Err(EvalError::DivisionByZero),
                Token::Slash => value / rhs,
                _ => value % rhs,
            };
        }
        Ok(value)
    }

    // Every recursive path (parentheses, signs, exponents) re-enters here,
    // so this counter bounds the stack.
    fn unary(&mut self) -> Result<f64, EvalError> {
        if self.nesting >= MAX_NESTING {
            return Err(EvalError::TooDeep { limit: MAX_NESTING });
        }
        self.nesting += 1;
        let value = self.signed();
        self.nesting -= 1;
        value
    }

    fn signed(&mut self) -> Result<f64, EvalError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.advance();
                Ok(-self.unary()?)
            }
            Some(Token::Plus) => {
                self.advance();
                self.unary()
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<f64, EvalError> {
        let base = self.atom()?;
        if self.peek() == Some(Token::Caret) {
            self.advance();
            // Right-associative: the exponent may itself contain `^`.
            let exponent = self.unary()?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<f64, EvalError> {
        match self.advance() {
            Some(Token::Number(n)) => Ok(n),
            Some(Token::LParen) => {
                self.depth += 1;
                let value = self.expression()?;
                match self.advance() {
                    Some(Token::RParen) => {
                        self.depth -= 1;
                        Ok(value)
                    }
                    None => Err(EvalError::UnbalancedParens),
                    Some(other) => Err(EvalError::UnexpectedToken(other.symbol())),
                }
            }
            Some(Token::RParen) => Err(EvalError::UnbalancedParens),
            Some(other) => Err(EvalError::UnexpectedToken(other.symbol())),
            None if self.depth > 0 => Err(EvalError::UnbalancedParens),
            None => Err(EvalError::UnexpectedEnd),
        }
    }
}

/// Evaluate an arithmetic expression.
///
/// ```rust
/// use toolgate_tools::standard::math::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("2 ^ 3 ^ 2").unwrap(), 512.0);
/// assert!(evaluate("process.exit()").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(expression)?;
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
        nesting: 0,
    };
    let value = parser.expression()?;

    if let Some(token) = parser.peek() {
        return Err(match token {
            Token::RParen => EvalError::UnbalancedParens,
            other => EvalError::UnexpectedToken(other.symbol()),
        });
    }

    if !value.is_finite() {
        return Err(EvalError::NonFinite);
    }
    Ok(value)
}

/// `calculate`: evaluates a math expression.
///
/// A bad expression is reported inside the result payload rather than as a
/// handler failure, so callers always get an object back.
#[derive(Debug, Default, Clone, Copy)]
pub struct CalculateTool;

impl CalculateTool {
    pub const NAME: &'static str = "calculate";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(ToolId::new_unchecked(Self::NAME), Self::schema(), Self)
            .with_description("Perform mathematical calculations")
    }

    pub fn schema() -> ParameterSchema {
        ParameterSchema::empty().with_param(
            ParameterSpec::required("expression", ParamType::String)
                .with_description("Mathematical expression to evaluate"),
        )
    }
}

#[async_trait]
impl ToolHandler for CalculateTool {
    async fn call(&self, args: ToolArgs) -> HandlerResult {
        let expression = args.require_str("expression")?;

        match evaluate(expression) {
            Ok(result) => Ok(json!({ "expression": expression, "result": result })),
            Err(err) => {
                debug!(expression, error = %err, "Rejected expression");
                Ok(json!({ "error": "Invalid mathematical expression" }))
            }
        }
    }
}
