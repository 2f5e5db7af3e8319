// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::{error::ParsePolynomialError, polynomial::Polynomial, variable::Variable};
use num_bigint::BigInt;
use num_traits::{Pow, Zero};
use std::convert::TryFrom;
use std::str::FromStr;

type ParseResult<T> = Result<T, ParsePolynomialError>;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Number(BigInt),
    Identifier(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

fn tokenize(text: &str) -> ParseResult<Vec<(usize, Token)>> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();
    while let Some(&(position, ch)) = chars.peek() {
        let token = match ch {
            _ if ch.is_whitespace() => {
                chars.next();
                continue;
            }
            '0'..='9' => {
                let mut end = position;
                while let Some(&(index, digit)) = chars.peek() {
                    if !digit.is_ascii_digit() {
                        break;
                    }
                    end = index + digit.len_utf8();
                    chars.next();
                }
                let value = text[position..end]
                    .parse()
                    .map_err(|_| ParsePolynomialError::new(position, "invalid number"))?;
                tokens.push((position, Token::Number(value)));
                continue;
            }
            _ if ch.is_alphabetic() || ch == '_' => {
                let mut end = position;
                while let Some(&(index, c)) = chars.peek() {
                    if !(c.is_alphanumeric() || c == '_') {
                        break;
                    }
                    end = index + c.len_utf8();
                    chars.next();
                }
                tokens.push((position, Token::Identifier(text[position..end].into())));
                continue;
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '/' => Token::Slash,
            '^' => Token::Caret,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '*' => {
                chars.next();
                if let Some(&(_, '*')) = chars.peek() {
                    chars.next();
                    tokens.push((position, Token::Caret));
                } else {
                    tokens.push((position, Token::Star));
                }
                continue;
            }
            _ => {
                return Err(ParsePolynomialError::new(
                    position,
                    format!("unexpected character {:?}", ch),
                ))
            }
        };
        chars.next();
        tokens.push((position, token));
    }
    Ok(tokens)
}

/// Recursive descent over
///
/// ```text
/// sum     := product (("+" | "-") product)*
/// product := unary (("*" | "/") unary)*
/// unary   := "-" unary | "+" unary | power
/// power   := atom ("^" integer)?
/// atom    := integer | identifier | "(" sum ")"
/// ```
struct Parser {
    tokens: Vec<(usize, Token)>,
    index: usize,
    end: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index).map(|(_, token)| token)
    }
    fn position(&self) -> usize {
        self.tokens
            .get(self.index)
            .map_or(self.end, |&(position, _)| position)
    }
    fn error<T>(&self, message: &str) -> ParseResult<T> {
        Err(ParsePolynomialError::new(self.position(), message))
    }
    fn next(&mut self) -> Option<Token> {
        let token = self.peek().cloned();
        if token.is_some() {
            self.index += 1;
        }
        token
    }
    fn sum(&mut self) -> ParseResult<Polynomial> {
        let mut retval = self.product()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.next();
                    retval += self.product()?;
                }
                Some(Token::Minus) => {
                    self.next();
                    retval -= self.product()?;
                }
                _ => return Ok(retval),
            }
        }
    }
    fn product(&mut self) -> ParseResult<Polynomial> {
        let mut retval = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.next();
                    retval *= self.unary()?;
                }
                Some(Token::Slash) => {
                    self.next();
                    let position = self.position();
                    let divisor = self.unary()?;
                    let divisor = match divisor.to_constant() {
                        Some(divisor) if !divisor.is_zero() => divisor,
                        Some(_) => {
                            return Err(ParsePolynomialError::new(position, "division by zero"))
                        }
                        None => {
                            return Err(ParsePolynomialError::new(
                                position,
                                "division by a non-constant",
                            ))
                        }
                    };
                    retval = retval.mul_term(&Default::default(), &divisor.recip());
                }
                _ => return Ok(retval),
            }
        }
    }
    fn unary(&mut self) -> ParseResult<Polynomial> {
        match self.peek() {
            Some(Token::Minus) => {
                self.next();
                Ok(-self.unary()?)
            }
            Some(Token::Plus) => {
                self.next();
                self.unary()
            }
            _ => self.power(),
        }
    }
    fn power(&mut self) -> ParseResult<Polynomial> {
        let base = self.atom()?;
        if self.peek() != Some(&Token::Caret) {
            return Ok(base);
        }
        self.next();
        let position = self.position();
        match self.next() {
            Some(Token::Number(exponent)) => match u32::try_from(exponent) {
                Ok(exponent) => Ok(base.pow(exponent)),
                Err(_) => Err(ParsePolynomialError::new(position, "exponent too large")),
            },
            _ => Err(ParsePolynomialError::new(
                position,
                "expected a non-negative integer exponent",
            )),
        }
    }
    fn atom(&mut self) -> ParseResult<Polynomial> {
        match self.next() {
            Some(Token::Number(value)) => Ok(value.into()),
            Some(Token::Identifier(name)) => Ok(Variable::new(&name).into()),
            Some(Token::LParen) => {
                let retval = self.sum()?;
                if self.peek() == Some(&Token::RParen) {
                    self.next();
                    Ok(retval)
                } else {
                    self.error("expected ')'")
                }
            }
            Some(_) => {
                self.index -= 1;
                self.error("expected a number, a variable or '('")
            }
            None => self.error("unexpected end of input"),
        }
    }
}

/// Parses expressions such as `b_2*x^2 + b_1*x + b_0` or `(x**2 + y)/3`.
///
/// Identifiers are resolved with [`Variable::new`], so a parsed `x` is the
/// same variable as `Variable::new("x")`.
impl FromStr for Polynomial {
    type Err = ParsePolynomialError;
    fn from_str(text: &str) -> ParseResult<Polynomial> {
        let mut parser = Parser {
            tokens: tokenize(text)?,
            index: 0,
            end: text.len(),
        };
        let retval = parser.sum()?;
        if parser.peek().is_some() {
            return parser.error("unexpected trailing input");
        }
        Ok(retval)
    }
}
