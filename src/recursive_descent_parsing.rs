//! Recursive descent parser with one token of lookahead. Terms are built
//! through the constructors in `term_construction`, so parsing a line also
//! evaluates it.

use thiserror::Error;

use crate::lexical_analysis::{Token, Tokenizer};
use crate::term_construction::{application_term, integer_term, lambda_term, variable_term};
use crate::term_representation::Term;

/// Represents a parsing error. The first error aborts the whole parse and is
/// reported as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected identifier")]
    ExpectedIdentifier,
    #[error("expected closing bracket")]
    ExpectedClosingBracket,
    #[error("unexpected closing bracket")]
    UnexpectedClosingBracket,
    #[error("expected a term")]
    ExpectedTerm,
    #[error("unknown token")]
    UnknownToken { token_text: String },
    #[error("no input")]
    NoInput,
}

/// A tokenizer plus the token currently being looked at.
pub struct TokenStream<'a> {
    tokenizer: Tokenizer<'a>,
    current_token: Token,
}

impl<'a> TokenStream<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut tokenizer = Tokenizer::new(source);
        let current_token = tokenizer.next_token();

        return TokenStream {
            tokenizer,
            current_token,
        };
    }

    pub fn current(&self) -> &Token {
        return &self.current_token;
    }

    /// Moves on to the next token; sticks at `Token::EndOfInput` once the
    /// source runs out.
    pub fn advance(&mut self) {
        if self.tokenizer.is_exhausted() {
            self.current_token = Token::EndOfInput;
        } else {
            self.current_token = self.tokenizer.next_token();
        }
    }

    /// False once the stream has reached the end of input.
    pub fn is_good(&self) -> bool {
        return self.current_token != Token::EndOfInput;
    }
}

/// Parses `\[IDENTIFIER] [TERM]`. The body extends as far as possible.
pub fn parse_lambda_term(tokens: &mut TokenStream) -> Result<Term, ParseError> {
    debug_assert_eq!(tokens.current(), &Token::Lambda);
    tokens.advance();

    let formal_param = match tokens.current() {
        Token::Identifier(name) => name.clone(),
        _ => return Err(ParseError::ExpectedIdentifier),
    };
    tokens.advance();

    let body = parse_term(tokens)?;

    return Ok(lambda_term(formal_param.as_str(), body));
}

/// Parses a single lambda, bracketed term, variable or integer.
pub fn parse_single_term(tokens: &mut TokenStream) -> Result<Term, ParseError> {
    match tokens.current() {
        Token::Lambda => return parse_lambda_term(tokens),

        Token::OpenParen => {
            tokens.advance();
            let term = parse_term(tokens)?;

            if tokens.current() != &Token::CloseParen {
                return Err(ParseError::ExpectedClosingBracket);
            }
            tokens.advance();

            return Ok(term);
        }

        Token::Identifier(name) => {
            let term = variable_term(name.as_str());
            tokens.advance();
            return Ok(term);
        }

        Token::Integer(value) => {
            let term = integer_term(*value);
            tokens.advance();
            return Ok(term);
        }

        Token::CloseParen => return Err(ParseError::UnexpectedClosingBracket),

        Token::EndOfInput => return Err(ParseError::ExpectedTerm),

        Token::Unknown(token_text) => {
            return Err(ParseError::UnknownToken {
                token_text: token_text.clone(),
            });
        }
    }
}

/// Parses a sequence of single terms up to the end of input or a closing
/// bracket, folding them left-associatively with `application_term`.
pub fn parse_term(tokens: &mut TokenStream) -> Result<Term, ParseError> {
    let mut out_term = parse_single_term(tokens)?;

    while tokens.is_good() && tokens.current() != &Token::CloseParen {
        let next_term = parse_single_term(tokens)?;
        out_term = application_term(out_term, next_term);
    }

    return Ok(out_term);
}

/// Parses and evaluates one line of source.
pub fn evaluate(line: &str) -> Result<Term, ParseError> {
    let mut tokens = TokenStream::new(line);

    if !tokens.is_good() {
        return Err(ParseError::NoInput);
    }

    return parse_term(&mut tokens);
}

/// Renders the outcome of `evaluate` the way the interactive front end shows
/// it.
pub fn eval_result_to_string(eval_result: &Result<Term, ParseError>) -> String {
    match eval_result {
        Ok(term) => return format!("Success: {}", term),
        Err(parse_error) => return format!("Failure: {}", parse_error),
    }
}
