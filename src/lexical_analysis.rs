//! Turns source text into a lazy stream of tokens.

use lazy_static::lazy_static;
use regex::Regex;

/// A single token of the language. Tokens carry no position information.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Token {
    EndOfInput,
    Lambda,
    OpenParen,
    CloseParen,
    Identifier(String),
    Integer(i64),
    /// An integer-shaped lexeme that does not fit in an `i64`.
    Unknown(String),
}

// Anything that isn't printable, non-space ASCII counts as whitespace.
lazy_static! {
    static ref WHITESPACE_REGEX: Regex =
        Regex::new(r"^[^!-~]+").expect("Unable to compile whitespace regex.");
    static ref INTEGER_REGEX: Regex =
        Regex::new(r"^-?[0-9]+").expect("Unable to compile integer regex.");
    // Printable ASCII minus `(`, `)` and `\`.
    static ref IDENTIFIER_REGEX: Regex =
        Regex::new(r"^[!-'*-\[\]-~]+").expect("Unable to compile identifier regex.");
}

/// Returns the length of the leading whitespace of `input_str`.
fn whitespace_len(input_str: &str) -> usize {
    return WHITESPACE_REGEX
        .find(input_str)
        .map_or(0, |match_obj| match_obj.end());
}

/// Produces tokens on demand from a borrowed source string.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    source: &'a str,
    cursor: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut tokenizer = Tokenizer { source, cursor: 0 };
        tokenizer.skip_space();
        return tokenizer;
    }

    /// Whether every token has been consumed (trailing whitespace doesn't
    /// count).
    pub fn is_exhausted(&self) -> bool {
        return self.cursor >= self.source.len();
    }

    fn rest(&self) -> &'a str {
        return &self.source[self.cursor..];
    }

    fn skip_space(&mut self) {
        self.cursor += whitespace_len(self.rest());
    }

    /// Reads the token at the cursor and advances past it and any whitespace
    /// that follows. Returns `Token::EndOfInput` once the source is used up.
    pub fn next_token(&mut self) -> Token {
        self.skip_space();

        let rest = self.rest();
        let Some(first_char) = rest.chars().next() else {
            return Token::EndOfInput;
        };

        let (token, token_len) = match first_char {
            '(' => (Token::OpenParen, 1),
            ')' => (Token::CloseParen, 1),
            '\\' => (Token::Lambda, 1),
            _ => {
                if let Some(match_obj) = INTEGER_REGEX.find(rest) {
                    let token_text = match_obj.as_str();
                    let token = match token_text.parse::<i64>() {
                        Ok(value) => Token::Integer(value),
                        Err(_) => Token::Unknown(String::from(token_text)),
                    };
                    (token, match_obj.end())
                } else if let Some(match_obj) = IDENTIFIER_REGEX.find(rest) {
                    (
                        Token::Identifier(String::from(match_obj.as_str())),
                        match_obj.end(),
                    )
                } else {
                    // Only reachable if the whitespace rule and the identifier
                    // rule ever stop covering every character between them.
                    (
                        Token::Unknown(first_char.to_string()),
                        first_char.len_utf8(),
                    )
                }
            }
        };

        self.cursor += token_len;
        self.skip_space();

        return token;
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.next_token() {
            Token::EndOfInput => return None,
            token => return Some(token),
        }
    }
}

/// Collects every token of `program_str`, excluding the final `EndOfInput`.
pub fn run_lexical_analysis(program_str: &str) -> Vec<Token> {
    return Tokenizer::new(program_str).collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Token {
        return Token::Identifier(String::from(name));
    }

    // Test that leading whitespace of every kind is measured.
    #[test]
    fn test_whitespace_len() {
        assert_eq!(whitespace_len(" \t\r\n  a b"), 6);
        assert_eq!(whitespace_len("a b"), 0);
        assert_eq!(whitespace_len(""), 0);
    }

    // Test the token sequence for a mixed line of lambdas, brackets and
    // numbers.
    #[test]
    fn test_make_token_stream_mixed() {
        let produced = run_lexical_analysis(" \\x\\rest(* -23 4 x)");

        let expected = vec![
            Token::Lambda,
            ident("x"),
            Token::Lambda,
            ident("rest"),
            Token::OpenParen,
            ident("*"),
            Token::Integer(-23),
            Token::Integer(4),
            ident("x"),
            Token::CloseParen,
        ];

        assert_eq!(produced, expected);
    }

    // Test that an integer stops at the first non-digit.
    #[test]
    fn test_integer_followed_by_bracket() {
        let mut tokenizer = Tokenizer::new("123(");

        assert_eq!(tokenizer.next_token(), Token::Integer(123));
        assert_eq!(tokenizer.next_token(), Token::OpenParen);
        assert_eq!(tokenizer.next_token(), Token::EndOfInput);
    }

    // Test that a leading minus sign followed by digits is a negative number.
    #[test]
    fn test_negative_integer() {
        assert_eq!(run_lexical_analysis("-123"), vec![Token::Integer(-123)]);
    }

    // Test that an identifier stops at a lambda.
    #[test]
    fn test_identifier_followed_by_lambda() {
        assert_eq!(
            run_lexical_analysis(r"abc\d"),
            vec![ident("abc"), Token::Lambda, ident("d")]
        );
    }

    // Test that operators and punctuation runs are plain identifiers.
    #[test]
    fn test_punctuation_identifiers() {
        assert_eq!(
            run_lexical_analysis("- + foo!? %"),
            vec![ident("-"), ident("+"), ident("foo!?"), ident("%")]
        );
    }

    // Test that brackets other than round ones, quotes and the remaining
    // punctuation all belong to identifiers.
    #[test]
    fn test_identifier_character_class() {
        assert_eq!(
            run_lexical_analysis(r#"[a] {b} `c' ^_ "q" ~|"#),
            vec![
                ident("[a]"),
                ident("{b}"),
                ident("`c'"),
                ident("^_"),
                ident("\"q\""),
                ident("~|"),
            ]
        );
        assert_eq!(
            run_lexical_analysis(r"a(b)c\d"),
            vec![
                ident("a"),
                Token::OpenParen,
                ident("b"),
                Token::CloseParen,
                ident("c"),
                Token::Lambda,
                ident("d"),
            ]
        );
    }

    // Test that digits inside a run of identifier characters don't split it,
    // while a number followed by letters does.
    #[test]
    fn test_digits_and_letters() {
        assert_eq!(run_lexical_analysis("abc-5"), vec![ident("abc-5")]);
        assert_eq!(
            run_lexical_analysis("-5abc"),
            vec![Token::Integer(-5), ident("abc")]
        );
    }

    // Test that non-ASCII characters are skipped like whitespace.
    #[test]
    fn test_non_ascii_is_whitespace() {
        assert_eq!(
            run_lexical_analysis("a\u{3bb}b"),
            vec![ident("a"), ident("b")]
        );
    }

    // Test that an integer literal too large for i64 becomes an unknown token.
    #[test]
    fn test_integer_out_of_range() {
        assert_eq!(
            run_lexical_analysis("99999999999999999999"),
            vec![Token::Unknown(String::from("99999999999999999999"))]
        );
    }

    // Test that blank input is exhausted straight away.
    #[test]
    fn test_blank_input() {
        let mut tokenizer = Tokenizer::new("   \t ");

        assert!(tokenizer.is_exhausted());
        assert_eq!(tokenizer.next_token(), Token::EndOfInput);
        assert_eq!(tokenizer.next_token(), Token::EndOfInput);
    }
}
