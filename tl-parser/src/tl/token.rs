//! Token definitions for a single TL declaration
//!
//! A declaration line such as `msg#3f2c4e8a data:bytes list:flags.0?Vector<long> = Message`
//! is tokenized with a logos lexer before the grammar in
//! [`grammar::definition`](crate::tl::grammar::definition) assembles it.
//! Whitespace carries no meaning inside a declaration and is skipped.
use logos::Logos;
use std::fmt;

/// All possible tokens of a TL declaration
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    // Constructor identifier, e.g. `#7abe77ec`. Longest match wins over a bare `#`.
    #[regex(r"#[0-9a-fA-F]+", |lex| lex.slice()[1..].to_string())]
    ConstructorId(String),

    // Flags field type: `flags:#`
    #[token("#")]
    Hash,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),

    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),

    #[token(":")]
    Colon,
    #[token("=")]
    Equals,
    #[token("?")]
    Question,
    #[token(".")]
    Dot,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token("<")]
    OpenAngle,
    #[token(">")]
    CloseAngle,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("!")]
    Bang,
    #[token("%")]
    Percent,
    #[token("*")]
    Star,
    #[token(";")]
    Semicolon,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::ConstructorId(id) => write!(f, "#{id}"),
            Token::Hash => f.write_str("#"),
            Token::Ident(s) | Token::Number(s) => f.write_str(s),
            Token::Colon => f.write_str(":"),
            Token::Equals => f.write_str("="),
            Token::Question => f.write_str("?"),
            Token::Dot => f.write_str("."),
            Token::OpenBrace => f.write_str("{"),
            Token::CloseBrace => f.write_str("}"),
            Token::OpenAngle => f.write_str("<"),
            Token::CloseAngle => f.write_str(">"),
            Token::OpenBracket => f.write_str("["),
            Token::CloseBracket => f.write_str("]"),
            Token::Bang => f.write_str("!"),
            Token::Percent => f.write_str("%"),
            Token::Star => f.write_str("*"),
            Token::Semicolon => f.write_str(";"),
        }
    }
}

/// Tokenize a declaration, returning tokens with their byte ranges.
///
/// Characters outside the TL alphabet are reported by byte offset.
pub fn tokenize(source: &str) -> Result<Vec<(Token, std::ops::Range<usize>)>, usize> {
    let mut tokens = Vec::new();
    for (result, span) in Token::lexer(source).spanned() {
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => return Err(span.start),
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_loc(source: &str) -> Vec<Token> {
        tokenize(source)
            .expect("source to tokenize")
            .into_iter()
            .map(|(t, _)| t)
            .collect()
    }

    #[test]
    fn test_constructor_id_and_hash() {
        assert_eq!(
            strip_loc("ping#7abe77ec flags:#"),
            vec![
                Token::Ident("ping".to_string()),
                Token::ConstructorId("7abe77ec".to_string()),
                Token::Ident("flags".to_string()),
                Token::Colon,
                Token::Hash,
            ]
        );
    }

    #[test]
    fn test_conditional_field() {
        assert_eq!(
            strip_loc("list:flags.0?Vector<long>"),
            vec![
                Token::Ident("list".to_string()),
                Token::Colon,
                Token::Ident("flags".to_string()),
                Token::Dot,
                Token::Number("0".to_string()),
                Token::Question,
                Token::Ident("Vector".to_string()),
                Token::OpenAngle,
                Token::Ident("long".to_string()),
                Token::CloseAngle,
            ]
        );
    }

    #[test]
    fn test_whitespace_is_skipped() {
        assert_eq!(
            strip_loc("  {t:Type}\t= !X ;"),
            vec![
                Token::OpenBrace,
                Token::Ident("t".to_string()),
                Token::Colon,
                Token::Ident("Type".to_string()),
                Token::CloseBrace,
                Token::Equals,
                Token::Bang,
                Token::Ident("X".to_string()),
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_invalid_character_offset() {
        assert_eq!(tokenize("foo = B@r"), Err(7));
    }

    #[test]
    fn test_display_round_trips_slices() {
        let source = "a.b#1f x:flags.3?%T";
        let rendered: String = strip_loc(source).iter().map(|t| t.to_string()).collect();
        assert_eq!(rendered, "a.b#1fx:flags.3?%T");
    }
}
