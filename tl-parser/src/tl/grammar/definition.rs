//! Declaration grammar
//!
//! Parses one constructor or function line:
//!
//! ```text
//! definition := path [id] generic* param* ['?'] '=' type [';']
//! path       := ident ('.' ident)*
//! generic    := '{' ident ':' 'Type' '}'
//! param      := ident ':' ( '#' | ident '.' number '?' type | type )
//! type       := ['!' | '%'] path ['<' type '>']
//! ```
//!
//! When the `#id` is omitted it is derived from the declaration text, see
//! [`checksum`](super::checksum).

use super::checksum::compute_id;
use crate::tl::ast::{Definition, Flag, Parameter, Type};
use crate::tl::token::{tokenize, Token};
use thiserror::Error;

/// Errors produced while parsing a single declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("empty definition")]
    Empty,
    #[error("unexpected character at offset {0}")]
    InvalidCharacter(usize),
    #[error("missing '=' between declaration and result type")]
    MissingEquals,
    #[error("invalid constructor id {0:?}")]
    InvalidId(String),
    #[error("invalid flag index {0:?}")]
    InvalidFlagIndex(String),
    #[error("expected {expected}, found {found:?}")]
    Unexpected {
        expected: &'static str,
        found: String,
    },
    #[error("expected {0}, found end of line")]
    UnexpectedEnd(&'static str),
}

/// Parse one declaration line. A trailing `;` is optional.
pub fn parse_definition(line: &str) -> Result<Definition, DefinitionError> {
    let line = line.trim();
    let line = line.strip_suffix(';').unwrap_or(line).trim_end();
    if line.is_empty() {
        return Err(DefinitionError::Empty);
    }
    let tokens: Vec<Token> = tokenize(line)
        .map_err(DefinitionError::InvalidCharacter)?
        .into_iter()
        .map(|(t, _)| t)
        .collect();
    if !tokens.contains(&Token::Equals) {
        return Err(DefinitionError::MissingEquals);
    }

    let mut cursor = Cursor::new(tokens);
    let mut def = Definition::default();
    let mut explicit_id = false;

    let (namespace, name) = cursor.path("definition name")?;
    def.namespace = namespace;
    def.name = name;

    if let Some(Token::ConstructorId(hex)) = cursor.peek() {
        let hex = hex.clone();
        cursor.advance();
        def.id = parse_id(&hex)?;
        explicit_id = true;
    }

    loop {
        match cursor.peek() {
            Some(Token::Equals) => break,
            Some(Token::OpenBrace) => def.generic_params.push(cursor.generic()?),
            Some(Token::Question) => {
                cursor.advance();
                def.base = true;
                if cursor.peek() != Some(&Token::Equals) {
                    return Err(cursor.unexpected("'=' after '?'"));
                }
            }
            Some(Token::Ident(_)) => def.params.push(cursor.param()?),
            _ => return Err(cursor.unexpected("parameter")),
        }
    }
    cursor.expect(Token::Equals, "'='")?;
    def.result = cursor.ty()?;
    if !cursor.at_end() {
        return Err(cursor.unexpected("end of definition"));
    }

    if !explicit_id {
        def.id = compute_id(&def);
    }
    Ok(def)
}

fn parse_id(hex: &str) -> Result<u32, DefinitionError> {
    if hex.len() > 8 {
        return Err(DefinitionError::InvalidId(hex.to_string()));
    }
    u32::from_str_radix(hex, 16).map_err(|_| DefinitionError::InvalidId(hex.to_string()))
}

struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl Cursor {
    fn new(tokens: Vec<Token>) -> Self {
        Cursor { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn unexpected(&self, expected: &'static str) -> DefinitionError {
        match self.peek() {
            Some(found) => DefinitionError::Unexpected {
                expected,
                found: found.to_string(),
            },
            None => DefinitionError::UnexpectedEnd(expected),
        }
    }

    fn expect(&mut self, token: Token, expected: &'static str) -> Result<(), DefinitionError> {
        if self.peek() == Some(&token) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn ident(&mut self, expected: &'static str) -> Result<String, DefinitionError> {
        match self.peek() {
            Some(Token::Ident(s)) => {
                let s = s.clone();
                self.pos += 1;
                Ok(s)
            }
            _ => Err(self.unexpected(expected)),
        }
    }

    /// Dotted path; every segment but the last is a namespace.
    fn path(&mut self, expected: &'static str) -> Result<(Vec<String>, String), DefinitionError> {
        let mut segments = vec![self.ident(expected)?];
        while self.peek() == Some(&Token::Dot)
            && matches!(self.peek_at(1), Some(Token::Ident(_)))
        {
            self.pos += 1;
            segments.push(self.ident(expected)?);
        }
        let name = segments.pop().unwrap_or_default();
        Ok((segments, name))
    }

    fn generic(&mut self) -> Result<String, DefinitionError> {
        self.expect(Token::OpenBrace, "'{'")?;
        let name = self.ident("generic parameter name")?;
        self.expect(Token::Colon, "':'")?;
        match self.peek() {
            Some(Token::Ident(kind)) if kind == "Type" => self.pos += 1,
            _ => return Err(self.unexpected("'Type'")),
        }
        self.expect(Token::CloseBrace, "'}'")?;
        Ok(name)
    }

    fn param(&mut self) -> Result<Parameter, DefinitionError> {
        let name = self.ident("parameter name")?;
        self.expect(Token::Colon, "':'")?;

        if self.peek() == Some(&Token::Hash) {
            self.pos += 1;
            return Ok(Parameter::flags_field(name));
        }

        // flags.N?Type
        if matches!(self.peek(), Some(Token::Ident(_)))
            && self.peek_at(1) == Some(&Token::Dot)
            && matches!(self.peek_at(2), Some(Token::Number(_)))
        {
            let flag_name = self.ident("flags field")?;
            self.pos += 1;
            let index = match self.advance() {
                Some(Token::Number(n)) => n
                    .parse::<u32>()
                    .map_err(|_| DefinitionError::InvalidFlagIndex(n.clone()))?,
                _ => return Err(DefinitionError::UnexpectedEnd("flag index")),
            };
            self.expect(Token::Question, "'?'")?;
            let ty = self.ty()?;
            return Ok(Parameter::conditional(
                name,
                Flag {
                    name: flag_name,
                    index,
                },
                ty,
            ));
        }

        Ok(Parameter::new(name, self.ty()?))
    }

    fn ty(&mut self) -> Result<Type, DefinitionError> {
        let mut ty = Type::default();
        match self.peek() {
            Some(Token::Bang) => {
                self.pos += 1;
                ty.generic_ref = true;
            }
            Some(Token::Percent) => {
                self.pos += 1;
                ty.percent = true;
            }
            _ => {}
        }
        let (namespace, name) = self.path("type name")?;
        ty.namespace = namespace;
        ty.name = name;
        if self.peek() == Some(&Token::OpenAngle) {
            self.pos += 1;
            ty.generic_arg = Some(Box::new(self.ty()?));
            self.expect(Token::CloseAngle, "'>'")?;
        }
        Ok(ty)
    }
}
