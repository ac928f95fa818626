//! # Lexer for Tiny32 Assembly
//!
//! Tokenizes the operand text of a single instruction line. Comment and
//! label lines are classified before lexing, mnemonics are split off as raw
//! text, and branch operands are resolved verbatim (label names are
//! free-form), so the token grammar only covers register and immediate
//! operands and the commas between them.

use logos::{Lexer, Logos};

/// Tokens on an instruction line
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")]
pub enum Token {
    /// Register name, or any other bare word (rejected by operand checks)
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),

    /// Decimal integer literal, optionally negative
    #[regex(r"-?[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Int(i64),

    /// Hexadecimal integer literal, optionally negative
    #[regex(r"-?0x[0-9a-fA-F]+", parse_hex)]
    Hex(i64),

    /// Operand separator
    #[token(",")]
    Comma,
}

fn parse_hex(lex: &mut Lexer<Token>) -> Option<i64> {
    let slice = lex.slice();
    let (negative, digits) = match slice.strip_prefix('-') {
        Some(rest) => (true, &rest[2..]),
        None => (false, &slice[2..]),
    };
    let magnitude = i64::from_str_radix(digits, 16).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Lex a whole line, `None` on any unrecognized character or malformed
/// literal.
pub fn tokenize(line: &str) -> Option<Vec<Token>> {
    Token::lexer(line).collect::<Result<Vec<_>, _>>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_operands() {
        let tokens = tokenize("r1, r2, r3").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("r1".to_string()),
                Token::Comma,
                Token::Ident("r2".to_string()),
                Token::Comma,
                Token::Ident("r3".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_literals() {
        let tokens = tokenize("42 -10 0x1A -0x20").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Int(42),
                Token::Int(-10),
                Token::Hex(0x1A),
                Token::Hex(-0x20),
            ]
        );
    }

    #[test]
    fn test_tokenize_rejects_stray_characters() {
        // inline comments are not part of the line grammar
        assert_eq!(tokenize("ADD r1, r2, r3 # inline"), None);
        assert_eq!(tokenize("MOV r1, @r2"), None);
    }

    #[test]
    fn test_trailing_suffix_splits_tokens() {
        // "5x" is not one literal; the parser sees two tokens in one operand
        let tokens = tokenize("5x").unwrap();
        assert_eq!(tokens, vec![Token::Int(5), Token::Ident("x".to_string())]);
    }
}
