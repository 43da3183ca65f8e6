//! Reconstruction of lisc source from token streams
//!
//! The detokenizer renders each token back to its concrete text, with
//! atoms separated by single spaces and parentheses kept tight. Lexing
//! the rendered text yields the original token stream.

use crate::lisc::lexer::tokens::Token;

/// Rebuild source text from a token stream
pub fn detokenize(tokens: &[Token]) -> String {
    let mut source = String::new();

    for (index, token) in tokens.iter().enumerate() {
        if needs_space(tokens, index) {
            source.push(' ');
        }
        source.push_str(&token_text(token));
    }

    source
}

/// A space goes between two tokens unless the previous one opens a call
/// or the current one closes it
fn needs_space(tokens: &[Token], index: usize) -> bool {
    if index == 0 {
        return false;
    }
    !tokens[index - 1].is_open_paren() && !tokens[index].is_close_paren()
}

/// The concrete source text of a single token
fn token_text(token: &Token) -> String {
    match token {
        Token::OpenParen => "(".to_string(),
        Token::CloseParen => ")".to_string(),
        Token::Number(value) => value.clone(),
        Token::String(text) => format!("\"{}\"", text),
        Token::Name(name) => name.clone(),
    }
}
