//! Recursive descent parser implementation

use std::fmt;

use crate::lisc::ast::source::{CallExpression, Node, NumberLiteral, Program, StringLiteral};
use crate::lisc::lexer::Token;

/// Errors that can occur during parsing
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// An opening parenthesis was not followed by a name
    ExpectedCallName(Option<Token>),
    /// A call was still open when the tokens ran out
    UnterminatedCall,
    /// A token that cannot start a form appeared in form position
    UnexpectedToken(Token),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::ExpectedCallName(Some(token)) => {
                write!(f, "Expected call name after '(', found {}", token)
            }
            ParseError::ExpectedCallName(None) => {
                write!(f, "Expected call name after '(', found end of input")
            }
            ParseError::UnterminatedCall => write!(f, "Unterminated call: missing ')'"),
            ParseError::UnexpectedToken(token) => write!(f, "Unexpected token: {}", token),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a token sequence into a source tree
///
/// Consumes every token: each top-level form becomes one child of the
/// returned program, and any token left over after a complete form is an
/// error rather than being silently dropped.
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    let mut parser = Parser::new(tokens);

    let mut children = Vec::new();
    while !parser.is_done() {
        children.push(parser.node()?);
    }

    Ok(Program::with_children(children))
}

/// A stateful object that parses a sequence of tokens, tracking its
/// position at each point
struct Parser<'t> {
    tokens: &'t [Token],
    position: usize,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Look at the current token without consuming it
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Consume and return the current token
    fn next(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.position);
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Check whether every token has been consumed
    fn is_done(&self) -> bool {
        self.position == self.tokens.len()
    }

    /// Parse a single form: a literal or a parenthesized call
    fn node(&mut self) -> Result<Node, ParseError> {
        match self.next() {
            Some(Token::Number(value)) => {
                Ok(Node::NumberLiteral(NumberLiteral::new(value.clone())))
            }
            Some(Token::String(text)) => Ok(Node::StringLiteral(StringLiteral::new(text.clone()))),
            Some(Token::OpenParen) => self.call(),
            Some(token) => Err(ParseError::UnexpectedToken(token.clone())),
            None => Err(ParseError::UnterminatedCall),
        }
    }

    /// Parse a call starting just after its opening parenthesis
    fn call(&mut self) -> Result<Node, ParseError> {
        let name = match self.next() {
            Some(Token::Name(name)) => name.clone(),
            Some(token) => return Err(ParseError::ExpectedCallName(Some(token.clone()))),
            None => return Err(ParseError::ExpectedCallName(None)),
        };

        let mut params = Vec::new();
        loop {
            match self.peek() {
                Some(Token::CloseParen) => {
                    self.next();
                    return Ok(Node::CallExpression(CallExpression::new(name, params)));
                }
                Some(_) => params.push(self.node()?),
                None => return Err(ParseError::UnterminatedCall),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lisc::lexer::lex;
    use crate::lisc::testing::{call, num, program, strlit};

    #[test]
    fn test_parse_simple_call() {
        let tokens = lex("(add 1 2)").unwrap();
        let parsed = parse(&tokens).unwrap();

        let expected = program(vec![call("add", vec![num("1"), num("2")])]);
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_nested_call() {
        let tokens = lex("(add 1 (subtract 4 2))").unwrap();
        let parsed = parse(&tokens).unwrap();

        let expected = program(vec![call(
            "add",
            vec![num("1"), call("subtract", vec![num("4"), num("2")])],
        )]);
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_string_argument() {
        let tokens = lex("(greet \"hi\")").unwrap();
        let parsed = parse(&tokens).unwrap();

        let expected = program(vec![call("greet", vec![strlit("hi")])]);
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_call_without_arguments() {
        let tokens = lex("(ping)").unwrap();
        let parsed = parse(&tokens).unwrap();

        assert_eq!(parsed, program(vec![call("ping", vec![])]));
    }

    #[test]
    fn test_parse_bare_literals() {
        let tokens = lex("42").unwrap();
        let parsed = parse(&tokens).unwrap();
        assert_eq!(parsed.children, vec![num("42")]);

        let tokens = lex("\"hello\"").unwrap();
        let parsed = parse(&tokens).unwrap();
        assert_eq!(parsed.children, vec![strlit("hello")]);
    }

    #[test]
    fn test_parse_multiple_top_level_forms() {
        let tokens = lex("(add 1 2) (sub 3 4)").unwrap();
        let parsed = parse(&tokens).unwrap();

        assert_eq!(
            parsed,
            program(vec![
                call("add", vec![num("1"), num("2")]),
                call("sub", vec![num("3"), num("4")]),
            ])
        );
    }

    #[test]
    fn test_parse_empty_input() {
        let parsed = parse(&[]).unwrap();
        assert!(parsed.children.is_empty());
    }

    #[test]
    fn test_parse_deeply_nested() {
        let tokens = lex("(a (b (c (d 1))))").unwrap();
        let parsed = parse(&tokens).unwrap();

        let expected = program(vec![call(
            "a",
            vec![call("b", vec![call("c", vec![call("d", vec![num("1")])])])],
        )]);
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_error_unterminated_call() {
        let tokens = lex("(add 1 2").unwrap();
        assert_eq!(parse(&tokens), Err(ParseError::UnterminatedCall));

        // The inner call closes, the outer never does
        let tokens = lex("(add (inc 1)").unwrap();
        assert_eq!(parse(&tokens), Err(ParseError::UnterminatedCall));
    }

    #[test]
    fn test_error_missing_call_name() {
        let tokens = lex("()").unwrap();
        assert_eq!(
            parse(&tokens),
            Err(ParseError::ExpectedCallName(Some(Token::CloseParen)))
        );

        let tokens = lex("(1 2)").unwrap();
        assert_eq!(
            parse(&tokens),
            Err(ParseError::ExpectedCallName(Some(Token::Number(
                "1".to_string()
            ))))
        );

        let tokens = lex("(").unwrap();
        assert_eq!(parse(&tokens), Err(ParseError::ExpectedCallName(None)));
    }

    #[test]
    fn test_error_unexpected_token() {
        // A close paren with no open call
        let tokens = lex(")").unwrap();
        assert_eq!(
            parse(&tokens),
            Err(ParseError::UnexpectedToken(Token::CloseParen))
        );

        // Leftover token after a complete form
        let tokens = lex("(add 1 2))").unwrap();
        assert_eq!(
            parse(&tokens),
            Err(ParseError::UnexpectedToken(Token::CloseParen))
        );

        // A bare name is only legal in call position
        let tokens = lex("add").unwrap();
        assert_eq!(
            parse(&tokens),
            Err(ParseError::UnexpectedToken(Token::Name("add".to_string())))
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ParseError::UnterminatedCall.to_string(),
            "Unterminated call: missing ')'"
        );
        assert_eq!(
            ParseError::ExpectedCallName(Some(Token::CloseParen)).to_string(),
            "Expected call name after '(', found <close-paren>"
        );
        assert_eq!(
            ParseError::ExpectedCallName(None).to_string(),
            "Expected call name after '(', found end of input"
        );
        assert_eq!(
            ParseError::UnexpectedToken(Token::CloseParen).to_string(),
            "Unexpected token: <close-paren>"
        );
    }
}
