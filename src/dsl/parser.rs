//! Parser for the netlist DSL.

use super::ast::*;
use super::lexer::{parse_value, Lexer, Token, TokenKind};
use crate::error::{MnaError, Result};

/// Parser for netlist DSL.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self {
            lexer,
            current: Token {
                kind: TokenKind::Newline,
                text: String::new(),
                line: 1,
                column: 1,
            },
        }
    }

    /// Parse the entire netlist.
    pub fn parse(&mut self) -> Result<CircuitAst> {
        let mut ast = CircuitAst::new();
        self.advance()?;

        while self.current.kind != TokenKind::Eof {
            match self.current.kind {
                TokenKind::Newline => {
                    self.advance()?;
                    continue;
                }
                TokenKind::Directive => self.parse_directive(&mut ast)?,
                TokenKind::Identifier => {
                    let component = self.parse_component()?;
                    ast.components.push(component);
                }
                TokenKind::Number | TokenKind::Eof => {
                    return Err(MnaError::parse(
                        self.current.line,
                        format!("unexpected token: {:?}", self.current.text),
                    ));
                }
            }

            self.expect_line_end()?;
        }

        Ok(ast)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn at_line_end(&self) -> bool {
        matches!(self.current.kind, TokenKind::Newline | TokenKind::Eof)
    }

    fn expect_line_end(&mut self) -> Result<()> {
        if !self.at_line_end() {
            return Err(MnaError::parse(
                self.current.line,
                format!("unexpected token: {:?}", self.current.text),
            ));
        }
        if self.current.kind == TokenKind::Newline {
            self.advance()?;
        }
        Ok(())
    }

    /// Consume one word (identifier or number) as a node label.
    fn expect_word(&mut self, what: &str) -> Result<String> {
        if self.at_line_end() || self.current.kind == TokenKind::Directive {
            return Err(MnaError::parse(
                self.current.line,
                format!("expected {}, got {:?}", what, self.current.kind),
            ));
        }
        let text = std::mem::take(&mut self.current.text);
        self.advance()?;
        Ok(text)
    }

    fn parse_directive(&mut self, ast: &mut CircuitAst) -> Result<()> {
        let directive = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        match directive.to_lowercase().as_str() {
            ".node" => {
                let node = normalize_node(self.expect_word("node label")?);
                if !ast.nodes.contains(&node) {
                    ast.nodes.push(node);
                }
            }
            ".ground" => {
                let node = normalize_node(self.expect_word("node label")?);
                ast.ground = Some(node);
            }
            ".freq" => {
                let text = self.expect_word("frequency")?;
                let frequency = parse_value(&text)
                    .ok_or_else(|| MnaError::parse(line, format!("invalid number: {}", text)))?;
                ast.frequency = Some(frequency);
            }
            ".end" => {
                // Everything after .end is ignored
                while self.current.kind != TokenKind::Eof {
                    self.advance()?;
                }
            }
            _ => {
                return Err(MnaError::parse(
                    line,
                    format!("unknown directive: {}", directive),
                ));
            }
        }

        Ok(())
    }

    fn parse_component(&mut self) -> Result<ComponentDef> {
        let name = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        let first_char = name.chars().next().unwrap_or('?');
        let component_type =
            ComponentType::from_prefix(first_char).ok_or_else(|| MnaError::UnknownComponentType {
                component_type: name.clone(),
                line,
            })?;

        let mut nodes = Vec::with_capacity(2);
        while nodes.len() < 2 && !self.at_line_end() {
            nodes.push(normalize_node(self.expect_word("node label")?));
        }
        if nodes.len() < 2 {
            return Err(MnaError::invalid_component(
                &name,
                line,
                format!("expected 2 nodes, got {}", nodes.len()),
            ));
        }

        // Sources may spell out DC/AC; in a single-frequency analysis both
        // mean the same magnitude.
        if component_type.is_source()
            && self.current.kind == TokenKind::Identifier
            && matches!(self.current.text.to_uppercase().as_str(), "DC" | "AC")
        {
            self.advance()?;
        }

        let value = match self.current.kind {
            TokenKind::Number => {
                let value = parse_value(&self.current.text);
                self.advance()?;
                value
            }
            TokenKind::Identifier => {
                return Err(MnaError::invalid_component(
                    &name,
                    line,
                    format!("invalid value: {}", self.current.text),
                ));
            }
            _ => None,
        };

        Ok(ComponentDef {
            component_type,
            name,
            nodes,
            value,
            line,
        })
    }
}

fn normalize_node(label: String) -> String {
    if label.eq_ignore_ascii_case("GND") {
        "0".to_string()
    } else {
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::parse;

    #[test]
    fn test_parse_resistor() {
        let input = "R1 in out 10k";
        let ast = parse(input).unwrap();
        assert_eq!(ast.components.len(), 1);
        assert_eq!(ast.components[0].component_type, ComponentType::Resistor);
        assert_eq!(ast.components[0].name, "R1");
        assert_eq!(ast.components[0].nodes, vec!["in", "out"]);
        assert_eq!(ast.components[0].value, Some(10_000.0));
    }

    #[test]
    fn test_parse_sources_with_keywords() {
        let ast = parse("V1 1 GND DC 5\nIbias 2 0 AC 1m\n").unwrap();
        assert_eq!(ast.components[0].component_type, ComponentType::VoltageSource);
        assert_eq!(ast.components[0].nodes, vec!["1", "0"]);
        assert_eq!(ast.components[0].value, Some(5.0));
        assert_eq!(ast.components[1].component_type, ComponentType::CurrentSource);
        assert_eq!(ast.components[1].value, Some(1e-3));
    }

    #[test]
    fn test_parse_directives() {
        let input = ".node out\n.ground gnd\n.freq 1k\nR1 in out 1k";
        let ast = parse(input).unwrap();
        assert_eq!(ast.nodes, vec!["out"]);
        assert_eq!(ast.ground, Some("0".to_string()));
        assert_eq!(ast.frequency, Some(1000.0));
    }

    #[test]
    fn test_parse_leading_dot_values() {
        let ast = parse("C1 a b .5u\n  .freq .5k\n").unwrap();
        assert_eq!(ast.components.len(), 1);
        let value = ast.components[0].value.unwrap();
        assert!((value - 0.5e-6).abs() < 1e-18);
        assert_eq!(ast.frequency, Some(500.0));
    }

    #[test]
    fn test_parse_with_comments() {
        let input = "# This is a comment\nR1 in out 1k ; inline comment style\n\n";
        let ast = parse(input).unwrap();
        assert_eq!(ast.components.len(), 1);
    }

    #[test]
    fn test_missing_value_is_left_to_builder() {
        let ast = parse("C1 a b").unwrap();
        assert_eq!(ast.components[0].value, None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse("Q1 c b e"),
            Err(MnaError::UnknownComponentType { line: 1, .. })
        ));
        assert!(matches!(
            parse("R1 a\n"),
            Err(MnaError::InvalidComponent { line: 1, .. })
        ));
        assert!(matches!(
            parse("\nR1 a b ten"),
            Err(MnaError::InvalidComponent { line: 2, .. })
        ));
        assert!(matches!(
            parse("R1 a b 1k 2k"),
            Err(MnaError::ParseError { line: 1, .. })
        ));
        assert!(matches!(
            parse(".model D1 D"),
            Err(MnaError::ParseError { line: 1, .. })
        ));
        assert!(matches!(
            parse(".freq fast"),
            Err(MnaError::ParseError { line: 1, .. })
        ));
    }

    #[test]
    fn test_end_directive_stops_parsing() {
        let ast = parse("R1 a b 1\n.end\nthis is ignored").unwrap();
        assert_eq!(ast.components.len(), 1);
    }
}
