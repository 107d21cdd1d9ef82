//! Compiled template handle
//!
//! `Template` ties the pipeline stages together for callers that want to
//! parse a template once and render it against many contexts. It owns the
//! node tree produced by parsing; rendering borrows the tree and never
//! mutates it, so a compiled template can be shared freely.

use serde_json::Value;

use crate::stache::ast::Node;
use crate::stache::parsing::{parse, ParseError};
use crate::stache::rendering::eval;

/// A parsed template, ready to render against any context
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    /// Parse template text into a reusable template
    pub fn compile(source: &str) -> Result<Template, ParseError> {
        Ok(Template {
            nodes: parse(source)?,
        })
    }

    /// Render the template against a context value
    pub fn render(&self, context: &Value) -> String {
        eval(&self.nodes, context)
    }

    /// The parsed node tree
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compile_once_render_many() {
        let template = Template::compile("Hello {{name}}!").unwrap();
        assert_eq!(template.render(&json!({"name": "Ada"})), "Hello Ada!");
        assert_eq!(template.render(&json!({"name": "Grace"})), "Hello Grace!");
        assert_eq!(template.render(&json!({})), "Hello !");
    }

    #[test]
    fn test_compile_exposes_nodes() {
        let template = Template::compile("{{#xs}}{{.}}{{/xs}}").unwrap();
        assert_eq!(template.nodes().len(), 1);
        assert!(template.nodes()[0].is_iter());
    }

    #[test]
    fn test_compile_propagates_parse_errors() {
        let result = Template::compile("{{#open}}never closed");
        assert!(matches!(
            result,
            Err(ParseError::UnterminatedIterInit { .. })
        ));
    }

    #[test]
    fn test_render_iteration() {
        let template = Template::compile("{{#ns ' + '}}{{.}}{{/ns}}").unwrap();
        assert_eq!(template.render(&json!({"ns": [1, 2, 3]})), "1 + 2 + 3");
    }
}
