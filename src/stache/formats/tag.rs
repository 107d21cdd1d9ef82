//! XML-like AST tag serialization
//!
//! Serializes template nodes to an XML-like format that directly reflects the
//! tree structure. Iteration attributes (name, custom separator) become tag
//! attributes; children nest in a `<children>` tag.
//!
//! ## Format
//!
//! - Node type → tag name
//! - Literal/symbol text → text content
//! - Iteration children → nested in `<children>` tag
//! - Custom separator → `sep` attribute (omitted for the default)
//!
//! ## Example
//!
//! ```text
//! <template>
//!   <literal>Hello </literal>
//!   <iter name="items" sep="; "><children>
//!     <symbol>.</symbol>
//!   </children></iter>
//! </template>
//! ```

use crate::stache::ast::{Node, Separator};

/// Serialize a node forest to AST tag format
pub fn serialize_nodes(nodes: &[Node]) -> String {
    let mut result = String::new();
    result.push_str("<template>\n");
    for node in nodes {
        serialize_node(node, 1, &mut result);
    }
    result.push_str("</template>");
    result
}

/// Serialize a single node (recursive)
fn serialize_node(node: &Node, indent_level: usize, output: &mut String) {
    let indent = "  ".repeat(indent_level);

    match node {
        Node::Literal(text) => {
            output.push_str(&format!(
                "{}<literal>{}</literal>\n",
                indent,
                escape_xml(text)
            ));
        }
        Node::Symbol(name) => {
            output.push_str(&format!("{}<symbol>{}</symbol>\n", indent, escape_xml(name)));
        }
        Node::Iter {
            name,
            separator,
            children,
        } => {
            output.push_str(&format!("{}<iter name=\"{}\"", indent, escape_xml(name)));
            if let Separator::Text(sep) = separator {
                output.push_str(&format!(" sep=\"{}\"", escape_xml(sep)));
            }
            output.push('>');

            if children.is_empty() {
                // Empty iteration block
                output.push_str("</iter>\n");
            } else {
                output.push_str("<children>\n");
                for child in children {
                    serialize_node(child, indent_level + 1, output);
                }
                output.push_str(&format!("{}</children></iter>\n", indent));
            }
        }
    }
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
