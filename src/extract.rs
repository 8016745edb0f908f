//! Function extraction from Python source via tree-sitter.

use tree_sitter::{Node, Parser};

/// One function definition sliced out of a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSlice {
    /// The declared name, taken from the `name` field of the definition
    /// node. `None` when the parse tree carries no name for the node, in
    /// which case the caller skips the unit.
    pub name: Option<String>,
    /// First line of the definition, 1-based.
    pub start_line: usize,
    /// Last line of the definition, 1-based, inclusive.
    pub end_line: usize,
    /// The exact original text of the spanned lines, joined with `\n`.
    pub text: String,
}

/// Extracts every function definition from `source`, at any nesting depth,
/// in document order.
///
/// Methods and nested functions count; a file with no definitions yields an
/// empty vector. Each slice reconstructs the definition's original lines,
/// so the signature and body round-trip exactly. Decorator lines sit above
/// the definition node's span and are not part of the slice.
///
/// # Errors
///
/// Returns an error when the text does not parse as Python, naming the
/// first offending line. tree-sitter itself tolerates malformed input, so
/// the tree is checked for error nodes explicitly.
pub fn extract_functions(source: &str) -> Result<Vec<FunctionSlice>, String> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| format!("failed to load the Python grammar: {e}"))?;

    let tree = parser.parse(source, None).ok_or("parser returned no tree for source text")?;
    let root = tree.root_node();

    if root.has_error() {
        return Err(match first_error_line(root) {
            Some(line) => {
                format!("source text does not parse as Python (syntax error near line {line})")
            }
            None => "source text does not parse as Python".to_string(),
        });
    }

    let lines: Vec<&str> = source.lines().collect();
    let mut slices = Vec::new();
    collect_functions(root, source, &lines, &mut slices);
    Ok(slices)
}

/// Pre-order walk collecting `function_definition` nodes at every depth.
fn collect_functions(node: Node, source: &str, lines: &[&str], out: &mut Vec<FunctionSlice>) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "function_definition" {
            out.push(slice_definition(child, source, lines));
        }
        collect_functions(child, source, lines, out);
    }
}

/// Builds a [`FunctionSlice`] from a `function_definition` node.
fn slice_definition(node: Node, source: &str, lines: &[&str]) -> FunctionSlice {
    let name = node
        .child_by_field_name("name")
        .and_then(|n| n.utf8_text(source.as_bytes()).ok())
        .map(ToString::to_string);

    let start = node.start_position().row;
    let end = node.end_position().row.min(lines.len().saturating_sub(1));
    let text = lines[start..=end].join("\n");

    FunctionSlice { name, start_line: start + 1, end_line: end + 1, text }
}

/// Returns the 1-based line of the first error or missing node, if any.
fn first_error_line(node: Node) -> Option<usize> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position().row + 1);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(line) = first_error_line(child) {
            return Some(line);
        }
    }
    None
}
