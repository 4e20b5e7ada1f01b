//! TreeSitter-based Java front end
//!
//! This module turns a Java compilation unit into the flat structural model
//! the converter consumes: type declarations with their annotations, and
//! method declarations with annotations, parameter types and body text.

pub mod syntax;

pub use syntax::{Annotation, CompilationUnit, MethodDecl, TypeDecl};

use thiserror::Error;
use tree_sitter::Node as TsNode;

/// Errors that can occur during parsing
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("syntax error at {line}:{column}")]
    Syntax { line: usize, column: usize },
    #[error("TreeSitter error: {0}")]
    TreeSitter(String),
}

/// A structural front end: anything that can turn source text into a
/// [`CompilationUnit`].
pub trait FrontEnd: Sync {
    fn parse(&self, source: &str) -> Result<CompilationUnit, ParseError>;
}

/// Node kinds that declare a type (and may carry the mod annotation)
static TYPE_DECLARATION_KINDS: &[&str] = &[
    "class_declaration",
    "interface_declaration",
    "enum_declaration",
    "record_declaration",
    "annotation_type_declaration",
];

/// Java front end backed by tree-sitter-java
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaFrontEnd;

impl FrontEnd for JavaFrontEnd {
    fn parse(&self, source: &str) -> Result<CompilationUnit, ParseError> {
        let language: tree_sitter::Language = tree_sitter_java::LANGUAGE.into();

        let mut parser = tree_sitter::Parser::new();
        parser.set_language(&language)
            .map_err(|e| ParseError::TreeSitter(e.to_string()))?;

        let tree = parser.parse(source, None)
            .ok_or_else(|| ParseError::TreeSitter("parser returned no tree".to_string()))?;

        let root = tree.root_node();
        if root.has_error() {
            let (line, column) = find_error(root)
                .map(|node| {
                    let start = node.start_position();
                    (start.row + 1, start.column + 1)
                })
                .unwrap_or((1, 1));
            return Err(ParseError::Syntax { line, column });
        }

        let mut unit = CompilationUnit::default();
        collect(root, source, &mut unit);
        Ok(unit)
    }
}

/// Find the first ERROR or MISSING node in document order
fn find_error(node: TsNode) -> Option<TsNode> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() {
            if let Some(found) = find_error(child) {
                return Some(found);
            }
        }
    }

    None
}

/// Recursively collect type and method declarations in document order
fn collect(node: TsNode, source: &str, unit: &mut CompilationUnit) {
    let kind = node.kind();

    if TYPE_DECLARATION_KINDS.contains(&kind) {
        unit.type_decls.push(TypeDecl {
            name: field_text(node, "name", source).unwrap_or_default(),
            annotations: annotations_of(node, source),
        });
    } else if kind == "method_declaration" {
        unit.methods.push(method_decl(node, source));
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect(child, source, unit);
    }
}

fn method_decl(node: TsNode, source: &str) -> MethodDecl {
    let parameter_types = node
        .child_by_field_name("parameters")
        .map(|params| {
            let mut cursor = params.walk();
            params
                .named_children(&mut cursor)
                .filter(|p| p.kind() == "formal_parameter")
                .filter_map(|p| field_text(p, "type", source))
                .collect()
        })
        .unwrap_or_default();

    MethodDecl {
        name: field_text(node, "name", source).unwrap_or_default(),
        annotations: annotations_of(node, source),
        parameter_types,
        body: field_text(node, "body", source),
    }
}

/// Annotations live inside the (unnamed) `modifiers` child of a declaration
fn annotations_of(node: TsNode, source: &str) -> Vec<Annotation> {
    let mut cursor = node.walk();
    let modifiers = node
        .named_children(&mut cursor)
        .find(|child| child.kind() == "modifiers");

    let Some(modifiers) = modifiers else {
        return Vec::new();
    };

    let mut cursor = modifiers.walk();
    modifiers
        .named_children(&mut cursor)
        .filter(|child| matches!(child.kind(), "marker_annotation" | "annotation"))
        .map(|child| annotation(child, source))
        .collect()
}

fn annotation(node: TsNode, source: &str) -> Annotation {
    let mut attributes = Vec::new();

    if let Some(args) = node.child_by_field_name("arguments") {
        let mut cursor = args.walk();
        for arg in args.named_children(&mut cursor) {
            match arg.kind() {
                "element_value_pair" => {
                    let key = field_text(arg, "key", source);
                    let value = field_text(arg, "value", source);
                    if let (Some(key), Some(value)) = (key, value) {
                        attributes.push((key, value));
                    }
                }
                "line_comment" | "block_comment" => {}
                // @Foo("x") is shorthand for @Foo(value = "x")
                _ => attributes.push(("value".to_string(), node_text(arg, source))),
            }
        }
    }

    Annotation {
        name: field_text(node, "name", source).unwrap_or_default(),
        attributes,
    }
}

fn field_text(node: TsNode, field: &str, source: &str) -> Option<String> {
    node.child_by_field_name(field).map(|child| node_text(child, source))
}

fn node_text(node: TsNode, source: &str) -> String {
    source[node.byte_range()].to_string()
}
