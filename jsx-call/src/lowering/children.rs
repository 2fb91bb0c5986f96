use oxc::{
	allocator::{Box, FromIn, Vec},
	ast::ast::{ArrayExpression, ArrayExpressionElement, Expression, JSXChild, JSXExpression},
	diagnostics::OxcDiagnostic,
	span::{Atom, Span},
};

use crate::env::Environment;

impl<'a> super::JsxLowering<'a> {
	/// Compiles an element's children into the factory call's third
	/// argument, or `None` if nothing significant remains.
	///
	/// Whitespace-only text spanning a line break separates siblings
	/// and is dropped, as are empty `{}` containers. The first and last
	/// text children lose their leading (resp. trailing) line-break
	/// runs; all other whitespace is kept verbatim.
	pub(crate) fn compile_children(
		&mut self,
		env: &Environment,
		children: Vec<'a, JSXChild<'a>>,
		span: Span,
	) -> Result<Option<Expression<'a>>, OxcDiagnostic> {
		let mut children: std::vec::Vec<JSXChild<'a>> = children
			.into_iter()
			.filter(|child| !is_insignificant(child))
			.collect();

		if let Some(JSXChild::Text(text)) = children.first_mut() {
			if let Some(trimmed) = trim_leading_break(text.value.as_str()) {
				let trimmed = Atom::from_in(trimmed, self.allocator);
				text.value = trimmed;
			}
		}
		if let Some(JSXChild::Text(text)) = children.last_mut() {
			if let Some(trimmed) = trim_trailing_break(text.value.as_str()) {
				let trimmed = Atom::from_in(trimmed, self.allocator);
				text.value = trimmed;
			}
		}

		if children.is_empty() {
			return Ok(None);
		}

		let mut elements = Vec::with_capacity_in(children.len(), self.allocator);
		for child in children {
			elements.push(ArrayExpressionElement::from(self.compile_child(env, child)?));
		}

		Ok(Some(Expression::ArrayExpression(Box::new_in(
			ArrayExpression {
				span,
				elements,
				trailing_comma: None,
			},
			self.allocator,
		))))
	}

	/// Lowers one significant child.
	fn compile_child(
		&mut self,
		env: &Environment,
		child: JSXChild<'a>,
	) -> Result<Expression<'a>, OxcDiagnostic> {
		match child {
			JSXChild::Text(text) => {
				let value = self.decode_entities(text.value);
				Ok(self.string_literal(text.span, value))
			}
			JSXChild::ExpressionContainer(mut container) => self.unwrap_container(env, &mut container),
			JSXChild::Element(mut element) => self.transform_element(env, &mut element),
			JSXChild::Fragment(mut fragment) => self.transform_fragment(env, &mut fragment),
			JSXChild::Spread(spread) => {
				Err(OxcDiagnostic::error("spread children are not supported")
					.with_label(spread.span)
					.with_help("wrap the spread in an expression instead: `{[...items]}`"))
			}
		}
	}
}

/// Returns whether a child produces no output at all.
fn is_insignificant(child: &JSXChild<'_>) -> bool {
	match child {
		JSXChild::Text(text) => is_line_separator(text.value.as_str()),
		JSXChild::ExpressionContainer(container) => {
			matches!(container.expression, JSXExpression::EmptyExpression(_))
		}
		_ => false,
	}
}

/// Horizontal whitespace.
fn is_blank(c: char) -> bool {
	c == ' ' || c == '\t'
}

/// Line terminators.
fn is_break(c: char) -> bool {
	c == '\n' || c == '\r'
}

/// Whitespace-only text that contains at least one line break.
fn is_line_separator(text: &str) -> bool {
	text.chars().all(|c| is_blank(c) || is_break(c)) && text.contains(is_break)
}

/// Strips a leading run of line breaks and the horizontal whitespace
/// around it. Returns `None` if `text` does not start with such a run.
fn trim_leading_break(text: &str) -> Option<&str> {
	if text.trim_start_matches(is_blank).starts_with(is_break) {
		Some(text.trim_start_matches(|c: char| is_blank(c) || is_break(c)))
	} else {
		None
	}
}

/// Strips a trailing run of line breaks and the horizontal whitespace
/// around it. Returns `None` if `text` does not end with such a run.
fn trim_trailing_break(text: &str) -> Option<&str> {
	if text.trim_end_matches(is_blank).ends_with(is_break) {
		Some(text.trim_end_matches(|c: char| is_blank(c) || is_break(c)))
	} else {
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn separators_need_a_line_break() {
		assert!(is_line_separator("\n"));
		assert!(is_line_separator("\n    \t"));
		assert!(is_line_separator("  \r\n  "));
		assert!(!is_line_separator(" "));
		assert!(!is_line_separator("\n a \n"));
	}

	#[test]
	fn trims_only_line_break_runs() {
		assert_eq!(trim_leading_break("\n    hello "), Some("hello "));
		assert_eq!(trim_leading_break("  \n\n  hello"), Some("hello"));
		assert_eq!(trim_leading_break(" hello"), None);
		assert_eq!(trim_trailing_break(" hello \n  "), Some(" hello"));
		assert_eq!(trim_trailing_break("hello  "), None);
	}

	#[test]
	fn interior_whitespace_is_untouched() {
		assert_eq!(
			trim_trailing_break(trim_leading_break("\n  a\n  b\n").unwrap()),
			Some("a\n  b")
		);
	}
}
