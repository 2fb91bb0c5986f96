use oxc::{
	allocator::{Box, Vec},
	ast::ast::{Argument, ArrayExpression, Expression, JSXElement, JSXFragment},
	diagnostics::OxcDiagnostic,
	span::Span,
};
use tracing::debug;

use crate::{constants::FACTORY, env::Environment};

impl<'a> super::JsxLowering<'a> {
	/// Lowers `<tag {...attributes}>{children}</tag>` into
	/// `JSX(tag, attributes, children)`.
	pub(crate) fn transform_element(
		&mut self,
		env: &Environment,
		element: &mut JSXElement<'a>,
	) -> Result<Expression<'a>, OxcDiagnostic> {
		let span = element.span;
		let tag = self.resolve_callee(env, &element.opening_element.name);

		let attributes = std::mem::replace(
			&mut element.opening_element.attributes,
			Vec::new_in(self.allocator),
		);
		let attribute_count = attributes.len();
		let attributes =
			self.compile_attributes(env, attributes, element.opening_element.span)?;

		let children = std::mem::replace(&mut element.children, Vec::new_in(self.allocator));
		let children = self.compile_children(env, children, span)?;

		debug!(
			attributes = attribute_count,
			children = children.is_some(),
			"lowered JSX element"
		);
		self.lowered += 1;

		Ok(self.factory_call(span, tag, [attributes, children]))
	}

	/// Lowers `<>{children}</>` into the children array itself.
	pub(crate) fn transform_fragment(
		&mut self,
		env: &Environment,
		fragment: &mut JSXFragment<'a>,
	) -> Result<Expression<'a>, OxcDiagnostic> {
		let span = fragment.span;
		let children = std::mem::replace(&mut fragment.children, Vec::new_in(self.allocator));
		let children = self.compile_children(env, children, span)?;

		debug!(children = children.is_some(), "lowered JSX fragment");
		self.lowered += 1;

		Ok(children.unwrap_or_else(|| {
			Expression::ArrayExpression(Box::new_in(
				ArrayExpression {
					span,
					elements: Vec::new_in(self.allocator),
					trailing_comma: None,
				},
				self.allocator,
			))
		}))
	}

	/// Builds the factory call. Trailing absent arguments are dropped;
	/// an absent argument followed by a present one becomes `null` so
	/// that attributes stay at index 1 and children at index 2.
	fn factory_call<const N: usize>(
		&self,
		span: Span,
		tag: Expression<'a>,
		optional: [Option<Expression<'a>>; N],
	) -> Expression<'a> {
		let present = optional.iter().rposition(Option::is_some).map_or(0, |last| last + 1);

		let mut arguments = Vec::with_capacity_in(1 + present, self.allocator);
		arguments.push(Argument::from(tag));
		for argument in optional.into_iter().take(present) {
			let argument = argument.unwrap_or_else(|| self.null_literal(span));
			arguments.push(Argument::from(argument));
		}

		self.call(span, self.identifier(span, FACTORY), arguments)
	}
}
