use oxc::{
	allocator::{Box, FromIn, Vec},
	ast::ast::{
		Argument, Expression, IdentifierName, JSXAttribute, JSXAttributeItem, JSXAttributeName,
		JSXAttributeValue, JSXEmptyExpression, JSXExpression, JSXExpressionContainer,
		ObjectProperty, ObjectPropertyKind, PropertyKey, PropertyKind, StringLiteral,
	},
	diagnostics::OxcDiagnostic,
	span::{Atom, Span},
	syntax::identifier::is_identifier_name,
};

use crate::env::Environment;

/// One argument of an attribute merge, before lowering.
enum Segment<'a> {
	/// A run of consecutive plain attributes.
	Plain(Span, Vec<'a, ObjectPropertyKind<'a>>),
	/// A spread source taken from the input.
	Spread(Span, Expression<'a>),
}

impl<'a> super::JsxLowering<'a> {
	/// Compiles an attribute list into the factory call's second argument.
	///
	/// - no attributes: `None`
	/// - only plain attributes: `{ a: 1, b }`
	/// - a single spread: the spread source itself
	/// - anything else: `Object.assign(...)` over the segments, in order
	pub(crate) fn compile_attributes(
		&mut self,
		env: &Environment,
		items: Vec<'a, JSXAttributeItem<'a>>,
		span: Span,
	) -> Result<Option<Expression<'a>>, OxcDiagnostic> {
		let mut segments = std::vec::Vec::new();

		for item in items {
			match item {
				JSXAttributeItem::Attribute(mut attr) => {
					let attr_span = attr.span;
					let property = self.compile_attribute(env, &mut attr)?;
					match segments.last_mut() {
						Some(Segment::Plain(_, properties)) => properties.push(property),
						_ => {
							segments.push(Segment::Plain(
								attr_span,
								Vec::from_array_in([property], self.allocator),
							));
						}
					}
				}
				JSXAttributeItem::SpreadAttribute(mut spread) => {
					let mut source = self.take_expression(&mut spread.argument);
					self.walk_expression(env, &mut source)?;
					segments.push(Segment::Spread(spread.span, source));
				}
			}
		}

		if segments.len() > 1 {
			return Ok(Some(self.merge_segments(span, segments)));
		}

		Ok(segments.pop().map(|segment| {
			match segment {
				Segment::Plain(span, properties) => self.object(span, properties),
				Segment::Spread(_, source) => source,
			}
		}))
	}

	/// Builds `Object.assign(...)` over two or more segments.
	fn merge_segments(&self, span: Span, segments: std::vec::Vec<Segment<'a>>) -> Expression<'a> {
		let mut arguments = Vec::with_capacity_in(segments.len(), self.allocator);

		for (index, segment) in segments.into_iter().enumerate() {
			let argument = match segment {
				Segment::Plain(span, properties) => self.object(span, properties),
				// The first argument is the object `Object.assign` mutates;
				// a spread source there must be copied, never merged into.
				Segment::Spread(span, source) if index == 0 => self.shallow_copy(span, source),
				Segment::Spread(_, source) => source,
			};
			arguments.push(Argument::from(argument));
		}

		self.object_assign(span, arguments)
	}

	/// Builds `Object.assign({}, source)`.
	fn shallow_copy(&self, span: Span, source: Expression<'a>) -> Expression<'a> {
		let empty = self.object(span, Vec::new_in(self.allocator));
		self.object_assign(
			span,
			Vec::from_array_in([Argument::from(empty), Argument::from(source)], self.allocator),
		)
	}

	/// Compiles a single plain attribute into an object property.
	fn compile_attribute(
		&mut self,
		env: &Environment,
		attr: &mut JSXAttribute<'a>,
	) -> Result<ObjectPropertyKind<'a>, OxcDiagnostic> {
		let name = match &attr.name {
			JSXAttributeName::Identifier(ident) => ident.name,
			JSXAttributeName::NamespacedName(ns) => {
				let joined = format!("{}:{}", ns.namespace.name, ns.name.name);
				Atom::from_in(joined.as_str(), self.allocator)
			}
		};

		let (value, from_shorthand) = match attr.value.take() {
			// `<input disabled />` reads the binding of the same name.
			None => (self.identifier(attr.span, name), true),
			Some(JSXAttributeValue::StringLiteral(literal)) => {
				let value = self.decode_entities(literal.value);
				(self.string_literal(literal.span, value), false)
			}
			Some(JSXAttributeValue::ExpressionContainer(mut container)) => {
				(self.unwrap_container(env, &mut container)?, false)
			}
			Some(JSXAttributeValue::Element(mut element)) => {
				(self.transform_element(env, &mut element)?, false)
			}
			Some(JSXAttributeValue::Fragment(mut fragment)) => {
				(self.transform_fragment(env, &mut fragment)?, false)
			}
		};

		let is_identifier = is_identifier_name(name.as_str());
		let key = if is_identifier {
			PropertyKey::StaticIdentifier(Box::new_in(
				IdentifierName {
					span: attr.span,
					name,
				},
				self.allocator,
			))
		} else {
			PropertyKey::StringLiteral(Box::new_in(
				StringLiteral {
					span: attr.span,
					value: name,
					raw: None,
					lossy: false,
				},
				self.allocator,
			))
		};

		Ok(ObjectPropertyKind::ObjectProperty(Box::new_in(
			ObjectProperty {
				span: attr.span,
				kind: PropertyKind::Init,
				key,
				value,
				method: false,
				shorthand: from_shorthand && is_identifier,
				computed: false,
			},
			self.allocator,
		)))
	}

	/// Moves the expression out of a `{...}` container and lowers it.
	pub(crate) fn unwrap_container(
		&mut self,
		env: &Environment,
		container: &mut JSXExpressionContainer<'a>,
	) -> Result<Expression<'a>, OxcDiagnostic> {
		let span = container.span;
		let expression = std::mem::replace(
			&mut container.expression,
			JSXExpression::EmptyExpression(JSXEmptyExpression { span }),
		);

		if let JSXExpression::EmptyExpression(_) = expression {
			return Err(OxcDiagnostic::error("JSX expression container is empty")
				.with_label(span)
				.with_help("put an expression between the braces, or remove them"));
		}

		let mut expression = expression.into_expression();
		self.walk_expression(env, &mut expression)?;
		Ok(expression)
	}
}
