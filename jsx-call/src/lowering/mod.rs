//! The JSX lowering pass.
//!
//! [`JsxLowering`] owns the node builders shared by the walker and the
//! element-specific compilers; each concern lives in its own module:
//!
//! - [`walk`]: generic descent over non-JSX node kinds
//! - [`element`]: the element and fragment transforms
//! - [`callee`]: tag resolution
//! - [`attributes`]: attribute partitioning and merging
//! - [`children`]: child-list normalization
mod attributes;
mod callee;
mod children;
mod element;
mod walk;

use std::cell::Cell;

use oxc::{
	allocator::{Allocator, Box, FromIn, Vec},
	ast::ast::{
		Argument, CallExpression, Expression, IdentifierName, IdentifierReference, NullLiteral,
		ObjectExpression, ObjectPropertyKind, StaticMemberExpression, StringLiteral,
	},
	span::{Atom, Span},
};

use crate::constants::{ASSIGN, OBJECT};

/// Rewrites JSX nodes into factory calls.
pub struct JsxLowering<'a> {
	/// The underlying Bumpalo allocator.
	pub allocator: &'a Allocator,
	/// How many elements and fragments have been lowered so far.
	pub lowered: usize,
}

impl<'a> JsxLowering<'a> {
	/// Creates a new lowering pass using the given Bumpalo allocator.
	pub fn new_in(allocator: &'a Allocator) -> Self {
		Self {
			allocator,
			lowered: 0,
		}
	}

	/// Moves an expression out of its slot, leaving a `null` literal behind.
	fn take_expression(&self, slot: &mut Expression<'a>) -> Expression<'a> {
		let span = Span::default();
		std::mem::replace(slot, self.null_literal(span))
	}

	/// Builds an unresolved identifier reference.
	fn identifier(&self, span: Span, name: Atom<'a>) -> Expression<'a> {
		Expression::Identifier(Box::new_in(
			IdentifierReference {
				span,
				name,
				reference_id: Cell::new(None),
			},
			self.allocator,
		))
	}

	/// Builds a string literal.
	fn string_literal(&self, span: Span, value: Atom<'a>) -> Expression<'a> {
		Expression::StringLiteral(Box::new_in(
			StringLiteral {
				span,
				value,
				raw: None,
				lossy: false,
			},
			self.allocator,
		))
	}

	/// Decodes HTML entities (`&amp;`, `&#169;`, ...) in JSX text.
	fn decode_entities(&self, value: Atom<'a>) -> Atom<'a> {
		if !value.contains('&') {
			return value;
		}
		let decoded = htmlentity::entity::decode(value.as_bytes()).bytes();
		let decoded = String::from_utf8_lossy(decoded.as_ref());
		Atom::from_in(decoded.as_ref(), self.allocator)
	}

	/// Builds a `null` literal.
	fn null_literal(&self, span: Span) -> Expression<'a> {
		Expression::NullLiteral(Box::new_in(NullLiteral { span }, self.allocator))
	}

	/// Builds `object.property`.
	fn static_member(&self, span: Span, object: Expression<'a>, property: Atom<'a>) -> Expression<'a> {
		Expression::StaticMemberExpression(Box::new_in(
			StaticMemberExpression {
				span,
				object,
				property: IdentifierName {
					span,
					name: property,
				},
				optional: false,
			},
			self.allocator,
		))
	}

	/// Builds an object literal from already-lowered properties.
	fn object(&self, span: Span, properties: Vec<'a, ObjectPropertyKind<'a>>) -> Expression<'a> {
		Expression::ObjectExpression(Box::new_in(
			ObjectExpression {
				span,
				properties,
				trailing_comma: None,
			},
			self.allocator,
		))
	}

	/// Builds `callee(...arguments)`.
	fn call(
		&self,
		span: Span,
		callee: Expression<'a>,
		arguments: Vec<'a, Argument<'a>>,
	) -> Expression<'a> {
		Expression::CallExpression(Box::new_in(
			CallExpression {
				span,
				callee,
				type_arguments: None,
				arguments,
				optional: false,
				pure: false,
			},
			self.allocator,
		))
	}

	/// Builds `Object.assign(...arguments)`, the attribute merge helper.
	fn object_assign(&self, span: Span, arguments: Vec<'a, Argument<'a>>) -> Expression<'a> {
		let callee = self.static_member(span, self.identifier(span, OBJECT), ASSIGN);
		self.call(span, callee, arguments)
	}
}
