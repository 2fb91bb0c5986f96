use oxc::{
	allocator::{Box, FromIn},
	ast::ast::{
		Expression, JSXElementName, JSXIdentifier, JSXMemberExpressionObject, ThisExpression,
	},
	span::{Atom, GetSpan, Span},
};
use tracing::trace;

use crate::env::Environment;

/// The leftmost segment of a tag path.
enum TagRoot<'n> {
	/// A plain name, looked up in the environment.
	Name(&'n str),
	/// `this`, which is always a reference.
	This,
	/// A namespaced name (`svg:rect`), which is never a reference.
	Namespaced,
}

impl<'a> super::JsxLowering<'a> {
	/// Resolves an element's tag into the factory call's first argument:
	/// a reference chain when the root name is bound, otherwise the
	/// dot-joined tag name as a string.
	pub(crate) fn resolve_callee(
		&self,
		env: &Environment,
		name: &JSXElementName<'a>,
	) -> Expression<'a> {
		let bound = match tag_root(name) {
			TagRoot::Name(root) => env.is_bound(root),
			TagRoot::This => true,
			TagRoot::Namespaced => false,
		};

		let span = name.span();
		if bound {
			trace!(bound, "resolved tag to a reference");
			return self.tag_to_expression(name);
		}

		let tag = flatten_tag(name);
		trace!(bound, tag = %tag, "resolved tag to a literal");
		self.string_literal(span, Atom::from_in(tag.as_str(), self.allocator))
	}

	/// Rebuilds a bound tag path as identifier and member expressions.
	fn tag_to_expression(&self, name: &JSXElementName<'a>) -> Expression<'a> {
		match name {
			JSXElementName::Identifier(ident) => self.identifier(ident.span, ident.name),
			JSXElementName::IdentifierReference(ident) => self.identifier(ident.span, ident.name),
			JSXElementName::MemberExpression(member) => {
				self.member_to_expression(&member.object, &member.property, member.span)
			}
			JSXElementName::ThisExpression(this) => self.this_expression(this.span),
			JSXElementName::NamespacedName(ns) => {
				let tag = flatten_tag(name);
				self.string_literal(ns.span, Atom::from_in(tag.as_str(), self.allocator))
			}
		}
	}

	/// Helper for converting a JSX member expression to an expression.
	fn member_to_expression(
		&self,
		object: &JSXMemberExpressionObject<'a>,
		property: &JSXIdentifier<'a>,
		span: Span,
	) -> Expression<'a> {
		let object = match object {
			JSXMemberExpressionObject::ThisExpression(this) => self.this_expression(this.span),
			JSXMemberExpressionObject::IdentifierReference(ident) => {
				self.identifier(ident.span, ident.name)
			}
			JSXMemberExpressionObject::MemberExpression(member) => {
				self.member_to_expression(&member.object, &member.property, member.span)
			}
		};
		self.static_member(span, object, property.name)
	}

	/// Builds a `this` expression.
	fn this_expression(&self, span: Span) -> Expression<'a> {
		Expression::ThisExpression(Box::new_in(ThisExpression { span }, self.allocator))
	}
}

/// Finds the leftmost segment of a tag path.
fn tag_root<'n>(name: &'n JSXElementName<'_>) -> TagRoot<'n> {
	match name {
		JSXElementName::Identifier(ident) => TagRoot::Name(ident.name.as_str()),
		JSXElementName::IdentifierReference(ident) => TagRoot::Name(ident.name.as_str()),
		JSXElementName::NamespacedName(_) => TagRoot::Namespaced,
		JSXElementName::ThisExpression(_) => TagRoot::This,
		JSXElementName::MemberExpression(member) => member_root(&member.object),
	}
}

/// Finds the leftmost segment of a member tag's object.
fn member_root<'n>(object: &'n JSXMemberExpressionObject<'_>) -> TagRoot<'n> {
	match object {
		JSXMemberExpressionObject::IdentifierReference(ident) => TagRoot::Name(ident.name.as_str()),
		JSXMemberExpressionObject::MemberExpression(member) => member_root(&member.object),
		JSXMemberExpressionObject::ThisExpression(_) => TagRoot::This,
	}
}

/// Joins a tag path's segments with dots (`a.b.c`).
fn flatten_tag(name: &JSXElementName<'_>) -> String {
	match name {
		JSXElementName::Identifier(ident) => ident.name.to_string(),
		JSXElementName::IdentifierReference(ident) => ident.name.to_string(),
		JSXElementName::NamespacedName(ns) => format!("{}:{}", ns.namespace.name, ns.name.name),
		JSXElementName::ThisExpression(_) => "this".to_string(),
		JSXElementName::MemberExpression(member) => {
			format!("{}.{}", flatten_object(&member.object), member.property.name)
		}
	}
}

/// Joins a member tag's object segments with dots.
fn flatten_object(object: &JSXMemberExpressionObject<'_>) -> String {
	match object {
		JSXMemberExpressionObject::IdentifierReference(ident) => ident.name.to_string(),
		JSXMemberExpressionObject::MemberExpression(member) => {
			format!("{}.{}", flatten_object(&member.object), member.property.name)
		}
		JSXMemberExpressionObject::ThisExpression(_) => "this".to_string(),
	}
}
