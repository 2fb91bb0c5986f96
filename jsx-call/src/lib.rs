//! # jsx-call
//! Lowers JSX in an [`oxc`] syntax tree into plain factory calls.
//!
//! Every element becomes `JSX(tag, attributes, children)`:
//!
//! - `tag` is a reference (`Card`, `ui.Card`) when its root name is
//!   bound in the enclosing scope, and a string (`"div"`, `"ui.card"`)
//!   otherwise.
//! - `attributes` is an object literal, a lone spread source, or an
//!   `Object.assign(...)` merge that preserves source order.
//! - `children` is an array with insignificant whitespace removed.
//!
//! Absent trailing arguments are omitted; an absent argument that
//! precedes a present one is passed as `null`. Fragments lower to their
//! children array.
//!
//! Parsing and code generation are left to the caller.

mod constants;
mod env;
mod lowering;
mod scope;

use oxc::{
	allocator::Allocator,
	ast::ast::{Expression, Program},
	diagnostics::OxcDiagnostic,
};
use tracing::debug;

pub use crate::{
	constants::FACTORY_IDENT,
	env::{Environment, FrameBuilder},
	scope::{hoisted_names, parameter_names},
};
use crate::lowering::JsxLowering;

/// Lowers every JSX node in `program`.
///
/// This is also the pipeline hook: it is invoked once on the root with
/// no prior environment, and the caller substitutes the returned
/// program for the one it passed in.
///
/// On error the program is consumed and only the diagnostic, labelled
/// with the offending node's span, is returned.
pub fn transform<'a>(
	allocator: &'a Allocator,
	mut program: Program<'a>,
) -> Result<Program<'a>, OxcDiagnostic> {
	let mut lowering = JsxLowering::new_in(allocator);
	lowering.walk_program(&Environment::default(), &mut program)?;
	debug!(lowered = lowering.lowered, "lowered JSX in program");
	Ok(program)
}

/// Lowers every JSX node in a single expression, resolving tag names
/// against an externally supplied environment.
pub fn transform_expression<'a>(
	allocator: &'a Allocator,
	env: &Environment,
	mut expression: Expression<'a>,
) -> Result<Expression<'a>, OxcDiagnostic> {
	let mut lowering = JsxLowering::new_in(allocator);
	lowering.walk_expression(env, &mut expression)?;
	debug!(lowered = lowering.lowered, "lowered JSX in expression");
	Ok(expression)
}
