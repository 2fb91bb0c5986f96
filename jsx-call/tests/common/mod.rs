#![allow(dead_code)]

use jsx_call::Environment;
use oxc::{
	allocator::{Allocator, Box},
	ast::ast::{Expression, NullLiteral, Statement},
	codegen::Codegen,
	diagnostics::OxcDiagnostic,
	parser::Parser,
	span::{SourceType, Span},
};

/// Parses `source` and prints it back without lowering.
pub fn print(source: &str) -> String {
	let allocator = Allocator::default();
	let parsed = Parser::new(&allocator, source, SourceType::jsx()).parse();
	assert!(
		parsed.errors.is_empty(),
		"failed to parse {source:?}: {:?}",
		parsed.errors
	);
	Codegen::new().build(&parsed.program).code
}

/// Parses, lowers, and prints `source`.
pub fn lower(source: &str) -> String {
	let allocator = Allocator::default();
	let parsed = Parser::new(&allocator, source, SourceType::jsx()).parse();
	assert!(
		parsed.errors.is_empty(),
		"failed to parse {source:?}: {:?}",
		parsed.errors
	);
	let program = jsx_call::transform(&allocator, parsed.program).expect("lowering failed");
	Codegen::new().build(&program).code
}

/// Parses and lowers `source`, expecting the pass to fail.
pub fn lower_err(source: &str) -> OxcDiagnostic {
	let allocator = Allocator::default();
	let parsed = Parser::new(&allocator, source, SourceType::jsx()).parse();
	assert!(
		parsed.errors.is_empty(),
		"failed to parse {source:?}: {:?}",
		parsed.errors
	);
	match jsx_call::transform(&allocator, parsed.program) {
		Ok(program) => {
			panic!(
				"expected lowering to fail, got:\n{}",
				Codegen::new().build(&program).code
			)
		}
		Err(error) => error,
	}
}

/// Parses `source` as a single expression statement, lowers the
/// expression on its own under `env`, and prints the result.
pub fn lower_expression(source: &str, env: &Environment) -> String {
	let allocator = Allocator::default();
	let parsed = Parser::new(&allocator, source, SourceType::jsx()).parse();
	assert!(
		parsed.errors.is_empty(),
		"failed to parse {source:?}: {:?}",
		parsed.errors
	);

	let mut program = parsed.program;
	let Some(Statement::ExpressionStatement(stmt)) = program.body.first_mut() else {
		panic!("{source:?} is not an expression statement");
	};
	let placeholder =
		Expression::NullLiteral(Box::new_in(NullLiteral { span: Span::default() }, &allocator));
	let expression = std::mem::replace(&mut stmt.expression, placeholder);
	stmt.expression =
		jsx_call::transform_expression(&allocator, env, expression).expect("lowering failed");

	Codegen::new().build(&program).code
}

/// Asserts that lowering `jsx` prints the same code as `js`.
macro_rules! assert_lowers {
	($jsx:expr, $js:expr $(,)?) => {
		assert_eq!(
			$crate::common::lower($jsx),
			$crate::common::print($js),
			"lowering {:?}",
			$jsx
		);
	};
}
