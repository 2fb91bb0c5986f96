//! Computes the names hoisted into a function or program frame.
//!
//! Declarations are visible throughout the function that contains
//! them regardless of block nesting, but never leak out of nested
//! function bodies. The collector therefore descends through every
//! statement form and stops at function boundaries.

use std::collections::HashSet;

use oxc::{
	ast::ast::{
		BindingPattern, BindingPatternKind, Class, Declaration, ExportDefaultDeclarationKind,
		ForStatementInit, ForStatementLeft, FormalParameters, Function, ImportDeclaration,
		ImportDeclarationSpecifier, Statement, VariableDeclaration,
	},
	diagnostics::OxcDiagnostic,
};

/// Returns the set of names hoisted into the frame whose body is
/// `statements`.
///
/// Fails if a declaration that must carry a name does not.
pub fn hoisted_names(statements: &[Statement<'_>]) -> Result<HashSet<String>, OxcDiagnostic> {
	let mut names = HashSet::new();
	collect_statements(statements, &mut names)?;
	Ok(names)
}

/// Returns every name bound by a function's formal parameters.
pub fn parameter_names(params: &FormalParameters<'_>) -> HashSet<String> {
	let mut names = HashSet::new();
	for param in params.items.iter() {
		collect_pattern(&param.pattern, &mut names);
	}
	if let Some(rest) = &params.rest {
		collect_pattern(&rest.argument, &mut names);
	}
	names
}

/// Collects the names declared by a list of statements.
fn collect_statements(
	statements: &[Statement<'_>],
	names: &mut HashSet<String>,
) -> Result<(), OxcDiagnostic> {
	for statement in statements {
		collect_statement(statement, names)?;
	}
	Ok(())
}

/// Collects the names declared by a single statement.
fn collect_statement(
	statement: &Statement<'_>,
	names: &mut HashSet<String>,
) -> Result<(), OxcDiagnostic> {
	match statement {
		Statement::VariableDeclaration(decl) => {
			collect_variable_declaration(decl, names);
			Ok(())
		}
		Statement::FunctionDeclaration(func) => collect_function_declaration(func, names),
		Statement::ClassDeclaration(class) => {
			collect_class_declaration(class, names);
			Ok(())
		}
		Statement::ImportDeclaration(import) => {
			collect_import_declaration(import, names);
			Ok(())
		}
		Statement::ExportNamedDeclaration(export) => {
			match &export.declaration {
				Some(Declaration::VariableDeclaration(decl)) => {
					collect_variable_declaration(decl, names);
				}
				Some(Declaration::FunctionDeclaration(func)) => {
					collect_function_declaration(func, names)?;
				}
				Some(Declaration::ClassDeclaration(class)) => {
					collect_class_declaration(class, names);
				}
				_ => {}
			}
			Ok(())
		}
		Statement::ExportDefaultDeclaration(export) => {
			// `export default function () {}` is allowed to be anonymous.
			match &export.declaration {
				ExportDefaultDeclarationKind::FunctionDeclaration(func) => {
					if let Some(id) = &func.id {
						names.insert(id.name.to_string());
					}
				}
				ExportDefaultDeclarationKind::ClassDeclaration(class) => {
					collect_class_declaration(class, names);
				}
				_ => {}
			}
			Ok(())
		}
		Statement::BlockStatement(block) => collect_statements(&block.body, names),
		Statement::IfStatement(stmt) => {
			collect_statement(&stmt.consequent, names)?;
			if let Some(alternate) = &stmt.alternate {
				collect_statement(alternate, names)?;
			}
			Ok(())
		}
		Statement::ForStatement(stmt) => {
			if let Some(ForStatementInit::VariableDeclaration(decl)) = &stmt.init {
				collect_variable_declaration(decl, names);
			}
			collect_statement(&stmt.body, names)
		}
		Statement::ForInStatement(stmt) => {
			if let ForStatementLeft::VariableDeclaration(decl) = &stmt.left {
				collect_variable_declaration(decl, names);
			}
			collect_statement(&stmt.body, names)
		}
		Statement::ForOfStatement(stmt) => {
			if let ForStatementLeft::VariableDeclaration(decl) = &stmt.left {
				collect_variable_declaration(decl, names);
			}
			collect_statement(&stmt.body, names)
		}
		Statement::WhileStatement(stmt) => collect_statement(&stmt.body, names),
		Statement::DoWhileStatement(stmt) => collect_statement(&stmt.body, names),
		Statement::LabeledStatement(stmt) => collect_statement(&stmt.body, names),
		Statement::WithStatement(stmt) => collect_statement(&stmt.body, names),
		Statement::SwitchStatement(stmt) => {
			for case in stmt.cases.iter() {
				collect_statements(&case.consequent, names)?;
			}
			Ok(())
		}
		Statement::TryStatement(stmt) => {
			collect_statements(&stmt.block.body, names)?;
			if let Some(handler) = &stmt.handler {
				// `catch {}` binds nothing.
				if let Some(param) = &handler.param {
					collect_pattern(&param.pattern, names);
				}
				collect_statements(&handler.body.body, names)?;
			}
			if let Some(finalizer) = &stmt.finalizer {
				collect_statements(&finalizer.body, names)?;
			}
			Ok(())
		}
		// Expression statements, returns, throws, and the like cannot
		// declare anything visible to the enclosing frame.
		_ => Ok(()),
	}
}

/// Collects every name bound by a variable declaration.
fn collect_variable_declaration(decl: &VariableDeclaration<'_>, names: &mut HashSet<String>) {
	for declarator in decl.declarations.iter() {
		collect_pattern(&declarator.id, names);
	}
}

/// Collects a function declaration's own name. Its body is a
/// separate frame and is not visited.
fn collect_function_declaration(
	func: &Function<'_>,
	names: &mut HashSet<String>,
) -> Result<(), OxcDiagnostic> {
	let Some(id) = &func.id else {
		return Err(OxcDiagnostic::error("function declaration has no name")
			.with_label(func.span)
			.with_help("only `export default` function declarations may be anonymous"));
	};
	names.insert(id.name.to_string());
	Ok(())
}

/// Collects a class declaration's name, if any.
fn collect_class_declaration(class: &Class<'_>, names: &mut HashSet<String>) {
	if let Some(id) = &class.id {
		names.insert(id.name.to_string());
	}
}

/// Collects the local names introduced by an import declaration.
fn collect_import_declaration(import: &ImportDeclaration<'_>, names: &mut HashSet<String>) {
	let Some(specifiers) = &import.specifiers else {
		return;
	};
	for specifier in specifiers.iter() {
		let local = match specifier {
			ImportDeclarationSpecifier::ImportSpecifier(spec) => &spec.local,
			ImportDeclarationSpecifier::ImportDefaultSpecifier(spec) => &spec.local,
			ImportDeclarationSpecifier::ImportNamespaceSpecifier(spec) => &spec.local,
		};
		names.insert(local.name.to_string());
	}
}

/// Collects every identifier bound by a (possibly destructuring) pattern.
fn collect_pattern(pattern: &BindingPattern<'_>, names: &mut HashSet<String>) {
	match &pattern.kind {
		BindingPatternKind::BindingIdentifier(ident) => {
			names.insert(ident.name.to_string());
		}
		BindingPatternKind::ObjectPattern(object) => {
			for property in object.properties.iter() {
				collect_pattern(&property.value, names);
			}
			if let Some(rest) = &object.rest {
				collect_pattern(&rest.argument, names);
			}
		}
		BindingPatternKind::ArrayPattern(array) => {
			for element in array.elements.iter().flatten() {
				collect_pattern(element, names);
			}
			if let Some(rest) = &array.rest {
				collect_pattern(&rest.argument, names);
			}
		}
		BindingPatternKind::AssignmentPattern(assign) => collect_pattern(&assign.left, names),
	}
}

#[cfg(test)]
mod tests {
	use oxc::{allocator::Allocator, parser::Parser, span::SourceType};

	use super::*;

	fn names_of(source: &str) -> Vec<String> {
		let allocator = Allocator::default();
		let parsed = Parser::new(&allocator, source, SourceType::jsx()).parse();
		assert!(parsed.errors.is_empty(), "parse errors: {:?}", parsed.errors);
		let mut names: Vec<String> = hoisted_names(&parsed.program.body)
			.expect("hoisting failed")
			.into_iter()
			.collect();
		names.sort();
		names
	}

	#[test]
	fn collects_declarations_through_blocks() {
		assert_eq!(
			names_of("var a = 1; { let b; if (x) { const c = 2; } } for (var i = 0;;) {}"),
			["a", "b", "c", "i"]
		);
	}

	#[test]
	fn collects_destructured_names() {
		assert_eq!(
			names_of("const { a, b: [c, ...d], e = 1, ...f } = obj;"),
			["a", "c", "d", "e", "f"]
		);
	}

	#[test]
	fn function_declarations_contribute_only_their_name() {
		assert_eq!(names_of("function outer(p) { var inner; }"), ["outer"]);
	}

	#[test]
	fn function_expressions_are_scope_boundaries() {
		assert_eq!(
			names_of("const f = function () { var hidden; }; const g = () => { var also; };"),
			["f", "g"]
		);
	}

	#[test]
	fn catch_parameters_and_handler_bodies() {
		assert_eq!(
			names_of("try { var a; } catch (err) { var b; } finally { var c; }"),
			["a", "b", "c", "err"]
		);
		assert_eq!(names_of("try {} catch { var b; }"), ["b"]);
	}

	#[test]
	fn classes_and_imports_are_bindings() {
		assert_eq!(
			names_of("import Card, { Row as R } from './card'; import * as ui from 'ui'; class Panel {}"),
			["Card", "Panel", "R", "ui"]
		);
	}

	#[test]
	fn anonymous_default_export_is_not_an_error() {
		assert!(names_of("export default function () {}").is_empty());
	}

	#[test]
	fn parameter_names_cover_patterns_and_rest() {
		let allocator = Allocator::default();
		let parsed =
			Parser::new(&allocator, "function f(a, { b }, [c], ...d) {}", SourceType::jsx())
				.parse();
		let Some(Statement::FunctionDeclaration(func)) = parsed.program.body.first() else {
			panic!("expected a function declaration");
		};
		let mut names: Vec<String> = parameter_names(&func.params).into_iter().collect();
		names.sort();
		assert_eq!(names, ["a", "b", "c", "d"]);
	}
}
