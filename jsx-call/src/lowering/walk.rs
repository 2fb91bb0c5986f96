//! Generic descent over the non-JSX node kinds.
//!
//! Each statement and expression kind that can contain a nested
//! expression has a descent rule below that walks exactly those child
//! slots. Function-like nodes and the program open a new environment
//! frame; every other rule passes the current environment through.
//! Binding patterns are walked for their default values and computed
//! keys, so parameter defaults resolve inside the function's frame.
//!
//! Kinds without a rule fall into the explicit pass-through arm and are
//! left untouched, *including any JSX nested inside them*. Notable
//! pass-through kinds are class declarations and expressions, optional
//! chains (`a?.b`), update expressions, `import()`, and TypeScript-only
//! wrappers.

use oxc::{
	ast::ast::{
		Argument, ArrayExpressionElement, ArrowFunctionExpression, BindingPattern,
		BindingPatternKind, Declaration, ExportDefaultDeclarationKind, Expression,
		ForStatementInit, ForStatementLeft, FormalParameters, Function, ObjectPropertyKind,
		Program, Statement, VariableDeclaration,
	},
	diagnostics::OxcDiagnostic,
};
use tracing::trace;

use crate::{
	env::Environment,
	scope::{hoisted_names, parameter_names},
};

impl<'a> super::JsxLowering<'a> {
	/// Walks a whole program under a fresh frame holding its hoisted names.
	pub fn walk_program(
		&mut self,
		env: &Environment,
		program: &mut Program<'a>,
	) -> Result<(), OxcDiagnostic> {
		let mut frame = env.extend();
		frame.declare_all(hoisted_names(&program.body)?);
		let env = frame.freeze();
		trace!(depth = env.depth(), "entered program frame");
		self.walk_statements(&env, &mut program.body)
	}

	/// Walks every statement in a list.
	fn walk_statements(
		&mut self,
		env: &Environment,
		statements: &mut [Statement<'a>],
	) -> Result<(), OxcDiagnostic> {
		for statement in statements.iter_mut() {
			self.walk_statement(env, statement)?;
		}
		Ok(())
	}

	/// Walks the rewritable child slots of a statement.
	fn walk_statement(
		&mut self,
		env: &Environment,
		statement: &mut Statement<'a>,
	) -> Result<(), OxcDiagnostic> {
		match statement {
			Statement::BlockStatement(block) => self.walk_statements(env, &mut block.body),
			Statement::ExpressionStatement(stmt) => self.walk_expression(env, &mut stmt.expression),
			Statement::IfStatement(stmt) => {
				self.walk_expression(env, &mut stmt.test)?;
				self.walk_statement(env, &mut stmt.consequent)?;
				if let Some(alternate) = &mut stmt.alternate {
					self.walk_statement(env, alternate)?;
				}
				Ok(())
			}
			Statement::WithStatement(stmt) => {
				self.walk_expression(env, &mut stmt.object)?;
				self.walk_statement(env, &mut stmt.body)
			}
			Statement::SwitchStatement(stmt) => {
				self.walk_expression(env, &mut stmt.discriminant)?;
				for case in stmt.cases.iter_mut() {
					if let Some(test) = &mut case.test {
						self.walk_expression(env, test)?;
					}
					self.walk_statements(env, &mut case.consequent)?;
				}
				Ok(())
			}
			Statement::ThrowStatement(stmt) => self.walk_expression(env, &mut stmt.argument),
			Statement::ReturnStatement(stmt) => {
				match &mut stmt.argument {
					Some(argument) => self.walk_expression(env, argument),
					None => Ok(()),
				}
			}
			Statement::TryStatement(stmt) => {
				self.walk_statements(env, &mut stmt.block.body)?;
				if let Some(handler) = &mut stmt.handler {
					if let Some(param) = &mut handler.param {
						self.walk_pattern(env, &mut param.pattern)?;
					}
					self.walk_statements(env, &mut handler.body.body)?;
				}
				if let Some(finalizer) = &mut stmt.finalizer {
					self.walk_statements(env, &mut finalizer.body)?;
				}
				Ok(())
			}
			Statement::WhileStatement(stmt) => {
				self.walk_expression(env, &mut stmt.test)?;
				self.walk_statement(env, &mut stmt.body)
			}
			Statement::DoWhileStatement(stmt) => {
				self.walk_statement(env, &mut stmt.body)?;
				self.walk_expression(env, &mut stmt.test)
			}
			Statement::ForStatement(stmt) => {
				match &mut stmt.init {
					Some(ForStatementInit::VariableDeclaration(decl)) => {
						self.walk_variable_declaration(env, decl)?;
					}
					Some(init) => {
						if let Some(init) = init.as_expression_mut() {
							self.walk_expression(env, init)?;
						}
					}
					None => {}
				}
				if let Some(test) = &mut stmt.test {
					self.walk_expression(env, test)?;
				}
				if let Some(update) = &mut stmt.update {
					self.walk_expression(env, update)?;
				}
				self.walk_statement(env, &mut stmt.body)
			}
			Statement::ForInStatement(stmt) => {
				if let ForStatementLeft::VariableDeclaration(decl) = &mut stmt.left {
					self.walk_variable_declaration(env, decl)?;
				}
				self.walk_expression(env, &mut stmt.right)?;
				self.walk_statement(env, &mut stmt.body)
			}
			Statement::ForOfStatement(stmt) => {
				if let ForStatementLeft::VariableDeclaration(decl) = &mut stmt.left {
					self.walk_variable_declaration(env, decl)?;
				}
				self.walk_expression(env, &mut stmt.right)?;
				self.walk_statement(env, &mut stmt.body)
			}
			Statement::LabeledStatement(stmt) => self.walk_statement(env, &mut stmt.body),
			Statement::VariableDeclaration(decl) => self.walk_variable_declaration(env, decl),
			Statement::FunctionDeclaration(func) => self.walk_function(env, func, false),
			Statement::ExportNamedDeclaration(export) => {
				match &mut export.declaration {
					Some(Declaration::VariableDeclaration(decl)) => {
						self.walk_variable_declaration(env, decl)
					}
					Some(Declaration::FunctionDeclaration(func)) => self.walk_function(env, func, false),
					_ => Ok(()),
				}
			}
			Statement::ExportDefaultDeclaration(export) => {
				match &mut export.declaration {
					ExportDefaultDeclarationKind::FunctionDeclaration(func) => {
						self.walk_function(env, func, false)
					}
					kind => {
						match kind.as_expression_mut() {
							Some(expr) => self.walk_expression(env, expr),
							None => Ok(()),
						}
					}
				}
			}
			// Pass-through: class declarations, imports, empty/debugger/
			// break/continue statements, and TypeScript declarations.
			_ => Ok(()),
		}
	}

	/// Walks the initializers of a variable declaration, including
	/// default values inside destructuring patterns.
	fn walk_variable_declaration(
		&mut self,
		env: &Environment,
		decl: &mut VariableDeclaration<'a>,
	) -> Result<(), OxcDiagnostic> {
		for declarator in decl.declarations.iter_mut() {
			self.walk_pattern(env, &mut declarator.id)?;
			if let Some(init) = &mut declarator.init {
				self.walk_expression(env, init)?;
			}
		}
		Ok(())
	}

	/// Walks a function's parameter defaults and body under a new frame
	/// holding its parameters, its hoisted names, and (for named function
	/// expressions) its own name.
	fn walk_function(
		&mut self,
		env: &Environment,
		func: &mut Function<'a>,
		binds_own_name: bool,
	) -> Result<(), OxcDiagnostic> {
		let mut frame = env.extend();
		if binds_own_name {
			if let Some(id) = &func.id {
				frame.declare(id.name.as_str());
			}
		}
		frame.declare_all(parameter_names(&func.params));
		if let Some(body) = &func.body {
			frame.declare_all(hoisted_names(&body.statements)?);
		}
		let env = frame.freeze();
		trace!(depth = env.depth(), "entered function frame");

		self.walk_parameters(&env, &mut func.params)?;
		// Bodiless (declare-only) functions have nothing else to rewrite.
		match &mut func.body {
			Some(body) => self.walk_statements(&env, &mut body.statements),
			None => Ok(()),
		}
	}

	/// Walks an arrow function's parameter defaults and body under a
	/// new frame.
	fn walk_arrow(
		&mut self,
		env: &Environment,
		arrow: &mut ArrowFunctionExpression<'a>,
	) -> Result<(), OxcDiagnostic> {
		let mut frame = env.extend();
		frame.declare_all(parameter_names(&arrow.params));
		frame.declare_all(hoisted_names(&arrow.body.statements)?);
		let env = frame.freeze();
		trace!(depth = env.depth(), "entered arrow frame");

		self.walk_parameters(&env, &mut arrow.params)?;
		self.walk_statements(&env, &mut arrow.body.statements)
	}

	/// Walks the default values in a parameter list.
	fn walk_parameters(
		&mut self,
		env: &Environment,
		params: &mut FormalParameters<'a>,
	) -> Result<(), OxcDiagnostic> {
		for param in params.items.iter_mut() {
			self.walk_pattern(env, &mut param.pattern)?;
		}
		if let Some(rest) = &mut params.rest {
			self.walk_pattern(env, &mut rest.argument)?;
		}
		Ok(())
	}

	/// Walks the default values and computed keys of a binding pattern.
	fn walk_pattern(
		&mut self,
		env: &Environment,
		pattern: &mut BindingPattern<'a>,
	) -> Result<(), OxcDiagnostic> {
		match &mut pattern.kind {
			BindingPatternKind::BindingIdentifier(_) => Ok(()),
			BindingPatternKind::AssignmentPattern(assign) => {
				self.walk_pattern(env, &mut assign.left)?;
				self.walk_expression(env, &mut assign.right)
			}
			BindingPatternKind::ObjectPattern(object) => {
				for property in object.properties.iter_mut() {
					if property.computed {
						if let Some(key) = property.key.as_expression_mut() {
							self.walk_expression(env, key)?;
						}
					}
					self.walk_pattern(env, &mut property.value)?;
				}
				match &mut object.rest {
					Some(rest) => self.walk_pattern(env, &mut rest.argument),
					None => Ok(()),
				}
			}
			BindingPatternKind::ArrayPattern(array) => {
				for element in array.elements.iter_mut().flatten() {
					self.walk_pattern(env, element)?;
				}
				match &mut array.rest {
					Some(rest) => self.walk_pattern(env, &mut rest.argument),
					None => Ok(()),
				}
			}
		}
	}

	/// Walks a call or `new` argument list.
	fn walk_arguments(
		&mut self,
		env: &Environment,
		arguments: &mut [Argument<'a>],
	) -> Result<(), OxcDiagnostic> {
		for argument in arguments.iter_mut() {
			match argument {
				Argument::SpreadElement(spread) => self.walk_expression(env, &mut spread.argument)?,
				argument => {
					if let Some(expr) = argument.as_expression_mut() {
						self.walk_expression(env, expr)?;
					}
				}
			}
		}
		Ok(())
	}

	/// Rewrites an expression slot: JSX kinds are replaced by their
	/// lowered form, everything else is descended into.
	pub fn walk_expression(
		&mut self,
		env: &Environment,
		expr: &mut Expression<'a>,
	) -> Result<(), OxcDiagnostic> {
		match expr {
			// The transform set; these own their entire subtree.
			Expression::JSXElement(element) => {
				let lowered = self.transform_element(env, element)?;
				*expr = lowered;
				Ok(())
			}
			Expression::JSXFragment(fragment) => {
				let lowered = self.transform_fragment(env, fragment)?;
				*expr = lowered;
				Ok(())
			}

			// Descent rules.
			Expression::FunctionExpression(func) => self.walk_function(env, func, true),
			Expression::ArrowFunctionExpression(arrow) => self.walk_arrow(env, arrow),
			Expression::SequenceExpression(seq) => {
				for expr in seq.expressions.iter_mut() {
					self.walk_expression(env, expr)?;
				}
				Ok(())
			}
			Expression::ArrayExpression(array) => {
				for element in array.elements.iter_mut() {
					match element {
						ArrayExpressionElement::SpreadElement(spread) => {
							self.walk_expression(env, &mut spread.argument)?;
						}
						element => {
							if let Some(expr) = element.as_expression_mut() {
								self.walk_expression(env, expr)?;
							}
						}
					}
				}
				Ok(())
			}
			Expression::ObjectExpression(object) => {
				for property in object.properties.iter_mut() {
					match property {
						ObjectPropertyKind::ObjectProperty(property) => {
							if property.computed {
								if let Some(key) = property.key.as_expression_mut() {
									self.walk_expression(env, key)?;
								}
							}
							self.walk_expression(env, &mut property.value)?;
						}
						ObjectPropertyKind::SpreadProperty(spread) => {
							self.walk_expression(env, &mut spread.argument)?;
						}
					}
				}
				Ok(())
			}
			Expression::ConditionalExpression(cond) => {
				self.walk_expression(env, &mut cond.test)?;
				self.walk_expression(env, &mut cond.consequent)?;
				self.walk_expression(env, &mut cond.alternate)
			}
			Expression::UnaryExpression(unary) => self.walk_expression(env, &mut unary.argument),
			Expression::BinaryExpression(binary) => {
				self.walk_expression(env, &mut binary.left)?;
				self.walk_expression(env, &mut binary.right)
			}
			Expression::LogicalExpression(logical) => {
				self.walk_expression(env, &mut logical.left)?;
				self.walk_expression(env, &mut logical.right)
			}
			// Assignment targets cannot hold JSX; only the value is walked.
			Expression::AssignmentExpression(assign) => self.walk_expression(env, &mut assign.right),
			Expression::CallExpression(call) => {
				self.walk_expression(env, &mut call.callee)?;
				self.walk_arguments(env, &mut call.arguments)
			}
			Expression::NewExpression(new) => {
				self.walk_expression(env, &mut new.callee)?;
				self.walk_arguments(env, &mut new.arguments)
			}
			Expression::StaticMemberExpression(member) => {
				self.walk_expression(env, &mut member.object)
			}
			Expression::ComputedMemberExpression(member) => {
				self.walk_expression(env, &mut member.object)?;
				self.walk_expression(env, &mut member.expression)
			}
			Expression::PrivateFieldExpression(member) => {
				self.walk_expression(env, &mut member.object)
			}
			Expression::ParenthesizedExpression(paren) => {
				self.walk_expression(env, &mut paren.expression)
			}
			Expression::TemplateLiteral(template) => {
				for expr in template.expressions.iter_mut() {
					self.walk_expression(env, expr)?;
				}
				Ok(())
			}
			Expression::TaggedTemplateExpression(tagged) => {
				self.walk_expression(env, &mut tagged.tag)?;
				for expr in tagged.quasi.expressions.iter_mut() {
					self.walk_expression(env, expr)?;
				}
				Ok(())
			}
			Expression::AwaitExpression(await_expr) => {
				self.walk_expression(env, &mut await_expr.argument)
			}
			Expression::YieldExpression(yield_expr) => {
				match &mut yield_expr.argument {
					Some(argument) => self.walk_expression(env, argument),
					None => Ok(()),
				}
			}

			// Pass-through: literals, identifiers, `this`, classes,
			// optional chains, update expressions, `import()`, meta
			// properties, and TypeScript-only wrappers.
			_ => Ok(()),
		}
	}
}
