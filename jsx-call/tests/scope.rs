#![allow(missing_docs, clippy::missing_docs_in_private_items)]

#[macro_use]
mod common;

use common::{lower_expression, print};
use jsx_call::Environment;

#[test]
fn parameters_are_bound_inside_the_function() {
	assert_lowers!(
		"function render(Item) { return <Item/>; }",
		"function render(Item) { return JSX(Item); }"
	);
	assert_lowers!(
		"const render = ({ Item }, ...[Rest]) => <Rest><Item/></Rest>;",
		"const render = ({ Item }, ...[Rest]) => JSX(Rest, null, [JSX(Item)]);"
	);
}

#[test]
fn parameters_do_not_leak_out() {
	assert_lowers!(
		"function f(Item) {} <Item/>;",
		r#"function f(Item) {} JSX("Item");"#
	);
}

#[test]
fn declarations_are_hoisted_above_their_use() {
	assert_lowers!("<Card/>; var Card = 1;", "JSX(Card); var Card = 1;");
	assert_lowers!(
		"function App() { return <Card/>; } function Card() {}",
		"function App() { return JSX(Card); } function Card() {}"
	);
	assert_lowers!(
		"if (x) { <Card/>; } else { let Card; }",
		"if (x) { JSX(Card); } else { let Card; }"
	);
}

#[test]
fn nested_function_locals_stay_local() {
	assert_lowers!(
		"function a() { var Card; } function b() { return <Card/>; }",
		r#"function a() { var Card; } function b() { return JSX("Card"); }"#
	);
	assert_lowers!(
		"const a = () => { let Card; }; <Card/>;",
		r#"const a = () => { let Card; }; JSX("Card");"#
	);
}

#[test]
fn inner_functions_see_outer_bindings() {
	assert_lowers!(
		"function a() { var Card; return () => () => <Card/>; }",
		"function a() { var Card; return () => () => JSX(Card); }"
	);
}

#[test]
fn catch_parameters_are_bindings() {
	assert_lowers!(
		"try {} catch (Fallback) { <Fallback/>; }",
		"try {} catch (Fallback) { JSX(Fallback); }"
	);
	assert_lowers!(
		"try {} catch ({ Fallback }) { <Fallback/>; }",
		"try {} catch ({ Fallback }) { JSX(Fallback); }"
	);
}

#[test]
fn imports_and_classes_are_bindings() {
	assert_lowers!(
		r#"import Card from "./card"; import * as ui from "ui"; <Card/>; <ui.Row/>;"#,
		r#"import Card from "./card"; import * as ui from "ui"; JSX(Card); JSX(ui.Row);"#
	);
	assert_lowers!("class Panel {} <Panel/>;", "class Panel {} JSX(Panel);");
}

#[test]
fn named_function_expressions_bind_their_own_name() {
	assert_lowers!(
		"const f = function Tree() { return <Tree/>; };",
		"const f = function Tree() { return JSX(Tree); };"
	);
	assert_lowers!(
		"const f = function Tree() {}; <Tree/>;",
		r#"const f = function Tree() {}; JSX("Tree");"#
	);
}

#[test]
fn member_tags_resolve_by_their_root() {
	assert_lowers!(
		"const ui = {}; <ui.Button.Primary/>;",
		"const ui = {}; JSX(ui.Button.Primary);"
	);
	assert_lowers!(
		"const Button = {}; <ui.Button/>;",
		r#"const Button = {}; JSX("ui.Button");"#
	);
}

#[test]
fn namespaced_tags_never_resolve() {
	assert_lowers!("const svg = {}; <svg:rect/>;", r#"const svg = {}; JSX("svg:rect");"#);
}

#[test]
fn expressions_resolve_against_a_given_environment() {
	assert_eq!(
		lower_expression("<Card/>", &Environment::default()),
		print(r#"JSX("Card")"#)
	);
	assert_eq!(
		lower_expression("<Card><Row/></Card>", &Environment::from_names(["Card"])),
		print(r#"JSX(Card, null, [JSX("Row")])"#)
	);
	assert_eq!(
		lower_expression(
			"(Row) => <Card><Row/></Card>",
			&Environment::from_names(["Card"])
		),
		print("(Row) => JSX(Card, null, [JSX(Row)])")
	);
}

#[test]
fn outer_environment_frames_stay_visible() {
	let mut frame = Environment::from_names(["Card"]).extend();
	frame.declare("Row");
	let env = frame.freeze();

	assert_eq!(
		lower_expression("<Card><Row/><Cell/></Card>", &env),
		print(r#"JSX(Card, null, [JSX(Row), JSX("Cell")])"#)
	);
}
