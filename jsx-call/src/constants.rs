//! Holds constant string values used throughout the JSX lowering pass.
#![allow(clippy::missing_docs_in_private_items)]
use oxc::span::Atom;

/// The name of the factory every element is lowered into a call of.
pub const FACTORY_IDENT: &str = "JSX";
pub const OBJECT_IDENT: &str = "Object";
pub const ASSIGN_IDENT: &str = "assign";

pub const FACTORY: Atom<'static> = Atom::new_const(FACTORY_IDENT);
pub const OBJECT: Atom<'static> = Atom::new_const(OBJECT_IDENT);
pub const ASSIGN: Atom<'static> = Atom::new_const(ASSIGN_IDENT);
