//! Lexical environments used to decide whether a tag name refers to
//! a binding or to a literal (built-in) element kind.
//!
//! An [`Environment`] is a chain of frozen frames. New frames are
//! assembled with a [`FrameBuilder`] and become immutable once
//! [`FrameBuilder::freeze`] is called; lookups never mutate the chain.

use std::{collections::HashSet, rc::Rc};

/// A single frozen frame of hoisted names.
#[derive(Debug)]
struct Frame {
	/// Names declared directly in this frame.
	bindings: HashSet<String>,
	/// The enclosing frame, if any.
	parent: Option<Rc<Frame>>,
}

/// An immutable, cheaply clonable chain of binding frames.
///
/// The default environment has no frames and binds nothing.
#[derive(Debug, Clone, Default)]
pub struct Environment {
	/// The innermost frame.
	head: Option<Rc<Frame>>,
}

impl Environment {
	/// Creates a single-frame environment binding exactly `names`.
	///
	/// Useful when embedding the pass into a pipeline that already
	/// knows which names are in scope.
	pub fn from_names<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut frame = Self::default().extend();
		frame.declare_all(names);
		frame.freeze()
	}

	/// Starts a new, empty child frame of this environment.
	#[must_use]
	pub fn extend(&self) -> FrameBuilder {
		FrameBuilder {
			bindings: HashSet::new(),
			parent: self.head.clone(),
		}
	}

	/// Returns whether `name` is declared in this environment's
	/// innermost frame or any of its ancestors.
	#[must_use]
	pub fn is_bound(&self, name: &str) -> bool {
		let mut frame = self.head.as_deref();
		while let Some(current) = frame {
			if current.bindings.contains(name) {
				return true;
			}
			frame = current.parent.as_deref();
		}
		false
	}

	/// Returns the number of frames in the chain.
	#[must_use]
	pub fn depth(&self) -> usize {
		let mut depth = 0;
		let mut frame = self.head.as_deref();
		while let Some(current) = frame {
			depth += 1;
			frame = current.parent.as_deref();
		}
		depth
	}
}

/// A frame under construction. Names may only be added; the frame
/// is frozen into an [`Environment`] with [`FrameBuilder::freeze`].
#[derive(Debug)]
pub struct FrameBuilder {
	/// Names declared so far.
	bindings: HashSet<String>,
	/// The frame this one extends.
	parent: Option<Rc<Frame>>,
}

impl FrameBuilder {
	/// Declares `name` in the frame being built.
	pub fn declare(&mut self, name: impl Into<String>) {
		self.bindings.insert(name.into());
	}

	/// Declares every name in `names`.
	pub fn declare_all<I, S>(&mut self, names: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.bindings.extend(names.into_iter().map(Into::into));
	}

	/// Freezes the frame, producing the extended environment.
	#[must_use]
	pub fn freeze(self) -> Environment {
		Environment {
			head: Some(Rc::new(Frame {
				bindings: self.bindings,
				parent: self.parent,
			})),
		}
	}
}
