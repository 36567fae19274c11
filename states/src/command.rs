use std::any::Any;

use crate::Dep;

/// A synchronous state mutation dispatched by the UI.
///
/// Commands read input states and write result states through the [`Dep`]
/// view. They must not perform IO; network results arrive through the
/// per-frame poll path instead.
pub trait Command: Any {
    fn run(&self, deps: &mut Dep<'_>);
}
