//! [`Function`] - shared handle to a callable with source text.

use std::fmt;
use std::rc::Rc;

use crate::Value;

/// Native body of a [`Function`].
pub type NativeFn = dyn Fn(&[Value]) -> Value;

struct FunctionData {
    source: String,
    body: Option<Box<NativeFn>>,
}

/// A reference-counted function value.
///
/// Two functions compare equal under deep equality when their source texts
/// match; the native body takes no part in that comparison.
#[derive(Clone)]
pub struct Function(Rc<FunctionData>);

impl Function {
    /// A function with source text and no native body.
    pub fn new(source: impl Into<String>) -> Self {
        Self(Rc::new(FunctionData {
            source: source.into(),
            body: None,
        }))
    }

    pub fn native(source: impl Into<String>, body: impl Fn(&[Value]) -> Value + 'static) -> Self {
        Self(Rc::new(FunctionData {
            source: source.into(),
            body: Some(Box::new(body)),
        }))
    }

    pub fn source(&self) -> &str {
        &self.0.source
    }

    /// Invokes the native body; without one the result is `Undefined`.
    pub fn call(&self, args: &[Value]) -> Value {
        match &self.0.body {
            Some(body) => body(args),
            None => Value::Undefined,
        }
    }

    pub fn ptr_eq(&self, other: &Function) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Function").field(&self.0.source).finish()
    }
}
