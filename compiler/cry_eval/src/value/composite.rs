//! Composite value types: objects, user functions, and native functions.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use cry_ir::Block;
use indexmap::IndexMap;

use super::Value;
use crate::environment::Environment;
use crate::errors::EvalResult;

// ObjectValue

/// Property map of an object value.
///
/// Insertion order is kept for display; lookups never depend on it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectValue {
    properties: IndexMap<String, Value>,
}

impl ObjectValue {
    pub fn new(properties: IndexMap<String, Value>) -> Self {
        ObjectValue { properties }
    }

    /// Get a property by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Check whether a property exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Iterate over properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check if the object has no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl FromIterator<(String, Value)> for ObjectValue {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        ObjectValue {
            properties: iter.into_iter().collect(),
        }
    }
}

// FunctionValue

/// User-defined function (closure).
///
/// Holds the environment the declaration was evaluated in. Free identifiers
/// in the body resolve through that environment's chain at call time, never
/// through the caller's. The environment is held by reference, so bindings
/// added to it after the declaration (including the function itself) are
/// visible to the body.
#[derive(Clone)]
pub struct FunctionValue {
    name: Rc<str>,
    params: Rc<[String]>,
    body: Block,
    declaration_env: Environment,
}

impl FunctionValue {
    /// Create a function value.
    ///
    /// # Arguments
    /// * `name` - Declared name (used in diagnostics and backtraces)
    /// * `params` - Parameter names, bound positionally at call time
    /// * `body` - Statement sequence; the last statement's value is the result
    /// * `declaration_env` - Environment captured at declaration
    pub fn new(
        name: impl Into<Rc<str>>,
        params: impl Into<Rc<[String]>>,
        body: Block,
        declaration_env: Environment,
    ) -> Self {
        FunctionValue {
            name: name.into(),
            params: params.into(),
            body,
            declaration_env,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn body(&self) -> &Block {
        &self.body
    }

    pub fn declaration_env(&self) -> &Environment {
        &self.declaration_env
    }
}

// The captured environment usually contains this very function, so it is
// left out of Debug output.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("body_len", &self.body.len())
            .finish_non_exhaustive()
    }
}

impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body) && self.declaration_env.ptr_eq(&other.declaration_env)
    }
}

// NativeFunctionValue

/// Host callable: receives the evaluated arguments and the caller's
/// environment.
pub type NativeFn = Rc<dyn Fn(&[Value], &Environment) -> EvalResult>;

/// Host-provided function exposed to scripts.
#[derive(Clone)]
pub struct NativeFunctionValue {
    name: Rc<str>,
    func: NativeFn,
}

impl NativeFunctionValue {
    pub fn new(name: impl Into<Rc<str>>, func: NativeFn) -> Self {
        NativeFunctionValue {
            name: name.into(),
            func,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the host function.
    pub fn call(&self, args: &[Value], env: &Environment) -> EvalResult {
        (self.func)(args, env)
    }
}

impl fmt::Debug for NativeFunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunctionValue")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl PartialEq for NativeFunctionValue {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}
