//! Lexical environments.
//!
//! An `Environment` is a handle to one scope record. Each scope owns its
//! bindings and holds a reference to its enclosing scope; parents never know
//! about their children. Name resolution always walks outward from the
//! referencing scope, one parent at a time.
//!
//! Handles are cheap to clone and share the underlying scope, which is what
//! lets a function value keep its declaration scope alive and observe later
//! bindings made in it.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::errors::{constant_assignment, duplicate_declaration, undefined_variable, EvalError};
use crate::value::Value;

/// Whether a variable binding can be reassigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutability {
    /// Binding can be reassigned (`let x = ...`).
    Mutable,
    /// Binding cannot be reassigned (`const x = ...`).
    Constant,
}

impl Mutability {
    /// Mutability for a declaration's constant flag.
    #[inline]
    pub fn from_constant(constant: bool) -> Self {
        if constant {
            Mutability::Constant
        } else {
            Mutability::Mutable
        }
    }

    /// Returns `true` if this is `Constant`.
    #[inline]
    pub fn is_constant(self) -> bool {
        matches!(self, Mutability::Constant)
    }
}

/// A single-threaded reference-counted cell for scope records.
///
/// Wraps `Rc<RefCell<T>>`; all scope allocations go through `LocalScope::new()`.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    /// Create a new `LocalScope` wrapping the given value.
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether two handles refer to the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A variable binding.
#[derive(Clone, Debug)]
struct Binding {
    value: Value,
    mutability: Mutability,
}

/// A scope record: bindings plus an optional enclosing scope.
#[derive(Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<String, Binding>,
    parent: Option<Environment>,
}

/// Handle to a scope record.
#[derive(Clone)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// Create a root environment (no parent).
    pub fn new() -> Self {
        Environment {
            scope: LocalScope::new(Scope::default()),
        }
    }

    /// Create a child environment whose lookups fall back to `parent`.
    pub fn with_parent(parent: &Environment) -> Self {
        Environment {
            scope: LocalScope::new(Scope {
                bindings: FxHashMap::default(),
                parent: Some(parent.clone()),
            }),
        }
    }

    /// The enclosing environment, if any.
    pub fn parent(&self) -> Option<Environment> {
        self.scope.borrow().parent.clone()
    }

    /// Whether this environment has an enclosing scope.
    pub fn has_parent(&self) -> bool {
        self.scope.borrow().parent.is_some()
    }

    /// Whether `name` is bound in this scope itself (parents not consulted).
    pub fn contains_local(&self, name: &str) -> bool {
        self.scope.borrow().bindings.contains_key(name)
    }

    /// Whether two handles refer to the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.scope.ptr_eq(&other.scope)
    }

    /// Bind `name` in this scope only.
    ///
    /// Shadowing a binding from an enclosing scope is allowed; declaring the
    /// same name twice in one scope is a `DuplicateDeclaration` error.
    /// Returns the bound value.
    pub fn declare_var(
        &self,
        name: &str,
        value: Value,
        constant: bool,
    ) -> Result<Value, EvalError> {
        let mut scope = self.scope.borrow_mut();
        if scope.bindings.contains_key(name) {
            return Err(duplicate_declaration(name));
        }
        scope.bindings.insert(
            name.to_string(),
            Binding {
                value: value.clone(),
                mutability: Mutability::from_constant(constant),
            },
        );
        Ok(value)
    }

    /// Overwrite `name` in the nearest scope that declares it.
    ///
    /// Fails with `ConstantAssignment` (binding left unchanged) if that scope
    /// declared it constant, or `UndefinedVariable` if no scope declares it.
    /// Returns the assigned value.
    pub fn assign_var(&self, name: &str, value: Value) -> Result<Value, EvalError> {
        let owner = self.resolve(name)?;
        let mut scope = owner.scope.borrow_mut();
        let binding = scope
            .bindings
            .get_mut(name)
            .ok_or_else(|| undefined_variable(name))?;
        if binding.mutability.is_constant() {
            return Err(constant_assignment(name));
        }
        binding.value = value.clone();
        Ok(value)
    }

    /// Value bound to `name` in the nearest scope that declares it.
    pub fn lookup_var(&self, name: &str) -> Result<Value, EvalError> {
        let owner = self.resolve(name)?;
        let scope = owner.scope.borrow();
        scope
            .bindings
            .get(name)
            .map(|binding| binding.value.clone())
            .ok_or_else(|| undefined_variable(name))
    }

    /// Nearest environment (self included) that declares `name`.
    pub fn resolve(&self, name: &str) -> Result<Environment, EvalError> {
        let mut current = self.clone();
        loop {
            let parent = {
                let scope = current.scope.borrow();
                if scope.bindings.contains_key(name) {
                    break;
                }
                scope.parent.clone()
            };
            match parent {
                Some(parent) => current = parent,
                None => return Err(undefined_variable(name)),
            }
        }
        Ok(current)
    }

    /// Names bound directly in this scope, in no particular order.
    pub fn local_names(&self) -> Vec<String> {
        self.scope.borrow().bindings.keys().cloned().collect()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

// Scope contents are usually cyclic (a function bound in a scope captures that
// scope), so Debug shows only the local names and depth.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = self.local_names();
        names.sort();
        let mut depth = 0usize;
        let mut parent = self.parent();
        while let Some(env) = parent {
            depth += 1;
            parent = env.parent();
        }
        f.debug_struct("Environment")
            .field("bindings", &names)
            .field("depth", &depth)
            .finish()
    }
}
