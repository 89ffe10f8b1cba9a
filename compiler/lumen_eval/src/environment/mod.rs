//! Lexical environments.
//!
//! An [`Environment`] is a handle to one [`Scope`]; scopes link to their
//! parent, ending at a root. Closures hold a handle to the scope they were
//! created in, so a scope lives as long as any closure or active call
//! refers to it.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use lumen_ir::Name;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::trace;

use crate::Value;

/// Single-threaded shared cell, `Rc<RefCell<T>>`.
///
/// All scope allocations go through [`LocalScope::new`].
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// True if both handles point at the same cell.
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

/// Variable bindings of one scope.
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<Environment>,
}

impl Scope {
    fn new(parent: Option<Environment>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent,
        }
    }
}

/// A name that is not bound in any enclosing scope.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("unbound name {0:?}")]
pub struct UndefinedName(pub Name);

/// Handle to a scope in the environment chain.
#[derive(Clone)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// A fresh root scope.
    pub fn new_root() -> Self {
        Environment(LocalScope::new(Scope::new(None)))
    }

    /// A new empty child scope whose parent is `self`.
    pub fn extend(&self) -> Self {
        trace!("extend scope");
        Environment(LocalScope::new(Scope::new(Some(self.clone()))))
    }

    pub fn is_root(&self) -> bool {
        self.0.borrow().parent.is_none()
    }

    pub fn parent(&self) -> Option<Environment> {
        self.0.borrow().parent.clone()
    }

    /// True if both handles refer to the same scope.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.0.ptr_eq(&other.0)
    }

    /// The nearest scope, starting at `self`, that binds `name`.
    pub fn lookup(&self, name: Name) -> Option<Environment> {
        let mut scope = self.clone();
        loop {
            if scope.0.borrow().bindings.contains_key(&name) {
                return Some(scope);
            }
            scope = scope.parent()?;
        }
    }

    /// The value bound to `name` in the nearest scope that binds it.
    pub fn get(&self, name: Name) -> Result<Value, UndefinedName> {
        let mut scope = self.clone();
        loop {
            if let Some(value) = scope.0.borrow().bindings.get(&name) {
                return Ok(value.clone());
            }
            scope = scope.parent().ok_or(UndefinedName(name))?;
        }
    }

    /// Rebind `name` in the scope that defines it.
    ///
    /// An unbound name is defined here if this is a root scope; anywhere
    /// else it is an error.
    pub fn set(&self, name: Name, value: Value) -> Result<(), UndefinedName> {
        match self.lookup(name) {
            Some(scope) => {
                scope.0.borrow_mut().bindings.insert(name, value);
                Ok(())
            }
            None if self.is_root() => {
                self.define(name, value);
                Ok(())
            }
            None => Err(UndefinedName(name)),
        }
    }

    /// Bind `name` in this scope, shadowing any outer binding.
    pub fn define(&self, name: Name, value: Value) {
        self.0.borrow_mut().bindings.insert(name, value);
    }
}

// Scopes can (through closures) contain themselves; print only the shape.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        f.debug_struct("Environment")
            .field("bindings", &scope.bindings.len())
            .field("root", &scope.parent.is_none())
            .finish()
    }
}
