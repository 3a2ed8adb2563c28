//! Scoped context providers
//!
//! Shared state such as the signed-in session or the active list filters is
//! provided once at the root of a view subtree and read by everything below
//! it. [`ContextStack`] makes that explicit: a provider lives until its
//! scope is popped, and a consumer asking for a context that no enclosing
//! scope provides gets [`CampusError::MissingContext`] instead of a default.

use indexmap::IndexMap;

use crate::error::{CampusError, Result};
use crate::value::Value;

/// A stack of scopes, each holding the contexts it provides.
///
/// Providing the same name twice in one scope replaces the earlier value;
/// providing it in an inner scope shadows the outer value until that scope
/// closes.
///
/// # Example
///
/// ```
/// use campus::{ContextStack, Value};
///
/// let mut ctx = ContextStack::new();
/// ctx.provide("term", Value::Int(1));
///
/// ctx.push_scope();
/// ctx.provide("stream", Value::from("East"));
/// ctx.provide("term", Value::Int(2)); // Shadows outer term
///
/// assert_eq!(ctx.get("term"), Some(&Value::Int(2)));
/// assert!(ctx.require("stream").is_ok());
///
/// ctx.pop_scope();
///
/// assert_eq!(ctx.get("term"), Some(&Value::Int(1)));
/// assert!(ctx.require("stream").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ContextStack {
    /// Innermost scope last; the root scope is always present
    scopes: Vec<IndexMap<String, Value>>,
}

impl Default for ContextStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextStack {
    /// Create a stack with only the root scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![IndexMap::new()],
        }
    }

    /// Open a new innermost scope.
    pub fn push_scope(&mut self) {
        self.scopes.push(IndexMap::new());
    }

    /// Close the innermost scope. The root scope stays open.
    pub fn pop_scope(&mut self) {
        self.close_to(self.scopes.len() - 1);
    }

    /// Close scopes until at most `depth` remain (never fewer than one).
    pub fn close_to(&mut self, depth: usize) {
        self.scopes.truncate(depth.max(1));
    }

    /// Open a scope that closes, together with anything opened inside it,
    /// when the guard drops.
    pub fn scope_guard(&mut self) -> ScopeGuard<'_> {
        let restore_to = self.depth();
        self.push_scope();
        ScopeGuard {
            ctx: self,
            restore_to,
        }
    }

    /// Number of open scopes, including the root.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Provide a context value in the innermost scope.
    pub fn provide(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        tracing::trace!(context = %name, depth = self.depth(), "providing context");
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name, value);
        }
    }

    /// The value from the innermost scope providing `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Look up a context that must be provided.
    ///
    /// # Errors
    ///
    /// Returns [`CampusError::MissingContext`] if no open scope provides
    /// `name`.
    pub fn require(&self, name: &str) -> Result<&Value> {
        self.get(name).ok_or_else(|| CampusError::MissingContext {
            name: name.to_string(),
        })
    }

    /// Check if any open scope provides `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Names provided by the innermost scope.
    pub fn names_in_current_scope(&self) -> Vec<&str> {
        self.scopes
            .last()
            .map(|scope| scope.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

/// Keeps a scope open for its lifetime; see [`ContextStack::scope_guard`].
pub struct ScopeGuard<'a> {
    ctx: &'a mut ContextStack,
    restore_to: usize,
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        self.ctx.close_to(self.restore_to);
    }
}

impl std::ops::Deref for ScopeGuard<'_> {
    type Target = ContextStack;

    fn deref(&self) -> &ContextStack {
        self.ctx
    }
}

impl std::ops::DerefMut for ScopeGuard<'_> {
    fn deref_mut(&mut self) -> &mut ContextStack {
        self.ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_scope_is_never_popped() {
        let mut ctx = ContextStack::new();
        ctx.provide("session", Value::from("teacher"));
        ctx.pop_scope();
        assert_eq!(ctx.depth(), 1);
        assert!(ctx.contains("session"));
    }

    #[test]
    fn test_scope_guard_drops_providers() {
        let mut ctx = ContextStack::new();
        {
            let mut guard = ctx.scope_guard();
            guard.provide("filters", Value::empty_map());
            assert_eq!(guard.depth(), 2);
            assert_eq!(guard.names_in_current_scope(), vec!["filters"]);
        }
        assert_eq!(ctx.depth(), 1);
        assert!(!ctx.contains("filters"));
    }

    #[test]
    fn test_guard_closes_scopes_left_open_inside() {
        let mut ctx = ContextStack::new();
        {
            let mut guard = ctx.scope_guard();
            guard.push_scope();
            guard.push_scope();
            guard.provide("page", Value::Int(3));
            assert_eq!(guard.depth(), 4);
        }
        assert_eq!(ctx.depth(), 1);
        assert!(!ctx.contains("page"));
    }

    #[test]
    fn test_provide_twice_in_one_scope_replaces() {
        let mut ctx = ContextStack::new();
        ctx.provide("term", Value::Int(1));
        ctx.provide("term", Value::Int(2));
        assert_eq!(ctx.names_in_current_scope(), vec!["term"]);
        assert_eq!(ctx.get("term"), Some(&Value::Int(2)));
    }

    #[test]
    fn test_require_outside_scope_fails() {
        let ctx = ContextStack::new();
        assert_eq!(
            ctx.require("sidebar"),
            Err(CampusError::MissingContext {
                name: "sidebar".to_string()
            })
        );
    }
}
