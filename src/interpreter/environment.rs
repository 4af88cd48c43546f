use std::{
    collections::{HashMap, HashSet},
    f64::consts::{E, PI},
    ops::{Deref, DerefMut},
};

use crate::{ast::Node, util::context::DecimalContext};

/// Name and value of each built-in constant.
const CONSTANTS: &[(&str, f64)] = &[("pi", PI), ("e", E)];

/// Stores the variables of an evaluation session.
///
/// The environment is a single flat mapping; there is no scope stack. Code
/// that needs a temporary binding uses [`ScopedBinding`], which saves and
/// restores one entry.
///
/// ## Usage
///
/// An `Environment` is created once per session and passed by mutable
/// reference to every evaluation. It also owns the session's
/// [`DecimalContext`].
#[derive(Debug, Clone)]
pub struct Environment {
    variables: HashMap<String, Node>,
    constants: HashSet<String>,
    context:   DecimalContext,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only the built-in constants, using the
    /// default decimal context.
    #[must_use]
    pub fn new() -> Self {
        Self::with_context(DecimalContext::default())
    }

    /// Creates an environment holding only the built-in constants, using
    /// `context` for inexact arithmetic.
    ///
    /// ## Example
    /// ```
    /// use decalc::{interpreter::environment::Environment, util::context::DecimalContext};
    ///
    /// let ctx = DecimalContext::with_precision(10).unwrap();
    /// let env = Environment::with_context(ctx);
    ///
    /// assert_eq!(env.context().precision(), 10);
    /// assert!(env.get_variable("pi").is_some());
    /// assert!(env.get_variable("x").is_none());
    /// ```
    #[must_use]
    pub fn with_context(context: DecimalContext) -> Self {
        let mut variables = HashMap::new();
        let mut constants = HashSet::new();

        for (name, value) in CONSTANTS {
            if let Ok(value) = crate::util::num::from_f64(*value) {
                variables.insert((*name).to_string(), Node::Number(value));
                constants.insert((*name).to_string());
            }
        }

        Self { variables,
               constants,
               context }
    }

    /// Looks up the node bound to `name`.
    ///
    /// An unbound name is not an error here; callers that need a value
    /// decide how to report it.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Node> {
        self.variables.get(name)
    }

    /// Binds `name` to `node`, replacing any previous binding.
    pub fn set_variable(&mut self, name: impl Into<String>, node: Node) {
        self.variables.insert(name.into(), node);
    }

    /// Removes the binding for `name`, returning it if there was one.
    pub fn remove_variable(&mut self, name: &str) -> Option<Node> {
        self.variables.remove(name)
    }

    /// Tests whether `name` is a built-in constant such as `pi`.
    #[must_use]
    pub fn is_constant(&self, name: &str) -> bool {
        self.constants.contains(name)
    }

    /// The decimal context used for inexact arithmetic.
    #[must_use]
    pub const fn context(&self) -> &DecimalContext {
        &self.context
    }

    /// Replaces the decimal context for subsequent evaluations.
    pub fn set_context(&mut self, context: DecimalContext) {
        self.context = context;
    }
}

/// Temporarily shadows one variable of an [`Environment`].
///
/// Creating the guard records the current binding of `name` (possibly none).
/// Dropping it puts that binding back, or removes the name if it was unbound,
/// no matter how the enclosing code exits. The guard dereferences to the
/// environment, so nested evaluation runs through it.
///
/// ## Example
/// ```
/// use decalc::{
///     ast::Node,
///     interpreter::environment::{Environment, ScopedBinding},
/// };
///
/// let mut env = Environment::new();
/// {
///     let mut scope = ScopedBinding::new(&mut env, "i");
///     scope.set(Node::number(3));
///     assert_eq!(scope.get_variable("i"), Some(&Node::number(3)));
/// }
/// assert!(env.get_variable("i").is_none());
/// ```
pub struct ScopedBinding<'env> {
    environment: &'env mut Environment,
    name:        String,
    saved:       Option<Node>,
}

impl<'env> ScopedBinding<'env> {
    /// Captures the current binding of `name` in `environment`.
    pub fn new(environment: &'env mut Environment, name: &str) -> Self {
        let saved = environment.get_variable(name).cloned();
        Self { environment,
               name: name.to_string(),
               saved }
    }

    /// Binds the shadowed name to `node` until the guard is dropped.
    pub fn set(&mut self, node: Node) {
        self.environment.set_variable(self.name.clone(), node);
    }
}

impl Deref for ScopedBinding<'_> {
    type Target = Environment;

    fn deref(&self) -> &Self::Target {
        self.environment
    }
}

impl DerefMut for ScopedBinding<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.environment
    }
}

impl Drop for ScopedBinding<'_> {
    fn drop(&mut self) {
        match self.saved.take() {
            Some(node) => self.environment.set_variable(self.name.clone(), node),
            None => {
                self.environment.remove_variable(&self.name);
            },
        }
    }
}
