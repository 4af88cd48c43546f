use bigdecimal::BigDecimal;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::EvalResult,
            function::{
                arithmetic, bitwise, builtin, comparison, define, factorial, prime,
                series::{self, Series},
            },
        },
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives its bound argument nodes unevaluated, so it decides when
/// (and how often) each argument is evaluated, and the session environment.
type ApplyFn = fn(&[Node], &mut Environment) -> EvalResult<BigDecimal>;

/// The immutable identity of a built-in function.
///
/// Prototypes live in a static table and are shared by every call site.
/// Binding a prototype to arguments produces a new [`BoundFunction`]; the
/// prototype itself never changes.
#[derive(Debug)]
pub struct Prototype {
    name:  &'static str,
    arity: usize,
    apply: ApplyFn,
    folds: bool,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the fixed arity,
/// - whether simplification may fold a call with literal arguments,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table of prototypes),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                folds: $folds:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Prototype] = &[
            $(
                Prototype { name: $name, arity: $arity, apply: $func, folds: $folds },
            )*
        ];
        /// Names of every built-in function, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "Plus"          => { arity: 2, folds: true,  func: arithmetic::plus },
    "Subtract"      => { arity: 2, folds: true,  func: arithmetic::subtract },
    "Times"         => { arity: 2, folds: true,  func: arithmetic::times },
    "Divide"        => { arity: 2, folds: true,  func: arithmetic::divide },
    "Mod"           => { arity: 2, folds: true,  func: arithmetic::modulo },
    "abs"           => { arity: 1, folds: true,  func: arithmetic::abs },
    "power"         => { arity: 2, folds: true,  func: arithmetic::power },
    "floor"         => { arity: 1, folds: true,  func: arithmetic::floor },
    "ceiling"       => { arity: 1, folds: true,  func: arithmetic::ceiling },
    "round"         => { arity: 1, folds: true,  func: arithmetic::round },
    "Equal"         => { arity: 2, folds: true,  func: comparison::equal },
    "Unequal"       => { arity: 2, folds: true,  func: comparison::unequal },
    "Less"          => { arity: 2, folds: true,  func: comparison::less },
    "LessEqual"     => { arity: 2, folds: true,  func: comparison::less_equal },
    "Greater"       => { arity: 2, folds: true,  func: comparison::greater },
    "GreaterEqual"  => { arity: 2, folds: true,  func: comparison::greater_equal },
    "not"           => { arity: 1, folds: true,  func: comparison::not },
    "BitAnd"        => { arity: 2, folds: true,  func: bitwise::bit_and },
    "BitOr"         => { arity: 2, folds: true,  func: bitwise::bit_or },
    "BitXor"        => { arity: 2, folds: true,  func: bitwise::bit_xor },
    "BitNot"        => { arity: 1, folds: true,  func: bitwise::bit_not },
    "BitShiftLeft"  => { arity: 2, folds: true,  func: bitwise::bit_shift_left },
    "BitShiftRight" => { arity: 2, folds: true,  func: bitwise::bit_shift_right },
    "factorial"     => { arity: 1, folds: true,  func: factorial::factorial },
    "is_prime"      => { arity: 1, folds: true,  func: prime::is_prime },
    "define"        => { arity: 2, folds: false, func: define::define },
    "sum"           => { arity: 3, folds: false, func: |args, env| series::series(args, env, Series::Sum) },
    "product"       => { arity: 3, folds: false, func: |args, env| series::series(args, env, Series::Product) },
    "random"        => { arity: 0, folds: false, func: builtin::random },
    "sin"           => { arity: 1, folds: false, func: builtin::sin },
    "cos"           => { arity: 1, folds: false, func: builtin::cos },
    "tan"           => { arity: 1, folds: false, func: builtin::tan },
    "asin"          => { arity: 1, folds: false, func: builtin::asin },
    "acos"          => { arity: 1, folds: false, func: builtin::acos },
    "atan"          => { arity: 1, folds: false, func: builtin::atan },
    "atan2"         => { arity: 2, folds: false, func: builtin::atan2 },
    "sinh"          => { arity: 1, folds: false, func: builtin::sinh },
    "cosh"          => { arity: 1, folds: false, func: builtin::cosh },
    "tanh"          => { arity: 1, folds: false, func: builtin::tanh },
    "exp"           => { arity: 1, folds: false, func: builtin::exp },
    "logE"          => { arity: 1, folds: false, func: builtin::log_e },
    "log2"          => { arity: 1, folds: false, func: builtin::log2 },
    "log10"         => { arity: 1, folds: false, func: builtin::log10 },
    "log"           => { arity: 2, folds: false, func: builtin::log },
    "sqrt"          => { arity: 1, folds: false, func: builtin::sqrt },
    "cbrt"          => { arity: 1, folds: false, func: builtin::cbrt },
    "hypot"         => { arity: 2, folds: false, func: builtin::hypot },
}

/// Finds the prototype of the built-in function called `name`.
///
/// Names are case-sensitive.
///
/// # Example
/// ```
/// use decalc::interpreter::evaluator::function::core::lookup;
///
/// let sum = lookup("sum").unwrap();
/// assert_eq!(sum.arity(), 3);
/// assert!(lookup("Sum").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Prototype> {
    BUILTIN_TABLE.iter().find(|prototype| prototype.name == name)
}

impl Prototype {
    /// The function's name as written in source.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The exact number of arguments the function takes.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Binds the prototype to a concrete argument list.
    ///
    /// # Errors
    /// Returns `ArityMismatch` if `args` does not have exactly `arity`
    /// elements. The error lists the input form of every supplied argument.
    ///
    /// # Example
    /// ```
    /// use decalc::{ast::Node, interpreter::evaluator::function::core::lookup};
    ///
    /// let abs = lookup("abs").unwrap();
    ///
    /// let bound = abs.bind(vec![Node::variable("x")]).unwrap();
    /// assert_eq!(bound.to_input_string(), "abs(x)");
    ///
    /// let err = abs.bind(vec![Node::number(1), Node::number(2)]).unwrap_err();
    /// assert_eq!(err.to_string(),
    ///            "wrong number of arguments to function \"abs\"; need 1 but got 2: 1, 2");
    /// ```
    pub fn bind(&'static self, args: Vec<Node>) -> EvalResult<BoundFunction> {
        if args.len() != self.arity {
            return Err(RuntimeError::ArityMismatch { name:      self.name.to_string(),
                                                     expected:  self.arity,
                                                     found:     args.len(),
                                                     arguments: args.iter()
                                                                    .map(Node::to_input_string)
                                                                    .collect(), });
        }

        Ok(BoundFunction { prototype: self,
                           args })
    }
}

/// A built-in function together with its arguments.
///
/// The only way to obtain one is [`Prototype::bind`], so the argument count
/// always matches the prototype's arity.
///
/// Two bound functions are equal when their names and argument lists are
/// equal. `BoundFunction` deliberately has no `Hash` implementation:
///
/// ```compile_fail
/// use std::collections::HashSet;
///
/// use decalc::interpreter::evaluator::function::core::BoundFunction;
///
/// fn collect(calls: Vec<BoundFunction>) -> HashSet<BoundFunction> {
///     calls.into_iter().collect()
/// }
/// ```
#[derive(Clone)]
pub struct BoundFunction {
    prototype: &'static Prototype,
    args:      Vec<Node>,
}

impl BoundFunction {
    /// The bound function's name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.prototype.name
    }

    /// The prototype this call was bound from.
    #[must_use]
    pub const fn prototype(&self) -> &'static Prototype {
        self.prototype
    }

    /// The bound argument nodes, in call order.
    #[must_use]
    pub fn args(&self) -> &[Node] {
        &self.args
    }

    /// Runs the function and returns its numeric result.
    pub fn value(&self, env: &mut Environment) -> EvalResult<BigDecimal> {
        tracing::trace!(function = self.name(), "applying builtin");
        (self.prototype.apply)(&self.args, env)
    }

    /// Runs the function and returns its result as a node.
    pub fn apply(&self, env: &mut Environment) -> EvalResult<Node> {
        self.value(env).map(Node::Number)
    }

    /// Evaluates the call; identical to [`BoundFunction::apply`].
    pub fn evaluate(&self, env: &mut Environment) -> EvalResult<Node> {
        self.apply(env)
    }

    /// Simplifies every argument and re-binds the prototype to the results.
    ///
    /// Functions marked as folding in the builtin table are additionally
    /// replaced by their value when every simplified argument is a literal
    /// and applying them succeeds. The first argument of `define` is kept
    /// as written.
    #[must_use]
    pub fn simplify(&self, env: &mut Environment) -> Node {
        let args = self.args
                       .iter()
                       .enumerate()
                       .map(|(index, arg)| {
                           // The target of `define` stays a variable.
                           if index == 0 && self.prototype.name == "define" {
                               arg.clone()
                           } else {
                               arg.simplify(env)
                           }
                       })
                       .collect::<Vec<_>>();
        // Same prototype, same argument count.
        let rebound = Self { prototype: self.prototype,
                             args };

        if self.prototype.folds
           && rebound.args.iter().all(|arg| arg.as_number().is_some())
           && let Ok(value) = rebound.value(env)
        {
            return Node::Number(value);
        }

        Node::Function(rebound)
    }

    /// Renders the call as `name(arg, ...)`.
    #[must_use]
    pub fn to_input_string(&self) -> String {
        let args = self.args
                       .iter()
                       .map(Node::to_input_string)
                       .collect::<Vec<_>>();
        format!("{}({})", self.name(), args.join(", "))
    }
}

impl PartialEq for BoundFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name() && self.args == other.args
    }
}

impl std::fmt::Debug for BoundFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundFunction")
         .field("name", &self.name())
         .field("args", &self.args)
         .finish()
    }
}

impl std::fmt::Display for BoundFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_input_string())
    }
}

/// Evaluates the first two arguments, left before right.
pub(crate) fn eval_pair(args: &[Node],
                        env: &mut Environment)
                        -> EvalResult<(BigDecimal, BigDecimal)> {
    let lhs = args[0].value(env)?;
    let rhs = args[1].value(env)?;
    Ok((lhs, rhs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(name: &str, args: Vec<Node>) -> BoundFunction {
        lookup(name).unwrap().bind(args).unwrap()
    }

    #[test]
    fn every_prototype_binds_its_own_arity_and_rejects_others() {
        for name in BUILTIN_FUNCTIONS {
            let prototype = lookup(name).unwrap();
            let args = (0..prototype.arity()).map(|k| Node::variable(format!("a{k}")))
                                             .collect::<Vec<_>>();

            let bound = prototype.bind(args.clone()).unwrap();
            let text = bound.to_input_string();
            assert!(text.starts_with(name));
            let mut position = 0;
            for arg in &args {
                let found = text[position..].find(&arg.to_input_string())
                                            .unwrap_or_else(|| panic!("{arg} missing from {text}"));
                position += found;
            }

            let mut too_many = args;
            too_many.push(Node::number(1));
            let err = prototype.bind(too_many).unwrap_err();
            assert!(matches!(err, RuntimeError::ArityMismatch { .. }));
        }
    }

    #[test]
    fn table_names_are_unique() {
        for (i, name) in BUILTIN_FUNCTIONS.iter().enumerate() {
            assert!(!BUILTIN_FUNCTIONS[i + 1..].contains(name), "{name} listed twice");
        }
    }

    #[test]
    fn binding_does_not_touch_the_prototype() {
        let prototype = lookup("Plus").unwrap();
        let a = prototype.bind(vec![Node::number(1), Node::number(2)]).unwrap();
        let b = prototype.bind(vec![Node::number(3), Node::number(4)]).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.args(), &[Node::number(1), Node::number(2)]);
        assert_eq!(prototype.arity(), 2);
    }

    #[test]
    fn equality_compares_names_and_arguments() {
        let one = vec![Node::number(1)];
        assert_eq!(call("abs", one.clone()), call("abs", one.clone()));
        assert_ne!(call("abs", one.clone()), call("sqrt", one));
    }

    #[test]
    fn zero_arity_renders_with_parentheses() {
        assert_eq!(call("random", Vec::new()).to_input_string(), "random()");
    }

    #[test]
    fn simplify_does_not_fold_floating_point_functions() {
        let mut env = Environment::new();
        let node = call("sqrt", vec![Node::number(4)]).simplify(&mut env);
        assert_eq!(node.to_input_string(), "sqrt(4)");
    }

    #[test]
    fn simplify_folds_exact_functions_with_literal_arguments() {
        let mut env = Environment::new();
        let inner = Node::Function(call("Plus", vec![Node::number(2), Node::number(3)]));
        let node = call("factorial", vec![inner]).simplify(&mut env);
        assert_eq!(node, Node::number(120));
    }

    #[test]
    fn simplify_leaves_assignment_target_alone() {
        let mut env = Environment::new();
        let node = call("define", vec![Node::variable("pi"), Node::variable("e")]);
        let simplified = node.simplify(&mut env);

        assert!(simplified.to_input_string().starts_with("define(pi, 2.71828"));
        assert_eq!(simplified.value(&mut env).unwrap_err(),
                   RuntimeError::ConstantRedefinition { name: "pi".into() });
    }

    #[test]
    fn simplify_keeps_calls_that_would_fail() {
        let mut env = Environment::new();
        let node = call("Divide", vec![Node::number(1), Node::number(0)]);
        assert_eq!(node.simplify(&mut env), Node::Function(node));
    }
}
