/// The environment module holds the mutable state of an evaluation session.
///
/// It stores variable bindings and the decimal context, and provides the
/// scoped guard used to shadow a variable for the duration of a nested
/// evaluation.
///
/// # Responsibilities
/// - Maps case-sensitive variable names to nodes.
/// - Marks built-in constants so they can be folded and protected.
/// - Restores temporarily shadowed bindings on every exit path.
pub mod environment;
/// The evaluator module computes values from AST nodes.
///
/// The evaluator traverses the tree, performs decimal arithmetic, dispatches
/// function calls through the built-in table and rewrites trees during
/// simplification.
///
/// # Responsibilities
/// - Evaluates nodes to decimals or to reduced nodes.
/// - Binds and applies built-in functions.
/// - Reports runtime errors such as division by zero or invalid arguments.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source text and produces a stream of tokens: decimal
/// literals, identifiers, operators and delimiters, each tagged with its line.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Parses decimal literals, including exponent notation.
/// - Skips whitespace and comments while counting lines.
pub mod lexer;
/// The parser module builds AST nodes from tokens.
///
/// The parser processes the token stream and constructs one node per input
/// line. Infix comparisons, bitwise operators, powers, factorials and
/// assignments are desugared into calls of the matching built-in functions.
///
/// # Responsibilities
/// - Converts tokens into nodes following the operator precedence table.
/// - Resolves function names and binds their arguments.
/// - Reports syntax errors with line information.
pub mod parser;
