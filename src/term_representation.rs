//! Data structures to represent lambda calculus terms, and the canonical way
//! of displaying them.

/// One of the four arithmetic built-ins.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Builtin {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Builtin {
    /// Looks up the built-in named by `symbol`, if any.
    pub fn from_symbol(symbol: &str) -> Option<Builtin> {
        match symbol {
            "+" => return Some(Builtin::Add),
            "-" => return Some(Builtin::Subtract),
            "*" => return Some(Builtin::Multiply),
            "/" => return Some(Builtin::Divide),
            _ => return None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Builtin::Add => return "+",
            Builtin::Subtract => return "-",
            Builtin::Multiply => return "*",
            Builtin::Divide => return "/",
        }
    }

    /// The starting accumulator of a fresh built-in. The first operand is
    /// folded into it like any other, so `- a b` means `0 - a - b`.
    pub fn identity(self) -> i64 {
        match self {
            Builtin::Add | Builtin::Subtract => return 0,
            Builtin::Multiply | Builtin::Divide => return 1,
        }
    }

    /// Folds `operand` into `accumulator`. Overflow wraps; division truncates
    /// and panics on a zero divisor.
    pub fn apply(self, accumulator: i64, operand: i64) -> i64 {
        match self {
            Builtin::Add => return accumulator.wrapping_add(operand),
            Builtin::Subtract => return accumulator.wrapping_sub(operand),
            Builtin::Multiply => return accumulator.wrapping_mul(operand),
            Builtin::Divide => return accumulator.wrapping_div(operand),
        }
    }
}

/// Represents a lambda-calculus term.
///
/// Terms are plain value trees: every child is uniquely owned, so `clone`
/// yields a fully independent deep copy.
#[derive(Debug, Clone)]
pub enum Term {
    Lambda {
        formal_param: String,
        body: Box<Term>,
    },
    Application {
        function: Box<Term>,
        actual_arg: Box<Term>,
    },
    Variable {
        var_name: String,
    },
    /// An integer. `builtin` is set when the integer also stands for a
    /// (possibly partially applied) arithmetic built-in.
    Integer {
        value: i64,
        builtin: Option<Builtin>,
    },
}

/// Structural equality. Lambdas are compared by parameter name, not up to
/// alpha-renaming, and the built-in tag of an integer is ignored.
impl PartialEq for Term {
    fn eq(&self, other: &Term) -> bool {
        match (self, other) {
            (
                Term::Lambda {
                    formal_param: left_param,
                    body: left_body,
                },
                Term::Lambda {
                    formal_param: right_param,
                    body: right_body,
                },
            ) => {
                return left_param == right_param && left_body == right_body;
            }

            (
                Term::Application {
                    function: left_function,
                    actual_arg: left_arg,
                },
                Term::Application {
                    function: right_function,
                    actual_arg: right_arg,
                },
            ) => {
                return left_function == right_function && left_arg == right_arg;
            }

            (
                Term::Variable {
                    var_name: left_name,
                },
                Term::Variable {
                    var_name: right_name,
                },
            ) => {
                return left_name == right_name;
            }

            (
                Term::Integer {
                    value: left_value, ..
                },
                Term::Integer {
                    value: right_value, ..
                },
            ) => {
                return left_value == right_value;
            }

            _ => return false,
        }
    }
}

impl Eq for Term {}

// Prints in a LISP-like, fully parenthesized form. Built-in tags are not
// shown, so this isn't meant to be parsed back.
impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Lambda { formal_param, body } => {
                return write!(f, "(fn [{}] {})", formal_param, body);
            }
            Term::Application {
                function,
                actual_arg,
            } => {
                return write!(f, "({} {})", function, actual_arg);
            }
            Term::Variable { var_name } => {
                return write!(f, "{}", var_name);
            }
            Term::Integer { value, .. } => {
                return write!(f, "{}", value);
            }
        }
    }
}
