//! Smart constructors for terms. These double as the evaluator: building an
//! application reduces it on the spot, so a parsed term is already in its
//! final form.
//!
//! Substitution does not rename bound variables. Substituting a term with a
//! free `y` under a binder `\y` captures it:
//!
//! ```
//! use little_lambda::evaluate;
//!
//! let captured = evaluate(r"(\x \y x) y").expect("unable to evaluate");
//! assert_eq!(captured.to_string(), "(fn [y] y)");
//! ```
//!
//! Callers rely on this exact behaviour, so it is kept.

use tracing::trace;

use crate::term_representation::{Builtin, Term};

/// Builds `\formal_param body`. No reduction happens here.
pub fn lambda_term(formal_param: &str, body: Term) -> Term {
    return Term::Lambda {
        formal_param: String::from(formal_param),
        body: Box::new(body),
    };
}

/// Builds a variable reference, or a fresh built-in if `var_name` names one.
pub fn variable_term(var_name: &str) -> Term {
    match Builtin::from_symbol(var_name) {
        Some(builtin) => {
            return Term::Integer {
                value: builtin.identity(),
                builtin: Some(builtin),
            };
        }
        None => {
            return Term::Variable {
                var_name: String::from(var_name),
            };
        }
    }
}

pub fn integer_term(value: i64) -> Term {
    return Term::Integer {
        value,
        builtin: None,
    };
}

/// Applies `function` to `actual_arg`, reducing if possible:
///
/// - a built-in applied to an integer folds the integer into its
///   accumulator and stays the same built-in;
/// - a lambda is beta-reduced by substituting the argument into its body;
/// - anything else is stuck and becomes an `Application` node.
pub fn application_term(function: Term, actual_arg: Term) -> Term {
    match (function, actual_arg) {
        (
            Term::Integer {
                value,
                builtin: Some(builtin),
            },
            Term::Integer {
                value: operand, ..
            },
        ) => {
            let result = builtin.apply(value, operand);
            trace!(
                "Applied built-in {} {} {} = {}",
                value,
                builtin.symbol(),
                operand,
                result
            );

            return Term::Integer {
                value: result,
                builtin: Some(builtin),
            };
        }

        (Term::Lambda { formal_param, body }, actual_arg) => {
            trace!("Beta reducing {} with {} := {}", body, formal_param, actual_arg);
            return substitute(*body, formal_param.as_str(), &actual_arg);
        }

        (function, actual_arg) => {
            return Term::Application {
                function: Box::new(function),
                actual_arg: Box::new(actual_arg),
            };
        }
    }
}

/// Replaces every free `var_name` in `term` with a copy of `var_value`.
/// Applications are rebuilt through `application_term`, so substitution can
/// trigger further reductions.
pub fn substitute(term: Term, var_name: &str, var_value: &Term) -> Term {
    match term {
        Term::Variable {
            var_name: curr_var_name,
        } => {
            if curr_var_name == var_name {
                return var_value.clone();
            }
            return Term::Variable {
                var_name: curr_var_name,
            };
        }

        Term::Application {
            function,
            actual_arg,
        } => {
            let subbed_function = substitute(*function, var_name, var_value);
            let subbed_actual_arg = substitute(*actual_arg, var_name, var_value);

            return application_term(subbed_function, subbed_actual_arg);
        }

        Term::Lambda { formal_param, body } => {
            // The lambda rebinds var_name, so occurrences below it refer to
            // its own parameter.
            if formal_param == var_name {
                return Term::Lambda { formal_param, body };
            }

            return Term::Lambda {
                formal_param,
                body: Box::new(substitute(*body, var_name, var_value)),
            };
        }

        integer @ Term::Integer { .. } => return integer,
    }
}

/// Rebuilds `term` bottom-up through the constructors, reducing any
/// application that has become reducible. A fully reduced term comes back
/// unchanged.
pub fn reevaluate(term: Term) -> Term {
    match term {
        Term::Lambda { formal_param, body } => {
            return Term::Lambda {
                formal_param,
                body: Box::new(reevaluate(*body)),
            };
        }
        Term::Application {
            function,
            actual_arg,
        } => {
            return application_term(reevaluate(*function), reevaluate(*actual_arg));
        }
        term => return term,
    }
}
