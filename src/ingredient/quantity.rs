//! Validated arithmetic for quantity expressions.
//!
//! The quantity grammar is deliberately tiny: sums of division chains over
//! non-negative decimal numbers ("4+1/2", "3/4", "2.5"). Anything outside
//! the grammar is rejected, never interpreted: ingredient text comes from
//! the network and must never reach a general-purpose evaluator.

/// Evaluate a quantity expression, or `None` if it is not in the grammar.
///
/// Grammar: `sum := term ('+' term)*`, `term := number ('/' number)*`,
/// where `number` is digits with an optional single decimal point.
/// Division associates left; dividing by zero rejects the expression.
pub fn eval(expr: &str) -> Option<f64> {
    if expr.is_empty() || !expr.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '/' | '.')) {
        return None;
    }
    expr.split('+').map(eval_term).sum()
}

fn eval_term(term: &str) -> Option<f64> {
    let mut factors = term.split('/');
    let mut value = parse_number(factors.next()?)?;
    for factor in factors {
        let divisor = parse_number(factor)?;
        if divisor == 0.0 {
            return None;
        }
        value /= divisor;
    }
    Some(value)
}

fn parse_number(text: &str) -> Option<f64> {
    // f64::from_str accepts "inf", "nan", exponents and signs; the
    // character whitelist above has already excluded all of those, so a
    // plain parse is safe. Stragglers like "" or "1.2.3" fail here.
    text.parse().ok()
}
