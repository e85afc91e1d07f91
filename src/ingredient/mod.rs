//! Free-text ingredient parsing.
//!
//! Turns lines like `"4 1/2 cups chopped tomatoes (drained)"` into
//! structured `(quantity, unit, name)` records. Parsing is total: a line
//! the parser cannot make sense of becomes `{1.0, "", <line>}` rather
//! than an error, so one garbled line never sinks a whole recipe.

mod quantity;
mod units;

pub use units::{CANONICAL_UNITS, UNIT_ALIASES};

use log::debug;

use crate::model::ParsedIngredient;

/// Parse a batch of raw ingredient lines, one record per line, in order.
pub fn parse<I, S>(lines: I) -> Vec<ParsedIngredient>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().map(|line| parse_line(line.as_ref())).collect()
}

/// Parse a single raw ingredient line.
pub fn parse_line(line: &str) -> ParsedIngredient {
    let normalized = units::normalize_units(&line.to_lowercase());
    let stripped = strip_parentheticals(&normalized);
    let tokens: Vec<&str> = stripped.split_whitespace().collect();

    if let Some(unit_index) = tokens.iter().position(|t| units::is_unit(t)) {
        // Tokens before the unit form the quantity expression. A single
        // token may carry a hyphen ("4-1/2"), which reads as addition.
        let evaluated = match &tokens[..unit_index] {
            [single] => quantity::eval(&single.replace('-', "+")),
            many => quantity::eval(&many.join("+")),
        };
        match evaluated {
            Some(qty) => {
                return ParsedIngredient {
                    quantity: qty,
                    unit: tokens[unit_index].to_string(),
                    name: tokens[unit_index + 1..].join(" "),
                }
            }
            None => {
                debug!("unusable quantity expression in {line:?}, keeping the whole line");
                return unparsed(&stripped);
            }
        }
    }

    // No unit. A non-zero leading integer still counts ("3 onions").
    if let Some(count) = leading_integer(tokens.first().copied().unwrap_or("")) {
        return ParsedIngredient {
            quantity: count as f64,
            unit: String::new(),
            name: tokens[1..].join(" "),
        };
    }

    unparsed(&stripped)
}

/// Best-effort record for a line with no recognizable structure.
fn unparsed(stripped: &str) -> ParsedIngredient {
    ParsedIngredient {
        quantity: 1.0,
        unit: String::new(),
        name: stripped.trim().to_string(),
    }
}

/// Remove every `( ... )` aside along with the whitespace around it,
/// leaving a single space. An unmatched `(` is left alone.
fn strip_parentheticals(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')') else {
            break;
        };
        out.push_str(rest[..open].trim_end());
        if !out.ends_with(' ') {
            out.push(' ');
        }
        rest = rest[open + close + 1..].trim_start();
    }
    out.push_str(rest);
    out
}

/// Digit prefix of `token` as an integer, if present and non-zero.
///
/// Mirrors lenient numeric prefixes like "4.5" or "4lb" down to their
/// integer part; a zero count is treated as no count at all.
fn leading_integer(token: &str) -> Option<u64> {
    let digits = &token[..token.chars().take_while(char::is_ascii_digit).count()];
    match digits.parse() {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(n),
    }
}
