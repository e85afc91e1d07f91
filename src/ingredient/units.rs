//! Unit vocabulary: alias table and canonical unit set.

/// Long-form unit names and their canonical short forms.
///
/// Order is load-bearing: a plural form must come before the singular it
/// contains ("tablespoons" before "tablespoon"), otherwise replacing the
/// singular first would leave a stray "s" behind.
pub const UNIT_ALIASES: &[(&str, &str)] = &[
    ("tablespoons", "tbsp"),
    ("tablespoon", "tbsp"),
    ("ounces", "oz"),
    ("ounce", "oz"),
    ("teaspoons", "tsp"),
    ("teaspoon", "tsp"),
    ("cups", "cup"),
    ("pounds", "pound"),
];

/// All unit symbols recognized after normalization.
///
/// Short forms from the alias table plus symbols that need no rewriting.
pub const CANONICAL_UNITS: &[&str] = &["tbsp", "oz", "tsp", "cup", "pound", "kg", "g"];

/// Rewrite every long-form unit name in `line` to its short form.
///
/// Idempotent: no short form is a long form, so a second pass finds
/// nothing left to replace.
pub fn normalize_units(line: &str) -> String {
    let mut normalized = line.to_string();
    for (long, short) in UNIT_ALIASES {
        if normalized.contains(long) {
            normalized = normalized.replace(long, short);
        }
    }
    normalized
}

/// Whole-token membership test against the canonical unit set.
///
/// Tokens only: "g" must match the token "g", never the "g" inside
/// "garlic".
pub fn is_unit(token: &str) -> bool {
    CANONICAL_UNITS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_aliases_precede_their_singular() {
        for (i, (long, _)) in UNIT_ALIASES.iter().enumerate() {
            for (later, _) in &UNIT_ALIASES[i + 1..] {
                assert!(
                    !later.contains(long),
                    "{long:?} would clobber the later alias {later:?}"
                );
            }
        }
    }

    #[test]
    fn normalizes_long_forms() {
        assert_eq!(normalize_units("2 tablespoons butter"), "2 tbsp butter");
        assert_eq!(normalize_units("1 teaspoon salt"), "1 tsp salt");
        assert_eq!(normalize_units("4 cups water"), "4 cup water");
        assert_eq!(normalize_units("2 pounds beef"), "2 pound beef");
        assert_eq!(normalize_units("8 ounces cheese"), "8 oz cheese");
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_units("3 tablespoons of ounces and teaspoons");
        let twice = normalize_units(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn untouched_when_no_alias_present() {
        assert_eq!(normalize_units("500 g flour"), "500 g flour");
        assert_eq!(normalize_units("a pinch of saffron"), "a pinch of saffron");
    }

    #[test]
    fn unit_membership_is_whole_token() {
        assert!(is_unit("tbsp"));
        assert!(is_unit("kg"));
        assert!(is_unit("g"));
        assert!(!is_unit("garlic"));
        assert!(!is_unit("grams"));
        assert!(!is_unit(""));
    }
}
