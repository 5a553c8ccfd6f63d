use wpformal::expr::Expression;
use wpformal::expr::definiteness::DefinitenessCondition;

#[test]
fn compound_replaces_every_occurrence_with_parenthesized_text() {
    let post = Expression::compound("x + y > 5");
    let result = post.substitute("x", "z + 1");
    assert_eq!(result, Expression::compound("(z + 1) + y > 5"));

    let twice = Expression::compound("x * x == x");
    assert_eq!(twice.substitute("x", "a").text(), "(a) * (a) == (a)");
}

#[test]
fn substitution_leaves_receiver_untouched() {
    let post = Expression::compound("x > 0");
    let _ = post.substitute("x", "5");
    assert_eq!(post.text(), "x > 0");
}

#[test]
fn constant_is_fixed_under_any_substitution() {
    let c = Expression::constant("10");
    for (variable, replacement) in [("x", "5"), ("10", "y"), ("1", "0"), ("", "z")] {
        assert_eq!(c.substitute(variable, replacement), c);
    }
}

#[test]
fn matching_variable_widens_to_compound() {
    for replacement in ["5", "y", "a + b / c"] {
        let result = Expression::variable("x").substitute("x", replacement);
        assert!(result.is_compound(), "{replacement} did not widen");
        assert_eq!(result.text(), replacement);
    }
}

#[test]
fn other_variable_is_unchanged() {
    let y = Expression::variable("y");
    let result = y.substitute("x", "5");
    assert!(result.is_variable());
    assert_eq!(result.text(), "y");
}

#[test]
fn substring_identifiers_are_corrupted() {
    // Known precision limit: replacement is textual, `max` contains `x`.
    let post = Expression::compound("max > x");
    assert_eq!(post.substitute("x", "1").text(), "ma(1) > (1)");
}

#[test]
fn no_division_yields_no_condition() {
    assert!(Expression::compound("x + 5").definiteness_conditions().is_empty());
}

#[test]
fn single_division_yields_one_condition() {
    let conditions = Expression::compound("x / y + 5").definiteness_conditions();
    assert_eq!(conditions.len(), 1);
    assert_eq!(conditions[0], DefinitenessCondition::NonZeroDenominator);
    assert_eq!(conditions[0].to_string(), "denominator ≠ 0");
}

#[test]
fn nested_division_still_yields_one_condition() {
    for text in ["a / (b / c)", "a / b / c / d"] {
        assert_eq!(
            Expression::compound(text).definiteness_conditions().len(),
            1,
            "{text}"
        );
    }
}

#[test]
fn display_is_the_raw_text() {
    assert_eq!(Expression::variable("x").to_string(), "x");
    assert_eq!(Expression::constant("42").to_string(), "42");
    assert_eq!(Expression::compound("a && b").to_string(), "a && b");
}
