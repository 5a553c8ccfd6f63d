use wpformal::prelude::*;

fn main() {
    // if (x1 >= x2) max := x1 else max := x2
    let program = Statement::branch(
        "x1 >= x2",
        [Statement::assign("max", "x1")],
        [Statement::assign("max", "x2")],
    );
    let post = Expression::compound("max > 100");

    let result = program.weakest_precondition(&post);
    result.pretty_print(Locale::English).unwrap();
    println!();
    println!();
    HoareTriple::assemble(&result.precondition, &post, Locale::English)
        .pretty_print(Locale::English)
        .unwrap();
    println!();
}
