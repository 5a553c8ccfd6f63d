use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use wpformal::prelude::*;

const VARIABLES: [&str; 4] = ["a", "b", "c", "d"];

fn build_simple_program() -> Statement {
    // x := 5; y := x + 1
    Statement::sequence([
        Statement::assign("x", "5"),
        Statement::assign("y", "x + 1"),
    ])
}

fn build_random_program(budget: usize, rng: &mut impl Rng) -> Statement {
    // Build a medium-sized program mixing assignments and shallow conditionals. Use randomness
    // seeded for determinism.
    fn next_statement(budget: usize, rng: &mut impl Rng) -> Statement {
        let target = VARIABLES[rng.random_range(0..VARIABLES.len())];
        let source = VARIABLES[rng.random_range(0..VARIABLES.len())];
        if budget == 0 || rng.random_bool(0.8) {
            return match rng.random_range(0..=2) {
                0 => Statement::assign(target, format!("{source} + 1")),
                1 => Statement::assign(target, format!("{source} / 2")),
                _ => Statement::assign(target, source),
            };
        }

        let then_len = rng.random_range(0..3);
        let else_len = rng.random_range(0..3);
        Statement::branch(
            format!("{source} > 0"),
            (0..then_len).map(|_| next_statement(budget - 1, rng)).collect::<Vec<_>>(),
            (0..else_len).map(|_| next_statement(budget - 1, rng)).collect::<Vec<_>>(),
        )
    }

    Statement::sequence((0..budget).map(|_| next_statement(2, rng)).collect::<Vec<_>>())
}

fn bench_wp(c: &mut Criterion) {
    let post = Expression::compound("a + b > c - d");

    let simple = build_simple_program();
    c.bench_function("wp_simple_sequence", |b| {
        b.iter(|| black_box(simple.weakest_precondition(black_box(&post))))
    });

    let mut rng = ChaCha20Rng::seed_from_u64(0x42);
    let random = build_random_program(24, &mut rng);
    c.bench_function("wp_random_program", |b| {
        b.iter(|| black_box(random.weakest_precondition(black_box(&post))))
    });

    let result = random.weakest_precondition(&post);
    c.bench_function("render_random_derivation", |b| {
        b.iter(|| black_box(result.pretty_string(Locale::English)))
    });
}

criterion_group!(benches, bench_wp);
criterion_main!(benches);
