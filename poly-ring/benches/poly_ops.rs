use criterion::{Criterion, black_box, criterion_group, criterion_main};
use poly_ring::arith::{find_irreducible, long_division};
use poly_ring::poly::Polynomial;
use rand::prelude::{Rng, SeedableRng, StdRng};

fn random_poly(rng: &mut StdRng, degree: usize, modulus: u64) -> Polynomial {
    let mut coefficients: Vec<i64> = (0..=degree)
        .map(|_| rng.random_range(0..modulus as i64))
        .collect();
    // A nonzero leading coefficient keeps the requested degree.
    coefficients[0] = rng.random_range(1..modulus as i64);

    Polynomial::try_with(coefficients, modulus).expect("build random polynomial")
}

fn bench_long_division(c: &mut Criterion) {
    // The residue search costs O(modulus) per eliminated degree, so a large
    // prime modulus dominates the runtime.
    let mut rng = StdRng::seed_from_u64(12345);
    let f = random_poly(&mut rng, 48, 10007);
    let g = random_poly(&mut rng, 6, 10007);

    c.bench_function("long_division", |b| {
        b.iter(|| {
            let (quotient, remainder) = long_division(&f, &g).expect("divide");
            black_box((quotient, remainder));
        })
    });
}

fn bench_find_irreducible(c: &mut Criterion) {
    // Walks the odometer over monic cubics mod 11 until one is root-free.
    c.bench_function("find_irreducible", |b| {
        b.iter(|| {
            let found = find_irreducible(3, 11).expect("search");
            black_box(found);
        })
    });
}

criterion_group!(benches, bench_long_division, bench_find_irreducible);
criterion_main!(benches);
