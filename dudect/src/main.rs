// Note that this package does not provide any constant-time assurances.
// However, this code fragment lays the groundwork should that change.

use dudect_bencher::{BenchRng, Class, ctbench_main, CtRunner};
use kyber512::default::KG;
use kyber512::traits::{Decaps, Encaps, KeyGen};
use kyber512::SharedSecretKey;

use kyber512::default::{CipherText, DecapsKey, EncapsKey};

fn encaps(runner: &mut CtRunner, mut _rng: &mut BenchRng) {
    const ITERATIONS_OUTER: usize = 1000;
    const ITERATIONS_INNER: usize = 100;

    let (ek1, _dk1) = KG::try_keygen().unwrap();
    let (ek2, _dk2) = KG::try_keygen().unwrap();

    let mut inputs: Vec<EncapsKey> = Vec::new();
    let mut classes = Vec::new();

    for _ in 0..ITERATIONS_OUTER {
        inputs.push(ek1.clone());
        classes.push(Class::Left);
    }

    for _ in 0..ITERATIONS_OUTER {
        inputs.push(ek2.clone());
        classes.push(Class::Right);
    }

    for (class, input) in classes.into_iter().zip(inputs.into_iter()) {
        runner.run_one(class, || {
            for _ in 0..ITERATIONS_INNER {
                let _: (SharedSecretKey<32>, _) = input.try_encaps().unwrap();
            }
        })
    }
}

fn decaps(runner: &mut CtRunner, mut _rng: &mut BenchRng) {
    const ITERATIONS_OUTER: usize = 1000;
    const ITERATIONS_INNER: usize = 100;

    let (ek1, dk1) = KG::try_keygen().unwrap();
    let (_ssk, ct1): (SharedSecretKey<32>, _) = ek1.try_encaps().unwrap();
    let (ek2, dk2) = KG::try_keygen().unwrap();
    let (_ssk, ct2): (SharedSecretKey<32>, _) = ek2.try_encaps().unwrap();

    let mut inputs: Vec<(DecapsKey, CipherText)> = Vec::new();
    let mut classes = Vec::new();

    for _ in 0..ITERATIONS_OUTER {
        inputs.push((dk1.clone(), ct1.clone()));
        classes.push(Class::Left);
    }

    for _ in 0..ITERATIONS_OUTER {
        inputs.push((dk2.clone(), ct2.clone()));
        classes.push(Class::Right);
    }

    for (class, input) in classes.into_iter().zip(inputs.into_iter()) {
        runner.run_one(class, || {
            for _ in 0..ITERATIONS_INNER {
                let _: SharedSecretKey<32> = input.0.try_decaps(&input.1).unwrap();
            }
        })
    }
}


ctbench_main!(encaps, decaps);

/*
See https://docs.rs/dudect-bencher/latest/dudect_bencher/

$ cargo run --release -- --continuous encaps
running 1 benchmark continuously
bench encaps seeded with 0xa533680b600ee91d
bench encaps ... : n == +0.002M, max t = +20.90838, max tau = +0.46953, (5/tau)^2 = 113
bench encaps ... : n == +0.003M, max t = +12.90667, max tau = +0.23820, (5/tau)^2 = 440
bench encaps ... : n == +0.004M, max t = +11.03463, max tau = +0.17258, (5/tau)^2 = 839

cargo run --release -- --continuous decaps
running 1 benchmark continuously
bench decaps seeded with 0x0cd3626e7d56f68c
bench decaps ... : n == +0.002M, max t = +7.38286, max tau = +0.18856, (5/tau)^2 = 703
bench decaps ... : n == +0.003M, max t = +11.21373, max tau = +0.19150, (5/tau)^2 = 681

*/
