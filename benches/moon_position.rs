use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use moonbounce::moon::MoonEphemeris;
use moonbounce::observer::Observer;
use moonbounce::sun::SunEphemeris;
use moonbounce::time::UtcDate;
use moonbounce::tracking::moon_day_track;

/// Random day number within ±30 years of the model epoch.
#[inline]
fn rand_day(rng: &mut StdRng) -> f64 {
    rng.random_range(-11_000.0..11_000.0)
}

fn bench_moon_horizontal(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xE4E);
    let samples = 1_000usize;

    c.bench_function("moon_position/horizontal", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| {
                        (
                            rand_day(&mut rng),
                            Observer::new(
                                rng.random_range(-180.0..180.0),
                                rng.random_range(-85.0..85.0),
                            ),
                        )
                    })
                    .collect::<Vec<_>>()
            },
            |inputs| {
                for (day, site) in inputs {
                    let sun = SunEphemeris::at(day);
                    let moon = MoonEphemeris::at(day, &sun);
                    black_box(moon.horizontal(&sun, &site));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_day_track(c: &mut Criterion) {
    let date = UtcDate::new(2024, 1, 15).unwrap();

    c.bench_function("moon_position/day_track_49_samples", |b| {
        b.iter(|| black_box(moon_day_track(black_box(&date), black_box("KP11MK"))))
    });
}

criterion_group!(benches, bench_moon_horizontal, bench_day_track);
criterion_main!(benches);
