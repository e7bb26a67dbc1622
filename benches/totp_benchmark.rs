use criterion::{Criterion, criterion_group, criterion_main};
use twofactor::{Totp, TotpConfig, TotpSecret};

const SECRET: &str = "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8";

fn generation_benchmark(c: &mut Criterion) {
    let totp = Totp::new(TotpConfig::default());
    let secret = TotpSecret::new(SECRET).unwrap();

    let mut group = c.benchmark_group("totp");
    group.bench_function("generate_at", |b| {
        b.iter(|| totp.generate_at(&secret, 56_666_666))
    });
    group.finish();
}

fn verification_benchmark(c: &mut Criterion) {
    let totp = Totp::new(TotpConfig::default());

    let mut group = c.benchmark_group("totp");
    group.bench_function("verify window 1", |b| {
        b.iter(|| totp.verify("793923", SECRET))
    });
    group.finish();
}

criterion_group!(benches, generation_benchmark, verification_benchmark);
criterion_main!(benches);
