use criterion::{black_box, criterion_group, criterion_main, Criterion};

const ROUTES: &[&str] = &[
    "login",
    "logout",
    "callback",
    "profile:admin",
    "profile:{user}",
    "profile:{user}:followers",
    "user:list",
    "user:list:{userId}:{kind}",
    "{appId}:user:list:{userId}:{kind}",
];

fn resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("Resolve");

    let mut router = beckon::Router::new("app");
    router.set_routes(ROUTES.iter().copied()).unwrap();

    let literal = ["app://login", "app://profile:admin", "app://user:list"];
    group.bench_function("literal", |b| {
        b.iter(|| {
            for url in black_box(&literal) {
                let location = black_box(router.resolve(url).unwrap());
                assert!(location.arguments.is_empty());
            }
        });
    });

    let wildcard = [
        "app://profile:jack",
        "app://user:list:1:admin",
        "app://12:user:list:1:admin",
    ];
    group.bench_function("wildcard", |b| {
        b.iter(|| {
            for url in black_box(&wildcard) {
                let location = black_box(router.resolve(url).unwrap());
                assert!(!location.arguments.is_empty());
            }
        });
    });

    let oauth = "app://callback/#access_token=ya29.Ci8nA1pNVMFffHkS5-sXooNGvTB9q8QPtoM56sWpipRyjhwwEiKyZxvRQTR8saqWzQ=&token_type=Bearer&expires_in=3600";
    group.bench_function("oauth callback", |b| {
        b.iter(|| {
            let location = black_box(router.resolve(black_box(oauth)).unwrap());
            assert_eq!(location.arguments.len(), 3);
        });
    });

    let miss = ["web://login", "app://user:list:1", "app://nope"];
    group.bench_function("no match", |b| {
        b.iter(|| {
            for url in black_box(&miss) {
                assert!(router.resolve(url).is_none());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, resolve);
criterion_main!(benches);
