use criterion::{black_box, criterion_group, criterion_main, Criterion};
use variant_sum::{define, payload, Arg, Cases};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("define maybe", |b| {
        b.iter(|| define(black_box(&["Nothing", "Just"])))
    });

    c.bench_function("construct just", |b| {
        let maybe = define(&["Nothing", "Just"]);
        let just = maybe.constructor("Just").unwrap();
        b.iter(|| just.call(payload![black_box(3i32)]))
    });

    c.bench_function("dispatch just", |b| {
        let maybe = define(&["Nothing", "Just"]);
        let value = maybe.construct("Just", payload![3i32]).unwrap();
        let cases = Cases::new()
            .on("Just", |args| args[0].downcast_ref::<i32>().unwrap() + 1)
            .on("Nothing", |_| 0);
        b.iter(|| black_box(&value).cases(&cases).unwrap())
    });

    c.bench_function("dispatch fallback", |b| {
        let color = define(&["Red", "Green", "Blue", "Alpha"]);
        let value = color.construct("Alpha", payload![0.5f64]).unwrap();
        let cases = Cases::new().on("Red", |_| 0u8).otherwise(|| 1u8);
        b.iter(|| black_box(&value).cases(&cases).unwrap())
    });

    c.bench_function("shared method call", |b| {
        let maybe = define(&["Nothing", "Just"]);
        maybe
            .surface()
            .insert_method("is_just", |this, _| Arg::new(this.is("Just")));
        let value = maybe.construct("Just", payload![3i32]).unwrap();
        b.iter(|| black_box(&value).call_as::<bool>("is_just", &[]).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
