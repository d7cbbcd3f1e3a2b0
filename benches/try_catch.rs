//! Benchmarks for the try/catch chain.
//!
//! Compares the combinator against a bare `catch_unwind` doing the same
//! work: same panics, same downcasts.
//!
//! Run with: cargo bench

use catch_this::{r#try, throw, try_catch};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::any::Any;
use std::io;
use std::panic::{self, AssertUnwindSafe};

// ============================================================
// Test helpers
// ============================================================

#[inline(never)]
fn io_err(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::Other, msg)
}

/// Silence the panic hook so failure benchmarks measure unwinding, not stderr.
fn quiet_panics() {
    panic::set_hook(Box::new(|_| {}));
}

// ============================================================
// 1. SUCCESS PATH: callback returns normally
// ============================================================

fn bench_success_chain(c: &mut Criterion) {
    c.bench_function("success_chain", |b| {
        b.iter(|| {
            let mut hits = 0;
            r#try(|| hits += black_box(1))
                .catch(|_: io::Error| hits = -1)
                .finally(());
            black_box(hits)
        })
    });
}

fn bench_success_rust(c: &mut Criterion) {
    c.bench_function("success_rust", |b| {
        b.iter(|| {
            let mut hits = 0;
            let _ = panic::catch_unwind(AssertUnwindSafe(|| hits += black_box(1)));
            black_box(hits)
        })
    });
}

// ============================================================
// 2. TYPED CATCH: panic with an error, claimed by type
// ============================================================

fn bench_typed_match_chain(c: &mut Criterion) {
    quiet_panics();
    c.bench_function("typed_match_chain", |b| {
        b.iter(|| {
            let mut len = 0;
            r#try(|| throw(io_err("fail")))
                .catch(|e: io::Error| len = e.to_string().len())
                .finally(());
            black_box(len)
        })
    });
}

fn bench_typed_match_rust(c: &mut Criterion) {
    quiet_panics();
    c.bench_function("typed_match_rust", |b| {
        b.iter(|| {
            let mut len = 0;
            let payload: Box<dyn Any + Send> = match panic::catch_unwind(|| {
                let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(io_err("fail"));
                panic::panic_any(boxed)
            }) {
                Ok(()) => Box::new(()),
                Err(payload) => payload,
            };
            if let Ok(boxed) = payload.downcast::<Box<dyn std::error::Error + Send + Sync>>() {
                if let Some(e) = boxed.downcast_ref::<io::Error>() {
                    len = e.to_string().len();
                }
            }
            black_box(len)
        })
    });
}

// ============================================================
// 3. FALLBACK: typed miss, then catch-all
// ============================================================

fn bench_fallback_chain(c: &mut Criterion) {
    quiet_panics();
    c.bench_function("fallback_chain", |b| {
        b.iter(|| {
            let mut len = 0;
            r#try(|| panic!("plain"))
                .catch(|_: io::Error| len = 1)
                .catch_all(|e| len = e.message().len())
                .finally(());
            black_box(len)
        })
    });
}

fn bench_fallback_macro(c: &mut Criterion) {
    quiet_panics();
    c.bench_function("fallback_macro", |b| {
        b.iter(|| {
            let mut len = 0;
            try_catch! {
                try { panic!("plain") }
                catch io::Error { len = 1 }
                catch e { len = e.message().len() }
            }
            black_box(len)
        })
    });
}

// ============================================================
// 4. RE-RAISE: unhandled error crosses two boundaries
// ============================================================

fn bench_nested_reraise(c: &mut Criterion) {
    quiet_panics();
    c.bench_function("nested_reraise", |b| {
        b.iter(|| {
            let mut cleaned = 0;
            let mut caught = false;
            r#try(|| {
                r#try(|| throw(io_err("deep"))).finally((|| cleaned += 1,));
            })
            .catch(|_: io::Error| caught = true)
            .finally(());
            black_box((cleaned, caught))
        })
    });
}

criterion_group!(success_path, bench_success_chain, bench_success_rust);

criterion_group!(
    typed_catch,
    bench_typed_match_chain,
    bench_typed_match_rust,
    bench_fallback_chain,
    bench_fallback_macro,
);

criterion_group!(nested, bench_nested_reraise);

criterion_main!(success_path, typed_catch, nested);
