use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use finance_api::domain::{Transaction, TransactionFields, TransactionKind, User, parse_id};

fn bench_parse_id(c: &mut Criterion) {
    c.bench_function("parse_id_numeric", |b| {
        b.iter(|| parse_id(black_box("123456")))
    });

    c.bench_function("parse_id_trailing_garbage", |b| {
        b.iter(|| parse_id(black_box("  42abc")))
    });

    c.bench_function("parse_id_hex", |b| b.iter(|| parse_id(black_box("0x2a"))));
}

fn bench_fields_apply(c: &mut Criterion) {
    let update = TransactionFields::new()
        .with_amount(999999)
        .with_description("Belanja bulanan");
    let seed = TransactionFields::record(TransactionKind::Expense, 200000, "Belanja");

    c.bench_function("transaction_fields_apply", |b| {
        b.iter(|| {
            let mut tx = Transaction::new(1, seed.clone());
            black_box(&update).apply(&mut tx);
            tx
        })
    });
}

fn bench_transaction_scan(c: &mut Criterion) {
    let mut user = User {
        id: 1,
        name: "Bench".to_string(),
        email: "bench@example.com".to_string(),
        password: "pass".to_string(),
        gender: "-".to_string(),
        phone: "-".to_string(),
        transactions: Vec::new(),
    };
    for i in 0..1_000_i32 {
        user.push_transaction(TransactionFields::record(TransactionKind::Income, i, "seed"));
    }

    c.bench_function("transaction_linear_scan_last", |b| {
        b.iter(|| user.transaction_mut(black_box(1_000)).map(|t| t.id))
    });
}

criterion_group!(benches, bench_parse_id, bench_fields_apply, bench_transaction_scan);
criterion_main!(benches);
