//! Seed data loaded at process start.

use crate::domain::{Article, Transaction, TransactionFields, TransactionKind, User};

pub fn users() -> Vec<User> {
    vec![User {
        id: 1,
        name: "Heru".to_string(),
        email: "123@gmail.com".to_string(),
        password: "pass".to_string(),
        gender: "Laki-laki".to_string(),
        phone: "089123456789".to_string(),
        transactions: vec![
            Transaction::new(
                1,
                TransactionFields::record(TransactionKind::Income, 500000, "Gaji"),
            ),
            Transaction::new(
                2,
                TransactionFields::record(TransactionKind::Expense, 200000, "Belanja"),
            ),
        ],
    }]
}

pub fn articles() -> Vec<Article> {
    vec![
        Article::new(
            1,
            "Tips Mengatur Keuangan Pribadi",
            "Pelajari cara mengelola keuangan Anda dengan bijak.",
        ),
        Article::new(
            2,
            "Investasi untuk Pemula",
            "Langkah awal untuk memulai investasi yang aman.",
        ),
    ]
}
