//! Interop with `anyhow` (feature `anyhow`).
#![cfg(feature = "anyhow")]

use anyhow::Context;
use catch_this::{r#try, Error};

#[test]
fn anyhow_payload_is_captured_as_error() {
    let mut message = String::new();

    r#try(|| {
        let report = anyhow::anyhow!("config missing");
        std::panic::panic_any(report)
    })
    .catch_all(|e| message = e.message().to_string())
    .finally(());

    assert_eq!(message, "config missing");
}

#[test]
fn from_anyhow_keeps_the_source_chain() {
    let report = std::fs::read_to_string("/definitely/not/here")
        .context("loading settings")
        .unwrap_err();

    let err = Error::from_anyhow(report);
    assert_eq!(err.message(), "loading settings");
    assert!(err.as_error().source().is_some());
}
