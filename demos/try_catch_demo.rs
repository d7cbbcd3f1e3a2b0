//! Example: guarded config loading with try/catch/finally
//!
//! Run with `RUST_LOG=catch_this=debug cargo run --example try_catch_demo`
//! to see each capture, claim and re-raise logged.

use catch_this::{r#try, throw, try_catch, ThrowExt};
use std::cell::RefCell;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    NotFound { path: String },

    #[error("Invalid config format: {0}")]
    ParseError(String),
}

#[derive(Error, Debug)]
#[error("Connection failed: {0}")]
pub struct DbError(String);

fn read_config(path: &str) -> Result<String, ConfigError> {
    match path {
        "missing.toml" => Err(ConfigError::NotFound { path: path.into() }),
        "invalid.toml" => Err(ConfigError::ParseError("unexpected token".into())),
        _ => Ok("port = 5432".into()),
    }
}

fn connect(url: &str) {
    if url.contains("bad") {
        throw(DbError("refused".into()));
    }
    println!("  connected to {}", url);
}

fn load(path: &str) {
    let steps = RefCell::new(Vec::new());

    r#try(|| {
        let config = read_config(path).or_throw();
        steps.borrow_mut().push(format!("read {:?}", config));
    })
    .catch(|e: ConfigError| steps.borrow_mut().push(format!("config problem: {}", e)))
    .finally((|| steps.borrow_mut().push("closed config file".to_string()),));

    for step in steps.borrow().iter() {
        println!("  {}", step);
    }
}

fn main() {
    env_logger::init();

    println!("=== Typed catch ===");
    load("app.toml");
    load("missing.toml");
    load("invalid.toml");

    println!("\n=== Block syntax with catch-all ===");
    for url in ["postgres://db", "postgres://bad-host"] {
        try_catch! {
            try { connect(url) }
            catch ConfigError(e) { println!("  config: {}", e) }
            catch e { println!("  gave up on {}: {}", url, e) }
            finally { println!("  released pool slot") }
        }
    }

    println!("\n=== Unhandled errors propagate after cleanup ===");
    r#try(|| {
        try_catch! {
            try { connect("postgres://bad-host") }
            catch ConfigError { println!("  not a config problem, skipped") }
            finally { println!("  inner cleanup") }
        }
    })
    .catch(|e: DbError| println!("  outer caught: {}", e))
    .finally(());
}
