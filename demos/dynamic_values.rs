//! Feeding serde-serializable values through the dynamic layer.
//!
//! Run with: cargo run --example dynamic_values

use serde::Serialize;
use std::error::Error;
use toml_builder::{to_value, TomlBuilder};

#[derive(Serialize)]
enum LogLevel {
    Info,
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut builder = TomlBuilder::new();

    // Anything serde can serialize to a supported shape goes straight in.
    builder
        .add_serialized("retries", &3u8, None)?
        .add_serialized("hosts", &["alpha", "beta"], None)?
        .add_serialized("level", &LogLevel::Info, None)?;

    // Values converted up front can be inspected before adding.
    let ratio = to_value(&0.25f64)?;
    println!("converted: {:?}", ratio);
    builder.add_value("ratio", ratio, None)?;

    // Shapes TOML key-values cannot carry are rejected with the key named.
    let rejected = builder.add_serialized("settings", &serde_json::json!({"a": 1}), None);
    println!("rejected: {}", rejected.unwrap_err());

    println!("\n{}", builder.as_str());
    Ok(())
}
