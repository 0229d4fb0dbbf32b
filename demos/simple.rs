//! Building a small server configuration document.
//!
//! Run with: cargo run --example simple

use chrono::{TimeZone, Utc};
use std::error::Error;
use toml_builder::{value, TomlBuilder};

fn main() -> Result<(), Box<dyn Error>> {
    let mut builder = TomlBuilder::new();
    builder
        .add_comment(" Example configuration")
        .add_value("title", "TOML Example", None)?
        .add_group("owner")?
        .add_value("name", "Tom Preston-Werner", None)?
        .add_value(
            "dob",
            Utc.with_ymd_and_hms(1979, 5, 27, 7, 32, 0).unwrap(),
            Some("First class dates"),
        )?
        .add_group("database")?
        .add_value("server", "192.168.1.1", None)?
        .add_value("ports", value!([8001, 8001, 8002]), None)?
        .add_value("connection_max", 5000, None)?
        .add_value("enabled", true, None)?;

    println!("{}", builder.as_str());
    Ok(())
}
