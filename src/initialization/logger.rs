//! Logger initialization.
//!
//! Records may carry key-values (the completion record of every request does:
//! `Status`, `Response Length`, `Unique Headers`). Both formats keep them as
//! separate fields: JSON lines get one key per field, plain lines append
//! `key=value` pairs after the message.

use std::io::Write;

use colored::*;
use log::kv::{self, Key, Value, VisitSource};
use log::{LevelFilter, Record};
use serde_json::{Map, Number};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Initializes the logger with the specified level and format.
///
/// `RUST_LOG` is read first and the provided `level` overrides it for this
/// crate, so `RUST_LOG=reqwest=debug` still works for digging into the client.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=reqwest=debug tamperbay -u example.com --log-level debug
/// tamperbay -u example.com --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("rustls", LevelFilter::Warn);
    builder.filter_module("tamperbay", level);

    match format {
        LogFormat::Json => builder.format(|buf, record| {
            writeln!(
                buf,
                "{}",
                format_json(record, chrono::Utc::now().timestamp_millis())
            )
        }),
        LogFormat::Plain => builder.format(|buf, record| writeln!(buf, "{}", format_plain(record))),
    };

    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Key-values of a record, in the order the source yields them.
#[derive(Default)]
struct Fields(Vec<(String, serde_json::Value)>);

impl<'kvs> VisitSource<'kvs> for Fields {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), kv::Error> {
        self.0.push((key.to_string(), json_value(&value)));
        Ok(())
    }
}

/// Numbers and booleans stay typed; everything else becomes a string.
fn json_value(value: &Value<'_>) -> serde_json::Value {
    if let Some(n) = value.to_u64() {
        serde_json::Value::from(n)
    } else if let Some(n) = value.to_i64() {
        serde_json::Value::from(n)
    } else if let Some(b) = value.to_bool() {
        serde_json::Value::Bool(b)
    } else if let Some(n) = value.to_f64().and_then(Number::from_f64) {
        serde_json::Value::Number(n)
    } else {
        serde_json::Value::String(value.to_string())
    }
}

fn record_fields(record: &Record<'_>) -> Vec<(String, serde_json::Value)> {
    let mut fields = Fields::default();
    // Collecting into a Vec never fails
    let _ = record.key_values().visit(&mut fields);
    fields.0
}

/// Renders a record as one JSON object: `ts`, `level`, `target`, `msg` plus
/// one key per record field.
pub(crate) fn format_json(record: &Record<'_>, ts: i64) -> String {
    let mut line = Map::new();
    line.insert("ts".to_string(), ts.into());
    line.insert("level".to_string(), record.level().as_str().into());
    line.insert("target".to_string(), record.target().into());
    line.insert("msg".to_string(), record.args().to_string().into());
    for (key, value) in record_fields(record) {
        line.insert(key, value);
    }
    serde_json::Value::Object(line).to_string()
}

/// Renders a record as `LEVEL [target] message key=value ...`.
///
/// Keys containing whitespace are quoted so the pairs stay splittable.
pub(crate) fn format_plain(record: &Record<'_>) -> String {
    let level = record.level();
    let colored_level = match level {
        log::Level::Error => level.as_str().red(),
        log::Level::Warn => level.as_str().yellow(),
        log::Level::Info => level.as_str().green(),
        log::Level::Debug => level.as_str().blue(),
        log::Level::Trace => level.as_str().purple(),
    };

    let mut line = format!(
        "{:5} [{}] {}",
        colored_level,
        record.target().cyan(),
        record.args()
    );
    for (key, value) in record_fields(record) {
        let value = match value {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        if key.contains(char::is_whitespace) {
            line.push_str(&format!(" \"{key}\"={value}"));
        } else {
            line.push_str(&format!(" {key}={value}"));
        }
    }
    line
}
