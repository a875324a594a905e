use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde_json::{Map, Value};
use terraform_provider_null::NullProviderError;
use terraform_provider_null::data_sources::null::{HAS_COMPUTED_DEFAULT, INPUTS};

use super::args::ReadArgs;

/// Builds the configuration document for `read`: the `--config` document
/// (if any) with `--input` and `--has-computed-default` merged on top.
pub fn load_config(args: &ReadArgs) -> Result<Value, NullProviderError> {
    let document = match args.config.as_deref() {
        None => Value::Null,
        Some(path) if path == Path::new("-") => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw)?;
            parse_document(&raw)?
        }
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            parse_document(&fs::read_to_string(path)?)?
        }
    };

    merge_flags(document, &args.inputs, args.has_computed_default.as_deref())
}

fn parse_document(raw: &str) -> Result<Value, NullProviderError> {
    if raw.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(raw)?)
}

fn merge_flags(
    document: Value,
    inputs: &[(String, String)],
    has_computed_default: Option<&str>,
) -> Result<Value, NullProviderError> {
    if inputs.is_empty() && has_computed_default.is_none() {
        return Ok(document);
    }

    let mut object = match document {
        Value::Null => Map::new(),
        Value::Object(object) => object,
        _ => {
            return Err(NullProviderError::Config(
                "configuration document must be a JSON object".to_string(),
            ));
        }
    };

    if !inputs.is_empty() {
        let entry = object
            .entry(INPUTS)
            .or_insert_with(|| Value::Object(Map::new()));
        if entry.is_null() {
            *entry = Value::Object(Map::new());
        }
        let merged = entry.as_object_mut().ok_or_else(|| {
            NullProviderError::Config(format!("\"{INPUTS}\" must be an object to merge --input"))
        })?;
        for (key, value) in inputs {
            merged.insert(key.clone(), Value::String(value.clone()));
        }
    }

    if let Some(value) = has_computed_default {
        object.insert(
            HAS_COMPUTED_DEFAULT.to_string(),
            Value::String(value.to_string()),
        );
    }

    Ok(Value::Object(object))
}
