//! # JSON Codec
//!
//! Decoding and encoding of [`SchedulePreferenceAssignmentBag`] at the
//! request/response boundary. The bag's own serde implementation preserves
//! the absent/null distinction; this module layers the producer's emission
//! convention and an optional strict-key check on top of it.

use serde_json::Value;
use std::io::Read;
use tracing::debug;

use crate::{
    contract,
    errors::{BagError, BagResult},
    models::group_schedule_toolbox::SchedulePreferenceAssignmentBag,
};

/// How fields that are absent on the bag are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AbsentPolicy {
    /// Leave the key out.
    #[default]
    Omit,
    /// Write the key with a `null` value.
    EmitNull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecOptions {
    pub absent_policy: AbsentPolicy,
    /// Reject keys that are not part of the contract.
    pub strict_fields: bool,
}

/// A decoded input document: one bag object or an array of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    Single(SchedulePreferenceAssignmentBag),
    Batch(Vec<SchedulePreferenceAssignmentBag>),
}

impl Document {
    pub fn bags(&self) -> &[SchedulePreferenceAssignmentBag] {
        match self {
            Document::Single(bag) => std::slice::from_ref(bag),
            Document::Batch(bags) => bags,
        }
    }

    pub fn into_bags(self) -> Vec<SchedulePreferenceAssignmentBag> {
        match self {
            Document::Single(bag) => vec![bag],
            Document::Batch(bags) => bags,
        }
    }
}

/// Decodes a single bag object.
///
/// Key checks run against the parsed value, but the bag itself is read
/// straight from `input` so duplicate keys are rejected.
pub fn decode(input: &str, options: &CodecOptions) -> BagResult<SchedulePreferenceAssignmentBag> {
    let value: Value = serde_json::from_str(input).map_err(BagError::Decode)?;
    check_object(&value, options)?;

    let bag: SchedulePreferenceAssignmentBag =
        serde_json::from_str(input).map_err(BagError::Decode)?;
    debug!(?bag, "decoded schedule preference assignment");
    Ok(bag)
}

pub fn decode_value(
    value: Value,
    options: &CodecOptions,
) -> BagResult<SchedulePreferenceAssignmentBag> {
    check_object(&value, options)?;

    let bag: SchedulePreferenceAssignmentBag =
        serde_json::from_value(value).map_err(BagError::Decode)?;
    debug!(?bag, "decoded schedule preference assignment");
    Ok(bag)
}

/// Decodes either a single bag object or an array of them, keeping the
/// shape of the input.
pub fn decode_document(input: &str, options: &CodecOptions) -> BagResult<Document> {
    let value: Value = serde_json::from_str(input).map_err(BagError::Decode)?;

    match &value {
        Value::Array(items) => {
            for item in items {
                check_object(item, options)?;
            }
            let bags: Vec<SchedulePreferenceAssignmentBag> =
                serde_json::from_str(input).map_err(BagError::Decode)?;
            debug!(count = bags.len(), "decoded schedule preference assignments");
            Ok(Document::Batch(bags))
        }
        _ => decode(input, options).map(Document::Single),
    }
}

pub fn decode_many(
    input: &str,
    options: &CodecOptions,
) -> BagResult<Vec<SchedulePreferenceAssignmentBag>> {
    decode_document(input, options).map(Document::into_bags)
}

/// Reads a whole document from `reader` and decodes it.
pub fn read_document<R: Read>(mut reader: R, options: &CodecOptions) -> BagResult<Document> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    decode_document(&raw, options)
}

pub fn encode(bag: &SchedulePreferenceAssignmentBag, options: &CodecOptions) -> BagResult<String> {
    let value = encode_value(bag, options)?;
    serde_json::to_string(&value).map_err(BagError::Encode)
}

pub fn encode_value(
    bag: &SchedulePreferenceAssignmentBag,
    options: &CodecOptions,
) -> BagResult<Value> {
    let mut value = serde_json::to_value(bag).map_err(BagError::Encode)?;

    if options.absent_policy == AbsentPolicy::EmitNull {
        if let Value::Object(object) = &mut value {
            for name in contract::field_names() {
                object.entry(name).or_insert(Value::Null);
            }
        }
    }

    debug!(policy = ?options.absent_policy, "encoded schedule preference assignment");
    Ok(value)
}

fn check_object(value: &Value, options: &CodecOptions) -> BagResult<()> {
    let object = match value {
        Value::Object(object) => object,
        other => return Err(BagError::NotAnObject(json_kind(other))),
    };

    for key in object.keys() {
        if contract::is_known_field(key) {
            continue;
        }
        if options.strict_fields {
            return Err(BagError::UnknownField(key.clone()));
        }
        debug!(field = %key, "ignoring unknown field");
    }
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
