use eyre::{Result, WrapErr};
use schedule_bag_core::{
    codec::{self, Document},
    contract,
};
use serde_json::Value;
use std::{
    fs,
    io::{Read, Write},
};
use tracing::{info, warn};

pub mod config;

use config::ToolConfig;

/// Decode bag JSON from `input` and write it back out in normalized form.
///
/// A single object produces a single object; an array produces an array.
/// Normalization applies the configured absent-field policy and lowercases
/// GUIDs.
///
/// # Returns
///
/// The number of bags written.
pub fn normalize<R, W>(input: R, mut output: W, config: &ToolConfig) -> Result<usize>
where
    R: Read,
    W: Write,
{
    let options = config.codec_options();

    let document = codec::read_document(input, &options)
        .inspect_err(|e| warn!("Rejected input: {}", e))
        .wrap_err("Failed to decode schedule preference assignments")?;
    let count = document.bags().len();

    let encoded = match &document {
        Document::Single(bag) => codec::encode_value(bag, &options),
        Document::Batch(bags) => bags
            .iter()
            .map(|bag| codec::encode_value(bag, &options))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
    }
    .wrap_err("Failed to encode schedule preference assignments")?;

    serde_json::to_writer(&mut output, &encoded).wrap_err("Failed to write output")?;
    writeln!(output).wrap_err("Failed to write output")?;

    info!(count, "Normalized schedule preference assignments");
    Ok(count)
}

/// Write the generated TypeScript declaration to the configured destination,
/// or to `fallback` when no output file is configured.
pub fn generate<W: Write>(mut fallback: W, config: &ToolConfig) -> Result<()> {
    let declaration = contract::typescript_declaration();

    match &config.codegen_out {
        Some(path) => {
            fs::write(path, &declaration)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Generated {}", contract::TYPE_NAME);
        }
        None => {
            fallback
                .write_all(declaration.as_bytes())
                .wrap_err("Failed to write declaration")?;
        }
    }

    Ok(())
}
