//! Where command results go.

use anyhow::Context;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::Common;

/// stdout, or the `--output` file when one was given.
pub fn sink(common: &Common) -> anyhow::Result<Box<dyn Write>> {
    match &common.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("Cannot create {}", path))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Serialize `value` as JSON followed by a newline.
pub fn write_json<T: Serialize>(common: &Common, value: &T) -> anyhow::Result<()> {
    let mut out = sink(common)?;
    write_json_to(&mut out, value, common.pretty)?;
    out.flush()?;
    if let Some(path) = &common.output {
        log::info!("Wrote {}", path);
    }
    Ok(())
}

pub fn write_json_to<W: Write, T: Serialize>(out: &mut W, value: &T, pretty: bool) -> anyhow::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_and_pretty_json_end_with_newline() {
        let mut buf = Vec::new();
        write_json_to(&mut buf, &serde_json::json!({"rows": 2}), false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "{\"rows\":2}\n");

        let mut buf = Vec::new();
        write_json_to(&mut buf, &serde_json::json!({"rows": 2}), true).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "{\n  \"rows\": 2\n}\n");
    }
}
