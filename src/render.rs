//! Array-literal output
//!
//! `[ v1, v2, ..., vN ]` with Absent slots as bare `null`, ready to paste
//! into a test harness.

use std::fmt;
use std::io::Write;

use anyhow::{anyhow, Result};

use crate::tree::{NodeValue, TreeArray};

const OPEN: &str = "[ ";
const SEPARATOR: &str = ", ";
const CLOSE: &str = " ]";

/// Write node values as a single-line array literal
pub fn write_array<W: Write>(writer: &mut W, nodes: &[NodeValue]) -> Result<()> {
    writer.write_all(OPEN.as_bytes())?;

    for (idx, node) in nodes.iter().enumerate() {
        if idx > 0 {
            writer.write_all(SEPARATOR.as_bytes())?;
        }
        write!(writer, "{}", node)?;
    }

    writer.write_all(CLOSE.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Render node values into a string (useful for tests and fingerprints)
pub fn render_array(nodes: &[NodeValue]) -> Result<String> {
    let mut buffer = Vec::with_capacity(nodes.len() * 4 + OPEN.len() + CLOSE.len());
    write_array(&mut buffer, nodes)?;
    String::from_utf8(buffer).map_err(|_| anyhow!("rendered array is not valid UTF-8"))
}

impl fmt::Display for TreeArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(OPEN)?;
        for (idx, node) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(SEPARATOR)?;
            }
            write!(f, "{}", node)?;
        }
        f.write_str(CLOSE)
    }
}
