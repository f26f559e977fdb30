//! Execution log written by the emulator.
//!
//! Each line records one executed instruction and the number of cycles it
//! took:
//!
//! ```text
//! 0x20 8
//! pre 0x46 12
//! ```
//!
//! Lines with only whitespace are skipped. This covers the trailing newline
//! at the end of the log.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::Path,
};

use anyhow::{bail, Context};

use crate::opcode::{OpcodeKey, PREFIX_MARKER};

/// Distinct cycle counts observed for each opcode.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Recording {
    observed: BTreeMap<OpcodeKey, BTreeSet<u32>>,
    lines_read: usize,
}

impl Recording {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("could not read file `{}`", path.display()))?;
        let r = Self::parse(&content)
            .with_context(|| format!("invalid recording `{}`", path.display()))?;
        tracing::info!(
            "read {} lines, {} distinct (opcode, cycles) pairs over {} opcodes from `{}`",
            r.lines_read,
            r.total_observations(),
            r.len(),
            path.display()
        );
        Ok(r)
    }

    pub fn parse(src: &str) -> anyhow::Result<Self> {
        let mut r = Self::default();
        for (idx, line) in src.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let (key, cycles) =
                parse_line(line).with_context(|| format!("line {}: `{}`", idx + 1, line))?;
            tracing::trace!("{key} {cycles}");
            r.observe(key, cycles);
            r.lines_read += 1;
        }
        Ok(r)
    }

    /// Record one execution. Observing the same pair twice is a no-op.
    pub fn observe(&mut self, key: OpcodeKey, cycles: u32) {
        self.observed.entry(key).or_default().insert(cycles);
    }

    pub fn observed(&self, key: &OpcodeKey) -> Option<&BTreeSet<u32>> {
        self.observed.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OpcodeKey, &BTreeSet<u32>)> {
        self.observed.iter()
    }

    /// Number of non-blank lines consumed.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Number of distinct opcodes.
    pub fn len(&self) -> usize {
        self.observed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    /// Number of distinct (opcode, cycles) pairs.
    pub fn total_observations(&self) -> usize {
        self.observed.values().map(BTreeSet::len).sum()
    }
}

fn parse_line(line: &str) -> anyhow::Result<(OpcodeKey, u32)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let (key, cycles) = match fields[..] {
        [marker, code, cycles] if marker == PREFIX_MARKER => (OpcodeKey::prefixed(code), cycles),
        [code, _] if code.starts_with(PREFIX_MARKER) => bail!(
            "`{code}` starts with `{PREFIX_MARKER}`, expected `{PREFIX_MARKER} <opcode> <cycles>`"
        ),
        [code, cycles] => (OpcodeKey::primary(code), cycles),
        _ => bail!(
            "expected `<opcode> <cycles>` or `{PREFIX_MARKER} <opcode> <cycles>`, found {} fields",
            fields.len()
        ),
    };
    let cycles = cycles
        .parse::<u32>()
        .with_context(|| format!("invalid cycle count `{cycles}`"))?;
    Ok((key, cycles))
}
