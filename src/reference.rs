//! The reference opcode table: which cycle counts each opcode may take.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::Path,
};

use anyhow::{bail, ensure, Context};
use serde::Deserialize;

use crate::opcode::{OpcodeKey, PREFIX_MARKER};

/// One entry of the opcode table. Fields other than these two (`bytes`,
/// `operands`, `flags`, ...) are ignored.
#[derive(Debug, Deserialize)]
struct OpcodeEntry {
    mnemonic: String,
    cycles: Vec<u32>,
}

#[derive(Debug, Deserialize)]
struct OpcodeTable {
    unprefixed: BTreeMap<String, OpcodeEntry>,
    cbprefixed: BTreeMap<String, OpcodeEntry>,
}

/// Expected cycle counts and mnemonics of every opcode, in both decoding
/// tables. Built once and never modified afterwards.
#[derive(Debug, Default)]
pub struct Reference {
    cycles: BTreeMap<OpcodeKey, BTreeSet<u32>>,
    mnemonics: BTreeMap<OpcodeKey, String>,
}

impl Reference {
    /// Read the opcode table from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("could not read file `{}`", path.display()))?;
        let r = Self::from_json(&content)
            .with_context(|| format!("invalid opcode table `{}`", path.display()))?;
        tracing::info!(
            "loaded {} opcodes from `{}`",
            r.len(),
            path.display()
        );
        Ok(r)
    }

    pub fn from_json(src: &str) -> anyhow::Result<Self> {
        let table: OpcodeTable = serde_json::from_str(src)?;
        let mut r = Self::default();

        for (code, entry) in table.unprefixed {
            // would print the same as a prefixed opcode in diagnostics
            if code.starts_with(PREFIX_MARKER) {
                bail!("unprefixed opcode `{code}` starts with `{PREFIX_MARKER}`");
            }
            r.insert(OpcodeKey::primary(&code), entry)?;
        }
        for (code, entry) in table.cbprefixed {
            r.insert(OpcodeKey::prefixed(&code), entry)?;
        }
        Ok(r)
    }

    fn insert(&mut self, key: OpcodeKey, entry: OpcodeEntry) -> anyhow::Result<()> {
        ensure!(
            !entry.cycles.is_empty(),
            "opcode {key} ({}) has no cycle counts",
            entry.mnemonic
        );
        tracing::trace!("{key} {} {:?}", entry.mnemonic, entry.cycles);
        let replaced = self
            .cycles
            .insert(key.clone(), entry.cycles.into_iter().collect());
        debug_assert!(replaced.is_none(), "opcode {key} inserted twice");
        self.mnemonics.insert(key, entry.mnemonic);
        Ok(())
    }

    /// Cycle counts the opcode is allowed to take.
    pub fn expected(&self, key: &OpcodeKey) -> Option<&BTreeSet<u32>> {
        self.cycles.get(key)
    }

    pub fn mnemonic(&self, key: &OpcodeKey) -> Option<&str> {
        self.mnemonics.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &OpcodeKey> {
        self.cycles.keys()
    }

    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }
}
