//! Compare the recording against the reference table.

use std::{collections::BTreeSet, fmt};

use anyhow::Context;

use crate::{opcode::OpcodeKey, record::Recording, reference::Reference};

/// An observed cycle count that the reference does not allow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub opcode: OpcodeKey,
    pub mnemonic: String,
    pub cycles: u32,
    /// every cycle count observed for this opcode
    pub observed: BTreeSet<u32>,
    pub expected: BTreeSet<u32>,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Opcode {} {} took {} but expects {} (observed {})",
            self.opcode,
            self.mnemonic,
            self.cycles,
            CycleSet(&self.expected),
            CycleSet(&self.observed)
        )
    }
}

/// Prints a set as `{8, 12}`.
struct CycleSet<'a>(&'a BTreeSet<u32>);

impl fmt::Display for CycleSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "}}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub mismatches: Vec<Mismatch>,
    /// distinct opcodes in the recording
    pub recorded: usize,
    /// reference opcodes that never showed up in the recording
    pub unobserved: usize,
}

impl Report {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn failed(&self) -> usize {
        self.mismatches.len()
    }

    pub fn summary(&self) -> String {
        format!("Test failed: {}/{}", self.failed(), self.recorded)
    }
}

/// Check every observed (opcode, cycles) pair against the reference.
///
/// An opcode that the reference does not know about is an error. Cycle
/// counts outside the expected set are collected into the report.
pub fn check(reference: &Reference, recording: &Recording) -> anyhow::Result<Report> {
    let mut mismatches = Vec::new();

    for (opcode, observed) in recording.iter() {
        let expected = reference
            .expected(opcode)
            .with_context(|| format!("unknown opcode {opcode}"))?;
        let mnemonic = reference
            .mnemonic(opcode)
            .with_context(|| format!("no mnemonic for opcode {opcode}"))?;
        tracing::debug!(
            "{opcode} {mnemonic}: observed {}, expected {}",
            CycleSet(observed),
            CycleSet(expected)
        );

        for &cycles in observed.difference(expected) {
            mismatches.push(Mismatch {
                opcode: opcode.clone(),
                mnemonic: mnemonic.to_string(),
                cycles,
                observed: observed.clone(),
                expected: expected.clone(),
            });
        }
    }

    let unobserved = reference
        .keys()
        .filter(|k| recording.observed(k).is_none())
        .count();
    tracing::info!(
        "{} of {} opcodes never executed",
        unobserved,
        reference.len()
    );

    Ok(Report {
        mismatches,
        recorded: recording.len(),
        unobserved,
    })
}
