//! Report emission using [Display]
//!
//! Implements [Display] for the final tables and the derivation trace, and
//! provides [`Report`], the complete text written for one compiled file.
//!
//! [Display]: https://doc.rust-lang.org/std/fmt/trait.Display.html

#[cfg(test)]
mod emission_tests;

use crate::codegen::InstructionTable;
use crate::parser::{Compilation, DerivationTrace};
use crate::symbol_table::SymbolTable;

use std::fmt;

const RULE_WIDTH: usize = 50;

fn double_rule(f: &mut fmt::Formatter) -> fmt::Result {
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))
}

fn single_rule(f: &mut fmt::Formatter) -> fmt::Result {
    writeln!(f, "{}", "-".repeat(RULE_WIDTH))
}

impl fmt::Display for DerivationTrace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for entry in self.iter() {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl fmt::Display for InstructionTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Assembly Code")?;
        double_rule(f)?;
        for line in self.render() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Symbol Table")?;
        double_rule(f)?;
        writeln!(f, "{:<20} {:<20} {:<10}", "Identifier", "MemoryLocation", "Type")?;
        single_rule(f)?;
        for entry in self.iter() {
            writeln!(
                f,
                "{:<20} {:<20} {:<10}",
                entry.identifier, entry.memory_address, entry.var_type
            )?;
        }
        Ok(())
    }
}

enum Outcome<'a> {
    Compiled(&'a Compilation),
    Failed(String),
}

/// Text written for one input file.
pub struct Report<'a> {
    outcome: Outcome<'a>,
    with_trace: bool,
}

impl<'a> Report<'a> {
    pub fn success(compilation: &'a Compilation) -> Self {
        Self {
            outcome: Outcome::Compiled(compilation),
            with_trace: true,
        }
    }

    pub fn failure(diagnostic: impl fmt::Display) -> Self {
        Self {
            outcome: Outcome::Failed(diagnostic.to_string()),
            with_trace: true,
        }
    }

    #[must_use]
    pub fn with_trace(mut self, with_trace: bool) -> Self {
        self.with_trace = with_trace;
        self
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Compiled(_))
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let compilation = match &self.outcome {
            Outcome::Failed(diagnostic) => {
                writeln!(f, "Compilation Failed!")?;
                double_rule(f)?;
                writeln!(f)?;
                return writeln!(f, "{diagnostic}");
            }
            Outcome::Compiled(compilation) => compilation,
        };

        writeln!(f, "Compilation Successful!")?;
        double_rule(f)?;
        writeln!(f)?;

        if self.with_trace {
            writeln!(f, "SYNTAX ANALYSIS")?;
            single_rule(f)?;
            write!(f, "{}", compilation.trace)?;
            writeln!(f)?;
        }

        write!(f, "{}", compilation.instructions)?;
        writeln!(f)?;
        write!(f, "{}", compilation.symbols)
    }
}
