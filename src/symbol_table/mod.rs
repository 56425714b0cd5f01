//! Declared identifiers and the memory cells assigned to them.
//!
//! There are no nested scopes in Rat25F: a single table covers the whole
//! compilation unit and entries are never removed or renamed.

#[cfg(test)]
mod symbol_table_tests;

use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

pub type Identifier = String;
pub type MemoryAddress = i64;

/// Address of the first declared variable.
pub const MEMORY_BASE: MemoryAddress = 10000;

pub type Result<T> = std::result::Result<T, SymbolError>;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SymbolError {
    #[error("identifier '{0}' already declared")]
    DuplicateDeclaration(Identifier),
    #[error("identifier '{0}' not declared")]
    UndeclaredIdentifier(Identifier),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum VarType {
    Integer,
    Boolean,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SymbolEntry {
    pub identifier: Identifier,
    pub memory_address: MemoryAddress,
    pub var_type: VarType,
}

#[derive(Debug)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
    index: HashMap<Identifier, usize>,
    next_address: MemoryAddress,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            next_address: MEMORY_BASE,
        }
    }

    /// Declares `identifier` and returns the memory address assigned to it.
    pub fn insert(&mut self, identifier: &str, var_type: VarType) -> Result<MemoryAddress> {
        if self.index.contains_key(identifier) {
            return Err(SymbolError::DuplicateDeclaration(identifier.to_owned()));
        }

        let memory_address = self.next_address;
        self.next_address += 1;
        self.index.insert(identifier.to_owned(), self.entries.len());
        self.entries.push(SymbolEntry {
            identifier: identifier.to_owned(),
            memory_address,
            var_type,
        });
        Ok(memory_address)
    }

    pub fn lookup(&self, identifier: &str) -> Option<&SymbolEntry> {
        self.index.get(identifier).map(|&i| &self.entries[i])
    }

    fn lookup_or_error(&self, identifier: &str) -> Result<&SymbolEntry> {
        self.lookup(identifier)
            .ok_or_else(|| SymbolError::UndeclaredIdentifier(identifier.to_owned()))
    }

    pub fn get_address(&self, identifier: &str) -> Result<MemoryAddress> {
        self.lookup_or_error(identifier).map(|e| e.memory_address)
    }

    pub fn get_type(&self, identifier: &str) -> Result<VarType> {
        self.lookup_or_error(identifier).map(|e| e.var_type)
    }

    /// Whether two declared identifiers share a type. Nothing in code
    /// generation enforces this.
    pub fn types_match(&self, first: &str, second: &str) -> Result<bool> {
        Ok(self.get_type(first)? == self.get_type(second)?)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Integer => "integer",
            Self::Boolean => "boolean",
        };
        f.pad(name)
    }
}
