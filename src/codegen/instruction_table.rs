use crate::symbol_table::MemoryAddress;
use std::fmt;

/// 1-based position of an instruction in the table.
pub type Address = usize;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Opcode {
    PushM,
    PushI,
    PopM,
    Add,
    Sub,
    Mul,
    Div,
    Les,
    Grt,
    Equ,
    Neq,
    Leq,
    Geq,
    Jump,
    JumpZ,
    Label,
    StdIn,
    StdOut,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Operand {
    /// literal pushed by `PUSHI`
    Immediate(i64),
    /// variable cell used by `PUSHM`/`POPM`
    Memory(MemoryAddress),
    /// instruction address used by `JUMP`/`JUMPZ`
    Target(Address),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Instruction {
    pub address: Address,
    pub opcode: Opcode,
    pub operand: Option<Operand>,
}

/// Append-only list of generated instructions.
///
/// Addresses handed out by [`emit`](InstructionTable::emit) never change,
/// so an operand can be filled in later with [`patch`](InstructionTable::patch).
#[derive(Debug, Default)]
pub struct InstructionTable {
    instructions: Vec<Instruction>,
}

impl InstructionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, opcode: Opcode, operand: Option<Operand>) -> Address {
        let address = self.next_address();
        self.instructions.push(Instruction {
            address,
            opcode,
            operand,
        });
        address
    }

    /// Rewrites the operand at `address`. Out of range addresses are ignored.
    pub fn patch(&mut self, address: Address, operand: Operand) {
        if let Some(instruction) = address
            .checked_sub(1)
            .and_then(|i| self.instructions.get_mut(i))
        {
            instruction.operand = Some(operand);
        }
    }

    /// Address the next emitted instruction will get.
    pub fn next_address(&self) -> Address {
        self.instructions.len() + 1
    }

    pub fn get(&self, address: Address) -> Option<&Instruction> {
        address
            .checked_sub(1)
            .and_then(|i| self.instructions.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions.iter()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// One display line per instruction, in address order.
    pub fn render(&self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mnemonic = match self {
            Self::PushM => "PUSHM",
            Self::PushI => "PUSHI",
            Self::PopM => "POPM",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Les => "LES",
            Self::Grt => "GRT",
            Self::Equ => "EQU",
            Self::Neq => "NEQ",
            Self::Leq => "LEQ",
            Self::Geq => "GEQ",
            Self::Jump => "JUMP",
            Self::JumpZ => "JUMPZ",
            Self::Label => "LABEL",
            Self::StdIn => "STDIN",
            Self::StdOut => "STDOUT",
        };
        f.pad(mnemonic)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Immediate(i) | Self::Memory(i) => write!(f, "{i}"),
            Self::Target(a) => write!(f, "{a}"),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Instruction {
            address,
            opcode,
            operand,
        } = self;
        match operand {
            Some(operand) => write!(f, "{address:<5} {opcode} {operand}"),
            None => write!(f, "{address:<5} {opcode}"),
        }
    }
}
