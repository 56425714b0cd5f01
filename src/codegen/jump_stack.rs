use super::{Address, InstructionTable, Opcode, Operand};

/// Jumps emitted before their target was known.
///
/// Every [`emit_pending`](JumpStack::emit_pending) must be matched by
/// exactly one [`resolve`](JumpStack::resolve); the stack is empty again
/// once a program has been compiled.
#[derive(Debug, Default)]
pub struct JumpStack {
    pending: Vec<Address>,
}

impl JumpStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, address: Address) {
        self.pending.push(address);
    }

    pub fn pop(&mut self) -> Option<Address> {
        self.pending.pop()
    }

    /// Emits `opcode` without an operand and records its address.
    pub fn emit_pending(&mut self, code: &mut InstructionTable, opcode: Opcode) -> Address {
        let address = code.emit(opcode, None);
        self.push(address);
        address
    }

    /// Points the most recent pending jump at `target` and returns its address.
    pub fn resolve(&mut self, code: &mut InstructionTable, target: Address) -> Option<Address> {
        let address = self.pop()?;
        code.patch(address, Operand::Target(target));
        Some(address)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
