#[cfg(test)]
mod codegen_tests;
mod instruction_table;
mod jump_stack;

pub use instruction_table::{Address, Instruction, InstructionTable, Opcode, Operand};
pub use jump_stack::JumpStack;
