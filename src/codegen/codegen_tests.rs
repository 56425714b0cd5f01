use super::*;

#[test]
fn test_emit_assigns_sequential_addresses() {
    let mut code = InstructionTable::new();
    assert_eq!(1, code.next_address());
    assert_eq!(1, code.emit(Opcode::StdIn, None));
    assert_eq!(2, code.emit(Opcode::PopM, Some(Operand::Memory(10000))));
    assert_eq!(3, code.next_address());

    let addresses: Vec<Address> = code.iter().map(|i| i.address).collect();
    assert_eq!(vec![1, 2], addresses);
}

#[test]
fn test_patch_only_touches_operand() {
    let mut code = InstructionTable::new();
    code.emit(Opcode::Label, None);
    let jz = code.emit(Opcode::JumpZ, None);
    code.patch(jz, Operand::Target(7));

    let patched = code.get(jz).unwrap();
    assert_eq!(Opcode::JumpZ, patched.opcode);
    assert_eq!(Some(Operand::Target(7)), patched.operand);
    assert_eq!(None, code.get(1).unwrap().operand);
}

#[test]
fn test_patch_out_of_range_is_ignored() {
    let mut code = InstructionTable::new();
    code.emit(Opcode::Add, None);
    code.patch(0, Operand::Target(1));
    code.patch(2, Operand::Target(1));
    assert_eq!(1, code.len());
    assert_eq!(None, code.get(1).unwrap().operand);
    assert!(code.get(0).is_none());
}

#[test]
fn test_render() {
    let mut code = InstructionTable::new();
    code.emit(Opcode::PushI, Some(Operand::Immediate(-1)));
    code.emit(Opcode::Mul, None);
    code.emit(Opcode::Jump, Some(Operand::Target(1)));
    assert_eq!(
        vec!["1     PUSHI -1", "2     MUL", "3     JUMP 1"],
        code.render()
    );
}

#[test]
fn test_jump_stack_is_lifo() {
    let mut code = InstructionTable::new();
    let mut jumps = JumpStack::new();

    let outer = jumps.emit_pending(&mut code, Opcode::JumpZ);
    let inner = jumps.emit_pending(&mut code, Opcode::JumpZ);
    assert_eq!(2, jumps.len());

    assert_eq!(Some(inner), jumps.resolve(&mut code, 10));
    assert_eq!(Some(outer), jumps.resolve(&mut code, 20));
    assert!(jumps.is_empty());
    assert_eq!(None, jumps.resolve(&mut code, 30));

    assert_eq!(Some(Operand::Target(20)), code.get(outer).unwrap().operand);
    assert_eq!(Some(Operand::Target(10)), code.get(inner).unwrap().operand);
}
