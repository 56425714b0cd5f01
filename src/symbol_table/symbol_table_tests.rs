use super::*;

#[test]
fn test_addresses_are_sequential() {
    let mut table = SymbolTable::new();
    assert_eq!(Ok(MEMORY_BASE), table.insert("a", VarType::Integer));
    assert_eq!(Ok(MEMORY_BASE + 1), table.insert("b", VarType::Boolean));
    assert_eq!(Ok(MEMORY_BASE + 2), table.insert("c", VarType::Integer));

    let names: Vec<&str> = table.iter().map(|e| e.identifier.as_str()).collect();
    assert_eq!(vec!["a", "b", "c"], names);
    assert_eq!(3, table.len());
}

#[test]
fn test_duplicate_declaration() {
    let mut table = SymbolTable::new();
    table.insert("x", VarType::Integer).unwrap();
    let err = table.insert("x", VarType::Boolean);
    assert_eq!(Err(SymbolError::DuplicateDeclaration("x".into())), err);

    // failed insert does not consume an address
    assert_eq!(Ok(MEMORY_BASE + 1), table.insert("y", VarType::Integer));
    assert_eq!(Ok(VarType::Integer), table.get_type("x"));
}

#[test]
fn test_undeclared_lookups() {
    let table = SymbolTable::new();
    assert!(table.is_empty());
    assert_eq!(None, table.lookup("nope"));
    assert_eq!(
        Err(SymbolError::UndeclaredIdentifier("nope".into())),
        table.get_address("nope")
    );
    assert_eq!(
        Err(SymbolError::UndeclaredIdentifier("nope".into())),
        table.get_type("nope")
    );
}

#[test]
fn test_types_match() {
    let mut table = SymbolTable::new();
    table.insert("i", VarType::Integer).unwrap();
    table.insert("j", VarType::Integer).unwrap();
    table.insert("flag", VarType::Boolean).unwrap();

    assert_eq!(Ok(true), table.types_match("i", "j"));
    assert_eq!(Ok(false), table.types_match("i", "flag"));
    assert!(table.types_match("i", "k").is_err());
}
