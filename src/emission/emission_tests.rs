use super::*;
use crate::compile;

#[test]
fn test_success_report_without_trace() {
    let compilation = compile("# integer x; boolean done; get(x); put(x); #").unwrap();
    let report = Report::success(&compilation).with_trace(false).to_string();
    let rule = "=".repeat(50);
    let dashes = "-".repeat(50);
    let expected = [
        "Compilation Successful!".to_owned(),
        rule.clone(),
        String::new(),
        "Assembly Code".to_owned(),
        rule.clone(),
        "1     STDIN".to_owned(),
        "2     POPM 10000".to_owned(),
        "3     PUSHM 10000".to_owned(),
        "4     STDOUT".to_owned(),
        String::new(),
        "Symbol Table".to_owned(),
        rule,
        format!("{:<20} {:<20} {:<10}", "Identifier", "MemoryLocation", "Type"),
        dashes,
        format!("{:<20} {:<20} {:<10}", "x", 10000, "integer"),
        format!("{:<20} {:<20} {:<10}", "done", 10001, "boolean"),
    ]
    .join("\n")
        + "\n";
    assert_eq!(expected, report);
    // type column is padded too
    assert!(report.contains("\nx                    10000                integer   \n"));
}

#[test]
fn test_success_report_with_trace() {
    let compilation = compile("# put(1); #").unwrap();
    let report = Report::success(&compilation).to_string();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!("SYNTAX ANALYSIS", lines[3]);
    assert!(lines.contains(&"    <Primary> ::= <Integer>"));
    assert!(report.contains("2     STDOUT\n"));
}

#[test]
fn test_failure_report() {
    let err = compile("# x = 1; #").unwrap_err();
    let report = Report::failure(&err);
    assert!(!report.is_success());
    let expected = format!(
        "Compilation Failed!\n{}\n\nError: Identifier 'x' not declared\n",
        "=".repeat(50)
    );
    assert_eq!(expected, report.to_string());
}
