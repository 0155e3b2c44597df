mod common;

use bank_sim::cli::ui::{
    entry::{EntryMode, NumericEntry},
    prompt::{NavResult, Prompt},
    test_mode::ScriptedTerminal,
};
use common::count_lines_containing;

#[test]
fn one_invalid_cycle_then_value() {
    let mut terminal = ScriptedTerminal::new(Vec::new(), vec!["abc", "12.5"]);
    let result = Prompt::from(NumericEntry::new(EntryMode::Deposit))
        .run(&mut terminal)
        .unwrap();

    assert_eq!(result, NavResult::Entered(12.5));
    assert_eq!(terminal.clears(), 2);
    assert_eq!(count_lines_containing(&terminal, "Invalid entry"), 1);
    assert_eq!(
        count_lines_containing(&terminal, "How much would you like to deposit?"),
        2
    );
    assert!(terminal.screen()[0].contains("Invalid entry"));
}

#[test]
fn first_attempt_has_no_invalid_banner() {
    let mut terminal = ScriptedTerminal::new(Vec::new(), vec!["75"]);
    let result = Prompt::from(NumericEntry::new(EntryMode::Withdraw))
        .run(&mut terminal)
        .unwrap();

    assert_eq!(result, NavResult::Entered(75.0));
    assert_eq!(
        terminal.transcript(),
        &["How much would you like to withdraw?".to_string()]
    );
}

#[test]
fn empty_line_is_rejected() {
    let mut terminal = ScriptedTerminal::new(Vec::new(), vec!["", "  ", "3"]);
    let result = Prompt::from(NumericEntry::new(EntryMode::Deposit))
        .run(&mut terminal)
        .unwrap();
    assert_eq!(result, NavResult::Entered(3.0));
    assert_eq!(count_lines_containing(&terminal, "Invalid entry"), 2);
}

#[test]
fn retries_are_unbounded() {
    let mut lines = vec!["nope"; 20_000];
    lines.push("1");
    let mut terminal = ScriptedTerminal::new(Vec::new(), lines);
    let result = Prompt::from(NumericEntry::new(EntryMode::Deposit))
        .run(&mut terminal)
        .unwrap();
    assert_eq!(result, NavResult::Entered(1.0));
    assert_eq!(terminal.clears(), 20_001);
}

#[test]
fn exhausted_input_cancels_entry() {
    let mut terminal = ScriptedTerminal::new(Vec::new(), vec!["abc"]);
    let result = Prompt::from(NumericEntry::new(EntryMode::Deposit))
        .run(&mut terminal)
        .unwrap();
    assert_eq!(result, NavResult::Cancelled);
}
