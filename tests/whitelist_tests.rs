//! Tests for whitelist parsing and matching.

use focusmode::Whitelist;

fn entries(list: &Whitelist) -> Vec<&str> {
    list.iter().collect()
}

// === Parsing Tests ===

#[test]
fn whitelist_trims_whitespace() {
    let list = Whitelist::parse("  Safari ,Xcode  ,   Notes");
    assert_eq!(entries(&list), vec!["Safari", "Xcode", "Notes"]);
}

#[test]
fn whitelist_drops_empty_entries() {
    let list = Whitelist::parse(",Safari,, ,\n,Mail,");
    assert_eq!(entries(&list), vec!["Safari", "Mail"]);
}

#[test]
fn whitelist_accepts_newlines() {
    let list = Whitelist::parse("Safari\nMail\r\nNotes");
    assert_eq!(entries(&list), vec!["Safari", "Mail", "Notes"]);
}

#[test]
fn whitelist_empty_text_is_empty() {
    assert!(Whitelist::parse("").is_empty());
    assert!(Whitelist::parse("  ,  , \n").is_empty());
}

#[test]
fn whitelist_skips_case_insensitive_duplicates() {
    let list = Whitelist::parse("Safari, safari, SAFARI, Mail");
    assert_eq!(entries(&list), vec!["Safari", "Mail"]);
    assert_eq!(list.len(), 2);
}

#[test]
fn whitelist_keeps_inner_spaces() {
    let list = Whitelist::parse("Visual Studio Code, System Settings");
    assert!(list.contains("visual studio code"));
    assert!(!list.contains("Visual"));
}

// === Matching Tests ===

#[test]
fn whitelist_contains_ignores_case() {
    let list = Whitelist::parse("Safari");
    assert!(list.contains("safari"));
    assert!(list.contains("SAFARI"));
    assert!(list.contains("Safari"));
}

#[test]
fn whitelist_contains_ignores_surrounding_space() {
    let list = Whitelist::parse("Mail");
    assert!(list.contains(" Mail "));
}

#[test]
fn whitelist_contains_is_exact_match() {
    let list = Whitelist::parse("Mail");
    assert!(!list.contains("Mailbox"));
    assert!(!list.contains("Mai"));
}

#[test]
fn whitelist_contains_non_ascii_names() {
    let list = Whitelist::parse("Ärzte App");
    assert!(list.contains("ärzte app"));
}

// === Editing Tests ===

#[test]
fn whitelist_insert_rejects_duplicates_and_blanks() {
    let mut list = Whitelist::parse("Safari");
    assert!(!list.insert("SAFARI"));
    assert!(!list.insert("   "));
    assert!(list.insert("Notes"));
    assert_eq!(entries(&list), vec!["Safari", "Notes"]);
}

#[test]
fn whitelist_display_reparses_to_same_list() {
    let list = Whitelist::parse(" Safari ,, Mail\nNotes ");
    assert_eq!(list.to_string(), "Safari, Mail, Notes");
    assert_eq!(Whitelist::parse(&list.to_string()), list);
}
