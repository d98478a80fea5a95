use super::*;
use crate::test_support::home_with;

#[test]
fn search_is_offered_only_with_input_and_no_lookup_outstanding() {
    let mut home = HomeState::default();
    assert!(!home.can_search());

    home.push_char('o');
    assert!(home.can_search());

    assert_eq!(home.begin_search().as_deref(), Some("o"));
    assert!(home.loading);
    assert!(!home.can_search());
}

#[test]
fn second_search_is_ignored_while_first_is_outstanding() {
    let mut home = home_with("octocat");
    assert!(home.begin_search().is_some());
    assert_eq!(home.begin_search(), None);

    home.finish_search();
    assert_eq!(home.begin_search().as_deref(), Some("octocat"));
}

#[test]
fn blank_input_is_handed_over_without_entering_loading() {
    let mut home = home_with("   ");
    assert_eq!(home.begin_search().as_deref(), Some("   "));
    assert!(!home.loading);

    let mut home = HomeState::default();
    assert_eq!(home.begin_search().as_deref(), Some(""));
    assert!(!home.loading);
}

#[test]
fn input_is_frozen_while_loading() {
    let mut home = home_with("octo");
    home.begin_search();
    home.push_char('x');
    home.pop_char();
    assert_eq!(home.input, "octo");

    home.finish_search();
    home.pop_char();
    home.push_char('!');
    assert_eq!(home.input, "oct!");
}
