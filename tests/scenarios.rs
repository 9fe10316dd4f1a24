//! The six end-to-end scenarios from the specification.

use fa::Automaton;

fn scenario_one() -> Automaton {
    let mut a = Automaton::new();
    a.add_symbol(b'a');
    a.add_symbol(b'b');
    for s in 0..3 {
        a.add_state(s);
    }
    a.add_transition(0, b'a', 0);
    a.add_transition(0, b'b', 1);
    a.add_transition(0, b'b', 2);
    a.add_transition(1, b'a', 2);
    a.add_transition(2, b'b', 2);
    a.set_state_initial(0);
    a.set_state_final(2);
    a
}

#[test]
fn scenario_1_recognition_and_completion() {
    let a = scenario_one();
    assert!(a.matches(b"b"));
    assert!(a.matches(b"aaab"));
    assert!(a.matches(b"bb"));
    assert!(!a.matches(b"a"));

    let completed = a.complete();
    assert!(completed.is_complete());
    assert_eq!(completed.count_states(), 4);
    for w in [&b""[..], b"b", b"aaab", b"bb", b"a"] {
        assert_eq!(a.matches(w), completed.matches(w));
    }
}

#[test]
fn scenario_2_complement_of_scenario_1() {
    let a = scenario_one();
    let c = a.complement();
    assert!(c.matches(b"a"));
    assert!(!c.matches(b"b"));
}

#[test]
fn scenario_3_two_state_dfa_complement() {
    let mut a = Automaton::new();
    a.add_symbol(b'a');
    a.add_state(0);
    a.add_state(1);
    a.add_transition(0, b'a', 1);
    a.add_transition(1, b'a', 1);
    a.set_state_initial(0);
    a.set_state_final(1);

    let c = a.complement();
    assert!(c.is_state_final(0));
    assert!(!c.is_state_final(1));
    assert!(c.matches(b""));
    assert!(!c.matches(b"a"));
    assert!(!c.matches(b"aa"));
}

#[test]
fn scenario_4_determinize_nondeterministic_fragment() {
    let mut a = Automaton::new();
    a.add_symbol(b'a');
    a.add_symbol(b'b');
    for s in 0..3 {
        a.add_state(s);
    }
    a.add_transition(0, b'a', 1);
    a.add_transition(0, b'a', 2);
    a.add_transition(1, b'b', 2);
    a.set_state_initial(0);
    a.set_state_final(2);

    let d = a.determinize();
    assert!(d.is_deterministic());
    assert!(d.count_states() <= 3);
    for w in [&b""[..], b"a", b"ab", b"b"] {
        assert_eq!(a.matches(w), d.matches(w));
    }
}

#[test]
fn scenario_5_moore_and_brzozowski_agree_on_ends_with_bb() {
    let mut a = Automaton::new();
    a.add_symbol(b'a');
    a.add_symbol(b'b');
    for s in 0..9 {
        a.add_state(s);
    }
    a.add_transition(0, b'a', 0);
    a.add_transition(0, b'b', 1);
    a.add_transition(1, b'a', 0);
    a.add_transition(1, b'b', 2);
    a.add_transition(2, b'a', 0);
    a.add_transition(2, b'b', 2);
    a.set_state_initial(0);
    a.set_state_final(2);

    let moore = a.minimize_moore();
    let brz = a.minimize_brzozowski();
    assert_eq!(moore.count_states(), 3);
    assert_eq!(brz.count_states(), 3);
    for w in [&b""[..], b"bb", b"abb", b"bab", b"abab", b"aaab"] {
        assert_eq!(a.matches(w), moore.matches(w));
        assert_eq!(a.matches(w), brz.matches(w));
    }
}

#[test]
fn scenario_6_product_with_disjoint_alphabets() {
    let mut a = Automaton::new();
    a.add_symbol(b'a');
    a.add_state(0);
    a.add_state(1);
    a.add_transition(0, b'a', 1);
    a.set_state_initial(0);
    a.set_state_final(1);

    let mut b = Automaton::new();
    b.add_symbol(b'c');
    b.add_state(0);
    b.add_state(1);
    b.add_transition(0, b'c', 1);
    b.set_state_initial(0);
    b.set_state_final(1);

    assert!(a.has_empty_intersection_with(&b));
    let p = a.product(&b);
    assert!(p.is_valid());
    assert!(p.is_language_empty());

    // Both accept the empty word: the product must still accept "".
    let mut a_eps = Automaton::new();
    a_eps.add_symbol(b'a');
    a_eps.add_state(0);
    a_eps.set_state_initial(0);
    a_eps.set_state_final(0);

    let mut b_eps = Automaton::new();
    b_eps.add_symbol(b'c');
    b_eps.add_state(0);
    b_eps.set_state_initial(0);
    b_eps.set_state_final(0);

    assert!(!a_eps.has_empty_intersection_with(&b_eps));
    assert!(a_eps.product(&b_eps).matches(b""));
}
