use super::*;

fn machine(phrases: &[&str]) -> Typewriter {
    Typewriter::new(phrases.iter().map(|p| (*p).to_owned()).collect()).unwrap()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn empty_phrase_list_is_a_configuration_error() {
    assert_eq!(Typewriter::new(Vec::new()), Err(TypewriterError::NoPhrases));
}

#[test]
fn a_new_machine_starts_empty_and_typing() {
    let tw = machine(&["hello"]);
    assert_eq!(tw.text(), "");
    assert_eq!(tw.phrase_index(), 0);
    assert_eq!(tw.phase(), Phase::Typing);
}

// =============================================================
// Typing / deleting progress
// =============================================================

#[test]
fn typing_grows_the_text_one_character_per_tick() {
    let mut tw = machine(&["abc"]);
    let mut previous_len = 0;
    while tw.phase() == Phase::Typing {
        tw.tick();
        assert_eq!(tw.text().len(), previous_len + 1);
        previous_len = tw.text().len();
    }
    assert_eq!(tw.text(), "abc");
}

#[test]
fn deleting_shrinks_the_text_one_character_per_tick() {
    let mut tw = machine(&["abc"]);
    while tw.phase() != Phase::PausedAtFull {
        tw.tick();
    }
    tw.tick(); // pause elapses, machine enters Deleting
    let mut previous_len = tw.text().len();
    while tw.phase() == Phase::Deleting {
        tw.tick();
        assert_eq!(tw.text().len(), previous_len - 1);
        previous_len = tw.text().len();
    }
    assert_eq!(tw.text(), "");
}

#[test]
fn the_text_is_always_a_prefix_of_the_current_phrase() {
    let phrases = ["Malaysian Businesses", "Asian Businesses"];
    let mut tw = machine(&phrases);
    for _ in 0..500 {
        tw.tick();
        assert!(
            phrases[tw.phrase_index()].starts_with(tw.text()),
            "{:?} is not a prefix of {:?}",
            tw.text(),
            phrases[tw.phrase_index()]
        );
    }
}

#[test]
fn multibyte_phrases_advance_one_character_at_a_time() {
    let mut tw = machine(&["héllo"]);
    tw.tick();
    assert_eq!(tw.text(), "h");
    tw.tick();
    assert_eq!(tw.text(), "hé");
    tw.tick();
    assert_eq!(tw.text(), "hél");
}

// =============================================================
// Delays and the full reference trace
// =============================================================

#[test]
fn the_two_phrase_reference_trace_is_exact() {
    let mut tw = machine(&["A", "BB"]);

    // (text after tick, phrase index, returned delay)
    let expected: &[(&str, usize, u32)] = &[
        ("A", 0, PAUSE_FULL_MS),  // typed the full phrase, hold it
        ("A", 0, DELETE_MS),      // pause elapsed, deleting starts
        ("", 0, PAUSE_EMPTY_MS),  // deleted, hold the empty line
        ("", 1, TYPE_MS),         // advance to the next phrase
        ("B", 1, TYPE_MS),
        ("BB", 1, PAUSE_FULL_MS),
        ("BB", 1, DELETE_MS),
        ("B", 1, DELETE_MS),
        ("", 1, PAUSE_EMPTY_MS),
        ("", 0, TYPE_MS),         // wrapped back to phrase 0
    ];

    for (step, &(text, index, delay)) in expected.iter().enumerate() {
        let returned = tw.tick();
        assert_eq!(tw.text(), text, "text at step {step}");
        assert_eq!(tw.phrase_index(), index, "index at step {step}");
        assert_eq!(returned, delay, "delay at step {step}");
    }
}

// =============================================================
// Cycle totality
// =============================================================

#[test]
fn one_full_revolution_visits_every_phrase_once() {
    let phrases = ["one", "two", "three"];
    let mut tw = machine(&phrases);
    let mut visited = Vec::new();

    // Run until the index returns to 0, recording each phrase completion.
    loop {
        tw.tick();
        if tw.phase() == Phase::PausedAtFull {
            visited.push(tw.phrase_index());
        }
        if tw.phase() == Phase::Typing && tw.phrase_index() == 0 && visited.len() == phrases.len() {
            break;
        }
    }
    assert_eq!(visited, vec![0, 1, 2]);
    assert_eq!(tw.phrase_index(), 0);
}

#[test]
fn a_single_phrase_list_cycles_on_itself() {
    let mut tw = machine(&["only"]);
    for _ in 0..3 {
        while tw.phase() != Phase::PausedAtEmpty {
            tw.tick();
        }
        tw.tick();
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.phase(), Phase::Typing);
    }
}

// =============================================================
// Empty phrases
// =============================================================

#[test]
fn an_empty_phrase_passes_through_without_stalling() {
    let mut tw = machine(&["", "x"]);

    assert_eq!(tw.tick(), PAUSE_FULL_MS); // "typing" the empty phrase completes at once
    assert_eq!(tw.text(), "");
    assert_eq!(tw.phase(), Phase::PausedAtFull);

    assert_eq!(tw.tick(), DELETE_MS);
    assert_eq!(tw.tick(), PAUSE_EMPTY_MS); // nothing to delete, straight to the hold
    assert_eq!(tw.tick(), TYPE_MS);
    assert_eq!(tw.phrase_index(), 1);

    tw.tick();
    assert_eq!(tw.text(), "x");
}
