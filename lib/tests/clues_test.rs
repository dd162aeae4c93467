#[macro_use]
extern crate assert_matches;

use std::sync::Arc;
use word_guess::*;

fn words(entries: &[&str]) -> Vec<Arc<str>> {
    entries.iter().map(|word| Arc::from(*word)).collect()
}

#[test]
fn scored_clues_stay_consistent_with_their_target() -> Result<(), GameError> {
    let pairs = [
        ("CRANE", "TRACE"),
        ("SASSY", "MESAS"),
        ("GHOST", "TOUGH"),
        ("AABBB", "ABABA"),
    ];
    for (guess, target) in pairs {
        let clue = Clue::new(guess, score_guess(guess, target)?)?;

        assert!(clue.is_consistent_with(target), "{guess} vs {target}");
    }
    Ok(())
}

#[test]
fn a_single_clue_narrows_the_dictionary() -> Result<(), GameError> {
    let candidates = words(&["TOUGH", "OUGHT", "GHOST", "TOAST", "ROUGH"]);
    let clue = Clue::new("GHOST", "???_?".parse()?)?;

    let matches = filter_candidates(&candidates, &clue);

    // OUGHT keeps its T exactly where the `?` says it must not be.
    assert_eq!(matches, vec![Arc::from("TOUGH")]);
    Ok(())
}

#[test]
fn clues_combine_across_guesses() -> Result<(), GameError> {
    let candidates = words(&["POWER", "LOWER", "TRACE", "CRONE", "WOMEN"]);
    let clues = [
        Clue::new("CRANE", "_?__?".parse()?)?,
        Clue::new("WOMEN", "?!_!_".parse()?)?,
    ];

    let matches = find_matching_words(&candidates, &clues);

    assert_eq!(matches, vec![Arc::from("POWER"), Arc::from("LOWER")]);
    Ok(())
}

#[test]
fn refiltering_with_the_same_clue_changes_nothing() -> Result<(), GameError> {
    let candidates = words(&["TOUGH", "ROUGH", "SOUND", "MOUND"]);
    let clue = Clue::new("ROUND", score_guess("ROUND", "SOUND")?)?;

    let once = filter_candidates(&candidates, &clue);
    let twice = filter_candidates(&once, &clue);

    assert_eq!(once, vec![Arc::from("SOUND"), Arc::from("MOUND")]);
    assert_eq!(twice, once);
    Ok(())
}

#[test]
fn clue_lengths_must_agree() {
    assert_matches!(
        Clue::new("GHOST", "???_".parse().unwrap()),
        Err(GameError::LengthMismatch {
            expected: 4,
            actual: 5,
        })
    );
}
