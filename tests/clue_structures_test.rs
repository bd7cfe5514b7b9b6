//! Notebook and index behaviour through the public API.

use detective_quest::game::accusation::{count_clues_against, evaluate, Verdict};
use detective_quest::{bucket_for, ClueCollection, ClueIndex, GameError, SuspectRoster};

#[test]
fn test_notebook_stays_sorted_and_unique() {
    let inputs = [
        "A muddy footprint",
        "A stained knife",
        "A book about poisons lying open",
        "A muddy footprint",
        "A clock stopped at 21:30",
        "A stained knife",
    ];
    let mut notebook = ClueCollection::new();
    let fresh: Vec<bool> = inputs.iter().map(|clue| notebook.insert(clue)).collect();

    assert_eq!(fresh, vec![true, true, true, false, true, false]);
    let walked: Vec<&str> = notebook.iter().collect();
    assert_eq!(
        walked,
        vec![
            "A book about poisons lying open",
            "A clock stopped at 21:30",
            "A muddy footprint",
            "A stained knife",
        ]
    );
}

#[test]
fn test_index_lookup_over_many_keys() {
    let clues: Vec<String> = (0..200).map(|n| format!("clue #{}", n)).collect();
    let mut index = ClueIndex::new(7).unwrap();
    for (n, clue) in clues.iter().enumerate() {
        index.insert(clue, if n % 2 == 0 { "Ana" } else { "Pedro" });
    }

    for (n, clue) in clues.iter().enumerate() {
        let expected = if n % 2 == 0 { "Ana" } else { "Pedro" };
        assert_eq!(index.lookup(clue), Some(expected));
        assert!(index.bucket_of(clue) < 7);
    }
    assert_eq!(index.lookup("clue #200"), None);

    let chained: usize = (0..7).map(|bucket| index.chain(bucket).count()).sum();
    assert_eq!(chained, 200);
}

#[test]
fn test_hash_range_for_unicode_text() {
    for text in ["João", "às 21:30", "🕵"] {
        assert!(bucket_for(text, 10) < 10);
    }
}

#[test]
fn test_corroboration_scenario() {
    let mut index = ClueIndex::default();
    index.insert("X", "Carlos");
    index.insert("X", "Carlos");
    index.insert("Y", "Carlos");
    let roster = SuspectRoster::new(["Carlos", "Ana"]);

    let both: ClueCollection = ["X", "Y"].into_iter().collect();
    assert_eq!(count_clues_against(&both, &index, "Carlos"), 2);
    assert!(matches!(
        evaluate(&both, &roster, &index, 1),
        Ok(Verdict::GuiltyConfirmed { clue_count: 2, .. })
    ));

    let one: ClueCollection = ["X"].into_iter().collect();
    assert!(matches!(
        evaluate(&one, &roster, &index, 1),
        Ok(Verdict::InsufficientEvidence { clue_count: 1, .. })
    ));

    assert_eq!(
        evaluate(&one, &roster, &index, 3),
        Err(GameError::InvalidAccusation { choice: 3, roster_len: 2 })
    );
}
