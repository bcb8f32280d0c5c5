//! Quiz sessions driven from a store.

use rand::SeedableRng;
use rand::rngs::StdRng;
use vocab_core::{Entry, EntryStore, MemoryStorage, QuizError, QuizSession, QuizState};

fn store() -> EntryStore<MemoryStorage> {
    let mut store = EntryStore::open(MemoryStorage::new()).unwrap();
    for (word, meaning, example) in [
        ("apple", "a fruit", "I ate an apple."),
        ("bird", "an animal that flies", "The bird sings."),
        ("cat", "an animal", "The cat sleeps."),
    ] {
        store.upsert(Entry::new(word, meaning, example)).unwrap();
    }
    store
}

#[test]
fn session_visits_every_word_once() {
    let store = store();
    let mut quiz = QuizSession::start_with_rng(store.all(), &mut StdRng::seed_from_u64(1)).unwrap();

    let mut asked = Vec::new();
    while let Ok(word) = quiz.current_question() {
        asked.push(word.to_string());
        let details = quiz.reveal().unwrap().clone();
        assert_eq!(Some(&details), store.get(asked.last().unwrap()));
        quiz.advance().unwrap();
    }

    asked.sort();
    assert_eq!(asked, store.words());
    assert_eq!(quiz.state(), QuizState::Finished);
}

#[test]
fn session_snapshot_is_frozen() {
    let mut store = store();
    let mut quiz = QuizSession::start(store.all()).unwrap();

    store.delete("apple").unwrap();
    store
        .upsert(Entry::new("dog", "an animal", "The dog barks."))
        .unwrap();

    assert_eq!(quiz.len(), 3);
    assert!(quiz.sequence().iter().any(|entry| entry.word == "apple"));
    assert!(quiz.sequence().iter().all(|entry| entry.word != "dog"));
    for _ in 0..3 {
        quiz.advance().unwrap();
    }
    assert!(quiz.is_finished());
}

#[test]
fn empty_store_cannot_start_quiz() {
    let store = EntryStore::open(MemoryStorage::new()).unwrap();

    let err = QuizSession::start(store.all()).unwrap_err();

    assert_eq!(err, QuizError::EmptyCollection);
    assert!(err.user_message().contains("Add a word"));
}
