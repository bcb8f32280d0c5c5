//! End-to-end flows through `App::update` against a real data file.

use iced::keyboard;
use iced::keyboard::key::Named;
use tempfile::tempdir;
use vocab_core::{EntryField, EntryStore, FileStorage, Storage};
use vocab_gui::app::App;
use vocab_gui::message::{AddMessage, DeleteMessage, Message, QuizMessage, StudyMessage};
use vocab_gui::state::{AppState, Settings, StorageSettings};

fn open(path: &std::path::Path) -> App {
    App::with_state(AppState::open(
        Settings::default(),
        Box::new(FileStorage::new(path)),
    ))
}

fn send(app: &mut App, message: Message) {
    let _ = app.update(message);
}

fn add_word(app: &mut App, word: &str, meaning: &str, example: &str) {
    send(app, Message::Add(AddMessage::Open));
    for (field, value) in [
        (EntryField::Word, word),
        (EntryField::Meaning, meaning),
        (EntryField::Example, example),
    ] {
        send(
            app,
            Message::Add(AddMessage::FieldChanged(field, value.to_string())),
        );
    }
    send(app, Message::Add(AddMessage::Submit));
}

#[test]
fn added_words_survive_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vocabulary.voc");

    let mut app = open(&path);
    add_word(&mut app, "apple", "a fruit", "I ate an apple.");
    add_word(&mut app, "  cat ", "an animal", "The cat sleeps.");
    drop(app);

    let mut storage = FileStorage::new(&path);
    let words: Vec<String> = storage.load().unwrap().into_iter().map(|e| e.word).collect();
    assert_eq!(words, vec!["apple", "cat"]);

    let app = open(&path);
    assert_eq!(app.title(), "Vocabulary Studio (2 words)");
}

#[test]
fn delete_through_dialog_rewrites_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vocabulary.voc");
    let mut app = open(&path);
    add_word(&mut app, "apple", "a fruit", "I ate an apple.");
    add_word(&mut app, "cat", "an animal", "The cat sleeps.");

    send(&mut app, Message::Delete(DeleteMessage::Open));
    send(&mut app, Message::Delete(DeleteMessage::Selected("apple".into())));
    send(&mut app, Message::Delete(DeleteMessage::Confirm));

    let store = EntryStore::open(FileStorage::new(&path)).unwrap();
    assert_eq!(store.words(), vec!["cat"]);
    assert!(app.state.toast.as_ref().unwrap().message.contains("apple"));
}

#[test]
fn quiz_with_keyboard() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vocabulary.voc");
    let mut app = open(&path);
    add_word(&mut app, "apple", "a fruit", "I ate an apple.");

    send(&mut app, Message::Quiz(QuizMessage::Start));
    send(
        &mut app,
        Message::KeyPressed(
            keyboard::Key::Named(Named::Space),
            keyboard::Modifiers::default(),
        ),
    );
    assert!(app.state.quiz().unwrap().is_revealed());

    send(
        &mut app,
        Message::KeyPressed(
            keyboard::Key::Named(Named::Enter),
            keyboard::Modifiers::default(),
        ),
    );
    assert!(app.state.quiz().unwrap().is_finished());

    send(
        &mut app,
        Message::KeyPressed(
            keyboard::Key::Named(Named::Escape),
            keyboard::Modifiers::default(),
        ),
    );
    assert!(app.state.quiz().is_none());
}

#[test]
fn corrupt_file_blocks_every_action() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vocabulary.voc");
    std::fs::write(&path, b"not a vocabulary file").unwrap();

    let mut app = open(&path);
    assert!(app.state.load_error.is_some());

    add_word(&mut app, "apple", "a fruit", "I ate an apple.");
    send(&mut app, Message::Quiz(QuizMessage::Start));
    send(&mut app, Message::Study(StudyMessage::Open));

    assert!(app.state.dialog.is_none());
    assert!(app.state.quiz().is_none());
    assert_eq!(std::fs::read(&path).unwrap(), b"not a vocabulary file");
}

#[test]
fn boot_opens_configured_data_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.voc");
    let mut app = open(&path);
    add_word(&mut app, "apple", "a fruit", "I ate an apple.");

    let settings = Settings {
        storage: StorageSettings {
            data_file: Some(path.clone()),
        },
        ..Settings::default()
    };
    let (app, _) = App::new(settings);

    assert_eq!(app.state.settings.storage.data_file, Some(path));
    assert_eq!(app.title(), "Vocabulary Studio (1 word)");
}
