use contact_assistant::error::{StorageError, StorageResult};
use contact_assistant::models::AddressBook;
use contact_assistant::repositories::BookRepository;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;

/// Mock address book repository for testing.
///
/// Keeps the snapshot in memory, can be told to fail on save, and tracks
/// method calls for verification.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockBookRepository {
    snapshot: RefCell<Option<AddressBook>>,
    call_counts: RefCell<HashMap<String, usize>>,
    fail_saves: bool,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a new repository with nothing saved yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let repo = Self::new();
        *repo.snapshot.borrow_mut() = Some(book);
        repo
    }

    /// Create a repository whose `save` always fails.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    /// The last saved snapshot, if any.
    pub fn saved(&self) -> Option<AddressBook> {
        self.snapshot.borrow().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.borrow().get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .borrow_mut()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }
}

impl BookRepository for MockBookRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");
        Ok(self.snapshot.borrow().clone().unwrap_or_default())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");
        if self.fail_saves {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "mock save failure",
            )));
        }
        *self.snapshot.borrow_mut() = Some(book.clone());
        Ok(())
    }
}
