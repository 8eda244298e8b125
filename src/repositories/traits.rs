use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for the address book snapshot.
///
/// Provides abstraction over where the book lives between sessions,
/// enabling different implementations (JSON file, in-memory mock).
/// The book is read once at start-up and written once at a controlled exit.
pub trait BookRepository {
    /// Load the last saved snapshot, or an empty book if none exists yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored snapshot with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
