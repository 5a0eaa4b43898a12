// tests/support/mocks/book_repos.rs
use super::user_repo::InMemoryUserRepo;
use async_trait::async_trait;
use campus_books::domain::{
    book::{
        Book, BookListCursor, BookListing, BookReadRepository, BookSearch, BookWriteRepository,
        Isbn, NewBook, PostedBook, Posting, PostingRepository, SearchField, Seller,
    },
    errors::{DomainError, DomainResult},
    user::UserId,
};
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Tables {
    books: Vec<Book>,
    postings: Vec<Posting>,
    next_posting_id: i64,
}

/// Books and postings in memory, mirroring the Postgres repositories:
/// newest first, keyset cursor on `(created_at, isbn)`.
pub struct InMemoryBookStore {
    tables: Mutex<Tables>,
    users: Arc<InMemoryUserRepo>,
}

impl InMemoryBookStore {
    pub fn new(users: Arc<InMemoryUserRepo>) -> Self {
        Self {
            tables: Mutex::new(Tables::default()),
            users,
        }
    }

    /// Insert a book with no posting, as left behind by older data.
    pub fn insert_orphan(&self, book: Book) {
        self.tables.lock().unwrap().books.push(book);
    }

    pub fn book_count(&self) -> usize {
        self.tables.lock().unwrap().books.len()
    }

    pub fn posting_count(&self) -> usize {
        self.tables.lock().unwrap().postings.len()
    }

    fn seller(&self, posting: &Posting) -> Option<Seller> {
        self.users.get(posting.seller_id).map(|user| Seller {
            id: user.id,
            username: user.username,
            email: user.email,
        })
    }
}

fn field_value(book: &Book, field: SearchField) -> &str {
    match field {
        SearchField::Title => book.title.as_str(),
        SearchField::Author => book.author.as_str(),
        SearchField::Course => book.course.as_str(),
        SearchField::Isbn => book.isbn.as_str(),
    }
}

#[async_trait]
impl BookWriteRepository for InMemoryBookStore {
    async fn insert_listing(
        &self,
        book: NewBook,
        seller_id: UserId,
        posted_at: DateTime<Utc>,
    ) -> DomainResult<(Book, Posting)> {
        let mut tables = self.tables.lock().unwrap();
        if tables.books.iter().any(|existing| existing.isbn == book.isbn) {
            return Err(DomainError::Conflict("book already exists".into()));
        }

        let stored = Book {
            isbn: book.isbn,
            title: book.title,
            author: book.author,
            course: book.course,
            price: book.price,
            description: book.description,
            picture: book.picture,
            quantity: book.quantity,
            created_at: book.created_at,
        };
        tables.next_posting_id += 1;
        let posting = Posting {
            id: tables.next_posting_id,
            seller_id,
            isbn: stored.isbn.clone(),
            posted_at,
        };
        tables.books.push(stored.clone());
        tables.postings.push(posting.clone());
        Ok((stored, posting))
    }

    async fn delete(&self, isbn: &Isbn) -> DomainResult<()> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.books.len();
        tables.books.retain(|book| &book.isbn != isbn);
        if tables.books.len() == before {
            return Err(DomainError::NotFound("book not found".into()));
        }
        tables.postings.retain(|posting| &posting.isbn != isbn);
        Ok(())
    }
}

#[async_trait]
impl BookReadRepository for InMemoryBookStore {
    async fn find_by_isbn(&self, isbn: &Isbn) -> DomainResult<Option<Book>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.books.iter().find(|book| &book.isbn == isbn).cloned())
    }

    async fn find_listing(&self, isbn: &Isbn) -> DomainResult<Option<BookListing>> {
        let (book, posting) = {
            let tables = self.tables.lock().unwrap();
            let Some(book) = tables.books.iter().find(|book| &book.isbn == isbn).cloned() else {
                return Ok(None);
            };
            let posting = tables
                .postings
                .iter()
                .find(|posting| &posting.isbn == isbn)
                .cloned();
            (book, posting)
        };
        let seller = posting.as_ref().and_then(|posting| self.seller(posting));
        Ok(Some(BookListing {
            book,
            posting,
            seller,
        }))
    }

    async fn list_page(
        &self,
        search: Option<&BookSearch>,
        limit: u32,
        cursor: Option<BookListCursor>,
    ) -> DomainResult<(Vec<Book>, Option<BookListCursor>)> {
        let tables = self.tables.lock().unwrap();
        let mut books: Vec<Book> = tables
            .books
            .iter()
            .filter(|book| {
                search.is_none_or(|search| search.matches(field_value(book, search.field())))
            })
            .filter(|book| {
                cursor.as_ref().is_none_or(|cursor| {
                    (book.created_at, book.isbn.as_str())
                        < (cursor.created_at, cursor.isbn.as_str())
                })
            })
            .cloned()
            .collect();
        books.sort_by(|a, b| {
            (b.created_at, b.isbn.as_str()).cmp(&(a.created_at, a.isbn.as_str()))
        });

        let limit = limit as usize;
        let next = if books.len() > limit {
            books.truncate(limit);
            books
                .last()
                .map(|book| BookListCursor::new(book.created_at, book.isbn.as_str()))
        } else {
            None
        };
        Ok((books, next))
    }
}

#[async_trait]
impl PostingRepository for InMemoryBookStore {
    async fn list_by_seller(&self, seller_id: UserId) -> DomainResult<Vec<PostedBook>> {
        let tables = self.tables.lock().unwrap();
        let mut posted: Vec<PostedBook> = tables
            .postings
            .iter()
            .filter(|posting| posting.seller_id == seller_id)
            .filter_map(|posting| {
                tables
                    .books
                    .iter()
                    .find(|book| book.isbn == posting.isbn)
                    .map(|book| PostedBook {
                        posting: posting.clone(),
                        book: book.clone(),
                    })
            })
            .collect();
        posted.sort_by(|a, b| {
            (b.posting.posted_at, b.posting.id).cmp(&(a.posting.posted_at, a.posting.id))
        });
        Ok(posted)
    }
}
