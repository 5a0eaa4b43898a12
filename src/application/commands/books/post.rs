use super::BookCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, BookDetailDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        book::{
            BookAuthor, BookDescription, BookListing, BookTitle, CourseId, Isbn, NewBook, Price,
            Quantity,
        },
        errors::DomainError,
    },
};
use chrono::{DateTime, Utc};

pub struct PostBookCommand {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub course: String,
    pub price: f64,
    pub quantity: i32,
    pub description: String,
}

fn already_posted(isbn: &Isbn) -> ApplicationError {
    ApplicationError::conflict(format!("ISBN {isbn} has already been posted"))
}

impl BookCommandService {
    pub async fn post_book(
        &self,
        actor: &AuthenticatedUser,
        command: PostBookCommand,
    ) -> ApplicationResult<BookDetailDto> {
        actor.ensure_capability("books", "create")?;

        // one instant for both the book and its posting
        let now = self.clock.now();
        let new_book = self.build_new_book(command, now)?;
        let isbn = new_book.isbn.clone();

        if self.read_repo.find_by_isbn(&isbn).await?.is_some() {
            return Err(already_posted(&isbn));
        }

        let (book, posting) = match self
            .write_repo
            .insert_listing(new_book, actor.id, now)
            .await
        {
            Ok(stored) => stored,
            Err(DomainError::Conflict(_)) => return Err(already_posted(&isbn)),
            Err(other) => return Err(other.into()),
        };
        tracing::info!(isbn = %book.isbn, seller_id = %actor.id, "book posted");

        let listing = match self.read_repo.find_listing(&isbn).await? {
            Some(listing) => listing,
            None => BookListing {
                book,
                posting: Some(posting),
                seller: None,
            },
        };
        Ok(listing.into())
    }

    fn build_new_book(
        &self,
        command: PostBookCommand,
        created_at: DateTime<Utc>,
    ) -> ApplicationResult<NewBook> {
        // ISBN and course are checked first so their messages win.
        let isbn = Isbn::new(&command.isbn)?;
        let course = CourseId::new(command.course)?;

        Ok(NewBook {
            isbn,
            title: BookTitle::new(command.title)?,
            author: BookAuthor::new(command.author)?,
            course,
            price: Price::new(command.price)?,
            description: BookDescription::new(command.description)?,
            picture: self.pictures.pick(),
            quantity: Quantity::new(command.quantity)?,
            created_at,
        })
    }
}
