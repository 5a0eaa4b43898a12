use super::BookCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::book::Isbn,
};

pub struct DeleteBookCommand {
    pub isbn: String,
}

impl BookCommandService {
    pub async fn delete_book(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteBookCommand,
    ) -> ApplicationResult<()> {
        let isbn = Isbn::new(&command.isbn)
            .map_err(|_| ApplicationError::not_found("book not found"))?;

        let listing = self
            .read_repo
            .find_listing(&isbn)
            .await?
            .ok_or_else(|| ApplicationError::not_found("book not found"))?;

        if !actor.has_capability("books", "delete:any") {
            actor.ensure_capability("books", "delete:own")?;
            if !listing.is_sold_by(actor.id) {
                return Err(ApplicationError::forbidden(
                    "only the seller may remove this listing",
                ));
            }
        }

        self.write_repo.delete(&isbn).await?;
        tracing::info!(isbn = %isbn, actor_id = %actor.id, "book listing removed");
        Ok(())
    }
}
