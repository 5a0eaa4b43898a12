pub mod auth;
pub mod books;
pub mod pagination;
pub mod serde_time;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use books::{BookDetailDto, BookDto, CourseListDto, PostingDto, SellerDto};
pub use pagination::CursorPage;
pub use users::{CapabilityView, UserDto, UserProfileDto};
