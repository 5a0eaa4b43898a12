use super::BookQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CourseListDto},
        error::ApplicationResult,
    },
    domain::book::catalog::COURSE_IDS,
};

impl BookQueryService {
    /// Courses a book can be listed under.
    pub fn list_courses(&self, actor: &AuthenticatedUser) -> ApplicationResult<CourseListDto> {
        actor.ensure_capability("books", "create")?;
        Ok(CourseListDto {
            courses: COURSE_IDS.iter().map(|course| course.to_string()).collect(),
        })
    }
}
