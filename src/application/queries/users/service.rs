use std::sync::Arc;

use crate::application::ports::ClockPort;
use crate::domain::user::UserRepository;

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<ClockPort>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>, clock: Arc<ClockPort>) -> Self {
        Self { user_repo, clock }
    }
}
