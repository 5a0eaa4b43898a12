use std::sync::Arc;

use crate::{
    application::ports::{ClockPort, PictureSelectorPort},
    domain::book::{BookReadRepository, BookWriteRepository},
};

pub struct BookCommandService {
    pub(super) write_repo: Arc<dyn BookWriteRepository>,
    pub(super) read_repo: Arc<dyn BookReadRepository>,
    pub(super) pictures: Arc<PictureSelectorPort>,
    pub(super) clock: Arc<ClockPort>,
}

impl BookCommandService {
    pub fn new(
        write_repo: Arc<dyn BookWriteRepository>,
        read_repo: Arc<dyn BookReadRepository>,
        pictures: Arc<PictureSelectorPort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            pictures,
            clock,
        }
    }
}
