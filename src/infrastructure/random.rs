// src/infrastructure/random.rs
use crate::application::ports::random::PictureSelector;
use crate::domain::book::catalog::SAMPLE_PICTURES;
use rand::seq::SliceRandom;

#[derive(Default, Clone)]
pub struct RandomPictureSelector;

impl PictureSelector for RandomPictureSelector {
    fn pick(&self) -> String {
        SAMPLE_PICTURES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or_default()
            .to_string()
    }
}
