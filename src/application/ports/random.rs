// src/application/ports/random.rs
pub trait PictureSelector: Send + Sync {
    /// Pick the stock picture shown for a newly posted book.
    fn pick(&self) -> String;
}
