// src/application/ports/mod.rs
pub mod random;
pub mod security;
pub mod session_revocation;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type PasswordHasherPort = dyn security::PasswordHasher;
pub type TokenManagerPort = dyn security::TokenManager;
pub type SessionRevocationPort = dyn session_revocation::SessionRevocationStore;
pub type ClockPort = dyn time::Clock;
pub type PictureSelectorPort = dyn random::PictureSelector;
