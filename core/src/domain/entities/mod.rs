//! Domain entities representing core game objects.

pub mod morpheme;
pub mod token;
pub mod user;
pub mod word;

#[cfg(test)]
mod tests;

pub use morpheme::{Morpheme, NewMorpheme, MORPHEME_TEXT_MAX_LENGTH};
pub use token::{Claims, ACCESS_TOKEN_EXPIRY_SECONDS, JWT_AUDIENCE, JWT_ISSUER};
pub use user::{NewUser, PlayerScore, User, UserRole, USERNAME_MAX_LENGTH};
pub use word::{NewWord, Word, MAX_WORD_POINTS, MIN_WORD_POINTS};
