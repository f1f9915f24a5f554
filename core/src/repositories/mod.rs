pub mod morpheme;
pub mod user;
pub mod word;

pub use morpheme::MorphemeRepository;
pub use user::UserRepository;
pub use word::WordRepository;

#[cfg(any(test, feature = "testing"))]
pub use morpheme::MockMorphemeRepository;
#[cfg(any(test, feature = "testing"))]
pub use user::MockUserRepository;
#[cfg(any(test, feature = "testing"))]
pub use word::MockWordRepository;
