pub mod profile_repository;
pub mod question_repository;
pub mod score_repository;
pub mod token_repository;
pub mod user_repository;

pub use profile_repository::{MongoProfileRepository, ProfileRepository};
pub use question_repository::{MongoQuestionRepository, QuestionRepository};
pub use score_repository::{MongoScoreRepository, ScoreRepository};
pub use token_repository::{MongoTokenRepository, TokenRepository};
pub use user_repository::{MongoUserRepository, UserRepository};

#[cfg(test)]
pub use profile_repository::MockProfileRepository;
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
#[cfg(test)]
pub use score_repository::MockScoreRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
