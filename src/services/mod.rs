pub mod account_service;
pub mod profile_service;
pub mod question_service;
pub mod score_service;
pub mod token_service;

pub use account_service::AccountService;
pub use profile_service::ProfileService;
pub use question_service::QuestionService;
pub use score_service::ScoreService;
pub use token_service::TokenService;
