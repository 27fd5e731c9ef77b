pub mod auth_token;
pub mod profile;
pub mod question;
pub mod score;
pub mod user;

pub use auth_token::AuthToken;
pub use profile::Profile;
pub use question::{CorrectOption, Question};
pub use score::Score;
pub use user::User;
