pub mod extractor;
pub mod password;
pub mod token;

pub use extractor::{AuthenticatedUser, MaybeUser};
pub use token::{generate_key, parse_auth_header};
