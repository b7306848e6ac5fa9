mod user;
mod user_type;

pub use user::GhUser;
pub use user_type::GhUserType;
