mod current_user;
mod login_user;
mod logout_user;

pub use current_user::current_user_handler;
pub use login_user::login_user_handler;
pub use logout_user::logout_user_handler;
