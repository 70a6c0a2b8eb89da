pub mod confirm_email;
pub mod forgot_password;
pub mod login;
pub mod register;
pub mod reset_password;

pub use confirm_email::ConfirmEmail;
pub use forgot_password::ForgotPassword;
pub use login::Login;
pub use register::Register;
pub use reset_password::ResetPassword;
