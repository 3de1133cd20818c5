pub mod mock_result;
pub mod question;
pub mod user;
