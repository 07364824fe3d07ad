pub mod check;
pub mod draft;
pub mod email;
pub mod password;
