pub mod contact;
pub mod messages;
pub mod serve;
