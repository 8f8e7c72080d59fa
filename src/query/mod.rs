pub mod criteria;
pub mod handlers;
