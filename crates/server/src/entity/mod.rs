pub mod hackathon;
pub mod message;
