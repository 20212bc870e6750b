//! Domain types shared by the hackathon directory service.

pub mod domain;
