//! HTTP service for the hackathon directory: public submissions and calendar,
//! contact messages, and the admin review panel API.

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod repository;
pub mod storage;
