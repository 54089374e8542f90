//! Campus canteen ordering: catalog browsing, a persisted cart, a mock login
//! session and a checkout flow that hands order drafts to a confirmation view.

pub mod audit;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod credentials;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod response;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;
pub mod storage;
