//! Async services that run network work off the caller's task.

pub mod forecast_service;
