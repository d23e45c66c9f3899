//! Mock dashboard API client.

mod client;
mod dto;

pub use client::HttpDashboardClient;
pub(crate) use dto::{MockDataResponse, Resource};
