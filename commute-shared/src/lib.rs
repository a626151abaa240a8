//! Platform-neutral building blocks of the Commute web client: domain
//! models, pagination arithmetic, the admin confirmation gate and map-link
//! parsing.
#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod confirmation;
pub mod inflight;
pub mod map_link;
pub mod models;
pub mod pagination;

#[cfg(test)]
pub(crate) mod test_log;
