//! Shared DTOs between the admin console and the REST server.
//!
//! Nothing here touches the browser: the frontend crate owns transport and
//! rendering, this crate owns the wire shapes.

pub mod domain;
pub mod shared;
pub mod system;
