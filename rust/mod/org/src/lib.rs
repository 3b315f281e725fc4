//! Org module — organization groups and the client configuration view.
//!
//! # Resources
//!
//! - **Group** — user group within an organization. Either user-defined or
//!   one of the synthetic system groups (all-users, dev) provisioned with
//!   the organization itself.
//! - **SystemGroups** — reserved type markers and localized display names
//!   for system groups.
//! - **ConfigView** — immutable snapshot of instance configuration
//!   (hosting mode, enabled auth providers, update availability) assembled
//!   once per request for clients.
//!
//! Persistence, membership management, and HTTP transport live in other
//! modules; this crate only owns the in-memory contracts.

pub mod error;
pub mod model;
pub mod system_groups;

pub use error::OrgError;
pub use model::{sort_for_display, ConfigView, ConfigViewBuilder, Group, GroupRank};
