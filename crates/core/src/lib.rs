//! # Schedule Bag Core
//!
//! Wire types shared between the group schedule toolbox server and its
//! client renderer, together with the contract they are generated from and
//! the JSON codec used at the boundary.
//!
//! - **models**: the bag itself and the tri-state [`Nullable`] field type
//! - **contract**: the authoritative field table and TypeScript generation
//! - **codec**: decoding and encoding with emission and strictness options
//! - **errors**: the boundary error type

pub mod codec;
pub mod contract;
pub mod errors;
pub mod models;

pub use errors::{BagError, BagResult};
pub use models::group_schedule_toolbox::SchedulePreferenceAssignmentBag;
pub use models::nullable::Nullable;
