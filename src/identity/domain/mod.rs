//! Identity value types consumed by the project store.

mod user;

pub use user::{GUEST_INITIAL, GUEST_NAME, User, UserId, user_initial};
