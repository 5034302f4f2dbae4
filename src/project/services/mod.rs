//! Application services for the signed-in user's projects.

mod single_flight;
mod store;

pub use single_flight::SingleFlight;
pub use store::{
    CREATE_FAILED_MESSAGE, DELETE_FAILED_MESSAGE, ENSURE_FAILED_MESSAGE, LOAD_FAILED_MESSAGE,
    NO_USER_MESSAGE, ProjectStore, ProjectStoreError, ProjectStoreResult, UPDATE_FAILED_MESSAGE,
};
