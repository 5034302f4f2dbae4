//! Port contracts for board synchronisation.

pub mod gateway;

pub use gateway::{BoardGateway, BoardGatewayError, BoardGatewayResult};

#[cfg(test)]
pub use gateway::MockBoardGateway;
