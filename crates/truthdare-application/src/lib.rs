//! Application layer for the Truth or Dare data engine.
//!
//! This crate provides use case implementations that coordinate between
//! the domain store and infrastructure layers: engine wiring, the in-game
//! round flow, roster validation, and the background unlock-expiry sweep.

pub mod bootstrap;
pub mod expiry;
pub mod roster_service;
pub mod round_usecase;

pub use bootstrap::GameApp;
pub use expiry::LockExpiryScheduler;
pub use roster_service::RosterService;
pub use round_usecase::{RoundUseCase, TurnRecord};
