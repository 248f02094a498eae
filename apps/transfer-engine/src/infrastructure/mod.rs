//! Infrastructure Layer
//!
//! This module contains adapters (implementations) for the ports
//! defined in the domain and application layers. Following hexagonal
//! architecture:
//!
//! - **Driven Adapters (Outbound)**: Implement ports for external
//!   systems
//!   - `persistence/`: Account store adapters
//! - **Composition**: `config/` wires repositories, publishers, and
//!   use cases together at startup

pub mod config;
pub mod persistence;
