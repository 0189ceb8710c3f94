//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! They are traits that adapters implement to integrate with external
//! systems (the exchange REST API and the chat platform).
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                                                       ▼
//! ┌─────────┐                                           ┌───────────┐
//! │Exchange │                                           │   Chat    │
//! │ Adapter │                                           │  Adapter  │
//! └─────────┘                                           └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`outbound::exchange::MarketDataSource`] - Symbol metadata and price changes
//! - [`outbound::chat::ChatSurface`] - Sending, editing and acknowledging chat messages

pub mod outbound;
