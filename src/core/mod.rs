//! # Core Application Logic
//!
//! The MCP inventory browser's state machine and everything it derives from.
//! Nothing in here knows about terminals.
//!
//! ```text
//!                    ┌──────────────────────────┐
//!                    │          CORE            │
//!                    │                          │
//!                    │  • Session (state)       │
//!                    │  • Event / Effect        │
//!                    │  • update() (reducer)    │
//!                    │  • layout, navigation,   │
//!                    │    filter, view          │
//!                    │                          │
//!                    │  No I/O. No UI. Pure.    │
//!                    └────────────┬─────────────┘
//!                                 │ Effect::Persist
//!              ┌──────────────────┴──────────────────┐
//!              ▼                                     ▼
//!       ┌─────────────┐                       ┌─────────────┐
//!       │    TUI      │  save on a task,      │  inventory  │
//!       │  host loop  │ ────────────────────▶ │   store     │
//!       │ (ratatui)   │ ◀──── PersistResult   │   (JSON)    │
//!       └─────────────┘                       └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`]: `Item` and its launch details, plus the seed inventory
//! - [`state`]: `Session`, all mutable state in one value
//! - [`action`]: `Event`, `Effect`, and the `update()` reducer
//! - [`layout`]: width breakpoints and column widths
//! - [`navigation`]: moving the selection in panels and in the grid
//! - [`filter`]: substring search over item names
//! - [`view`]: text projection of a session
//! - [`inventory`]: the `InventoryStore` trait and its JSON file backend
//! - [`config`]: `~/.mcp-hub/config.toml` and its override chain

pub mod action;
pub mod config;
pub mod filter;
pub mod inventory;
pub mod item;
pub mod layout;
pub mod navigation;
pub mod state;
pub mod view;
