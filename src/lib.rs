//! Food3D site engine.
//!
//! Platform-independent state behind the Food3D promo page: the local view
//! counter, loyalty points, cart, menu selection, search, and the smaller
//! widgets. Everything that touches persistence goes through
//! [`storage::KeyValueStore`], so the whole crate runs and tests on the host;
//! `food3d_web` supplies the browser bindings.

#[path = "core/prng.rs"]
pub mod prng;

#[path = "core/storage.rs"]
pub mod storage;

pub mod audio;
pub mod carousel;
pub mod cart;
pub mod config;
pub mod countdown;
pub mod effects;
pub mod guard;
pub mod intro;
pub mod loyalty;
pub mod menu;
pub mod notice;
pub mod order;
pub mod profile;
pub mod search;
pub mod theme;
pub mod visitors;

pub use food3d_games as games;
