//! # TapCounter - Terminal Tap Counter
//!
//! A single-screen counter: a four-digit value you tap up or down, reset
//! through a prompt, and switch between one tap region and a split screen.
//!
//! ## Architecture
//!
//! This application follows the Model-View-ViewModel (MVVM) pattern:
//!
//! ```text
//! ┌─────────────┐  ViewEvents  ┌──────────────┐   Signals    ┌───────────────────┐
//! │    View     │◄─────────────│  ViewModel   │◄─────────────│ CounterController │
//! │             │              │              │              │                   │
//! │ - Terminal  │              │ - Reset      │              │ - CounterState    │
//! │ - Rendering │              │   dialog     │              │ - Clamping        │
//! │             │              │ - Layout     │              │ - Feedback cues   │
//! └─────────────┘              └──────────────┘              └───────────────────┘
//!                                      ▲
//!                                      │ CommandEvents
//!                                      ▼
//!                               ┌──────────────┐
//!                               │AppController │
//!                               │              │
//!                               │ - Key/mouse  │
//!                               │   mapping    │
//!                               │ - Event loop │
//!                               └──────────────┘
//! ```

pub mod app;
pub mod cmd_args;
pub mod config;

// Re-export main types for easy access
pub use app::*;
