//! Variant-specific legality, capture, and scoring.
//!
//! Each module exposes the hooks the engine dispatches to by matching on
//! the variant tag: an apply hook that places the stone (and may reject
//! the move), terminal checks, and whatever scoring the variant settles
//! with. All connectivity scans are iterative breadth-first traversals
//! over explicit visited sets; nothing here recurses.

pub mod go;
pub mod gomoku;
pub mod othello;
