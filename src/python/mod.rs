//! Python bindings for the memory-match engine.
//!
//! # Quick Start
//!
//! ```python
//! import memory_match as mm
//!
//! game = mm.MemoryGame(seed=42)
//! faces = game.faces()
//!
//! # Find the partner of the first card and match it
//! partner = faces.index(faces[0], 1)
//! game.click(0)
//! outcome = game.click(partner)
//! assert outcome.kind == "matched"
//!
//! game.advance(1000)
//! print(game.coins, game.moves)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// memory_match: a headless memory-match game.
#[pymodule]
fn memory_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGameConfig>()?;
    m.add_class::<PyFlipOutcome>()?;
    m.add_class::<PyMemoryGame>()?;
    Ok(())
}
