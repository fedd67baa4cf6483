//! Lanes: the parallelism degree `P` of NORX.
//!
//! Only the sequential mode is implemented. For `P = 1` branching and
//! merging leave the state untouched; the branch and merge domain tags are
//! reserved for the parallel modes.

use crate::state::State;
use crate::word::Word;


pub(crate) trait Lanes {
    /// The parallelism degree, absorbed during initialisation.
    const DEGREE: u32;

    /// Derives the payload state(s) from the initialised state.
    fn branch<W: Word>(state: &mut State<W>);

    /// Folds the payload state(s) back into one.
    fn merge<W: Word>(state: &mut State<W>);
}

/// `P = 1`.
pub(crate) enum Sequential {}

impl Lanes for Sequential {
    const DEGREE: u32 = 1;

    #[inline(always)]
    fn branch<W: Word>(_state: &mut State<W>) {}

    #[inline(always)]
    fn merge<W: Word>(_state: &mut State<W>) {}
}
