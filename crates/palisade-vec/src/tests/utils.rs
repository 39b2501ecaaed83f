// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;
use std::rc::Rc;

/// Shared drop counter for lifetime bookkeeping tests.
#[derive(Clone, Default)]
pub struct DropTally {
    drops: Rc<Cell<usize>>,
}

impl DropTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a token that bumps the tally exactly once, when dropped.
    pub fn token(&self) -> TallyToken {
        TallyToken {
            drops: Rc::clone(&self.drops),
        }
    }

    pub fn drops(&self) -> usize {
        self.drops.get()
    }
}

pub struct TallyToken {
    drops: Rc<Cell<usize>>,
}

impl Clone for TallyToken {
    fn clone(&self) -> Self {
        TallyToken {
            drops: Rc::clone(&self.drops),
        }
    }
}

impl Drop for TallyToken {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
