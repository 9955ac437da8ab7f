//! Transient parse scratch
//!
//! Token storage for one record evaluation. `Scratch` owns a reusable
//! buffer; `ScratchScope` borrows it for the duration of one evaluation and
//! clears it when the scope ends, error paths included. Capacity is
//! retained across evaluations, so steady-state parsing does not grow
//! memory with log volume.

/// Reusable token buffer, one per execution context.
#[derive(Debug, Default)]
pub struct Scratch {
    tokens: Vec<String>,
    /// Largest token count observed in a single parse, for diagnostics.
    high_water: usize,
}

impl Scratch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the buffer for an expected list length.
    pub fn with_capacity(capacity: usize) -> Self {
        Scratch {
            tokens: Vec::with_capacity(capacity),
            high_water: 0,
        }
    }

    /// Open a scope for one evaluation. The buffer is cleared when the
    /// returned guard drops, whether or not the evaluation succeeded.
    pub fn scope(&mut self) -> ScratchScope<'_> {
        self.tokens.clear();
        ScratchScope { scratch: self }
    }

    /// Largest token count seen in a single parse so far.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

/// Guard over the scratch buffer for one evaluation.
pub struct ScratchScope<'a> {
    scratch: &'a mut Scratch,
}

impl ScratchScope<'_> {
    /// Hand out an empty token buffer for one matcher's parse. Tokens from
    /// the previous matcher are discarded first.
    pub fn tokens(&mut self) -> &mut Vec<String> {
        let len = self.scratch.tokens.len();
        if len > self.scratch.high_water {
            self.scratch.high_water = len;
        }
        self.scratch.tokens.clear();
        &mut self.scratch.tokens
    }
}

impl Drop for ScratchScope<'_> {
    fn drop(&mut self) {
        let len = self.scratch.tokens.len();
        if len > self.scratch.high_water {
            self.scratch.high_water = len;
        }
        self.scratch.tokens.clear();
    }
}
