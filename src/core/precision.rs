use std::ops::{Deref, DerefMut};

/// Working precision shared by every high-precision value of one run,
/// in significant digits.
///
/// The context is an explicit value handed to whatever needs it; nothing
/// reads precision from global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecisionContext {
    digits: usize,
}

impl PrecisionContext {
    pub fn new(digits: usize) -> Self {
        Self { digits }
    }

    pub fn digits(&self) -> usize {
        self.digits
    }

    /// Switches to `digits` until the returned guard is dropped.
    pub fn scoped(&mut self, digits: usize) -> PrecisionGuard<'_> {
        let saved = std::mem::replace(&mut self.digits, digits);
        tracing::debug!("precision {} -> {} (scoped)", saved, digits);
        PrecisionGuard { ctx: self, saved }
    }
}

/// Restores the previous precision on drop, early returns and `?` included.
#[derive(Debug)]
pub struct PrecisionGuard<'a> {
    ctx: &'a mut PrecisionContext,
    saved: usize,
}

impl Deref for PrecisionGuard<'_> {
    type Target = PrecisionContext;

    fn deref(&self) -> &PrecisionContext {
        self.ctx
    }
}

impl DerefMut for PrecisionGuard<'_> {
    fn deref_mut(&mut self) -> &mut PrecisionContext {
        self.ctx
    }
}

impl Drop for PrecisionGuard<'_> {
    fn drop(&mut self) {
        tracing::debug!("precision {} -> {} (restored)", self.ctx.digits, self.saved);
        self.ctx.digits = self.saved;
    }
}
