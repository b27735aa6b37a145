//! Readiness barrier over the photo assets.

use crate::error::ShowError;

#[derive(Clone, Debug)]
pub struct AssetGate {
    slots: Vec<bool>,
    failure: Option<usize>,
}

impl AssetGate {
    pub fn new(expected: usize) -> Self {
        Self {
            slots: vec![false; expected],
            failure: None,
        }
    }

    pub fn expected(&self) -> usize {
        self.slots.len()
    }

    pub fn loaded(&self) -> usize {
        self.slots.iter().filter(|s| **s).count()
    }

    /// Mark `slot` as loaded. Returns `true` when this call opened the gate.
    pub fn record_loaded(&mut self, slot: usize) -> bool {
        let was_ready = self.is_ready();
        match self.slots.get_mut(slot) {
            Some(s) => *s = true,
            None => {
                log::warn!("[assets] ignoring load of unknown slot {}", slot);
                return false;
            }
        }
        !was_ready && self.is_ready()
    }

    /// A failed slot keeps the gate closed for good.
    pub fn record_failed(&mut self, slot: usize) {
        if slot >= self.slots.len() {
            log::warn!("[assets] ignoring failure of unknown slot {}", slot);
            return;
        }
        if self.failure.is_none() {
            self.failure = Some(slot);
        }
    }

    pub fn failure(&self) -> Option<usize> {
        self.failure
    }

    pub fn is_ready(&self) -> bool {
        self.failure.is_none() && self.slots.iter().all(|s| *s)
    }

    pub fn is_loaded(&self, slot: usize) -> bool {
        self.slots.get(slot).copied().unwrap_or(false)
    }

    pub fn check(&self) -> Result<(), ShowError> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(ShowError::AssetsPending {
                loaded: self.loaded(),
                expected: self.expected(),
            })
        }
    }
}
