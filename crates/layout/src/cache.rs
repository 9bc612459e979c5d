use paiban_types::markup::space_directive;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

// --- Cache Keys ---

/// Kern widths are rounded to 4 decimals before they get here, so the bit pattern of the
/// `f32` is a stable key. `0.0` and `-0.0` never reach the cache.
#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug)]
pub struct KernKey(u32);

impl From<f32> for KernKey {
    fn from(kern: f32) -> Self {
        Self(kern.to_bits())
    }
}

// --- The Cache ---

/// Memoizes formatted spacing directives. Purely a formatting shortcut; clearing it at
/// any point does not change typesetting results.
#[derive(Default)]
pub struct KernDirectiveCache {
    directives: RwLock<HashMap<KernKey, Arc<str>>>,
}

impl KernDirectiveCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide instance used by typesetters that are not given their own cache.
    pub fn shared() -> Arc<KernDirectiveCache> {
        static SHARED: OnceLock<Arc<KernDirectiveCache>> = OnceLock::new();
        SHARED.get_or_init(|| Arc::new(KernDirectiveCache::new())).clone()
    }

    pub fn directive(&self, kern: f32) -> Arc<str> {
        let key = KernKey::from(kern);
        if let Ok(c) = self.directives.read()
            && let Some(found) = c.get(&key)
        {
            return found.clone();
        }

        let formatted: Arc<str> = space_directive(kern).into();
        if let Ok(mut c) = self.directives.write() {
            c.entry(key).or_insert_with(|| formatted.clone());
        }
        formatted
    }

    pub fn len(&self) -> usize {
        self.directives.read().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut c) = self.directives.write() {
            c.clear();
        }
    }
}
