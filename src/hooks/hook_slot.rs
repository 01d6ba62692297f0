#[cfg(feature = "std")]
use std::sync as impl_;

#[cfg(not(feature = "std"))]
use spin as impl_;

/// A process-wide slot holding an optional hook value.
///
/// Uses the std `RwLock` when available and `spin` otherwise. Poisoning is
/// ignored: every update replaces or extends the value in one step.
pub(crate) struct HookSlot<T: 'static + Send + Sync> {
    lock: impl_::RwLock<Option<T>>,
}

impl<T: 'static + Send + Sync> HookSlot<T> {
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self {
            lock: impl_::RwLock::new(None),
        }
    }

    /// Runs `f` with shared access to the current value.
    #[inline]
    pub(crate) fn with<R>(&'static self, f: impl FnOnce(Option<&T>) -> R) -> R {
        #[cfg(feature = "std")]
        let guard = self.lock.read().unwrap_or_else(std::sync::PoisonError::into_inner);

        #[cfg(not(feature = "std"))]
        let guard = self.lock.read();

        f(guard.as_ref())
    }

    /// Runs `f` with exclusive access to the value.
    #[inline]
    pub(crate) fn update<R>(&'static self, f: impl FnOnce(&mut Option<T>) -> R) -> R {
        #[cfg(feature = "std")]
        let mut guard = self
            .lock
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        #[cfg(not(feature = "std"))]
        let mut guard = self.lock.write();

        f(&mut guard)
    }

    /// Replaces the value, returning the previous one.
    pub(crate) fn replace(&'static self, value: Option<T>) -> Option<T> {
        self.update(|slot| core::mem::replace(slot, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SLOT: HookSlot<u32> = HookSlot::new();

    #[test]
    fn test_update_and_read() {
        assert_eq!(SLOT.replace(Some(1)), None);
        SLOT.update(|value| *value.get_or_insert(0) += 4);
        assert_eq!(SLOT.with(|value| value.copied()), Some(5));
        assert_eq!(SLOT.replace(None), Some(5));
        assert!(SLOT.with(|value| value.is_none()));
    }
}
