//! Open/closed state of the mobile navigation drawer

/// Drawer disclosure state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    /// Starts closed
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Idempotent
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert!(!Disclosure::new().is_open());
    }

    #[test]
    fn test_toggle_parity() {
        for count in 0..8 {
            let mut drawer = Disclosure::new();
            for _ in 0..count {
                drawer.toggle();
            }
            assert_eq!(drawer.is_open(), count % 2 == 1, "after {count} toggles");
        }
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut drawer = Disclosure::new();
        drawer.close();
        assert!(!drawer.is_open());

        drawer.toggle();
        drawer.close();
        drawer.close();
        assert!(!drawer.is_open());
    }
}
