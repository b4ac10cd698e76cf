#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Dark/light display-mode flag.
///
/// Owned by the root `App` as a context signal and written only through
/// `util::theme_store::toggle`; every other consumer treats it as
/// read-only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub dark: bool,
}

impl ThemeState {
    /// The flag with the mode flipped.
    #[must_use]
    pub fn toggled(self) -> Self {
        Self { dark: !self.dark }
    }
}
