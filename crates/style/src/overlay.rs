//! Temporary style application with guaranteed revert.
//!
//! Transient editor effects (hover flashes, click feedback) briefly override
//! a block's inline styles. The overlay is a guard over the live style map:
//! dropping it restores the exact prior declarations, so a revert can never
//! outlive the map it targets.
use crate::resolve::StyleMap;

/// RAII guard holding overridden declarations on a style map.
///
/// On drop the map is restored to its prior state unless [`keep`] was
/// called. [`restore`] reverts eagerly by consuming the guard.
///
/// [`keep`]: StyleOverlay::keep
/// [`restore`]: StyleOverlay::restore
#[derive(Debug)]
pub struct StyleOverlay<'a> {
    target: &'a mut StyleMap,
    saved: Vec<(String, Option<String>)>,
    committed: bool,
}

impl<'a> StyleOverlay<'a> {
    /// Applies `overrides` to `target`, remembering each replaced value.
    pub fn apply(target: &'a mut StyleMap, overrides: &StyleMap) -> Self {
        let mut saved = Vec::with_capacity(overrides.len());
        for (property, value) in overrides {
            let prior = target.insert(property.clone(), value.clone());
            saved.push((property.clone(), prior));
        }
        Self {
            target,
            saved,
            committed: false,
        }
    }

    /// The style map as currently overridden.
    pub fn styles(&self) -> &StyleMap {
        self.target
    }

    /// Commits the overridden values; the map is left as overridden.
    pub fn keep(mut self) {
        self.committed = true;
    }

    /// Reverts the overrides now.
    pub fn restore(self) {}
}

impl Drop for StyleOverlay<'_> {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        // Unwind newest-first so repeated overrides of one property restore
        // the value that preceded the overlay.
        for (property, prior) in self.saved.drain(..).rev() {
            match prior {
                Some(value) => {
                    self.target.insert(property, value);
                }
                None => {
                    self.target.shift_remove(&property);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_map() -> StyleMap {
        let mut styles = StyleMap::new();
        styles.insert("opacity".into(), "1".into());
        styles.insert("transform".into(), "none".into());
        styles
    }

    fn flash() -> StyleMap {
        let mut styles = StyleMap::new();
        styles.insert("opacity".into(), "0.5".into());
        styles.insert("boxShadow".into(), "0 0 4px #49f".into());
        styles
    }

    #[test]
    fn test_overlay_applies_and_reverts() {
        let mut styles = base_map();
        {
            let _overlay = StyleOverlay::apply(&mut styles, &flash());
        }
        assert_eq!(styles, base_map());
    }

    #[test]
    fn test_overlay_overrides_while_held() {
        let mut styles = base_map();
        let overlay = StyleOverlay::apply(&mut styles, &flash());
        assert_eq!(overlay.styles()["opacity"], "0.5");
        assert_eq!(overlay.styles()["boxShadow"], "0 0 4px #49f");
        overlay.restore();
        assert_eq!(styles["opacity"], "1");
        assert!(!styles.contains_key("boxShadow"));
    }

    #[test]
    fn test_keep_commits_overrides() {
        let mut styles = base_map();
        StyleOverlay::apply(&mut styles, &flash()).keep();
        assert_eq!(styles["opacity"], "0.5");
        assert_eq!(styles["boxShadow"], "0 0 4px #49f");
        assert_eq!(styles["transform"], "none");
    }
}
