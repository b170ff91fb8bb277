//! Name-tag render override.
//!
//! The host renderer owns the frame and the entities; before drawing its own
//! label for an entity it asks the hook whether an override should draw it
//! instead. Nothing here touches the login flow.

use std::sync::{Arc, PoisonError, RwLock};

/// Draws name tags in place of the host's default label.
///
/// `E` is the host's entity type and `F` whatever per-frame context the host
/// passes to label rendering (matrices, vertex buffers, light level, ...).
pub trait NameTagRenderer<E, F>: Send + Sync {
    /// Whether the override is currently switched on.
    fn is_enabled(&self) -> bool;

    fn render_name_tag(&self, entity: &E, text: &str, frame: &mut F);
}

/// Registration point the host renderer consults for each labeled entity.
pub struct NameTagHook<E, F> {
    renderer: RwLock<Option<Arc<dyn NameTagRenderer<E, F>>>>,
}

impl<E, F> NameTagHook<E, F> {
    pub fn new() -> Self {
        Self {
            renderer: RwLock::new(None),
        }
    }

    /// Installs the override, replacing any previous one.
    pub fn register(&self, renderer: Arc<dyn NameTagRenderer<E, F>>) {
        *self.renderer.write().unwrap_or_else(PoisonError::into_inner) = Some(renderer);
    }

    pub fn clear(&self) {
        *self.renderer.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Renders through the override if one is registered and enabled.
    ///
    /// Returns `true` when the override drew the label, in which case the
    /// host must skip its default rendering for this entity.
    pub fn try_render(&self, entity: &E, text: &str, frame: &mut F) -> bool {
        let renderer = self
            .renderer
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        match renderer {
            Some(renderer) if renderer.is_enabled() => {
                renderer.render_name_tag(entity, text, frame);
                true
            }
            _ => false,
        }
    }
}

impl<E, F> Default for NameTagHook<E, F> {
    fn default() -> Self {
        Self::new()
    }
}
