// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing surface contract and its scoped-transform guard.

use core::ops::{Deref, DerefMut};

use kurbo::{Affine, Circle, Point, Rect, Vec2};

use crate::{Color, TextStyle};

/// A destination for drawing commands.
///
/// Geometry passed to the fill and text operations is in the surface's
/// *current* coordinate space, which is the result of every [`Surface::translate`]
/// applied since the surface was created, minus those undone by
/// [`Surface::restore`].
///
/// Implementations own their pixel buffers (if any); callers only issue
/// commands. Prefer [`SurfaceScope`] over calling `save`/`restore` by hand.
pub trait Surface {
    /// Push the current transform onto the save stack.
    fn save(&mut self);

    /// Pop the most recently saved transform and make it current.
    ///
    /// Restoring with an empty save stack is a caller bug; implementations
    /// should leave the current transform untouched in that case.
    fn restore(&mut self);

    /// Translate the current coordinate space by `offset`.
    fn translate(&mut self, offset: Vec2);

    /// The current local-to-surface transform.
    fn transform(&self) -> Affine;

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill a disk.
    fn fill_circle(&mut self, circle: Circle, color: Color);

    /// Draw shaped text with its top-left corner at `origin`, wrapping at `max_width`.
    fn draw_text(&mut self, origin: Point, text: &str, style: &TextStyle, max_width: f64);
}

/// A save/restore pair bound to a lexical scope.
///
/// Creating the scope calls [`Surface::save`]; dropping it calls
/// [`Surface::restore`]. Because the restore lives in `Drop`, it also runs when
/// a panic unwinds through the scope, so the surface's transform stack is
/// always back at its previous depth once the scope is gone.
///
/// The scope dereferences to the wrapped surface.
#[derive(Debug)]
pub struct SurfaceScope<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> SurfaceScope<'a, S> {
    /// Save `surface` and return a guard that restores it on drop.
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: Surface + ?Sized> Deref for SurfaceScope<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        &*self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for SurfaceScope<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut *self.surface
    }
}

impl<S: Surface + ?Sized> Drop for SurfaceScope<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Vec2};

    use super::{Surface, SurfaceScope};
    use crate::Recording;

    #[test]
    fn scope_restores_transform() {
        let mut rec = Recording::new();
        rec.translate(Vec2::new(5.0, 0.0));
        {
            let mut scope = SurfaceScope::new(&mut rec);
            scope.translate(Vec2::new(0.0, 7.0));
            assert_eq!(scope.depth(), 1);
            assert_eq!(scope.transform(), Affine::translate((5.0, 7.0)));
        }
        assert_eq!(rec.depth(), 0);
        assert_eq!(rec.transform(), Affine::translate((5.0, 0.0)));
    }

    #[test]
    fn nested_scopes_through_dyn_surface() {
        let mut rec = Recording::new();
        let surface: &mut dyn Surface = &mut rec;
        {
            let mut outer = SurfaceScope::new(surface);
            outer.translate(Vec2::new(1.0, 1.0));
            {
                let mut inner = SurfaceScope::new(&mut *outer);
                inner.translate(Vec2::new(2.0, 2.0));
                assert_eq!(inner.transform(), Affine::translate((3.0, 3.0)));
            }
            assert_eq!(outer.transform(), Affine::translate((1.0, 1.0)));
        }
        assert_eq!(rec.transform(), Affine::IDENTITY);
    }
}
