//! Probing whether a renderable glyph source exists for an icon.

use iconcat::{catalog, IconSet};

/// Asks the rendering side whether a glyph can be produced for a source.
///
/// Implemented outside the core by the font/SVG retrieval subsystem; the
/// reconciler only consumes the yes/no answer during final validation.
pub trait GlyphSourceProbe {
    fn can_build_font(&self, icon_set: IconSet, code_point: u32) -> bool;
}

/// A probe backed by the bundled catalogs: a glyph source exists iff the
/// catalog lists the code point.
#[derive(Clone, Copy, Debug, Default)]
pub struct CatalogGlyphProbe;

impl GlyphSourceProbe for CatalogGlyphProbe {
    fn can_build_font(&self, icon_set: IconSet, code_point: u32) -> bool {
        code_point != 0 && catalog::lookup_name(icon_set, code_point).is_some()
    }
}
