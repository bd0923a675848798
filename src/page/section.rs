// Section geometry and active-section matching
//
// Sections are laid out top to bottom in virtual pixels. Given a scroll
// offset, the locator decides which section counts as "active" for nav
// highlighting. A fixed clearance is added to the raw offset so a section
// lights up slightly before it physically reaches the top of the viewport -
// the fixed navbar occludes that strip.

/// Vertical clearance added to the scroll offset before matching, in px.
pub const NAV_CLEARANCE_PX: f32 = 150.0;

/// Section the nav falls back to when no section contains the offset.
pub const DEFAULT_SECTION: &str = "home";

/// One section's bounding box in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBox {
    pub id: &'static str,
    /// Pixels from the top of the document.
    pub top: f32,
    pub height: f32,
}

impl SectionBox {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// The document's section layout, in document order.
#[derive(Debug, Clone)]
pub struct SectionMap {
    boxes: Vec<SectionBox>,
}

impl SectionMap {
    pub fn new(boxes: Vec<SectionBox>) -> Self {
        Self { boxes }
    }

    /// Stack sections contiguously from the top of the document.
    pub fn from_heights(heights: &[(&'static str, f32)]) -> Self {
        let mut top = 0.0;
        let boxes = heights
            .iter()
            .map(|&(id, height)| {
                let section = SectionBox { id, top, height };
                top += height;
                section
            })
            .collect();
        Self { boxes }
    }

    pub fn boxes(&self) -> &[SectionBox] {
        &self.boxes
    }

    pub fn get(&self, id: &str) -> Option<&SectionBox> {
        self.boxes.iter().find(|section| section.id == id)
    }

    /// Total document height in px.
    pub fn document_height(&self) -> f32 {
        self.boxes.last().map(SectionBox::bottom).unwrap_or(0.0)
    }

    /// Which section is active at the given scroll offset.
    ///
    /// The offset is bumped by [`NAV_CLEARANCE_PX`] and matched against each
    /// section's half-open interval `[top, top + height)`. When nothing
    /// matches (above the first section, or in a gap) the result is
    /// [`DEFAULT_SECTION`]. Should sections ever overlap, the first match in
    /// document order wins; the tie-break is deterministic.
    pub fn locate(&self, scroll_offset: f32) -> &'static str {
        let adjusted = scroll_offset + NAV_CLEARANCE_PX;
        self.boxes
            .iter()
            .find(|section| adjusted >= section.top && adjusted < section.bottom())
            .map(|section| section.id)
            .unwrap_or(DEFAULT_SECTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_sections() -> SectionMap {
        SectionMap::new(vec![
            SectionBox {
                id: "home",
                top: 0.0,
                height: 500.0,
            },
            SectionBox {
                id: "about",
                top: 500.0,
                height: 400.0,
            },
            SectionBox {
                id: "contact",
                top: 900.0,
                height: 300.0,
            },
        ])
    }

    #[test]
    fn test_locate_with_clearance() {
        // 600 + 150 = 750, inside [500, 900)
        assert_eq!(three_sections().locate(600.0), "about");
    }

    #[test]
    fn test_locate_boundaries_are_half_open() {
        let sections = three_sections();
        // 350 + 150 = 500: exactly at about's top, so about (not home)
        assert_eq!(sections.locate(350.0), "about");
        // 349 + 150 = 499: last pixel of home
        assert_eq!(sections.locate(349.0), "home");
    }

    #[test]
    fn test_fallback_above_first_section() {
        let sections = SectionMap::new(vec![SectionBox {
            id: "about",
            top: 800.0,
            height: 400.0,
        }]);
        // 0 + 150 = 150, above the only section
        assert_eq!(sections.locate(0.0), DEFAULT_SECTION);
    }

    #[test]
    fn test_fallback_past_last_section() {
        assert_eq!(three_sections().locate(2000.0), DEFAULT_SECTION);
    }

    #[test]
    fn test_overlap_resolves_to_first_in_document_order() {
        let sections = SectionMap::new(vec![
            SectionBox {
                id: "first",
                top: 0.0,
                height: 600.0,
            },
            SectionBox {
                id: "second",
                top: 400.0,
                height: 600.0,
            },
        ]);
        // 350 + 150 = 500 is inside both; document order decides
        assert_eq!(sections.locate(350.0), "first");
    }

    #[test]
    fn test_from_heights_stacks_contiguously() {
        let sections = SectionMap::from_heights(&[("home", 500.0), ("about", 400.0)]);
        assert_eq!(sections.boxes()[1].top, 500.0);
        assert_eq!(sections.document_height(), 900.0);
    }
}
