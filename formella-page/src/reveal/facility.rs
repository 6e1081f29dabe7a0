// facility.rs - Viewport intersection facility seam

/// One notification from the facility.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub id: String,
    pub is_intersecting: bool,
    /// Visible fraction of the region's area, 0.0 to 1.0.
    pub intersection_ratio: f64,
}

impl IntersectionEntry {
    /// Region fully inside (`true`) or fully outside the viewport.
    pub fn new(id: impl Into<String>, is_intersecting: bool) -> Self {
        let intersection_ratio = if is_intersecting { 1.0 } else { 0.0 };
        Self { id: id.into(), is_intersecting, intersection_ratio }
    }

    /// Region partly in view.
    pub fn partial(id: impl Into<String>, intersection_ratio: f64) -> Self {
        Self {
            id: id.into(),
            is_intersecting: intersection_ratio > 0.0,
            intersection_ratio,
        }
    }
}

/// Something that watches regions and reports when they cross the viewport.
///
/// Implementations push batches of [`IntersectionEntry`] into the
/// controller's `NotificationSink`; they never call back synchronously
/// from inside `observe`.
pub trait IntersectionFacility {
    type Handle: 'static;

    fn observe(&mut self, handle: &Self::Handle);
    fn unobserve(&mut self, handle: &Self::Handle);
    /// Stop watching everything.
    fn disconnect(&mut self);
}
