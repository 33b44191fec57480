use web_sys::{Element, MouseEvent};
use yew::NodeRef;

/// Pointer position relative to the center of a tracked element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Laid-out client rectangle of an element. Only constructible with a real
/// size, so an element that has not been laid out yet never yields samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Option<Self> {
        let finite = [left, top, width, height].iter().all(|v| v.is_finite());
        if !finite || width <= 0.0 || height <= 0.0 {
            return None;
        }
        Some(Self { left, top, width, height })
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn sample(&self, client_x: f64, client_y: f64) -> PointerSample {
        let (cx, cy) = self.center();
        PointerSample::new(client_x - cx, client_y - cy)
    }

    /// Converts a center-relative sample back to coordinates relative to the
    /// top-left corner, which is what CSS gradients are positioned against.
    pub fn local(&self, sample: PointerSample) -> (f64, f64) {
        (sample.x + self.width / 2.0, sample.y + self.height / 2.0)
    }
}

pub fn element_bounds(node: &NodeRef) -> Option<Bounds> {
    let element = node.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    Bounds::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Samples a pointer event against the element behind `node`. `None` when the
/// element is unmounted or has no layout yet.
pub fn track(node: &NodeRef, event: &MouseEvent) -> Option<(Bounds, PointerSample)> {
    let bounds = element_bounds(node)?;
    let sample = bounds.sample(f64::from(event.client_x()), f64::from(event.client_y()));
    Some((bounds, sample))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_element_is_origin() {
        let bounds = Bounds::new(100.0, 50.0, 200.0, 80.0).unwrap();
        assert_eq!(bounds.sample(200.0, 90.0), PointerSample::CENTER);
    }

    #[test]
    fn sample_is_signed_offset_from_center() {
        let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0).unwrap();
        let sample = bounds.sample(10.0, 80.0);
        assert_eq!(sample, PointerSample::new(-40.0, 30.0));
        assert_eq!(sample.x.hypot(sample.y), 50.0);
    }

    #[test]
    fn unlaid_out_geometry_is_rejected() {
        assert!(Bounds::new(0.0, 0.0, 0.0, 40.0).is_none());
        assert!(Bounds::new(0.0, 0.0, 40.0, -1.0).is_none());
        assert!(Bounds::new(f64::NAN, 0.0, 40.0, 40.0).is_none());
        assert!(Bounds::new(0.0, f64::INFINITY, 40.0, 40.0).is_none());
    }

    #[test]
    fn local_coordinates_are_relative_to_top_left() {
        let bounds = Bounds::new(300.0, 300.0, 340.0, 480.0).unwrap();
        assert_eq!(bounds.local(PointerSample::CENTER), (170.0, 240.0));
        assert_eq!(bounds.local(bounds.sample(310.0, 320.0)), (10.0, 20.0));
    }
}
