/// Hero background offset and fade for a given window scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroParallax {
    pub translate_y: f64,
    pub opacity: f64,
}

const TRAVEL_RANGE: f64 = 1000.0;
const TRAVEL_DISTANCE: f64 = 400.0;
const FADE_RANGE: f64 = 500.0;

impl HeroParallax {
    pub fn at(scroll_y: f64) -> Self {
        let scroll_y = if scroll_y.is_finite() { scroll_y.max(0.0) } else { 0.0 };
        let travel = (scroll_y / TRAVEL_RANGE).min(1.0);
        let fade = (scroll_y / FADE_RANGE).min(1.0);
        Self {
            translate_y: travel * TRAVEL_DISTANCE,
            opacity: 1.0 - fade,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: translate3d(0, {:.1}px, 0); opacity: {:.3};",
            self.translate_y, self.opacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_of_page_is_untouched() {
        assert_eq!(
            HeroParallax::at(0.0),
            HeroParallax {
                translate_y: 0.0,
                opacity: 1.0
            }
        );
    }

    #[test]
    fn moves_slower_than_scroll_and_fades_first() {
        let halfway = HeroParallax::at(250.0);
        assert_eq!(halfway.translate_y, 100.0);
        assert_eq!(halfway.opacity, 0.5);

        let faded = HeroParallax::at(500.0);
        assert_eq!(faded.opacity, 0.0);
        assert_eq!(faded.translate_y, 200.0);
    }

    #[test]
    fn clamps_past_the_ranges() {
        let far = HeroParallax::at(5000.0);
        assert_eq!(far.translate_y, 400.0);
        assert_eq!(far.opacity, 0.0);
    }

    #[test]
    fn overscroll_and_garbage_are_treated_as_top() {
        assert_eq!(HeroParallax::at(-80.0), HeroParallax::at(0.0));
        assert_eq!(HeroParallax::at(f64::NAN), HeroParallax::at(0.0));
    }

    #[test]
    fn style_string() {
        assert_eq!(
            HeroParallax::at(100.0).style(),
            "transform: translate3d(0, 40.0px, 0); opacity: 0.800;"
        );
    }
}
