//! Property-based tests for wavamp-core hit-testing and volume math.

use proptest::prelude::*;
use wavamp_core::{
    Action, ControlLayout, InputEvent, Point, Rect, Volume, apply_gain, dispatch, knob_rect,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// `contains` agrees with the half-open interval definition.
    #[test]
    fn contains_matches_interval_definition(
        x in -200i32..200, y in -200i32..200,
        w in -10i32..100, h in -10i32..100,
        px in -300i32..300, py in -300i32..300,
    ) {
        let r = Rect::new(x, y, w, h);
        let expected = w > 0 && h > 0 && px >= x && px < x + w && py >= y && py < y + h;
        prop_assert_eq!(r.contains(Point::new(px, py)), expected);
    }

    /// Any pointer position yields a volume inside [0, 1].
    #[test]
    fn slider_volume_in_range(x in -5000i32..5000, w in 1i32..2000) {
        let v = Volume::from_slider(Rect::new(0, 0, w, 20), x).get();
        prop_assert!((0.0..=1.0).contains(&v), "volume {} out of range", v);
    }

    /// Moving right along the slider never lowers the volume.
    #[test]
    fn slider_is_monotonic(a in 0i32..640, b in 0i32..640) {
        let slider = ControlLayout::default().volume;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(Volume::from_slider(slider, lo) <= Volume::from_slider(slider, hi));
    }

    /// The knob center stays on the track.
    #[test]
    fn knob_center_on_track(v in 0.0f32..=1.0) {
        let slider = ControlLayout::default().volume;
        let knob = knob_rect(slider, Volume::new(v), 10);
        let center = knob.x + knob.w / 2;
        prop_assert!(center >= slider.x && center <= slider.right());
    }

    /// Gain never amplifies a sample and preserves its sign.
    #[test]
    fn gain_attenuates(
        gain in 0.0f32..=1.0,
        input in prop::array::uniform32(-1.0f32..=1.0f32),
    ) {
        let mut buf = input;
        apply_gain(&mut buf, gain);
        for (out, inp) in buf.iter().zip(input.iter()) {
            prop_assert!(out.abs() <= inp.abs() + f32::EPSILON);
            prop_assert!(out * inp >= 0.0);
        }
    }

    /// Drags produce a volume action exactly when the pointer is on the slider.
    #[test]
    fn drag_dispatch_respects_slider(px in 0i32..640, py in 0i32..480) {
        let layout = ControlLayout::default();
        let p = Point::new(px, py);
        let action = dispatch(&layout, InputEvent::MouseDrag(p));
        if layout.volume.contains(p) {
            prop_assert!(matches!(action, Some(Action::SetVolume(_))));
        } else {
            prop_assert!(action.is_none());
        }
    }
}
