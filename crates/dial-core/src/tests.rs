#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription() {
        let sig = signal(0);
        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        sig.subscribe(move |v| {
            seen_clone.borrow_mut().push(*v);
        });

        sig.set(42);
        sig.update(|v| *v += 1);
        assert_eq!(*seen.borrow(), vec![42, 43]);
    }

    #[test]
    fn test_signal_subscriber_reads_and_writes() {
        let sig = signal(0);
        let mirror = signal(-1);

        let sig_clone = sig.clone();
        let mirror_clone = mirror.clone();
        sig.subscribe(move |_| mirror_clone.set(sig_clone.get()));

        let sig_clone = sig.clone();
        sig.subscribe(move |v| {
            if *v < 3 {
                sig_clone.set(*v + 1);
            }
        });

        sig.set(1);
        assert_eq!(sig.get(), 3);
        assert_eq!(mirror.get(), 3);
    }

    #[test]
    fn test_signal_unsubscribe() {
        let sig = signal(0);
        let calls = std::rc::Rc::new(std::cell::Cell::new(0));

        let calls_clone = calls.clone();
        let id = sig.subscribe(move |_| calls_clone.set(calls_clone.get() + 1));
        sig.set(1);
        assert!(sig.unsubscribe(id));
        assert!(!sig.unsubscribe(id));
        sig.set(2);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));

        assert_eq!(Color::from_hex("nope"), Color::BLACK);
    }

    #[test]
    fn test_color_parse_hex_errors() {
        assert_eq!(
            Color::parse_hex("#12345"),
            Err(DialError::InvalidHex("#12345".into()))
        );
        assert!(Color::parse_hex("#GG0000").is_err());
        assert!(Color::parse_hex("#ééé").is_err());
        assert_eq!(Color::parse_hex("00ff00"), Ok(Color::from_rgb(0, 255, 0)));
    }

    #[test]
    fn test_color_hex_roundtrip_and_unset() {
        assert_eq!(Color::from_rgb(1, 2, 3).to_hex(), "#010203FF");
        assert!(Color::UNSET.is_unset());
        assert!(!Color::BLACK.is_unset());
        assert_eq!(Color::default(), Color::UNSET);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect {
            x: 10.0,
            y: 10.0,
            w: 100.0,
            h: 50.0,
        };

        assert!(rect.contains(Vec2 { x: 50.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 5.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 50.0, y: 70.0 }));
    }

    #[test]
    fn test_polar_offset() {
        let c = Vec2::new(100.0, 100.0);
        let p = c.polar_offset(10.0, 0.0);
        assert!((p.x - 110.0).abs() < 1e-4 && (p.y - 100.0).abs() < 1e-4);
        let q = c.polar_offset(10.0, std::f32::consts::FRAC_PI_2);
        assert!((q.x - 100.0).abs() < 1e-4 && (q.y - 110.0).abs() < 1e-4);
        assert!((c.distance(q) - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_semantics_action_replaced() {
        let s = Semantics::new(Role::Dial)
            .with_label("off")
            .with_action(ActionId::Click, "change")
            .with_action(ActionId::Click, "reset");
        assert_eq!(s.actions.len(), 1);
        assert_eq!(s.action(ActionId::Click).map(|a| a.label.as_str()), Some("reset"));
        assert!(s.action(ActionId::LongClick).is_none());
    }
}
