    use super::*;

    #[test]
    fn edits_respect_multibyte_chars() {
        let mut input = Input::default();
        for c in "héllo".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.as_str(), "héllo");
        assert_eq!(input.cursor, 5);

        input.move_left();
        input.move_left();
        input.move_left();
        input.backspace();
        assert_eq!(input.as_str(), "hllo");
        assert_eq!(input.cursor, 1);

        input.insert_char('ü');
        assert_eq!(input.as_str(), "hüllo");

        input.delete();
        assert_eq!(input.as_str(), "hülo");
    }

    #[test]
    fn cursor_bounds_are_clamped() {
        let mut input = Input::with_text("ab");
        input.move_right();
        assert_eq!(input.cursor, 2);
        input.delete();
        assert_eq!(input.as_str(), "ab");

        input.set(String::new());
        input.backspace();
        input.move_left();
        assert_eq!(input.cursor, 0);
        assert!(input.is_empty());
    }

    #[test]
    fn line_navigation_tracks_newlines() {
        let mut input = Input::with_text("first\nsecond");
        assert_eq!(input.cursor_line_col(), (1, 6));

        input.move_home();
        assert_eq!(input.cursor_line_col(), (1, 0));

        input.move_left();
        assert_eq!(input.cursor_line_col(), (0, 5));

        input.move_home();
        assert_eq!(input.cursor, 0);
        input.move_end();
        assert_eq!(input.cursor, 5);

        input.insert_char('\n');
        assert_eq!(input.as_str(), "first\n\nsecond");
        assert_eq!(input.cursor_line_col(), (1, 0));
    }
