    use ratatui::backend::TestBackend;

    use super::fake_api::{FakeApi, loaded_app, note};
    use super::*;

    fn render_to_string(app: &App) -> String {
        let backend = TestBackend::new(80, 32);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| super::render::draw(f, app)).unwrap();

        let buf = terminal.backend().buffer().clone();
        let w = buf.area.width as usize;
        buf.content
            .chunks(w)
            .map(|row| {
                let s: String = row.iter().map(|cell| cell.symbol()).collect();
                s.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Style of the first cell of `needle` in the rendered frame.
    fn style_of(app: &App, needle: &str) -> Option<Style> {
        let backend = TestBackend::new(80, 32);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| super::render::draw(f, app)).unwrap();

        let buf = terminal.backend().buffer().clone();
        let w = buf.area.width as usize;
        let target: Vec<String> = needle.chars().map(|c| c.to_string()).collect();
        buf.content.chunks(w).find_map(|row| {
            row.windows(target.len())
                .find(|cells| cells.iter().zip(&target).all(|(cell, t)| cell.symbol() == t))
                .map(|cells| cells[0].style())
        })
    }

    #[test]
    fn submit_label_is_dimmed_until_both_fields_are_filled() {
        let (mut app, _state) = loaded_app(Vec::new());
        app.open_create_form();

        let style = style_of(&app, "Ctrl+S  Save Note").expect("submit label");
        assert!(style.add_modifier.contains(Modifier::DIM));

        let form = app.form.as_mut().unwrap();
        form.title.set("t".to_string());
        let style = style_of(&app, "Ctrl+S  Save Note").expect("submit label");
        assert!(style.add_modifier.contains(Modifier::DIM));

        app.form.as_mut().unwrap().content.set("c".to_string());
        let style = style_of(&app, "Ctrl+S  Save Note").expect("submit label");
        assert!(!style.add_modifier.contains(Modifier::DIM));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn shows_loading_placeholder_before_first_fetch() {
        let app = App::new(Box::new(FakeApi::empty()), "http://notes.test".to_string());
        let out = render_to_string(&app);
        assert!(out.contains("Note Maker"));
        assert!(out.contains("Loading notes..."));
        assert!(!out.contains("No Notes Yet"));
    }

    #[test]
    fn shows_empty_state_when_no_notes() {
        let (app, _state) = loaded_app(Vec::new());
        let out = render_to_string(&app);
        assert!(out.contains("No Notes Yet"));
        assert!(out.contains("Press n to create your first note!"));
        assert!(out.contains("n: New Note"));
    }

    #[test]
    fn empty_state_is_hidden_while_creating() {
        let (mut app, _state) = loaded_app(Vec::new());
        app.open_create_form();
        let out = render_to_string(&app);
        assert!(out.contains("Create New Note"));
        assert!(out.contains("Save Note"));
        assert!(out.contains("Note Title"));
        assert!(out.contains("Note Content"));
        assert!(!out.contains("No Notes Yet"));
        assert!(!out.contains("n: New Note"));
    }

    #[test]
    fn lists_titles_and_multiline_content() {
        let (app, _state) = loaded_app(vec![
            note(1, "Groceries", "milk\neggs"),
            note(2, "Ideas", "write a tui"),
        ]);
        let out = render_to_string(&app);
        assert!(out.contains("> Groceries"));
        assert!(out.contains("  milk"));
        assert!(out.contains("  eggs"));
        assert!(out.contains("Ideas"));
        assert!(out.contains("2 note(s)"));
    }

    #[test]
    fn edit_form_and_error_banner_render() {
        let (mut app, _state) = loaded_app(vec![note(1, "Groceries", "milk")]);
        app.start_editing_selected();
        app.push_error("Failed to update note: boom".to_string());
        let out = render_to_string(&app);
        assert!(out.contains("Edit Note"));
        assert!(out.contains("Update Note"));
        assert!(out.contains("Failed to update note: boom"));
    }
