use spanmark::prelude::*;

fn select(buf: &mut RopeBuffer, line: usize, start: usize, end: usize) {
    buf.select(Position::new(line, start), Position::new(line, end));
}

#[test]
fn test_bold_color_wraps_word_and_collapses_cursor() {
    let mut buf = RopeBuffer::from_text("Hello world");
    select(&mut buf, 0, 6, 11);

    let mut engine = MarkupEngine::new(Palette::default());
    assert!(engine.toggle_bold());
    let outcome = engine.apply_color(&mut buf, 0);

    assert_eq!(outcome, ApplyOutcome::Applied);
    assert_eq!(
        buf.text(),
        r#"Hello <span style="color:#FF0A0A;font-weight:bold;">world</span>"#
    );

    // Cursor lands immediately after the closing tag, collapsed to a
    // point (end of the only line, so it clamps there).
    let sels = buf.selections();
    assert_eq!(sels.len(), 1);
    assert!(sels[0].is_empty());
    assert_eq!(sels[0].head, Position::new(0, buf.text().len()));
}

#[test]
fn test_strip_returns_styled_line_to_plain_text() {
    let styled = r#"Hello <span style="color:#FF0A0A;font-weight:bold;">world</span>"#;
    let mut buf = RopeBuffer::from_text(styled);
    select(&mut buf, 0, 6, styled.len());

    let engine = MarkupEngine::new(Palette::default());
    assert_eq!(engine.strip_markup(&mut buf), StripOutcome::Stripped);
    assert_eq!(buf.text(), "Hello world");

    // The unwrapped word stays selected.
    let sel = buf.selections()[0];
    assert_eq!(buf.get_range(sel.anchor, sel.head), "world");
}

#[test]
fn test_highlight_two_selections_on_separate_lines() {
    let mut buf = RopeBuffer::from_text("alpha something\nsomething beta");
    buf.set_selections(
        vec![
            Selection::new(Position::new(0, 0), Position::new(0, 5)),
            Selection::new(Position::new(1, 10), Position::new(1, 14)),
        ],
        0,
    );

    let engine = MarkupEngine::new(Palette::default());
    assert_eq!(engine.apply_highlight(&mut buf, 1), ApplyOutcome::Applied);

    // Both words get the same style string; neither replacement corrupts
    // the other line.
    let open = r#"<span style="color:#000000;background:#00FF00BB;">"#;
    assert_eq!(
        buf.text(),
        format!("{open}alpha</span> something\nsomething {open}beta</span>")
    );
}

#[test]
fn test_multi_selection_outcome_matches_sequential_applies() {
    // Applying to S1 and S2 in one call must leave S2's text exactly as
    // if it had been styled alone on the post-S1 document.
    let engine = MarkupEngine::new(Palette::default());

    let mut batched = RopeBuffer::from_text("one two three");
    batched.set_selections(
        vec![
            Selection::new(Position::new(0, 0), Position::new(0, 3)),
            Selection::new(Position::new(0, 8), Position::new(0, 13)),
        ],
        0,
    );
    engine.apply_color(&mut batched, 3);

    let mut sequential = RopeBuffer::from_text("one two three");
    sequential.select(Position::new(0, 0), Position::new(0, 3));
    engine.apply_color(&mut sequential, 3);
    let shift = r#"<span style="color:#FFFF00;">"#.len() + "</span>".len();
    sequential.select(Position::new(0, 8 + shift), Position::new(0, 13 + shift));
    engine.apply_color(&mut sequential, 3);

    assert_eq!(batched.text(), sequential.text());
}

#[test]
fn test_no_selection_guard_leaves_buffer_untouched() {
    let mut buf = RopeBuffer::from_text("Hello world");
    let engine = MarkupEngine::new(Palette::default());

    // Default collapsed cursor.
    assert_eq!(engine.apply_color(&mut buf, 0), ApplyOutcome::NoSelection);

    // An empty selection list.
    buf.set_selections(vec![], 0);
    assert_eq!(engine.apply_color(&mut buf, 0), ApplyOutcome::NoSelection);

    // An explicit collapsed selection.
    buf.set_selections(vec![Selection::cursor(Position::new(0, 5))], 0);
    assert_eq!(engine.apply_highlight(&mut buf, 0), ApplyOutcome::NoSelection);
    assert_eq!(buf.text(), "Hello world");
}

#[test]
fn test_engine_uses_configured_palette_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("palette.json");

    let mut palette = Palette::default();
    palette.colors[0] = "#112233".to_string();
    spanmark::config::save_palette(&path, &palette).unwrap();

    let loaded = spanmark::config::load_palette(&path).unwrap();
    let engine = MarkupEngine::new(loaded);

    let mut buf = RopeBuffer::from_text("word");
    select(&mut buf, 0, 0, 4);
    engine.apply_color(&mut buf, 0);
    assert_eq!(buf.text(), r#"<span style="color:#112233;">word</span>"#);
}
