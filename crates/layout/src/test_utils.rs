use paiban_grid::{GridConfig, GridLayouter};
use paiban_traits::TextLayouter;
use paiban_types::{Character, Line, Snapshot, TextAlign};

/// Font size of every test layouter. Wide characters advance by exactly this much.
pub const FONT_SIZE: f32 = 10.0;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a grid layouter whose box is `width_in_em` wide characters across.
pub fn create_test_layouter(width_in_em: f32, alignment: TextAlign) -> GridLayouter {
    GridLayouter::new(GridConfig {
        box_width: width_in_em * FONT_SIZE,
        font_size: FONT_SIZE,
        alignment,
    })
    .unwrap()
}

pub fn layout_with(markup: &str, width_in_em: f32, alignment: TextAlign) -> Snapshot {
    create_test_layouter(width_in_em, alignment)
        .layout(markup)
        .unwrap()
}

pub fn layout_left(markup: &str, width_in_em: f32) -> Snapshot {
    layout_with(markup, width_in_em, TextAlign::Left)
}

/// Builds a snapshot by hand from `(character, advance)` pairs, one slice per line.
/// Source indices follow the UTF-8 lengths of the characters, lines are left aligned.
pub fn snapshot_from_lines(lines: &[&[(char, f32)]]) -> Snapshot {
    let mut characters = Vec::new();
    let mut out_lines = Vec::new();
    let mut source_index = 0;

    for (line_index, line) in lines.iter().enumerate() {
        let first_char = characters.len();
        let mut pen = 0.0;
        for &(character, advance) in line.iter() {
            characters.push(Character {
                source_index,
                character,
                origin: pen,
                x_advance: pen + advance,
                line: line_index,
                is_visible: !character.is_whitespace(),
            });
            pen += advance;
            source_index += character.len_utf8();
        }

        let last_char = characters.len().saturating_sub(1).max(first_char);
        out_lines.push(Line {
            first_char,
            last_char,
            first_visible_char: first_char,
            last_visible_char: last_char,
            char_count: line.len(),
            visible_count: line.iter().filter(|(c, _)| !c.is_whitespace()).count(),
            length: pen,
            width: pen,
            alignment: TextAlign::Left,
        });
    }

    Snapshot::new(out_lines, characters)
}

/// Concatenated characters of one line.
pub fn line_text(snapshot: &Snapshot, index: usize) -> String {
    snapshot
        .line_chars(&snapshot.lines[index])
        .iter()
        .map(|c| c.character)
        .collect()
}

/// Markup with every spacing directive and flush scope removed.
pub fn strip_directives(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let is_directive = tail.starts_with("<space=")
            || tail.starts_with("<align=\"flush\">")
            || tail.starts_with("</align>");
        match tail.find('>') {
            Some(end) if is_directive => rest = &tail[end + 1..],
            _ => {
                out.push('<');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
