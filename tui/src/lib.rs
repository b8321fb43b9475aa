//! TUI rendering for hexcast using ratatui.

mod input;
mod theme;

pub use input::handle_events;
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use hexcast_engine::{App, Modal, NarrationState, TRIALS_PER_CAST};
use hexcast_types::Line as CastLine;
use hexcast_types::Trigram;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Hexagram + reading
            Constraint::Length(9),  // Trigram grid
            Constraint::Length(1),  // Status bar
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], &palette);
    draw_main(frame, app, chunks[1], &palette, &glyphs);
    draw_trigram_grid(frame, app, chunks[2], &palette);
    draw_status_bar(frame, app, chunks[3], &palette);

    match app.modal() {
        Modal::None => {}
        Modal::TrigramDetail { .. } => draw_trigram_modal(frame, app, &palette, &glyphs),
        Modal::HexagramDetail => draw_hexagram_modal(frame, app, &palette, &glyphs),
    }
}

fn draw_header(frame: &mut Frame, area: Rect, palette: &Palette) {
    let header = Paragraph::new(vec![
        Line::styled("Compositor Musical I Ching", styles::title(palette)),
        Line::styled(
            "Genera ideas para SuperCollider basadas en los trigramas del I Ching",
            styles::subtitle(palette),
        ),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn draw_main(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(30)])
        .split(area);

    draw_hexagram_pane(frame, app, columns[0], palette, glyphs);
    draw_reading_pane(frame, app, columns[1], palette, glyphs);
}

fn cast_line_row<'a>(line: &CastLine, palette: &Palette, glyphs: &Glyphs) -> Line<'a> {
    let style = if line.is_changing() {
        Style::default().fg(palette.line_changing)
    } else {
        Style::default().fg(palette.line)
    };
    let marker = match (line.is_changing(), line.is_solid()) {
        (true, true) => glyphs.changing_yang,
        (true, false) => glyphs.changing_yin,
        (false, _) => " ",
    };
    let glyph = if line.is_solid() {
        glyphs.line_solid
    } else {
        glyphs.line_broken
    };
    Line::from(vec![
        Span::styled(format!("  {glyph}"), style),
        Span::styled(format!("  {} ", line.value()), styles::hint(palette)),
        Span::styled(marker.to_string(), style),
    ])
}

fn draw_hexagram_pane(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .title(" Hexagrama ")
        .title_style(styles::subtitle(palette))
        .padding(Padding::horizontal(1));

    let revealed = app.revealed_lines();
    let mut lines: Vec<Line> = Vec::new();

    if revealed.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            "Pulsa ESPACIO para",
            styles::hint(palette),
        ));
        lines.push(Line::styled("lanzar las monedas.", styles::hint(palette)));
    } else {
        // Line 6 (top, last drawn) renders first; line 1 (bottom) last.
        for index in (0..TRIALS_PER_CAST).rev() {
            match revealed.get(index) {
                Some(line) => lines.push(cast_line_row(line, palette, glyphs)),
                None => lines.push(Line::styled(
                    format!("  {}", glyphs.line_pending),
                    styles::hint(palette),
                )),
            }
            lines.push(Line::from(""));
        }
    }

    if app.is_tossing() {
        lines.push(Line::from(vec![
            Span::styled(
                spinner_frame(app.tick_count(), app.ui_options()),
                Style::default().fg(palette.primary),
            ),
            Span::styled(" Lanzando monedas...", styles::hint(palette)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn trigram_summary<'a>(
    label: &'a str,
    trigram: &Trigram,
    palette: &Palette,
) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), styles::hint(palette)),
        Span::styled(
            format!("{} {} ({})", trigram.symbol, trigram.name, trigram.chinese_name),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn narration_summary<'a>(app: &App, palette: &Palette) -> Option<Line<'a>> {
    match app.narration() {
        NarrationState::Disabled => Some(Line::styled(
            "Funcionalidad de IA deshabilitada (API Key no configurada).",
            Style::default().fg(palette.warning),
        )),
        NarrationState::Loading => Some(Line::from(vec![
            Span::styled(
                spinner_frame(app.tick_count(), app.ui_options()),
                Style::default().fg(palette.accent),
            ),
            Span::styled(" Generando interpretación...", styles::hint(palette)),
        ])),
        NarrationState::Ready(_) => Some(Line::styled(
            "Interpretación lista. Pulsa ENTER para leerla.",
            Style::default().fg(palette.success),
        )),
        NarrationState::Failed(_) => Some(Line::styled(
            "Error al generar el significado del hexagrama.",
            styles::error(palette),
        )),
        NarrationState::Idle => None,
    }
}

fn draw_reading_pane(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .title(" Lectura ")
        .title_style(styles::subtitle(palette))
        .padding(Padding::horizontal(1));

    let mut lines: Vec<Line> = Vec::new();

    if let Some(hexagram) = app.hexagram() {
        lines.push(trigram_summary("Trigrama Inferior", &hexagram.lower, palette));
        lines.push(Line::styled(
            format!("  {} {}", glyphs.bullet, hexagram.lower.ideas.concept),
            Style::default().fg(palette.text_secondary),
        ));
        lines.push(Line::from(""));
        lines.push(trigram_summary("Trigrama Superior", &hexagram.upper, palette));
        lines.push(Line::styled(
            format!("  {} {}", glyphs.bullet, hexagram.upper.ideas.concept),
            Style::default().fg(palette.text_secondary),
        ));
        lines.push(Line::from(""));
        if let Some(narration) = narration_summary(app, palette) {
            lines.push(narration);
            lines.push(Line::from(""));
        }
        lines.push(Line::styled(
            "ENTER: abrir el detalle del hexagrama",
            styles::hint(palette),
        ));
    } else if app.is_tossing() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            "Las monedas están en el aire...",
            styles::hint(palette),
        ));
    } else {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            "Lanza las monedas para generar un hexagrama y descubrir tus trigramas musicales.",
            Style::default().fg(palette.text_secondary),
        ));
        lines.push(Line::from(""));
        lines.push(Line::styled(
            "O pulsa 1-8 para ver ideas de código SuperCollider de cada trigrama.",
            styles::hint(palette),
        ));
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

/// Truncate `text` to `max_width` terminal columns, appending an ellipsis
/// when something was cut.
fn fit(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.to_string().width();
        if used + ch_width + 1 > max_width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push('…');
    out
}

fn draw_trigram_grid(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .title(" Los Ocho Trigramas ")
        .title_style(styles::subtitle(palette));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(inner);

    let entries = app.catalog().entries();
    for (row_index, row_area) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(*row_area);
        for (col_index, cell) in cells.iter().enumerate() {
            let index = row_index * 4 + col_index;
            let Some(trigram) = entries.get(index) else {
                continue;
            };
            let name_width = cell.width.saturating_sub(2) as usize;
            let card = Paragraph::new(vec![
                Line::from(vec![
                    Span::styled(format!("[{}] ", index + 1), styles::hint(palette)),
                    Span::styled(
                        trigram.symbol,
                        Style::default()
                            .fg(palette.primary)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::styled(
                    fit(trigram.name, name_width),
                    Style::default().fg(palette.text_secondary),
                ),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(card, *cell);
        }
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let content = if let Some(status) = app.status() {
        Line::styled(status.to_string(), Style::default().fg(palette.success))
    } else {
        Line::styled(
            "espacio: lanzar · 1-8: trigramas · enter: hexagrama · q: salir",
            styles::hint(palette),
        )
    };
    frame.render_widget(Paragraph::new(content), area);
}

// ============================================================================
// Modals
// ============================================================================

/// Centered popup rectangle sized as a percentage of `area`.
fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

fn modal_block<'a>(title: String, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.bg_popup))
        .title(title)
        .title_style(styles::title(palette))
        .padding(Padding::horizontal(1))
}

fn section_header<'a>(text: &'a str, palette: &Palette) -> Line<'a> {
    Line::styled(
        text,
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD),
    )
}

fn push_code<'a>(lines: &mut Vec<Line<'a>>, code: &'a str, palette: &Palette) {
    for code_line in code.lines() {
        lines.push(Line::styled(
            code_line,
            Style::default().fg(palette.success),
        ));
    }
}

fn draw_trigram_modal(frame: &mut Frame, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let Some(trigram) = app.selected_trigram() else {
        return;
    };
    let area = popup_area(frame.area(), 72, 84);
    frame.render_widget(Clear, area);

    let title = format!(
        " {} {} ({}) ",
        trigram.symbol, trigram.name, trigram.chinese_name
    );

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::styled(
        trigram.ideas.concept,
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::ITALIC),
    ));
    lines.push(Line::from(""));

    lines.push(section_header("Elementos musicales", palette));
    for (label, text) in [
        ("Escalas y melodía", trigram.musical.scales_melody),
        ("Textura", trigram.musical.texture),
        ("Polirritmia", trigram.musical.polyrhythm),
    ] {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {label}: ", glyphs.bullet),
                Style::default().fg(palette.text_secondary),
            ),
            Span::styled(text, Style::default().fg(palette.text_primary)),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(section_header("SynthDef", palette));
    push_code(&mut lines, trigram.ideas.synth_example, palette);
    lines.push(Line::from(""));

    lines.push(section_header("Patrón (Pbind)", palette));
    push_code(&mut lines, trigram.ideas.pattern_example, palette);
    lines.push(Line::from(""));

    lines.push(Line::styled(
        format!("y: copiar código · {}: desplazar · esc: cerrar", glyphs.scroll_hint),
        styles::hint(palette),
    ));

    let paragraph = Paragraph::new(lines)
        .block(modal_block(title, palette))
        .wrap(Wrap { trim: false })
        .scroll((app.modal_scroll(), 0));
    frame.render_widget(paragraph, area);
}

fn draw_hexagram_modal(frame: &mut Frame, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let Some(hexagram) = app.hexagram() else {
        return;
    };
    let area = popup_area(frame.area(), 70, 70);
    frame.render_widget(Clear, area);

    let title = format!(
        " Hexagrama: {} sobre {} ",
        hexagram.upper.name, hexagram.lower.name
    );

    let mut lines: Vec<Line> = Vec::new();
    lines.push(trigram_summary("Trigrama Inferior", &hexagram.lower, palette));
    lines.push(trigram_summary("Trigrama Superior", &hexagram.upper, palette));
    lines.push(Line::from(""));
    lines.push(section_header("Interpretación", palette));

    match app.narration() {
        NarrationState::Loading => {
            lines.push(Line::from(vec![
                Span::styled(
                    spinner_frame(app.tick_count(), app.ui_options()),
                    Style::default().fg(palette.accent),
                ),
                Span::styled(" Generando interpretación...", styles::hint(palette)),
            ]));
        }
        NarrationState::Ready(text) => {
            for text_line in text.lines() {
                lines.push(Line::styled(
                    text_line.to_string(),
                    Style::default().fg(palette.text_primary),
                ));
            }
        }
        NarrationState::Failed(detail) => {
            lines.push(Line::styled(
                "Error al generar el significado del hexagrama. Inténtalo de nuevo.",
                styles::error(palette),
            ));
            lines.push(Line::styled(
                format!("(Detalle: {detail})"),
                styles::hint(palette),
            ));
        }
        NarrationState::Disabled => {
            lines.push(Line::styled(
                "La clave API para el servicio de IA no está configurada. \
                 El significado del hexagrama no se puede generar.",
                Style::default().fg(palette.warning),
            ));
        }
        NarrationState::Idle => {
            lines.push(Line::styled("Sin interpretación.", styles::hint(palette)));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("{}: desplazar · esc: cerrar", glyphs.scroll_hint),
        styles::hint(palette),
    ));

    let paragraph = Paragraph::new(lines)
        .block(modal_block(title, palette))
        .wrap(Wrap { trim: false })
        .scroll((app.modal_scroll(), 0));
    frame.render_widget(paragraph, area);
}
