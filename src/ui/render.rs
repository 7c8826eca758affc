use crate::lesson::PageView;
use crate::ui::alert::render_alert;
use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, layout_regions};
use crate::ui::theme::{
    CONSOLE_TEXT, FOCUS_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, IMPURE_RED, PURE_GREEN, TEA_AMBER,
};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Draws `page` plus the parts of the screen that live outside the
/// component tree (header, console, alert). Never runs a component.
pub fn draw(frame: &mut Frame, app: &App, page: &PageView) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.is_strict_mode(), app.render_passes());
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);

    let regions = body_regions(body, page.gathering.len() as u16);
    draw_recipe(frame, regions.recipe, page, app.focus() == Focus::Drinkers);
    draw_effects(frame, regions.effects, page, app.focus() == Focus::Button);
    draw_tea_set(frame, regions.tea_set, page);
    draw_list(
        frame,
        regions.gathering,
        "Tea gathering",
        &page.gathering,
        Style::default().fg(PURE_GREEN),
    );
    draw_console(frame, regions.console, app);

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer), footer);

    render_alert(frame, area, app.alert());
}

fn section(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(TEA_AMBER),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(TEA_AMBER)
            .bg(FOCUS_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    }
}

fn draw_recipe(frame: &mut Frame, area: Rect, page: &PageView, focused: bool) {
    let text_style = Style::default().fg(HEADER_TEXT);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Drinkers: ", text_style),
            Span::styled(format!("[ {} ]", page.drinkers_input), focus_style(focused)),
        ]),
        Line::from(""),
    ];
    lines.extend(
        page.recipe
            .iter()
            .enumerate()
            .map(|(idx, step)| Line::from(Span::styled(format!("{}. {step}", idx + 1), text_style))),
    );
    frame.render_widget(Paragraph::new(lines).block(section("Recipe")), area);
}

fn draw_effects(frame: &mut Frame, area: Rect, page: &PageView, focused: bool) {
    let state = if page.button.clicked { "yes" } else { "no" };
    let lines = vec![
        Line::from(Span::styled(
            format!("[ {} ]", page.button.label),
            focus_style(focused),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("clicked: {state}"),
            Style::default().fg(HEADER_TEXT),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(section("Side effects")), area);
}

fn draw_tea_set(frame: &mut Frame, area: Rect, page: &PageView) {
    let [impure, pure] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);
    draw_list(
        frame,
        impure,
        "Impure cups",
        &page.tea_set.impure,
        Style::default().fg(IMPURE_RED),
    );
    draw_list(
        frame,
        pure,
        "Pure cups",
        &page.tea_set.pure,
        Style::default().fg(PURE_GREEN),
    );
}

fn draw_list(frame: &mut Frame, area: Rect, title: &str, items: &[String], style: Style) {
    let lines: Vec<Line> = items
        .iter()
        .map(|item| Line::from(Span::styled(item.clone(), style)))
        .collect();
    frame.render_widget(Paragraph::new(lines).block(section(title)), area);
}

fn draw_console(frame: &mut Frame, area: Rect, app: &App) {
    let visible = area.height.saturating_sub(2) as usize;
    let style = Style::default().fg(CONSOLE_TEXT);
    let mut lines: Vec<Line> = app
        .console()
        .lines()
        .rev()
        .take(visible)
        .map(|line| {
            Line::from(vec![
                Span::styled(format!("[{}] ", line.source), style.add_modifier(Modifier::DIM)),
                Span::styled(line.message.clone(), style),
            ])
        })
        .collect();
    lines.reverse();
    frame.render_widget(Paragraph::new(lines).block(section("Console")), area);
}
