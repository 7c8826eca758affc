use ratatui::layout::{Constraint, Layout, Rect};

/// Rows kept for the console pane at the bottom of the body.
const CONSOLE_HEIGHT: u16 = 8;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Sections of the body.
pub struct BodyRegions {
    pub recipe: Rect,
    pub effects: Rect,
    pub tea_set: Rect,
    pub gathering: Rect,
    pub console: Rect,
}

pub fn body_regions(body: Rect, gathering_rows: u16) -> BodyRegions {
    let [sections, console] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(CONSOLE_HEIGHT)]).areas(body);
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(sections);
    // Input line, blank line, three steps.
    let [recipe, effects] =
        Layout::vertical([Constraint::Length(7), Constraint::Min(0)]).areas(left);
    // Three cups per column.
    let [tea_set, gathering] = Layout::vertical([
        Constraint::Length(6),
        Constraint::Length(gathering_rows.saturating_add(2)),
    ])
    .areas(right);
    BodyRegions {
        recipe,
        effects,
        tea_set,
        gathering,
        console,
    }
}

pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_area() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 30));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.height, 24);
        assert_eq!(footer.y, 27);
    }

    #[test]
    fn tiny_area_does_not_underflow() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 10, 2));
        assert_eq!(header.height, 2);
        assert_eq!(body.height, 0);
        assert_eq!(footer.height, 0);
    }

    #[test]
    fn centered_rect_is_clamped() {
        let rect = centered_rect_by_size(Rect::new(0, 0, 20, 10), 40, 4);
        assert_eq!(rect, Rect::new(0, 3, 20, 4));
    }
}
