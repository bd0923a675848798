// Compact menu overlay
//
// The link list that drops below the hamburger while the menu is open. It
// paints over page content (which is scroll-locked behind it), so the area
// is cleared first. Clicks on its entries are nav clicks; clicks anywhere
// else count as outside and close it.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::content;
use crate::page::nav::NavLink;
use crate::tui::app::App;

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme.clone();
    let links: Vec<NavLink> = app.controller.nav().links().to_vec();

    let widest = content::SECTIONS
        .iter()
        .map(|section| section.nav_label.width())
        .max()
        .unwrap_or(0) as u16;
    let width = (widest + 6).min(area.width);
    let height = (links.len() as u16 + 2).min(area.height);
    if width < 8 || height < 3 {
        return;
    }

    let rect = Rect::new(area.right().saturating_sub(width), area.y, width, height);
    f.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.navbar_scrolled_bg));
    let inner = block.inner(rect);
    f.render_widget(block, rect);
    app.zones.menu = Some(rect);

    for (row, (link, section)) in links.iter().zip(content::SECTIONS).enumerate() {
        if row as u16 >= inner.height {
            break;
        }
        let style = if link.active {
            Style::default()
                .fg(theme.link_active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.link)
        };
        let entry = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
        f.render_widget(
            Paragraph::new(Span::styled(format!("  {}", section.nav_label), style))
                .style(Style::default().bg(theme.navbar_scrolled_bg)),
            entry,
        );
        app.zones.links.push((entry, link.section));
    }
}
