// Navigation bar component
//
// Brand on the left. At desktop widths the section links render inline on
// the right; below the breakpoint they collapse behind a hamburger toggle.
// Past the scroll threshold the bar switches to its solid "scrolled"
// background so it reads as pinned over content.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::content;
use crate::page::nav::NavLink;
use crate::tui::app::App;

const BRAND: &str = "Meridian Studio";

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    // Degrade gracefully: no room, no navbar
    if area.height < 3 || area.width < 12 {
        return;
    }
    let theme = app.theme.clone();
    let scrolled = app.controller.nav().scrolled();
    let bg = if scrolled {
        theme.navbar_scrolled_bg
    } else {
        theme.navbar_bg
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    f.render_widget(block, area);
    app.zones.navbar = area;

    let brand = Paragraph::new(Span::styled(
        BRAND,
        Style::default().fg(theme.brand).add_modifier(Modifier::BOLD),
    ))
    .style(Style::default().bg(bg));
    let brand_width = (BRAND.width() as u16).min(inner.width.saturating_sub(2));
    f.render_widget(brand, Rect::new(inner.x + 1, inner.y, brand_width, 1));

    if app.is_compact() {
        render_hamburger(f, inner, app, bg);
    } else {
        render_links(f, inner, app, bg);
    }
}

fn render_links(f: &mut Frame, inner: Rect, app: &mut App, bg: Color) {
    let theme = app.theme.clone();
    let links: Vec<NavLink> = app.controller.nav().links().to_vec();

    let total: u16 = content::SECTIONS
        .iter()
        .map(|section| section.nav_label.width() as u16 + 2)
        .sum();
    let mut x = inner.right().saturating_sub(total + 1);

    for (link, section) in links.iter().zip(content::SECTIONS) {
        let width = section.nav_label.width() as u16 + 2;
        if x < inner.x || x + width > inner.right() {
            break;
        }
        let style = if link.active {
            Style::default()
                .fg(theme.link_active)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.link)
        };
        let rect = Rect::new(x, inner.y, width, 1);
        f.render_widget(
            Paragraph::new(Span::styled(format!(" {} ", section.nav_label), style))
                .style(Style::default().bg(bg)),
            rect,
        );
        app.zones.links.push((rect, link.section));
        x += width;
    }
}

fn render_hamburger(f: &mut Frame, inner: Rect, app: &mut App, bg: Color) {
    let theme = app.theme.clone();
    let open = app.controller.menu().is_open();

    let label = if inner.width >= 30 { "≡ Menu" } else { "≡" };
    let width = label.width() as u16 + 2;
    let x = inner.right().saturating_sub(width + 1);
    if x < inner.x {
        return;
    }

    let style = if open {
        Style::default()
            .fg(theme.link_active)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.link)
    };
    let rect = Rect::new(x, inner.y, width, 1);
    f.render_widget(
        Paragraph::new(Span::styled(format!(" {label} "), style)).style(Style::default().bg(bg)),
        rect,
    );
    app.zones.hamburger = Some(rect);
}
