use crate::lookup::{LookupPhase, LookupState};
use crate::pricing::Product;
use crate::ui::animation::arrow_frame;
use crate::ui::app::App;
use crate::ui::layout::{center_padding, surface_regions};
use crate::ui::logo::Logo;
use crate::ui::theme::{BRAND_BLUE, ERROR_TEXT, NOT_FOUND, PRODUCT_TEXT, SEARCHING};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Padding, Paragraph, Wrap};
use ratatui::Frame;

const NOT_FOUND_TITLE: &str = "EL PRODUCTO NO EXISTE";
const NOT_FOUND_HINT: &str = "Validar en caja";
const SEARCHING_TEXT: &str = "Buscando...";
const SCAN_PROMPT: &str = "Acerca el producto al lector";

pub fn draw(frame: &mut Frame<'_>, state: &LookupState, app: &App) {
    let area = frame.area();
    let (logo, body) = surface_regions(area);

    frame.render_widget(Clear, area);
    frame.render_widget(Logo::new(app.store_name()).widget(logo), logo);

    let lines = surface_lines(state, app.animation_frame());
    let padding = center_padding(body, lines.len());
    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(BRAND_BLUE).fg(PRODUCT_TEXT))
        .block(Block::default().padding(Padding::top(padding)));
    frame.render_widget(panel, body);
}

/// Lines of the product panel, top to bottom.
pub fn surface_lines(state: &LookupState, animation_frame: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(code) = shown_code(state) {
        lines.push(Line::from(code.to_string()));
        lines.push(Line::from(""));
    }

    match state.phase() {
        LookupPhase::NotFound => {
            let banner = Style::default().fg(NOT_FOUND).add_modifier(Modifier::BOLD);
            lines.push(Line::from(Span::styled(NOT_FOUND_TITLE, banner)));
            lines.push(Line::from(Span::styled(NOT_FOUND_HINT, banner)));
            lines.push(Line::from(""));
        }
        LookupPhase::Loading => {
            lines.push(Line::from(Span::styled(
                SEARCHING_TEXT,
                Style::default().fg(SEARCHING),
            )));
            lines.push(Line::from(""));
        }
        LookupPhase::Displayed => {
            if let Some(product) = state.displayed.as_ref() {
                product_lines(product, &mut lines);
            }
        }
        LookupPhase::Idle => {}
    }

    lines.push(Line::from(SCAN_PROMPT));
    lines.extend(
        arrow_frame(animation_frame)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, Style::default().add_modifier(Modifier::BOLD)))),
    );

    if let Some(message) = state.error_message.as_ref() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(ERROR_TEXT),
        )));
    }

    lines
}

fn shown_code(state: &LookupState) -> Option<&str> {
    match (state.phase(), state.displayed.as_ref()) {
        (LookupPhase::Displayed, Some(product)) if !product.code().is_empty() => {
            Some(product.code())
        }
        (LookupPhase::Idle, _) => None,
        _ => Some(state.last_query.as_str()).filter(|code| !code.is_empty()),
    }
}

fn product_lines(product: &Product, lines: &mut Vec<Line<'static>>) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    lines.push(Line::from(Span::styled(product.name().to_string(), bold)));
    lines.push(Line::from(Span::styled(
        format!("$ {}", product.sell_price()),
        bold,
    )));
    if product.has_wholesale() {
        lines.push(Line::from(format!(
            "Por mayor: $ {} desde {} unidades",
            product.wholesale_price(),
            product.wholesale_min_qty()
        )));
    }
    lines.push(Line::from(""));
}
