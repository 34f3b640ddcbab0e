//! Grid-view card for one sweet.

use sweets_core::Sweet;

use super::{fit, purchase_button, OUT_OF_STOCK_LABEL};

/// Inner width of a card, between the borders.
pub const CARD_WIDTH: usize = 34;

/// Props for [`render_sweet_card`].
#[derive(Debug, Clone, Copy)]
pub struct SweetCardProps<'a> {
    pub sweet: &'a Sweet,
    pub is_purchasing: bool,
}

/// Stock badge as shown on a card: `45 left` or `Out of Stock`.
pub fn card_stock_badge(sweet: &Sweet) -> String {
    if sweet.is_out_of_stock() {
        OUT_OF_STOCK_LABEL.to_string()
    } else {
        format!("{} left", sweet.quantity)
    }
}

/// Renders a bordered card.
pub fn render_sweet_card(props: SweetCardProps<'_>) -> String {
    let sweet = props.sweet;
    let badge = card_stock_badge(sweet);

    let title_width = CARD_WIDTH.saturating_sub(badge.chars().count() + 1);
    let title = format!(
        "{:<title_width$} {}",
        fit(&sweet.name, title_width),
        badge,
        title_width = title_width
    );
    let description = fit(sweet.description.as_deref().unwrap_or(""), CARD_WIDTH);
    let details = fit(
        &format!("[{}] {}", sweet.category, sweet.price()),
        CARD_WIDTH,
    );
    let footer = format!(
        "#{} {}",
        sweet.id,
        purchase_button(sweet, props.is_purchasing)
    );

    let border = "─".repeat(CARD_WIDTH + 2);
    let mut out = format!("┌{}┐\n", border);
    for line in [title, description, details, fit(&footer, CARD_WIDTH)] {
        out.push_str(&format!("│ {:<width$} │\n", line, width = CARD_WIDTH));
    }
    out.push_str(&format!("└{}┘", border));
    out
}
