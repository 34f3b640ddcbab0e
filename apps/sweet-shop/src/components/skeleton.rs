//! Loading placeholders, shown only while a load is pending.

use super::sweet_card::CARD_WIDTH;
use super::sweet_table_row::{render_placeholder_row, render_table_header};

/// Placeholder cards in the dashboard grid.
pub const CARD_SKELETON_COUNT: usize = 6;

/// Placeholder rows in the table views.
pub const ROW_SKELETON_COUNT: usize = 5;

/// One placeholder card, same outline as a real card.
pub fn render_card_skeleton() -> String {
    let bars = [CARD_WIDTH * 3 / 4, CARD_WIDTH, CARD_WIDTH * 2 / 3, CARD_WIDTH];
    let border = "─".repeat(CARD_WIDTH + 2);

    let mut out = format!("┌{}┐\n", border);
    for bar in bars {
        out.push_str(&format!(
            "│ {:<width$} │\n",
            "░".repeat(bar),
            width = CARD_WIDTH
        ));
    }
    out.push_str(&format!("└{}┘", border));
    out
}

/// The grid placeholder: [`CARD_SKELETON_COUNT`] cards.
pub fn render_card_grid_skeleton() -> String {
    vec![render_card_skeleton(); CARD_SKELETON_COUNT].join("\n")
}

/// The table placeholder: header plus [`ROW_SKELETON_COUNT`] rows.
pub fn render_table_skeleton() -> String {
    let mut out = render_table_header();
    for _ in 0..ROW_SKELETON_COUNT {
        out.push('\n');
        out.push_str(&render_placeholder_row());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_skeleton_has_six_cards() {
        let grid = render_card_grid_skeleton();
        assert_eq!(grid.matches('┌').count(), CARD_SKELETON_COUNT);
    }

    #[test]
    fn test_table_skeleton_has_five_rows() {
        let table = render_table_skeleton();
        // header + rule + rows
        assert_eq!(table.lines().count(), 2 + ROW_SKELETON_COUNT);
    }
}
