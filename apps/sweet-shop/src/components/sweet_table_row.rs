//! Table-view row for one sweet.
//!
//! Customers get a Purchase action; admins get Edit, Restock and Delete.

use sweets_core::Sweet;

use super::{fit, purchase_button, ActionButton, OUT_OF_STOCK_LABEL};

const ID_WIDTH: usize = 14;
const NAME_WIDTH: usize = 22;
const CATEGORY_WIDTH: usize = 12;
const PRICE_WIDTH: usize = 9;
const STOCK_WIDTH: usize = 13;

/// Props for [`render_sweet_row`].
#[derive(Debug, Clone, Copy)]
pub struct SweetRowProps<'a> {
    pub sweet: &'a Sweet,
    pub is_admin: bool,
    pub is_purchasing: bool,
}

/// Stock cell: the bare count, or `Out of Stock`.
pub fn row_stock_badge(sweet: &Sweet) -> String {
    if sweet.is_out_of_stock() {
        OUT_OF_STOCK_LABEL.to_string()
    } else {
        sweet.quantity.to_string()
    }
}

/// Buttons in the actions cell.
pub fn row_actions(props: SweetRowProps<'_>) -> Vec<ActionButton> {
    if props.is_admin {
        vec![
            ActionButton::enabled("Edit"),
            ActionButton::enabled("Restock"),
            ActionButton::enabled("Delete"),
        ]
    } else {
        vec![match purchase_button(props.sweet, props.is_purchasing) {
            // Rows keep the "Purchase" label even when disabled.
            button if !button.enabled => ActionButton::disabled("Purchase"),
            button => button,
        }]
    }
}

fn columns(id: &str, name: &str, category: &str, price: &str, stock: &str, actions: &str) -> String {
    format!(
        "{:<iw$} {:<nw$} {:<cw$} {:>pw$}  {:<sw$} {}",
        fit(id, ID_WIDTH),
        fit(name, NAME_WIDTH),
        fit(category, CATEGORY_WIDTH),
        price,
        stock,
        actions,
        iw = ID_WIDTH,
        nw = NAME_WIDTH,
        cw = CATEGORY_WIDTH,
        pw = PRICE_WIDTH,
        sw = STOCK_WIDTH,
    )
    .trim_end()
    .to_string()
}

/// Column headings.
pub fn render_table_header() -> String {
    let header = columns("ID", "Name", "Category", "Price", "Stock", "Actions");
    let rule = "─".repeat(header.chars().count());
    format!("{}\n{}", header, rule)
}

/// Renders one row.
pub fn render_sweet_row(props: SweetRowProps<'_>) -> String {
    let sweet = props.sweet;
    let actions = row_actions(props)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");

    columns(
        &sweet.id,
        &sweet.name,
        &sweet.category,
        &sweet.price().to_string(),
        &row_stock_badge(sweet),
        &actions,
    )
}

/// Placeholder row with the same column layout.
pub(crate) fn render_placeholder_row() -> String {
    columns(
        &"░".repeat(ID_WIDTH / 2),
        &"░".repeat(NAME_WIDTH - 6),
        &"░".repeat(CATEGORY_WIDTH - 4),
        &"░".repeat(PRICE_WIDTH - 3),
        &"░".repeat(STOCK_WIDTH - 5),
        &"░".repeat(10),
    )
}
