use crate::catalog::Product;
use unicode_width::UnicodeWidthChar;

pub const NO_RESULTS_MESSAGE: &str = "No products match your search.";
pub const EMPTY_STATE_LINE: &str = "  (nothing to show)";

/// Which surface receives keystrokes. Escape only acts on the search field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Results,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Search => Focus::Results,
            Focus::Results => Focus::Search,
        }
    }
}

/// Everything a screen needs to draw one frame. Building the plan is pure;
/// side effects live in the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    pub header_lines: Vec<String>,
    pub card_lines: Vec<String>,
    pub status_line: String,
    pub input_line: String,
    pub empty_state: bool,
}

/// Clip a string to `max` display columns, keeping zero-width characters.
pub fn truncate_display(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let mut used = 0usize;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if w == 0 {
            out.push(ch);
            continue;
        }
        if used + w > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out
}

/// One canonical pluralization for the count message.
pub fn result_count_message(count: usize) -> String {
    if count == 1 {
        "1 product found".to_string()
    } else {
        format!("{count} products found")
    }
}

fn card_lines_for(product: &Product, width: usize) -> [String; 2] {
    let title = format!("{}  ${}", product.name, product.formatted_price());
    let body = format!("  {}", product.description);
    [
        truncate_display(&title, width),
        truncate_display(&body, width),
    ]
}

/// Build the frame for the given results. The status message appears twice,
/// in the header (page-top region) and next to the input, matching the two
/// live regions of the original layout.
pub fn build_render_plan(
    results: &[&Product],
    input: &str,
    focus: Focus,
    w: u16,
    h: u16,
) -> RenderPlan {
    let width = w as usize;
    let empty_state = results.is_empty();
    let status = if empty_state {
        NO_RESULTS_MESSAGE.to_string()
    } else {
        result_count_message(results.len())
    };

    let title = truncate_display("vitrina - live product search", width);
    let header_lines = vec![
        title,
        truncate_display(&status, width),
        "-".repeat(width),
    ];

    let mut card_lines = Vec::new();
    if empty_state {
        card_lines.push(truncate_display(EMPTY_STATE_LINE, width));
    } else {
        // Header takes 3 rows, status and input one each; cards are 2 rows.
        let max_cards = (h.saturating_sub(5) as usize) / 2;
        for product in results.iter().take(max_cards.max(1)) {
            card_lines.extend(card_lines_for(product, width));
        }
    }

    let prompt = match focus {
        Focus::Search => format!("search> {input}"),
        Focus::Results => format!("search: {input}"),
    };

    RenderPlan {
        header_lines,
        card_lines,
        status_line: truncate_display(&status, width),
        input_line: truncate_display(&prompt, width),
        empty_state,
    }
}
