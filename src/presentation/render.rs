// Text rendering of the dashboard view state
use crate::domain::dashboard::{DashboardViewState, Phase};
use crate::domain::price_history::PriceHistory;
use crate::domain::product::{TrackedProduct, format_price};

pub const EMPTY_STATE_MESSAGE: &str = "No products tracked yet. Add one to get started!";

pub fn render_dashboard(view: &DashboardViewState) -> String {
    if view.phase() == Phase::Loading {
        return "Loading...".to_string();
    }

    let mut lines = vec!["Price Tracker".to_string()];

    if let Some(error) = view.error_message() {
        lines.push(format!("! {}", error));
    }

    if view.form_open() {
        lines.push(format!(
            "[add product] url: {}  target price: {}",
            placeholder(view.draft_url()),
            placeholder(view.draft_target_price())
        ));
    }

    for product in view.products() {
        lines.extend(render_card(product));
    }

    if view.products().is_empty() {
        lines.push(EMPTY_STATE_MESSAGE.to_string());
    }

    lines.join("\n")
}

fn placeholder(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn render_card(product: &TrackedProduct) -> Vec<String> {
    let marker = if product.at_or_below_target() { " *" } else { "" };
    vec![
        format!("[{}] {}{}", product.id, product.display_name(), marker),
        format!("  Current Price: {}", format_price(product.current_price)),
        format!("  Target Price: {}", format_price(product.target_price)),
    ]
}

pub fn render_history(history: &PriceHistory) -> String {
    if history.is_empty() {
        return "No price history recorded yet.".to_string();
    }

    let mut lines: Vec<String> = history
        .points()
        .iter()
        .map(|p| format!("{}  {}", p.recorded_at.format("%Y-%m-%d %H:%M"), format_price(p.price)))
        .collect();
    if let Some(lowest) = history.lowest() {
        lines.push(format!(
            "Lowest: {} on {}",
            format_price(lowest.price),
            lowest.recorded_at.format("%Y-%m-%d")
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_with(products: Vec<TrackedProduct>) -> DashboardViewState {
        let mut view = DashboardViewState::default();
        view.snapshot_loaded(products);
        view
    }

    #[test]
    fn test_loading_screen() {
        assert_eq!(render_dashboard(&DashboardViewState::default()), "Loading...");
    }

    #[test]
    fn test_single_card() {
        let view = ready_with(vec![TrackedProduct::new(
            "p1".into(),
            "Widget".to_string(),
            19.99,
            15.0,
        )]);
        let text = render_dashboard(&view);

        assert!(text.contains("Widget"));
        assert!(text.contains("Current Price: $19.99"));
        assert!(text.contains("Target Price: $15.00"));
        assert!(!text.contains(EMPTY_STATE_MESSAGE));
    }

    #[test]
    fn test_empty_state() {
        let text = render_dashboard(&ready_with(Vec::new()));
        assert!(text.contains(EMPTY_STATE_MESSAGE));
        assert!(!text.contains("Current Price"));
    }

    #[test]
    fn test_error_line_is_shown() {
        let mut view = DashboardViewState::default();
        view.load_failed();
        let text = render_dashboard(&view);
        assert!(text.contains("! Failed to load dashboard"));
    }

    #[test]
    fn test_open_form_shows_drafts() {
        let mut view = ready_with(Vec::new());
        view.toggle_form();
        view.draft_mut().url = "http://x".to_string();
        let text = render_dashboard(&view);
        assert!(text.contains("url: http://x  target price: -"));
    }
}
