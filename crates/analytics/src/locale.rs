//! Polish-language labels used by the dashboard.

/// Grammatical form of "order" for a count, per Polish plural rules.
///
/// 1 → `zamówienie`; counts ending in 12–14 → `zamówień`; other counts ending
/// in 2–4 → `zamówienia`; everything else (0, 5–21, 25…) → `zamówień`.
pub fn pluralize_orders(count: u64) -> &'static str {
    if count == 1 {
        return "zamówienie";
    }
    let last_two = count % 100;
    if (12..=14).contains(&last_two) {
        return "zamówień";
    }
    let last = count % 10;
    if (2..=4).contains(&last) {
        return "zamówienia";
    }
    "zamówień"
}

/// `"3 zamówienia"`, `"1 zamówienie"`, `"12 zamówień"`.
pub fn order_count_label(count: u64) -> String {
    format!("{count} {}", pluralize_orders(count))
}

const SHORT_MONTHS: [&str; 12] = [
    "sty", "lut", "mar", "kwi", "maj", "cze", "lip", "sie", "wrz", "paź", "lis", "gru",
];

/// Abbreviated Polish month name for a 1-based month number.
pub fn short_month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|idx| SHORT_MONTHS.get(idx as usize))
        .copied()
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralizer_matches_polish_grammar() {
        assert_eq!(pluralize_orders(1), "zamówienie");
        assert_eq!(pluralize_orders(2), "zamówienia");
        assert_eq!(pluralize_orders(5), "zamówień");
        assert_eq!(pluralize_orders(12), "zamówień");
        assert_eq!(pluralize_orders(22), "zamówienia");
    }

    #[test]
    fn pluralizer_edge_counts() {
        assert_eq!(pluralize_orders(0), "zamówień");
        assert_eq!(pluralize_orders(11), "zamówień");
        assert_eq!(pluralize_orders(14), "zamówień");
        assert_eq!(pluralize_orders(21), "zamówień");
        assert_eq!(pluralize_orders(101), "zamówień");
        assert_eq!(pluralize_orders(104), "zamówienia");
        assert_eq!(pluralize_orders(112), "zamówień");
    }

    #[test]
    fn label_prefixes_count() {
        assert_eq!(order_count_label(3), "3 zamówienia");
    }

    #[test]
    fn month_names() {
        assert_eq!(short_month_name(1), "sty");
        assert_eq!(short_month_name(10), "paź");
        assert_eq!(short_month_name(12), "gru");
        assert_eq!(short_month_name(0), "");
        assert_eq!(short_month_name(13), "");
    }
}
