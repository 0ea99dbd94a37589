//! Text cards for a list of results.

use std::fmt::Write;

use crate::schema::BenchmarkResult;

pub const NOT_APPLICABLE: &str = "N/A";

fn format_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    let b = bytes as f64;
    if b >= KIB * KIB {
        format!("{:.2} MB", b / (KIB * KIB))
    } else if b >= KIB {
        format!("{:.2} KB", b / KIB)
    } else {
        format!("{bytes} B")
    }
}

/// One result as a card.
pub fn render_card(result: &BenchmarkResult) -> String {
    let average = match result.average_per_op_ms() {
        Some(avg) => format!("{avg:.4}ms"),
        None => NOT_APPLICABLE.to_string(),
    };

    let mut card = String::new();
    let _ = writeln!(card, "{}", result.format);
    let _ = writeln!(card, "  Serialize:   {:.2}ms", result.serialize_time_ms);
    let _ = writeln!(card, "  Deserialize: {:.2}ms", result.deserialize_time_ms);
    let _ = writeln!(card, "  Total:       {:.2}ms", result.total_time_ms);
    let _ = writeln!(card, "  Avg per op:  {average}");
    let _ = writeln!(
        card,
        "  Payload:     {} over {} iteration(s)",
        format_bytes(result.payload_bytes),
        result.iterations
    );
    if result.mismatches > 0 {
        let _ = writeln!(card, "  Mismatches:  {}", result.mismatches);
    }
    card
}

/// All results in the order given, separated by blank lines.
pub fn render(results: &[BenchmarkResult]) -> String {
    results
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(format: &str, ser: f64, de: f64, n: usize) -> BenchmarkResult {
        let mut r = BenchmarkResult::new(format, ser, de, n);
        r.payload_bytes = 2_048;
        r
    }

    #[test]
    fn card_shows_two_decimal_times_and_average() {
        let card = render_card(&result("JSON", 1.234, 0.5, 1_000));
        assert!(card.starts_with("JSON\n"));
        assert!(card.contains("Serialize:   1.23ms"));
        assert!(card.contains("Deserialize: 0.50ms"));
        assert!(card.contains("Total:       1.73ms"));
        assert!(card.contains("Avg per op:  0.0009ms"));
        assert!(card.contains("2.00 KB over 1000 iteration(s)"));
        assert!(!card.contains("Mismatches"));
    }

    #[test]
    fn single_iteration_average_is_not_applicable() {
        let card = render_card(&result("Protobuf (Large)", 40.0, 30.0, 1));
        assert!(card.contains("Avg per op:  N/A"));
    }

    #[test]
    fn mismatches_are_shown_when_present() {
        let mut r = result("FlatBuffers", 1.0, 1.0, 10);
        r.mismatches = 3;
        assert!(render_card(&r).contains("Mismatches:  3"));
    }

    #[test]
    fn render_preserves_order_and_is_idempotent() {
        let results = vec![
            result("JSON", 3.0, 2.0, 100),
            result("MessagePack", 2.0, 1.0, 100),
            result("JSON (Large)", 50.0, 40.0, 1),
        ];
        let first = render(&results);
        assert_eq!(first, render(&results));

        let json = first.find("JSON\n").unwrap();
        let msgpack = first.find("MessagePack\n").unwrap();
        let large = first.find("JSON (Large)\n").unwrap();
        assert!(json < msgpack && msgpack < large);
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn byte_units() {
        assert_eq!(format_bytes(7), "7 B");
        assert_eq!(format_bytes(1_536), "1.50 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.00 MB");
    }
}
