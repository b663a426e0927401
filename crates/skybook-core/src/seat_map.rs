//! Seat map layout rules
//!
//! Seats arrive as a flat list. The seat map shows them as rows keyed by the
//! numeric part of the seat number, rows in ascending numeric order, seats in
//! a row ordered by seat number.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::Seat;

static ROW_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("Invalid row digits regex"));

/// Column after which the seat map draws the aisle
pub const AISLE_AFTER_COLUMN: char = 'C';

/// Numeric row of a seat number (`"12C"` -> `12`)
///
/// Returns `None` when the seat number has no digits or the digits overflow
/// a `u64`.
pub fn row_number(seat_number: &str) -> Option<u64> {
    ROW_DIGITS
        .find(seat_number)
        .and_then(|m| m.as_str().parse().ok())
}

/// Seat number with the row digits removed (`"12C"` -> `"C"`)
pub fn column_label(seat_number: &str) -> String {
    ROW_DIGITS.replace(seat_number, "").into_owned()
}

/// True when the aisle gap follows this seat
pub fn has_aisle_after(seat: &Seat) -> bool {
    seat.seat_number.ends_with(AISLE_AFTER_COLUMN)
}

/// One row of the seat map
#[derive(Debug, Clone, PartialEq)]
pub struct SeatRow {
    pub row: u64,
    pub seats: Vec<Seat>,
}

/// Partition seats into rows
///
/// Seats without a row number are skipped.
pub fn group_into_rows(seats: &[Seat]) -> Vec<SeatRow> {
    let mut rows: BTreeMap<u64, Vec<Seat>> = BTreeMap::new();
    for seat in seats {
        match row_number(&seat.seat_number) {
            Some(row) => rows.entry(row).or_default().push(seat.clone()),
            None => tracing::warn!("Skipping seat {} without a usable row number", seat.seat_number),
        }
    }

    rows.into_iter()
        .map(|(row, mut seats)| {
            seats.sort_by(|a, b| a.seat_number.cmp(&b.seat_number));
            SeatRow { row, seats }
        })
        .collect()
}

/// How a seat is drawn
///
/// Variants are listed from highest to lowest precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatDisplay {
    Occupied,
    Selected,
    Recommended,
    Business,
    Standard,
}

impl SeatDisplay {
    /// Resolve overlapping conditions with
    /// occupied > selected > recommended > business > standard
    pub fn resolve(seat: &Seat, selected: bool, recommended: bool) -> Self {
        if seat.occupied {
            SeatDisplay::Occupied
        } else if selected {
            SeatDisplay::Selected
        } else if recommended {
            SeatDisplay::Recommended
        } else if seat.business_class {
            SeatDisplay::Business
        } else {
            SeatDisplay::Standard
        }
    }

    /// Legend label
    pub fn label(&self) -> &'static str {
        match self {
            SeatDisplay::Occupied => "Occupied",
            SeatDisplay::Selected => "Selected",
            SeatDisplay::Recommended => "Recommended",
            SeatDisplay::Business => "Business Class",
            SeatDisplay::Standard => "Economy Class",
        }
    }

    /// Legend order
    pub const LEGEND: [SeatDisplay; 5] = [
        SeatDisplay::Business,
        SeatDisplay::Standard,
        SeatDisplay::Recommended,
        SeatDisplay::Selected,
        SeatDisplay::Occupied,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SeatId;

    fn seat(id: i64, number: &str) -> Seat {
        Seat {
            id: SeatId(id),
            seat_number: number.to_string(),
            occupied: false,
            business_class: false,
            price: 10.0,
        }
    }

    fn numbers(row: &SeatRow) -> Vec<&str> {
        row.seats.iter().map(|s| s.seat_number.as_str()).collect()
    }

    #[test]
    fn test_grouping_two_rows() {
        let seats: Vec<Seat> = ["2C", "1C", "2A", "1A", "2B"]
            .iter()
            .enumerate()
            .map(|(i, n)| seat(i as i64, n))
            .collect();

        let rows = group_into_rows(&seats);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row, 1);
        assert_eq!(numbers(&rows[0]), vec!["1A", "1C"]);
        assert_eq!(rows[1].row, 2);
        assert_eq!(numbers(&rows[1]), vec!["2A", "2B", "2C"]);
    }

    #[test]
    fn test_rows_sort_numerically_not_lexically() {
        let seats = vec![seat(1, "10A"), seat(2, "9A"), seat(3, "1A"), seat(4, "100A")];
        let rows: Vec<u64> = group_into_rows(&seats).iter().map(|r| r.row).collect();
        assert_eq!(rows, vec![1, 9, 10, 100]);
    }

    #[test]
    fn test_rows_beyond_u32_are_kept() {
        let seats = vec![seat(1, "4294967296A"), seat(2, "2A")];
        let rows = group_into_rows(&seats);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].row, 4_294_967_296);
        assert_eq!(numbers(&rows[1]), vec!["4294967296A"]);
    }

    #[test]
    fn test_seats_without_digits_are_skipped() {
        let seats = vec![seat(1, "A"), seat(2, "3F")];
        let rows = group_into_rows(&seats);
        assert_eq!(rows.len(), 1);
        assert_eq!(numbers(&rows[0]), vec!["3F"]);
    }

    #[test]
    fn test_empty_seat_list() {
        assert!(group_into_rows(&[]).is_empty());
    }

    #[test]
    fn test_row_number_and_column_label() {
        assert_eq!(row_number("12C"), Some(12));
        assert_eq!(row_number("C"), None);
        assert_eq!(row_number("99999999999999999999999A"), None);
        assert_eq!(column_label("12C"), "C");
        assert_eq!(column_label("7AB"), "AB");
    }

    #[test]
    fn test_aisle_after_c() {
        assert!(has_aisle_after(&seat(1, "4C")));
        assert!(!has_aisle_after(&seat(2, "4D")));
    }

    #[test]
    fn test_display_precedence() {
        let mut s = seat(1, "1A");
        s.business_class = true;

        assert_eq!(SeatDisplay::resolve(&s, false, false), SeatDisplay::Business);
        assert_eq!(SeatDisplay::resolve(&s, false, true), SeatDisplay::Recommended);
        assert_eq!(SeatDisplay::resolve(&s, true, true), SeatDisplay::Selected);

        s.occupied = true;
        assert_eq!(SeatDisplay::resolve(&s, true, true), SeatDisplay::Occupied);

        let plain = seat(2, "1B");
        assert_eq!(SeatDisplay::resolve(&plain, false, false), SeatDisplay::Standard);
    }
}
