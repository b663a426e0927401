//! Price bound, filtering and formatting helpers

use crate::types::{Flight, Seat};

/// Lowest value the max-price control accepts
pub const PRICE_FLOOR: u32 = 0;

/// Highest value the max-price control accepts
pub const PRICE_CEILING: u32 = 350;

/// Initial max-price bound (no narrowing)
pub const DEFAULT_MAX_PRICE: u32 = PRICE_CEILING;

/// Clamp a requested bound into `[PRICE_FLOOR, PRICE_CEILING]`
pub fn clamp_bound(bound: i64) -> u32 {
    bound.clamp(PRICE_FLOOR as i64, PRICE_CEILING as i64) as u32
}

/// Keep the flights priced at or below `bound`, preserving order
pub fn filter_by_max_price(flights: &[Flight], bound: u32) -> Vec<Flight> {
    flights
        .iter()
        .filter(|flight| flight.price <= f64::from(bound))
        .cloned()
        .collect()
}

/// Sum of the given seats' prices
pub fn total_price<'a>(seats: impl IntoIterator<Item = &'a Seat>) -> f64 {
    seats.into_iter().map(|seat| seat.price).sum()
}

/// Two-decimal rendering used for totals, e.g. `125.00`
///
/// Cent ties round away from zero (`12.125` -> `12.13`).
pub fn format_price(amount: f64) -> String {
    format!("{:.2}", (amount * 100.0).round() / 100.0)
}

/// Compact rendering used for list prices: `100` or `129.5`
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        let text = format!("{:.2}", amount);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FlightId, SeatId};
    use chrono::NaiveDate;

    fn flight(id: i64, price: f64) -> Flight {
        Flight {
            id: FlightId(id),
            origin: "Tallinn".into(),
            destination: "London".into(),
            departure_time: NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            price,
        }
    }

    fn seat(id: i64, price: f64) -> Seat {
        Seat {
            id: SeatId(id),
            seat_number: format!("{id}A"),
            occupied: false,
            business_class: false,
            price,
        }
    }

    #[test]
    fn test_filter_keeps_flights_at_or_below_bound_in_order() {
        let flights = vec![flight(1, 300.0), flight(2, 400.0), flight(3, 350.0), flight(4, 10.0)];
        let kept: Vec<i64> = filter_by_max_price(&flights, 350)
            .iter()
            .map(|f| f.id.0)
            .collect();
        assert_eq!(kept, vec![1, 3, 4]);
    }

    #[test]
    fn test_filter_with_every_bound_matches_predicate() {
        let flights: Vec<Flight> = [0.0, 49.99, 50.0, 100.0, 349.5, 350.0, 351.0]
            .iter()
            .enumerate()
            .map(|(i, p)| flight(i as i64, *p))
            .collect();
        for bound in [0, 1, 50, 100, 349, 350] {
            let kept = filter_by_max_price(&flights, bound);
            let expected: Vec<&Flight> = flights
                .iter()
                .filter(|f| f.price <= f64::from(bound))
                .collect();
            assert_eq!(kept.len(), expected.len(), "bound {bound}");
            assert!(kept.iter().zip(expected).all(|(a, b)| a.id == b.id));
        }
    }

    #[test]
    fn test_prices_100_and_400() {
        let flights = vec![flight(1, 100.0), flight(2, 400.0)];
        assert_eq!(filter_by_max_price(&flights, 350).len(), 1);
        assert!(filter_by_max_price(&flights, 50).is_empty());
    }

    #[test]
    fn test_clamp_bound() {
        assert_eq!(clamp_bound(-20), 0);
        assert_eq!(clamp_bound(120), 120);
        assert_eq!(clamp_bound(9_000), PRICE_CEILING);
    }

    #[test]
    fn test_total_formats_to_two_decimals() {
        let seats = [seat(1, 50.0), seat(2, 75.0)];
        assert_eq!(format_price(total_price(&seats)), "125.00");
        assert_eq!(format_price(total_price(&Vec::<Seat>::new())), "0.00");
        assert_eq!(format_price(total_price(&[seat(3, 19.99), seat(4, 0.01)])), "20.00");
        assert_eq!(format_price(total_price(&[seat(5, 12.0), seat(6, 0.125)])), "12.13");
        assert_eq!(format_price(12.125), "12.13");
        assert_eq!(format_price(0.375), "0.38");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(100.0), "100");
        assert_eq!(format_amount(129.5), "129.5");
        assert_eq!(format_amount(19.99), "19.99");
    }
}
