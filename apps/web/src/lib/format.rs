//! Small display formatting helpers shared across routes.

/// Masks a card number down to its last four digits, e.g.
/// `**** **** **** 5678`. Short or empty values are masked entirely.
pub fn mask_card_number(card_number: &str) -> String {
    let digits: String = card_number.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < 4 {
        return "****".to_string();
    }
    format!("**** **** **** {}", &digits[digits.len() - 4..])
}

/// Formats a monetary amount with two decimals and its currency code.
pub fn format_amount(amount: f64, currency: &str) -> String {
    format!("{amount:.2} {currency}")
}

/// Formats a countdown in seconds as `MM:SS` for the OTP timer.
pub fn format_countdown(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_all_but_the_last_four_digits() {
        assert_eq!(
            mask_card_number("5523014412345678"),
            "**** **** **** 5678"
        );
        assert_eq!(mask_card_number("55-2301 4412 3456 78"), "**** **** **** 5678");
        assert_eq!(mask_card_number("12"), "****");
        assert_eq!(mask_card_number(""), "****");
    }

    #[test]
    fn formats_amounts_with_two_decimals() {
        assert_eq!(format_amount(1250.5, "USD"), "1250.50 USD");
        assert_eq!(format_amount(0.0, "KES"), "0.00 KES");
    }

    #[test]
    fn formats_countdowns_as_minutes_and_seconds() {
        assert_eq!(format_countdown(0), "00:00");
        assert_eq!(format_countdown(61), "01:01");
        assert_eq!(format_countdown(15 * 60), "15:00");
    }
}
