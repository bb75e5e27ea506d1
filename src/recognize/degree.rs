use tracing::instrument;

use crate::parse::token::TokenValue;
use crate::parse::Cursor;

/// Checks that every `^` in the stream is immediately followed by a number.
///
/// Nothing else about the exponent is checked. In particular its sign is not:
/// numbers lex from bare digit runs, so a negative exponent cannot reach this
/// pass as a single token anyway.
#[instrument(level = "trace", ret, skip(cur), fields(pos = cur.pos()))]
pub fn validate_exponents(cur: &mut Cursor<'_>) -> bool {
    while let Some(token) = cur.next() {
        if matches!(token.value, TokenValue::Symbol(b'^'))
            && !matches!(cur.next().map(|t| t.value), Some(TokenValue::Number(_)))
        {
            return false;
        }
    }

    true
}

/// Computes the highest exponent over the stream, defaulting to 1.
///
/// Expects `validate_exponents` to have passed; a `^` with no number after it
/// contributes nothing here. Only the token right after an identifier is
/// inspected for `^`, and the first exponent found is adopted as the baseline
/// even when it lowers the default, so `x^0 = 1` has degree 0. Later
/// exponents only ever raise the maximum.
#[instrument(level = "trace", ret, skip(cur), fields(pos = cur.pos()))]
pub fn compute_degree(cur: &mut Cursor<'_>) -> i32 {
    let mut highest = 1;
    let mut have_baseline = false;

    while !cur.at_end() {
        if cur.accept_ident().is_some() && !cur.at_end() {
            if cur.accept_symbol(b'^') {
                if let Some(TokenValue::Number(exponent)) = cur.peek().map(|t| t.value) {
                    if !have_baseline || exponent > highest {
                        highest = exponent;
                    }
                }
            }

            have_baseline = true;
        }

        cur.next();
    }

    highest
}
