use tracing::instrument;

use crate::parse::Cursor;

/// Accepts one monomial.
///
/// A monomial is a number, an identifier or a number followed by an
/// identifier, with an optional `^ <number>` suffix after the identifier.
/// The `^` is consumed even when no number follows it; the monomial still
/// succeeds without its exponent. Only the atomic acceptors guarantee an
/// unmoved cursor on failure.
#[instrument(level = "trace", ret, skip(cur), fields(pos = cur.pos()))]
pub fn accept_monomial(cur: &mut Cursor<'_>) -> bool {
    if cur.accept_number().is_some() {
        if cur.accept_ident().is_some() {
            accept_exponent(cur);
        }

        true
    } else if cur.accept_ident().is_some() {
        accept_exponent(cur);

        true
    } else {
        false
    }
}

fn accept_exponent(cur: &mut Cursor<'_>) {
    let _ = cur.accept_symbol(b'^') && cur.accept_number().is_some();
}

/// Accepts a signed sum of monomials.
///
/// The leading `-` is consumed whether or not a monomial follows it, and a
/// `+` or `-` with no monomial after it fails the whole expression with the
/// operator left consumed: composite recognizers never rewind.
#[instrument(level = "trace", ret, skip(cur), fields(pos = cur.pos()))]
pub fn accept_expression(cur: &mut Cursor<'_>) -> bool {
    cur.accept_symbol(b'-');

    if !accept_monomial(cur) {
        return false;
    }

    while cur.accept_symbol(b'+') || cur.accept_symbol(b'-') {
        if !accept_monomial(cur) {
            return false;
        }
    }

    true
}
