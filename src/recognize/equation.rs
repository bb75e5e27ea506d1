use tracing::instrument;

use crate::parse::token::TokenValue;
use crate::parse::Cursor;

use super::expr::accept_expression;

/// Returns whether the stream contains exactly one `=` symbol.
///
/// Walks the cursor to exhaustion, so callers hand it a dedicated one.
#[instrument(level = "trace", ret, skip(cur), fields(pos = cur.pos()))]
pub fn has_single_equals(cur: &mut Cursor<'_>) -> bool {
    let equals = cur
        .by_ref()
        .filter(|token| matches!(token.value, TokenValue::Symbol(b'=')))
        .count();

    equals == 1
}

/// Accepts `<expression> '=' <expression>` covering the whole stream.
///
/// The single-equality precheck runs on its own clone of the cursor; the
/// recognition proper then runs on the working cursor and must land exactly
/// on the end of the stream.
#[instrument(level = "trace", ret, skip(cur), fields(pos = cur.pos()))]
pub fn accept_equation(cur: &mut Cursor<'_>) -> bool {
    let mut counting = cur.clone();

    if !has_single_equals(&mut counting) {
        return false;
    }

    if !accept_expression(cur) {
        return false;
    }

    if !cur.accept_symbol(b'=') {
        return false;
    }

    if !accept_expression(cur) {
        return false;
    }

    cur.at_end()
}
