use tracing::instrument;

use crate::parse::token::TokenValue;
use crate::parse::Cursor;

/// Returns whether the stream holds at least one identifier and every
/// identifier carries the same name.
///
/// Walks the cursor to exhaustion, or to the first mismatching name.
#[instrument(level = "trace", ret, skip(cur), fields(pos = cur.pos()))]
pub fn accept_single_variable(cur: &mut Cursor<'_>) -> bool {
    let mut first_name: Option<&[u8]> = None;

    for token in cur.by_ref() {
        if let TokenValue::Ident(name) = token.value {
            match first_name {
                None => first_name = Some(name),
                Some(seen) if seen == name => {}
                Some(_) => return false,
            }
        }
    }

    first_name.is_some()
}
