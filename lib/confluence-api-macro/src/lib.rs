//! Procedural macros for the confluence-api REST client.
//!
//! - `#[derive(Query)]` - Derive `ToQueryPairs` for a parameter struct

mod query_derive;

use proc_macro::TokenStream;

/// Derive the `ToQueryPairs` trait for a struct.
///
/// Every field becomes one query pair (or several, for unwrapped lists), in
/// declaration order. Empty values are omitted: an empty `String`, a zero
/// integer, `false`, an empty `Vec`, and `None`.
///
/// # Struct Attributes
///
/// - `#[query(rename_all = "camelCase")]` - Rename all fields (`lowercase`,
///   `camelCase` or `snake_case`)
///
/// # Field Attributes
///
/// - `#[query(skip)]` - Leave the field out of the query
/// - `#[query(rename = "name")]` - Use a different key (overrides `rename_all`)
/// - `#[query(respect)]` - Emit empty strings, zero and `false` instead of omitting them
/// - `#[query(reverse)]` - Boolean flag meaning "off": `true` is sent as `key=false`
/// - `#[query(unwrap)]` - Repeat the key for each list element instead of joining with `,`
/// - `#[query(timedate)]` - Send `Option<DateTime<Utc>>` as `YYYY-MM-DDTHH:MM:SSZ`
///   instead of `YYYY-MM-DD`
///
/// A field takes at most one of `respect`, `reverse`, `unwrap` and `timedate`,
/// and only on a type it applies to.
///
/// # Example
///
/// ```ignore
/// use confluence_api::Query;
///
/// #[derive(Query)]
/// #[query(rename_all = "camelCase")]
/// struct CalendarEventParameters {
///     sub_calendar_id: String,
///     user_time_zone_id: String,
///     #[query(timedate)]
///     start: Option<DateTime<Utc>>,
///     #[query(timedate)]
///     end: Option<DateTime<Utc>>,
/// }
/// ```
#[proc_macro_derive(Query, attributes(query))]
pub fn derive_query(input: TokenStream) -> TokenStream {
    query_derive::expand_query_derive(input.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
