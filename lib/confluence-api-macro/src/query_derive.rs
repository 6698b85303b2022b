//! Query derive macro implementation.
//!
//! Each field is classified by its declared type, then encoded through the
//! matching `QueryPairs::push_*` method. Options that do not apply to the
//! field type are compile errors rather than silently ignored.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Fields, GenericArgument, PathArguments, Type, parse2};

/// Struct-level options parsed from `#[query(...)]` attributes.
#[derive(Debug, Clone, Default)]
struct QueryStructOptions {
    /// Rename all fields using the given case convention.
    rename_all: Option<RenameRule>,
}

/// Case conversion rules for `rename_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RenameRule {
    /// `lowercase`
    Lower,
    /// `camelCase`
    Camel,
    /// `snake_case`, the Rust field name as written
    Snake,
}

impl RenameRule {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "lowercase" => Some(Self::Lower),
            "camelCase" => Some(Self::Camel),
            "snake_case" => Some(Self::Snake),
            _ => None,
        }
    }

    fn apply(self, name: &str) -> String {
        match self {
            Self::Lower => name.replace('_', ""),
            Self::Camel => to_camel_case(name),
            Self::Snake => name.to_owned(),
        }
    }
}

/// Convert a `snake_case` identifier to `camelCase`.
fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = false;
    for c in s.chars() {
        if c == '_' {
            capitalize_next = !result.is_empty();
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Behavioural option of a field. At most one per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive {
    /// Emit the zero value instead of omitting it.
    Respect,
    /// Invert a boolean flag.
    Reverse,
    /// Repeat the key for every list element.
    Unwrap,
    /// Format a date-time with its time of day.
    TimeDate,
}

impl Directive {
    const fn name(self) -> &'static str {
        match self {
            Self::Respect => "respect",
            Self::Reverse => "reverse",
            Self::Unwrap => "unwrap",
            Self::TimeDate => "timedate",
        }
    }
}

/// Field options parsed from `#[query(...)]` attributes.
#[derive(Debug, Clone, Default)]
struct QueryFieldOptions {
    /// Leave the field out of the query entirely.
    skip: bool,
    /// Explicit key, overrides `rename_all`.
    rename: Option<String>,
    directive: Option<Directive>,
}

/// What the encoder does with a field, derived from its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    /// `String`
    Text,
    /// Any primitive integer.
    Number,
    /// `bool`
    Flag,
    /// `Vec<String>` or any `Vec<impl AsRef<str>>`.
    List,
    /// `Option<DateTime<Utc>>`
    DateTime,
    /// `Option<NaiveDate>`
    Date,
    /// Any other `Option<impl Display>`.
    Optional,
}

impl FieldKind {
    const fn accepts(self, directive: Directive) -> bool {
        matches!(
            (self, directive),
            (Self::Text | Self::Number | Self::Flag, Directive::Respect)
                | (Self::Flag, Directive::Reverse)
                | (Self::List, Directive::Unwrap)
                | (Self::DateTime, Directive::TimeDate)
        )
    }
}

const INTEGER_TYPES: &[&str] = &[
    "u8", "u16", "u32", "u64", "usize", "i8", "i16", "i32", "i64", "isize",
];

/// Expand the `#[derive(Query)]` macro.
pub fn expand_query_derive(input: TokenStream) -> syn::Result<TokenStream> {
    let input: DeriveInput = parse2(input)?;
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let struct_options = parse_query_struct_options(&input.attrs)?;

    let fields = match &input.data {
        syn::Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Query derive only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Query derive only supports structs",
            ));
        }
    };

    let mut field_handlers = Vec::new();

    for field in fields {
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let options = parse_query_field_options(&field.attrs)?;
        if options.skip {
            continue;
        }

        let kind = classify(&field.ty).ok_or_else(|| {
            syn::Error::new_spanned(
                &field.ty,
                "unsupported query field type; expected String, an integer, bool, \
                 Vec<String>, Option<DateTime<Utc>>, Option<NaiveDate> or Option<T: Display>",
            )
        })?;

        if let Some(directive) = options.directive
            && !kind.accepts(directive)
        {
            return Err(syn::Error::new_spanned(
                field_name,
                format!(
                    "`{}` cannot be applied to a field of this type",
                    directive.name()
                ),
            ));
        }

        let unraw = field_name.to_string();
        let unraw = unraw.trim_start_matches("r#");
        let key = match (&options.rename, struct_options.rename_all) {
            (Some(rename), _) => rename.clone(),
            (None, Some(rule)) => rule.apply(unraw),
            (None, None) => unraw.to_owned(),
        };

        field_handlers.push(generate_field_handler(
            field_name,
            kind,
            &key,
            options.directive,
        ));
    }

    Ok(quote! {
        impl #impl_generics ::confluence_api::ToQueryPairs for #name #ty_generics #where_clause {
            fn to_query_pairs(&self) -> ::confluence_api::QueryPairs {
                let mut pairs = ::confluence_api::QueryPairs::new();
                #(#field_handlers)*
                pairs
            }
        }
    })
}

/// Parse struct-level options from `#[query(...)]` attributes.
fn parse_query_struct_options(attrs: &[syn::Attribute]) -> syn::Result<QueryStructOptions> {
    let mut options = QueryStructOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("query") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                let value: syn::LitStr = meta.value()?.parse()?;
                let rule = RenameRule::parse(&value.value()).ok_or_else(|| {
                    syn::Error::new_spanned(
                        &value,
                        format!(
                            "unknown rename_all value: \"{}\". Expected one of: \
                             lowercase, camelCase, snake_case",
                            value.value()
                        ),
                    )
                })?;
                options.rename_all = Some(rule);
                Ok(())
            } else {
                Err(meta.error("unknown struct-level query option"))
            }
        })?;
    }

    Ok(options)
}

/// Parse field options from `#[query(...)]` attributes.
fn parse_query_field_options(attrs: &[syn::Attribute]) -> syn::Result<QueryFieldOptions> {
    let mut options = QueryFieldOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("query") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            let directive = if meta.path.is_ident("skip") {
                options.skip = true;
                return Ok(());
            } else if meta.path.is_ident("rename") {
                let value: syn::LitStr = meta.value()?.parse()?;
                options.rename = Some(value.value());
                return Ok(());
            } else if meta.path.is_ident("respect") {
                Directive::Respect
            } else if meta.path.is_ident("reverse") {
                Directive::Reverse
            } else if meta.path.is_ident("unwrap") {
                Directive::Unwrap
            } else if meta.path.is_ident("timedate") {
                Directive::TimeDate
            } else {
                return Err(meta.error(
                    "unknown query option; expected skip, rename, respect, reverse, unwrap or timedate",
                ));
            };

            if let Some(previous) = options.directive {
                return Err(meta.error(format!(
                    "`{}` conflicts with `{}`: a field takes at most one of respect, reverse, unwrap, timedate",
                    directive.name(),
                    previous.name()
                )));
            }
            options.directive = Some(directive);
            Ok(())
        })?;
    }

    Ok(options)
}

/// Generate code for handling a single field.
fn generate_field_handler(
    field_name: &syn::Ident,
    kind: FieldKind,
    key: &str,
    directive: Option<Directive>,
) -> TokenStream {
    let respect = directive == Some(Directive::Respect);

    match kind {
        FieldKind::Text => quote! {
            pairs.push_str(#key, &self.#field_name, #respect);
        },
        FieldKind::Number => quote! {
            pairs.push_number(#key, self.#field_name, #respect);
        },
        FieldKind::Flag => {
            let format = match directive {
                Some(Directive::Respect) => quote!(Respect),
                Some(Directive::Reverse) => quote!(Reverse),
                _ => quote!(Plain),
            };
            quote! {
                pairs.push_bool(#key, self.#field_name, ::confluence_api::BoolFormat::#format);
            }
        }
        FieldKind::List => {
            let format = if directive == Some(Directive::Unwrap) {
                quote!(Unwrapped)
            } else {
                quote!(Joined)
            };
            quote! {
                pairs.push_list(#key, self.#field_name.as_slice(), ::confluence_api::ListFormat::#format);
            }
        }
        FieldKind::DateTime => {
            let format = if directive == Some(Directive::TimeDate) {
                quote!(DateTime)
            } else {
                quote!(Date)
            };
            quote! {
                pairs.push_datetime(#key, self.#field_name.as_ref(), ::confluence_api::DateFormat::#format);
            }
        }
        FieldKind::Date => quote! {
            pairs.push_date(#key, self.#field_name.as_ref());
        },
        FieldKind::Optional => quote! {
            pairs.push_display(#key, self.#field_name.as_ref());
        },
    }
}

/// Last path segment of a type, e.g. `Vec<String>` for `std::vec::Vec<String>`.
fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => type_path.path.segments.last(),
        _ => None,
    }
}

/// First generic type argument of a path segment.
fn first_type_argument(segment: &syn::PathSegment) -> Option<&Type> {
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    })
}

/// Classify a field type.
fn classify(ty: &Type) -> Option<FieldKind> {
    let segment = last_segment(ty)?;
    let ident = segment.ident.to_string();

    match ident.as_str() {
        "String" => Some(FieldKind::Text),
        "bool" => Some(FieldKind::Flag),
        "Vec" => Some(FieldKind::List),
        "Option" => {
            let inner = first_type_argument(segment).and_then(last_segment);
            match inner.map(|s| s.ident.to_string()).as_deref() {
                Some("DateTime") => Some(FieldKind::DateTime),
                Some("NaiveDate") => Some(FieldKind::Date),
                _ => Some(FieldKind::Optional),
            }
        }
        other if INTEGER_TYPES.contains(&other) => Some(FieldKind::Number),
        _ => None,
    }
}
