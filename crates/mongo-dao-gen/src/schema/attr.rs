use super::{Annotation, ErrorSet};

use syn::meta::ParseNestedMeta;

/// Annotations carried by a field's or a struct's attributes.
///
/// Attributes that are not understood are left alone. Malformed `column`,
/// `dao` or `serde` attributes are reported through the returned error set.
pub(crate) fn annotations(attrs: &[syn::Attribute]) -> (Vec<Annotation>, ErrorSet) {
    let mut out = vec![];
    let mut errs = ErrorSet::new();

    for attr in attrs {
        let result = if attr.path().is_ident("column") {
            parse_str_arg(attr).map(|value| out.push(Annotation::new(Annotation::COLUMN, value)))
        } else if attr.path().is_ident("dao") {
            parse_str_arg(attr).map(|value| out.push(Annotation::new(Annotation::DAO, value)))
        } else if attr.path().is_ident("serde") {
            parse_serde(attr, &mut out)
        } else {
            Ok(())
        };

        errs.extend(result);
    }

    (out, errs)
}

/// Doc comment lines, leading space kept off.
pub(crate) fn docs(attrs: &[syn::Attribute]) -> Vec<String> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            syn::Meta::NameValue(syn::MetaNameValue {
                value:
                    syn::Expr::Lit(syn::ExprLit {
                        lit: syn::Lit::Str(lit),
                        ..
                    }),
                ..
            }) => Some(lit.value()),
            _ => None,
        })
        .map(|line| line.strip_prefix(' ').map(String::from).unwrap_or(line))
        .collect()
}

/// True for `#[cfg(test)]`.
pub(crate) fn is_cfg_test(attrs: &[syn::Attribute]) -> bool {
    attrs.iter().any(|attr| {
        attr.path().is_ident("cfg")
            && attr
                .parse_args::<syn::Ident>()
                .is_ok_and(|ident| ident == "test")
    })
}

fn parse_str_arg(attr: &syn::Attribute) -> syn::Result<String> {
    let lit: syn::LitStr = attr.parse_args()?;
    Ok(lit.value())
}

fn parse_serde(attr: &syn::Attribute, out: &mut Vec<Annotation>) -> syn::Result<()> {
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("rename") {
            if let Some(value) = serialize_name(&meta)? {
                out.push(Annotation::new(Annotation::SERDE_RENAME, value));
            }
        } else if meta.path.is_ident("rename_all") {
            if let Some(value) = serialize_name(&meta)? {
                out.push(Annotation::new(Annotation::SERDE_RENAME_ALL, value));
            }
        } else if meta.path.is_ident("skip") || meta.path.is_ident("skip_serializing") {
            out.push(Annotation::new(Annotation::SERDE_SKIP, ""));
        } else {
            skip_value(&meta)?;
        }

        Ok(())
    })
}

/// `rename = "x"` or `rename(serialize = "x", deserialize = "y")`. Only the
/// serialized name reaches the database.
fn serialize_name(meta: &ParseNestedMeta) -> syn::Result<Option<String>> {
    if meta.input.peek(syn::Token![=]) {
        let lit: syn::LitStr = meta.value()?.parse()?;
        return Ok(Some(lit.value()));
    }

    let mut name = None;
    meta.parse_nested_meta(|nested| {
        if nested.path.is_ident("serialize") {
            let lit: syn::LitStr = nested.value()?.parse()?;
            name = Some(lit.value());
            Ok(())
        } else {
            skip_value(&nested)
        }
    })?;

    Ok(name)
}

fn skip_value(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(syn::Token![=]) {
        meta.value()?.parse::<syn::Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        meta.parse_nested_meta(|nested| skip_value(&nested))?;
    }

    Ok(())
}

/// Compile-time validation behind `#[derive(Dao)]`.
pub(crate) fn check_item(item: &syn::ItemStruct) -> syn::Result<()> {
    let mut errs = ErrorSet::new();

    if !item.generics.params.is_empty() {
        errs.push(syn::Error::new_spanned(
            &item.generics,
            "generic models are not supported",
        ));
    }

    let syn::Fields::Named(fields) = &item.fields else {
        return Err(syn::Error::new_spanned(
            &item.ident,
            "model fields must be named",
        ));
    };

    let (_, struct_errs) = annotations(&item.attrs);
    errs.extend(struct_errs.into_result());

    for attr in item.attrs.iter().filter(|attr| is_field_attr(attr)) {
        errs.push(syn::Error::new_spanned(
            attr,
            "#[column] and #[dao] apply to fields, not to the model",
        ));
    }

    for field in &fields.named {
        let (_, field_errs) = annotations(&field.attrs);
        errs.extend(field_errs.into_result());

        let mut columns = field.attrs.iter().filter(|attr| attr.path().is_ident("column"));
        if columns.next().is_some() {
            for duplicate in columns {
                errs.push(syn::Error::new_spanned(
                    duplicate,
                    "duplicate #[column] attribute",
                ));
            }
        }
    }

    errs.into_result()
}

fn is_field_attr(attr: &syn::Attribute) -> bool {
    attr.path().is_ident("column") || attr.path().is_ident("dao")
}
