//! `#[config(...)]` attribute parsing.

use syn::{Attribute, Expr, Lit, Meta, Type};

/// One named field of a `#[derive(Config)]` struct.
pub struct FieldInfo {
    pub name: syn::Ident,
    pub toml_name: String,
    pub doc: Option<String>,
    pub inline_doc: Option<String>,
    pub default: Option<String>,
    pub sub: bool,
    pub ty: Type,
}

impl FieldInfo {
    pub fn from_field(field: &syn::Field) -> Option<Self> {
        let ident = field.ident.as_ref()?;
        let attrs = &field.attrs;

        Some(Self {
            name: ident.clone(),
            toml_name: ident.to_string(),
            doc: doc_comment(attrs),
            inline_doc: string_attr(attrs, "inline_doc"),
            default: string_attr(attrs, "default"),
            sub: flag_attr(attrs, "sub"),
            ty: field.ty.clone(),
        })
    }

    /// Type rendered without whitespace, e.g. `Option<String>`.
    pub fn type_name(&self) -> String {
        let ty = &self.ty;
        quote::quote!(#ty).to_string().replace(' ', "")
    }
}

/// Get `section` from `#[config(section = "...")]`.
pub fn section(attrs: &[Attribute]) -> Option<String> {
    string_attr(attrs, "section")
}

/// Get string value from `#[config(key = "value")]`.
fn string_attr(attrs: &[Attribute], key: &str) -> Option<String> {
    let mut value = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("config")) {
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                let lit: syn::LitStr = meta.value()?.parse()?;
                value = Some(lit.value());
            } else if meta.input.peek(syn::Token![=]) {
                let _: Lit = meta.value()?.parse()?;
            }
            Ok(())
        });
        if value.is_some() {
            break;
        }
    }
    value
}

/// Check for a bare flag like `#[config(sub)]`.
fn flag_attr(attrs: &[Attribute], key: &str) -> bool {
    let mut found = false;
    for attr in attrs.iter().filter(|a| a.path().is_ident("config")) {
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                found = true;
            }
            if meta.input.peek(syn::Token![=]) {
                let _: Lit = meta.value()?.parse()?;
            }
            Ok(())
        });
    }
    found
}

/// Join `///` doc lines into one trimmed string.
pub fn doc_comment(attrs: &[Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(expr) => match &expr.lit {
                    Lit::Str(s) => Some(s.value().trim().to_string()),
                    _ => None,
                },
                _ => None,
            },
            _ => None,
        })
        .collect();

    let joined = lines.join("\n").trim().to_string();
    (!joined.is_empty()).then_some(joined)
}
