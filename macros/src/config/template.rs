//! TOML template code generation.

use proc_macro2::TokenStream;
use quote::quote;

use super::attr::FieldInfo;

/// Generate statements that append each field's template lines to `out`.
pub fn generate(fields: &[&FieldInfo]) -> TokenStream {
    let parts = fields.iter().map(|f| field_template(f));
    quote! { #(#parts)* }
}

fn field_template(info: &FieldInfo) -> TokenStream {
    let field_name = &info.name;
    let key = &info.toml_name;

    let doc_code = match &info.doc {
        Some(doc) if info.inline_doc.is_none() || info.sub => {
            let text: String = doc.lines().map(|l| format!("# {}\n", l.trim())).collect();
            quote! { out.push_str(#text); }
        }
        _ => quote! {},
    };
    let suffix = match &info.inline_doc {
        Some(comment) => format!("  # {comment}\n"),
        None => "\n".to_string(),
    };

    if info.sub {
        let ty = &info.ty;
        return quote! {
            out.push('\n');
            #doc_code
            out.push_str(&<#ty>::template_with_header());
        };
    }

    let ty_name = info.type_name();

    // Optional fields without a default stay commented out.
    if ty_name.starts_with("Option<") && info.default.is_none() {
        let line = format!("# {key} = \"\"{suffix}");
        return quote! {
            #doc_code
            out.push_str(#line);
        };
    }

    if let Some(default) = &info.default {
        let line = format!("{key} = {}{suffix}", quote_default(default, &ty_name));
        return quote! {
            #doc_code
            out.push_str(#line);
        };
    }

    quote! {
        #doc_code
        out.push_str(#key);
        out.push_str(" = ");
        out.push_str(
            &toml::Value::try_from(default.#field_name.clone())
                .map(|v| v.to_string())
                .unwrap_or_default(),
        );
        out.push_str(#suffix);
    }
}

/// Quote string-like defaults; numbers and bools are emitted as-is.
fn quote_default(value: &str, ty: &str) -> String {
    const BARE: &[&str] = &[
        "bool", "u8", "u16", "u32", "u64", "usize", "i8", "i16", "i32", "i64", "isize", "f32",
        "f64",
    ];
    if BARE.contains(&ty) || ty.starts_with("Vec<") {
        value.to_string()
    } else {
        format!("\"{value}\"")
    }
}
