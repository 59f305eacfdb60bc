use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr};

pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let options = match extract_options(&input) {
        Ok(options) => options,
        Err(err) => return err.to_compile_error().into(),
    };
    let id_field = match extract_id_field(&input) {
        Ok(field) => field,
        Err(err) => return err.to_compile_error().into(),
    };

    let collection = options
        .collection
        .unwrap_or_else(|| format!("{}s", to_snake_case(&name.to_string())));
    let id_field_name = id_field.to_string();

    let duplicate_message = options.duplicate.map(|template| {
        quote! {
            fn duplicate_message(id: &str) -> String {
                #template.replace("{id}", id)
            }
        }
    });

    let expanded = quote! {
        impl campus_records::Record for #name {
            const COLLECTION: &'static str = #collection;
            const ID_FIELD: &'static str = #id_field_name;

            fn id(&self) -> &str {
                &self.#id_field
            }

            #duplicate_message
        }
    };

    TokenStream::from(expanded)
}

#[derive(Default)]
struct RecordOptions {
    collection: Option<String>,
    duplicate: Option<LitStr>,
}

fn extract_options(input: &DeriveInput) -> syn::Result<RecordOptions> {
    let mut options = RecordOptions::default();

    for attr in &input.attrs {
        if !attr.path().is_ident("record") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("collection") {
                let value: LitStr = meta.value()?.parse()?;
                options.collection = Some(value.value());
                Ok(())
            } else if meta.path.is_ident("duplicate") {
                options.duplicate = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("expected `collection` or `duplicate`"))
            }
        })?;
    }

    Ok(options)
}

fn extract_id_field(input: &DeriveInput) -> syn::Result<syn::Ident> {
    let Data::Struct(data_struct) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Record derive: only structs are supported",
        ));
    };
    let Fields::Named(fields) = &data_struct.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Record derive: struct must have named fields",
        ));
    };

    for field in &fields.named {
        for attr in &field.attrs {
            if !attr.path().is_ident("record") {
                continue;
            }
            let mut is_id = false;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("id") {
                    is_id = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `id`"))
                }
            })?;
            if is_id {
                if let Some(ident) = &field.ident {
                    return Ok(ident.clone());
                }
            }
        }
    }

    // Default: look for a field named "id"
    fields
        .named
        .iter()
        .filter_map(|field| field.ident.as_ref())
        .find(|ident| *ident == "id")
        .cloned()
        .ok_or_else(|| {
            syn::Error::new_spanned(
                &input.ident,
                "Record derive: no field marked with #[record(id)] and no field named `id`",
            )
        })
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}
