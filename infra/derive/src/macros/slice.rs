use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ItemStruct;

pub fn expand(input: ItemStruct) -> TokenStream {
    let handle = &input.ident;
    let vis = &input.vis;
    let fields = &input.fields;
    let attrs = &input.attrs;
    let inner = format_ident!("{handle}Inner");

    // Unit-like and tuple structs keep their trailing semicolon.
    let semi = match fields {
        syn::Fields::Named(_) => quote! {},
        _ => quote! { ; },
    };

    quote! {
        #(#attrs)*
        #[derive(Debug, Clone)]
        #vis struct #inner #fields #semi

        #[derive(Debug, Clone)]
        #vis struct #handle {
            inner: std::sync::Arc<#inner>,
        }

        impl #handle {
            pub fn new(inner: #inner) -> Self {
                Self { inner: std::sync::Arc::new(inner) }
            }
        }

        impl std::ops::Deref for #handle {
            type Target = #inner;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        impl ::cadastro_kernel::domain::registry::FeatureSlice for #handle {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }
    }
}
