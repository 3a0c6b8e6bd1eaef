use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::LitInt;

pub fn unary_types_macro(input: TokenStream) -> syn::Result<TokenStream> {
    let lit: LitInt = syn::parse2(input)?;
    let max: usize = lit.base10_parse()?;

    let mut out = quote! {
        pub type U0 = Z;
    };
    for n in 1..=max {
        let cur = format_ident!("U{}", n);
        let prev = format_ident!("U{}", n - 1);
        out.extend(quote! {
            pub type #cur = S<#prev>;
        });
    }

    Ok(out)
}
