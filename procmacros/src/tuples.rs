use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::LitInt;

pub fn impl_tuples_macro(input: TokenStream) -> syn::Result<TokenStream> {
    let lit: LitInt = syn::parse2(input)?;
    let max: usize = lit.base10_parse()?;
    if max == 0 {
        return Err(syn::Error::new(
            Span::call_site(),
            "arity bound must be at least 1 (the 0-tuple impl is hand-written)",
        ));
    }

    let mut out = TokenStream::new();
    for arity in 1..=max {
        let params: Vec<_> = (0..arity).map(|i| format_ident!("T{}", i)).collect();

        // Fold the parameter list into its nested Cons form, tail first.
        let mut seq = quote!(Nil);
        for param in params.iter().rev() {
            seq = quote!(Cons<#param, #seq>);
        }

        out.extend(quote! {
            impl<#(#params,)*> Tuple for (#(#params,)*) {
                type AsSeq = #seq;
            }
        });
    }

    Ok(out)
}
