//! Arity-indexed code generation for `typeseq-core`.
//!
//! Both macros take a single integer literal and expand to one item per
//! arity/index. They are invoked from fixed spots inside `typeseq-core` and
//! assume the names in scope there (`Tuple`, `Cons`, `Nil`, `S`, `Z`); they
//! are not a public interface.

extern crate proc_macro;

mod tuples;
mod unary;

use proc_macro::TokenStream;

/// Implements `Tuple` for every tuple arity from 1 up to the given bound.
///
/// `impl_tuples!(3)` expands to impls for `(T0,)`, `(T0, T1)` and
/// `(T0, T1, T2)`, each mapping the tuple to its nested `Cons` form.
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let input2 = proc_macro2::TokenStream::from(input);

    match tuples::impl_tuples_macro(input2) {
        Ok(s) => TokenStream::from(s),
        Err(e) => TokenStream::from(e.to_compile_error()),
    }
}

/// Defines unary index aliases `U0..=UN`.
///
/// `unary_types!(2)` expands to `pub type U0 = Z;`, `pub type U1 = S<U0>;`
/// and `pub type U2 = S<U1>;`.
#[proc_macro]
pub fn unary_types(input: TokenStream) -> TokenStream {
    let input2 = proc_macro2::TokenStream::from(input);

    match unary::unary_types_macro(input2) {
        Ok(s) => TokenStream::from(s),
        Err(e) => TokenStream::from(e.to_compile_error()),
    }
}
