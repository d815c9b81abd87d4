use proc_macro::TokenStream;

use proc_macro2::TokenStream as TokenStream2;

mod clause;
mod comprehend;
mod util;

/// Runs a comprehension over any number of sources and materialises the emitted values into a
/// seed container.
///
/// Usage:
///
/// ```text
/// comprehend!(SEED => BODY, CLAUSE, CLAUSE, ...)
/// ```
///
/// `SEED` is the container the comprehension starts from, usually `Optional::absent()` or
/// `Outcome::new()`. `BODY` is evaluated once per combination of the clauses and pushed into the
/// seed's builder. The accepted clauses are:
///
/// - `for PAT in EXPR`: iterates `EXPR` as a plain `IntoIterator`.
/// - `for PAT in EXPR?`: iterates `EXPR` as a short-circuiting source. When it halts, the halt
/// is handed to the builder, and if the builder is settled by it the whole comprehension stops.
/// - `if COND`: skips the remaining clauses when `COND` is false.
/// - `let PAT = EXPR`: binds an intermediate value.
///
/// Clauses are nested left to right, the first one being the outermost loop.
#[proc_macro]
pub fn comprehend(input: TokenStream) -> TokenStream {
    extract(comprehend::comprehend(input.into()))
}

/// Extracts the given result, throwing a compile error if an error is given.
fn extract(res: syn::Result<TokenStream2>) -> TokenStream {
    match res {
        Ok(s) => s,
        Err(why) => why.to_compile_error(),
    }
    .into()
}
