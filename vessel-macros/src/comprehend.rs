use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Expr, Result, Token};
use crate::clause::Clause;
use crate::util;

/// A parsed `comprehend!` invocation: `SEED => BODY, CLAUSE, ...`
struct Comprehension {
    seed: Expr,
    body: Expr,
    clauses: Vec<Clause>,
}

impl Parse for Comprehension {
    fn parse(input: ParseStream) -> Result<Self> {
        let seed = input.parse()?;
        input.parse::<Token![=>]>()?;
        let body = input.parse()?;

        let mut clauses = Vec::new();
        while !input.is_empty() {
            input.parse::<Token![,]>()?;
            // Allow a trailing comma
            if input.is_empty() {
                break;
            }
            clauses.push(input.parse()?);
        }

        Ok(Self {
            seed,
            body,
            clauses,
        })
    }
}

impl Comprehension {
    fn expand(&self) -> TokenStream2 {
        let builder = util::builder_ident();
        let label = util::exit_label();
        let builder_trait = util::get_builder_trait();
        let buildable_trait = util::get_buildable_trait();
        let seed = &self.seed;
        let body = &self.body;

        let mut inner = quote! {
            #builder = #builder_trait::push(#builder, #body);
            if #builder_trait::is_settled(&#builder) {
                break #label;
            }
        };

        // The first clause is the outermost loop.
        for clause in self.clauses.iter().rev() {
            inner = clause.wrap(inner);
        }

        quote! {{
            let mut #builder = #buildable_trait::into_builder(#seed);
            #label: {
                if #builder_trait::is_settled(&#builder) {
                    break #label;
                }
                #inner
            }
            #builder_trait::finish(#builder)
        }}
    }
}

pub fn comprehend(input: TokenStream2) -> Result<TokenStream2> {
    let comprehension = syn::parse2::<Comprehension>(input)?;
    Ok(comprehension.expand())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_of(input: TokenStream2) -> String {
        comprehend(input).unwrap_err().to_string()
    }

    #[test]
    fn missing_arrow_is_rejected() {
        assert!(error_of(quote!(Outcome::new() x, for x in [1])).contains("=>"));
    }

    #[test]
    fn unknown_clause_is_rejected() {
        let error = error_of(quote!(Outcome::new() => x, while x));
        assert!(error.contains("`for`"), "{}", error);
        assert!(error.contains("`let`"), "{}", error);
    }

    #[test]
    fn for_without_in_is_rejected() {
        assert!(error_of(quote!(Outcome::new() => x, for x [1, 2])).contains("in"));
    }

    #[test]
    fn let_without_initializer_is_rejected() {
        assert!(error_of(quote!(Optional::absent() => y, for x in [1], let y x)).contains("="));
    }

    #[test]
    fn trailing_question_mark_marks_short_circuiting_sources() {
        let comprehension: Comprehension =
            syn::parse2(quote!(Outcome::new() => x + y, for x in src?, for y in [1, 2],)).unwrap();

        let flags = comprehension
            .clauses
            .iter()
            .map(|clause| match clause {
                Clause::For { short_circuit, .. } => *short_circuit,
                _ => panic!("expected only `for` clauses"),
            })
            .collect::<Vec<_>>();
        assert_eq!(flags, vec![true, false]);

        // The `?` is consumed, not left on the source.
        match &comprehension.clauses[0] {
            Clause::For { source, .. } => assert!(matches!(source, Expr::Path(_))),
            _ => unreachable!(),
        }
    }

    #[test]
    fn valid_input_expands() {
        let expanded = comprehend(quote!(Optional::absent() => x, for x in [1], if x > 0))
            .unwrap()
            .to_string();
        assert!(expanded.contains("into_builder"));
        assert!(expanded.contains("finish"));
    }
}
