use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Expr, Pat, Result, Token};
use crate::util;

/// A single clause of a comprehension.
pub enum Clause {
    /// `for PAT in EXPR` or, when `short_circuit` is set, `for PAT in EXPR?`.
    For {
        pat: Pat,
        source: Expr,
        short_circuit: bool,
    },
    /// `if COND`
    If(Expr),
    /// `let PAT = EXPR`
    Let {
        pat: Pat,
        expr: Expr,
    },
}

impl Parse for Clause {
    fn parse(input: ParseStream) -> Result<Self> {
        let lookahead = input.lookahead1();

        if lookahead.peek(Token![for]) {
            input.parse::<Token![for]>()?;
            let pat = Pat::parse_multi_with_leading_vert(input)?;
            input.parse::<Token![in]>()?;

            // A trailing `?` marks the source as short-circuiting rather than being an actual
            // try expression.
            Ok(match Expr::parse_without_eager_brace(input)? {
                Expr::Try(source) => Self::For {
                    pat,
                    source: *source.expr,
                    short_circuit: true,
                },
                source => Self::For {
                    pat,
                    source,
                    short_circuit: false,
                },
            })
        } else if lookahead.peek(Token![if]) {
            input.parse::<Token![if]>()?;
            Ok(Self::If(input.parse()?))
        } else if lookahead.peek(Token![let]) {
            input.parse::<Token![let]>()?;
            let pat = Pat::parse_single(input)?;
            input.parse::<Token![=]>()?;
            Ok(Self::Let {
                pat,
                expr: input.parse()?,
            })
        } else {
            Err(lookahead.error())
        }
    }
}

impl Clause {
    /// Wraps `inner` so it runs once for every binding this clause produces.
    pub fn wrap(&self, inner: TokenStream2) -> TokenStream2 {
        match self {
            Self::For {
                pat,
                source,
                short_circuit: false,
            } => quote! {
                for #pat in ::core::iter::IntoIterator::into_iter(#source) {
                    #inner
                }
            },
            Self::For {
                pat,
                source,
                short_circuit: true,
            } => {
                let builder = util::builder_ident();
                let label = util::exit_label();
                let builder_trait = util::get_builder_trait();
                let absorb_trait = util::get_absorb_trait();
                let source_trait = util::get_source_trait();
                let step = util::get_step_enum();

                quote! {
                    for __vessel_step in #source_trait::into_steps(#source) {
                        let #pat = match __vessel_step {
                            #step::Emit(__vessel_value) => __vessel_value,
                            #step::Halt(__vessel_halt) => {
                                #builder = #absorb_trait::absorb(#builder, __vessel_halt);
                                if #builder_trait::is_settled(&#builder) {
                                    break #label;
                                }
                                continue;
                            }
                        };
                        #inner
                    }
                }
            }
            Self::If(cond) => quote! {
                if #cond {
                    #inner
                }
            },
            Self::Let { pat, expr } => quote! {
                {
                    let #pat = #expr;
                    #inner
                }
            },
        }
    }
}
