use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;
use syn::Lifetime;

/// Gets the path of the builder trait
pub fn get_builder_trait() -> TokenStream {
    quote!(::vessel::build::Builder)
}

/// Gets the path of the trait used to hand halts over to a builder
pub fn get_absorb_trait() -> TokenStream {
    quote!(::vessel::build::Absorb)
}

pub fn get_buildable_trait() -> TokenStream {
    quote!(::vessel::build::Buildable)
}

pub fn get_source_trait() -> TokenStream {
    quote!(::vessel::source::Source)
}

pub fn get_step_enum() -> TokenStream {
    quote!(::vessel::source::Step)
}

/// The identifier holding the builder while the comprehension runs
pub fn builder_ident() -> Ident {
    Ident::new("__vessel_builder", Span::mixed_site())
}

/// The label of the block wrapping every loop, used to leave all of them at once
pub fn exit_label() -> Lifetime {
    Lifetime::new("'__vessel_comprehension", Span::mixed_site())
}
