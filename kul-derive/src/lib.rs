//! Derive macro implementation used by `kul-core`.
//!
//! `kul-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of `crate::Unit`,
//! `crate::Named` and the descriptor types at the `kul-core` crate root, so it is intended to be used by `kul-core`
//! (or by crates that expose an identical crate-root API).
//!
//! Most users should depend on `kul` instead and use the predefined units.
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements:
//!
//! - `crate::Named for MyUnit`, holding the unit's `NamedUnit` descriptor
//! - `crate::Unit for MyUnit`, with every constant read from that descriptor
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "m"`: displayed unit symbol
//! - `dimension = Dimension::length()`: a constant expression of type `Dimension`
//! - `magnitude = 254 / 10000`: exact size in SI base units, an integer or a fraction of integers (default `1`)
//! - `origin = 27315 / 100`: SI value of the unit's zero; only absolute units have one

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitInt, LitStr, Token,
};

/// Derive `crate::Named` and `crate::Unit`.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing at least `symbol` and `dimension`.
///
/// This macro is intended for use by `kul-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let dimension = &unit_attr.dimension;
    let magnitude = unit_attr.magnitude.unwrap_or(Fraction::ONE);
    let (origin, difference) = match &unit_attr.origin {
        Some(origin) => (
            quote! { ::core::option::Option::Some(#origin) },
            quote! { crate::Relative<#name> },
        ),
        None => (quote! { ::core::option::Option::None }, quote! { #name }),
    };

    let expanded = quote! {
        impl crate::Named for #name {
            const NAMED: crate::NamedUnit = crate::NamedUnit::new(#symbol, #dimension, #magnitude, #origin);
        }

        impl crate::Unit for #name {
            const DIMENSION: crate::Dimension = <Self as crate::Named>::NAMED.dimension();
            const MAGNITUDE: crate::Rational = <Self as crate::Named>::NAMED.magnitude();
            const ORIGIN: crate::Origin = <Self as crate::Named>::NAMED.origin();
            const TERMS: crate::CanonicalProduct = crate::CanonicalProduct::of(<Self as crate::Named>::NAMED);
            type Difference = #difference;
        }
    };

    Ok(expanded)
}

/// An exact `numerator / denominator` literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    const ONE: Self = Self {
        numerator: 1,
        denominator: 1,
    };
}

impl Parse for Fraction {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let negative = input.peek(Token![-]);
        if negative {
            input.parse::<Token![-]>()?;
        }
        let numerator: LitInt = input.parse()?;
        let mut numerator = numerator.base10_parse::<i64>()?;
        if negative {
            numerator = -numerator;
        }

        let mut denominator = 1;
        if input.peek(Token![/]) {
            input.parse::<Token![/]>()?;
            let lit: LitInt = input.parse()?;
            denominator = lit.base10_parse::<i64>()?;
            if denominator == 0 {
                return Err(syn::Error::new(lit.span(), "denominator must be non-zero"));
            }
        }

        Ok(Fraction {
            numerator,
            denominator,
        })
    }
}

impl ToTokens for Fraction {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let numerator = self.numerator;
        let denominator = self.denominator;
        tokens.extend(quote! { crate::Rational::new(#numerator, #denominator) });
    }
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    dimension: Expr,
    magnitude: Option<Fraction>,
    origin: Option<Fraction>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut dimension: Option<Expr> = None;
        let mut magnitude: Option<Fraction> = None;
        let mut origin: Option<Fraction> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "dimension" => {
                    dimension = Some(input.parse()?);
                }
                "magnitude" => {
                    let value: Fraction = input.parse()?;
                    if value.numerator == 0 {
                        return Err(syn::Error::new(ident.span(), "magnitude must be non-zero"));
                    }
                    magnitude = Some(value);
                }
                "origin" => {
                    origin = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;

        Ok(UnitAttribute {
            symbol,
            dimension,
            magnitude,
            origin,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}
