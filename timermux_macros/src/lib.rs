// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Consumer binding attributes for the timermux dispatcher
//!
//! The dispatcher's vector handlers call two well-known symbols, one per
//! consumer subsystem. These attributes export a plain `fn(u8)` under the
//! matching symbol.

extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::spanned::Spanned;
use syn::{parse_macro_input, FnArg, ItemFn, ReturnType};

/// The two consumer entry points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Pulse,
    Frequency,
}

impl Entry {
    fn symbol(self) -> &'static str {
        match self {
            Entry::Pulse => "__timermux_pulse_interrupt",
            Entry::Frequency => "__timermux_frequency_interrupt",
        }
    }

    fn attribute(self) -> &'static str {
        match self {
            Entry::Pulse => "pulse_handler",
            Entry::Frequency => "frequency_handler",
        }
    }
}

/// Check the handler shape: `fn name(index: u8)`, synchronous, not generic,
/// nothing returned
fn validate(entry: Entry, func: &ItemFn) -> syn::Result<()> {
    let sig = &func.sig;
    let name = entry.attribute();

    if let Some(asyncness) = &sig.asyncness {
        return Err(syn::Error::new(
            asyncness.span(),
            format!("#[{}] functions run in interrupt context and cannot be async", name),
        ));
    }
    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new(
            sig.generics.span(),
            format!("#[{}] functions cannot be generic", name),
        ));
    }
    if let Some(variadic) = &sig.variadic {
        return Err(syn::Error::new(
            variadic.span(),
            format!("#[{}] functions cannot be variadic", name),
        ));
    }
    if sig.inputs.len() != 1 {
        return Err(syn::Error::new(
            sig.inputs.span(),
            format!("#[{}] functions take exactly one argument: the timer index (u8)", name),
        ));
    }
    if let Some(FnArg::Receiver(receiver)) = sig.inputs.first() {
        return Err(syn::Error::new(
            receiver.span(),
            format!("#[{}] cannot be applied to methods", name),
        ));
    }
    if let ReturnType::Type(_, ty) = &sig.output {
        return Err(syn::Error::new(
            ty.span(),
            format!("#[{}] functions must not return a value", name),
        ));
    }
    Ok(())
}

fn expand(entry: Entry, attr: TokenStream2, func: ItemFn) -> syn::Result<TokenStream2> {
    if !attr.is_empty() {
        return Err(syn::Error::new(
            attr.span(),
            format!("#[{}] takes no arguments", entry.attribute()),
        ));
    }
    validate(entry, &func)?;

    let ident = &func.sig.ident;
    let symbol = entry.symbol();
    let trampoline = format_ident!("__timermux_{}_{}", entry.attribute(), ident);

    // The index argument is declared as u8 here, so a handler taking any
    // other type fails to compile at the call below.
    Ok(quote! {
        #func

        #[doc(hidden)]
        #[export_name = #symbol]
        pub extern "C" fn #trampoline(index: u8) {
            #ident(index)
        }
    })
}

fn run(entry: Entry, attr: TokenStream, item: TokenStream) -> TokenStream {
    let func = parse_macro_input!(item as ItemFn);
    match expand(entry, attr.into(), func) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Bind a function as the pulse generation interrupt entry point
///
/// Called with the logical TC index whenever a TC configured for
/// compare/match raises its interrupt.
///
/// # Example
///
/// ```rust,ignore
/// #[timermux::pulse_handler]
/// fn on_pulse(index: u8) {
///     PULSES[usize::from(index)].step();
/// }
/// ```
#[proc_macro_attribute]
pub fn pulse_handler(attr: TokenStream, item: TokenStream) -> TokenStream {
    run(Entry::Pulse, attr, item)
}

/// Bind a function as the frequency measurement interrupt entry point
///
/// Called with the logical TC index whenever a TC configured for input
/// capture on channel 0 raises its interrupt.
#[proc_macro_attribute]
pub fn frequency_handler(attr: TokenStream, item: TokenStream) -> TokenStream {
    run(Entry::Frequency, attr, item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn items(tokens: TokenStream2) -> Vec<syn::Item> {
        syn::parse2::<syn::File>(tokens).unwrap().items
    }

    fn error_of(entry: Entry, func: ItemFn) -> String {
        expand(entry, TokenStream2::new(), func).unwrap_err().to_string()
    }

    #[test]
    fn test_pulse_handler_exports_symbol() {
        let func: ItemFn = parse_quote! {
            fn on_pulse(index: u8) {}
        };
        let output = expand(Entry::Pulse, TokenStream2::new(), func).unwrap();
        let text = output.to_string();

        assert!(text.contains("\"__timermux_pulse_interrupt\""));
        assert!(text.contains("__timermux_pulse_handler_on_pulse"));
        assert!(text.contains("extern \"C\""));
        assert_eq!(items(output).len(), 2);
    }

    #[test]
    fn test_frequency_handler_exports_symbol() {
        let func: ItemFn = parse_quote! {
            pub fn measure(tc: u8) { let _ = tc; }
        };
        let text = expand(Entry::Frequency, TokenStream2::new(), func)
            .unwrap()
            .to_string();

        assert!(text.contains("\"__timermux_frequency_interrupt\""));
        assert!(!text.contains("__timermux_pulse_interrupt"));
    }

    #[test]
    fn test_annotated_function_is_kept() {
        let func: ItemFn = parse_quote! {
            #[inline]
            fn on_pulse(index: u8) { let _ = index; }
        };
        let output = expand(Entry::Pulse, TokenStream2::new(), func.clone()).unwrap();
        match &items(output)[0] {
            syn::Item::Fn(kept) => assert_eq!(quote!(#kept).to_string(), quote!(#func).to_string()),
            other => panic!("unexpected item {:?}", quote!(#other).to_string()),
        }
    }

    #[test]
    fn test_rejects_async() {
        let func: ItemFn = parse_quote! { async fn on_pulse(index: u8) {} };
        assert!(error_of(Entry::Pulse, func).contains("cannot be async"));
    }

    #[test]
    fn test_rejects_wrong_arity() {
        let none: ItemFn = parse_quote! { fn on_pulse() {} };
        assert!(error_of(Entry::Pulse, none).contains("exactly one argument"));

        let two: ItemFn = parse_quote! { fn on_capture(index: u8, extra: u32) {} };
        assert!(error_of(Entry::Frequency, two).contains("exactly one argument"));
    }

    #[test]
    fn test_rejects_return_value() {
        let func: ItemFn = parse_quote! { fn on_capture(index: u8) -> bool { true } };
        assert!(error_of(Entry::Frequency, func).contains("must not return"));
    }

    #[test]
    fn test_rejects_generics() {
        let func: ItemFn = parse_quote! { fn on_pulse<T>(index: u8) {} };
        assert!(error_of(Entry::Pulse, func).contains("cannot be generic"));
    }

    #[test]
    fn test_rejects_arguments_to_attribute() {
        let func: ItemFn = parse_quote! { fn on_pulse(index: u8) {} };
        let err = expand(Entry::Pulse, quote!(tc3), func).unwrap_err();
        assert!(err.to_string().contains("takes no arguments"));
    }
}
