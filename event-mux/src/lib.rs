//! A derive macro that multiplexes several contract events into one enum.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, spanned::Spanned, Data, DataEnum, DeriveInput, Error, Fields, Ident, Type};

/// Derives the [`EthLogDecode`] trait and a couple of helpers for an enum of events.
///
/// Derivation is only possible for `enum`s with single-value unnamed variants
/// whose types are distinct [`EthEvent`]s. A log decodes into the first variant
/// whose event decodes it.
///
/// Besides the trait the enum gets two inherent functions:
///
/// * `signatures()` returns the topic0 of every variant in declaration order,
///   ready to be used as a log filter
/// * `event_name(&self)` returns the ABI name of the decoded event
///
/// # Examples:
///
/// ```
/// use ethers::prelude::{abigen, EthLogDecode};
/// use event_mux::EventMux;
///
/// abigen!(
///    IERC20,
///    r#"[
///        event Transfer(address indexed from, address indexed to, uint256 value)
///        event Approval(address indexed owner, address indexed spender, uint256 value)
///    ]"#,
/// );
///
/// abigen!(
///     ISystemConfig,
///     r#"[
///         event ConfigUpdate(uint256 indexed version, uint8 indexed updateType, bytes data)
///     ]"#,
/// );
///
/// #[derive(EventMux)]
/// enum Events {
///     Approval(ApprovalFilter),
///     Transfer(TransferFilter),
///     ConfigUpdate(ConfigUpdateFilter),
/// }
///
/// assert_eq!(Events::signatures().len(), 3);
/// ```
///
/// The variant types should all be different:
///
/// ```compile_fail
/// use ethers::prelude::{abigen, EthLogDecode};
/// use event_mux::EventMux;
///
/// abigen!(
///    IERC20,
///    r#"[
///        event Transfer(address indexed from, address indexed to, uint256 value)
///    ]"#,
/// );
///
/// #[derive(EventMux)]
/// enum Events {
///     Transfer(TransferFilter),
///     Transfer2(TransferFilter),
/// }
/// ```
///
/// Structs are rejected:
///
/// ```compile_fail
/// use event_mux::EventMux;
///
/// #[derive(EventMux)]
/// struct Events {
///     count: u64,
/// }
/// ```
///
/// And so are variants with named or several fields:
///
/// ```compile_fail
/// use ethers::prelude::{abigen, EthLogDecode};
/// use event_mux::EventMux;
///
/// abigen!(
///    IERC20,
///    r#"[
///        event Transfer(address indexed from, address indexed to, uint256 value)
///        event Approval(address indexed owner, address indexed spender, uint256 value)
///    ]"#,
/// );
///
/// #[derive(EventMux)]
/// enum Events {
///     Both(TransferFilter, ApprovalFilter),
/// }
/// ```
///
/// [`EthLogDecode`]: https://docs.rs/ethers/latest/ethers/contract/trait.EthLogDecode.html
/// [`EthEvent`]: https://docs.rs/ethers/latest/ethers/contract/trait.EthEvent.html
#[proc_macro_derive(EventMux)]
pub fn event_mux_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Enum(e) => expand_enum(&input.ident, e),
        Data::Struct(_) => Err(Error::new(
            input.span(),
            "EventMux cannot be derived for structures",
        )),
        Data::Union(_) => Err(Error::new(input.span(), "EventMux cannot be derived for unions")),
    };

    expanded.unwrap_or_else(Error::into_compile_error).into()
}

fn expand_enum(name: &Ident, e: &DataEnum) -> syn::Result<TokenStream2> {
    if e.variants.is_empty() {
        return Err(Error::new(
            name.span(),
            "EventMux enum should have at least one variant",
        ));
    }

    let (mut types, mut idents): (Vec<Type>, Vec<Ident>) = (vec![], vec![]);
    let mut seen = vec![];

    for variant in &e.variants {
        let ty = match &variant.fields {
            Fields::Unnamed(u) if u.unnamed.len() == 1 => u.unnamed[0].ty.clone(),
            Fields::Unnamed(_) => {
                return Err(Error::new(
                    variant.span(),
                    "EventMux can only be derived for enum with unnamed fields with a single field",
                ))
            }
            _ => {
                return Err(Error::new(
                    variant.span(),
                    "EventMux can only be derived for enum with unnamed fields",
                ))
            }
        };

        // `syn::Type` only compares with the `extra-traits` feature.
        let key = quote!(#ty).to_string();
        if seen.contains(&key) {
            return Err(Error::new(
                variant.span(),
                "EventMux enum should contain variants of different types",
            ));
        }

        seen.push(key);
        types.push(ty);
        idents.push(variant.ident.clone());
    }

    Ok(quote! {
        impl ethers::contract::EthLogDecode for #name {
            fn decode_log(log: &ethers::abi::RawLog) -> core::result::Result<Self, ethers::abi::Error> {
                #(
                    if let Ok(event) = <#types as ethers::contract::EthLogDecode>::decode_log(log) {
                        return Ok(#name::#idents(event));
                    }
                )*

                Err(ethers::abi::Error::InvalidData)
            }
        }

        impl #name {
            /// Signatures of all the multiplexed events.
            pub fn signatures() -> ::std::vec::Vec<ethers::types::H256> {
                ::std::vec![
                    #(<#types as ethers::contract::EthEvent>::signature()),*
                ]
            }

            /// ABI name of the event.
            pub fn event_name(&self) -> ::std::borrow::Cow<'static, str> {
                match self {
                    #(
                        #name::#idents(_) => <#types as ethers::contract::EthEvent>::name(),
                    )*
                }
            }
        }
    })
}
