use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate a model struct for a color space. The struct must have exactly
/// three named fields, one for each channel of the space.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each channel of the color.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();

    if field_names.iter().any(Option::is_none) {
        return quote! {
            compile_error!("Model fields must be named.")
        }
        .into();
    }

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let derives = match syn::Attribute::parse_outer.parse2(quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
    }) {
        Ok(attrs) => attrs,
        Err(err) => return err.to_compile_error().into(),
    };
    input.attrs.extend(derives);

    let struct_name = input.ident.clone();
    let model_name = proc_macro2::Literal::string(&struct_name.to_string().to_case(Case::Camel));

    let new_impl = quote! {
        impl #struct_name {
            /// Name of the model, as used in log output.
            pub const NAME: &'static str = #model_name;

            /// Create a new model from its three channels.
            pub fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Convert this model into generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }
        }

        impl From<crate::color::Components> for #struct_name {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl From<#struct_name> for crate::color::Components {
            fn from(value: #struct_name) -> Self {
                value.to_components()
            }
        }

        impl crate::models::Model for #struct_name {
            fn to_raw(&self, alpha: crate::color::Component) -> crate::value::RawValue {
                crate::value::RawValue::Tuple(vec![
                    self.#field1,
                    self.#field2,
                    self.#field3,
                    alpha,
                ])
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
