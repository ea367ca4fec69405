use quote::{format_ident, quote};
use proc_macro::TokenStream;
use syn::DeriveInput;

pub fn impl_component(ast: &DeriveInput) -> TokenStream {
    let name = &ast.ident;

    let name_str = name.to_string().to_uppercase();
    let id_name = format_ident!("__ASPECT_ECS_COMPONENT_ID_OF_{}", name_str);

    let gen = quote! {
        aspect_ecs::lazy_static! {
            static ref #id_name: aspect_ecs::components::ComponentId =
                aspect_ecs::components::ComponentId::allocate(::std::any::type_name::<#name>());
        }

        impl aspect_ecs::components::Component for #name {
            #[inline(always)]
            fn component_id() -> aspect_ecs::components::ComponentId {
                *#id_name
            }
        }
    };
    gen.into()
}
